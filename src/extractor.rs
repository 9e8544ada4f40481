// Fund list extraction - fixed-layout CSV → ordered FundRecord list
// Layout convention: 2 metadata lines, 1 header line, N data lines

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Header cell naming the fund code column
pub const FUND_ID_HEADER: &str = "基金碼";

/// Header cell naming the fund full-name column
pub const FUND_NAME_HEADER: &str = "基金全稱";

// Lines 1-2 are export metadata, line 3 is the header
const METADATA_LINES: usize = 2;

// ============================================================================
// CORE TYPES
// ============================================================================

/// FundRecord - One fund's identifier and full name
///
/// Both fields are trimmed and guaranteed non-empty by the extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundRecord {
    pub id: String,
    pub name: String,
}

/// Extraction - The accepted records plus a tally of dropped rows
///
/// Rows are dropped when they are too short to cover both resolved
/// columns or when either value is empty after trimming. The tally is
/// informational; it never affects the accepted records.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub records: Vec<FundRecord>,
    pub skipped: usize,
}

// ============================================================================
// HEADER RESOLUTION
// ============================================================================

/// Locate the fund code and fund name columns in the header line.
///
/// The header is split on plain commas (the exports never quote header
/// cells) and matched by exact text after trimming each cell. Missing
/// either column is fatal: the error lists the headers that were found
/// so the mismatch can be diagnosed from the trace alone.
///
/// # Returns
/// * `Ok((id_index, name_index))` - Positional indices into data rows
/// * `Err(anyhow::Error)` - One or both required columns absent
pub fn resolve_columns(header_line: &str) -> Result<(usize, usize)> {
    let headers: Vec<&str> = header_line.split(',').map(str::trim).collect();

    let id_index = headers.iter().position(|h| *h == FUND_ID_HEADER);
    let name_index = headers.iter().position(|h| *h == FUND_NAME_HEADER);

    match (id_index, name_index) {
        (Some(id), Some(name)) => Ok((id, name)),
        _ => bail!(
            "Required column(s) not found: expected '{}' and '{}', available headers: {:?}",
            FUND_ID_HEADER,
            FUND_NAME_HEADER,
            headers
        ),
    }
}

// ============================================================================
// ROW PARSING
// ============================================================================

/// Parse one data line with CSV quoting rules and pull out (id, name).
///
/// Unlike the header, data rows can carry quoted cells with embedded
/// commas, so each line goes through the csv reader. Returns None when
/// the row is too short or either value trims to empty.
fn parse_row(line: &str, id_index: usize, name_index: usize) -> Option<FundRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    let record = reader.records().next()?.ok()?;

    let id = record.get(id_index)?.trim();
    let name = record.get(name_index)?.trim();

    if id.is_empty() || name.is_empty() {
        return None;
    }

    Some(FundRecord {
        id: id.to_string(),
        name: name.to_string(),
    })
}

/// Extract the ordered fund list from decoded source text.
///
/// Structural checkpoint first (at least metadata + header must be
/// present), then header resolution, then one pass over the data lines.
/// Row order is preserved; rejected rows only bump the skipped tally.
pub fn extract_fund_list(text: &str) -> Result<Extraction> {
    let lines: Vec<&str> = text.lines().collect();

    if lines.len() < METADATA_LINES + 1 {
        bail!(
            "CSV file is too short: expected at least {} lines, found {}",
            METADATA_LINES + 1,
            lines.len()
        );
    }

    let (id_index, name_index) = resolve_columns(lines[METADATA_LINES])?;

    let mut records = Vec::new();
    let mut skipped = 0;

    for line in &lines[METADATA_LINES + 1..] {
        match parse_row(line, id_index, name_index) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    Ok(Extraction { records, skipped })
}
