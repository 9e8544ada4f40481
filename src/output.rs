// JSON output - pretty-printed fund list, written atomically

use crate::extractor::FundRecord;
use anyhow::{Context, Result};
use std::path::Path;

/// Serialize the fund list to `path` as a pretty-printed JSON array.
///
/// The destination directory is created when absent. The document is
/// written to a temporary sibling and renamed into place, so the
/// destination only ever holds a complete file (previous or new), never
/// a truncation from a failed run. Non-ASCII text is left unescaped.
pub fn write_fund_list(path: &Path, records: &[FundRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    let mut json = serde_json::to_string_pretty(records).context("Failed to serialize fund list")?;
    json.push('\n');

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json)
        .with_context(|| format!("Failed to write temporary file: {}", tmp_path.display()))?;
    std::fs::rename(&tmp_path, path)
        .with_context(|| format!("Failed to move output into place: {}", path.display()))?;

    Ok(())
}
