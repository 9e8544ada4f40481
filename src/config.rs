// Fixed input/output locations, resolved once at startup

use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};

// Layout convention of the fund data project this tool feeds:
// the CSV export lives under public/, the generated list under src/
const CSV_RELATIVE: [&str; 4] = ["public", "data", "fund", "基金基本資料.csv"];
const JSON_RELATIVE: [&str; 3] = ["src", "data", "fund-list.json"];

/// Paths - Where to read the CSV export and write the JSON list
///
/// Plain values: resolved once in the binary and passed into the
/// extraction pipeline, so tests can point them anywhere.
#[derive(Debug, Clone)]
pub struct Paths {
    pub csv_path: PathBuf,
    pub json_path: PathBuf,
}

impl Paths {
    /// Apply the fixed relative layout to a project base directory.
    pub fn from_base_dir(base: &Path) -> Self {
        Paths {
            csv_path: CSV_RELATIVE.iter().fold(base.to_path_buf(), |p, s| p.join(s)),
            json_path: JSON_RELATIVE.iter().fold(base.to_path_buf(), |p, s| p.join(s)),
        }
    }

    /// Resolve the base directory as two levels above the executable.
    pub fn from_exe_location() -> Result<Self> {
        let exe = std::env::current_exe().context("Failed to locate the running executable")?;
        let base = exe
            .parent()
            .and_then(Path::parent)
            .ok_or_else(|| anyhow!("Executable has no grandparent directory: {}", exe.display()))?;

        Ok(Paths::from_base_dir(base))
    }
}
