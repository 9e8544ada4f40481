use anyhow::Result;

use fund_list::{extract_fund_list, read_source, write_fund_list, Paths};

fn main() -> Result<()> {
    println!("📋 Fund List Extractor - CSV → JSON");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let paths = Paths::from_exe_location()?;

    // 1. Read + decode source
    println!("\n📂 Reading CSV from: {}", paths.csv_path.display());
    let source = read_source(&paths.csv_path)?;
    if source.used_fallback {
        println!("⚠️  UTF-8 decode failed, using Big5");
    }

    // 2. Extract records
    let extraction = extract_fund_list(&source.text)?;
    println!("✓ Extracted {} funds", extraction.records.len());
    if extraction.skipped > 0 {
        println!("✓ Skipped {} rows with missing id or name", extraction.skipped);
    }

    // 3. Write JSON
    println!("\n💾 Writing fund list to: {}", paths.json_path.display());
    write_fund_list(&paths.json_path, &extraction.records)?;

    println!("\n✅ Success!");
    Ok(())
}
