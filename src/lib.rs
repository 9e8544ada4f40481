// Fund List Extractor - Core Library
// Exposes the decode → extract → write pipeline for the CLI binary and tests

pub mod config;
pub mod decode;
pub mod extractor;
pub mod output;

// Re-export commonly used types
pub use config::Paths;
pub use decode::{decode_bytes, read_source, DecodedSource};
pub use extractor::{
    extract_fund_list, resolve_columns,
    Extraction, FundRecord,
    FUND_ID_HEADER, FUND_NAME_HEADER,
};
pub use output::write_fund_list;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
