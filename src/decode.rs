// Source decoding - UTF-8 first, Big5 fallback
// Taiwanese fund exports ship in either encoding depending on the tool that produced them

use anyhow::{bail, Context, Result};
use encoding_rs::{BIG5, UTF_8};
use std::path::Path;

/// DecodedSource - Result of reading and decoding the source CSV
///
/// Keeps track of which encoding actually produced the text so the
/// caller can report when the fallback path was taken.
#[derive(Debug, Clone)]
pub struct DecodedSource {
    /// Full decoded text of the file
    pub text: String,
    /// Name of the encoding that decoded cleanly ("UTF-8" or "Big5")
    pub encoding: &'static str,
    /// True when UTF-8 failed and Big5 was used instead
    pub used_fallback: bool,
}

/// Read a source file and decode it with the UTF-8 → Big5 fallback policy.
///
/// Both attempts are explicit decode calls checked for malformed input;
/// a byte-order mark on the UTF-8 path is stripped. If neither encoding
/// decodes cleanly the error names both attempts.
///
/// # Returns
/// * `Ok(DecodedSource)` - Decoded text plus which encoding won
/// * `Err(anyhow::Error)` - Read failure or undecodable content
pub fn read_source(path: &Path) -> Result<DecodedSource> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read source file: {}", path.display()))?;

    decode_bytes(&bytes).with_context(|| format!("Failed to decode {}", path.display()))
}

/// Decode raw bytes: UTF-8 (BOM stripped) first, Big5 second.
pub fn decode_bytes(bytes: &[u8]) -> Result<DecodedSource> {
    // Encoding::decode sniffs and strips a leading BOM, and reports
    // whether any malformed sequences were replaced
    let (text, _, had_errors) = UTF_8.decode(bytes);
    if !had_errors {
        return Ok(DecodedSource {
            text: text.into_owned(),
            encoding: "UTF-8",
            used_fallback: false,
        });
    }

    let (text, _, had_errors) = BIG5.decode(bytes);
    if !had_errors {
        return Ok(DecodedSource {
            text: text.into_owned(),
            encoding: "Big5",
            used_fallback: true,
        });
    }

    bail!("Content is neither valid UTF-8 nor valid Big5");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_utf8() {
        let decoded = decode_bytes("基金碼,基金全稱\n".as_bytes()).unwrap();

        assert_eq!(decoded.text, "基金碼,基金全稱\n");
        assert_eq!(decoded.encoding, "UTF-8");
        assert!(!decoded.used_fallback, "Clean UTF-8 must not trigger the fallback");
    }

    #[test]
    fn test_utf8_bom_is_stripped() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("meta".as_bytes());

        let decoded = decode_bytes(&bytes).unwrap();
        assert_eq!(decoded.text, "meta", "BOM should not survive into the text");
    }

    #[test]
    fn test_big5_fallback() {
        // Encode real Big5 bytes, which are not valid UTF-8
        let (big5_bytes, _, _) = BIG5.encode("基金碼,基金全稱\n001,測試基金\n");
        assert!(std::str::from_utf8(&big5_bytes).is_err());

        let decoded = decode_bytes(&big5_bytes).unwrap();

        assert_eq!(decoded.text, "基金碼,基金全稱\n001,測試基金\n");
        assert_eq!(decoded.encoding, "Big5");
        assert!(decoded.used_fallback);
    }

    #[test]
    fn test_undecodable_bytes_fail() {
        // 0xFF 0xFF is malformed in UTF-8 and unmapped in Big5
        let result = decode_bytes(&[0x41, 0xFF, 0xFF, 0x42]);
        assert!(result.is_err(), "Bytes invalid in both encodings must error");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = read_source(Path::new("/no/such/fund/file.csv")).unwrap_err();
        assert!(err.to_string().contains("/no/such/fund/file.csv"));
    }
}
