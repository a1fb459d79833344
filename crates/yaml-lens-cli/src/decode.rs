use anyhow::{Context, Result};
use std::path::Path;
use yaml_lens_syntax::TextBuffer;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Reads a file into a buffer, see [`decode`].
pub fn read_file(path: &Path) -> Result<TextBuffer> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(decode(&bytes))
}

/// UTF-16 when the bytes open with a UTF-16 byte-order mark, otherwise
/// UTF-8 with invalid sequences replaced. The mark itself is dropped.
pub fn decode(bytes: &[u8]) -> TextBuffer {
    if let Some(rest) = bytes.strip_prefix(UTF16_LE_BOM) {
        return TextBuffer::from_utf16(utf16_units(rest, u16::from_le_bytes));
    }
    if let Some(rest) = bytes.strip_prefix(UTF16_BE_BOM) {
        return TextBuffer::from_utf16(utf16_units(rest, u16::from_be_bytes));
    }
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    TextBuffer::from(String::from_utf8_lossy(bytes).as_ref())
}

fn utf16_units(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Vec<u16> {
    let chunks = bytes.chunks_exact(2);
    let odd = !chunks.remainder().is_empty();
    let mut units: Vec<u16> = chunks.map(|pair| unit([pair[0], pair[1]])).collect();
    if odd {
        units.push(char::REPLACEMENT_CHARACTER as u16);
    }
    units
}

/// `.yaml` or `.yml`, any case.
pub fn is_yaml_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}
