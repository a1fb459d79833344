//! Plain-text rendering of an analysis, one line per token and per block.
//!
//! Used by `yaml-lens-cli --dump` and by snapshot tests.

use std::fmt::Write;

use crate::Analysis;
use crate::text::TextBuffer;

/// `KIND@start..end "text"` per token, then `BLOCK@start..=end "key" summary`
/// per block.
pub fn dump(text: &TextBuffer, analysis: &Analysis) -> String {
    let mut out = String::new();
    for token in &analysis.tokens {
        let _ = writeln!(
            out,
            "{:?}@{}..{} {:?}",
            token.kind,
            token.start(),
            token.end(),
            text.slice_to_string(token.span)
        );
    }
    for block in &analysis.blocks {
        let key = analysis
            .token_text(text, block.start_token)
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "BLOCK@{}..={} {:?} {}",
            block.start_token, block.end_token, key, block.fold_summary
        );
    }
    out
}
