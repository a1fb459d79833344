//! # yaml-lens-syntax
//!
//! Single-pass lexical analysis and indentation folding for YAML documents,
//! built to drive a viewer: coloring, token alignment and code folding.
//! It does not build a YAML object model, resolve anchors, or validate
//! anything beyond individual characters.
//!
//! ## Architecture Overview
//!
//! ```text
//! UTF-16 text → Lexer → Tokens → BlockBuilder → Blocks
//!               (classify, scalar)   (indent)
//! ```
//!
//! ### 1. Lexer ([`lexer`] module)
//!
//! Dispatches each position on its [`CharClass`], remembers only the kind of
//! the last emitted token, and peeks past blanks for a `:` to tell keys from
//! values. Plain values are typed by [`ScalarType`].
//!
//! ```text
//! "port: 8080" → [KEY("port"), COLON, NUMBER("8080")]
//! ```
//!
//! ### 2. Block builder ([`blocks`] module)
//!
//! For each key that does not carry an inline value, the block runs until the
//! next key at the same or a shallower indentation.
//!
//! ## Module Structure
//!
//! ```text
//! yaml-lens-syntax/
//! ├── lib.rs          # This file - analyze() and Analysis
//! ├── text/           # TextBuffer (UTF-16 snapshot), Span, Cursor
//! ├── classify.rs     # CharClass for one code unit
//! ├── scalar.rs       # boolean / null / number / string typing
//! ├── token_kind.rs   # TokenKind ids, names, display classes
//! ├── token.rs        # Token, LayoutHints, DisplayClass
//! ├── lexer.rs        # The tokenizer
//! ├── blocks/         # Indentation-derived fold blocks
//! ├── summary.rs      # Document information and issues
//! └── dump.rs         # Text rendering for debugging and snapshots
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use yaml_lens_syntax::{analyze, TextBuffer, TokenKind};
//!
//! let text = TextBuffer::from("server:\n  port: 8080\n");
//! let analysis = analyze(&text);
//!
//! assert_eq!(analysis.tokens[0].kind, TokenKind::KEY);
//! assert_eq!(analysis.blocks.len(), 1);
//! assert_eq!(analysis.blocks[0].fold_summary, "4 tokens");
//! ```
//!
//! Analysis never fails: characters that cannot appear in YAML become
//! `INVALID` tokens with a diagnostic, and the scan always reaches the end.

pub mod blocks;
pub mod classify;
pub mod dump;
pub mod lexer;
pub mod scalar;
pub mod summary;
pub mod text;
pub mod token;
pub mod token_kind;

#[cfg(test)]
mod tests;

pub use blocks::{Block, BlockAlignment, build_blocks};
pub use classify::{CharClass, char_class};
pub use lexer::tokenize;
pub use scalar::ScalarType;
pub use summary::{Issue, Summary};
pub use text::{Span, TextBuffer};
pub use token::{DisplayClass, INVALID_CHARACTER, LayoutHints, Token};
pub use token_kind::{TokenKind, token_id_name};

/// The output of one analysis pass over one buffer snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub blocks: Vec<Block>,
}

impl Analysis {
    /// Source text of the token at `index`.
    pub fn token_text(&self, text: &TextBuffer, index: usize) -> Option<String> {
        self.tokens
            .get(index)
            .map(|t| text.slice_to_string(t.span))
    }
}

/// Tokenize `text` and build its blocks.
pub fn analyze(text: &TextBuffer) -> Analysis {
    let tokens = tokenize(text);
    let blocks = build_blocks(text, &tokens);
    log::debug!(
        "analyzed {} units: {} tokens, {} blocks",
        text.len(),
        tokens.len(),
        blocks.len()
    );
    Analysis { tokens, blocks }
}
