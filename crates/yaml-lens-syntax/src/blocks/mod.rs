//! # Block Building
//!
//! Derives foldable blocks from the finished token stream. There is no
//! document tree: nesting is inferred from the indentation of key tokens and
//! stored as flat token-index ranges.
//!
//! ## Modules
//!
//! - **`indent`**: indentation column of the line a token sits on
//! - **`types`**: `Block` and its fold summary
//! - **`builder`**: `BlockBuilder`, the forward scan that closes each block
//!
//! ## Key Invariants
//!
//! - A block starts at a `KEY` token and ends before the next key whose
//!   indentation is less than or equal to its own
//! - Blocks nest but never partially overlap
//! - Keys with an inline scalar value (`port: 80`) never open a block
//!
//! Each key may rescan the remaining tokens, so building is quadratic in the
//! token count in the worst case.

pub mod builder;
pub mod indent;
pub mod types;

pub use builder::{BlockBuilder, build_blocks};
pub use indent::{TAB_WIDTH, indent_of};
pub use types::{Block, BlockAlignment, fold_summary};
