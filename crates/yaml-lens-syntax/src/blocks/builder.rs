use crate::text::TextBuffer;
use crate::token::Token;
use crate::token_kind::TokenKind;

use super::{indent::indent_of, types::Block};

/// Computes blocks for a token stream produced from `text`.
pub fn build_blocks(text: &TextBuffer, tokens: &[Token]) -> Vec<Block> {
    BlockBuilder::new(text, tokens).finish()
}

/// Post-pass over a finished token stream.
///
/// Key indentation is computed once up front; every other token has no
/// indentation entry.
pub struct BlockBuilder<'a> {
    tokens: &'a [Token],
    key_indents: Vec<Option<usize>>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(text: &TextBuffer, tokens: &'a [Token]) -> Self {
        let key_indents = tokens
            .iter()
            .map(|t| match t.kind {
                TokenKind::KEY => indent_of(text.as_units(), t.start()),
                _ => None,
            })
            .collect();
        Self {
            tokens,
            key_indents,
        }
    }

    pub fn finish(self) -> Vec<Block> {
        let mut out = Vec::new();
        for (i, token) in self.tokens.iter().enumerate() {
            if token.kind != TokenKind::KEY {
                continue;
            }
            let Some(indent) = self.key_indents[i] else {
                log::trace!("key token {i} lies outside the buffer, skipped");
                continue;
            };
            if self.has_inline_value(i) {
                continue;
            }
            let end = self.block_end(i, indent);
            if end >= self.body_start(i) {
                out.push(Block::new(i, end));
            }
        }
        out
    }

    fn kind_at(&self, index: usize) -> Option<TokenKind> {
        self.tokens.get(index).map(|t| t.kind)
    }

    /// `key: scalar` on one entry: a leaf, nothing to fold.
    fn has_inline_value(&self, key: usize) -> bool {
        self.kind_at(key + 1) == Some(TokenKind::COLON)
            && self.kind_at(key + 2).is_some_and(TokenKind::is_inline_value)
    }

    /// First token that belongs to the key's content rather than the entry
    /// itself. A block must reach at least this far to be worth folding.
    fn body_start(&self, key: usize) -> usize {
        match self.kind_at(key + 1) {
            Some(TokenKind::COLON) => key + 2,
            _ => key + 1,
        }
    }

    /// The token before the next key at the same or a shallower indentation,
    /// or the last token.
    fn block_end(&self, key: usize, indent: usize) -> usize {
        self.key_indents
            .iter()
            .enumerate()
            .skip(key + 1)
            .find(|(_, other)| other.is_some_and(|other| other <= indent))
            .map_or(self.tokens.len() - 1, |(closer, _)| closer - 1)
    }
}
