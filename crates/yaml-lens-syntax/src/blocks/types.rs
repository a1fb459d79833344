/// How a block is placed relative to its owner when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlockAlignment {
    /// Nested visually under the owning key.
    #[default]
    AlignedToParent,
}

/// A foldable run of tokens owned by a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Block {
    /// Index of the owning `KEY` token.
    pub start_token: usize,
    /// Index of the last token in the block (inclusive).
    pub end_token: usize,
    pub alignment: BlockAlignment,
    /// Label shown in place of the folded tokens.
    pub fold_summary: String,
}

impl Block {
    pub fn new(start_token: usize, end_token: usize) -> Self {
        Self {
            start_token,
            end_token,
            alignment: BlockAlignment::AlignedToParent,
            fold_summary: fold_summary(end_token - start_token),
        }
    }

    /// Tokens hidden when the block is folded (everything after the key).
    pub fn token_count(&self) -> usize {
        self.end_token - self.start_token
    }

    /// True if `other` lies entirely within this block.
    pub fn contains(&self, other: &Block) -> bool {
        self.start_token <= other.start_token && other.end_token <= self.end_token
    }
}

pub fn fold_summary(tokens: usize) -> String {
    match tokens {
        1 => "1 token".to_string(),
        n => format!("{n} tokens"),
    }
}
