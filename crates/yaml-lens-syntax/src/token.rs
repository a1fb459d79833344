//! Tokens and their rendering metadata.

use std::ops::BitOr;

use crate::text::Span;
use crate::token_kind::TokenKind;

/// Diagnostic attached to every `INVALID` token.
pub const INVALID_CHARACTER: &str = "Invalid character for YAML file";

/// Coarse color class a renderer maps onto its theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayClass {
    Operator,
    Keyword,
    String,
    Number,
    Comment,
    Error,
    Word,
}

impl DisplayClass {
    pub const ALL: [DisplayClass; 7] = [
        Self::Operator,
        Self::Keyword,
        Self::String,
        Self::Number,
        Self::Comment,
        Self::Error,
        Self::Word,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Operator => "operator",
            Self::Keyword => "keyword",
            Self::String => "string",
            Self::Number => "number",
            Self::Comment => "comment",
            Self::Error => "error",
            Self::Word => "word",
        }
    }
}

/// Layout hints for a pretty-printing renderer, as a small flag set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LayoutHints(u8);

impl LayoutHints {
    pub const NONE: Self = Self(0);
    pub const STARTS_ON_NEW_LINE: Self = Self(1 << 0);
    pub const NEW_LINE_AFTER: Self = Self(1 << 1);
    pub const ADD_SPACE_BEFORE: Self = Self(1 << 2);
    pub const ADD_SPACE_AFTER: Self = Self(1 << 3);
    /// Align with the same token on neighbouring lines.
    pub const SAME_COLUMN: Self = Self(1 << 4);
    /// Exclude from "highlight similar tokens".
    pub const DISABLE_SIMILARITY_SEARCH: Self = Self(1 << 5);

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for LayoutHints {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

/// A classified span of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub layout: LayoutHints,
    /// Set only on `INVALID` tokens.
    pub diagnostic: Option<&'static str>,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span, layout: LayoutHints) -> Self {
        Self {
            kind,
            span,
            layout,
            diagnostic: None,
        }
    }

    pub fn invalid(span: Span) -> Self {
        Self {
            kind: TokenKind::INVALID,
            span,
            layout: LayoutHints::ADD_SPACE_BEFORE,
            diagnostic: Some(INVALID_CHARACTER),
        }
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }

    pub fn display_class(&self) -> DisplayClass {
        self.kind.display_class()
    }
}
