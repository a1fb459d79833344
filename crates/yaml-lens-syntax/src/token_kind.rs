//! TokenKind enum for every token the YAML tokenizer can emit.
//!
//! Kinds carry stable numeric ids so hosts that key their own tables on
//! integers (tooltips, theme maps) can round-trip them.

use crate::token::DisplayClass;

/// All token kinds produced by the tokenizer.
///
/// We use SCREAMING_CASE following the rust-analyzer convention for kinds.
/// `MAPPING` and `INDENT` are reserved ids: the tokenizer never emits them
/// but hosts may.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub enum TokenKind {
    /// Mapping key, plain or quoted
    KEY = 0,
    /// Plain scalar value that is not a boolean, null or number
    VALUE = 1,
    MAPPING = 2,
    /// Flow punctuation: `[`, `]`, `,`
    SEQUENCE = 3,
    /// `:` after a key
    COLON = 4,
    /// `-` sequence entry marker
    DASH = 5,
    /// Block scalar indicator: `|` or `>`
    SCALAR = 6,
    /// Quoted value
    STRING = 7,
    NUMBER = 8,
    BOOLEAN = 9,
    NULL = 10,
    /// `&name`
    ANCHOR = 11,
    /// `*name`
    ALIAS = 12,
    /// `!tag` or `!!tag`
    TAG = 13,
    /// `#` to end of line
    COMMENT = 14,
    INDENT = 15,
    /// Run of characters that cannot appear in a YAML document
    INVALID = 16,
}

impl TokenKind {
    /// Every kind, indexed by id.
    pub const ALL: [TokenKind; 17] = [
        Self::KEY,
        Self::VALUE,
        Self::MAPPING,
        Self::SEQUENCE,
        Self::COLON,
        Self::DASH,
        Self::SCALAR,
        Self::STRING,
        Self::NUMBER,
        Self::BOOLEAN,
        Self::NULL,
        Self::ANCHOR,
        Self::ALIAS,
        Self::TAG,
        Self::COMMENT,
        Self::INDENT,
        Self::INVALID,
    ];

    pub fn id(self) -> u32 {
        self as u32
    }

    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.get(usize::try_from(id).ok()?).copied()
    }

    /// Short human-readable label, for tooltips and debug output.
    pub fn name(self) -> &'static str {
        match self {
            Self::KEY => "Key",
            Self::VALUE => "Value",
            Self::MAPPING => "Mapping",
            Self::SEQUENCE => "Sequence",
            Self::COLON => "Colon",
            Self::DASH => "Dash",
            Self::SCALAR => "Scalar",
            Self::STRING => "String",
            Self::NUMBER => "Number",
            Self::BOOLEAN => "Boolean",
            Self::NULL => "Null",
            Self::ANCHOR => "Anchor",
            Self::ALIAS => "Alias",
            Self::TAG => "Tag",
            Self::COMMENT => "Comment",
            Self::INDENT => "Indent",
            Self::INVALID => "Invalid",
        }
    }

    /// Rendering class used to pick a color.
    pub fn display_class(self) -> DisplayClass {
        match self {
            Self::KEY | Self::BOOLEAN | Self::NULL => DisplayClass::Keyword,
            Self::ANCHOR | Self::ALIAS | Self::TAG => DisplayClass::Keyword,
            Self::MAPPING | Self::SEQUENCE | Self::COLON | Self::DASH | Self::SCALAR => {
                DisplayClass::Operator
            }
            Self::STRING => DisplayClass::String,
            Self::NUMBER => DisplayClass::Number,
            Self::COMMENT => DisplayClass::Comment,
            Self::INVALID => DisplayClass::Error,
            Self::VALUE | Self::INDENT => DisplayClass::Word,
        }
    }

    /// Kinds that make a key a leaf when they follow its colon.
    pub fn is_inline_value(self) -> bool {
        matches!(
            self,
            Self::VALUE | Self::STRING | Self::NUMBER | Self::BOOLEAN | Self::NULL
        )
    }
}

/// Name for a raw kind id, with an `Unknown: 0x########` fallback.
pub fn token_id_name(id: u32) -> String {
    match TokenKind::from_id(id) {
        Some(kind) => kind.name().to_string(),
        None => format!("Unknown: 0x{id:08X}"),
    }
}
