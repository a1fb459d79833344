//! Character classification for the tokenizer.
//!
//! Every UTF-16 code unit maps to exactly one [`CharClass`]. Only ASCII
//! units can be anything other than [`CharClass::Invalid`].

/// Closed set of character categories the tokenizer dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `"`
    DoubleQuote,
    /// `'`
    SingleQuote,
    /// `:`
    Colon,
    /// `&` (anchor marker)
    Ampersand,
    /// `*` (alias marker)
    Asterisk,
    /// `!` (tag marker)
    Exclamation,
    /// `|` (literal block indicator)
    Pipe,
    /// `>` (folded block indicator)
    GreaterThan,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// `,`
    Comma,
    /// Letters, digits, `_`, `.`, `/` and `-`: the units of a plain scalar.
    Word,
    /// Space, tab, CR, LF
    Space,
    /// `#`
    Comment,
    /// Anything else
    Invalid,
}

/// Classifies a single code unit.
pub fn char_class(unit: u16) -> CharClass {
    let Ok(byte) = u8::try_from(unit) else {
        return CharClass::Invalid;
    };
    match byte {
        b'"' => CharClass::DoubleQuote,
        b'\'' => CharClass::SingleQuote,
        b':' => CharClass::Colon,
        b'&' => CharClass::Ampersand,
        b'*' => CharClass::Asterisk,
        b'!' => CharClass::Exclamation,
        b'|' => CharClass::Pipe,
        b'>' => CharClass::GreaterThan,
        b'[' => CharClass::OpenBracket,
        b']' => CharClass::CloseBracket,
        b',' => CharClass::Comma,
        b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'.' | b'/' | b'-' => CharClass::Word,
        b' ' | b'\t' | b'\r' | b'\n' => CharClass::Space,
        b'#' => CharClass::Comment,
        _ => CharClass::Invalid,
    }
}

pub(crate) fn is_word(unit: u16) -> bool {
    char_class(unit) == CharClass::Word
}

pub(crate) fn is_inline_space(unit: u16) -> bool {
    unit == u16::from(b' ') || unit == u16::from(b'\t')
}

pub(crate) fn is_line_break(unit: u16) -> bool {
    unit == u16::from(b'\n') || unit == u16::from(b'\r')
}
