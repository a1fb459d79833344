//! Plain scalar typing.
//!
//! This is a surface lexical test used for coloring only: it does not check
//! digit placement around the decimal point, exponents, or radix prefixes.

/// The type a plain scalar is rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Boolean,
    Null,
    Number,
    String,
}

impl ScalarType {
    /// Classifies the literal text of a plain scalar.
    pub fn of(text: &str) -> Self {
        match text {
            "true" | "false" => Self::Boolean,
            "null" | "~" => Self::Null,
            _ if is_number(text) => Self::Number,
            _ => Self::String,
        }
    }
}

/// True when `text` has at least one digit, at most one `.`, a `-` only in
/// first position, and nothing else.
pub fn is_number(text: &str) -> bool {
    let mut has_digit = false;
    let mut has_dot = false;
    for (i, ch) in text.chars().enumerate() {
        match ch {
            '0'..='9' => has_digit = true,
            '.' if !has_dot => has_dot = true,
            '-' if i == 0 => {}
            _ => return false,
        }
    }
    has_digit
}
