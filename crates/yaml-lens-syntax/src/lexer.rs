//! # Lexer - Tokenizing YAML Source
//!
//! A single left-to-right pass over UTF-16 code units. Each position is
//! dispatched on its [`CharClass`]; whitespace is skipped without a token,
//! everything else lands in exactly one token.
//!
//! ## Disambiguation Context
//!
//! The lexer keeps no indentation stack. Whether a plain run is a key, a
//! value or a list marker is decided from two local facts only:
//!
//! - the kind of the previously emitted token, and
//! - the first non-blank unit after the run (a `:` makes it a key).
//!
//! ```
//! use yaml_lens_syntax::{lexer::tokenize, TextBuffer, TokenKind};
//!
//! let text = TextBuffer::from("port: 8080");
//! let kinds: Vec<_> = tokenize(&text).iter().map(|t| t.kind).collect();
//! assert_eq!(kinds, [TokenKind::KEY, TokenKind::COLON, TokenKind::NUMBER]);
//! ```
//!
//! Malformed input never fails: unrecognized characters become `INVALID`
//! tokens carrying [`INVALID_CHARACTER`].
//!
//! ## Known Simplification
//!
//! Block scalar indicators (`|`, `>`) are emitted as single tokens. The lines
//! of the block body are then tokenized as ordinary YAML, so colons and
//! dashes inside literal text are highlighted as structure.
//!
//! [`INVALID_CHARACTER`]: crate::token::INVALID_CHARACTER

use crate::classify::{CharClass, char_class, is_inline_space, is_line_break, is_word};
use crate::scalar::ScalarType;
use crate::text::{Cursor, Span, TextBuffer};
use crate::token::{LayoutHints, Token};
use crate::token_kind::TokenKind;

const DASH: u16 = b'-' as u16;
const COLON: u16 = b':' as u16;
const BANG: u16 = b'!' as u16;
const BACKSLASH: u16 = b'\\' as u16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quote {
    Double,
    Single,
}

impl Quote {
    fn unit(self) -> u16 {
        match self {
            Quote::Double => u16::from(b'"'),
            Quote::Single => u16::from(b'\''),
        }
    }
}

/// Tokenize the whole buffer.
///
/// Tokens come out in strictly increasing offset order, never overlap, and
/// together with the skipped whitespace cover the entire input.
pub fn tokenize(text: &TextBuffer) -> Vec<Token> {
    Lexer::new(text.as_units()).run()
}

struct Lexer<'a> {
    cur: Cursor<'a>,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    fn new(units: &'a [u16]) -> Self {
        Self {
            cur: Cursor::new(units),
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Token> {
        while let Some(unit) = self.cur.peek() {
            match char_class(unit) {
                CharClass::Colon => self.single(
                    TokenKind::COLON,
                    LayoutHints::ADD_SPACE_AFTER
                        | LayoutHints::SAME_COLUMN
                        | LayoutHints::DISABLE_SIMILARITY_SEARCH,
                ),
                CharClass::Comment => self.comment(),
                CharClass::Ampersand => self.marked_name(TokenKind::ANCHOR),
                CharClass::Asterisk => self.marked_name(TokenKind::ALIAS),
                CharClass::Exclamation => self.tag(),
                CharClass::Pipe | CharClass::GreaterThan => {
                    self.single(TokenKind::SCALAR, LayoutHints::ADD_SPACE_AFTER)
                }
                CharClass::Space => {
                    self.cur.bump_while(|u| char_class(u) == CharClass::Space);
                }
                CharClass::OpenBracket => {
                    self.single(TokenKind::SEQUENCE, LayoutHints::ADD_SPACE_BEFORE)
                }
                CharClass::CloseBracket => self.single(TokenKind::SEQUENCE, LayoutHints::NONE),
                CharClass::Comma => self.single(TokenKind::SEQUENCE, LayoutHints::ADD_SPACE_AFTER),
                CharClass::DoubleQuote => self.quoted(Quote::Double),
                CharClass::SingleQuote => self.quoted(Quote::Single),
                CharClass::Word => self.word(),
                CharClass::Invalid => self.invalid(),
            }
        }
        self.tokens
    }

    fn last_kind(&self) -> Option<TokenKind> {
        self.tokens.last().map(|t| t.kind)
    }

    fn push(&mut self, kind: TokenKind, start: usize, layout: LayoutHints) {
        let span = Span::new(start, self.cur.pos());
        debug_assert!(!span.is_empty(), "empty {kind:?} token at {start}");
        self.tokens.push(Token::new(kind, span, layout));
    }

    fn single(&mut self, kind: TokenKind, layout: LayoutHints) {
        let start = self.cur.pos();
        self.cur.bump();
        self.push(kind, start, layout);
    }

    fn comment(&mut self) {
        let start = self.cur.pos();
        self.cur.bump_while(|u| !is_line_break(u));
        self.push(TokenKind::COMMENT, start, LayoutHints::NONE);
    }

    /// `&name` / `*name`. A bare marker is still a one-unit token.
    fn marked_name(&mut self, kind: TokenKind) {
        let start = self.cur.pos();
        self.cur.bump();
        self.cur.bump_while(is_word);
        self.push(kind, start, LayoutHints::ADD_SPACE_BEFORE);
    }

    /// `!tag`, or the secondary form `!!tag`.
    fn tag(&mut self) {
        let start = self.cur.pos();
        self.cur.bump();
        if self.cur.peek() == Some(BANG) {
            self.cur.bump();
        }
        self.cur.bump_while(is_word);
        self.push(TokenKind::TAG, start, LayoutHints::ADD_SPACE_BEFORE);
    }

    fn quoted(&mut self, quote: Quote) {
        let start = self.cur.pos();
        self.scan_string(quote);
        let (kind, layout) = match self.last_kind() {
            Some(TokenKind::COLON) => (TokenKind::STRING, LayoutHints::ADD_SPACE_BEFORE),
            Some(TokenKind::DASH) => (TokenKind::KEY, LayoutHints::ADD_SPACE_BEFORE),
            _ => (TokenKind::KEY, LayoutHints::STARTS_ON_NEW_LINE),
        };
        self.push(kind, start, layout);
    }

    /// Consumes a quoted string including both quotes.
    ///
    /// Double quotes honour backslash escapes; single quotes escape
    /// themselves by doubling (`''`). An unterminated string stops before
    /// the end of its line.
    fn scan_string(&mut self, quote: Quote) {
        let close = quote.unit();
        self.cur.bump();
        while let Some(unit) = self.cur.peek() {
            if is_line_break(unit) {
                return;
            }
            if unit == close {
                if quote == Quote::Single && self.cur.peek_at(1) == Some(close) {
                    self.cur.bump_n(2);
                    continue;
                }
                self.cur.bump();
                return;
            }
            if quote == Quote::Double && unit == BACKSLASH {
                self.cur.bump();
                if self.cur.peek().is_some_and(|u| !is_line_break(u)) {
                    self.cur.bump();
                }
                continue;
            }
            self.cur.bump();
        }
    }

    /// A `-` is a list marker when nothing but blanks precede it on its line.
    fn at_list_marker(&self) -> bool {
        self.cur.peek() == Some(DASH)
            && self
                .cur
                .before()
                .iter()
                .rev()
                .take_while(|&&u| !is_line_break(u))
                .all(|&u| is_inline_space(u))
    }

    fn word(&mut self) {
        let start = self.cur.pos();
        if self.at_list_marker() {
            self.cur.bump();
            self.push(
                TokenKind::DASH,
                start,
                LayoutHints::STARTS_ON_NEW_LINE | LayoutHints::DISABLE_SIMILARITY_SEARCH,
            );
            return;
        }

        self.cur.bump_while(is_word);
        let after_dash = self.last_kind() == Some(TokenKind::DASH);

        if self.cur.peek_past(is_inline_space) == Some(COLON) {
            let layout = if after_dash {
                LayoutHints::ADD_SPACE_BEFORE
            } else {
                LayoutHints::STARTS_ON_NEW_LINE
            };
            self.push(TokenKind::KEY, start, layout);
            return;
        }

        let layout = match self.last_kind() {
            Some(TokenKind::COLON | TokenKind::DASH) => LayoutHints::ADD_SPACE_BEFORE,
            _ => LayoutHints::STARTS_ON_NEW_LINE,
        };
        let text = String::from_utf16_lossy(self.cur.slice(start, self.cur.pos()));
        let kind = match ScalarType::of(&text) {
            ScalarType::Boolean => TokenKind::BOOLEAN,
            ScalarType::Null => TokenKind::NULL,
            ScalarType::Number => TokenKind::NUMBER,
            ScalarType::String => TokenKind::VALUE,
        };
        self.push(kind, start, layout);
    }

    fn invalid(&mut self) {
        let start = self.cur.pos();
        self.cur.bump_while(|u| char_class(u) == CharClass::Invalid);
        let span = Span::new(start, self.cur.pos());
        log::trace!("invalid run at {}..{}", span.start, span.end);
        self.tokens.push(Token::invalid(span));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::INVALID_CHARACTER;
    use pretty_assertions::assert_eq;

    fn lex(input: &str) -> Vec<(TokenKind, String)> {
        let text = TextBuffer::from(input);
        tokenize(&text)
            .iter()
            .map(|t| (t.kind, text.slice_to_string(t.span)))
            .collect()
    }

    fn tok(kind: TokenKind, text: &str) -> (TokenKind, String) {
        (kind, text.to_string())
    }

    fn layout_of(input: &str, index: usize) -> LayoutHints {
        tokenize(&TextBuffer::from(input))[index].layout
    }

    #[test]
    fn lex_empty_input() {
        assert_eq!(lex(""), vec![]);
    }

    #[test]
    fn lex_whitespace_only() {
        assert_eq!(lex("  \t\r\n  \n"), vec![]);
    }

    #[test]
    fn lex_plain_mapping() {
        assert_eq!(
            lex("foo: bar"),
            vec![
                tok(TokenKind::KEY, "foo"),
                tok(TokenKind::COLON, ":"),
                tok(TokenKind::VALUE, "bar"),
            ]
        );
    }

    #[test]
    fn lex_key_with_space_before_colon() {
        assert_eq!(
            lex("foo  : 1"),
            vec![
                tok(TokenKind::KEY, "foo"),
                tok(TokenKind::COLON, ":"),
                tok(TokenKind::NUMBER, "1"),
            ]
        );
    }

    #[test]
    fn lex_quoted_key_and_value() {
        assert_eq!(
            lex(r#""a": "b""#),
            vec![
                tok(TokenKind::KEY, "\"a\""),
                tok(TokenKind::COLON, ":"),
                tok(TokenKind::STRING, "\"b\""),
            ]
        );
    }

    #[test]
    fn lex_single_quoted_with_doubled_quote() {
        assert_eq!(
            lex("k: 'it''s'"),
            vec![
                tok(TokenKind::KEY, "k"),
                tok(TokenKind::COLON, ":"),
                tok(TokenKind::STRING, "'it''s'"),
            ]
        );
    }

    #[test]
    fn lex_double_quoted_escape() {
        assert_eq!(
            lex(r#"k: "a\"b" # c"#),
            vec![
                tok(TokenKind::KEY, "k"),
                tok(TokenKind::COLON, ":"),
                tok(TokenKind::STRING, r#""a\"b""#),
                tok(TokenKind::COMMENT, "# c"),
            ]
        );
    }

    #[test]
    fn unterminated_string_stops_at_line_end() {
        assert_eq!(
            lex("k: \"open\nnext: 1"),
            vec![
                tok(TokenKind::KEY, "k"),
                tok(TokenKind::COLON, ":"),
                tok(TokenKind::STRING, "\"open"),
                tok(TokenKind::KEY, "next"),
                tok(TokenKind::COLON, ":"),
                tok(TokenKind::NUMBER, "1"),
            ]
        );
    }

    #[test]
    fn quoted_after_dash_is_a_key_with_space_before() {
        let input = "- \"x\"";
        assert_eq!(
            lex(input),
            vec![tok(TokenKind::DASH, "-"), tok(TokenKind::KEY, "\"x\"")]
        );
        assert_eq!(layout_of(input, 1), LayoutHints::ADD_SPACE_BEFORE);
    }

    #[test]
    fn quoted_without_context_starts_new_line() {
        assert_eq!(layout_of("\"x\"", 0), LayoutHints::STARTS_ON_NEW_LINE);
    }

    #[test]
    fn scalar_types_after_colon() {
        let cases = [
            ("x: true", TokenKind::BOOLEAN),
            ("x: false", TokenKind::BOOLEAN),
            ("x: null", TokenKind::NULL),
            ("x: 3.14", TokenKind::NUMBER),
            ("x: -5", TokenKind::NUMBER),
            ("x: hello", TokenKind::VALUE),
        ];
        for (input, expected) in cases {
            let tokens = lex(input);
            assert_eq!(tokens.len(), 3, "{input}");
            assert_eq!(tokens[2].0, expected, "{input}");
        }
    }

    #[test]
    fn value_layout_depends_on_context() {
        assert_eq!(layout_of("x: hello", 2), LayoutHints::ADD_SPACE_BEFORE);
        assert_eq!(layout_of("- hello", 1), LayoutHints::ADD_SPACE_BEFORE);
        assert_eq!(layout_of("hello", 0), LayoutHints::STARTS_ON_NEW_LINE);
    }

    #[test]
    fn key_layout_depends_on_dash() {
        assert_eq!(layout_of("a: 1", 0), LayoutHints::STARTS_ON_NEW_LINE);
        assert_eq!(layout_of("- a: 1", 1), LayoutHints::ADD_SPACE_BEFORE);
    }

    #[test]
    fn lex_list_items() {
        assert_eq!(
            lex("- item\n  - 2"),
            vec![
                tok(TokenKind::DASH, "-"),
                tok(TokenKind::VALUE, "item"),
                tok(TokenKind::DASH, "-"),
                tok(TokenKind::NUMBER, "2"),
            ]
        );
    }

    #[test]
    fn embedded_dash_is_part_of_the_run() {
        assert_eq!(
            lex("key: not-a-marker"),
            vec![
                tok(TokenKind::KEY, "key"),
                tok(TokenKind::COLON, ":"),
                tok(TokenKind::VALUE, "not-a-marker"),
            ]
        );
        assert_eq!(
            lex("key: - x"),
            vec![
                tok(TokenKind::KEY, "key"),
                tok(TokenKind::COLON, ":"),
                tok(TokenKind::VALUE, "-"),
                tok(TokenKind::VALUE, "x"),
            ]
        );
    }

    #[test]
    fn document_marker_splits_after_first_dash() {
        assert_eq!(
            lex("---"),
            vec![tok(TokenKind::DASH, "-"), tok(TokenKind::VALUE, "--")]
        );
    }

    #[test]
    fn lex_anchor_alias_and_tags() {
        assert_eq!(
            lex("base: &b !!map\nref: *b\nt: !local x"),
            vec![
                tok(TokenKind::KEY, "base"),
                tok(TokenKind::COLON, ":"),
                tok(TokenKind::ANCHOR, "&b"),
                tok(TokenKind::TAG, "!!map"),
                tok(TokenKind::KEY, "ref"),
                tok(TokenKind::COLON, ":"),
                tok(TokenKind::ALIAS, "*b"),
                tok(TokenKind::KEY, "t"),
                tok(TokenKind::COLON, ":"),
                tok(TokenKind::TAG, "!local"),
                tok(TokenKind::VALUE, "x"),
            ]
        );
    }

    #[test]
    fn bare_markers_are_single_unit_tokens() {
        assert_eq!(
            lex("& * !"),
            vec![
                tok(TokenKind::ANCHOR, "&"),
                tok(TokenKind::ALIAS, "*"),
                tok(TokenKind::TAG, "!"),
            ]
        );
    }

    #[test]
    fn lex_block_scalar_indicators() {
        assert_eq!(
            lex("a: |\n  text\nb: >\n  more"),
            vec![
                tok(TokenKind::KEY, "a"),
                tok(TokenKind::COLON, ":"),
                tok(TokenKind::SCALAR, "|"),
                tok(TokenKind::VALUE, "text"),
                tok(TokenKind::KEY, "b"),
                tok(TokenKind::COLON, ":"),
                tok(TokenKind::SCALAR, ">"),
                tok(TokenKind::VALUE, "more"),
            ]
        );
        assert_eq!(layout_of("a: |", 2), LayoutHints::ADD_SPACE_AFTER);
    }

    #[test]
    fn lex_flow_sequence() {
        assert_eq!(
            lex("xs: [1, two]"),
            vec![
                tok(TokenKind::KEY, "xs"),
                tok(TokenKind::COLON, ":"),
                tok(TokenKind::SEQUENCE, "["),
                tok(TokenKind::NUMBER, "1"),
                tok(TokenKind::SEQUENCE, ","),
                tok(TokenKind::VALUE, "two"),
                tok(TokenKind::SEQUENCE, "]"),
            ]
        );
    }

    #[test]
    fn comment_excludes_line_ending() {
        assert_eq!(
            lex("# top\r\na: 1 # trailing\n"),
            vec![
                tok(TokenKind::COMMENT, "# top"),
                tok(TokenKind::KEY, "a"),
                tok(TokenKind::COLON, ":"),
                tok(TokenKind::NUMBER, "1"),
                tok(TokenKind::COMMENT, "# trailing"),
            ]
        );
    }

    #[test]
    fn invalid_runs_carry_diagnostic() {
        let text = TextBuffer::from("a: {b}");
        let tokens = tokenize(&text);
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::KEY,
                TokenKind::COLON,
                TokenKind::INVALID,
                TokenKind::VALUE,
                TokenKind::INVALID,
            ]
        );
        assert_eq!(tokens[2].diagnostic, Some(INVALID_CHARACTER));
        assert_eq!(tokens[2].layout, LayoutHints::ADD_SPACE_BEFORE);
        assert!(tokens[3].diagnostic.is_none());
    }

    #[test]
    fn adjacent_invalid_units_form_one_run() {
        assert_eq!(lex("@{}~"), vec![tok(TokenKind::INVALID, "@{}~")]);
    }

    #[test]
    fn non_ascii_is_invalid() {
        assert_eq!(
            lex("name: José"),
            vec![
                tok(TokenKind::KEY, "name"),
                tok(TokenKind::COLON, ":"),
                tok(TokenKind::VALUE, "Jos"),
                tok(TokenKind::INVALID, "é"),
            ]
        );
    }

    #[test]
    fn colon_layout() {
        assert_eq!(
            layout_of("a: 1", 1),
            LayoutHints::ADD_SPACE_AFTER
                | LayoutHints::SAME_COLUMN
                | LayoutHints::DISABLE_SIMILARITY_SEARCH
        );
    }
}
