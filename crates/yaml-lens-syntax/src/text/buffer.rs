use super::span::Span;
use crate::classify::is_line_break;

const LF: u16 = b'\n' as u16;
const CR: u16 = b'\r' as u16;

/// An immutable snapshot of a document as UTF-16 code units.
///
/// All offsets handed out by the analyzer (token spans, line starts) are
/// code-unit indices into this buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    units: Vec<u16>,
}

impl TextBuffer {
    pub fn from_utf16(units: Vec<u16>) -> Self {
        Self { units }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn get(&self, offset: usize) -> Option<u16> {
        self.units.get(offset).copied()
    }

    pub fn as_units(&self) -> &[u16] {
        &self.units
    }

    /// Extracts the text for a span as an owned String.
    ///
    /// The span is clamped to the buffer; unpaired surrogates are replaced
    /// with U+FFFD.
    pub fn slice_to_string(&self, sp: Span) -> String {
        let end = sp.end.min(self.units.len());
        let start = sp.start.min(end);
        String::from_utf16_lossy(&self.units[start..end])
    }

    /// Extracts text for a span, truncating to `max` characters with "..."
    /// suffix if needed.
    pub fn preview(&self, sp: Span, max: usize) -> String {
        let s = self.slice_to_string(sp);
        if s.chars().count() <= max {
            return s;
        }
        let mut out: String = s.chars().take(max).collect();
        out.push_str("...");
        out
    }

    /// True if the unit at `index` ends a line. CR and LF both break lines,
    /// and CRLF counts once, at its LF.
    fn ends_line(&self, index: usize) -> bool {
        let unit = self.units[index];
        is_line_break(unit) && !(unit == CR && self.units.get(index + 1) == Some(&LF))
    }

    /// Offset of the first unit of the line containing `offset`.
    pub fn line_start(&self, offset: usize) -> usize {
        let offset = offset.min(self.units.len());
        (0..offset)
            .rev()
            .find(|&i| self.ends_line(i))
            .map_or(0, |end| end + 1)
    }

    /// Zero-based `(line, column)` of `offset`, column in code units.
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.units.len());
        let line = (0..offset).filter(|&i| self.ends_line(i)).count();
        (line, offset - self.line_start(offset))
    }

    /// Spans of every line, each including its line break if present.
    ///
    /// An empty buffer has no lines; a trailing break does not start a new
    /// (empty) line.
    pub fn line_spans(&self) -> Vec<Span> {
        let mut spans = Vec::new();
        let mut start = 0;
        for i in 0..self.units.len() {
            if self.ends_line(i) {
                spans.push(Span::new(start, i + 1));
                start = i + 1;
            }
        }
        if start < self.units.len() {
            spans.push(Span::new(start, self.units.len()));
        }
        spans
    }
}

impl From<&str> for TextBuffer {
    fn from(s: &str) -> Self {
        Self {
            units: s.encode_utf16().collect(),
        }
    }
}

impl From<Vec<u16>> for TextBuffer {
    fn from(units: Vec<u16>) -> Self {
        Self::from_utf16(units)
    }
}
