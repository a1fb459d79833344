//! Document information derived from an analysis: sizes, per-kind counts,
//! nesting depth and the list of issues a viewer shows next to the text.

use crate::Analysis;
use crate::text::TextBuffer;
use crate::token_kind::TokenKind;

/// Longest issue text kept before it is cut short with "...".
pub const ISSUE_TEXT_MAX_CHARS: usize = 32;

/// One unrecognized character region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// 1-based line.
    pub line: usize,
    /// 1-based column, in code units.
    pub column: usize,
    /// The offending text, truncated to [`ISSUE_TEXT_MAX_CHARS`].
    pub text: String,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Summary {
    pub lines: usize,
    pub tokens: usize,
    pub keys: usize,
    pub blocks: usize,
    /// Deepest block nesting; 0 when there are no blocks.
    pub max_depth: usize,
    /// Count per kind, in kind-id order, omitting kinds that never occur.
    pub kind_counts: Vec<(TokenKind, usize)>,
    pub issues: Vec<Issue>,
}

impl Summary {
    pub fn from_analysis(text: &TextBuffer, analysis: &Analysis) -> Self {
        let mut counts = [0usize; TokenKind::ALL.len()];
        for token in &analysis.tokens {
            counts[token.kind.id() as usize] += 1;
        }
        let kind_counts = TokenKind::ALL
            .into_iter()
            .zip(counts)
            .filter(|(_, n)| *n > 0)
            .collect();

        let issues = analysis
            .tokens
            .iter()
            .filter_map(|t| {
                let message = t.diagnostic?;
                let (line, col) = text.line_col(t.start());
                Some(Issue {
                    line: line + 1,
                    column: col + 1,
                    text: text.preview(t.span, ISSUE_TEXT_MAX_CHARS),
                    message,
                })
            })
            .collect();

        Self {
            lines: text.line_spans().len(),
            tokens: analysis.tokens.len(),
            keys: counts[TokenKind::KEY.id() as usize],
            blocks: analysis.blocks.len(),
            max_depth: max_depth(analysis),
            kind_counts,
            issues,
        }
    }

    pub fn count(&self, kind: TokenKind) -> usize {
        self.kind_counts
            .iter()
            .find(|(k, _)| *k == kind)
            .map_or(0, |(_, n)| *n)
    }
}

/// Blocks are ordered by start and properly nested, so a stack of open
/// block ends gives the depth of each block as it is visited.
fn max_depth(analysis: &Analysis) -> usize {
    let mut open: Vec<usize> = Vec::new();
    let mut deepest = 0;
    for block in &analysis.blocks {
        while open.last().is_some_and(|&end| end < block.start_token) {
            open.pop();
        }
        open.push(block.end_token);
        deepest = deepest.max(open.len());
    }
    deepest
}
