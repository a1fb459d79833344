use std::collections::BTreeSet;
use std::path::PathBuf;

use ratatui::widgets::ListState;
use yaml_lens_syntax::{Analysis, Span, Summary, TextBuffer, analyze};

/// A document and everything derived from it.
pub struct LoadedFile {
    pub path: PathBuf,
    pub text: TextBuffer,
    pub analysis: Analysis,
    pub summary: Summary,
    pub lines: Vec<Span>,
}

impl LoadedFile {
    pub fn new(path: PathBuf, text: TextBuffer) -> Self {
        let analysis = analyze(&text);
        let summary = Summary::from_analysis(&text, &analysis);
        let lines = text.line_spans();
        Self {
            path,
            text,
            analysis,
            summary,
            lines,
        }
    }
}

/// A block mapped onto source lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldRegion {
    pub block: usize,
    pub start_line: usize,
    /// Last line hidden when folded (inclusive).
    pub end_line: usize,
    pub summary: String,
}

impl FoldRegion {
    pub fn is_foldable(&self) -> bool {
        self.end_line > self.start_line
    }
}

/// Maps every block to the lines it covers.
///
/// A block can end on a token that shares its line with the next entry
/// (the dash of the following list item); that line stays visible.
pub fn fold_regions(text: &TextBuffer, analysis: &Analysis) -> Vec<FoldRegion> {
    let line_of = |offset: usize| text.line_col(offset).0;
    analysis
        .blocks
        .iter()
        .enumerate()
        .filter_map(|(index, block)| {
            let first = analysis.tokens.get(block.start_token)?;
            let last = analysis.tokens.get(block.end_token)?;
            let start_line = line_of(first.start());
            let mut end_line = line_of(last.end().saturating_sub(1));
            if let Some(next) = analysis.tokens.get(block.end_token + 1)
                && line_of(next.start()) == end_line
                && end_line > start_line
            {
                end_line -= 1;
            }
            Some(FoldRegion {
                block: index,
                start_line,
                end_line,
                summary: block.fold_summary.clone(),
            })
        })
        .collect()
}

/// One line on screen: a source line, possibly standing in for a folded
/// region that starts there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    pub line: usize,
    pub folded: Option<usize>,
}

pub struct App {
    pub file: LoadedFile,
    pub regions: Vec<FoldRegion>,
    folded: BTreeSet<usize>,
    cursor: usize,
    pub list_state: ListState,
}

impl App {
    pub fn new(file: LoadedFile, collapse_on_open: bool) -> Self {
        let regions = fold_regions(&file.text, &file.analysis);
        let mut app = Self {
            file,
            regions,
            folded: BTreeSet::new(),
            cursor: 0,
            list_state: ListState::default(),
        };
        if collapse_on_open {
            app.collapse_all();
        }
        app.sync_selection();
        app
    }

    /// Source line under the cursor.
    pub fn cursor_line(&self) -> usize {
        self.cursor
    }

    pub fn is_folded(&self, region: usize) -> bool {
        self.folded.contains(&region)
    }

    pub fn visible_rows(&self) -> Vec<Row> {
        let mut rows = Vec::new();
        let mut line = 0;
        while line < self.file.lines.len() {
            let folded = self
                .folded
                .iter()
                .copied()
                .filter(|&r| self.regions[r].start_line == line)
                .max_by_key(|&r| self.regions[r].end_line);
            rows.push(Row { line, folded });
            line = match folded {
                Some(r) => self.regions[r].end_line + 1,
                None => line + 1,
            };
        }
        rows
    }

    fn cursor_row(&self, rows: &[Row]) -> usize {
        rows.iter().rposition(|row| row.line <= self.cursor).unwrap_or(0)
    }

    pub fn next_line(&mut self) {
        let rows = self.visible_rows();
        let at = self.cursor_row(&rows);
        if let Some(row) = rows.get(at + 1) {
            self.cursor = row.line;
        }
        self.sync_selection();
    }

    pub fn previous_line(&mut self) {
        let rows = self.visible_rows();
        let at = self.cursor_row(&rows);
        if let Some(row) = at.checked_sub(1).and_then(|i| rows.get(i)) {
            self.cursor = row.line;
        }
        self.sync_selection();
    }

    /// Folds or unfolds the outermost foldable region starting on the
    /// cursor line.
    pub fn toggle_fold(&mut self) {
        let Some(region) = self
            .regions
            .iter()
            .position(|r| r.start_line == self.cursor && r.is_foldable())
        else {
            return;
        };
        if !self.folded.remove(&region) {
            self.folded.insert(region);
        }
        self.sync_selection();
    }

    pub fn collapse_all(&mut self) {
        self.folded = self
            .regions
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_foldable())
            .map(|(i, _)| i)
            .collect();
        self.sync_selection();
    }

    pub fn expand_all(&mut self) {
        self.folded.clear();
        self.sync_selection();
    }

    /// Moves a hidden cursor onto the row that hides it and points the list
    /// selection at that row.
    fn sync_selection(&mut self) {
        let rows = self.visible_rows();
        if rows.is_empty() {
            self.cursor = 0;
            self.list_state.select(None);
            return;
        }
        let at = self.cursor_row(&rows);
        self.cursor = rows[at].line;
        self.list_state.select(Some(at));
    }
}
