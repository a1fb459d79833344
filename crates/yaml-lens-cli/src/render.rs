use std::str::FromStr;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use yaml_lens_config::Theme;
use yaml_lens_syntax::{DisplayClass, TextBuffer};

use crate::app::{App, LoadedFile, Row};

const TAB: &str = "    ";

pub fn color(theme: &Theme, class: DisplayClass) -> Color {
    let name = theme.color_for(class);
    Color::from_str(name).unwrap_or_else(|_| {
        log::debug!("unknown color {name:?} for {}", class.as_str());
        Color::Reset
    })
}

/// Display text of a source range: line breaks dropped, tabs expanded.
fn display_text(text: &TextBuffer, start: usize, end: usize) -> String {
    text.slice_to_string(yaml_lens_syntax::Span::new(start, end))
        .replace(['\r', '\n'], "")
        .replace('\t', TAB)
}

/// The colored spans of one source line, without gutter.
pub fn source_line(file: &LoadedFile, line: usize, theme: &Theme) -> Vec<Span<'static>> {
    let Some(bounds) = file.lines.get(line) else {
        return Vec::new();
    };
    let tokens = &file.analysis.tokens;
    let first = tokens.partition_point(|t| t.end() <= bounds.start);

    let mut spans = Vec::new();
    let mut pos = bounds.start;
    for token in tokens[first..].iter().take_while(|t| t.start() < bounds.end) {
        let start = token.start().max(pos);
        let end = token.end().min(bounds.end);
        if start > pos {
            spans.push(Span::raw(display_text(&file.text, pos, start)));
        }
        let style = Style::default().fg(color(theme, token.display_class()));
        spans.push(Span::styled(display_text(&file.text, start, end), style));
        pos = end;
    }
    if pos < bounds.end {
        let rest = display_text(&file.text, pos, bounds.end);
        if !rest.is_empty() {
            spans.push(Span::raw(rest));
        }
    }
    spans
}

pub fn row_line(app: &App, row: Row, theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{:>4} ", row.line + 1),
        Style::default().fg(Color::DarkGray),
    )];
    spans.extend(source_line(&app.file, row.line, theme));
    if let Some(region) = row.folded {
        spans.push(Span::styled(
            format!(" … {}", app.regions[region].summary),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
    }
    Line::from(spans)
}

pub fn info_lines(file: &LoadedFile) -> Vec<Line<'static>> {
    let summary = &file.summary;
    let mut lines = vec![
        Line::from(file.path.display().to_string()),
        Line::from(""),
        Line::from(format!("Lines:     {}", summary.lines)),
        Line::from(format!("Tokens:    {}", summary.tokens)),
        Line::from(format!("Keys:      {}", summary.keys)),
        Line::from(format!("Blocks:    {}", summary.blocks)),
        Line::from(format!("Max depth: {}", summary.max_depth)),
        Line::from(""),
    ];
    for (kind, count) in &summary.kind_counts {
        lines.push(Line::from(format!("  {:<10} {count}", kind.name())));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(format!("Issues: {}", summary.issues.len())));
    for issue in &summary.issues {
        lines.push(Line::from(Span::styled(
            format!(
                "  {}:{} {} {:?}",
                issue.line, issue.column, issue.message, issue.text
            ),
            Style::default().fg(Color::Red),
        )));
    }
    lines
}
