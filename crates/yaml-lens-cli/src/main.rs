use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};
use yaml_lens_config::{Config, Theme};
use yaml_lens_syntax::{TextBuffer, analyze, dump::dump};

mod app;
mod decode;
mod render;

use app::{App, LoadedFile};

enum Mode {
    View(PathBuf),
    Dump(PathBuf),
}

fn parse_args(args: &[String]) -> Option<Mode> {
    match args {
        [_, flag, path] if flag == "--dump" => Some(Mode::Dump(PathBuf::from(path))),
        [_, path] if !path.starts_with("--") => Some(Mode::View(PathBuf::from(path))),
        _ => None,
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let Some(mode) = parse_args(&args) else {
        let program = args.first().map_or("yaml-lens-cli", String::as_str);
        eprintln!("Usage: {program} <file.yaml>");
        eprintln!("       {program} --dump <file.yaml>");
        process::exit(1);
    };

    match mode {
        Mode::Dump(path) => {
            let text = load_text(&path)?;
            print!("{}", dump(&text, &analyze(&text)));
            Ok(())
        }
        Mode::View(path) => {
            let config = match Config::load_or_default() {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("{e}; using default settings");
                    Config::default()
                }
            };
            let text = load_text(&path)?;
            let app = App::new(LoadedFile::new(path, text), config.collapse_on_open);
            view(app, &config.theme)
        }
    }
}

fn load_text(path: &Path) -> Result<TextBuffer> {
    if !decode::is_yaml_path(path) {
        log::warn!("{} does not have a .yaml or .yml extension", path.display());
    }
    decode::read_file(path)
}

fn view(mut app: App, theme: &Theme) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, theme);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    theme: &Theme,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app, theme))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_line(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_line(),
                KeyCode::Enter | KeyCode::Char(' ') => app.toggle_fold(),
                KeyCode::Char('c') => app.collapse_all(),
                KeyCode::Char('e') => app.expand_all(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App, theme: &Theme) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(outer[0]);

    let items: Vec<ListItem> = app
        .visible_rows()
        .into_iter()
        .map(|row| ListItem::new(render::row_line(app, row, theme)))
        .collect();
    let title = app
        .file
        .path
        .file_name()
        .map_or_else(|| app.file.path.display().to_string(), |n| n.to_string_lossy().into_owned());
    let content = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::DarkGray));
    f.render_stateful_widget(content, chunks[0], &mut app.list_state);

    let info = Paragraph::new(render::info_lines(&app.file))
        .block(Block::default().borders(Borders::ALL).title("Info"))
        .wrap(Wrap { trim: false });
    f.render_widget(info, chunks[1]);

    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Up | "),
        Span::raw("↓/j: Down | "),
        Span::raw("Enter/Space: Fold | c: Collapse all | e: Expand all"),
    ]);
    f.render_widget(Paragraph::new(help), outer[1]);
}
