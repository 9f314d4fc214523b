//! zinemap: render a plain-text zine as a navigable page, or read it in the terminal.
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, ValueEnum};
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};
use zinemap::app_state::{Navigator, Page};
use zinemap::config::Config;
use zinemap::error::Error;
use zinemap::input::FileSource;
use zinemap::reader::Reader;
use zinemap::{render, telemetry, ui};

#[derive(Parser)]
#[command(name = "zinemap")]
#[command(about = "Navigable web pages and a terminal reader for plain-text zines", long_about = None)]
struct Args {
    /// Zine text to load (defaults to `source_path` from the config)
    #[arg(value_name = "SOURCE")]
    source: Option<PathBuf>,

    /// Configuration file (defaults to ./zinemap.toml when present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// What to produce
    #[arg(long, short = 'm', value_enum, default_value_t = Mode::Page)]
    mode: Mode,

    /// Write output here instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    out: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Standalone HTML page with navigation script
    Page,
    /// HTML fragment: enhanced TOC and anchored body
    Fragment,
    /// Navigation model as JSON
    Nav,
    /// Interactive terminal reader
    Read,
}

fn main() -> ExitCode {
    let args = Args::parse();
    if args.mode != Mode::Read || telemetry::requested_by_env() {
        telemetry::init(args.verbose);
    }

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode, Error> {
    let cfg = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    let navigator = Navigator::new(&cfg)?;
    let source_path = args
        .source
        .clone()
        .unwrap_or_else(|| PathBuf::from(&cfg.source_path));
    let page = Page::load(&FileSource::new(source_path), &navigator);

    if args.mode == Mode::Page {
        let html = render::render_page(&page, &cfg)?;
        emit(args.out.as_deref(), &html)?;
        return Ok(if page.error_message().is_some() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        });
    }

    let state = match page {
        Page::Ready(state) => state,
        Page::Failed { message } => {
            eprintln!("{message}");
            return Ok(ExitCode::FAILURE);
        }
        Page::Loading => return Ok(ExitCode::FAILURE),
    };

    match args.mode {
        Mode::Fragment => emit(args.out.as_deref(), &state.rendered().html)?,
        Mode::Nav => {
            let json = serde_json::to_string_pretty(state.nav())?;
            emit(args.out.as_deref(), &json)?;
        }
        Mode::Read => run_tui(Reader::new(*state, cfg.reader_back_to_top_rows))?,
        Mode::Page => {}
    }
    Ok(ExitCode::SUCCESS)
}

fn emit(out: Option<&Path>, contents: &str) -> io::Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, contents)?;
            tracing::info!("Wrote {}", path.display());
            Ok(())
        }
        None => {
            println!("{contents}");
            Ok(())
        }
    }
}

fn run_tui(mut reader: Reader) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut reader);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        eprintln!("Error: {e}");
    }
    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    reader: &mut Reader,
) -> io::Result<()> {
    let tick = Duration::from_millis(50);
    loop {
        reader.tick(Instant::now());
        terminal.draw(|f| ui::draw(f, reader))?;

        if !event::poll(tick)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let page = isize::try_from(reader.viewport_height).unwrap_or(isize::MAX);
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
            KeyCode::Up => reader.select_prev(),
            KeyCode::Down => reader.select_next(),
            KeyCode::Enter => reader.activate(Instant::now()),
            KeyCode::Char('j') => reader.scroll_by(1),
            KeyCode::Char('k') => reader.scroll_by(-1),
            KeyCode::PageDown => reader.scroll_by(page),
            KeyCode::PageUp => reader.scroll_by(-page),
            KeyCode::Char('b') | KeyCode::Home => reader.back_to_top(Instant::now()),
            _ => {}
        }
    }
}
