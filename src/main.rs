//! appendix: convert a grammar appendix to tagged JSON and browse it in the terminal.
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use grammar_appendix::app_state::{self, AppState};
use grammar_appendix::formats::latin::LatinAppendix;
use grammar_appendix::formats::Format;
use grammar_appendix::parser::ParseOutcome;
use grammar_appendix::validate::{self, Issue};
use grammar_appendix::{config, input, ui};
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "appendix")]
#[command(about = "Parse a grammar appendix into tagged JSON and browse it", long_about = None)]
struct Args {
    /// Log every section and point decision
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a plain-text appendix into the JSON artifact
    Parse {
        /// Plain-text source document
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Where to write the JSON (defaults to the configured output)
        #[arg(long, short = 'o', value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Parse a source document and report structural problems
    Check {
        /// Plain-text source document
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Exit with failure when any problem is found
        #[arg(long)]
        strict: bool,
    },
    /// Browse a parsed appendix in the terminal
    View {
        /// JSON artifact (defaults to the configured output)
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(level)
        .init();
}

fn main() -> io::Result<ExitCode> {
    let args = Args::parse();
    let cfg = config::Config::load();
    let format = LatinAppendix;

    match args.command {
        Command::Parse {
            input: source,
            output,
        } => {
            init_logging(args.verbose);
            let output = output.unwrap_or_else(|| PathBuf::from(&cfg.output));

            let outcome = input::extract_sections(&source, &format).map_err(io::Error::other)?;
            let issues = validate::validate(&outcome.sections, &format);
            input::write_appendix(&outcome.sections, &output).map_err(io::Error::other)?;

            report(&outcome, &issues);
            println!("Parsed grammar appendix to {}", output.display());
            Ok(ExitCode::SUCCESS)
        }
        Command::Check {
            input: source,
            strict,
        } => {
            init_logging(args.verbose);
            let outcome = input::extract_sections(&source, &format).map_err(io::Error::other)?;
            let issues = validate::validate(&outcome.sections, &format);
            report(&outcome, &issues);

            if strict && !issues.is_empty() {
                Ok(ExitCode::FAILURE)
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
        Command::View { path } => {
            let path = path.unwrap_or_else(|| PathBuf::from(&cfg.output));
            let load = input::load_appendix(&path);
            let state = AppState::new(load, format.categories(), cfg.wrap_width);
            run_tui(state)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn report(outcome: &ParseOutcome, issues: &[Issue]) {
    for diagnostic in &outcome.diagnostics {
        println!("note: {diagnostic}");
    }
    for issue in issues {
        println!("problem: {issue}");
    }
    println!(
        "{} sections, {} points, {} problems",
        outcome.sections.len(),
        outcome.sections.iter().map(|s| s.points.len()).sum::<usize>(),
        issues.len()
    );
}

fn run_tui(mut app: AppState) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if app.status != app_state::Status::Ready {
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                return Ok(());
            }
            continue;
        }

        match app.current_view {
            app_state::View::Browse => match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
                KeyCode::Down | KeyCode::Char('j') => app.select_next(),
                KeyCode::Home => app.select_first(),
                KeyCode::End => app.select_last(),
                KeyCode::Char('/') => app.current_view = app_state::View::Search,
                KeyCode::Char('t') => app.current_view = app_state::View::Tags,
                KeyCode::Char('c') => app.clear_filters(),
                _ => {}
            },
            app_state::View::Search => match key.code {
                KeyCode::Char(c) => app.push_search(c),
                KeyCode::Backspace => app.pop_search(),
                KeyCode::Enter => app.current_view = app_state::View::Browse,
                KeyCode::Esc => {
                    app.search.clear();
                    app.select_first();
                    app.current_view = app_state::View::Browse;
                }
                _ => {}
            },
            app_state::View::Tags => match key.code {
                KeyCode::Left | KeyCode::Char('h') => app.prev_tag(),
                KeyCode::Right | KeyCode::Char('l') => app.next_tag(),
                KeyCode::Enter | KeyCode::Char(' ') => app.toggle_current_tag(),
                KeyCode::Char('c') => app.clear_filters(),
                KeyCode::Esc | KeyCode::Char('t') => app.current_view = app_state::View::Browse,
                _ => {}
            },
        }
    }
}
