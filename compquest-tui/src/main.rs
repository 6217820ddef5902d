//! CompQuest TUI: three-screen terminal quiz.
//!
//! Screens:
//! 1. Landing: bank stats, start, share
//! 2. Playing: one question at a time with immediate feedback
//! 3. Finished: score summary and tier message

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use compquest_core::{QuestionBank, QuizConfig};
use compquest_tui::{handle_key, logging, ui, AppState, TerminalPlatform};

#[derive(Parser)]
#[command(name = "compquest-tui", about = "CompQuest: computer basics quiz in your terminal")]
struct Cli {
    /// Question bank TOML file. Defaults to the config's `bank`, then the built-in bank.
    #[arg(long)]
    bank: Option<PathBuf>,

    /// Config file. Defaults to <config dir>/compquest/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Never touch the system clipboard; sharing always shows the link.
    #[arg(long, default_value_t = false)]
    no_clipboard: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("compquest")
            .join("config.toml")
    });
    let (config, config_error) = match QuizConfig::load(&config_path) {
        Ok(config) => (config, None),
        Err(e) => (QuizConfig::default(), Some(e)),
    };

    let log_path = config
        .log_file
        .clone()
        .unwrap_or_else(logging::default_log_path);
    let log_error = logging::init(&log_path).err();

    let bank = match cli.bank.as_ref().or(config.bank.as_ref()) {
        Some(path) => QuestionBank::load(path)
            .with_context(|| format!("loading question bank {}", path.display()))?,
        None => QuestionBank::builtin(),
    };
    tracing::info!(questions = bank.len(), "question bank loaded");

    let mut app = AppState::new(bank, config, TerminalPlatform::new(cli.no_clipboard));
    let mut warnings = Vec::new();
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "using default config");
        warnings.push(format!("Config ignored: {e}"));
    }
    if let Some(e) = log_error {
        warnings.push(format!("Logging disabled: {e:#}"));
    }
    if !warnings.is_empty() {
        app.set_warning(warnings.join("; "));
    }

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events (250ms tick; nothing animates between keys)
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                handle_key(app, key);
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
