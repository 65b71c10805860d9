use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::{execute, terminal};
use game_core::render::winner_text;
use game_core::{Config, Match, MatchConfig, MatchOutcome};

mod cli;
mod error;
mod input;
mod renderer;

use cli::Args;
use error::ClientError;
use input::TerminalInput;
use renderer::TerminalPresenter;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("pong: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), ClientError> {
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let mut game = Match::new(Config::new(), args.match_config());

    let terminal = ratatui::init();
    let reports_release = enable_key_release_events();

    let mut input = TerminalInput::new(reports_release);
    let mut presenter = TerminalPresenter::new(terminal, game.config());
    let result = game.run(&mut input, &mut presenter);

    // Put the terminal back before reporting anything
    if reports_release {
        if let Err(e) = execute!(io::stdout(), PopKeyboardEnhancementFlags) {
            log::warn!("failed to pop keyboard flags: {e}");
        }
    }
    drop(presenter);
    ratatui::restore();

    report(game.setup(), result?);
    Ok(())
}

/// Logs go to a file only; the terminal belongs to the game.
fn init_logging(path: &Path) -> Result<(), ClientError> {
    let file = File::create(path).map_err(|source| ClientError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}

/// Ask the terminal to report key releases. Returns whether it agreed.
fn enable_key_release_events() -> bool {
    if !matches!(terminal::supports_keyboard_enhancement(), Ok(true)) {
        log::info!("keyboard enhancement unavailable, using hold window");
        return false;
    }

    match execute!(
        io::stdout(),
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
    ) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("failed to enable key release events: {e}");
            false
        }
    }
}

fn report(setup: &MatchConfig, outcome: MatchOutcome) {
    let mut out = io::stdout().lock();
    let result = match outcome {
        MatchOutcome::Won { winner, score } => writeln!(
            out,
            "{} ({} - {})",
            winner_text(setup, winner),
            score.left,
            score.right
        ),
        MatchOutcome::Quit { score } => writeln!(
            out,
            "Match abandoned at {} - {}",
            score.left, score.right
        ),
    };
    if let Err(e) = result {
        log::warn!("failed to print result: {e}");
    }
}
