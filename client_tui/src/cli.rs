use std::path::PathBuf;

use clap::Parser;
use game_core::{MatchConfig, Params};

/// Two-player Pong in the terminal.
///
/// Left paddle: W/S. Right paddle: Up/Down. Esc or q quits.
#[derive(Debug, Parser)]
#[command(name = "pong", version, about)]
pub struct Args {
    /// Name shown for the left player
    #[arg(long, default_value = "Left Player")]
    pub left_name: String,

    /// Name shown for the right player
    #[arg(long, default_value = "Right Player")]
    pub right_name: String,

    /// Points needed to win the match
    #[arg(
        long,
        default_value_t = Params::WIN_SCORE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub winning_score: u32,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig::new(
            self.left_name.clone(),
            self.right_name.clone(),
            self.winning_score,
        )
    }
}
