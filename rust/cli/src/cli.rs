//! Command-line argument model.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Parser)]
#[command(
    name = "connect4",
    version,
    about = "Two-player Connect Four in the terminal"
)]
pub struct Connect4Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play a hot-seat game, or replay a scripted list of moves
    Play {
        /// Player who opens each game (1 or 2)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
        first: Option<u8>,
        /// Comma-separated columns (1-7) to play instead of reading stdin
        #[arg(long)]
        moves: Option<String>,
        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Do not draw the board after each move
        #[arg(long)]
        no_board: bool,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// How game progress is written to stdout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Board drawings and messages for people
    Text,
    /// One JSON event per line
    Json,
}

impl OutputFormat {
    /// # Examples
    ///
    /// ```
    /// # use connect4_cli::cli::OutputFormat;
    /// assert_eq!(OutputFormat::Json.as_str(), "json");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}
