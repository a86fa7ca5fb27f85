//! # connect4 CLI Library
//!
//! Terminal front end for the Connect Four engine: it turns typed column
//! numbers into engine moves and renders what the engine reports.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments and executes the subcommand,
//! reading turns from the process stdin. [`run_with_input`] takes the input
//! stream explicitly.
//!
//! ## Example Usage
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = connect4_cli::run(
//!     ["connect4", "play", "--moves", "1,7,1,7,1,7,1", "--no-board"],
//!     &mut out,
//!     &mut err,
//! );
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Player 1 won!"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Hot-seat game on stdin, or a scripted move list with `--moves`
//! - `cfg`: Display current configuration settings and their sources

use clap::Parser;
use std::io::{BufRead, Write};
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
#[macro_use]
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, Connect4Cli};
use commands::{PlaySettings, handle_cfg_command, handle_play_command};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "cfg"];

/// Main entry point for the CLI application.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Same as [`run`], reading interactive turns from `stdin`.
pub fn run_with_input<I, S>(
    args: I,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match Connect4Cli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Usage: connect4 <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: connect4 --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Play {
            first,
            moves,
            format,
            no_board,
        } => match resolve_play_settings(first, moves, format, no_board) {
            Ok(settings) => handle_play_command(settings, out, err, stdin),
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

/// Merges `play` flags over the loaded configuration.
fn resolve_play_settings(
    first: Option<u8>,
    moves: Option<String>,
    format: Option<cli::OutputFormat>,
    no_board: bool,
) -> Result<PlaySettings, CliError> {
    let cfg = config::load()?;
    let first_player = match first {
        Some(marker) => connect4_engine::player::Player::try_from(marker)
            .map_err(CliError::InvalidInput)?,
        None => cfg.first_player,
    };
    let moves = moves
        .as_deref()
        .map(validation::parse_move_list)
        .transpose()
        .map_err(CliError::InvalidInput)?;

    Ok(PlaySettings {
        first_player,
        moves,
        format: format.unwrap_or(cfg.format),
        show_board: cfg.show_board && !no_board,
    })
}
