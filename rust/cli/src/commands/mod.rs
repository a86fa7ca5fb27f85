//! Command handler modules for the connect4 CLI.
//!
//! Each command lives in its own file and exposes
//! `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`, with output
//! streams passed in as `&mut dyn Write`.

mod cfg;
mod play;

pub use cfg::handle_cfg_command;
pub use play::{PlaySettings, handle_play_command};
