//! # Play Command
//!
//! Hot-seat Connect Four for two people sharing a terminal.
//!
//! Two modes:
//!
//! - **Interactive**: one line per turn from stdin (`1`-`7` drops a piece,
//!   `n` starts a new game, `q` quits; EOF also quits)
//! - **Scripted**: `--moves 4,4,5,...` plays the listed columns in order
//!
//! Rejected moves (full column, unknown column, game already over) are
//! reported on stderr and the game carries on, exactly as the engine
//! treats them: no placement, no notification.

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::formatters::{
    format_board, format_event_json, format_outcome, format_placement, format_rejection,
};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_game_input};
use connect4_engine::board::WIDTH;
use connect4_engine::events::{GameEvent, GameObserver, Placement};
use connect4_engine::game::{GameSession, Outcome};
use connect4_engine::player::Player;
use connect4_engine::win::winning_line;
use std::io::{BufRead, Write};

/// Resolved options for one `play` invocation (config merged with flags).
#[derive(Debug, Clone, PartialEq)]
pub struct PlaySettings {
    pub first_player: Player,
    /// 0-based columns to play instead of reading stdin
    pub moves: Option<Vec<usize>>,
    pub format: OutputFormat,
    pub show_board: bool,
}

/// Presentation side of the game: renders engine notifications and the
/// board to the output stream.
///
/// Observer callbacks cannot return errors, so the first write failure is
/// kept and surfaced by [`TerminalView::check`]. In text mode the outcome
/// line is held back until the final board has been drawn.
struct TerminalView<'a> {
    out: &'a mut dyn Write,
    format: OutputFormat,
    show_board: bool,
    ended: Option<Outcome>,
    failed: Option<std::io::Error>,
}

impl<'a> TerminalView<'a> {
    fn new(out: &'a mut dyn Write, format: OutputFormat, show_board: bool) -> Self {
        Self {
            out,
            format,
            show_board,
            ended: None,
            failed: None,
        }
    }

    fn is_text(&self) -> bool {
        self.format == OutputFormat::Text
    }

    /// Writes a line in text mode; JSON mode only carries events.
    fn text(&mut self, line: &str) -> std::io::Result<()> {
        if self.is_text() {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }

    /// Draws the board, with the winning line in lowercase once someone
    /// has won.
    fn board(&mut self, game: &GameSession) -> std::io::Result<()> {
        if self.is_text() && self.show_board {
            let line = game
                .outcome()
                .winner()
                .and_then(|p| winning_line(game.board(), p));
            write!(self.out, "{}", format_board(game.board(), line.as_ref()))?;
        }
        Ok(())
    }

    /// Board after an accepted move, then the outcome if the move ended
    /// the game.
    fn finish_turn(&mut self, game: &GameSession) -> std::io::Result<()> {
        self.board(game)?;
        match self.ended.take() {
            Some(outcome) => self.text(&format_outcome(outcome)),
            None => Ok(()),
        }
    }

    fn prompt(&mut self, game: &GameSession) -> std::io::Result<()> {
        if !self.is_text() {
            return Ok(());
        }
        if game.is_over() {
            write!(self.out, "Game over. Enter n for a new game or q to quit: ")?;
        } else {
            write!(
                self.out,
                "{}, choose a column (1-{}), n for a new game, q to quit: ",
                game.active_player(),
                WIDTH
            )?;
        }
        self.out.flush()
    }

    fn event(&mut self, event: GameEvent) -> std::io::Result<()> {
        let line = format_event_json(&event).map_err(std::io::Error::other)?;
        writeln!(self.out, "{}", line)
    }

    fn record(&mut self, result: std::io::Result<()>) {
        if let Err(e) = result
            && self.failed.is_none()
        {
            self.failed = Some(e);
        }
    }

    fn check(&mut self) -> std::io::Result<()> {
        match self.failed.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl GameObserver for TerminalView<'_> {
    fn on_piece_placed(&mut self, placement: Placement) {
        let result = match self.format {
            OutputFormat::Text => self.text(&format_placement(&placement)),
            OutputFormat::Json => self.event(placement.into()),
        };
        self.record(result);
    }

    fn on_game_ended(&mut self, outcome: Outcome) {
        match self.format {
            OutputFormat::Text => self.ended = Some(outcome),
            OutputFormat::Json => {
                let result = self.event(GameEvent::GameEnded { outcome });
                self.record(result);
            }
        }
    }
}

/// Handle the play command.
///
/// # Arguments
///
/// * `settings` - Opening player, optional scripted moves, output options
/// * `out` - Output stream for the board, messages or JSON events
/// * `err` - Error stream for rejected moves and invalid input
/// * `stdin` - Input stream for interactive turns (unused when scripted)
///
/// # Returns
///
/// * `Ok(())` once the input is exhausted or the user quits
/// * `Err(CliError)` if writing output fails
pub fn handle_play_command(
    settings: PlaySettings,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let mut game = GameSession::with_first_player(settings.first_player);
    let mut view = TerminalView::new(out, settings.format, settings.show_board);

    tracing::info!(
        first_player = %settings.first_player,
        format = settings.format.as_str(),
        scripted = settings.moves.is_some(),
        "play session started"
    );

    let mode = if settings.moves.is_some() {
        "scripted"
    } else {
        "interactive"
    };
    view.text(&format!(
        "play: first={} mode={}",
        settings.first_player, mode
    ))?;

    match settings.moves {
        Some(moves) => play_scripted(&mut game, &moves, &mut view, err),
        None => play_interactive(&mut game, &mut view, err, stdin),
    }
}

fn play_scripted(
    game: &mut GameSession,
    moves: &[usize],
    view: &mut TerminalView<'_>,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    for (i, &column) in moves.iter().enumerate() {
        match game.select_column_with(column, view) {
            Ok(_) => view.finish_turn(game)?,
            Err(e) => {
                ui::display_warning(
                    err,
                    &format!("move {} skipped: {}", i + 1, format_rejection(&e)),
                )?;
            }
        }
        view.check()?;
    }

    view.text(&format!("Moves played: {}", game.moves().len()))?;
    if !game.is_over() {
        view.text(&format_outcome(game.outcome()))?;
    }
    Ok(())
}

fn play_interactive(
    game: &mut GameSession,
    view: &mut TerminalView<'_>,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let mut games = 1u32;
    view.board(game)?;

    loop {
        view.prompt(game)?;
        let Some(line) = read_stdin_line(stdin) else {
            break;
        };
        match parse_game_input(&line) {
            ParseResult::Column(column) => match game.select_column_with(column, view) {
                Ok(_) => view.finish_turn(game)?,
                Err(e) => ui::write_error(err, &format_rejection(&e))?,
            },
            ParseResult::NewGame => {
                game.start_new_game();
                games += 1;
                view.text(&format!("New game ({} moves first)", game.first_player()))?;
                view.board(game)?;
            }
            ParseResult::Quit => break,
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
        view.check()?;
    }

    view.text(&format!("Games played: {}", games))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn settings(moves: Option<Vec<usize>>, format: OutputFormat) -> PlaySettings {
        PlaySettings {
            first_player: Player::One,
            moves,
            format,
            show_board: false,
        }
    }

    #[test]
    fn scripted_vertical_win_announces_winner() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(b"");

        let result = handle_play_command(
            settings(Some(vec![0, 6, 0, 6, 0, 6, 0]), OutputFormat::Text),
            &mut out,
            &mut err,
            &mut input,
        );
        assert!(result.is_ok());

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("mode=scripted"));
        assert!(output.contains("Player 1 won!"));
        assert!(output.contains("Moves played: 7"));
        assert!(err.is_empty());
    }

    #[test]
    fn scripted_moves_after_game_end_are_skipped() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(b"");

        handle_play_command(
            settings(Some(vec![0, 6, 0, 6, 0, 6, 0, 1]), OutputFormat::Text),
            &mut out,
            &mut err,
            &mut input,
        )
        .unwrap();

        let errors = String::from_utf8(err).unwrap();
        assert!(errors.contains("move 8 skipped"), "{}", errors);
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Moves played: 7"));
    }

    #[test]
    fn json_format_streams_events_only() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(b"");

        handle_play_command(
            settings(Some(vec![0, 6, 0, 6, 0, 6, 0]), OutputFormat::Json),
            &mut out,
            &mut err,
            &mut input,
        )
        .unwrap();

        let output = String::from_utf8(out).unwrap();
        let events: Vec<GameEvent> = output
            .lines()
            .map(|l| serde_json::from_str(l).expect("every line is an event"))
            .collect();
        assert_eq!(events.len(), 8);
        assert_eq!(
            events.last(),
            Some(&GameEvent::GameEnded {
                outcome: Outcome::Win(Player::One)
            })
        );
    }

    #[test]
    fn interactive_quit_immediately() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(b"q\n");

        let result = handle_play_command(
            settings(None, OutputFormat::Text),
            &mut out,
            &mut err,
            &mut input,
        );
        assert!(result.is_ok());
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Player 1, choose a column"));
        assert!(output.contains("Games played: 1"));
    }

    #[test]
    fn interactive_reports_invalid_input_and_continues() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(b"hello\n9\n4\n");

        handle_play_command(
            settings(None, OutputFormat::Text),
            &mut out,
            &mut err,
            &mut input,
        )
        .unwrap();

        let errors = String::from_utf8(err).unwrap();
        assert!(errors.contains("Unrecognized input 'hello'"));
        assert!(errors.contains("Column 9 does not exist"));
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Player 1 (X) dropped into column 4"));
        assert!(output.contains("Player 2, choose a column"));
    }

    #[test]
    fn view_board_respects_show_board() {
        let game = GameSession::new();
        let mut out = Vec::new();
        {
            let mut view = TerminalView::new(&mut out, OutputFormat::Text, false);
            view.board(&game).unwrap();
        }
        assert!(out.is_empty());

        let mut out = Vec::new();
        {
            let mut view = TerminalView::new(&mut out, OutputFormat::Text, true);
            view.board(&game).unwrap();
        }
        assert!(String::from_utf8(out).unwrap().starts_with("1 2 3 4 5 6 7"));
    }

    #[test]
    fn final_board_comes_before_the_outcome_and_marks_the_line() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(b"");
        let mut with_board = settings(Some(vec![0, 6, 0, 6, 0, 6, 0]), OutputFormat::Text);
        with_board.show_board = true;

        handle_play_command(with_board, &mut out, &mut err, &mut input).unwrap();

        let output = String::from_utf8(out).unwrap();
        let won_at = output.find("Player 1 won!").unwrap();
        let final_board_at = output.rfind("1 2 3 4 5 6 7").unwrap();
        assert!(final_board_at < won_at, "{}", output);
        assert_eq!(
            output[final_board_at..won_at].matches('x').count(),
            4,
            "{}",
            output
        );
        assert!(!output[..final_board_at].contains('x'));
    }
}
