//! Board, outcome and event formatters for terminal display.
//!
//! Pure functions; the play command decides where the text goes.
//!
//! ## Example
//!
//! ```rust
//! use connect4_engine::board::Board;
//! use connect4_engine::player::Player;
//! use connect4_cli::formatters::format_board;
//!
//! let mut board = Board::new();
//! board.drop_piece(0, Player::One);
//! board.drop_piece(1, Player::Two);
//! assert!(format_board(&board, None).ends_with("X O . . . . .\n"));
//! ```

use connect4_engine::board::{Board, Cell, WIDTH};
use connect4_engine::errors::MoveError;
use connect4_engine::events::{GameEvent, Placement};
use connect4_engine::game::Outcome;
use connect4_engine::player::Player;
use connect4_engine::win::Line;

pub fn format_cell(cell: Cell) -> char {
    match cell.player() {
        None => '.',
        Some(Player::One) => 'X',
        Some(Player::Two) => 'O',
    }
}

/// Column numbers (1-based) on the first line, then one line per row from
/// the top. Cells of `highlight` are drawn in lowercase (`x`/`o`).
pub fn format_board(board: &Board, highlight: Option<&Line>) -> String {
    let header: Vec<String> = (1..=WIDTH).map(|c| c.to_string()).collect();
    let mut s = header.join(" ");
    s.push('\n');
    for (r, row) in board.rows().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(c, &cell)| {
                let glyph = format_cell(cell);
                if highlight.is_some_and(|line| line.contains(&(r, c))) {
                    glyph.to_ascii_lowercase().to_string()
                } else {
                    glyph.to_string()
                }
            })
            .collect();
        s.push_str(&cells.join(" "));
        s.push('\n');
    }
    s
}

/// # Examples
///
/// ```
/// # use connect4_cli::formatters::format_outcome;
/// use connect4_engine::game::Outcome;
/// use connect4_engine::player::Player;
/// assert_eq!(format_outcome(Outcome::Win(Player::Two)), "Player 2 won!");
/// assert_eq!(format_outcome(Outcome::Tie), "It was a tie!");
/// ```
pub fn format_outcome(outcome: Outcome) -> String {
    match outcome.winner() {
        Some(p) => format!("{} won!", p),
        None if outcome.is_terminal() => "It was a tie!".to_string(),
        None => "Game in progress".to_string(),
    }
}

pub fn format_placement(p: &Placement) -> String {
    format!(
        "{} ({}) dropped into column {}",
        p.player,
        format_cell(Cell::Taken(p.player)),
        p.column + 1
    )
}

/// Describe a rejected move using the 1-based column numbers people type.
pub fn format_rejection(e: &MoveError) -> String {
    match e {
        MoveError::InvalidColumn { column } => format!(
            "Column {} does not exist (choose 1-{})",
            column + 1,
            WIDTH
        ),
        MoveError::ColumnFull { column } => format!("Column {} is full", column + 1),
        MoveError::GameOver => "Game is over; start a new game with n".to_string(),
    }
}

pub fn format_event_json(event: &GameEvent) -> Result<String, serde_json::Error> {
    serde_json::to_string(event)
}
