//! Four-in-a-row detection.
//!
//! A line is four consecutive cells in one of the four [`Direction`]s. A
//! player wins when every cell of some line holds their piece.

use crate::board::{Board, Cell, HEIGHT, WIDTH};
use crate::player::Player;

/// Number of pieces in a winning line
pub const LINE_LEN: usize = 4;

/// Coordinates `(row, column)` of the cells of a line, in scan order.
pub type Line = [(usize, usize); LINE_LEN];

/// Orientation of a line, walking away from its starting cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Direction {
    /// Left to right along a row
    Horizontal,
    /// Top to bottom along a column
    Vertical,
    /// Down and to the right
    DiagonalDownRight,
    /// Down and to the left
    DiagonalDownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// Step `(row, column)` between consecutive cells.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}

/// The line starting at `(row, column)` and heading in `direction`, or
/// `None` if any of its cells falls outside the grid.
pub fn line_from(row: isize, column: isize, direction: Direction) -> Option<Line> {
    let (dr, dc) = direction.step();
    let mut line = [(0, 0); LINE_LEN];
    for (i, slot) in line.iter_mut().enumerate() {
        let r = row + dr * i as isize;
        let c = column + dc * i as isize;
        if r < 0 || c < 0 || r >= HEIGHT as isize || c >= WIDTH as isize {
            return None;
        }
        *slot = (r as usize, c as usize);
    }
    Some(line)
}

fn owns_line(board: &Board, line: &Line, player: Player) -> bool {
    line.iter()
        .all(|&(r, c)| board.cell_at(r, c) == Some(Cell::Taken(player)))
}

/// First winning line for `player`, scanning every starting cell top to
/// bottom, left to right, and every direction from each.
pub fn winning_line(board: &Board, player: Player) -> Option<Line> {
    (0..HEIGHT)
        .flat_map(|row| (0..WIDTH).map(move |col| (row, col)))
        .flat_map(|(row, col)| {
            Direction::ALL
                .into_iter()
                .filter_map(move |dir| line_from(row as isize, col as isize, dir))
        })
        .find(|line| owns_line(board, line, player))
}

/// Whether `player` has four in a row anywhere on the board.
///
/// # Examples
///
/// ```
/// use connect4_engine::board::Board;
/// use connect4_engine::player::Player;
/// use connect4_engine::win::has_win;
///
/// let mut board = Board::new();
/// for col in 0..4 {
///     board.drop_piece(col, Player::One);
/// }
/// assert!(has_win(&board, Player::One));
/// assert!(!has_win(&board, Player::Two));
/// ```
pub fn has_win(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

/// Whether `player` owns a line passing through `(row, column)`.
///
/// Only the sixteen candidate lines containing that cell are checked. When
/// `(row, column)` is the most recent placement on a board where nobody had
/// won before it, this agrees with [`has_win`].
pub fn has_win_through(board: &Board, row: usize, column: usize, player: Player) -> bool {
    if board.cell_at(row, column) != Some(Cell::Taken(player)) {
        return false;
    }
    Direction::ALL.into_iter().any(|dir| {
        let (dr, dc) = dir.step();
        (0..LINE_LEN as isize).any(|offset| {
            let start_row = row as isize - dr * offset;
            let start_col = column as isize - dc * offset;
            line_from(start_row, start_col, dir)
                .is_some_and(|line| owns_line(board, &line, player))
        })
    })
}
