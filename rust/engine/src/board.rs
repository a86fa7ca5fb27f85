use crate::player::Player;
use serde::{Deserialize, Serialize};

/// Number of columns on the board
pub const WIDTH: usize = 7;
/// Number of rows on the board
pub const HEIGHT: usize = 6;

/// Occupancy of a single board cell.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Taken(p) => Some(p),
        }
    }
}

/// The playing grid, stored row-major with row 0 at the top.
///
/// Cells are only ever written by [`Board::drop_piece`], so every board
/// observed through this API obeys gravity: no piece floats above an empty
/// cell in the same column.
///
/// # Examples
///
/// ```
/// use connect4_engine::board::{Board, Cell, HEIGHT};
/// use connect4_engine::player::Player;
///
/// let mut board = Board::new();
/// assert_eq!(board.drop_piece(3, Player::One), Some(HEIGHT - 1));
/// assert_eq!(board.drop_piece(3, Player::Two), Some(HEIGHT - 2));
/// assert_eq!(board.cell_at(HEIGHT - 1, 3), Some(Cell::Taken(Player::One)));
/// ```
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every cell regardless of the previous contents.
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; WIDTH]; HEIGHT];
    }

    /// Row a piece dropped into `column` would land in, or `None` when the
    /// column is full or does not exist.
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        if column >= WIDTH {
            return None;
        }
        (0..HEIGHT)
            .rev()
            .find(|&row| self.cells[row][column].is_empty())
    }

    /// Drops `player`'s piece into `column` and returns the row it came to
    /// rest in.
    ///
    /// The column is scanned once, bottom row first, and the first empty
    /// cell is filled. A full or out-of-range column yields `None` and the
    /// board is left untouched.
    pub fn drop_piece(&mut self, column: usize, player: Player) -> Option<usize> {
        let row = self.landing_row(column)?;
        self.cells[row][column] = Cell::Taken(player);
        Some(row)
    }

    pub fn is_column_full(&self, column: usize) -> bool {
        self.landing_row(column).is_none()
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| !cell.is_empty()))
    }

    pub fn is_empty(&self) -> bool {
        self.piece_count() == 0
    }

    /// Cell at `(row, column)`; `None` outside the grid.
    pub fn cell_at(&self, row: usize, column: usize) -> Option<Cell> {
        self.cells.get(row)?.get(column).copied()
    }

    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; WIDTH]> {
        self.cells.iter()
    }
}
