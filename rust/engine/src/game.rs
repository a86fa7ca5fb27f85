use crate::board::{Board, WIDTH};
use crate::errors::MoveError;
use crate::events::{GameObserver, NoopObserver, Placement};
use crate::player::Player;
use crate::win::has_win_through;
use serde::{Deserialize, Serialize};

/// State of a game. Everything except `Ongoing` is terminal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Ongoing,
    Win(Player),
    Tie,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(p) => Some(p),
            _ => None,
        }
    }
}

/// Result of an accepted column selection.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Turn {
    /// Where the piece landed
    pub placement: Placement,
    /// Outcome after the placement
    pub outcome: Outcome,
}

/// One game of Connect Four: the board, whose turn it is, and how the game
/// stands.
///
/// The session is the only authority on whether a move is allowed; once an
/// outcome is terminal every further selection is rejected with
/// [`MoveError::GameOver`].
///
/// # Examples
///
/// ```
/// use connect4_engine::game::{GameSession, Outcome};
/// use connect4_engine::player::Player;
///
/// let mut game = GameSession::new();
/// for _ in 0..3 {
///     game.select_column(0).unwrap();
///     game.select_column(6).unwrap();
/// }
/// let turn = game.select_column(0).unwrap();
/// assert_eq!(turn.outcome, Outcome::Win(Player::One));
/// assert!(game.select_column(1).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    active: Player,
    /// Player who opens every game of this session, including new games
    first_player: Player,
    outcome: Outcome,
    /// Placements of the current game, oldest first
    moves: Vec<Placement>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_first_player(Player::One)
    }

    pub fn with_first_player(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            active: first_player,
            first_player,
            outcome: Outcome::Ongoing,
            moves: Vec::new(),
        }
    }

    /// Discards the current game and starts an empty one with the same
    /// opening player.
    pub fn start_new_game(&mut self) {
        *self = Self::with_first_player(self.first_player);
        tracing::debug!(first_player = %self.first_player, "new game started");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_player(&self) -> Player {
        self.active
    }

    pub fn first_player(&self) -> Player {
        self.first_player
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn moves(&self) -> &[Placement] {
        &self.moves
    }

    /// Columns that currently accept a piece; empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        (0..WIDTH)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    pub fn select_column(&mut self, column: usize) -> Result<Turn, MoveError> {
        self.select_column_with(column, &mut NoopObserver)
    }

    /// Plays the active player's piece into `column` and reports the
    /// placement, then any game end, to `observer`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the outcome is terminal
    /// - [`MoveError::InvalidColumn`] for `column >= WIDTH`
    /// - [`MoveError::ColumnFull`] when the column has no empty cell
    ///
    /// A rejected selection leaves the session unchanged and notifies
    /// nothing.
    pub fn select_column_with(
        &mut self,
        column: usize,
        observer: &mut dyn GameObserver,
    ) -> Result<Turn, MoveError> {
        let player = self.active;
        let row = self.place(column, player).inspect_err(|e| {
            tracing::debug!(column, player = %player, reason = %e, "selection rejected");
        })?;

        let placement = Placement {
            row,
            column,
            player,
        };
        self.moves.push(placement);
        tracing::debug!(row, column, player = %player, "piece placed");

        self.outcome = if has_win_through(&self.board, row, column, player) {
            Outcome::Win(player)
        } else if self.board.is_full() {
            Outcome::Tie
        } else {
            self.active = player.other();
            Outcome::Ongoing
        };

        observer.on_piece_placed(placement);
        if self.outcome.is_terminal() {
            tracing::info!(outcome = ?self.outcome, moves = self.moves.len(), "game ended");
            observer.on_game_ended(self.outcome);
        }

        Ok(Turn {
            placement,
            outcome: self.outcome,
        })
    }

    fn place(&mut self, column: usize, player: Player) -> Result<usize, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if column >= WIDTH {
            return Err(MoveError::InvalidColumn { column });
        }
        self.board
            .drop_piece(column, player)
            .ok_or(MoveError::ColumnFull { column })
    }
}
