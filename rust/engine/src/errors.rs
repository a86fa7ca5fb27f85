use thiserror::Error;

/// Reasons a column selection is turned down. None of them change the
/// session.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("Column {column} does not exist")]
    InvalidColumn { column: usize },
    #[error("Column {column} is full")]
    ColumnFull { column: usize },
    #[error("Game is already over")]
    GameOver,
}
