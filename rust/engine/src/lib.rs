//! # connect4-engine: Connect Four Rules Core
//!
//! Board model, move resolution and win detection for two-player Connect
//! Four on a fixed 6 x 7 grid. Rendering and input handling live with the
//! caller; the engine only accepts column selections and reports what
//! happened.
//!
//! ## Core Modules
//!
//! - [`board`] - Grid of cells and the gravity drop into a column
//! - [`player`] - The two player markers
//! - [`win`] - Four-in-a-row detection in all four orientations
//! - [`game`] - Game session: turn order, outcome and new games
//! - [`events`] - Observer trait and event types for presentation layers
//! - [`errors`] - Reasons a column selection is rejected
//!
//! ## Quick Start
//!
//! ```rust
//! use connect4_engine::events::GameEvent;
//! use connect4_engine::game::{GameSession, Outcome};
//! use connect4_engine::player::Player;
//!
//! let mut game = GameSession::new();
//! let mut events: Vec<GameEvent> = Vec::new();
//!
//! for col in [3, 3, 4, 4, 5, 5, 6] {
//!     game.select_column_with(col, &mut events).unwrap();
//! }
//!
//! assert_eq!(game.outcome(), Outcome::Win(Player::One));
//! assert_eq!(
//!     events.last(),
//!     Some(&GameEvent::GameEnded { outcome: Outcome::Win(Player::One) })
//! );
//! ```
//!
//! ## Rejected Moves
//!
//! Full columns, unknown columns and moves after the game has ended are
//! ordinary input, not faults. They come back as [`errors::MoveError`] and
//! leave the session untouched:
//!
//! ```rust
//! use connect4_engine::errors::MoveError;
//! use connect4_engine::game::GameSession;
//!
//! let mut game = GameSession::new();
//! assert_eq!(
//!     game.select_column(9),
//!     Err(MoveError::InvalidColumn { column: 9 })
//! );
//! assert!(game.board().is_empty());
//! ```

pub mod board;
pub mod errors;
pub mod events;
pub mod game;
pub mod player;
pub mod win;
