use crate::game::Outcome;
use crate::player::Player;
use serde::{Deserialize, Serialize};

/// A piece that landed on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub player: Player,
}

/// Receives notifications from a [`crate::game::GameSession`].
///
/// Rejected selections produce no notification. For the move that ends a
/// game, `on_piece_placed` is delivered before `on_game_ended`.
pub trait GameObserver {
    fn on_piece_placed(&mut self, placement: Placement);
    fn on_game_ended(&mut self, outcome: Outcome);
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl GameObserver for NoopObserver {
    fn on_piece_placed(&mut self, _placement: Placement) {}
    fn on_game_ended(&mut self, _outcome: Outcome) {}
}

/// Owned form of the observer notifications, suitable for streaming as
/// JSON lines.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    PiecePlaced {
        row: usize,
        column: usize,
        player: Player,
    },
    GameEnded {
        outcome: Outcome,
    },
}

impl From<Placement> for GameEvent {
    fn from(p: Placement) -> Self {
        GameEvent::PiecePlaced {
            row: p.row,
            column: p.column,
            player: p.player,
        }
    }
}

impl GameObserver for Vec<GameEvent> {
    fn on_piece_placed(&mut self, placement: Placement) {
        self.push(placement.into());
    }

    fn on_game_ended(&mut self, outcome: Outcome) {
        self.push(GameEvent::GameEnded { outcome });
    }
}
