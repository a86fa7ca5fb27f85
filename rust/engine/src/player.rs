use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two players. Player 1 moves first unless the session is
/// configured otherwise.
///
/// Serialised as the bare marker number (`1` or `2`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Player {
    /// Marker `1`
    One,
    /// Marker `2`
    Two,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The numeric marker written into board cells.
    pub fn marker(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.marker())
    }
}

impl From<Player> for u8 {
    fn from(p: Player) -> Self {
        p.marker()
    }
}

impl TryFrom<u8> for Player {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            other => Err(format!("player marker must be 1 or 2, got {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_toggles_between_players() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
        assert_eq!(Player::One.other().other(), Player::One);
    }

    #[test]
    fn marker_round_trips_through_u8() {
        assert_eq!(Player::try_from(1), Ok(Player::One));
        assert_eq!(Player::try_from(2), Ok(Player::Two));
        assert!(Player::try_from(0).is_err());
        assert!(Player::try_from(3).is_err());
        assert_eq!(u8::from(Player::Two), 2);
    }

    #[test]
    fn display_uses_marker_number() {
        assert_eq!(Player::One.to_string(), "Player 1");
        assert_eq!(Player::Two.to_string(), "Player 2");
    }
}
