//! Piece and side types.

use crate::grid::GridCoordinate;

/// One of the two sides. Roles are symmetric; only the names differ.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub enum Player {
    Knight,
    Troll,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Knight => Player::Troll,
            Player::Troll => Player::Knight,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Knight => "Knight",
            Player::Troll => "Troll",
        }
    }
}

/// One placed piece. Tokens are plain values: a move replaces the whole
/// token with one at the destination, coordinates are never mutated in
/// place. Mill bookkeeping relies on that, since it matches tokens by
/// value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub player: Player,
    pub coord: GridCoordinate,
}

impl Token {
    pub const fn new(player: Player, coord: GridCoordinate) -> Self {
        Token { player, coord }
    }
}
