//! Rule constants.

/// Number of legal points on the board.
pub const BOARD_POINTS: usize = 24;

/// Total placements before the movement phase begins (9 per side).
pub const PLACEMENT_QUOTA: u32 = 18;

/// At this live count a side loses mill protection and gains flying.
pub const MIN_PLAYER_TOKEN_COUNT: usize = 3;

/// A side that drops to this count has lost.
pub const LOSING_TOKEN_COUNT: usize = 2;
