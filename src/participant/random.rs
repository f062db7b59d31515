use rand::rngs::SmallRng;
use rand::Rng;

use crate::game::GameState;
use crate::grid::GridCoordinate;
use crate::participant::{legal_moves, Participant};
use crate::token::Token;

/// Uniformly random legal play. This is a driver for the simulator and
/// the property tests, not an opponent model: it never looks further
/// than the current legal options.
pub struct RandomParticipant;

impl RandomParticipant {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomParticipant {
    fn default() -> Self {
        Self::new()
    }
}

impl Participant for RandomParticipant {
    fn choose_placement(
        &mut self,
        rng: &mut SmallRng,
        state: &GameState,
    ) -> anyhow::Result<GridCoordinate> {
        let empty = state.empty_coordinates();
        anyhow::ensure!(!empty.is_empty(), "no empty point to place on");
        Ok(empty[rng.random_range(0..empty.len())])
    }

    fn choose_move(
        &mut self,
        rng: &mut SmallRng,
        state: &GameState,
    ) -> anyhow::Result<(GridCoordinate, GridCoordinate)> {
        let moves = legal_moves(state);
        anyhow::ensure!(
            !moves.is_empty(),
            "{} has no legal move",
            state.current_player().name()
        );
        Ok(moves[rng.random_range(0..moves.len())])
    }

    fn choose_capture(
        &mut self,
        rng: &mut SmallRng,
        _state: &GameState,
        candidates: &[Token],
    ) -> anyhow::Result<GridCoordinate> {
        anyhow::ensure!(!candidates.is_empty(), "no capturable token");
        Ok(candidates[rng.random_range(0..candidates.len())].coord)
    }
}
