//! Input-handling collaborators.
//!
//! The engine trusts its callers for everything it does not gate itself:
//! movement adjacency, flying, capture target ownership, and skipping a
//! capture that has no legal target. A [`Participant`] is one seat's
//! source of decisions; [`play_local_turn`] wires those decisions into
//! the engine with the required caller-side legality checks.

use rand::rngs::SmallRng;

use crate::config::MIN_PLAYER_TOKEN_COUNT;
use crate::game::{GamePhase, GameState};
use crate::grid::GridCoordinate;
use crate::token::Token;
use crate::ui::point_label;

/// One seat's source of decisions. Implementations must only propose
/// legal actions; an engine rejection is treated as a participant bug,
/// not re-prompted.
pub trait Participant: Send {
    /// Pick a point for the current player's next placement.
    fn choose_placement(
        &mut self,
        rng: &mut SmallRng,
        state: &GameState,
    ) -> anyhow::Result<GridCoordinate>;

    /// Pick a movement for the current player, within [`legal_moves`].
    fn choose_move(
        &mut self,
        rng: &mut SmallRng,
        state: &GameState,
    ) -> anyhow::Result<(GridCoordinate, GridCoordinate)>;

    /// Pick which of `candidates` to capture.
    fn choose_capture(
        &mut self,
        rng: &mut SmallRng,
        state: &GameState,
        candidates: &[Token],
    ) -> anyhow::Result<GridCoordinate>;
}

/// Legal movement pairs for the side to move: any empty neighbor, or any
/// empty point at all once the mover is down to exactly 3 tokens
/// (flying).
pub fn legal_moves(state: &GameState) -> Vec<(GridCoordinate, GridCoordinate)> {
    let mover = state.current_player();
    let flying = state.token_count(mover) == MIN_PLAYER_TOKEN_COUNT;
    let empty = state.empty_coordinates();

    let mut moves = Vec::new();
    for token in state.tokens().iter().filter(|t| t.player == mover) {
        if flying {
            for dest in &empty {
                moves.push((token.coord, *dest));
            }
        } else {
            for dest in token.coord.neighbors() {
                if state.token_at(dest).is_none() {
                    moves.push((token.coord, dest));
                }
            }
        }
    }
    moves
}

/// Drive one seat's complete turn: the placement or movement, then any
/// capture the resulting mill demands. When every capture target is
/// protected the capture is skipped by advancing directly.
pub fn play_local_turn(
    state: &mut GameState,
    participant: &mut dyn Participant,
    rng: &mut SmallRng,
) -> anyhow::Result<()> {
    let mover = state.current_player();
    while state.winner().is_none() && state.current_player() == mover {
        if state.is_capturing_piece() {
            let candidates = state.removable_tokens(state.current_opponent());
            if candidates.is_empty() {
                log::info!(
                    "every {} token is mill-protected, capture skipped",
                    state.current_opponent().name()
                );
                state.advance();
                continue;
            }
            let coord = participant.choose_capture(rng, state, &candidates)?;
            if !state.remove_token(coord) {
                anyhow::bail!("participant chose an illegal capture at {}", point_label(coord));
            }
        } else {
            match state.phase() {
                GamePhase::Placement => {
                    let coord = participant.choose_placement(rng, state)?;
                    if !state.place_token(coord) {
                        anyhow::bail!(
                            "participant chose an illegal placement at {}",
                            point_label(coord)
                        );
                    }
                }
                GamePhase::Movement => {
                    let (from, to) = participant.choose_move(rng, state)?;
                    if !state.move_token(from, to) {
                        anyhow::bail!(
                            "participant chose an illegal move {} -> {}",
                            point_label(from),
                            point_label(to)
                        );
                    }
                }
            }
        }
    }
    Ok(())
}

pub mod random;
pub use random::RandomParticipant;

pub mod cli;
pub use cli::CliParticipant;
