//! The turn-based rules engine: placement, movement, mill detection,
//! capture, and win bookkeeping.
//!
//! The engine is a plain value type with no I/O. Callers pre-validate
//! their input (board hit-testing, movement adjacency, flying), so misuse
//! is answered with a `false` return and an untouched state rather than an
//! error. Exactly one owner mutates a state at a time; concurrent callers
//! must serialize access themselves.

#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};

use crate::config::{LOSING_TOKEN_COUNT, MIN_PLAYER_TOKEN_COUNT, PLACEMENT_QUOTA};
use crate::grid::{GridCoordinate, GridPosition, ALL_COORDINATES};
use crate::token::{Player, Token};

/// Progression of a match. Entering `Movement` is one-way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub enum GamePhase {
    Placement,
    Movement,
}

/// The most recent action, kept for display and animation purposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub enum LastMove {
    Placed { at: GridCoordinate },
    Removed { at: GridCoordinate },
    Moved { start: GridCoordinate, end: GridCoordinate },
}

/// Complete state of one match. Serializes wholesale; a snapshot taken
/// after any operation reconstructs an identical engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct GameState {
    turn: u32,
    phase: GamePhase,
    tokens: Vec<Token>,
    winner: Option<Player>,
    tokens_placed: u32,
    mill_tokens: Vec<Token>,
    current_mill: Option<Vec<Token>>,
    last_move: Option<LastMove>,
    is_knight_turn: bool,
}

impl GameState {
    /// Fresh match, Knight to place first.
    pub fn new() -> Self {
        Self::starting_with(Player::Knight)
    }

    pub fn starting_with(first: Player) -> Self {
        GameState {
            turn: 0,
            phase: GamePhase::Placement,
            tokens: Vec::new(),
            winner: None,
            tokens_placed: 0,
            mill_tokens: Vec::new(),
            current_mill: None,
            last_move: None,
            is_knight_turn: first == Player::Knight,
        }
    }

    // --- read queries ---

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn tokens_placed(&self) -> u32 {
        self.tokens_placed
    }

    /// Tokens currently protected by an active mill. A running list kept
    /// by value; a token sitting on two mills is listed once per mill.
    pub fn mill_tokens(&self) -> &[Token] {
        &self.mill_tokens
    }

    /// The mill formed by the most recent action. While this is set the
    /// match is capture-pending: only a removal is accepted.
    pub fn current_mill(&self) -> Option<&[Token]> {
        self.current_mill.as_deref()
    }

    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    pub fn is_knight_turn(&self) -> bool {
        self.is_knight_turn
    }

    pub fn current_player(&self) -> Player {
        if self.is_knight_turn {
            Player::Knight
        } else {
            Player::Troll
        }
    }

    pub fn current_opponent(&self) -> Player {
        self.current_player().opponent()
    }

    pub fn is_capturing_piece(&self) -> bool {
        self.current_mill.is_some()
    }

    pub fn token_at(&self, coord: GridCoordinate) -> Option<&Token> {
        self.tokens.iter().find(|t| t.coord == coord)
    }

    pub fn token_count(&self, player: Player) -> usize {
        self.tokens.iter().filter(|t| t.player == player).count()
    }

    /// Unoccupied points, in the canonical board order.
    pub fn empty_coordinates(&self) -> Vec<GridCoordinate> {
        ALL_COORDINATES
            .iter()
            .copied()
            .filter(|coord| self.token_at(*coord).is_none())
            .collect()
    }

    /// Legal capture targets for a pending removal against `player`: all
    /// of their tokens at exactly 3 (protection lapses), otherwise only
    /// the unprotected ones. Empty means the capture cannot proceed and
    /// the caller must `advance` directly.
    pub fn removable_tokens(&self, player: Player) -> Vec<Token> {
        let player_tokens: Vec<Token> = self
            .tokens
            .iter()
            .copied()
            .filter(|t| t.player == player)
            .collect();

        if player_tokens.len() == MIN_PLAYER_TOKEN_COUNT {
            return player_tokens;
        }

        player_tokens
            .into_iter()
            .filter(|t| !self.mill_tokens.contains(t))
            .collect()
    }

    /// Human-readable turn, capture, or win text.
    pub fn message_to_display(&self) -> String {
        if self.is_capturing_piece() {
            return String::from("Take an opponent's piece!");
        }

        let action = match self.phase {
            GamePhase::Placement => "place",
            GamePhase::Movement => {
                if self.token_count(Player::Knight) < MIN_PLAYER_TOKEN_COUNT {
                    return String::from("Troll's win!");
                }
                if self.token_count(Player::Troll) < MIN_PLAYER_TOKEN_COUNT {
                    return String::from("Knight's win!");
                }
                "move"
            }
        };

        format!("{}'s turn to {}", self.current_player().name(), action)
    }

    /// The mill `token` sits on, if any: first the line through its x
    /// axis, then the line through its y axis. A `Mid` axis stacks the
    /// line across the three rings; a `Min`/`Max` axis runs it along the
    /// token's own ring.
    pub fn mill_containing(&self, token: &Token) -> Option<Vec<Token>> {
        let coord = token.coord;
        let layers = coord.layer.others();

        let horizontal = match coord.x {
            GridPosition::Mid => {
                layers.map(|layer| GridCoordinate::new(coord.x, coord.y, layer))
            }
            GridPosition::Min | GridPosition::Max => coord
                .y
                .others()
                .map(|y| GridCoordinate::new(coord.x, y, coord.layer)),
        };
        if let Some(mill) = self.matching_line(token, horizontal) {
            return Some(mill);
        }

        let vertical = match coord.y {
            GridPosition::Mid => {
                layers.map(|layer| GridCoordinate::new(coord.x, coord.y, layer))
            }
            GridPosition::Min | GridPosition::Max => coord
                .x
                .others()
                .map(|x| GridCoordinate::new(x, coord.y, coord.layer)),
        };
        self.matching_line(token, vertical)
    }

    fn matching_line(&self, token: &Token, alternates: [GridCoordinate; 2]) -> Option<Vec<Token>> {
        let line = [token.coord, alternates[0], alternates[1]];
        let members: Vec<Token> = self
            .tokens
            .iter()
            .copied()
            .filter(|t| t.player == token.player && line.contains(&t.coord))
            .collect();
        if members.len() == 3 {
            Some(members)
        } else {
            None
        }
    }

    // --- mutations ---

    /// Place a token for the current player. Placement phase only, never
    /// while a capture is pending, never onto an occupied or off-board
    /// point. A completed mill leaves the turn with the placer until the
    /// capture resolves.
    pub fn place_token(&mut self, coord: GridCoordinate) -> bool {
        if self.phase != GamePhase::Placement || self.winner.is_some() || self.is_capturing_piece()
        {
            return false;
        }
        if !coord.is_on_board() || self.token_at(coord).is_some() {
            return false;
        }

        let token = Token::new(self.current_player(), coord);
        self.tokens.push(token);
        self.tokens_placed += 1;
        self.last_move = Some(LastMove::Placed { at: coord });

        match self.mill_containing(&token) {
            Some(mill) => {
                self.mill_tokens.extend_from_slice(&mill);
                self.current_mill = Some(mill);
            }
            None => self.advance(),
        }
        true
    }

    /// Capture the token at `coord`. Only valid while a capture is
    /// pending, and refused for a mill-protected token unless its owner
    /// is down to exactly 3. Ownership is the caller's to check.
    pub fn remove_token(&mut self, coord: GridCoordinate) -> bool {
        if !self.is_capturing_piece() {
            return false;
        }
        let index = match self.tokens.iter().position(|t| t.coord == coord) {
            Some(index) => index,
            None => return false,
        };
        let target = self.tokens[index];

        if self.token_count(self.current_opponent()) != MIN_PLAYER_TOKEN_COUNT
            && self.mill_tokens.contains(&target)
        {
            return false;
        }

        self.tokens.remove(index);
        self.mill_tokens.retain(|t| *t != target);
        self.last_move = Some(LastMove::Removed { at: coord });
        self.advance();
        true
    }

    /// Move the token at `from` to the empty point `to`. Movement phase
    /// only, never while a capture is pending. Adjacency and flying are
    /// the caller's responsibility; the engine accepts any empty
    /// destination.
    pub fn move_token(&mut self, from: GridCoordinate, to: GridCoordinate) -> bool {
        if self.phase != GamePhase::Movement || self.winner.is_some() || self.is_capturing_piece()
        {
            return false;
        }
        if !to.is_on_board() || self.token_at(to).is_some() {
            return false;
        }
        let index = match self.tokens.iter().position(|t| t.coord == from) {
            Some(index) => index,
            None => return false,
        };
        let previous = self.tokens[index];
        let moved = Token::new(previous.player, to);

        // The departing token's mill has to be read off its old position,
        // before the board changes under it.
        let broken = self.mill_containing(&previous).unwrap_or_default();
        for member in &broken {
            if let Some(at) = self.mill_tokens.iter().position(|t| t == member) {
                self.mill_tokens.remove(at);
            }
        }

        self.tokens[index] = moved;

        // Stationary members of the broken mill may still sit on another
        // complete line from their own position; those stay protected.
        for member in &broken {
            if *member != previous && self.mill_containing(member).is_some() {
                self.mill_tokens.push(*member);
            }
        }

        self.last_move = Some(LastMove::Moved {
            start: from,
            end: to,
        });

        match self.mill_containing(&moved) {
            Some(mill) => {
                self.mill_tokens.extend_from_slice(&mill);
                self.current_mill = Some(mill);
            }
            None => self.advance(),
        }
        true
    }

    /// Close out a half-move: enter the movement phase once the placement
    /// quota is spent, count the turn, shut the capture window, then
    /// either declare a winner or pass the turn. Public because the
    /// caller must invoke it directly when a pending capture has no legal
    /// target.
    pub fn advance(&mut self) {
        if self.tokens_placed == PLACEMENT_QUOTA && self.phase == GamePhase::Placement {
            self.phase = GamePhase::Movement;
        }

        self.turn += 1;
        self.current_mill = None;

        if self.phase == GamePhase::Movement {
            if self.token_count(Player::Knight) == LOSING_TOKEN_COUNT {
                self.winner = Some(Player::Troll);
            } else if self.token_count(Player::Troll) == LOSING_TOKEN_COUNT {
                self.winner = Some(Player::Knight);
            } else {
                self.is_knight_turn = !self.is_knight_turn;
            }
        } else {
            self.is_knight_turn = !self.is_knight_turn;
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl GameState {
    /// Encode the whole state as the opaque per-turn payload handed to
    /// the transport layer.
    pub fn to_payload(&self) -> anyhow::Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode a received payload. A corrupt or missing payload yields a
    /// fresh initial state rather than an error.
    pub fn from_payload(payload: &[u8]) -> Self {
        match serde_json::from_slice(payload) {
            Ok(state) => state,
            Err(err) => {
                log::warn!("discarding undecodable match payload: {}", err);
                GameState::new()
            }
        }
    }
}
