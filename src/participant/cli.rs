use std::io::{self, BufRead, Write};

use rand::rngs::SmallRng;

use crate::game::GameState;
use crate::grid::GridCoordinate;
use crate::participant::{legal_moves, Participant};
use crate::token::Token;
use crate::ui::{parse_point, point_label};

/// Interactive seat reading `a1..g7` point labels from stdin. Input is
/// validated against the same legality queries the engine trusts its
/// callers for, re-prompting until the entry is legal.
pub struct CliParticipant;

impl CliParticipant {
    pub fn new() -> Self {
        Self
    }

    fn prompt(&self, text: &str) -> anyhow::Result<String> {
        print!("{}", text);
        io::stdout().flush()?;
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        anyhow::ensure!(read > 0, "input closed");
        Ok(line.trim().to_string())
    }
}

impl Default for CliParticipant {
    fn default() -> Self {
        Self::new()
    }
}

impl Participant for CliParticipant {
    fn choose_placement(
        &mut self,
        _rng: &mut SmallRng,
        state: &GameState,
    ) -> anyhow::Result<GridCoordinate> {
        loop {
            let line = self.prompt(&format!(
                "{}, place a token (e.g. d6): ",
                state.current_player().name()
            ))?;
            match parse_point(&line) {
                Some(coord) if state.token_at(coord).is_none() => return Ok(coord),
                Some(_) => println!("That point is taken."),
                None => println!("Unknown point, use a1..g7 notation."),
            }
        }
    }

    fn choose_move(
        &mut self,
        _rng: &mut SmallRng,
        state: &GameState,
    ) -> anyhow::Result<(GridCoordinate, GridCoordinate)> {
        let moves = legal_moves(state);
        loop {
            let line = self.prompt(&format!(
                "{}, move a token (e.g. a7 a4): ",
                state.current_player().name()
            ))?;
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() != 2 {
                println!("Enter two points, e.g. a7 a4.");
                continue;
            }
            match (parse_point(parts[0]), parse_point(parts[1])) {
                (Some(from), Some(to)) if moves.contains(&(from, to)) => return Ok((from, to)),
                (Some(_), Some(_)) => println!("Not a legal move."),
                _ => println!("Unknown point, use a1..g7 notation."),
            }
        }
    }

    fn choose_capture(
        &mut self,
        _rng: &mut SmallRng,
        state: &GameState,
        candidates: &[Token],
    ) -> anyhow::Result<GridCoordinate> {
        let labels: Vec<String> = candidates.iter().map(|t| point_label(t.coord)).collect();
        loop {
            let line = self.prompt(&format!(
                "{}, take an opponent's piece ({}): ",
                state.current_player().name(),
                labels.join(" ")
            ))?;
            match parse_point(&line) {
                Some(coord) if candidates.iter().any(|t| t.coord == coord) => return Ok(coord),
                Some(_) => println!("That piece cannot be taken."),
                None => println!("Unknown point, use a1..g7 notation."),
            }
        }
    }
}
