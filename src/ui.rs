//! ASCII board rendering and the `a1..g7` point notation used by the
//! CLI. Columns run `a..g` left to right, rows `1..7` bottom to top; the
//! 24 playable intersections follow the classical three-ring layout.

use crate::game::GameState;
use crate::grid::{GridCoordinate, GridLayer, GridPosition, ALL_COORDINATES};
use crate::token::Player;

/// `a1..g7` label of a board point.
pub fn point_label(coord: GridCoordinate) -> String {
    let offset = match coord.layer {
        GridLayer::Outer => 0u8,
        GridLayer::Middle => 1,
        GridLayer::Center => 2,
    };
    let col = match coord.x {
        GridPosition::Min => offset,
        GridPosition::Mid => 3,
        GridPosition::Max => 6 - offset,
    };
    let row = match coord.y {
        GridPosition::Min => 1 + offset,
        GridPosition::Mid => 4,
        GridPosition::Max => 7 - offset,
    };
    format!("{}{}", (b'a' + col) as char, row)
}

/// Parse a point label back into a coordinate. Case-insensitive; returns
/// `None` for anything that is not one of the 24 playable points.
pub fn parse_point(input: &str) -> Option<GridCoordinate> {
    let needle = input.trim().to_ascii_lowercase();
    ALL_COORDINATES
        .iter()
        .copied()
        .find(|coord| point_label(*coord) == needle)
}

/// Draw the board with `K`/`T` markers on occupied points.
pub fn render_board(state: &GameState) -> String {
    let g = |label: &str| -> char {
        let coord = parse_point(label).expect("valid point label");
        match state.token_at(coord) {
            Some(token) if token.player == Player::Knight => 'K',
            Some(_) => 'T',
            None => '.',
        }
    };

    let mut out = String::new();
    out.push_str(&format!(
        "7  {}-----------{}-----------{}\n",
        g("a7"),
        g("d7"),
        g("g7")
    ));
    out.push_str("   |           |           |\n");
    out.push_str(&format!(
        "6  |   {}-------{}-------{}   |\n",
        g("b6"),
        g("d6"),
        g("f6")
    ));
    out.push_str("   |   |       |       |   |\n");
    out.push_str(&format!(
        "5  |   |   {}---{}---{}   |   |\n",
        g("c5"),
        g("d5"),
        g("e5")
    ));
    out.push_str("   |   |   |       |   |   |\n");
    out.push_str(&format!(
        "4  {}---{}---{}       {}---{}---{}\n",
        g("a4"),
        g("b4"),
        g("c4"),
        g("e4"),
        g("f4"),
        g("g4")
    ));
    out.push_str("   |   |   |       |   |   |\n");
    out.push_str(&format!(
        "3  |   |   {}---{}---{}   |   |\n",
        g("c3"),
        g("d3"),
        g("e3")
    ));
    out.push_str("   |   |       |       |   |\n");
    out.push_str(&format!(
        "2  |   {}-------{}-------{}   |\n",
        g("b2"),
        g("d2"),
        g("f2")
    ));
    out.push_str("   |           |           |\n");
    out.push_str(&format!(
        "1  {}-----------{}-----------{}\n",
        g("a1"),
        g("d1"),
        g("g1")
    ));
    out.push_str("   a   b   c   d   e   f   g\n");
    out
}

pub fn print_board(state: &GameState) {
    println!("\n{}", render_board(state));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_roundtrip_for_every_point() {
        for coord in ALL_COORDINATES {
            let label = point_label(coord);
            assert_eq!(parse_point(&label), Some(coord), "label {}", label);
        }
    }

    #[test]
    fn labels_are_unique() {
        for a in ALL_COORDINATES {
            for b in ALL_COORDINATES {
                if a != b {
                    assert_ne!(point_label(a), point_label(b));
                }
            }
        }
    }

    #[test]
    fn junction_labels_share_the_mid_file() {
        assert_eq!(
            parse_point("d7"),
            Some(GridCoordinate::new(
                GridPosition::Mid,
                GridPosition::Max,
                GridLayer::Outer
            ))
        );
        assert_eq!(
            parse_point("d5"),
            Some(GridCoordinate::new(
                GridPosition::Mid,
                GridPosition::Max,
                GridLayer::Center
            ))
        );
        assert_eq!(parse_point("d4"), None);
        assert_eq!(parse_point("z9"), None);
    }

    #[test]
    fn render_marks_every_empty_point() {
        let board = render_board(&GameState::new());
        assert_eq!(board.matches('.').count(), 24);
    }
}
