//! Board topology: the 24 legal points of the three-ring board and the
//! adjacency rule between them.
//!
//! The board is three concentric square rings of 8 points each. Rings are
//! joined only at their edge midpoints, and only through the middle ring.
//! There is no center point: `(Mid, Mid)` is not on the board.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Ordinal position along one axis of a ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub enum GridPosition {
    Min,
    Mid,
    Max,
}

impl GridPosition {
    /// The two positions this one is not.
    pub fn others(self) -> [GridPosition; 2] {
        match self {
            GridPosition::Min => [GridPosition::Mid, GridPosition::Max],
            GridPosition::Mid => [GridPosition::Min, GridPosition::Max],
            GridPosition::Max => [GridPosition::Min, GridPosition::Mid],
        }
    }
}

/// One of the three rings, outermost first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub enum GridLayer {
    Outer,
    Middle,
    Center,
}

impl GridLayer {
    /// The two layers this one is not.
    pub fn others(self) -> [GridLayer; 2] {
        match self {
            GridLayer::Outer => [GridLayer::Middle, GridLayer::Center],
            GridLayer::Middle => [GridLayer::Outer, GridLayer::Center],
            GridLayer::Center => [GridLayer::Outer, GridLayer::Middle],
        }
    }
}

/// One point of the board. Equality is structural.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCoordinate {
    pub x: GridPosition,
    pub y: GridPosition,
    pub layer: GridLayer,
}

/// Every legal point, in the canonical order: each ring clockwise from its
/// top-left corner, outer ring first.
pub const ALL_COORDINATES: [GridCoordinate; 24] = [
    GridCoordinate::new(GridPosition::Min, GridPosition::Max, GridLayer::Outer),
    GridCoordinate::new(GridPosition::Mid, GridPosition::Max, GridLayer::Outer),
    GridCoordinate::new(GridPosition::Max, GridPosition::Max, GridLayer::Outer),
    GridCoordinate::new(GridPosition::Max, GridPosition::Mid, GridLayer::Outer),
    GridCoordinate::new(GridPosition::Max, GridPosition::Min, GridLayer::Outer),
    GridCoordinate::new(GridPosition::Mid, GridPosition::Min, GridLayer::Outer),
    GridCoordinate::new(GridPosition::Min, GridPosition::Min, GridLayer::Outer),
    GridCoordinate::new(GridPosition::Min, GridPosition::Mid, GridLayer::Outer),
    GridCoordinate::new(GridPosition::Min, GridPosition::Max, GridLayer::Middle),
    GridCoordinate::new(GridPosition::Mid, GridPosition::Max, GridLayer::Middle),
    GridCoordinate::new(GridPosition::Max, GridPosition::Max, GridLayer::Middle),
    GridCoordinate::new(GridPosition::Max, GridPosition::Mid, GridLayer::Middle),
    GridCoordinate::new(GridPosition::Max, GridPosition::Min, GridLayer::Middle),
    GridCoordinate::new(GridPosition::Mid, GridPosition::Min, GridLayer::Middle),
    GridCoordinate::new(GridPosition::Min, GridPosition::Min, GridLayer::Middle),
    GridCoordinate::new(GridPosition::Min, GridPosition::Mid, GridLayer::Middle),
    GridCoordinate::new(GridPosition::Min, GridPosition::Max, GridLayer::Center),
    GridCoordinate::new(GridPosition::Mid, GridPosition::Max, GridLayer::Center),
    GridCoordinate::new(GridPosition::Max, GridPosition::Max, GridLayer::Center),
    GridCoordinate::new(GridPosition::Max, GridPosition::Mid, GridLayer::Center),
    GridCoordinate::new(GridPosition::Max, GridPosition::Min, GridLayer::Center),
    GridCoordinate::new(GridPosition::Mid, GridPosition::Min, GridLayer::Center),
    GridCoordinate::new(GridPosition::Min, GridPosition::Min, GridLayer::Center),
    GridCoordinate::new(GridPosition::Min, GridPosition::Mid, GridLayer::Center),
];

impl GridCoordinate {
    pub const fn new(x: GridPosition, y: GridPosition, layer: GridLayer) -> Self {
        GridCoordinate { x, y, layer }
    }

    /// False exactly for the nonexistent `(Mid, Mid)` triples.
    pub fn is_on_board(&self) -> bool {
        !(self.x == GridPosition::Mid && self.y == GridPosition::Mid)
    }

    /// Points reachable from here in a single move.
    ///
    /// Each axis contributes independently: a `Mid` axis reaches both ends
    /// of its line on the same ring; a `Min`/`Max` axis reaches the edge
    /// midpoint, unless the other axis is `Mid`, in which case the point is
    /// a junction and hops rings instead (`Outer` and `Center` connect only
    /// through `Middle`). Corners end up with 2 neighbors, junctions on the
    /// middle ring with 4, everything else with 3.
    pub fn neighbors(&self) -> Vec<GridCoordinate> {
        let mut neighbors = Vec::with_capacity(4);

        match self.x {
            GridPosition::Mid => {
                neighbors.push(GridCoordinate::new(GridPosition::Min, self.y, self.layer));
                neighbors.push(GridCoordinate::new(GridPosition::Max, self.y, self.layer));
            }
            GridPosition::Min | GridPosition::Max => {
                if self.y == GridPosition::Mid {
                    match self.layer {
                        GridLayer::Middle => {
                            neighbors.push(GridCoordinate::new(self.x, self.y, GridLayer::Outer));
                            neighbors.push(GridCoordinate::new(self.x, self.y, GridLayer::Center));
                        }
                        GridLayer::Outer | GridLayer::Center => {
                            neighbors.push(GridCoordinate::new(self.x, self.y, GridLayer::Middle));
                        }
                    }
                } else {
                    neighbors.push(GridCoordinate::new(GridPosition::Mid, self.y, self.layer));
                }
            }
        }

        match self.y {
            GridPosition::Mid => {
                neighbors.push(GridCoordinate::new(self.x, GridPosition::Min, self.layer));
                neighbors.push(GridCoordinate::new(self.x, GridPosition::Max, self.layer));
            }
            GridPosition::Min | GridPosition::Max => {
                if self.x == GridPosition::Mid {
                    match self.layer {
                        GridLayer::Middle => {
                            neighbors.push(GridCoordinate::new(self.x, self.y, GridLayer::Outer));
                            neighbors.push(GridCoordinate::new(self.x, self.y, GridLayer::Center));
                        }
                        GridLayer::Outer | GridLayer::Center => {
                            neighbors.push(GridCoordinate::new(self.x, self.y, GridLayer::Middle));
                        }
                    }
                } else {
                    neighbors.push(GridCoordinate::new(self.x, GridPosition::Mid, self.layer));
                }
            }
        }

        neighbors
    }
}
