//! Validation errors reported by [`World`](crate::World) edits.

use std::fmt;

use crate::geom::{Coord, Range};
use crate::terrain::Terrain;

/// Which designated cell an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// A rejected world edit. No mutation happens when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// Height or width was not positive.
    #[error("invalid world size {height}x{width}: both dimensions must be positive")]
    InvalidDimensions { height: i32, width: i32 },
    /// The requested grid holds more than [`MAX_CELLS`](crate::MAX_CELLS)
    /// cells.
    #[error("world size {height}x{width} exceeds the limit of {max} cells", max = crate::MAX_CELLS)]
    TooLarge { height: i32, width: i32 },
    /// A stored world whose cells do not fill its bounds.
    #[error("{cells} stored cells do not fill a {bounds} map anchored at (0, 0)")]
    Malformed { bounds: Range, cells: usize },
    /// The coordinate lies outside the world.
    #[error("{pos} is outside the {bounds} map")]
    OutOfBounds { pos: Coord, bounds: Range },
    /// Start or goal was placed on a cell that is not free.
    #[error("the {endpoint} cannot be placed on {terrain} at {pos}")]
    NotFree {
        endpoint: Endpoint,
        pos: Coord,
        terrain: Terrain,
    },
    /// `Free` was passed where an obstacle tag is required.
    #[error("{0} is not an obstacle type (use building, water or blocked)")]
    NotAnObstacle(Terrain),
    /// A numeric terrain code outside the known set.
    #[error("invalid terrain type {0} (use 1=building, 2=water, 3=blocked)")]
    InvalidTerrainCode(i32),
    /// An obstacle was placed on the current start or goal.
    #[error("cannot place an obstacle on the {endpoint} at {pos}")]
    OnEndpoint { endpoint: Endpoint, pos: Coord },
}
