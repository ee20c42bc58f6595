//! Terrain tags and the traversal cost model.

use std::fmt;

use crate::error::WorldError;

/// The terrain held by a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    /// Open ground.
    #[default]
    Free,
    /// Hard obstacle.
    Building,
    /// Passable, but expensive.
    Water,
    /// Hard obstacle.
    Blocked,
}

impl Terrain {
    /// Every terrain tag, in menu-code order.
    pub const ALL: [Terrain; 4] = [
        Terrain::Free,
        Terrain::Building,
        Terrain::Water,
        Terrain::Blocked,
    ];

    /// Cost of entering a cell with this terrain, or `None` if impassable.
    #[inline]
    pub const fn cost(self) -> Option<i32> {
        match self {
            Self::Free => Some(1),
            Self::Water => Some(3),
            Self::Building | Self::Blocked => None,
        }
    }

    /// Whether a path may enter a cell with this terrain.
    #[inline]
    pub const fn passable(self) -> bool {
        self.cost().is_some()
    }

    /// Whether this tag can be placed with an obstacle edit.
    #[inline]
    pub const fn is_obstacle(self) -> bool {
        !matches!(self, Self::Free)
    }

    /// Numeric code used by the menu: 0 free, 1 building, 2 water, 3 blocked.
    #[inline]
    pub const fn code(self) -> i32 {
        match self {
            Self::Free => 0,
            Self::Building => 1,
            Self::Water => 2,
            Self::Blocked => 3,
        }
    }

    /// Inverse of [`code`](Terrain::code).
    pub fn from_code(code: i32) -> Result<Self, WorldError> {
        Self::ALL
            .into_iter()
            .find(|t| t.code() == code)
            .ok_or(WorldError::InvalidTerrainCode(code))
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Free => "free ground",
            Self::Building => "a building",
            Self::Water => "water",
            Self::Blocked => "a blocked cell",
        };
        f.write_str(name)
    }
}
