//! The [`World`] type: a fixed-size grid of [`Terrain`] with optional start
//! and goal cells.
//!
//! Every edit validates first and mutates only on success, returning a
//! [`WorldError`] that doubles as the user-facing diagnostic.

use log::{debug, warn};

use crate::error::{Endpoint, WorldError};
use crate::geom::{Coord, Range};
use crate::terrain::Terrain;

/// Height used when a world is requested with invalid dimensions.
pub const DEFAULT_HEIGHT: i32 = 10;
/// Width used when a world is requested with invalid dimensions.
pub const DEFAULT_WIDTH: i32 = 10;
/// Largest number of cells a world may hold.
pub const MAX_CELLS: usize = 1_000_000;

/// A rectangular terrain map with optional start and goal designations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawWorld")
)]
pub struct World {
    bounds: Range,
    cells: Vec<Terrain>,
    start: Option<Coord>,
    goal: Option<Coord>,
}

impl Default for World {
    fn default() -> Self {
        Self::blank(DEFAULT_HEIGHT, DEFAULT_WIDTH)
    }
}

impl World {
    /// Create an all-free world, falling back to
    /// [`DEFAULT_HEIGHT`]×[`DEFAULT_WIDTH`] when the size is rejected by
    /// [`with_size`](World::with_size).
    pub fn new(height: i32, width: i32) -> Self {
        Self::sized_or_default(height, width).0
    }

    /// Like [`new`](World::new), but also hands back the error that caused
    /// a fallback so callers can report it.
    pub fn sized_or_default(height: i32, width: i32) -> (Self, Option<WorldError>) {
        match Self::with_size(height, width) {
            Ok(world) => (world, None),
            Err(e) => {
                warn!("{e}; using {DEFAULT_HEIGHT}x{DEFAULT_WIDTH} instead");
                (Self::default(), Some(e))
            }
        }
    }

    /// Create an all-free world, rejecting non-positive dimensions and
    /// grids of more than [`MAX_CELLS`] cells.
    pub fn with_size(height: i32, width: i32) -> Result<Self, WorldError> {
        if height <= 0 || width <= 0 {
            return Err(WorldError::InvalidDimensions { height, width });
        }
        match (height as usize).checked_mul(width as usize) {
            Some(n) if n <= MAX_CELLS => Ok(Self::blank(height, width)),
            _ => Err(WorldError::TooLarge { height, width }),
        }
    }

    fn blank(height: i32, width: i32) -> Self {
        let bounds = Range::sized(height, width);
        Self {
            bounds,
            cells: vec![Terrain::Free; bounds.len()],
            start: None,
            goal: None,
        }
    }

    /// The `[0, height) × [0, width)` bounds of the world.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Whether `pos` addresses a cell of this world.
    #[inline]
    pub fn in_bounds(&self, pos: Coord) -> bool {
        self.bounds.contains(pos)
    }

    #[inline]
    fn index(&self, pos: Coord) -> Option<usize> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(pos.row as usize * self.width() as usize + pos.col as usize)
    }

    fn check_bounds(&self, pos: Coord) -> Result<usize, WorldError> {
        self.index(pos).ok_or(WorldError::OutOfBounds {
            pos,
            bounds: self.bounds,
        })
    }

    /// Terrain at `pos`, or `None` if out of bounds.
    #[inline]
    pub fn terrain(&self, pos: Coord) -> Option<Terrain> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// The designated start cell, if any.
    #[inline]
    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    /// The designated goal cell, if any.
    #[inline]
    pub fn goal(&self) -> Option<Coord> {
        self.goal
    }

    /// Row-major iterator over `(Coord, Terrain)` pairs.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Terrain)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Designate the start cell. The cell must be in bounds and free.
    pub fn set_start(&mut self, pos: Coord) -> Result<(), WorldError> {
        self.check_endpoint(Endpoint::Start, pos)?;
        self.start = Some(pos);
        debug!("start set to {pos}");
        Ok(())
    }

    /// Designate the goal cell. The cell must be in bounds and free.
    pub fn set_goal(&mut self, pos: Coord) -> Result<(), WorldError> {
        self.check_endpoint(Endpoint::Goal, pos)?;
        self.goal = Some(pos);
        debug!("goal set to {pos}");
        Ok(())
    }

    fn check_endpoint(&self, endpoint: Endpoint, pos: Coord) -> Result<(), WorldError> {
        let i = self.check_bounds(pos)?;
        let terrain = self.cells[i];
        if terrain != Terrain::Free {
            return Err(WorldError::NotFree {
                endpoint,
                pos,
                terrain,
            });
        }
        Ok(())
    }

    /// Remove the start designation.
    pub fn clear_start(&mut self) -> Option<Coord> {
        self.start.take()
    }

    /// Remove the goal designation.
    pub fn clear_goal(&mut self) -> Option<Coord> {
        self.goal.take()
    }

    /// Place an obstacle (building, water or blocked) at `pos`.
    ///
    /// Fails for [`Terrain::Free`] (use [`clear_cell`](World::clear_cell)),
    /// out-of-bounds coordinates, and the current start or goal cell.
    pub fn set_terrain(&mut self, pos: Coord, terrain: Terrain) -> Result<(), WorldError> {
        if !terrain.is_obstacle() {
            return Err(WorldError::NotAnObstacle(terrain));
        }
        let i = self.check_bounds(pos)?;
        if let Some(endpoint) = self.endpoint_at(pos) {
            return Err(WorldError::OnEndpoint { endpoint, pos });
        }
        self.cells[i] = terrain;
        debug!("{terrain:?} placed at {pos}");
        Ok(())
    }

    /// Reset the cell at `pos` to [`Terrain::Free`].
    ///
    /// Out-of-bounds coordinates are rejected without touching the world.
    pub fn clear_cell(&mut self, pos: Coord) -> Result<(), WorldError> {
        let i = self.check_bounds(pos)?;
        self.cells[i] = Terrain::Free;
        debug!("cell {pos} cleared");
        Ok(())
    }

    /// Which endpoint, if any, is designated at `pos`. Start wins a tie.
    pub fn endpoint_at(&self, pos: Coord) -> Option<Endpoint> {
        if self.start == Some(pos) {
            Some(Endpoint::Start)
        } else if self.goal == Some(pos) {
            Some(Endpoint::Goal)
        } else {
            None
        }
    }
}

/// Unchecked serialized form of a [`World`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawWorld {
    bounds: Range,
    cells: Vec<Terrain>,
    start: Option<Coord>,
    goal: Option<Coord>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawWorld> for World {
    type Error = WorldError;

    fn try_from(raw: RawWorld) -> Result<Self, WorldError> {
        let mut world = Self::with_size(raw.bounds.height(), raw.bounds.width())?;
        if raw.bounds != world.bounds || raw.cells.len() != world.cells.len() {
            return Err(WorldError::Malformed {
                bounds: raw.bounds,
                cells: raw.cells.len(),
            });
        }
        world.cells = raw.cells;
        if let Some(pos) = raw.start {
            world.set_start(pos)?;
        }
        if let Some(pos) = raw.goal {
            world.set_goal(pos)?;
        }
        Ok(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_all_free_without_endpoints() {
        let w = World::new(3, 4);
        assert_eq!(w.height(), 3);
        assert_eq!(w.width(), 4);
        assert!(w.cells().all(|(_, t)| t == Terrain::Free));
        assert_eq!(w.cells().count(), 12);
        assert_eq!(w.start(), None);
        assert_eq!(w.goal(), None);
    }

    #[test]
    fn invalid_dimensions_fall_back_to_default() {
        for (h, w) in [(0, 5), (5, 0), (-3, 4), (0, 0)] {
            let world = World::new(h, w);
            assert_eq!(world.height(), DEFAULT_HEIGHT);
            assert_eq!(world.width(), DEFAULT_WIDTH);
        }
        assert_eq!(
            World::with_size(0, 5),
            Err(WorldError::InvalidDimensions {
                height: 0,
                width: 5
            })
        );
    }

    #[test]
    fn oversized_worlds_are_rejected() {
        for (h, w) in [(2_000_000_000, 2_000_000_000), (1001, 1000), (i32::MAX, 1)] {
            assert_eq!(
                World::with_size(h, w),
                Err(WorldError::TooLarge {
                    height: h,
                    width: w
                })
            );
            let world = World::new(h, w);
            assert_eq!(world.height(), DEFAULT_HEIGHT);
            assert_eq!(world.width(), DEFAULT_WIDTH);
        }
        let edge = World::with_size(1000, 1000).unwrap();
        assert_eq!(edge.cells().count(), MAX_CELLS);
    }

    #[test]
    fn fallback_reports_the_rejected_size() {
        let (world, err) = World::sized_or_default(-1, 3);
        assert_eq!(world, World::default());
        assert_eq!(
            err,
            Some(WorldError::InvalidDimensions {
                height: -1,
                width: 3
            })
        );
        let (world, err) = World::sized_or_default(2, 3);
        assert_eq!((world.height(), world.width(), err), (2, 3, None));
    }

    #[test]
    fn in_bounds_edges() {
        let w = World::new(2, 3);
        assert!(w.in_bounds(Coord::new(0, 0)));
        assert!(w.in_bounds(Coord::new(1, 2)));
        assert!(!w.in_bounds(Coord::new(2, 0)));
        assert!(!w.in_bounds(Coord::new(0, 3)));
        assert!(!w.in_bounds(Coord::new(-1, 0)));
        assert_eq!(w.terrain(Coord::new(5, 5)), None);
    }

    #[test]
    fn set_start_and_goal() {
        let mut w = World::new(3, 3);
        w.set_start(Coord::new(0, 0)).unwrap();
        w.set_goal(Coord::new(2, 2)).unwrap();
        assert_eq!(w.start(), Some(Coord::new(0, 0)));
        assert_eq!(w.goal(), Some(Coord::new(2, 2)));
        assert_eq!(w.endpoint_at(Coord::new(0, 0)), Some(Endpoint::Start));
        assert_eq!(w.endpoint_at(Coord::new(1, 1)), None);
    }

    #[test]
    fn start_rejected_out_of_bounds() {
        let mut w = World::new(3, 3);
        let err = w.set_start(Coord::new(3, 0)).unwrap_err();
        assert!(matches!(err, WorldError::OutOfBounds { .. }));
        assert_eq!(w.start(), None);
    }

    #[test]
    fn goal_rejected_on_obstacle() {
        let mut w = World::new(3, 3);
        w.set_terrain(Coord::new(1, 1), Terrain::Water).unwrap();
        let err = w.set_goal(Coord::new(1, 1)).unwrap_err();
        assert_eq!(
            err,
            WorldError::NotFree {
                endpoint: Endpoint::Goal,
                pos: Coord::new(1, 1),
                terrain: Terrain::Water,
            }
        );
        assert_eq!(w.goal(), None);
    }

    #[test]
    fn moving_start_keeps_only_latest() {
        let mut w = World::new(3, 3);
        w.set_start(Coord::new(0, 0)).unwrap();
        w.set_start(Coord::new(1, 0)).unwrap();
        assert_eq!(w.start(), Some(Coord::new(1, 0)));
        assert_eq!(w.endpoint_at(Coord::new(0, 0)), None);
    }

    #[test]
    fn set_terrain_rules() {
        let mut w = World::new(3, 3);
        w.set_start(Coord::new(0, 0)).unwrap();
        w.set_goal(Coord::new(2, 2)).unwrap();

        assert_eq!(
            w.set_terrain(Coord::new(1, 1), Terrain::Free),
            Err(WorldError::NotAnObstacle(Terrain::Free))
        );
        assert!(matches!(
            w.set_terrain(Coord::new(0, 9), Terrain::Building),
            Err(WorldError::OutOfBounds { .. })
        ));
        assert_eq!(
            w.set_terrain(Coord::new(0, 0), Terrain::Blocked),
            Err(WorldError::OnEndpoint {
                endpoint: Endpoint::Start,
                pos: Coord::new(0, 0)
            })
        );
        assert_eq!(
            w.set_terrain(Coord::new(2, 2), Terrain::Water),
            Err(WorldError::OnEndpoint {
                endpoint: Endpoint::Goal,
                pos: Coord::new(2, 2)
            })
        );
        assert!(w.cells().all(|(_, t)| t == Terrain::Free));

        w.set_terrain(Coord::new(1, 1), Terrain::Building).unwrap();
        assert_eq!(w.terrain(Coord::new(1, 1)), Some(Terrain::Building));
        // Overwriting an obstacle with another is allowed.
        w.set_terrain(Coord::new(1, 1), Terrain::Water).unwrap();
        assert_eq!(w.terrain(Coord::new(1, 1)), Some(Terrain::Water));
    }

    #[test]
    fn clear_cell_is_fail_closed() {
        let mut w = World::new(2, 2);
        w.set_terrain(Coord::new(1, 1), Terrain::Blocked).unwrap();
        let before = w.clone();
        assert!(matches!(
            w.clear_cell(Coord::new(2, 1)),
            Err(WorldError::OutOfBounds { .. })
        ));
        assert_eq!(w, before);

        w.clear_cell(Coord::new(1, 1)).unwrap();
        assert_eq!(w.terrain(Coord::new(1, 1)), Some(Terrain::Free));
        // Clearing a free cell is a no-op success.
        w.clear_cell(Coord::new(0, 0)).unwrap();
    }

    #[test]
    fn clear_endpoints() {
        let mut w = World::new(2, 2);
        w.set_start(Coord::new(0, 0)).unwrap();
        assert_eq!(w.clear_start(), Some(Coord::new(0, 0)));
        assert_eq!(w.clear_start(), None);
        // Once cleared, the cell accepts obstacles again.
        w.set_terrain(Coord::new(0, 0), Terrain::Building).unwrap();
        assert_eq!(w.clear_goal(), None);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn world_round_trip() {
        let mut w = World::new(2, 3);
        w.set_terrain(Coord::new(0, 1), Terrain::Water).unwrap();
        w.set_start(Coord::new(0, 0)).unwrap();
        let json = serde_json::to_string(&w).unwrap();
        let back: World = serde_json::from_str(&json).unwrap();
        assert_eq!(back, w);
    }

    fn parse(json: &str) -> Result<World, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn short_cell_list_is_rejected() {
        let json = r#"{"bounds":{"min":{"row":0,"col":0},"max":{"row":3,"col":3}},
            "cells":["Free"],"start":null,"goal":null}"#;
        let err = parse(json).unwrap_err();
        assert!(err.to_string().contains("1 stored cells do not fill a 3x3 map"), "{err}");
    }

    #[test]
    fn shifted_bounds_are_rejected() {
        let json = r#"{"bounds":{"min":{"row":1,"col":1},"max":{"row":2,"col":2}},
            "cells":["Free"],"start":null,"goal":null}"#;
        assert!(parse(json).is_err());
    }

    #[test]
    fn bad_endpoints_are_rejected() {
        let cells = r#""cells":["Free","Water","Free","Free"]"#;
        let bounds = r#""bounds":{"min":{"row":0,"col":0},"max":{"row":2,"col":2}}"#;

        let outside = format!(r#"{{{bounds},{cells},"start":{{"row":5,"col":5}},"goal":null}}"#);
        let err = parse(&outside).unwrap_err();
        assert!(err.to_string().contains("(5, 5) is outside the 2x2 map"), "{err}");

        let on_water = format!(r#"{{{bounds},{cells},"start":null,"goal":{{"row":0,"col":1}}}}"#);
        let err = parse(&on_water).unwrap_err();
        assert!(err.to_string().contains("the goal cannot be placed on water"), "{err}");

        let fine = format!(r#"{{{bounds},{cells},"start":{{"row":1,"col":1}},"goal":null}}"#);
        let world = parse(&fine).unwrap();
        assert_eq!(world.start(), Some(Coord::new(1, 1)));
        assert_eq!(world.terrain(Coord::new(0, 1)), Some(Terrain::Water));
    }
}
