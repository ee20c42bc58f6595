//! Route search over a [`World`]: the terrain adapter and the request facade.

use log::debug;
use routecalc_core::{Coord, World};

use crate::PathRange;
use crate::traits::{Pather, WeightedPather};

/// A cheapest path from the world's start to its goal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Cells from start to goal inclusive.
    pub path: Vec<Coord>,
    /// Sum of the terrain costs of every cell entered after the start.
    pub cost: i32,
}

impl Route {
    /// First cell of the route.
    pub fn start(&self) -> Option<Coord> {
        self.path.first().copied()
    }

    /// Last cell of the route.
    pub fn goal(&self) -> Option<Coord> {
        self.path.last().copied()
    }

    /// Number of steps taken (cells minus one).
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// A route search that could not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("no start cell has been set")]
    MissingStart,
    #[error("no goal cell has been set")]
    MissingGoal,
}

/// Adapts a [`World`] to the pathfinding traits.
///
/// Neighbours are the in-bounds, passable cardinal cells; stepping into a
/// cell costs that cell's terrain cost.
#[derive(Clone, Copy)]
pub struct TerrainPather<'a> {
    world: &'a World,
}

impl<'a> TerrainPather<'a> {
    pub fn new(world: &'a World) -> Self {
        Self { world }
    }
}

impl Pather for TerrainPather<'_> {
    fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>) {
        for n in p.neighbors_4() {
            if self.world.terrain(n).is_some_and(|t| t.passable()) {
                buf.push(n);
            }
        }
    }
}

impl WeightedPather for TerrainPather<'_> {
    fn cost(&self, _from: Coord, to: Coord) -> i32 {
        // Only reached for passable neighbours; the search saturates if not.
        self.world
            .terrain(to)
            .and_then(|t| t.cost())
            .unwrap_or(crate::UNREACHABLE)
    }
}

/// Reusable route finder. Keeps its search arena between requests.
pub struct Router {
    range: PathRange,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self {
            range: PathRange::new(Default::default()),
        }
    }

    /// Find the cheapest route from the world's start to its goal.
    ///
    /// Returns `Err` when start or goal is unset (no search is run),
    /// `Ok(None)` when the goal cannot be reached, and `Ok(Some(route))`
    /// otherwise.
    pub fn find_route(&mut self, world: &World) -> Result<Option<Route>, SearchError> {
        let start = world.start().ok_or(SearchError::MissingStart)?;
        let goal = world.goal().ok_or(SearchError::MissingGoal)?;

        if self.range.range() != world.bounds() {
            self.range.set_range(world.bounds());
        }

        let pather = TerrainPather::new(world);
        let found = self.range.dijkstra_path(&pather, start, goal);
        let expanded = self.range.expanded();
        match found {
            Some((path, cost)) => {
                debug!(
                    "route {start} -> {goal}: cost {cost}, {} cells, {expanded} expanded",
                    path.len()
                );
                Ok(Some(Route { path, cost }))
            }
            None => {
                debug!("no route {start} -> {goal} ({expanded} expanded)");
                Ok(None)
            }
        }
    }

    /// The search arena, holding the costs of the last request.
    pub fn path_range(&self) -> &PathRange {
        &self.range
    }
}

/// One-shot [`Router::find_route`].
pub fn find_route(world: &World) -> Result<Option<Route>, SearchError> {
    Router::new().find_route(world)
}
