//! Weighted shortest-path search for terrain grids.
//!
//! The engine is generic over the [`Pather`] / [`WeightedPather`] traits and
//! runs on a [`PathRange`], which owns a dense node arena reused across
//! searches. [`Router`] and [`find_route`] wire it to a
//! [`World`](routecalc_core::World):
//!
//! - [`PathRange::dijkstra_path`] finds the cheapest path between two cells
//! - [`PathRange::reconstruct`] rebuilds a path from recorded parents
//! - [`Router::find_route`] checks the world's start/goal and returns a [`Route`]
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbour enumeration |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |

mod dijkstra;
mod pathrange;
mod reconstruct;
mod route;
mod traits;

pub use pathrange::{PathRange, UNREACHABLE};
pub use route::{Route, Router, SearchError, TerrainPather, find_route};
pub use traits::{Pather, WeightedPather};
