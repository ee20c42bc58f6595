//! **routecalc-core**: terrain grid world for the route calculator.
//!
//! This crate provides the types the pathfinding engine reads and the
//! presentation layer edits: grid geometry, terrain tags with their
//! traversal costs, the [`World`] grid with its start/goal designations,
//! and a text renderer.

pub mod error;
pub mod geom;
pub mod render;
pub mod terrain;
pub mod world;

pub use error::{Endpoint, WorldError};
pub use geom::{Coord, Range};
pub use render::{SymbolSet, render};
pub use terrain::Terrain;
pub use world::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_CELLS, World};
