use std::cmp::Ordering;

use routecalc_core::{Coord, Range};

// ---------------------------------------------------------------------------
// Internal node for the Dijkstra search
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    /// Best known cumulative cost.
    pub(crate) g: i32,
    /// Flat index of the predecessor, `usize::MAX` for none.
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Frontier entry, ordered for use in a max-`BinaryHeap` so that the lowest
/// cost pops first and equal costs pop in row-major coordinate order.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) pos: Coord,
    pub(crate) g: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .g
            .cmp(&self.g)
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sentinel cost meaning "not reached".
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Search arena for one grid rectangle.
///
/// `PathRange` owns the node array and scratch buffers so that repeated
/// searches over a same-sized grid allocate nothing after the first one.
/// Nodes are invalidated lazily by bumping a generation counter.
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) expanded: usize,
    // shared scratch buffer for neighbour queries
    pub(crate) nbuf: Vec<Coord>,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
            nodes: vec![Node::default(); rng.len()],
            generation: 0,
            expanded: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the underlying range.
    ///
    /// If the new size fits within the existing arena only the generation is
    /// bumped; otherwise the arena is reallocated.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;

        if new_len <= self.nodes.len() {
            self.generation = self.generation.wrapping_add(1);
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Number of nodes settled by the last search.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Coord` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Coord) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let row = (p.row - self.rng.min.row) as usize;
        let col = (p.col - self.rng.min.col) as usize;
        Some(row * self.width + col)
    }

    /// Convert a flat index back to a `Coord`.
    #[inline]
    pub(crate) fn coord(&self, idx: usize) -> Coord {
        let row = (idx / self.width) as i32 + self.rng.min.row;
        let col = (idx % self.width) as i32 + self.rng.min.col;
        Coord::new(row, col)
    }
}
