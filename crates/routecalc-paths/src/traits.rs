use routecalc_core::Coord;

/// Minimal pathfinding interface: neighbour enumeration.
pub trait Pather {
    /// Append the cells reachable in one step from `p` into `buf`.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0; a cost of
    /// [`UNREACHABLE`](crate::UNREACHABLE) never overflows a path total.
    fn cost(&self, from: Coord, to: Coord) -> i32;
}
