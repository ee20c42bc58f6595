use routecalc_core::Coord;

use crate::PathRange;

impl PathRange {
    /// Rebuild the path from `from` to `to` out of the parent links recorded
    /// by the last search.
    ///
    /// Only meaningful right after a search that reached `to`. If the parent
    /// chain is broken the walk stops there, so the result then does not
    /// begin at `from`. Returns an empty path if either point is outside the
    /// range.
    pub fn reconstruct(&self, from: Coord, to: Coord) -> Vec<Coord> {
        match (self.idx(from), self.idx(to)) {
            (Some(si), Some(gi)) => self.reconstruct_idx(si, gi),
            _ => Vec::new(),
        }
    }

    pub(crate) fn reconstruct_idx(&self, start_idx: usize, goal_idx: usize) -> Vec<Coord> {
        let mut path = Vec::new();
        let mut ci = goal_idx;
        loop {
            path.push(self.coord(ci));
            if ci == start_idx {
                break;
            }
            let n = &self.nodes[ci];
            if n.generation != self.generation || n.parent == usize::MAX {
                break;
            }
            ci = n.parent;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Pather, WeightedPather};
    use routecalc_core::Range;

    struct Open(Range);

    impl Pather for Open {
        fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>) {
            buf.extend(p.neighbors_4().into_iter().filter(|&n| self.0.contains(n)));
        }
    }

    impl WeightedPather for Open {
        fn cost(&self, _from: Coord, _to: Coord) -> i32 {
            1
        }
    }

    #[test]
    fn matches_search_result() {
        let rng = Range::sized(3, 4);
        let mut pr = PathRange::new(rng);
        let (path, _) = pr
            .dijkstra_path(&Open(rng), Coord::new(2, 0), Coord::new(0, 3))
            .unwrap();
        assert_eq!(pr.reconstruct(Coord::new(2, 0), Coord::new(0, 3)), path);
        assert_eq!(path.first(), Some(&Coord::new(2, 0)));
        assert_eq!(path.last(), Some(&Coord::new(0, 3)));
    }

    #[test]
    fn settled_prefix_reconstructs_too() {
        // Any cell settled before the goal has a complete parent chain.
        let rng = Range::sized(1, 5);
        let mut pr = PathRange::new(rng);
        pr.dijkstra_path(&Open(rng), Coord::new(0, 0), Coord::new(0, 4))
            .unwrap();
        assert_eq!(
            pr.reconstruct(Coord::new(0, 0), Coord::new(0, 2)),
            vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]
        );
    }

    #[test]
    fn broken_chain_stops_instead_of_looping() {
        let rng = Range::sized(2, 2);
        let pr = PathRange::new(rng);
        // Fresh arena: no parents recorded.
        assert_eq!(
            pr.reconstruct(Coord::new(0, 0), Coord::new(1, 1)),
            vec![Coord::new(1, 1)]
        );
        assert!(pr.reconstruct(Coord::new(0, 0), Coord::new(9, 9)).is_empty());
    }
}
