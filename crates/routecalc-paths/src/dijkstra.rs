use std::collections::BinaryHeap;

use log::trace;
use routecalc_core::Coord;

use crate::PathRange;
use crate::pathrange::{NodeRef, UNREACHABLE};
use crate::traits::WeightedPather;

impl PathRange {
    /// Compute the cheapest path from `from` to `to` with Dijkstra's
    /// algorithm.
    ///
    /// Returns the full path (including both endpoints) and its total cost,
    /// where each step costs [`WeightedPather::cost`] of the cell entered.
    /// The cost of `from` itself is never charged. Returns `None` if either
    /// endpoint is outside the range or no path exists.
    pub fn dijkstra_path<P: WeightedPather>(
        &mut self,
        pather: &P,
        from: Coord,
        to: Coord,
    ) -> Option<(Vec<Coord>, i32)> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;
        self.expanded = 0;

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            pos: from,
            g: 0,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search None;
            };

            let ci = current.idx;
            let node = &self.nodes[ci];
            // Skip entries superseded by a cheaper push, and settled nodes.
            if node.generation != cur_gen || !node.open || current.g > node.g {
                continue;
            }

            if ci == goal_idx {
                break 'search Some(current.g);
            }

            self.nodes[ci].open = false;
            self.expanded += 1;
            trace!("expand {} at cost {}", current.pos, current.g);

            nbuf.clear();
            pather.neighbors(current.pos, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative = current.g.saturating_add(pather.cost(current.pos, np));

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if tentative >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative;
                n.parent = ci;
                n.open = true;
                open.push(NodeRef {
                    idx: ni,
                    pos: np,
                    g: tentative,
                });
            }
        };

        self.nbuf = nbuf;

        let cost = found?;
        Some((self.reconstruct_idx(start_idx, goal_idx), cost))
    }

    /// Best cost recorded for `p` by the last search.
    ///
    /// Settled cells hold their final cost; cells still on the frontier when
    /// the search stopped hold their best tentative cost. Returns
    /// [`UNREACHABLE`] if the point is outside the range or was not reached.
    pub fn dijkstra_at(&self, p: Coord) -> i32 {
        match self.idx(p) {
            Some(i) if self.nodes[i].generation == self.generation => self.nodes[i].g,
            _ => UNREACHABLE,
        }
    }
}
