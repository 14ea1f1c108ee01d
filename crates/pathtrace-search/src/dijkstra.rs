//! Dijkstra's algorithm over the uniform-cost grid.
//!
//! Every node is queued up front keyed by its distance, so popping an
//! [`UNREACHABLE`] key means no further node can be reached and the search
//! reports no path. Relaxation inserts a fresher heap copy instead of a
//! decrease-key; stale copies are skipped on pop via the visited flag.

use pathtrace_core::{Coord, Grid, UNREACHABLE};

use crate::engine::{by_key, Scored, ScoredHeap, Step};
use crate::heap::MinHeap;

pub(crate) struct DijkstraSearch {
    open: ScoredHeap,
    nbuf: Vec<Coord>,
    goal_reached: bool,
}

impl DijkstraSearch {
    pub(crate) fn new(grid: &mut Grid) -> Self {
        let mut open: ScoredHeap = MinHeap::with_capacity(grid.len(), by_key);
        for i in 0..grid.len() {
            let c = grid.coord(i);
            open.insert(Scored {
                key: grid.distance(c),
                at: c,
            });
        }
        Self {
            open,
            nbuf: Vec::with_capacity(4),
            goal_reached: false,
        }
    }

    pub(crate) fn step(&mut self, grid: &mut Grid) -> Step {
        if self.goal_reached {
            return Step::Found;
        }
        loop {
            let Ok(entry) = self.open.extract_min() else {
                return Step::Exhausted;
            };
            if grid.is_visited(entry.at) {
                // Stale copy superseded by an earlier relaxation.
                continue;
            }
            if entry.key == UNREACHABLE {
                // The closest unvisited node is unreachable, so every
                // remaining node is too.
                return Step::Exhausted;
            }
            grid.mark_visited(entry.at);
            if entry.at == grid.end() {
                self.goal_reached = true;
                return Step::Visited(entry.at);
            }

            let alt = grid.distance(entry.at) + 1;
            grid.neighbors(entry.at, &mut self.nbuf);
            for &n in self.nbuf.iter() {
                if grid.is_visited(n) || grid.is_obstacle(n) {
                    continue;
                }
                if alt < grid.distance(n) {
                    grid.set_distance(n, alt);
                    grid.set_previous(n, Some(entry.at));
                    self.open.insert(Scored { key: alt, at: n });
                }
            }
            return Step::Visited(entry.at);
        }
    }
}
