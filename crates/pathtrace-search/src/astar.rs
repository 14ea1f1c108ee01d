//! A* search with the Manhattan heuristic.
//!
//! The open set is a binary min-heap keyed by `f = g + h`, where `g` is
//! the running distance stored on the grid and `h` the Manhattan distance
//! to the goal. The heuristic is admissible and consistent on a
//! 4-connected unit-cost grid, so the first selection of the goal yields
//! an optimal path. Note the goal is detected on *selection*, before it
//! would be finalized, so no `visited` event is emitted for the end cell.

use pathtrace_core::{Coord, Grid};

use crate::distance::manhattan;
use crate::engine::{by_key, Scored, ScoredHeap, Step};
use crate::heap::MinHeap;

pub(crate) struct AstarSearch {
    open: ScoredHeap,
    nbuf: Vec<Coord>,
    goal_reached: bool,
}

impl AstarSearch {
    pub(crate) fn new(grid: &mut Grid) -> Self {
        let mut open: ScoredHeap = MinHeap::new(by_key);
        open.insert(Scored {
            key: manhattan(grid.start(), grid.end()),
            at: grid.start(),
        });
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
                // Already moved to the closed set via a fresher copy.
                continue;
            }
            if entry.at == grid.end() {
                self.goal_reached = true;
                return Step::Found;
            }
            grid.mark_visited(entry.at);

            let tentative = grid.distance(entry.at) + 1;
            grid.neighbors(entry.at, &mut self.nbuf);
            for &n in self.nbuf.iter() {
                if grid.is_visited(n) || grid.is_obstacle(n) {
                    continue;
                }
                if tentative < grid.distance(n) {
                    grid.set_distance(n, tentative);
                    grid.set_previous(n, Some(entry.at));
                    self.open.insert(Scored {
                        key: tentative + manhattan(n, grid.end()),
                        at: n,
                    });
                }
            }
            return Step::Visited(entry.at);
        }
    }
}
