//! Depth-first search.
//!
//! An explicit LIFO stack seeded with the start cell, with a seen-set
//! (separate from the display visited flag) guarding against
//! re-processing. Predecessors are recorded at *push* time, before the
//! node is popped and confirmed, so a node pushed through two parents has
//! its link overwritten by the later push even though that copy may end
//! up skipped. This mirrors the historical behavior of the engine: the
//! push/pop order is the compatibility contract, and the discovered path
//! is valid but not necessarily shortest or canonical.

use pathtrace_core::{Coord, Grid};

use crate::engine::Step;

pub(crate) struct DfsSearch {
    stack: Vec<Coord>,
    seen: Vec<bool>,
    nbuf: Vec<Coord>,
    goal_reached: bool,
}

impl DfsSearch {
    pub(crate) fn new(grid: &mut Grid) -> Self {
        Self {
            stack: vec![grid.start()],
            seen: vec![false; grid.len()],
            nbuf: Vec::with_capacity(4),
            goal_reached: false,
        }
    }

    pub(crate) fn step(&mut self, grid: &mut Grid) -> Step {
        if self.goal_reached {
            return Step::Found;
        }
        loop {
            let Some(current) = self.stack.pop() else {
                return Step::Exhausted;
            };
            let Some(ci) = grid.idx(current) else {
                continue;
            };
            if self.seen[ci] {
                // A duplicate stack copy pushed through another parent.
                continue;
            }
            self.seen[ci] = true;
            grid.mark_visited(current);
            if current == grid.end() {
                self.goal_reached = true;
                return Step::Visited(current);
            }

            grid.neighbors(current, &mut self.nbuf);
            for &n in self.nbuf.iter() {
                let Some(ni) = grid.idx(n) else {
                    continue;
                };
                if self.seen[ni] || grid.is_obstacle(n) {
                    continue;
                }
                // Recorded before the pop confirms the node; a later push
                // overwrites this link.
                grid.set_previous(n, Some(current));
                self.stack.push(n);
            }
            return Step::Visited(current);
        }
    }
}
