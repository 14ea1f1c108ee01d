//! Breadth-first search.
//!
//! The only strategy that marks nodes visited on *enqueue* rather than on
//! dequeue, which prevents the same node from being queued twice. Because
//! all edges cost 1 and the queue is FIFO, nodes are finalized in
//! non-decreasing hop distance, so the resulting path is shortest.

use std::collections::VecDeque;

use pathtrace_core::{Coord, Grid};

use crate::engine::Step;

pub(crate) struct BfsSearch {
    queue: VecDeque<Coord>,
    nbuf: Vec<Coord>,
    goal_reached: bool,
}

impl BfsSearch {
    pub(crate) fn new(grid: &mut Grid) -> Self {
        let mut queue = VecDeque::new();
        grid.mark_visited(grid.start());
        queue.push_back(grid.start());
        Self {
            queue,
            nbuf: Vec::with_capacity(4),
            goal_reached: false,
        }
    }

    pub(crate) fn step(&mut self, grid: &mut Grid) -> Step {
        if self.goal_reached {
            return Step::Found;
        }
        let Some(current) = self.queue.pop_front() else {
            return Step::Exhausted;
        };
        if current == grid.end() {
            self.goal_reached = true;
            return Step::Visited(current);
        }

        let next = grid.distance(current) + 1;
        grid.neighbors(current, &mut self.nbuf);
        for &n in self.nbuf.iter() {
            if grid.is_visited(n) || grid.is_obstacle(n) {
                continue;
            }
            grid.mark_visited(n);
            grid.set_distance(n, next);
            grid.set_previous(n, Some(current));
            self.queue.push_back(n);
        }
        Step::Visited(current)
    }
}
