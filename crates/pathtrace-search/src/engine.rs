//! Internal engine dispatch shared by the four search modules.

use std::cmp::Ordering;

use pathtrace_core::{Coord, Grid};

use crate::algorithm::Algorithm;
use crate::astar::AstarSearch;
use crate::bfs::BfsSearch;
use crate::dfs::DfsSearch;
use crate::dijkstra::DijkstraSearch;
use crate::heap::MinHeap;

/// A cell with an associated heap key (distance for Dijkstra, f-score for
/// A*). The key is fixed at insert time; fresher copies supersede it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Scored {
    pub(crate) key: i32,
    pub(crate) at: Coord,
}

/// Frontier heap used by Dijkstra and A*.
pub(crate) type ScoredHeap = MinHeap<Scored, fn(&Scored, &Scored) -> Ordering>;

pub(crate) fn by_key(a: &Scored, b: &Scored) -> Ordering {
    a.key.cmp(&b.key)
}

/// Result of advancing a search by one finalization step.
pub(crate) enum Step {
    /// A cell was finalized; emit a `visited` event for it.
    Visited(Coord),
    /// The goal has been reached; hand off to path reconstruction.
    Found,
    /// The frontier is exhausted and the goal is unreachable.
    Exhausted,
}

/// The selected search strategy with its in-flight frontier state.
pub(crate) enum Engine {
    Dijkstra(DijkstraSearch),
    Bfs(BfsSearch),
    Dfs(DfsSearch),
    AStar(AstarSearch),
}

impl Engine {
    /// Seed the frontier for `algorithm` over a freshly reset `grid`.
    pub(crate) fn new(algorithm: Algorithm, grid: &mut Grid) -> Self {
        match algorithm {
            Algorithm::Dijkstra => Self::Dijkstra(DijkstraSearch::new(grid)),
            Algorithm::Bfs => Self::Bfs(BfsSearch::new(grid)),
            Algorithm::Dfs => Self::Dfs(DfsSearch::new(grid)),
            Algorithm::AStar => Self::AStar(AstarSearch::new(grid)),
        }
    }

    /// Advance by one step, mutating `grid` node state in place.
    pub(crate) fn step(&mut self, grid: &mut Grid) -> Step {
        match self {
            Self::Dijkstra(s) => s.step(grid),
            Self::Bfs(s) => s.step(grid),
            Self::Dfs(s) => s.step(grid),
            Self::AStar(s) => s.step(grid),
        }
    }
}
