//! The arena-owned node grid: [`Node`], [`Grid`], [`GridError`].

use std::fmt;

use crate::coord::Coord;

/// Sentinel distance meaning "not reached by the current run".
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// Per-cell traversal and visualization state.
///
/// Coordinates are implicit: a node is addressed through its owning
/// [`Grid`], and its predecessor is stored as a [`Coord`] rather than a
/// reference, so the grid stays trivially arena-owned.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    obstacle: bool,
    visited: bool,
    path: bool,
    distance: i32,
    previous: Option<Coord>,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            obstacle: false,
            visited: false,
            path: false,
            distance: UNREACHABLE,
            previous: None,
        }
    }
}

impl Node {
    /// Whether the cell blocks traversal.
    #[inline]
    pub fn is_obstacle(&self) -> bool {
        self.obstacle
    }

    /// Whether the current run has finalized this cell.
    #[inline]
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// Whether the cell is confirmed part of the reconstructed path.
    #[inline]
    pub fn is_path(&self) -> bool {
        self.path
    }

    /// Best-known cost from the source, or [`UNREACHABLE`].
    #[inline]
    pub fn distance(&self) -> i32 {
        self.distance
    }

    /// Predecessor on the best-known path, if any.
    #[inline]
    pub fn previous(&self) -> Option<Coord> {
        self.previous
    }
}

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Error for malformed grid configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Both sides must be at least 2 so that start and end are distinct cells.
    InvalidSize { rows: i32, cols: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { rows, cols } => {
                write!(f, "invalid grid size {rows}x{cols}: both sides must be at least 2")
            }
        }
    }
}

impl std::error::Error for GridError {}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// An ordered 2D collection of [`Node`]s backed by a flat array.
///
/// The grid is the sole owner of all node state. Exactly one cell is the
/// start and one the end; neither is ever an obstacle. Search engines
/// mutate node state through the targeted setters below, which keep those
/// invariants out of reach.
#[derive(Clone, Debug)]
pub struct Grid {
    nodes: Vec<Node>,
    rows: i32,
    cols: i32,
    start: Coord,
    end: Coord,
}

impl Grid {
    /// Create a `rows` × `cols` grid with start at the top-left corner and
    /// end at the bottom-right corner, ready for a run.
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        if rows < 2 || cols < 2 {
            return Err(GridError::InvalidSize { rows, cols });
        }
        let mut grid = Self {
            nodes: vec![Node::default(); (rows * cols) as usize],
            rows,
            cols,
            start: Coord::ZERO,
            end: Coord::new(rows - 1, cols - 1),
        };
        grid.nodes[0].distance = 0;
        Ok(grid)
    }

    /// Replace every node with a freshly configured grid of the given size.
    ///
    /// Discards all obstacles and run state. Fails without mutating
    /// anything if the size is invalid.
    pub fn configure(&mut self, rows: i32, cols: i32) -> Result<(), GridError> {
        *self = Self::new(rows, cols)?;
        Ok(())
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the grid has no cells. Always false for a constructed grid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The source cell.
    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    /// The goal cell.
    #[inline]
    pub fn end(&self) -> Coord {
        self.end
    }

    /// Whether `c` lies within bounds.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    /// Convert a coordinate to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub fn idx(&self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some((c.row * self.cols + c.col) as usize)
    }

    /// Convert a flat index back to a coordinate.
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        Coord::new(idx as i32 / self.cols, idx as i32 % self.cols)
    }

    /// Borrow the node at `c`, if in bounds.
    #[inline]
    pub fn node(&self, c: Coord) -> Option<&Node> {
        self.idx(c).map(|i| &self.nodes[i])
    }

    // -----------------------------------------------------------------------
    // Adjacency
    // -----------------------------------------------------------------------

    /// Append the in-bounds orthogonal neighbours of `c` to `buf`, in fixed
    /// {up, down, left, right} order. Clears `buf` first.
    pub fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        buf.clear();
        for n in c.neighbors_4() {
            if self.contains(n) {
                buf.push(n);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Run state
    // -----------------------------------------------------------------------

    /// Mutate every node in place back to pre-run state: not visited, not
    /// on the path, distance [`UNREACHABLE`], no predecessor. Obstacles are
    /// kept or cleared per `keep_obstacles`. Afterwards the start cell's
    /// distance is forced back to 0. Idempotent.
    pub fn reset(&mut self, keep_obstacles: bool) {
        for node in self.nodes.iter_mut() {
            node.visited = false;
            node.path = false;
            node.distance = UNREACHABLE;
            node.previous = None;
            if !keep_obstacles {
                node.obstacle = false;
            }
        }
        self.nodes[0].distance = 0;
    }

    /// Flip the obstacle flag at `c`.
    ///
    /// Silently a no-op on the start cell, the end cell, and out-of-bounds
    /// coordinates; protecting the endpoints is a deliberate guard, not a
    /// failure.
    pub fn toggle_obstacle(&mut self, c: Coord) {
        if c == self.start || c == self.end {
            return;
        }
        if let Some(i) = self.idx(c) {
            self.nodes[i].obstacle = !self.nodes[i].obstacle;
        }
    }

    /// Iterate over all obstacle cells, row-major. Used by renderers to
    /// paint the initial snapshot.
    pub fn obstacles(&self) -> impl Iterator<Item = Coord> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.obstacle)
            .map(|(i, _)| self.coord(i))
    }

    // -----------------------------------------------------------------------
    // Engine accessors and mutators
    // -----------------------------------------------------------------------

    /// Whether the cell at `c` is an obstacle. Out of bounds counts as
    /// blocked.
    #[inline]
    pub fn is_obstacle(&self, c: Coord) -> bool {
        self.node(c).is_none_or(|n| n.obstacle)
    }

    /// Whether the cell at `c` has been finalized by the current run.
    #[inline]
    pub fn is_visited(&self, c: Coord) -> bool {
        self.node(c).is_some_and(|n| n.visited)
    }

    /// Whether the cell at `c` is on the reconstructed path.
    #[inline]
    pub fn is_path(&self, c: Coord) -> bool {
        self.node(c).is_some_and(|n| n.path)
    }

    /// Distance at `c`, or [`UNREACHABLE`] if out of bounds or unreached.
    #[inline]
    pub fn distance(&self, c: Coord) -> i32 {
        self.node(c).map_or(UNREACHABLE, |n| n.distance)
    }

    /// Predecessor link at `c`, if set.
    #[inline]
    pub fn previous(&self, c: Coord) -> Option<Coord> {
        self.node(c).and_then(|n| n.previous)
    }

    /// Mark the cell at `c` as visited.
    #[inline]
    pub fn mark_visited(&mut self, c: Coord) {
        if let Some(i) = self.idx(c) {
            self.nodes[i].visited = true;
        }
    }

    /// Mark the cell at `c` as part of the reconstructed path.
    #[inline]
    pub fn mark_path(&mut self, c: Coord) {
        if let Some(i) = self.idx(c) {
            self.nodes[i].path = true;
        }
    }

    /// Record a relaxed distance at `c`.
    #[inline]
    pub fn set_distance(&mut self, c: Coord, distance: i32) {
        if let Some(i) = self.idx(c) {
            self.nodes[i].distance = distance;
        }
    }

    /// Record the predecessor of `c` on the best-known path.
    #[inline]
    pub fn set_previous(&mut self, c: Coord, previous: Option<Coord>) {
        if let Some(i) = self.idx(c) {
            self.nodes[i].previous = previous;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_places_start_and_end_at_corners() {
        let g = Grid::new(4, 6).unwrap();
        assert_eq!(g.start(), Coord::new(0, 0));
        assert_eq!(g.end(), Coord::new(3, 5));
        assert_eq!(g.len(), 24);
        assert_eq!(g.distance(g.start()), 0);
        assert_eq!(g.distance(g.end()), UNREACHABLE);
    }

    #[test]
    fn sizes_below_two_are_rejected() {
        assert_eq!(
            Grid::new(1, 5).err(),
            Some(GridError::InvalidSize { rows: 1, cols: 5 })
        );
        assert!(Grid::new(5, 1).is_err());
        assert!(Grid::new(0, 0).is_err());
        assert!(Grid::new(2, 2).is_ok());
    }

    #[test]
    fn configure_replaces_all_state() {
        let mut g = Grid::new(5, 5).unwrap();
        g.toggle_obstacle(Coord::new(2, 2));
        g.configure(3, 3).unwrap();
        assert_eq!(g.end(), Coord::new(2, 2));
        assert_eq!(g.obstacles().count(), 0);
        assert_eq!(g.distance(g.start()), 0);
    }

    #[test]
    fn configure_invalid_leaves_grid_untouched() {
        let mut g = Grid::new(5, 5).unwrap();
        g.toggle_obstacle(Coord::new(1, 1));
        assert!(g.configure(1, 9).is_err());
        assert_eq!(g.rows(), 5);
        assert!(g.is_obstacle(Coord::new(1, 1)));
    }

    #[test]
    fn neighbors_in_fixed_order() {
        let g = Grid::new(5, 5).unwrap();
        let mut buf = Vec::new();

        g.neighbors(Coord::new(2, 2), &mut buf);
        assert_eq!(
            buf,
            vec![
                Coord::new(1, 2),
                Coord::new(3, 2),
                Coord::new(2, 1),
                Coord::new(2, 3),
            ]
        );

        // Top-left corner only has {down, right}.
        g.neighbors(Coord::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Coord::new(1, 0), Coord::new(0, 1)]);

        // Bottom-right corner only has {up, left}.
        g.neighbors(Coord::new(4, 4), &mut buf);
        assert_eq!(buf, vec![Coord::new(3, 4), Coord::new(4, 3)]);
    }

    #[test]
    fn toggle_obstacle_guards_endpoints() {
        let mut g = Grid::new(5, 5).unwrap();
        g.toggle_obstacle(g.start());
        g.toggle_obstacle(g.end());
        g.toggle_obstacle(Coord::new(-1, 3));
        assert_eq!(g.obstacles().count(), 0);

        g.toggle_obstacle(Coord::new(2, 3));
        assert!(g.is_obstacle(Coord::new(2, 3)));
        g.toggle_obstacle(Coord::new(2, 3));
        assert!(!g.is_obstacle(Coord::new(2, 3)));
    }

    #[test]
    fn reset_restores_pre_run_state() {
        let mut g = Grid::new(4, 4).unwrap();
        let c = Coord::new(1, 1);
        g.mark_visited(c);
        g.mark_path(c);
        g.set_distance(c, 7);
        g.set_previous(c, Some(Coord::new(0, 1)));
        g.toggle_obstacle(Coord::new(2, 2));

        g.reset(true);
        let n = g.node(c).unwrap();
        assert!(!n.is_visited());
        assert!(!n.is_path());
        assert_eq!(n.distance(), UNREACHABLE);
        assert_eq!(n.previous(), None);
        assert_eq!(g.distance(g.start()), 0);
        assert!(g.is_obstacle(Coord::new(2, 2)));

        g.reset(false);
        assert!(!g.is_obstacle(Coord::new(2, 2)));
    }

    #[test]
    fn reset_is_idempotent() {
        let mut g = Grid::new(4, 4).unwrap();
        g.toggle_obstacle(Coord::new(1, 2));
        g.reset(true);
        let once: Vec<_> = (0..g.len()).map(|i| format!("{:?}", g.node(g.coord(i)).unwrap())).collect();
        g.reset(true);
        let twice: Vec<_> = (0..g.len()).map(|i| format!("{:?}", g.node(g.coord(i)).unwrap())).collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn out_of_bounds_reads_are_blocked_or_unreachable() {
        let g = Grid::new(3, 3).unwrap();
        let oob = Coord::new(3, 0);
        assert!(g.is_obstacle(oob));
        assert!(!g.is_visited(oob));
        assert_eq!(g.distance(oob), UNREACHABLE);
        assert_eq!(g.idx(oob), None);
    }

    #[test]
    fn flat_index_round_trip() {
        let g = Grid::new(4, 7).unwrap();
        for i in 0..g.len() {
            assert_eq!(g.idx(g.coord(i)), Some(i));
        }
    }
}
