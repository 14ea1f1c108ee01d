//! Path reconstruction from predecessor links.

use pathtrace_core::{Coord, Grid};

/// Walk the predecessor chain from the goal back to the source and return
/// it in source-to-goal order (both endpoints included).
///
/// Returns `None` when the goal has no predecessor, i.e. the search never
/// reached it. Termination is guaranteed because predecessor links are
/// only ever set from a node finalized strictly earlier, forming a tree
/// rooted at the source.
pub fn reconstruct(grid: &Grid) -> Option<Vec<Coord>> {
    grid.previous(grid.end())?;

    let mut path = vec![grid.end()];
    let mut current = grid.end();
    while let Some(prev) = grid.previous(current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathtrace_core::Grid;

    #[test]
    fn no_predecessor_means_no_path() {
        let grid = Grid::new(3, 3).unwrap();
        assert_eq!(reconstruct(&grid), None);
    }

    #[test]
    fn walks_and_reverses_the_chain() {
        let mut grid = Grid::new(2, 3).unwrap();
        // start (0,0) -> (0,1) -> (0,2) -> end (1,2)
        grid.set_previous(Coord::new(0, 1), Some(Coord::new(0, 0)));
        grid.set_previous(Coord::new(0, 2), Some(Coord::new(0, 1)));
        grid.set_previous(Coord::new(1, 2), Some(Coord::new(0, 2)));

        let path = reconstruct(&grid).unwrap();
        assert_eq!(
            path,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(0, 2),
                Coord::new(1, 2),
            ]
        );
    }
}
