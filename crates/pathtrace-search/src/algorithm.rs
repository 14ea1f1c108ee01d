//! Algorithm selection: [`Algorithm`], [`UnknownAlgorithmError`].

use std::fmt;
use std::str::FromStr;

/// The closed set of search strategies.
///
/// Selection is by variant, so no invalid algorithm can reach the engine;
/// [`FromStr`] exists for string-typed configuration surfaces and is the
/// only place [`UnknownAlgorithmError`] can arise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Single-source shortest path over the uniform-cost grid.
    Dijkstra,
    /// Breadth-first search; shortest path by hop count.
    Bfs,
    /// Depth-first search; finds some valid path, not necessarily shortest.
    Dfs,
    /// A* with the Manhattan heuristic; optimal on a 4-connected unit grid.
    AStar,
}

impl Algorithm {
    /// All variants, in presentation order.
    pub const ALL: [Algorithm; 4] = [Self::Dijkstra, Self::Bfs, Self::Dfs, Self::AStar];

    /// The canonical selector name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dijkstra => "Dijkstra",
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::AStar => "A*",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognized algorithm selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithmError {
    name: String,
}

impl UnknownAlgorithmError {
    /// The rejected selector.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for UnknownAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm \u{201c}{}\u{201d}", self.name)
    }
}

impl std::error::Error for UnknownAlgorithmError {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Dijkstra" => Ok(Self::Dijkstra),
            "BFS" => Ok(Self::Bfs),
            "DFS" => Ok(Self::Dfs),
            "A*" => Ok(Self::AStar),
            other => Err(UnknownAlgorithmError {
                name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_variant() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.name().parse::<Algorithm>(), Ok(algo));
        }
    }

    #[test]
    fn unknown_selectors_are_rejected() {
        for bad in ["dijkstra", "bfs", "A", "greedy", ""] {
            let err = bad.parse::<Algorithm>().unwrap_err();
            assert_eq!(err.name(), bad);
        }
    }
}
