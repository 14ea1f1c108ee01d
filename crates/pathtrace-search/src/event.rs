//! The event stream consumed by renderers: [`Event`], [`Outcome`].

use std::fmt;

use pathtrace_core::Coord;

/// Terminal result of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The goal was reached and the path fully reconstructed.
    Completed,
    /// The search exhausted without reaching the goal. A normal result,
    /// not a defect.
    NoPath,
    /// The caller cancelled the run before it finished.
    Cancelled,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Completed => "completed",
            Self::NoPath => "no path",
            Self::Cancelled => "cancelled",
        })
    }
}

/// One step of a run, emitted in exactly the order the algorithms finalize
/// state. Consumers may rely on this order for golden-output tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// A cell was finalized as visited by the search.
    Visited(Coord),
    /// A cell was confirmed part of the path, in source-to-goal order.
    PathStep(Coord),
    /// The run ended; always the last event of a stream.
    Done(Outcome),
}
