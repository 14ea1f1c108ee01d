//! **pathtrace-search** — graph-search engines and the run controller for
//! grid pathfinding visualization.
//!
//! Four search strategies traverse a [`pathtrace_core::Grid`] and produce a
//! deterministic, replayable [`Event`] stream:
//!
//! | Algorithm | Frontier | Shortest path |
//! |---|---|---|
//! | [`Algorithm::Dijkstra`] | binary min-heap keyed by distance | yes |
//! | [`Algorithm::Bfs`] | FIFO queue | yes (hop count) |
//! | [`Algorithm::Dfs`] | LIFO stack | no — some valid path |
//! | [`Algorithm::AStar`] | binary min-heap keyed by f = g + manhattan | yes |
//!
//! A [`Session`] sequences reset → search → path reconstruction as one
//! cancellable unit of work. Events are pulled one per [`Session::step`]
//! call, so an animating caller paces them with its own delay while a batch
//! embedding drains the stream synchronously via [`Session::run`].

mod algorithm;
mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod engine;
mod event;
mod heap;
mod path;
mod session;

pub use algorithm::{Algorithm, UnknownAlgorithmError};
pub use distance::manhattan;
pub use event::{Event, Outcome};
pub use heap::{EmptyQueueError, MinHeap};
pub use path::reconstruct;
pub use session::{CancelToken, RunError, RunReport, RunState, Session};
