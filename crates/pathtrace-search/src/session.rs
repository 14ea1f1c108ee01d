//! The run controller: [`Session`], [`CancelToken`], [`RunState`].
//!
//! A session owns the grid and sequences "reset → search → reconstruct"
//! as one cancellable unit of work. Events are pulled one at a time via
//! [`Session::step`], so the animation delay between consecutive events is
//! entirely the caller's concern; a batch embedding drains the stream with
//! [`Session::run`].

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use pathtrace_core::{Coord, Grid, GridError};

use crate::algorithm::Algorithm;
use crate::engine::{Engine, Step};
use crate::event::{Event, Outcome};
use crate::path::reconstruct;

// ---------------------------------------------------------------------------
// CancelToken
// ---------------------------------------------------------------------------

/// A cooperative-cancellation token backed by an [`AtomicBool`].
///
/// Clones share the same flag, so a caller can keep a clone and cancel an
/// in-flight run from outside the step loop (including from another
/// thread). Cancellation takes effect at the next step boundary; the grid
/// is left exactly as of the last completed step.
#[derive(Clone, Debug)]
pub struct CancelToken {
    done: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a new, non-cancelled token.
    pub fn new() -> Self {
        Self {
            done: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Run state and errors
// ---------------------------------------------------------------------------

/// The controller state machine.
///
/// `Idle` is the initial state; the three terminal states are
/// re-enterable — a new [`Session::start`] from any non-`Running` state
/// performs an implicit reset and returns to `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Completed,
    NoPath,
    Cancelled,
}

/// Error for controller misuse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// `start` was called while a run is in flight. The in-flight run is
    /// not touched.
    AlreadyRunning,
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyRunning => f.write_str("a run is already in progress"),
        }
    }
}

impl std::error::Error for RunError {}

/// Everything a batch run produces: the terminal outcome plus the full
/// ordered event stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub outcome: Outcome,
    pub events: Vec<Event>,
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

enum Phase {
    Inactive,
    Searching(Engine),
    Tracing { path: Vec<Coord>, next: usize },
    Finish(Outcome),
}

/// Owns a [`Grid`] and runs one algorithm at a time over it.
///
/// Single-writer discipline: while a run is `Running`, only the run
/// mutates the grid — obstacle edits are silently refused until the run
/// reaches a terminal state.
pub struct Session {
    grid: Grid,
    state: RunState,
    phase: Phase,
    token: CancelToken,
}

impl Session {
    /// Create a session over a fresh `rows` × `cols` grid.
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(rows, cols)?,
            state: RunState::Idle,
            phase: Phase::Inactive,
            token: CancelToken::new(),
        })
    }

    /// The grid, for painting the initial snapshot and inspecting results.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current controller state.
    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    /// A handle onto the current run's cancellation flag. Each
    /// [`start`](Self::start) installs a fresh flag, so take the token
    /// after starting the run it should cancel.
    pub fn cancel_token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Request cancellation of the in-flight run, if any.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Replace the grid with a fresh `rows` × `cols` one.
    ///
    /// An in-flight run counts as cancelled: its event stream ends without
    /// further events, since they would describe the discarded grid.
    pub fn configure(&mut self, rows: i32, cols: i32) -> Result<(), GridError> {
        let grid = Grid::new(rows, cols)?;
        if self.state == RunState::Running {
            log::debug!("run cancelled by reconfiguration");
            self.state = RunState::Cancelled;
            self.phase = Phase::Inactive;
        }
        self.grid = grid;
        Ok(())
    }

    /// Flip an obstacle. Silently refused while a run is in flight, and on
    /// the start/end cells.
    pub fn toggle_obstacle(&mut self, c: Coord) {
        if self.state == RunState::Running {
            return;
        }
        self.grid.toggle_obstacle(c);
    }

    /// Begin a run of `algorithm` after an implicit obstacle-keeping reset.
    ///
    /// Fails with [`RunError::AlreadyRunning`] — without touching the
    /// in-flight run — if the session is not in `Idle` or a terminal state.
    pub fn start(&mut self, algorithm: Algorithm) -> Result<(), RunError> {
        if self.state == RunState::Running {
            return Err(RunError::AlreadyRunning);
        }
        log::debug!(
            "starting {algorithm} on {}x{} grid",
            self.grid.rows(),
            self.grid.cols()
        );
        self.grid.reset(true);
        self.token = CancelToken::new();
        self.phase = Phase::Searching(Engine::new(algorithm, &mut self.grid));
        self.state = RunState::Running;
        Ok(())
    }

    /// Advance the run by one event.
    ///
    /// Returns `None` once the stream has ended (the last event of any
    /// run is [`Event::Done`]). Cancellation is honored at every step
    /// boundary and delivers a final `Done(Cancelled)`.
    pub fn step(&mut self) -> Option<Event> {
        loop {
            if self.token.is_cancelled()
                && matches!(self.phase, Phase::Searching(_) | Phase::Tracing { .. })
            {
                self.phase = Phase::Finish(Outcome::Cancelled);
            }
            match std::mem::replace(&mut self.phase, Phase::Inactive) {
                Phase::Inactive => return None,
                Phase::Finish(outcome) => {
                    self.state = match outcome {
                        Outcome::Completed => RunState::Completed,
                        Outcome::NoPath => RunState::NoPath,
                        Outcome::Cancelled => RunState::Cancelled,
                    };
                    log::debug!("run finished: {outcome}");
                    return Some(Event::Done(outcome));
                }
                Phase::Searching(mut engine) => match engine.step(&mut self.grid) {
                    Step::Visited(c) => {
                        self.phase = Phase::Searching(engine);
                        return Some(Event::Visited(c));
                    }
                    Step::Exhausted => {
                        self.phase = Phase::Finish(Outcome::NoPath);
                    }
                    Step::Found => {
                        // A missing predecessor chain after Found would
                        // mean the engine lied; treat it as no path.
                        self.phase = match reconstruct(&self.grid) {
                            Some(path) => Phase::Tracing { path, next: 0 },
                            None => Phase::Finish(Outcome::NoPath),
                        };
                    }
                },
                Phase::Tracing { path, next } => {
                    if next < path.len() {
                        let c = path[next];
                        self.grid.mark_path(c);
                        self.phase = Phase::Tracing {
                            path,
                            next: next + 1,
                        };
                        return Some(Event::PathStep(c));
                    }
                    self.phase = Phase::Finish(Outcome::Completed);
                }
            }
        }
    }

    /// Run `algorithm` to completion with zero inter-step delay and
    /// return the full event stream.
    pub fn run(&mut self, algorithm: Algorithm) -> Result<RunReport, RunError> {
        self.start(algorithm)?;
        let mut events = Vec::new();
        let mut outcome = None;
        while let Some(ev) = self.step() {
            if let Event::Done(o) = ev {
                outcome = Some(o);
            }
            events.push(ev);
        }
        Ok(RunReport {
            // Every stream ends with Done; Cancelled is the conservative
            // fallback should that ever not hold.
            outcome: outcome.unwrap_or(Outcome::Cancelled),
            events,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_ends_with_done_and_goes_quiet() {
        let mut s = Session::new(3, 3).unwrap();
        let report = s.run(Algorithm::Bfs).unwrap();
        assert_eq!(report.outcome, Outcome::Completed);
        assert_eq!(report.events.last(), Some(&Event::Done(Outcome::Completed)));
        assert_eq!(s.state(), RunState::Completed);
        assert_eq!(s.step(), None);
    }

    #[test]
    fn start_while_running_is_rejected() {
        let mut s = Session::new(4, 4).unwrap();
        s.start(Algorithm::Dijkstra).unwrap();
        let first = s.step();
        assert!(matches!(first, Some(Event::Visited(_))));

        assert_eq!(s.start(Algorithm::Bfs), Err(RunError::AlreadyRunning));
        assert_eq!(s.state(), RunState::Running);

        // The in-flight run still completes normally.
        let mut done = None;
        while let Some(ev) = s.step() {
            if let Event::Done(o) = ev {
                done = Some(o);
            }
        }
        assert_eq!(done, Some(Outcome::Completed));
    }

    #[test]
    fn restart_from_terminal_state_resets_and_runs() {
        let mut s = Session::new(4, 4).unwrap();
        s.run(Algorithm::Dfs).unwrap();
        assert_eq!(s.state(), RunState::Completed);

        let report = s.run(Algorithm::AStar).unwrap();
        assert_eq!(report.outcome, Outcome::Completed);
    }

    #[test]
    fn cancellation_yields_one_final_done() {
        let mut s = Session::new(6, 6).unwrap();
        s.start(Algorithm::Bfs).unwrap();
        assert!(s.step().is_some());
        s.cancel();
        assert_eq!(s.step(), Some(Event::Done(Outcome::Cancelled)));
        assert_eq!(s.state(), RunState::Cancelled);
        assert_eq!(s.step(), None);
    }

    #[test]
    fn cancel_token_works_from_a_clone() {
        let mut s = Session::new(6, 6).unwrap();
        s.start(Algorithm::Dijkstra).unwrap();
        let token = s.cancel_token();
        assert!(s.step().is_some());
        token.cancel();
        assert_eq!(s.step(), Some(Event::Done(Outcome::Cancelled)));
    }

    #[test]
    fn obstacle_edits_refused_while_running() {
        let mut s = Session::new(4, 4).unwrap();
        s.start(Algorithm::Bfs).unwrap();
        s.toggle_obstacle(Coord::new(1, 1));
        assert!(!s.grid().is_obstacle(Coord::new(1, 1)));

        while s.step().is_some() {}
        s.toggle_obstacle(Coord::new(1, 1));
        assert!(s.grid().is_obstacle(Coord::new(1, 1)));
    }

    #[test]
    fn reconfigure_cancels_in_flight_run() {
        let mut s = Session::new(5, 5).unwrap();
        s.start(Algorithm::AStar).unwrap();
        assert!(s.step().is_some());
        s.configure(8, 8).unwrap();
        assert_eq!(s.state(), RunState::Cancelled);
        assert_eq!(s.grid().rows(), 8);
        assert_eq!(s.step(), None);
    }

    #[test]
    fn invalid_reconfigure_leaves_run_alone() {
        let mut s = Session::new(5, 5).unwrap();
        s.start(Algorithm::Bfs).unwrap();
        assert!(s.configure(1, 1).is_err());
        assert_eq!(s.state(), RunState::Running);
        assert!(matches!(s.step(), Some(Event::Visited(_))));
    }
}
