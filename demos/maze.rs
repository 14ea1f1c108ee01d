//! Terminal demo: run all four algorithms over the same obstacle layout
//! and print what each one explored.
//!
//! Run: cargo run --bin maze

use pathtrace_core::Coord;
use pathtrace_search::{Algorithm, Event, Session};
use rand::{RngExt, SeedableRng};

const ROWS: i32 = 15;
const COLS: i32 = 30;

fn main() {
    let mut session = match Session::new(ROWS, COLS) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // Sprinkle obstacles; the endpoints are protected by the session.
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    for row in 0..ROWS {
        for col in 0..COLS {
            if rng.random_range(0..100) < 28 {
                session.toggle_obstacle(Coord::new(row, col));
            }
        }
    }

    for algo in Algorithm::ALL {
        let report = match session.run(algo) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        };
        let visited = report
            .events
            .iter()
            .filter(|ev| matches!(ev, Event::Visited(_)))
            .count();
        let path = report
            .events
            .iter()
            .filter(|ev| matches!(ev, Event::PathStep(_)))
            .count();

        println!(
            "{algo}: {} ({visited} cells explored, path length {path})",
            report.outcome
        );
        print_grid(&session);
        println!();
    }
}

fn print_grid(session: &Session) {
    let grid = session.grid();
    for row in 0..grid.rows() {
        let mut line = String::with_capacity(grid.cols() as usize);
        for col in 0..grid.cols() {
            let c = Coord::new(row, col);
            line.push(if c == grid.start() {
                'S'
            } else if c == grid.end() {
                'E'
            } else if grid.is_obstacle(c) {
                '#'
            } else if grid.is_path(c) {
                '*'
            } else if grid.is_visited(c) {
                '.'
            } else {
                ' '
            });
        }
        println!("{line}");
    }
}
