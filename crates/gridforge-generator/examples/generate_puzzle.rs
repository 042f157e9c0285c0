//! Example demonstrating Sudoku puzzle generation.
//!
//! Generates a puzzle, prints the seed, the problem, the solution, and the
//! search statistics for re-solving the problem from scratch.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Control the number of empty cells (default: 30):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --holes 50
//! ```
//!
//! Reproduce a previous run from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64-hex-digit-seed>
//! ```

use std::process;

use clap::Parser;
use gridforge_generator::{PuzzleGenerator, PuzzleSeed};
use gridforge_solver::{BacktrackingSolver, SearchStats};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of cells to empty out of 81.
    #[arg(long, value_name = "COUNT", default_value_t = 30)]
    holes: u8,

    /// Seed as 64 hex digits; random if omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<String>,
}

fn main() {
    let args = Args::parse();

    let seed = match args.seed.as_deref() {
        Some(s) => match s.parse::<PuzzleSeed>() {
            Ok(seed) => seed,
            Err(err) => {
                eprintln!("invalid seed: {err}");
                process::exit(2);
            }
        },
        None => PuzzleSeed::random(),
    };

    let solver = BacktrackingSolver::new();
    let generator = PuzzleGenerator::new(&solver);
    let puzzle = match generator.generate_with_seed(args.holes, seed) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("generation failed: {err}");
            process::exit(1);
        }
    };

    let mut stats = SearchStats::default();
    let mut check = puzzle.problem.clone();
    assert!(solver.solve_with_stats(&mut check, &mut stats));

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Problem:");
    println!("{}", indent(&puzzle.problem.to_string()));
    println!();
    println!("Solution:");
    println!("{}", indent(&puzzle.solution.to_string()));
    println!();
    println!("Stats:");
    println!("  nodes: {}", stats.nodes());
    println!("  backtracks: {}", stats.backtracks());
}

fn indent(block: &str) -> String {
    block
        .lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
