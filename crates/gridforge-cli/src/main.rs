//! Command-line Sudoku puzzle generator.
//!
//! Generates a puzzle with the requested number of empty cells and prints it
//! to stdout along with the seed that reproduces it. Pass `--seed` to replay
//! a previous run and `--solution` to print the answer as well.

use std::process;

use clap::Parser;
use gridforge_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use gridforge_solver::BacktrackingSolver;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of cells to empty out of 81.
    #[arg(long, value_name = "COUNT", default_value_t = 30)]
    holes: u8,

    /// Seed as 64 hex digits; random if omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<String>,

    /// Also print the solution.
    #[arg(long)]
    solution: bool,
}

fn main() {
    better_panic::install();
    env_logger::init();

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

    log::info!("generating puzzle with {} empty cells", args.holes);
    let solver = BacktrackingSolver::new();
    let generator = PuzzleGenerator::new(&solver);
    let puzzle = match generator.generate_with_seed(args.holes, seed) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("generation failed: {err}");
            process::exit(1);
        }
    };

    print_puzzle(&puzzle, args.solution);
}

fn print_puzzle(puzzle: &GeneratedPuzzle, with_solution: bool) {
    println!("Seed: {}", puzzle.seed);
    println!();
    println!("{}", puzzle.problem);
    if with_solution {
        println!();
        println!("{}", puzzle.solution);
    }
}
