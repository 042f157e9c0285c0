//! Sudoku puzzle generation.
//!
//! Generation composes three steps: seed the diagonal boxes with random
//! permutations, complete the board with a candidate-shuffled backtracking
//! search, then empty a requested number of distinct cells. Every run is
//! keyed by a [`PuzzleSeed`], so a puzzle can be reproduced from its seed
//! alone.
//!
//! # Examples
//!
//! ```
//! use gridforge_generator::PuzzleGenerator;
//! use gridforge_solver::BacktrackingSolver;
//!
//! let solver = BacktrackingSolver::new();
//! let generator = PuzzleGenerator::new(&solver);
//!
//! let puzzle = generator.generate(30)?;
//! assert_eq!(puzzle.problem.empty_count(), 30);
//! assert!(puzzle.solution.is_complete());
//! # Ok::<(), gridforge_generator::GenerateError>(())
//! ```

pub use self::{
    generator::{GenerateError, GeneratedPuzzle, PuzzleGenerator},
    seed::{PuzzleSeed, SeedParseError},
};

mod generator;
mod seed;
