use gridforge_core::{Board, Digit, Position};
use gridforge_solver::BacktrackingSolver;
use rand::{
    Rng,
    seq::{IndexedRandom as _, SliceRandom as _},
};

use crate::seed::PuzzleSeed;

/// A generated puzzle together with its solution and the seed that
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle grid, with the requested number of cells emptied.
    pub problem: Board,
    /// The completed board the problem was carved from.
    pub solution: Board,
    /// The seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
}

/// Generates Sudoku puzzles by carving holes out of random complete boards.
///
/// A puzzle is produced in three steps, all driven by one seeded RNG:
///
/// 1. The three diagonal boxes (0, 4, 8) are each filled with an independent
///    random permutation of 1-9. They share no row, column, or box, so no
///    legality conflict is possible.
/// 2. The rest of the board is completed by the backtracking search with
///    shuffled candidate order.
/// 3. Exactly the requested number of distinct cells are emptied, chosen
///    uniformly without replacement.
///
/// # Examples
///
/// ```
/// use gridforge_generator::{PuzzleGenerator, PuzzleSeed};
/// use gridforge_solver::BacktrackingSolver;
///
/// let solver = BacktrackingSolver::new();
/// let generator = PuzzleGenerator::new(&solver);
///
/// let seed: PuzzleSeed = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1"
///     .parse()
///     .unwrap();
/// let puzzle = generator.generate_with_seed(40, seed)?;
///
/// assert_eq!(puzzle.problem.empty_count(), 40);
/// assert_eq!(generator.generate_with_seed(40, seed)?, puzzle);
/// # Ok::<(), gridforge_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator<'a> {
    solver: &'a BacktrackingSolver,
}

impl<'a> PuzzleGenerator<'a> {
    /// Creates a generator that completes boards with the given solver.
    #[must_use]
    pub const fn new(solver: &'a BacktrackingSolver) -> Self {
        Self { solver }
    }

    /// Generates a puzzle with exactly `holes` empty cells from a fresh
    /// random seed.
    ///
    /// # Errors
    ///
    /// See [`generate_with_seed`](Self::generate_with_seed).
    pub fn generate(&self, holes: u8) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(holes, PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`, with exactly `holes` empty
    /// cells.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::TooManyHoles`] if `holes` exceeds 81, and
    /// [`GenerateError::Unfillable`] if the search cannot complete the
    /// diagonally seeded board. The latter would mean a broken invariant —
    /// a diagonally seeded board always has a completion — so callers should
    /// treat it as fatal rather than retry.
    pub fn generate_with_seed(
        &self,
        holes: u8,
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        if holes > 81 {
            return Err(GenerateError::TooManyHoles { requested: holes });
        }

        let mut rng = seed.rng();
        let mut board = Board::new();
        seed_diagonal_boxes(&mut board, &mut rng);
        if !self
            .solver
            .fill_with(&mut board, |digits| digits.shuffle(&mut rng))
        {
            return Err(GenerateError::Unfillable);
        }
        let solution = board.clone();

        let positions: Vec<Position> = Position::all().collect();
        for &pos in positions.choose_multiple(&mut rng, usize::from(holes)) {
            board.clear(pos);
        }

        debug_assert!(
            {
                let mut check = board.clone();
                self.solver.solve(&mut check)
            },
            "generated problem must still solve"
        );

        Ok(GeneratedPuzzle {
            problem: board,
            solution,
            seed,
        })
    }
}

/// Fills boxes 0, 4, and 8 with independent random permutations of 1-9.
///
/// The diagonal boxes share no row, column, or box, so each placement is
/// legal regardless of the other two boxes.
fn seed_diagonal_boxes<R>(board: &mut Board, rng: &mut R)
where
    R: Rng,
{
    for box_index in [0, 4, 8] {
        let mut digits = Digit::ALL;
        digits.shuffle(rng);
        for (i, digit) in (0u8..).zip(digits) {
            board.place(Position::from_box(box_index, i), digit);
        }
    }
}

/// Errors from puzzle generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GenerateError {
    /// More empty cells were requested than the board has.
    #[display("cannot empty {requested} of 81 cells")]
    TooManyHoles {
        /// The requested number of empty cells.
        requested: u8,
    },
    /// The search failed to complete a diagonally seeded board. This cannot
    /// happen with correct seeding and indicates an internal defect.
    #[display("could not complete a diagonally seeded board")]
    Unfillable,
}

#[cfg(test)]
mod tests {
    use gridforge_core::DigitSet;
    use proptest::prelude::*;

    use super::*;

    const SEED: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    fn generator_seed() -> PuzzleSeed {
        SEED.parse().unwrap()
    }

    fn assert_fully_valid(board: &Board) {
        assert!(board.is_complete());
        for i in 0..9 {
            assert_eq!(board.row_digits(i), DigitSet::FULL);
            assert_eq!(board.col_digits(i), DigitSet::FULL);
            assert_eq!(board.box_digits(i), DigitSet::FULL);
        }
    }

    #[test]
    fn test_generate_produces_requested_holes() {
        let solver = BacktrackingSolver::new();
        let generator = PuzzleGenerator::new(&solver);

        let puzzle = generator.generate_with_seed(30, generator_seed()).unwrap();
        assert_eq!(puzzle.problem.empty_count(), 30);
        assert_fully_valid(&puzzle.solution);
    }

    #[test]
    fn test_problem_is_carved_from_solution() {
        let solver = BacktrackingSolver::new();
        let generator = PuzzleGenerator::new(&solver);

        let puzzle = generator.generate_with_seed(45, generator_seed()).unwrap();
        for pos in Position::all() {
            match puzzle.problem.digit_at(pos) {
                Some(digit) => assert_eq!(puzzle.solution.digit_at(pos), Some(digit)),
                None => assert!(puzzle.solution.digit_at(pos).is_some()),
            }
        }
    }

    #[test]
    fn test_problem_solves() {
        let solver = BacktrackingSolver::new();
        let generator = PuzzleGenerator::new(&solver);

        let puzzle = generator.generate_with_seed(50, generator_seed()).unwrap();
        let mut board = puzzle.problem.clone();
        assert!(solver.solve(&mut board));
        assert_fully_valid(&board);
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let solver = BacktrackingSolver::new();
        let generator = PuzzleGenerator::new(&solver);

        let a = generator.generate_with_seed(30, generator_seed()).unwrap();
        let b = generator.generate_with_seed(30, generator_seed()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let solver = BacktrackingSolver::new();
        let generator = PuzzleGenerator::new(&solver);

        let a = generator.generate_with_seed(30, generator_seed()).unwrap();
        let b = generator
            .generate_with_seed(30, PuzzleSeed::from_bytes([0x5c; 32]))
            .unwrap();
        assert_ne!(a.solution, b.solution);
    }

    #[test]
    fn test_hole_count_extremes() {
        let solver = BacktrackingSolver::new();
        let generator = PuzzleGenerator::new(&solver);

        let full = generator.generate_with_seed(0, generator_seed()).unwrap();
        assert_eq!(full.problem, full.solution);

        let empty = generator.generate_with_seed(81, generator_seed()).unwrap();
        assert_eq!(empty.problem.empty_count(), 81);
    }

    #[test]
    fn test_too_many_holes_is_rejected() {
        let solver = BacktrackingSolver::new();
        let generator = PuzzleGenerator::new(&solver);

        assert_eq!(
            generator.generate_with_seed(82, generator_seed()),
            Err(GenerateError::TooManyHoles { requested: 82 })
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Exactly `holes` cells are emptied, never fewer through re-picking
        /// an already-empty cell.
        #[test]
        fn prop_exact_hole_count(holes in 0u8..=81, bytes in prop::array::uniform32(any::<u8>())) {
            let solver = BacktrackingSolver::new();
            let generator = PuzzleGenerator::new(&solver);

            let puzzle = generator
                .generate_with_seed(holes, PuzzleSeed::from_bytes(bytes))
                .unwrap();
            prop_assert_eq!(puzzle.problem.empty_count(), usize::from(holes));
            prop_assert!(puzzle.solution.is_complete());
        }
    }
}
