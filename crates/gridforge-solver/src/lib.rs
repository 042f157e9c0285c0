//! Backtracking search engine for 9x9 Sudoku boards.
//!
//! This crate implements the constraint-based search shared by solving and
//! puzzle generation: a depth-first search over the empty cells of a
//! [`Board`](gridforge_core::Board), choosing the most constrained cell
//! first and undoing every placement on a failed branch.
//!
//! # Examples
//!
//! ```
//! use gridforge_core::Board;
//! use gridforge_solver::BacktrackingSolver;
//!
//! let mut board: Board = "
//!     53. .7. ...
//!     6.. 195 ...
//!     .98 ... .6.
//!     8.. .6. ..3
//!     4.. 8.3 ..1
//!     7.. .2. ..6
//!     .6. ... 28.
//!     ... 419 ..5
//!     ... .8. .79
//! "
//! .parse()?;
//!
//! let solver = BacktrackingSolver::new();
//! assert!(solver.solve(&mut board));
//! assert!(board.is_complete());
//! # Ok::<(), gridforge_core::BoardError>(())
//! ```

pub use self::backtracking::{BacktrackingSolver, SearchStats};

mod backtracking;
