//! Core data structures for the gridforge Sudoku crates.
//!
//! This crate provides the board representation shared by the solver and
//! generator components. The central type is [`Board`], a 9x9 grid that keeps
//! one [`DigitSet`] per row, column, and box recording the digits already
//! placed there, so legality queries are a few bit operations instead of a
//! scan.
//!
//! # Overview
//!
//! - [`digit`]: [`Digit`], a validated digit 1-9
//! - [`position`]: [`Position`], an `(x, y)` cell coordinate on the board
//! - [`digit_set`]: [`DigitSet`], a bitmask set of digits 1-9
//! - [`board`]: [`Board`] and its parsing/rendering, plus [`BoardError`]
//!
//! # Examples
//!
//! ```
//! use gridforge_core::{Board, Digit, Position};
//!
//! let mut board = Board::new();
//! board.place(Position::new(4, 4), Digit::from_value(5));
//!
//! // 5 is no longer legal anywhere in row 4, column 4, or the center box.
//! assert!(!board.candidate_at(Position::new(4, 0), Digit::from_value(5)));
//! assert!(!board.candidate_at(Position::new(0, 4), Digit::from_value(5)));
//! assert!(!board.candidate_at(Position::new(3, 3), Digit::from_value(5)));
//! ```

pub mod board;
pub mod digit;
pub mod digit_set;
pub mod position;

pub use self::{
    board::{Board, BoardError},
    digit::Digit,
    digit_set::DigitSet,
    position::Position,
};
