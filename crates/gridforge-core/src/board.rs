//! The 9x9 board and its constraint indexes.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{digit::Digit, digit_set::DigitSet, position::Position};

/// A 9x9 Sudoku board with row, column, and box constraint indexes.
///
/// Alongside the 81 cells, the board keeps one [`DigitSet`] per row, column,
/// and box recording the digits placed there. The indexes are updated
/// incrementally by [`place`](Board::place) and [`clear`](Board::clear) and
/// make [`candidate_at`](Board::candidate_at) a constant-time query, which
/// matters because a single generation run performs thousands of them.
///
/// A `Board` value is always legal: no two filled cells in the same row,
/// column, or box hold equal digits. The fallible constructors
/// ([`from_rows`](Board::from_rows), [`FromStr`]) reject input that violates
/// this, and `place` requires legality from its caller.
///
/// # Examples
///
/// ```
/// use gridforge_core::{Board, Digit, Position};
///
/// let mut board = Board::new();
/// let five = Digit::from_value(5);
///
/// assert!(board.candidate_at(Position::new(0, 0), five));
/// board.place(Position::new(0, 0), five);
///
/// // 5 now conflicts along row 0, column 0, and box 0.
/// assert!(!board.candidate_at(Position::new(8, 0), five));
/// assert!(!board.candidate_at(Position::new(0, 8), five));
/// assert!(!board.candidate_at(Position::new(2, 2), five));
///
/// assert_eq!(board.clear(Position::new(0, 0)), Some(five));
/// assert!(board.candidate_at(Position::new(8, 0), five));
/// ```
///
/// Boards parse from the grid-literal format (`.`, `_`, or `0` for blanks,
/// whitespace ignored):
///
/// ```
/// use gridforge_core::Board;
///
/// let board: Board = "
///     53. .7. ...
///     6.. 195 ...
///     .98 ... .6.
///     8.. .6. ..3
///     4.. 8.3 ..1
///     7.. .2. ..6
///     .6. ... 28.
///     ... 419 ..5
///     ... .8. .79
/// "
/// .parse()?;
/// assert_eq!(board.empty_count(), 51);
/// # Ok::<(), gridforge_core::BoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Digit>; 81],
    rows: [DigitSet; 9],
    cols: [DigitSet; 9],
    boxes: [DigitSet; 9],
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; 81],
            rows: [DigitSet::EMPTY; 9],
            cols: [DigitSet::EMPTY; 9],
            boxes: [DigitSet::EMPTY; 9],
        }
    }

    /// Builds a board from row-major cell values, 0 meaning empty.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDigit`] if a value is greater than 9, and
    /// [`BoardError::Conflict`] if a digit duplicates another in its row,
    /// column, or box.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridforge_core::{Board, BoardError};
    ///
    /// let mut rows = [[0u8; 9]; 9];
    /// rows[0][0] = 5;
    /// rows[0][8] = 5;
    /// assert!(matches!(
    ///     Board::from_rows(rows),
    ///     Err(BoardError::Conflict { .. })
    /// ));
    /// ```
    pub fn from_rows(rows: [[u8; 9]; 9]) -> Result<Self, BoardError> {
        let mut board = Self::new();
        for (y, row) in (0u8..).zip(&rows) {
            for (x, &value) in (0u8..).zip(row) {
                if value == 0 {
                    continue;
                }
                let digit = Digit::new(value).ok_or(BoardError::InvalidDigit { value })?;
                board.checked_place(Position::new(x, y), digit)?;
            }
        }
        Ok(board)
    }

    /// Returns the board as row-major cell values, 0 meaning empty.
    #[must_use]
    pub fn to_rows(&self) -> [[u8; 9]; 9] {
        let mut rows = [[0; 9]; 9];
        for pos in Position::all() {
            if let Some(digit) = self.digit_at(pos) {
                rows[usize::from(pos.y())][usize::from(pos.x())] = digit.value();
            }
        }
        rows
    }

    /// Returns the digit at a position, or `None` if the cell is empty.
    #[must_use]
    pub fn digit_at(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Returns `true` if placing `digit` at `pos` would not duplicate a digit
    /// in the position's row, column, or box.
    ///
    /// This is a pure query with no side effects. It does not consider
    /// whether the cell itself is filled.
    #[must_use]
    pub fn candidate_at(&self, pos: Position, digit: Digit) -> bool {
        !self.used_at(pos).contains(digit)
    }

    /// Returns all digits that would be legal at `pos`.
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        !self.used_at(pos)
    }

    /// Places a digit in an empty cell and updates the constraint indexes.
    ///
    /// The caller must ensure the cell is empty and the digit is legal there
    /// (see [`candidate_at`](Board::candidate_at)); this is debug-asserted
    /// but not re-validated in release builds, since every search step has
    /// already computed the candidate set.
    pub fn place(&mut self, pos: Position, digit: Digit) {
        debug_assert!(self.digit_at(pos).is_none(), "cell {pos} is already filled");
        debug_assert!(
            self.candidate_at(pos, digit),
            "digit {digit} conflicts at {pos}"
        );
        self.cells[pos.index()] = Some(digit);
        self.rows[usize::from(pos.y())].insert(digit);
        self.cols[usize::from(pos.x())].insert(digit);
        self.boxes[usize::from(pos.box_index())].insert(digit);
    }

    /// Empties a cell, removing its digit from the constraint indexes.
    ///
    /// Returns the removed digit, or `None` if the cell was already empty.
    pub fn clear(&mut self, pos: Position) -> Option<Digit> {
        let digit = self.cells[pos.index()].take()?;
        self.rows[usize::from(pos.y())].remove(digit);
        self.cols[usize::from(pos.x())].remove(digit);
        self.boxes[usize::from(pos.box_index())].remove(digit);
        Some(digit)
    }

    /// Returns the digits currently placed in row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not in the range 0-8.
    #[must_use]
    pub fn row_digits(&self, y: u8) -> DigitSet {
        self.rows[usize::from(y)]
    }

    /// Returns the digits currently placed in column `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x` is not in the range 0-8.
    #[must_use]
    pub fn col_digits(&self, x: u8) -> DigitSet {
        self.cols[usize::from(x)]
    }

    /// Returns the digits currently placed in the box with the given index.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` is not in the range 0-8.
    #[must_use]
    pub fn box_digits(&self, box_index: u8) -> DigitSet {
        self.boxes[usize::from(box_index)]
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Returns an iterator over the empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> {
        Position::all().filter(|&pos| self.digit_at(pos).is_none())
    }

    fn used_at(&self, pos: Position) -> DigitSet {
        self.rows[usize::from(pos.y())]
            | self.cols[usize::from(pos.x())]
            | self.boxes[usize::from(pos.box_index())]
    }

    fn checked_place(&mut self, pos: Position, digit: Digit) -> Result<(), BoardError> {
        if !self.candidate_at(pos, digit) {
            return Err(BoardError::Conflict {
                position: pos,
                digit,
            });
        }
        self.place(pos, digit);
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses the grid-literal format: digits 1-9 for filled cells, `.`, `_`, or
/// `0` for blanks. Whitespace and the `|`/`-`/`+` separators emitted by the
/// [`Display`] renderer are ignored, so rendered boards parse back. Exactly
/// 81 cells are required.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, BoardError> {
        let mut board = Self::new();
        let mut count = 0usize;
        for c in s.chars() {
            if c.is_whitespace() || matches!(c, '|' | '-' | '+') {
                continue;
            }
            let digit = match c {
                '.' | '_' | '0' => None,
                _ => Some(
                    c.to_digit(10)
                        .and_then(|value| u8::try_from(value).ok())
                        .and_then(Digit::new)
                        .ok_or(BoardError::UnexpectedCharacter { character: c })?,
                ),
            };
            if let Some(digit) = digit
                && count < 81
            {
                #[expect(clippy::cast_possible_truncation)]
                board.checked_place(Position::from_index(count as u8), digit)?;
            }
            count += 1;
        }
        if count != 81 {
            return Err(BoardError::WrongCellCount { count });
        }
        Ok(board)
    }
}

/// Renders the board with `.` for blanks and `-`/`|` separators between box
/// bands.
impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            if y > 0 {
                writeln!(f)?;
            }
            if y == 3 || y == 6 {
                writeln!(f, "------+-------+------")?;
            }
            for x in 0..9 {
                if x > 0 {
                    write!(f, " ")?;
                }
                if x == 3 || x == 6 {
                    write!(f, "| ")?;
                }
                match self.digit_at(Position::new(x, y)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}

/// Errors from constructing a [`Board`] out of untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// A cell value was outside the range 0-9.
    #[display("cell value {value} is outside 0-9")]
    InvalidDigit {
        /// The offending value.
        value: u8,
    },
    /// A character in a board literal was neither a digit, a blank marker,
    /// nor whitespace.
    #[display("unexpected character {character:?} in board literal")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
    },
    /// A board literal did not contain exactly 81 cells.
    #[display("board literal has {count} cells, expected 81")]
    WrongCellCount {
        /// The number of cells found.
        count: usize,
    },
    /// A digit duplicated another in its row, column, or box. A board with
    /// such a conflict has no completion, so it is rejected up front instead
    /// of being handed to the solver.
    #[display("digit {digit} at {position} duplicates its row, column, or box")]
    Conflict {
        /// Where the duplicate digit was.
        position: Position,
        /// The duplicated digit.
        digit: Digit,
    },
}
