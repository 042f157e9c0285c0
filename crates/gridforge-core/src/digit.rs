//! Sudoku digit representation.

use std::fmt::{self, Display};

/// A sudoku digit in the range 1-9.
///
/// Out-of-range values are unrepresentable: construction either goes through
/// the fallible [`new`](Digit::new) or the panicking
/// [`from_value`](Digit::from_value).
///
/// # Examples
///
/// ```
/// use gridforge_core::Digit;
///
/// let digit = Digit::from_value(5);
/// assert_eq!(digit.value(), 5);
///
/// assert!(Digit::new(0).is_none());
/// assert!(Digit::new(10).is_none());
///
/// for digit in Digit::ALL {
///     assert!((1..=9).contains(&digit.value()));
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Array containing all digits from 1 to 9 in ascending order.
    pub const ALL: [Self; 9] = [
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Creates a digit from a value in the range 1-9, or `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridforge_core::Digit;
    ///
    /// assert_eq!(Digit::new(5), Some(Digit::from_value(5)));
    /// assert_eq!(Digit::new(0), None);
    /// ```
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if matches!(value, 1..=9) {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Creates a digit from a value known to be in the range 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    ///
    /// ```should_panic
    /// use gridforge_core::Digit;
    ///
    /// let _ = Digit::from_value(0);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match Self::new(value) {
            Some(digit) => digit,
            None => panic!("invalid digit value: {value}"),
        }
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// The smallest digit, 1.
///
/// Exists so digits can live in default-initialized buffers; it carries no
/// other meaning.
impl Default for Digit {
    fn default() -> Self {
        Self(1)
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}
