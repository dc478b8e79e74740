//! Board coordinates.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Width and height of the board.
pub const BOARD_SIZE: i8 = 8;

/// A (row, column) coordinate.
///
/// Any pair of coordinates can be represented so that callers can hand an
/// off-board position to the engine and get an error back rather than a
/// panic. Use [`Position::is_on_board`] or [`Position::checked`] to test.
///
/// Row 0 is Black's back row, row 7 is Red's.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

/// Error returned when a position string cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid position '{0}': expected a row and column in 0-7")]
pub struct ParsePositionError(pub String);

impl Position {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Position { row, col }
    }

    /// Creates a position, returning `None` if it lies off the board.
    #[inline]
    pub const fn checked(row: i8, col: i8) -> Option<Self> {
        let pos = Position::new(row, col);
        if pos.is_on_board() {
            Some(pos)
        } else {
            None
        }
    }

    /// Returns true if both coordinates are in 0-7.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Returns true if this is one of the 32 dark squares pieces live on.
    #[inline]
    pub const fn is_playable(self) -> bool {
        self.is_on_board() && (self.row + self.col) % 2 == 1
    }

    /// Returns the position shifted by the given deltas. The result may be
    /// off the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Position::new(self.row + d_row, self.col + d_col)
    }

    /// Returns the square halfway between `self` and `other`.
    #[inline]
    pub const fn midpoint(self, other: Position) -> Self {
        Position::new((self.row + other.row) / 2, (self.col + other.col) / 2)
    }

    /// Grid indices for an on-board position.
    #[inline]
    pub fn indices(self) -> Option<(usize, usize)> {
        self.is_on_board()
            .then(|| (self.row as usize, self.col as usize))
    }

    /// Iterates over all 64 on-board positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.col)
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Parses `"rc"`, `"r,c"` or `"r c"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePositionError(s.to_string());
        let digits: Vec<i8> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| c.to_digit(10).map(|d| d as i8))
            .collect::<Option<_>>()
            .ok_or_else(err)?;
        match digits.as_slice() {
            &[row, col] => Position::checked(row, col).ok_or_else(err),
            _ => Err(err()),
        }
    }
}
