//! Player color representation.

/// The two sides in checkers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Red = 1,
}

impl Color {
    /// Both colors, Black first (Black opens the game).
    pub const ALL: [Color; 2] = [Color::Black, Color::Red];

    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Black => Color::Red,
            Color::Red => Color::Black,
        }
    }

    /// Returns the index (0 for Black, 1 for Red).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the row direction a man of this color advances in.
    ///
    /// Black starts on rows 0-2 and moves down the board (+1), Red starts on
    /// rows 5-7 and moves up (-1).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Black => 1,
            Color::Red => -1,
        }
    }

    /// Returns the row on which a man of this color is crowned.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Color::Black => 7,
            Color::Red => 0,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::Red => write!(f, "Red"),
        }
    }
}
