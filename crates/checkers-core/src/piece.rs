//! Checkers piece representation.

use crate::Color;

/// The two ranks a checkers piece can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    Man = 0,
    King = 1,
}

/// A piece: a color and a rank.
///
/// Pieces are plain values. Crowning a man produces a new piece through
/// [`Piece::promoted`]; nothing is changed in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
}

const MAN_DIRECTIONS_BLACK: &[(i8, i8)] = &[(1, -1), (1, 1)];
const MAN_DIRECTIONS_RED: &[(i8, i8)] = &[(-1, -1), (-1, 1)];
const ALL_DIRECTIONS: &[(i8, i8)] = &[(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl Piece {
    /// Creates a piece.
    #[inline]
    pub const fn new(color: Color, rank: Rank) -> Self {
        Piece { color, rank }
    }

    /// Creates an uncrowned piece of the given color.
    #[inline]
    pub const fn man(color: Color) -> Self {
        Self::new(color, Rank::Man)
    }

    /// Creates a king of the given color.
    #[inline]
    pub const fn king(color: Color) -> Self {
        Self::new(color, Rank::King)
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self.rank, Rank::King)
    }

    /// Returns the crowned version of this piece.
    #[inline]
    pub const fn promoted(self) -> Self {
        Self::king(self.color)
    }

    /// Diagonal directions (row delta, column delta) this piece may step in
    /// without capturing.
    pub const fn step_directions(self) -> &'static [(i8, i8)] {
        match (self.rank, self.color) {
            (Rank::King, _) => ALL_DIRECTIONS,
            (Rank::Man, Color::Black) => MAN_DIRECTIONS_BLACK,
            (Rank::Man, Color::Red) => MAN_DIRECTIONS_RED,
        }
    }

    /// Diagonal directions this piece may capture in.
    ///
    /// Captures are allowed backward for men as well as kings.
    pub const fn jump_directions(self) -> &'static [(i8, i8)] {
        ALL_DIRECTIONS
    }

    /// Returns the layout character: `b`/`r` for men, `B`/`R` for kings.
    pub const fn to_layout_char(self) -> char {
        let c = match self.color {
            Color::Black => 'b',
            Color::Red => 'r',
        };
        match self.rank {
            Rank::Man => c,
            Rank::King => c.to_ascii_uppercase(),
        }
    }

    /// Parses a layout character into a piece.
    pub const fn from_layout_char(c: char) -> Option<Self> {
        let rank = if c.is_ascii_uppercase() {
            Rank::King
        } else {
            Rank::Man
        };
        let color = match c.to_ascii_lowercase() {
            'b' => Color::Black,
            'r' => Color::Red,
            _ => return None,
        };
        Some(Piece::new(color, rank))
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rank::Man => write!(f, "Man"),
            Rank::King => write!(f, "King"),
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.rank)
    }
}
