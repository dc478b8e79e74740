//! Move representation.

use crate::Position;
use std::fmt;

/// A single step or jump of one piece.
///
/// A multi-jump chain is a sequence of jump moves by the same piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    #[inline]
    pub const fn new(from: Position, to: Position) -> Self {
        Move { from, to }
    }

    /// Returns true if this move travels two rows, i.e. captures.
    #[inline]
    pub const fn is_jump(self) -> bool {
        (self.to.row - self.from.row).abs() == 2
    }

    /// Returns the square of the captured piece for a jump.
    #[inline]
    pub const fn jumped(self) -> Option<Position> {
        if self.is_jump() {
            Some(self.from.midpoint(self.to))
        } else {
            None
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_jump() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}
