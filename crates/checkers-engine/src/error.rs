//! Errors reported by the engine.
//!
//! Every variant is a caller error: the request is rejected and no state
//! is modified.

use checkers_core::{Color, LayoutError, Position};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("position ({}, {}) is outside the board", .0.row, .0.col)]
    OutOfBounds(Position),

    #[error("it is {expected}'s turn, not {attempted}'s")]
    NotCurrentColor { expected: Color, attempted: Color },

    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Position, to: Position },

    #[error("the piece on {0} must continue capturing")]
    MustContinueCapture(Position),

    #[error("the game is already over")]
    GameOver,

    #[error(transparent)]
    InvalidLayout(#[from] LayoutError),
}
