//! Core types for checkers.
//!
//! This crate provides the fundamental types used across the checkers engine:
//! - [`Color`], [`Rank`] and [`Piece`] for piece representation
//! - [`Position`] for board coordinates
//! - [`Move`] for move representation
//! - Board layout parsing ([`LayoutParser`])

mod color;
mod layout;
mod mov;
mod piece;
mod position;

pub use color::Color;
pub use layout::{Layout, LayoutError, LayoutParser};
pub use mov::Move;
pub use piece::{Piece, Rank};
pub use position::{ParsePositionError, Position, BOARD_SIZE};
