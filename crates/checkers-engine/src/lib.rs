//! Checkers rules engine.
//!
//! This crate provides:
//! - [`Board`] - the 8x8 grid, move generation and move application
//! - [`GameState`] - an immutable snapshot and its validated transition
//! - [`Game`] - the mutable match: turns, capture counts, winner
//! - [`Player`] - the capability a participant provides
//!
//! # Example
//!
//! ```
//! use checkers_core::{Color, Position};
//! use checkers_engine::{Game, Human};
//!
//! let mut game = Game::new(Box::new(Human::new("Bill")), Box::new(Human::new("Ted")));
//! game.make_move(Position::new(2, 1), Position::new(3, 2)).unwrap();
//! assert_eq!(game.current_state().current_color(), Color::Red);
//! ```

mod board;
mod error;
mod game;
mod player;
mod state;

pub use board::{Board, Square};
pub use error::GameError;
pub use game::Game;
pub use player::{Human, Player};
pub use state::GameState;
