//! Player capability.

use std::fmt;

use crate::GameState;

/// Anything that can take a turn.
///
/// The engine validates moves and enumerates candidates; a player only
/// picks the resulting state. A human confirms the single candidate the
/// presentation layer already validated. An automated player may pick among
/// [`GameState::successors`].
pub trait Player: fmt::Debug {
    /// Display name.
    fn name(&self) -> &str;

    /// Returns the state this player commits to, given a candidate.
    fn choose_move(&self, candidate: GameState) -> GameState;

    /// Whether moves for this player come from user input.
    fn is_human(&self) -> bool {
        false
    }
}

/// A person at the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Human {
    name: String,
}

impl Human {
    pub fn new(name: impl Into<String>) -> Self {
        Human { name: name.into() }
    }
}

impl Player for Human {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, candidate: GameState) -> GameState {
        candidate
    }

    fn is_human(&self) -> bool {
        true
    }
}
