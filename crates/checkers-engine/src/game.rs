//! Match management: turn sequencing, capture tallies and win detection.
//!
//! [`Game`] is the only mutable object in the engine. It owns the current
//! [`GameState`] and both players, and is driven by one caller at a time.

use checkers_core::{Color, Position};
use tracing::{debug, info};

use crate::{GameError, GameState, Player};

/// A match between two players.
#[derive(Debug)]
pub struct Game {
    state: GameState,
    black: Box<dyn Player>,
    red: Box<dyn Player>,
    black_captures: u32,
    red_captures: u32,
    winner: Option<Color>,
    turns: u32,
}

impl Game {
    /// Creates a match in the standard starting position.
    pub fn new(black: Box<dyn Player>, red: Box<dyn Player>) -> Self {
        Self::from_state(GameState::new(), black, red)
    }

    /// Creates a match from an arbitrary state. The winner is evaluated
    /// immediately, so a state with no moves for the side to move is
    /// already decided.
    pub fn from_state(state: GameState, black: Box<dyn Player>, red: Box<dyn Player>) -> Self {
        let mut game = Game {
            state,
            black,
            red,
            black_captures: 0,
            red_captures: 0,
            winner: None,
            turns: 0,
        };
        game.winner = game.detect_winner();
        game
    }

    #[inline]
    pub fn current_state(&self) -> &GameState {
        &self.state
    }

    pub fn black_player(&self) -> &dyn Player {
        self.black.as_ref()
    }

    pub fn red_player(&self) -> &dyn Player {
        self.red.as_ref()
    }

    pub fn player(&self, color: Color) -> &dyn Player {
        match color {
            Color::Black => self.black_player(),
            Color::Red => self.red_player(),
        }
    }

    /// The player whose color is to move.
    pub fn current_player(&self) -> &dyn Player {
        self.player(self.state.current_color())
    }

    /// Red pieces captured by Black so far.
    #[inline]
    pub fn black_captures(&self) -> u32 {
        self.black_captures
    }

    /// Black pieces captured by Red so far.
    #[inline]
    pub fn red_captures(&self) -> u32 {
        self.red_captures
    }

    pub fn captures(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.black_captures,
            Color::Red => self.red_captures,
        }
    }

    /// The winning player, or `None` while the match is undecided.
    pub fn winner(&self) -> Option<&dyn Player> {
        self.winner.map(|color| self.player(color))
    }

    #[inline]
    pub fn winner_color(&self) -> Option<Color> {
        self.winner
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Completed turns. A multi-jump chain counts as one turn.
    #[inline]
    pub fn turn_count(&self) -> u32 {
        self.turns
    }

    /// Replaces the current state with `next`, the state chosen by the
    /// player to move.
    ///
    /// Capture counts grow by the number of pieces each side lost between the
    /// two boards. The winner is then re-evaluated: a side with no pieces, or
    /// a side to move with no legal move, loses.
    pub fn advance_turn(&mut self, next: GameState) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let before = self.state.board();
        let after = next.board();
        let lost = |color| before.count(color).saturating_sub(after.count(color)) as u32;
        self.black_captures += lost(Color::Red);
        self.red_captures += lost(Color::Black);

        if next.current_color() != self.state.current_color() {
            self.turns += 1;
        }
        debug!(
            turn = self.turns,
            to_move = %next.current_color(),
            chain = ?next.pending_jump(),
            black_captures = self.black_captures,
            red_captures = self.red_captures,
            "advanced turn"
        );

        self.state = next;
        self.winner = self.detect_winner();
        if let Some(color) = self.winner {
            info!(winner = %color, name = self.player(color).name(), "game over");
        }
        Ok(())
    }

    /// Validates a move for the piece on `from`, lets the current player
    /// confirm it and advances the turn.
    ///
    /// This is the whole request/response cycle for one step of a turn; a
    /// multi-jump chain takes one call per jump.
    pub fn make_move(&mut self, from: Position, to: Position) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let piece = self
            .state
            .board()
            .piece_at(from)?
            .ok_or(GameError::IllegalMove { from, to })?;
        let candidate = self.state.next(piece, from, to)?;
        let chosen = self.current_player().choose_move(candidate);
        self.advance_turn(chosen)
    }

    /// Restores the starting position and clears captures and the winner.
    pub fn reset_game(&mut self) {
        self.state = GameState::new();
        self.black_captures = 0;
        self.red_captures = 0;
        self.winner = None;
        self.turns = 0;
        info!(black = self.black.name(), red = self.red.name(), "game reset");
    }

    fn detect_winner(&self) -> Option<Color> {
        let board = self.state.board();
        for color in Color::ALL {
            if board.count(color) == 0 {
                return Some(color.opposite());
            }
        }
        if !self.state.has_legal_moves() {
            return Some(self.state.current_color().opposite());
        }
        None
    }
}
