//! Click-driven play on top of a [`Game`].
//!
//! The session keeps the selection state: the first click on a piece of the
//! side to move selects it, the next click tries to move it there. Nothing
//! here decides legality; every move goes through
//! [`GameState::next`](checkers_engine::GameState::next).

use std::collections::BTreeSet;
use std::fmt::Write;

use checkers_core::{Color, Move, Piece, Position, BOARD_SIZE};
use checkers_engine::{Game, GameError, Human};
use tracing::{debug, warn};

/// What a click did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing to select there, or the player to move is not human.
    Ignored,
    /// A piece was selected; `moves` are its legal destinations.
    Selected {
        at: Position,
        moves: BTreeSet<Position>,
    },
    /// The selected piece moved. `chain` is true when it must jump again.
    Moved { mov: Move, chain: bool },
}

#[derive(Debug)]
pub struct Session {
    game: Game,
    black_name: String,
    red_name: String,
    selected: Option<Position>,
}

impl Session {
    pub fn new(black_name: &str, red_name: &str) -> Self {
        Session {
            game: Self::fresh_game(black_name, red_name),
            black_name: black_name.to_string(),
            red_name: red_name.to_string(),
            selected: None,
        }
    }

    fn fresh_game(black_name: &str, red_name: &str) -> Game {
        Game::new(
            Box::new(Human::new(black_name)),
            Box::new(Human::new(red_name)),
        )
    }

    #[inline]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[inline]
    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    /// Destinations of the selected piece.
    pub fn highlights(&self) -> BTreeSet<Position> {
        self.selected
            .and_then(|pos| self.game.current_state().available_moves(pos).ok())
            .unwrap_or_default()
    }

    /// Starts a new match with fresh players.
    pub fn new_game(&mut self) {
        self.game = Self::fresh_game(&self.black_name, &self.red_name);
        self.selected = None;
    }

    /// Resets the current match to the opening position.
    pub fn restart(&mut self) {
        self.game.reset_game();
        self.selected = None;
    }

    /// Handles a click on the cell at (`row`, `col`).
    pub fn click(&mut self, row: i8, col: i8) -> Result<ClickOutcome, GameError> {
        if self.game.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.game.current_player().is_human() {
            return Ok(ClickOutcome::Ignored);
        }
        let clicked = Position::new(row, col);
        let state = self.game.current_state();
        let occupant = state.board().piece_at(clicked)?;

        let Some(from) = self.selected else {
            return Ok(match occupant {
                Some(piece) if piece.color == state.current_color() => {
                    let moves = state.available_moves(clicked)?;
                    debug!(at = %clicked, ?moves, "selected piece");
                    self.selected = Some(clicked);
                    ClickOutcome::Selected { at: clicked, moves }
                }
                _ => ClickOutcome::Ignored,
            });
        };

        let piece = state
            .board()
            .piece_at(from)?
            .ok_or(GameError::IllegalMove { from, to: clicked })?;
        let candidate = match state.next(piece, from, clicked) {
            Ok(candidate) => candidate,
            Err(err) => {
                warn!(%err, "move rejected");
                // A chain piece stays selected: nothing else may move.
                self.selected = state.pending_jump();
                return Err(err);
            }
        };
        let chosen = self.game.current_player().choose_move(candidate);
        self.game.advance_turn(chosen)?;

        let chain = self.game.current_state().pending_jump();
        self.selected = chain;
        Ok(ClickOutcome::Moved {
            mov: Move::new(from, clicked),
            chain: chain.is_some(),
        })
    }

    /// Draws the board, scores and status line.
    pub fn render(&self) -> String {
        let state = self.game.current_state();
        let highlights = self.highlights();
        let mut out = String::new();

        for color in Color::ALL {
            let _ = writeln!(
                out,
                "{} ({}): {} captured",
                self.game.player(color).name(),
                color,
                self.game.captures(color)
            );
        }

        out.push_str("\n  ");
        for col in 0..BOARD_SIZE {
            let _ = write!(out, " {}", col);
        }
        out.push('\n');
        for (row, squares) in state.board().grid().iter().enumerate() {
            let _ = write!(out, "{} ", row);
            for square in squares {
                let pos = square.position();
                let c = if Some(pos) == self.selected {
                    '*'
                } else if highlights.contains(&pos) {
                    '+'
                } else {
                    square.piece().map_or('.', Piece::to_layout_char)
                };
                let _ = write!(out, " {}", c);
            }
            out.push('\n');
        }
        out.push('\n');

        match self.game.winner() {
            Some(player) => {
                let _ = write!(out, "{} wins!", player.name());
            }
            None => {
                let player = self.game.current_player();
                let _ = write!(out, "{} ({}) to move", player.name(), state.current_color());
                if state.is_continuation() {
                    out.push_str(", continue jumping");
                }
            }
        }
        out
    }
}
