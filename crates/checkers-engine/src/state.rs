//! Immutable game snapshots and the single-move transition.

use std::collections::BTreeSet;

use checkers_core::{Color, LayoutParser, Move, Piece, Position};
use tracing::trace;

use crate::{Board, GameError};

/// A board together with the side to move.
///
/// When a jump leaves the jumping piece with another capture, the successor
/// state keeps the same side to move and records the piece in
/// [`pending_jump`](Self::pending_jump). Until the chain ends, only that
/// piece may move, and only by jumping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    current_color: Color,
    pending_jump: Option<Position>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// The standard starting position with Black to move.
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Color::Black)
    }

    /// Wraps an arbitrary board, with no jump chain in progress.
    pub fn from_board(board: Board, current_color: Color) -> Self {
        GameState {
            board,
            current_color,
            pending_jump: None,
        }
    }

    /// Creates a state from layout notation. The side to move defaults to
    /// Black when the layout does not name one.
    pub fn from_layout(layout: &str) -> Result<Self, GameError> {
        let parsed = LayoutParser::parse(layout)?;
        Ok(Self::from_board(
            Board::from_cells(&parsed.cells),
            parsed.side_to_move.unwrap_or(Color::Black),
        ))
    }

    /// Renders the state in layout notation, including the side to move.
    pub fn to_layout(&self) -> String {
        LayoutParser::render(&self.board.cells(), Some(self.current_color))
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_color(&self) -> Color {
        self.current_color
    }

    /// The piece that must keep jumping, if a chain is in progress.
    #[inline]
    pub fn pending_jump(&self) -> Option<Position> {
        self.pending_jump
    }

    #[inline]
    pub fn is_continuation(&self) -> bool {
        self.pending_jump.is_some()
    }

    /// Destinations the piece at `pos` may move to in this state.
    ///
    /// Empty for pieces of the side not to move, and for every piece but the
    /// chain piece while a jump chain is in progress.
    pub fn available_moves(&self, pos: Position) -> Result<BTreeSet<Position>, GameError> {
        let piece = self.board.piece_at(pos)?;
        if piece.map(|p| p.color) != Some(self.current_color) {
            return Ok(BTreeSet::new());
        }
        match self.pending_jump {
            Some(chain) if chain != pos => Ok(BTreeSet::new()),
            Some(_) => self.board.jumps_from(pos),
            None => self.board.available_moves(pos),
        }
    }

    /// Every legal move for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        match self.pending_jump {
            Some(chain) => self
                .board
                .jumps_from(chain)
                .unwrap_or_default()
                .into_iter()
                .map(|to| Move::new(chain, to))
                .collect(),
            None => self.board.legal_moves(self.current_color),
        }
    }

    /// Returns true if the side to move can move at all.
    pub fn has_legal_moves(&self) -> bool {
        match self.pending_jump {
            Some(_) => true,
            None => self.board.has_any_move(self.current_color),
        }
    }

    /// Every legal move paired with the state it leads to.
    ///
    /// The engine enumerates; choosing among the candidates is up to the
    /// [`Player`](crate::Player).
    pub fn successors(&self) -> Vec<(Move, GameState)> {
        self.legal_moves()
            .into_iter()
            .filter_map(|m| {
                let piece = self.board.piece_at(m.from).ok().flatten()?;
                self.next(piece, m.from, m.to).ok().map(|state| (m, state))
            })
            .collect()
    }

    /// Validates and applies one step or jump, returning the successor state.
    ///
    /// Checks run in this order: both positions on the board
    /// ([`GameError::OutOfBounds`]), the piece belongs to the side to move
    /// ([`GameError::NotCurrentColor`]), a pending jump chain is continued by
    /// its piece ([`GameError::MustContinueCapture`]), and the destination is
    /// legal ([`GameError::IllegalMove`]). On error `self` is unchanged, as
    /// it is on success.
    pub fn next(&self, piece: Piece, from: Position, to: Position) -> Result<GameState, GameError> {
        for pos in [from, to] {
            if !pos.is_on_board() {
                return Err(GameError::OutOfBounds(pos));
            }
        }
        if piece.color != self.current_color {
            return Err(GameError::NotCurrentColor {
                expected: self.current_color,
                attempted: piece.color,
            });
        }
        if let Some(chain) = self.pending_jump {
            if from != chain {
                return Err(GameError::MustContinueCapture(chain));
            }
        }
        if !self.available_moves(from)?.contains(&to) {
            return Err(GameError::IllegalMove { from, to });
        }

        let board = self.board.apply_move(piece, from, to)?;
        let mov = Move::new(from, to);
        let chain_continues = mov.is_jump() && !board.jumps_from(to)?.is_empty();

        let (current_color, pending_jump) = if chain_continues {
            (self.current_color, Some(to))
        } else {
            (self.current_color.opposite(), None)
        };
        trace!(%mov, color = %self.current_color, chain_continues, "applied move");

        Ok(GameState {
            board,
            current_color,
            pending_jump,
        })
    }
}
