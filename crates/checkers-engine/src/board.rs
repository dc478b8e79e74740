//! The 8x8 grid and the spatial rules of checkers.
//!
//! [`Board`] answers where a piece may go and applies a single step or jump.
//! Turn ownership, including multi-jump continuation, lives in
//! [`GameState`](crate::GameState).

use std::collections::BTreeSet;
use std::fmt;

use checkers_core::{Color, LayoutParser, Move, Piece, Position, BOARD_SIZE};

use crate::GameError;

/// One cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    position: Position,
    piece: Option<Piece>,
}

impl Square {
    #[inline]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub const fn piece(&self) -> Option<Piece> {
        self.piece
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.piece.is_none()
    }
}

/// An 8x8 checkers board.
///
/// Pieces only ever stand on the 32 dark squares (see
/// [`Position::is_playable`]). Boards are values: [`Board::apply_move`]
/// returns a new board and leaves the receiver untouched.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[Square; 8]; 8],
}

impl Board {
    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        let mut grid = [[Square {
            position: Position::new(0, 0),
            piece: None,
        }; 8]; 8];
        for pos in Position::all() {
            grid[pos.row as usize][pos.col as usize].position = pos;
        }
        Board { grid }
    }

    /// Creates the standard starting position: twelve men per side on the
    /// dark squares of the three rows nearest each player.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for pos in Position::all().filter(|p| p.is_playable()) {
            let piece = match pos.row {
                0..=2 => Some(Piece::man(Color::Black)),
                5..=7 => Some(Piece::man(Color::Red)),
                _ => None,
            };
            board.set(pos, piece);
        }
        board
    }

    /// Creates a board from layout notation (see [`LayoutParser`]). Any
    /// side-to-move field is ignored.
    pub fn from_layout(layout: &str) -> Result<Self, GameError> {
        let parsed = LayoutParser::parse(layout)?;
        Ok(Self::from_cells(&parsed.cells))
    }

    pub(crate) fn from_cells(cells: &[[Option<Piece>; 8]; 8]) -> Self {
        let mut board = Board::empty();
        for pos in Position::all() {
            board.set(pos, cells[pos.row as usize][pos.col as usize]);
        }
        board
    }

    /// Renders the board in layout notation, without a side to move.
    pub fn to_layout(&self) -> String {
        LayoutParser::render(&self.cells(), None)
    }

    pub(crate) fn cells(&self) -> [[Option<Piece>; 8]; 8] {
        self.grid.map(|row| row.map(|square| square.piece))
    }

    /// Read-only view of the grid for rendering.
    #[inline]
    pub fn grid(&self) -> &[[Square; 8]; 8] {
        &self.grid
    }

    /// Returns the piece at `pos`, if any.
    pub fn piece_at(&self, pos: Position) -> Result<Option<Piece>, GameError> {
        let (row, col) = pos.indices().ok_or(GameError::OutOfBounds(pos))?;
        Ok(self.grid[row][col].piece)
    }

    /// Like [`piece_at`](Self::piece_at) but treats off-board as empty.
    #[inline]
    fn get(&self, pos: Position) -> Option<Piece> {
        pos.indices().and_then(|(row, col)| self.grid[row][col].piece)
    }

    fn set(&mut self, pos: Position, piece: Option<Piece>) {
        if let Some((row, col)) = pos.indices() {
            debug_assert!(piece.is_none() || pos.is_playable());
            self.grid[row][col].piece = piece;
        }
    }

    /// Iterates over the pieces of `color` with their positions.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.grid
            .iter()
            .flatten()
            .filter_map(|square| square.piece.map(|piece| (square.position, piece)))
            .filter(move |(_, piece)| piece.color == color)
    }

    /// Number of pieces of `color` on the board.
    pub fn count(&self, color: Color) -> usize {
        self.pieces(color).count()
    }

    fn raw_jumps(&self, from: Position, piece: Piece) -> impl Iterator<Item = Position> + '_ {
        piece
            .jump_directions()
            .iter()
            .filter_map(move |&(d_row, d_col)| {
                let over = from.offset(d_row, d_col);
                let landing = from.offset(2 * d_row, 2 * d_col);
                let captures = self.get(over).is_some_and(|p| p.color != piece.color);
                (captures && landing.is_on_board() && self.get(landing).is_none())
                    .then_some(landing)
            })
    }

    fn raw_steps(&self, from: Position, piece: Piece) -> impl Iterator<Item = Position> + '_ {
        piece
            .step_directions()
            .iter()
            .map(move |&(d_row, d_col)| from.offset(d_row, d_col))
            .filter(move |to| to.is_on_board() && self.get(*to).is_none())
    }

    /// Capture landings for the piece at `pos`, ignoring what other pieces
    /// of its color could do. Empty if the square is empty.
    pub fn jumps_from(&self, pos: Position) -> Result<BTreeSet<Position>, GameError> {
        Ok(match self.piece_at(pos)? {
            Some(piece) => self.raw_jumps(pos, piece).collect(),
            None => BTreeSet::new(),
        })
    }

    /// Returns true if any piece of `color` can capture.
    pub fn has_capture(&self, color: Color) -> bool {
        self.pieces(color)
            .any(|(pos, piece)| self.raw_jumps(pos, piece).next().is_some())
    }

    /// Destinations the piece at `pos` may move to this turn.
    ///
    /// Captures are mandatory board-wide: while any piece of the same color
    /// can capture, only capture landings are returned, and pieces that
    /// cannot capture get the empty set.
    pub fn available_moves(&self, pos: Position) -> Result<BTreeSet<Position>, GameError> {
        let Some(piece) = self.piece_at(pos)? else {
            return Ok(BTreeSet::new());
        };
        if self.has_capture(piece.color) {
            Ok(self.raw_jumps(pos, piece).collect())
        } else {
            Ok(self.raw_steps(pos, piece).collect())
        }
    }

    /// Every legal step or jump for `color`, in row-major order of origin.
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        let must_capture = self.has_capture(color);
        self.pieces(color)
            .flat_map(|(from, piece)| {
                let targets: Vec<Position> = if must_capture {
                    self.raw_jumps(from, piece).collect()
                } else {
                    self.raw_steps(from, piece).collect()
                };
                targets.into_iter().map(move |to| Move::new(from, to))
            })
            .collect()
    }

    /// Returns true if `color` has at least one legal move.
    pub fn has_any_move(&self, color: Color) -> bool {
        self.pieces(color).any(|(pos, piece)| {
            self.raw_jumps(pos, piece).next().is_some() || self.raw_steps(pos, piece).next().is_some()
        })
    }

    /// Moves `piece` from `from` to `to`, returning the resulting board.
    ///
    /// A jump removes the jumped piece. A man reaching the far row is
    /// crowned.
    ///
    /// # Errors
    ///
    /// [`GameError::OutOfBounds`] if either position is off the board, and
    /// [`GameError::IllegalMove`] if `piece` is not on `from` or `to` is not
    /// in [`available_moves`](Self::available_moves) for `from`.
    pub fn apply_move(&self, piece: Piece, from: Position, to: Position) -> Result<Board, GameError> {
        let illegal = GameError::IllegalMove { from, to };
        if !to.is_on_board() {
            return Err(GameError::OutOfBounds(to));
        }
        if self.piece_at(from)? != Some(piece) {
            return Err(illegal);
        }
        if !self.available_moves(from)?.contains(&to) {
            return Err(illegal);
        }

        let mut next = self.clone();
        next.set(from, None);
        if let Some(captured) = Move::new(from, to).jumped() {
            next.set(captured, None);
        }
        let landed = if to.row == piece.color.promotion_row() {
            piece.promoted()
        } else {
            piece
        };
        next.set(to, Some(landed));
        Ok(next)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_layout())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {}", col)?;
        }
        writeln!(f)?;
        for (row, squares) in self.grid.iter().enumerate() {
            write!(f, "{} ", row)?;
            for square in squares {
                let c = square.piece.map_or('.', Piece::to_layout_char);
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: i8, col: i8) -> Position {
        Position::new(row, col)
    }

    fn set(positions: &[(i8, i8)]) -> BTreeSet<Position> {
        positions.iter().map(|&(r, c)| pos(r, c)).collect()
    }

    #[test]
    fn standard_setup() {
        let board = Board::standard();
        assert_eq!(board.count(Color::Black), 12);
        assert_eq!(board.count(Color::Red), 12);
        assert_eq!(board.piece_at(pos(0, 1)), Ok(Some(Piece::man(Color::Black))));
        assert_eq!(board.piece_at(pos(7, 0)), Ok(Some(Piece::man(Color::Red))));
        assert_eq!(board.piece_at(pos(3, 2)), Ok(None));
        assert!(board
            .grid()
            .iter()
            .flatten()
            .all(|sq| sq.is_empty() || sq.position().is_playable()));
    }

    #[test]
    fn grid_squares_know_their_position() {
        let board = Board::standard();
        assert_eq!(board.grid()[2][1].position(), pos(2, 1));
        assert_eq!(board.grid()[2][1].piece(), Some(Piece::man(Color::Black)));
    }

    #[test]
    fn out_of_bounds() {
        let board = Board::standard();
        assert_eq!(board.piece_at(pos(8, 1)), Err(GameError::OutOfBounds(pos(8, 1))));
        assert_eq!(
            board.available_moves(pos(-1, 0)),
            Err(GameError::OutOfBounds(pos(-1, 0)))
        );
        let man = Piece::man(Color::Black);
        assert_eq!(
            board.apply_move(man, pos(2, 1), pos(3, -1)),
            Err(GameError::OutOfBounds(pos(3, -1)))
        );
    }

    #[test]
    fn opening_moves() {
        let board = Board::standard();
        assert_eq!(board.available_moves(pos(2, 1)), Ok(set(&[(3, 0), (3, 2)])));
        assert_eq!(board.available_moves(pos(2, 7)), Ok(set(&[(3, 6)])));
        assert_eq!(board.available_moves(pos(1, 0)), Ok(BTreeSet::new()));
        assert_eq!(board.available_moves(pos(5, 0)), Ok(set(&[(4, 1)])));
        assert_eq!(board.available_moves(pos(4, 4)), Ok(BTreeSet::new()));
        assert_eq!(board.legal_moves(Color::Black).len(), 7);
        assert_eq!(board.legal_moves(Color::Red).len(), 7);
    }

    #[test]
    fn man_cannot_step_backward_but_king_can() {
        let board = Board::from_layout(
            "......../......../......../..b...../......../....R.../......../........",
        )
        .unwrap();
        assert_eq!(board.available_moves(pos(3, 2)), Ok(set(&[(4, 1), (4, 3)])));
        assert_eq!(
            board.available_moves(pos(5, 4)),
            Ok(set(&[(4, 3), (4, 5), (6, 3), (6, 5)]))
        );
    }

    #[test]
    fn man_captures_backward() {
        let board = Board::from_layout(
            "......../......../......../..r...../...b..../......../......../........",
        )
        .unwrap();
        assert_eq!(board.available_moves(pos(4, 3)), Ok(set(&[(2, 1)])));
    }

    #[test]
    fn capture_is_mandatory_board_wide() {
        let board = Board::from_layout(
            ".b....../......../.b....../..r...../......../......../......../........",
        )
        .unwrap();
        assert!(board.has_capture(Color::Black));
        assert_eq!(board.available_moves(pos(2, 1)), Ok(set(&[(4, 3)])));
        assert_eq!(board.available_moves(pos(0, 1)), Ok(BTreeSet::new()));
        assert_eq!(
            board.legal_moves(Color::Black),
            vec![Move::new(pos(2, 1), pos(4, 3))]
        );
    }

    #[test]
    fn blocked_landing_is_not_a_capture() {
        let board = Board::from_layout(
            "......../......../.b....../..r...../...r..../......../......../........",
        )
        .unwrap();
        assert!(!board.has_capture(Color::Black));
        assert_eq!(board.available_moves(pos(2, 1)), Ok(set(&[(3, 0)])));
    }

    #[test]
    fn apply_jump_removes_captured_piece() {
        let board = Board::from_layout(
            "......../......../.b....../..r...../......../......../......../........",
        )
        .unwrap();
        let man = Piece::man(Color::Black);
        let next = board.apply_move(man, pos(2, 1), pos(4, 3)).unwrap();
        assert_eq!(next.piece_at(pos(2, 1)), Ok(None));
        assert_eq!(next.piece_at(pos(3, 2)), Ok(None));
        assert_eq!(next.piece_at(pos(4, 3)), Ok(Some(man)));
        assert_eq!(next.count(Color::Red), 0);
        // receiver untouched
        assert_eq!(board.count(Color::Red), 1);
    }

    #[test]
    fn apply_move_promotes_on_far_row() {
        let board = Board::from_layout(
            "......../..r...../......../......../......../......../.b....../........",
        )
        .unwrap();
        let next = board
            .apply_move(Piece::man(Color::Black), pos(6, 1), pos(7, 0))
            .unwrap();
        assert_eq!(next.piece_at(pos(7, 0)), Ok(Some(Piece::king(Color::Black))));
        let next = next
            .apply_move(Piece::man(Color::Red), pos(1, 2), pos(0, 3))
            .unwrap();
        assert_eq!(next.piece_at(pos(0, 3)), Ok(Some(Piece::king(Color::Red))));
    }

    #[test]
    fn apply_move_rejects_illegal_destinations() {
        let board = Board::standard();
        let man = Piece::man(Color::Black);
        let illegal = |from, to| Err(GameError::IllegalMove { from, to });
        // occupied
        assert_eq!(board.apply_move(man, pos(1, 0), pos(2, 1)), illegal(pos(1, 0), pos(2, 1)));
        // two squares without a capture
        assert_eq!(board.apply_move(man, pos(2, 1), pos(4, 3)), illegal(pos(2, 1), pos(4, 3)));
        // wrong piece on the source square
        assert_eq!(
            board.apply_move(Piece::king(Color::Black), pos(2, 1), pos(3, 2)),
            illegal(pos(2, 1), pos(3, 2))
        );
        // empty source
        assert_eq!(board.apply_move(man, pos(3, 2), pos(4, 3)), illegal(pos(3, 2), pos(4, 3)));
    }

    #[test]
    fn has_any_move() {
        let board = Board::from_layout(
            "......../......../......../......../......../......../.b....../r.r.....",
        )
        .unwrap();
        // both forward squares are taken and jumping them would leave the board
        assert!(!board.has_any_move(Color::Black));
        assert!(board.has_any_move(Color::Red));
    }

    #[test]
    fn layout_roundtrip() {
        let board = Board::standard();
        assert_eq!(Board::from_layout(&board.to_layout()), Ok(board));
    }

    #[test]
    fn display_draws_indices() {
        let text = Board::standard().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "   0 1 2 3 4 5 6 7");
        assert_eq!(lines[1], "0  . b . b . b . b");
        assert_eq!(lines[8], "7  r . r . r . r .");
    }
}
