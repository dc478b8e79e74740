//! Board layout notation.
//!
//! A layout lists the eight rows of the board, row 0 first, separated by
//! `/`. Each row has exactly eight characters: `.` for an empty square,
//! `b`/`r` for black and red men, `B`/`R` for kings. An optional second
//! whitespace-separated field names the side to move (`b` or `r`).
//!
//! ```
//! use checkers_core::{Color, LayoutParser};
//!
//! let layout = LayoutParser::parse(LayoutParser::STARTPOS).unwrap();
//! assert_eq!(layout.side_to_move, Some(Color::Black));
//! ```

use crate::{Color, Piece, Position, BOARD_SIZE};
use thiserror::Error;

/// Errors that can occur when parsing a board layout.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid layout: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("invalid layout: row {row} has {len} squares, expected 8")]
    InvalidRowLength { row: usize, len: usize },

    #[error("invalid character '{ch}' in row {row}")]
    InvalidCharacter { row: usize, ch: char },

    #[error("piece on light square {0}")]
    PieceOnLightSquare(Position),

    #[error("invalid side to move: expected 'b' or 'r', got '{0}'")]
    InvalidSideToMove(String),

    #[error("invalid layout: expected at most 2 parts, got {0}")]
    InvalidPartCount(usize),
}

/// Parsed layout data: the grid contents and, if given, the side to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub cells: [[Option<Piece>; 8]; 8],
    pub side_to_move: Option<Color>,
}

/// Layout parser and renderer.
pub struct LayoutParser;

impl LayoutParser {
    /// The standard starting position, Black to move.
    pub const STARTPOS: &'static str =
        ".b.b.b.b/b.b.b.b./.b.b.b.b/......../......../r.r.r.r./.r.r.r.r/r.r.r.r. b";

    /// Parses a layout string.
    pub fn parse(layout: &str) -> Result<Layout, LayoutError> {
        let parts: Vec<&str> = layout.split_whitespace().collect();
        let (placement, side) = match parts.as_slice() {
            [placement] => (*placement, None),
            [placement, side] => (*placement, Some(Self::parse_side(side)?)),
            _ => return Err(LayoutError::InvalidPartCount(parts.len())),
        };

        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(LayoutError::InvalidRowCount(rows.len()));
        }

        let mut cells = [[None; 8]; 8];
        for (row, text) in rows.iter().enumerate() {
            let len = text.chars().count();
            if len != BOARD_SIZE as usize {
                return Err(LayoutError::InvalidRowLength { row, len });
            }
            for (col, ch) in text.chars().enumerate() {
                if ch == '.' {
                    continue;
                }
                let piece =
                    Piece::from_layout_char(ch).ok_or(LayoutError::InvalidCharacter { row, ch })?;
                let pos = Position::new(row as i8, col as i8);
                if !pos.is_playable() {
                    return Err(LayoutError::PieceOnLightSquare(pos));
                }
                cells[row][col] = Some(piece);
            }
        }

        Ok(Layout {
            cells,
            side_to_move: side,
        })
    }

    fn parse_side(side: &str) -> Result<Color, LayoutError> {
        match side {
            "b" => Ok(Color::Black),
            "r" => Ok(Color::Red),
            other => Err(LayoutError::InvalidSideToMove(other.to_string())),
        }
    }

    /// Renders grid contents (and optionally the side to move) as a layout string.
    pub fn render(cells: &[[Option<Piece>; 8]; 8], side_to_move: Option<Color>) -> String {
        let mut out = cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or('.', Piece::to_layout_char))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("/");
        if let Some(color) = side_to_move {
            out.push(' ');
            out.push(match color {
                Color::Black => 'b',
                Color::Red => 'r',
            });
        }
        out
    }
}
