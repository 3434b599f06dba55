//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than writing setup
//! strings.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceKind};
//!
//! let board = BoardBuilder::new()
//!     .piece("E1", PieceKind::King, Color::White)
//!     .piece("E8", PieceKind::King, Color::Black)
//!     .piece("A2", PieceKind::Pawn, Color::White)
//!     .side_to_move(Color::Black)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.occupied(Color::White).len(), 2);
//! ```

use super::error::SquareError;
use super::{Board, Color, Piece, PieceKind, Position, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(String, Piece)>,
    side_to_move: Color,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Place a piece on the square with the given label, replacing any
    /// piece already there.
    #[must_use]
    pub fn piece(mut self, square: &str, kind: PieceKind, color: Color) -> Self {
        self.pieces.push((square.to_string(), Piece::new(kind, color)));
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set the halfmove clock.
    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    /// Set the fullmove number. Zero is raised to 1.
    #[must_use]
    pub fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number.max(1);
        self
    }

    /// Build the board.
    ///
    /// # Errors
    /// Returns a `SquareError` for the first square label that does not parse.
    pub fn build(self) -> Result<Board, SquareError> {
        let mut position = Position::empty();
        for (label, piece) in &self.pieces {
            let sq: Square = label.parse()?;
            position.set_piece(sq, Some(*piece));
        }
        position.side_to_move = self.side_to_move;
        position.halfmove_clock = self.halfmove_clock;
        position.fullmove_number = self.fullmove_number;
        Ok(Board::from_position(position))
    }
}
