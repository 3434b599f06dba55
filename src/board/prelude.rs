//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let board = Board::new();
//! assert_eq!(board.status(), GameStatus::Ongoing);
//! ```

pub use super::{
    Board, BoardBuilder, Color, GameStatus, MoveRecord, NotationError, Piece, PieceKind,
    ShiftError, Square, SquareError, SquareSet, START_NOTATION,
};
