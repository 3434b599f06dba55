//! Rules engine for standard chess without castling, en passant or promotion.
//!
//! See [`board`] for the data model, move generation, legality and move
//! execution, and [`console`] for the line-oriented text session.

pub mod board;
pub mod console;

pub use board::{
    Board, BoardBuilder, Color, GameStatus, MoveRecord, NotationError, Piece, PieceKind, Position,
    ShiftError, Square, SquareError, SquareSet, START_NOTATION,
};
