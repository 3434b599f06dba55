//! Chess board representation and rules.
//!
//! A `Board` is loaded from setup notation (or built piece by piece), asked
//! for legal destinations, and advanced one move at a time with `shift`.
//! Castling, en passant and promotion are not part of these rules.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color};
//!
//! let board = Board::new();
//! let b1 = "B1".parse().unwrap();
//! let moves = board.legal_moves(b1);
//! assert_eq!(moves.to_string(), "A3 C3");
//! assert_eq!(board.side_to_move(), Color::White);
//! ```

mod builder;
mod display;
mod error;
mod legality;
mod movegen;
mod notation;
pub mod prelude;
mod shift;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{NotationError, ShiftError, SquareError};
pub use notation::START_NOTATION;
pub use state::{Board, Position};
pub use types::{Color, GameStatus, MoveRecord, Piece, PieceKind, Square, SquareSet, SquareSetIter};
