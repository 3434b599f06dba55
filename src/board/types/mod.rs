//! Core board types.
//!
//! - `PieceKind`, `Color` and `Piece` - chess pieces
//! - `Square` - an on-board coordinate
//! - `SquareSet` - a set of squares, used for move destinations
//! - `MoveRecord` and `GameStatus` - history entries and game state

mod piece;
mod record;
mod square;
mod square_set;

pub use piece::{Color, Piece, PieceKind};
pub use record::{GameStatus, MoveRecord};
pub use square::Square;
pub use square_set::{SquareSet, SquareSetIter};
