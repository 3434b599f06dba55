//! Error types for board operations.

use std::fmt;

use super::types::{Color, Square};

/// Error type for setup-notation parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Setup string does not have exactly 4 space-separated fields
    WrongFieldCount { found: usize },
    /// Placement field does not have exactly 8 ranks
    WrongRankCount { found: usize },
    /// A rank does not describe exactly 8 squares (rank is 1-8)
    RankWidth { rank: u8, squares: u32 },
    /// Unknown piece letter in the placement field
    InvalidPiece { char: char },
    /// Active color is neither `w` nor `b`
    InvalidSideToMove { found: String },
    /// Halfmove clock is not a non-negative integer
    InvalidHalfmoveClock { found: String },
    /// Fullmove number is not a positive integer
    InvalidFullmoveNumber { found: String },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::WrongFieldCount { found } => {
                write!(f, "Setup must have exactly 4 fields, found {found}")
            }
            NotationError::WrongRankCount { found } => {
                write!(f, "Placement must list 8 ranks, found {found}")
            }
            NotationError::RankWidth { rank, squares } => {
                write!(f, "Rank {rank} describes {squares} squares, expected 8")
            }
            NotationError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in setup")
            }
            NotationError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            NotationError::InvalidHalfmoveClock { found } => {
                write!(f, "Invalid halfmove clock '{found}'")
            }
            NotationError::InvalidFullmoveNumber { found } => {
                write!(f, "Invalid fullmove number '{found}', expected a positive integer")
            }
        }
    }
}

impl std::error::Error for NotationError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: u8 },
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: u8 },
    /// Invalid square label
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for rejected `shift` commands.
///
/// The board is unchanged whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShiftError {
    /// The origin square is empty or holds a piece of the side not to move
    NotYourTurn {
        square: Square,
        side_to_move: Color,
    },
    /// The destination is not a legal move for the piece
    InvalidMove { from: Square, to: Square },
    /// The side to move is checkmated; no move can be made
    CheckMate { loser: Color },
    /// The side to move is stalemated; no move can be made
    Draw,
    /// A square label could not be parsed
    InvalidSquare(SquareError),
}

impl fmt::Display for ShiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftError::NotYourTurn {
                square,
                side_to_move,
            } => {
                write!(
                    f,
                    "Not your turn: {side_to_move} to move and {square} holds no {side_to_move} piece"
                )
            }
            ShiftError::InvalidMove { from, to } => {
                write!(f, "Invalid move {from} -> {to}")
            }
            ShiftError::CheckMate { loser } => {
                write!(f, "{loser} is checkmated")
            }
            ShiftError::Draw => write!(f, "Stalemate: no legal moves available"),
            ShiftError::InvalidSquare(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ShiftError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShiftError::InvalidSquare(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SquareError> for ShiftError {
    fn from(e: SquareError) -> Self {
        ShiftError::InvalidSquare(e)
    }
}
