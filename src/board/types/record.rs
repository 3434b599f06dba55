//! Move records and game status.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceKind};
use super::square::Square;

/// A committed move as kept in the board's history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
}

impl MoveRecord {
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// History token: piece letter (none for pawns), `x` on capture, then
    /// the destination in lowercase, e.g. `Nf3`, `Bxc6`, `e4`, `xd5`.
    #[must_use]
    pub fn token(&self) -> String {
        let mut token = String::with_capacity(4);
        if self.piece.kind != PieceKind::Pawn {
            token.push(self.piece.kind.to_char());
        }
        if self.is_capture() {
            token.push('x');
        }
        token.push_str(&self.to.to_lowercase_label());
        token
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}

/// State of the game for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// Legal moves exist and the side to move is not in check
    Ongoing,
    /// Legal moves exist and the side to move is in check
    Check,
    /// No legal moves while in check
    CheckMate,
    /// No legal moves while not in check (stalemate)
    Draw,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::CheckMate | GameStatus::Draw)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Check => write!(f, "check"),
            GameStatus::CheckMate => write!(f, "checkmate"),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}
