//! Pseudo-legal move generation.
//!
//! Destinations depend only on the piece's movement pattern and the current
//! occupancy; whether a move exposes the mover's king is the legality
//! module's concern.

mod knights;
mod pawns;
mod sliders;

use super::{Board, PieceKind, Position, Square, SquareSet};

pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];
pub(crate) const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub(crate) const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-1, 0),
    (0, -1),
    (0, 1),
    (1, 0),
];

/// Longest slide on an 8x8 board
pub(crate) const MAX_SLIDE: u8 = 7;

impl Position {
    /// Destinations reachable by the piece on `from`, ignoring king safety.
    ///
    /// Empty for an empty square.
    #[must_use]
    pub fn pseudo_legal_moves(&self, from: Square) -> SquareSet {
        let Some(piece) = self.piece_at(from) else {
            return SquareSet::EMPTY;
        };
        match piece.kind {
            PieceKind::Queen => self.slide(from, piece.color, &ALL_DIRECTIONS, MAX_SLIDE),
            PieceKind::Rook => self.slide(from, piece.color, &ORTHOGONAL, MAX_SLIDE),
            PieceKind::Bishop => self.slide(from, piece.color, &DIAGONAL, MAX_SLIDE),
            PieceKind::King => self.slide(from, piece.color, &ALL_DIRECTIONS, 1),
            PieceKind::Knight => self.knight_moves(from, piece.color),
            PieceKind::Pawn => self.pawn_moves(from, piece.color),
        }
    }
}

impl Board {
    /// See [`Position::pseudo_legal_moves`].
    #[must_use]
    pub fn pseudo_legal_moves(&self, from: Square) -> SquareSet {
        self.position.pseudo_legal_moves(from)
    }
}
