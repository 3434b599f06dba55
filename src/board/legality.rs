//! Check detection, move-safety simulation and terminal-state detection.

use super::{Board, Color, GameStatus, Position, Square, SquareSet};

impl Position {
    /// True if any piece of the other color can reach `color`'s king.
    ///
    /// A color without a king is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some(king_sq) = self.king_square(color) else {
            return false;
        };
        self.pieces_of(color.opponent())
            .any(|(sq, _)| self.pseudo_legal_moves(sq).contains(king_sq))
    }

    /// True if moving `from` -> `to` leaves the mover's king out of check.
    ///
    /// The move is played on a copy; `self` is never modified.
    #[must_use]
    pub fn is_move_safe(&self, from: Square, to: Square) -> bool {
        let Some(mover) = self.piece_at(from) else {
            return false;
        };
        let mut scratch = *self;
        scratch.play_unchecked(from, to);
        !scratch.is_in_check(mover.color)
    }

    /// Pseudo-legal moves from `from` that keep the mover's king safe.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> SquareSet {
        self.pseudo_legal_moves(from)
            .iter()
            .filter(|&to| self.is_move_safe(from, to))
            .collect()
    }

    /// Every legal `(from, to)` pair for `color`, in square order.
    #[must_use]
    pub fn all_legal_moves(&self, color: Color) -> Vec<(Square, Square)> {
        self.pieces_of(color)
            .flat_map(|(from, _)| self.legal_moves(from).iter().map(move |to| (from, to)))
            .collect()
    }

    /// True if any piece of `color` has at least one legal move.
    #[must_use]
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.pieces_of(color)
            .any(|(from, _)| !self.legal_moves(from).is_empty())
    }

    /// Status of the side to move, scanning all of its pieces.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let side = self.side_to_move;
        let in_check = self.is_in_check(side);
        match (self.has_legal_move(side), in_check) {
            (true, false) => GameStatus::Ongoing,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::CheckMate,
            (false, false) => GameStatus::Draw,
        }
    }
}

impl Board {
    /// See [`Position::is_in_check`].
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.position.is_in_check(color)
    }

    /// See [`Position::is_move_safe`].
    #[must_use]
    pub fn is_move_safe(&self, from: Square, to: Square) -> bool {
        self.position.is_move_safe(from, to)
    }

    /// Legal destinations for the piece on `from`; empty for an empty square.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> SquareSet {
        self.position.legal_moves(from)
    }

    /// See [`Position::all_legal_moves`].
    #[must_use]
    pub fn all_legal_moves(&self, color: Color) -> Vec<(Square, Square)> {
        self.position.all_legal_moves(color)
    }

    /// See [`Position::status`].
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.position.status()
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.status() == GameStatus::CheckMate
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.status() == GameStatus::Draw
    }
}
