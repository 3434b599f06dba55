use super::{Color, MoveRecord, Piece, PieceKind, Square, SquareSet};

/// Occupancy plus side to move and clocks.
///
/// A `Position` is a plain `Copy` value: copying it yields a fully
/// independent board, which is what the king-safety simulation relies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) squares: [Option<Piece>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Position {
    pub(crate) const fn empty() -> Self {
        Position {
            squares: [None; 64],
            side_to_move: Color::White,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece;
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Every occupied square with its piece, in square order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Pieces of one color with their squares
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Squares occupied by a color
    #[must_use]
    pub fn occupied(&self, color: Color) -> SquareSet {
        self.pieces_of(color).map(|(sq, _)| sq).collect()
    }

    /// Square of the color's king, if it has one
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Move the piece on `from` to `to` and do the turn bookkeeping.
    ///
    /// No legality checks. Returns the displaced piece, if any; an empty
    /// `from` leaves the position as it was. Both clocks saturate at `u32::MAX`.
    pub(crate) fn play_unchecked(&mut self, from: Square, to: Square) -> Option<Piece> {
        let piece = self.piece_at(from)?;
        let captured = self.piece_at(to);
        self.set_piece(from, None);
        self.set_piece(to, Some(piece));

        if piece.kind == PieceKind::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if piece.color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = piece.color.opponent();
        captured
    }
}

/// A game in progress: the current position plus what happened so far.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) position: Position,
    pub(crate) history: Vec<MoveRecord>,
    // captured[c] holds the pieces color c has taken
    pub(crate) captured: [Vec<Piece>; 2],
}

impl Board {
    /// The standard initial position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::from_position(Position::empty());
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, kind) in (0u8..).zip(back_rank) {
            for (color, back, pawns) in [(Color::White, 0, 1), (Color::Black, 7, 6)] {
                if let (Some(back_sq), Some(pawn_sq)) =
                    (Square::new(file, back), Square::new(file, pawns))
                {
                    board.position.set_piece(back_sq, Some(Piece::new(kind, color)));
                    board
                        .position
                        .set_piece(pawn_sq, Some(Piece::new(PieceKind::Pawn, color)));
                }
            }
        }
        board
    }

    pub(crate) fn from_position(position: Position) -> Self {
        Board {
            position,
            history: Vec::new(),
            captured: [Vec::new(), Vec::new()],
        }
    }

    /// Current position (occupancy, side to move, clocks)
    #[inline]
    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.position.piece_at(sq)
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.position.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.position.fullmove_number
    }

    #[must_use]
    pub fn occupied(&self, color: Color) -> SquareSet {
        self.position.occupied(color)
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.position.king_square(color)
    }

    /// Committed moves, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// History as notation tokens (`e4`, `Nf6`, `Bxc6`, ...)
    #[must_use]
    pub fn history_tokens(&self) -> Vec<String> {
        self.history.iter().map(MoveRecord::token).collect()
    }

    /// Pieces taken by `color`, in the order they were captured
    #[inline]
    #[must_use]
    pub fn captured_by(&self, color: Color) -> &[Piece] {
        &self.captured[color.index()]
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
