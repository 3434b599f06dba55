use super::super::{Color, Position, Square, SquareSet};

impl Position {
    pub(crate) fn pawn_moves(&self, from: Square, color: Color) -> SquareSet {
        let mut moves = SquareSet::EMPTY;
        let dir = color.pawn_direction();

        if let Some(forward) = from.offset(0, dir) {
            if self.is_empty(forward) {
                moves.insert(forward);
                // The double step needs both squares free; `forward` is checked above.
                if from.rank() == color.pawn_start_rank() {
                    if let Some(double) = forward.offset(0, dir) {
                        if self.is_empty(double) {
                            moves.insert(double);
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            if let Some(target) = from.offset(df, dir) {
                if self
                    .piece_at(target)
                    .is_some_and(|other| other.color != color)
                {
                    moves.insert(target);
                }
            }
        }

        moves
    }
}
