use super::super::{Color, Position, Square, SquareSet};

impl Position {
    /// Walk each direction up to `max_distance` steps.
    ///
    /// Empty squares are added and the walk continues; an enemy piece is
    /// added and ends the walk; a friendly piece ends it without being added.
    pub(crate) fn slide(
        &self,
        from: Square,
        color: Color,
        directions: &[(i8, i8)],
        max_distance: u8,
    ) -> SquareSet {
        let mut targets = SquareSet::EMPTY;
        for &(df, dr) in directions {
            let mut current = from;
            for _ in 0..max_distance {
                let Some(next) = current.offset(df, dr) else {
                    break;
                };
                match self.piece_at(next) {
                    None => targets.insert(next),
                    Some(other) if other.color != color => {
                        targets.insert(next);
                        break;
                    }
                    Some(_) => break,
                }
                current = next;
            }
        }
        targets
    }
}
