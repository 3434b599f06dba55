use once_cell::sync::Lazy;

use super::super::{Color, Position, Square, SquareSet};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// On-board knight targets for every square, indexed by `Square::index`.
static KNIGHT_TARGETS: Lazy<[SquareSet; 64]> = Lazy::new(|| {
    let mut targets = [SquareSet::EMPTY; 64];
    for from in Square::all() {
        targets[from.index()] = KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(df, dr)| from.offset(df, dr))
            .collect();
    }
    targets
});

impl Position {
    pub(crate) fn knight_moves(&self, from: Square, color: Color) -> SquareSet {
        KNIGHT_TARGETS[from.index()]
            .iter()
            .filter(|&to| self.piece_at(to).map_or(true, |other| other.color != color))
            .collect()
    }
}
