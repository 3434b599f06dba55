use std::fmt;

use super::{Board, Square};

impl fmt::Display for Board {
    /// ASCII diagram, rank 8 at the top, followed by side to move and clocks.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for rank in (0..8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..8 {
                let ch = Square::new(file, rank)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', |piece| piece.to_notation_char());
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        writeln!(f, "    a   b   c   d   e   f   g   h")?;
        write!(
            f,
            "{} to move, halfmove {}, fullmove {}",
            self.side_to_move(),
            self.halfmove_clock(),
            self.fullmove_number()
        )
    }
}
