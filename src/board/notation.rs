//! Setup notation: `<placement> <w|b> <halfmove clock> <fullmove number>`.

use std::str::FromStr;

use log::{trace, warn};

use super::error::NotationError;
use super::{Board, Color, Piece, Position, Square};

/// Setup string for the standard initial position.
pub const START_NOTATION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w 0 1";

impl Board {
    /// Parse a board from setup notation.
    ///
    /// The result has empty history and no captured pieces.
    ///
    /// # Errors
    /// Returns a `NotationError` describing the first malformed field.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::{Board, Color};
    ///
    /// let board = Board::from_notation("4k3/8/8/8/8/8/8/4K3 b 3 12").unwrap();
    /// assert_eq!(board.side_to_move(), Color::Black);
    /// assert_eq!(board.fullmove_number(), 12);
    /// ```
    pub fn from_notation(setup: &str) -> Result<Self, NotationError> {
        let fields: Vec<&str> = setup.split(' ').collect();
        let &[placement, active, halfmove, fullmove] = fields.as_slice() else {
            return Err(NotationError::WrongFieldCount {
                found: fields.len(),
            });
        };

        let mut position = Position::empty();
        parse_placement(placement, &mut position)?;

        position.side_to_move = match active {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(NotationError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        position.halfmove_clock = halfmove
            .parse()
            .map_err(|_| NotationError::InvalidHalfmoveClock {
                found: halfmove.to_string(),
            })?;

        position.fullmove_number = match fullmove.parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => {
                return Err(NotationError::InvalidFullmoveNumber {
                    found: fullmove.to_string(),
                })
            }
        };

        for color in Color::BOTH {
            if position.king_square(color).is_none() {
                warn!("setup has no {color} king: {setup}");
            }
        }
        trace!("loaded setup {setup}");
        Ok(Board::from_position(position))
    }

    /// Replace this board's state with the parsed setup.
    ///
    /// History and captures are discarded. On error the board is unchanged.
    ///
    /// # Errors
    /// Returns a `NotationError` if `setup` is malformed.
    pub fn reset(&mut self, setup: &str) -> Result<(), NotationError> {
        *self = Board::from_notation(setup)?;
        Ok(())
    }

    /// Serialize the current position to setup notation.
    #[must_use]
    pub fn to_notation(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                let piece = Square::new(file, rank).and_then(|sq| self.piece_at(sq));
                if let Some(piece) = piece {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_notation_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        format!(
            "{} {} {} {}",
            rows.join("/"),
            self.side_to_move().notation_token(),
            self.halfmove_clock(),
            self.fullmove_number()
        )
    }
}

fn parse_placement(placement: &str, position: &mut Position) -> Result<(), NotationError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(NotationError::WrongRankCount { found: ranks.len() });
    }

    for (row, rank_str) in (0u8..).zip(ranks) {
        let rank = 7 - row;
        let mut squares: u32 = 0;
        for c in rank_str.chars() {
            if let Some(run) = c.to_digit(10).filter(|&n| n > 0) {
                squares = squares.saturating_add(run);
                continue;
            }
            let piece =
                Piece::from_notation_char(c).ok_or(NotationError::InvalidPiece { char: c })?;
            // Pieces past the eighth file are reported as a width error below.
            let file = u8::try_from(squares).ok();
            if let Some(sq) = file.and_then(|file| Square::new(file, rank)) {
                position.set_piece(sq, Some(piece));
            }
            squares += 1;
        }
        if squares != 8 {
            return Err(NotationError::RankWidth {
                rank: rank + 1,
                squares,
            });
        }
    }
    Ok(())
}

impl FromStr for Board {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_notation(s)
    }
}
