//! Committing moves.

use log::{debug, trace};

use super::error::ShiftError;
use super::{Board, GameStatus, MoveRecord, Square};

impl Board {
    /// Validate and commit the move `from` -> `to`.
    ///
    /// On success returns the status of the side that moves next. On
    /// failure the board is left exactly as it was.
    ///
    /// # Errors
    /// - `NotYourTurn` if `from` is empty or holds the other side's piece
    /// - `CheckMate` / `Draw` if the side to move has no legal move at all
    /// - `InvalidMove` if `to` is not a legal destination for the piece
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::{Board, GameStatus};
    ///
    /// let mut board = Board::new();
    /// let e2 = "E2".parse().unwrap();
    /// let e4 = "E4".parse().unwrap();
    /// assert_eq!(board.shift(e2, e4), Ok(GameStatus::Ongoing));
    /// assert_eq!(board.history_tokens(), vec!["e4"]);
    /// ```
    pub fn shift(&mut self, from: Square, to: Square) -> Result<GameStatus, ShiftError> {
        let side = self.side_to_move();
        let piece = match self.piece_at(from) {
            Some(piece) if piece.color == side => piece,
            _ => {
                trace!("rejected {from}->{to}: {side} has no piece on {from}");
                return Err(ShiftError::NotYourTurn {
                    square: from,
                    side_to_move: side,
                });
            }
        };

        if !self.legal_moves(from).contains(to) {
            let err = match self.status() {
                GameStatus::CheckMate => ShiftError::CheckMate { loser: side },
                GameStatus::Draw => ShiftError::Draw,
                GameStatus::Ongoing | GameStatus::Check => ShiftError::InvalidMove { from, to },
            };
            trace!("rejected {from}->{to}: {err}");
            return Err(err);
        }

        let captured = self.position.play_unchecked(from, to);
        if let Some(taken) = captured {
            self.captured[side.index()].push(taken);
        }
        let record = MoveRecord {
            piece,
            from,
            to,
            captured,
        };
        debug!("{side} played {record} ({from}->{to})");
        self.history.push(record);

        let status = self.status();
        if status.is_terminal() {
            debug!("{} to move: {status}", self.side_to_move());
        }
        Ok(status)
    }

    /// Like [`Board::shift`], taking square labels such as `"e2"`.
    ///
    /// # Errors
    /// `InvalidSquare` for an unparseable label, otherwise as `shift`.
    pub fn shift_labels(&mut self, from: &str, to: &str) -> Result<GameStatus, ShiftError> {
        let from: Square = from.parse()?;
        let to: Square = to.parse()?;
        self.shift(from, to)
    }
}
