//! Move execution tests: turn order, clocks, history and rejections.

use super::sq;
use crate::board::{
    Board, Color, GameStatus, Piece, PieceKind, ShiftError, SquareError,
};

fn play(board: &mut Board, moves: &[(&str, &str)]) {
    for &(from, to) in moves {
        board
            .shift_labels(from, to)
            .unwrap_or_else(|e| panic!("{from}->{to} rejected: {e}"));
    }
}

#[test]
fn test_shift_moves_piece_and_flips_turn() {
    let mut board = Board::new();
    let status = board.shift(sq("G1"), sq("F3")).unwrap();
    assert_eq!(status, GameStatus::Ongoing);
    assert_eq!(board.piece_at(sq("G1")), None);
    assert_eq!(
        board.piece_at(sq("F3")),
        Some(Piece::new(PieceKind::Knight, Color::White))
    );
    assert_eq!(board.side_to_move(), Color::Black);
}

#[test]
fn test_quiet_moves_count_halfmoves() {
    let mut board = Board::new();
    play(&mut board, &[("G1", "F3"), ("G8", "F6")]);
    assert_eq!(board.halfmove_clock(), 2);
    assert_eq!(board.fullmove_number(), 2);
}

#[test]
fn test_fullmove_increments_after_black_only() {
    let mut board = Board::new();
    board.shift_labels("e2", "e4").unwrap();
    assert_eq!(board.fullmove_number(), 1);
    board.shift_labels("e7", "e5").unwrap();
    assert_eq!(board.fullmove_number(), 2);
    board.shift_labels("g1", "f3").unwrap();
    assert_eq!(board.fullmove_number(), 2);
}

#[test]
fn test_pawn_move_resets_halfmove_clock() {
    let mut board = Board::from_notation("4k3/8/8/8/8/8/4P3/4K3 w 37 20").unwrap();
    board.shift_labels("e2", "e4").unwrap();
    assert_eq!(board.halfmove_clock(), 0);
}

#[test]
fn test_capture_resets_halfmove_clock_and_is_recorded() {
    let mut board = Board::from_notation("4k3/8/8/3p4/8/8/8/3RK3 w 12 30").unwrap();
    board.shift_labels("d1", "d5").unwrap();
    assert_eq!(board.halfmove_clock(), 0);
    assert_eq!(
        board.captured_by(Color::White),
        &[Piece::new(PieceKind::Pawn, Color::Black)]
    );
    assert!(board.captured_by(Color::Black).is_empty());
    assert_eq!(board.history_tokens(), vec!["Rxd5"]);
    assert!(board.history()[0].is_capture());
}

#[test]
fn test_quiet_non_pawn_move_increments_clock() {
    let mut board = Board::from_notation("4k3/8/8/8/8/8/8/3RK3 w 12 30").unwrap();
    board.shift_labels("d1", "d5").unwrap();
    assert_eq!(board.halfmove_clock(), 13);
}

#[test]
fn test_history_tokens() {
    let mut board = Board::new();
    play(
        &mut board,
        &[("E2", "E4"), ("D7", "D5"), ("E4", "D5"), ("D8", "D5"), ("B1", "C3")],
    );
    assert_eq!(
        board.history_tokens(),
        vec!["e4", "d5", "xd5", "Qxd5", "Nc3"]
    );
    let last = board.history().last().unwrap();
    assert_eq!(last.from, sq("B1"));
    assert_eq!(last.to, sq("C3"));
    assert_eq!(last.piece, Piece::new(PieceKind::Knight, Color::White));
}

#[test]
fn test_wrong_side_is_not_your_turn() {
    let mut board = Board::new();
    let before = board.clone();
    let result = board.shift(sq("E7"), sq("E5"));
    assert_eq!(
        result,
        Err(ShiftError::NotYourTurn {
            square: sq("E7"),
            side_to_move: Color::White
        })
    );
    assert_eq!(board, before);
}

#[test]
fn test_empty_origin_is_not_your_turn() {
    let mut board = Board::new();
    let before = board.clone();
    assert!(matches!(
        board.shift(sq("E4"), sq("E5")),
        Err(ShiftError::NotYourTurn { .. })
    ));
    assert_eq!(board, before);
}

#[test]
fn test_invalid_move_is_idempotent() {
    let mut board = Board::new();
    board.shift_labels("e2", "e4").unwrap();
    let before = board.clone();

    let first = board.shift(sq("D8"), sq("H4"));
    let after_first = board.clone();
    let second = board.shift(sq("D8"), sq("H4"));

    let expected = Err(ShiftError::InvalidMove {
        from: sq("D8"),
        to: sq("H4"),
    });
    assert_eq!(first, expected);
    assert_eq!(second, expected);
    assert_eq!(after_first, before);
    assert_eq!(board, before);
}

#[test]
fn test_move_into_check_is_invalid() {
    let mut board = Board::from_notation("4r2k/8/8/8/8/8/4N3/4K3 w 0 1").unwrap();
    let before = board.clone();
    assert!(matches!(
        board.shift(sq("E2"), sq("C3")),
        Err(ShiftError::InvalidMove { .. })
    ));
    assert_eq!(board, before);
}

#[test]
fn test_capturing_own_piece_is_invalid() {
    let mut board = Board::new();
    assert!(matches!(
        board.shift(sq("A1"), sq("A2")),
        Err(ShiftError::InvalidMove { .. })
    ));
}

#[test]
fn test_bad_label_is_invalid_square() {
    let mut board = Board::new();
    let before = board.clone();
    assert!(matches!(
        board.shift_labels("e9", "e4"),
        Err(ShiftError::InvalidSquare(SquareError::InvalidNotation { .. }))
    ));
    assert_eq!(board, before);
}

#[test]
fn test_fools_mate_reports_checkmate() {
    let mut board = Board::new();
    play(&mut board, &[("F2", "F3"), ("E7", "E5"), ("G2", "G4")]);
    let status = board.shift_labels("d8", "h4").unwrap();
    assert_eq!(status, GameStatus::CheckMate);
    assert_eq!(board.side_to_move(), Color::White);
    assert_eq!(board.history_tokens().last().map(String::as_str), Some("Qh4"));
}

#[test]
fn test_shift_after_checkmate_fails() {
    let mut board = Board::new();
    play(
        &mut board,
        &[("F2", "F3"), ("E7", "E5"), ("G2", "G4"), ("D8", "H4")],
    );
    let before = board.clone();
    assert_eq!(
        board.shift(sq("E1"), sq("F2")),
        Err(ShiftError::CheckMate {
            loser: Color::White
        })
    );
    assert_eq!(board, before);
}

#[test]
fn test_move_into_stalemate_reports_draw() {
    let mut board = Board::from_notation("7k/8/5QK1/8/8/8/8/8 w 0 1").unwrap();
    let status = board.shift_labels("f6", "f7").unwrap();
    assert_eq!(status, GameStatus::Draw);
    assert_eq!(
        board.shift_labels("h8", "g8"),
        Err(ShiftError::Draw)
    );
}

#[test]
fn test_giving_check_reports_check() {
    let mut board = Board::from_notation("4k3/8/8/8/8/8/8/R3K3 w 0 1").unwrap();
    let status = board.shift_labels("a1", "a8").unwrap();
    assert_eq!(status, GameStatus::Check);
    assert!(board.is_in_check(Color::Black));
}

#[test]
fn test_clocks_saturate_at_maximum() {
    let mut board = Board::from_notation("4k3/8/8/8/8/8/8/4K1N1 w 4294967295 1").unwrap();
    assert_eq!(board.legal_moves(sq("G1")).len(), 3);
    assert_eq!(board.status(), GameStatus::Ongoing);
    board.shift_labels("g1", "f3").unwrap();
    assert_eq!(board.halfmove_clock(), u32::MAX);

    let mut board = Board::from_notation("4k1n1/8/8/8/8/8/8/4K3 b 0 4294967295").unwrap();
    assert!(board.legal_moves(sq("G8")).contains(sq("F6")));
    board.shift(sq("G8"), sq("F6")).unwrap();
    assert_eq!(board.fullmove_number(), u32::MAX);
    assert_eq!(board.halfmove_clock(), 1);
    assert_eq!(board.to_notation(), "4k3/8/5n2/8/8/8/8/4K3 w 1 4294967295");
}
