//! Check, move safety and terminal-state tests.

use super::{sq, squares};
use crate::board::{Board, BoardBuilder, Color, GameStatus, PieceKind};

#[test]
fn test_not_in_check_at_start() {
    let board = Board::new();
    assert!(!board.is_in_check(Color::White));
    assert!(!board.is_in_check(Color::Black));
    assert_eq!(board.status(), GameStatus::Ongoing);
}

#[test]
fn test_rook_gives_check() {
    let board = Board::from_notation("4k3/8/8/8/8/8/8/4RK2 b 0 1").unwrap();
    assert!(board.is_in_check(Color::Black));
    assert!(!board.is_in_check(Color::White));
    assert_eq!(board.status(), GameStatus::Check);
}

#[test]
fn test_blocked_attack_is_not_check() {
    let board = Board::from_notation("4k3/4p3/8/8/8/8/8/4RK2 b 0 1").unwrap();
    assert!(!board.is_in_check(Color::Black));
}

#[test]
fn test_pawn_attacks_diagonally_only() {
    let board = Board::from_notation("8/8/8/3k4/4P3/8/8/4K3 b 0 1").unwrap();
    assert!(board.is_in_check(Color::Black));
    let board = Board::from_notation("8/8/8/4k3/4P3/8/8/4K3 b 0 1").unwrap();
    assert!(!board.is_in_check(Color::Black));
}

#[test]
fn test_missing_king_is_never_in_check() {
    let board = BoardBuilder::new()
        .piece("A1", PieceKind::Queen, Color::White)
        .piece("A8", PieceKind::Rook, Color::Black)
        .build()
        .unwrap();
    assert!(!board.is_in_check(Color::White));
    assert!(!board.is_in_check(Color::Black));
}

#[test]
fn test_pinned_piece_cannot_leave_line() {
    // The e2 knight shields its king from the e8 rook.
    let board = Board::from_notation("4r2k/8/8/8/8/8/4N3/4K3 w 0 1").unwrap();
    assert!(!board.pseudo_legal_moves(sq("E2")).is_empty());
    assert!(board.legal_moves(sq("E2")).is_empty());
    assert!(!board.is_move_safe(sq("E2"), sq("C3")));
}

#[test]
fn test_pinned_rook_may_slide_along_pin() {
    let board = Board::from_notation("4r2k/8/8/8/8/8/4R3/4K3 w 0 1").unwrap();
    assert_eq!(
        board.legal_moves(sq("E2")),
        squares(&["E3", "E4", "E5", "E6", "E7", "E8"])
    );
}

#[test]
fn test_king_cannot_step_into_attack() {
    let board = Board::from_notation("3r3k/8/8/8/8/8/8/4K3 w 0 1").unwrap();
    assert_eq!(
        board.legal_moves(sq("E1")),
        squares(&["E2", "F1", "F2"])
    );
}

#[test]
fn test_check_must_be_answered() {
    // The a1 rook checks along the first rank; only the knight can help.
    let board = Board::from_notation("4k3/8/8/8/8/1N6/3PPP2/r3KB2 w 0 1").unwrap();
    assert_eq!(board.status(), GameStatus::Check);
    assert_eq!(
        board.all_legal_moves(Color::White),
        vec![(sq("B3"), sq("A1")), (sq("B3"), sq("C1"))]
    );
}

#[test]
fn test_is_move_safe_does_not_mutate() {
    let board = Board::from_notation("4r2k/8/8/8/8/8/4N3/4K3 w 0 1").unwrap();
    let before = board.clone();
    let _ = board.is_move_safe(sq("E2"), sq("C3"));
    let _ = board.is_move_safe(sq("E1"), sq("D1"));
    assert_eq!(board, before);
}

#[test]
fn test_back_rank_checkmate() {
    let board = Board::from_notation("R5k1/5ppp/8/8/8/8/8/6K1 b 0 1").unwrap();
    assert!(board.is_in_check(Color::Black));
    assert!(board.all_legal_moves(Color::Black).is_empty());
    assert_eq!(board.status(), GameStatus::CheckMate);
    assert!(board.is_checkmate());
}

#[test]
fn test_queen_and_king_mate() {
    let board = Board::from_notation("7k/6Q1/6K1/8/8/8/8/8 b 0 1").unwrap();
    assert_eq!(board.status(), GameStatus::CheckMate);
}

#[test]
fn test_stalemate_is_draw() {
    let board = Board::from_notation("7k/5Q2/6K1/8/8/8/8/8 b 0 1").unwrap();
    assert!(!board.is_in_check(Color::Black));
    assert_eq!(board.status(), GameStatus::Draw);
    assert!(board.is_stalemate());
}

#[test]
fn test_other_piece_can_still_move() {
    // The king is boxed in, but the a7 pawn can advance: not stalemate.
    let board = Board::from_notation("7k/p4Q2/6K1/8/8/8/8/8 b 0 1").unwrap();
    assert!(board.legal_moves(sq("H8")).is_empty());
    assert_eq!(board.status(), GameStatus::Ongoing);
}

#[test]
fn test_check_escaped_by_block_is_not_mate() {
    // Back-rank check, but the c2 rook can interpose on c8.
    let board = Board::from_notation("R5k1/5ppp/8/8/8/8/2r5/6K1 b 0 1").unwrap();
    assert_eq!(board.status(), GameStatus::Check);
    assert_eq!(
        board.all_legal_moves(Color::Black),
        vec![(sq("C2"), sq("C8"))]
    );
}
