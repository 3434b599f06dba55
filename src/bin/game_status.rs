use std::env;
use std::process::ExitCode;

use chess_rules::{Board, ShiftError};

fn play(board: &mut Board, moves: &[String]) -> Result<(), ShiftError> {
    for mv in moves {
        let (from, to) = mv
            .split_once('-')
            .unwrap_or_else(|| (mv.get(..2).unwrap_or(mv), mv.get(2..).unwrap_or_default()));
        board.shift_labels(from, to)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: game_status <from-to> <from-to> ...   (e.g. e2-e4 e7e5)");
        return ExitCode::FAILURE;
    }

    let mut board = Board::new();
    if let Err(e) = play(&mut board, &args) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    let side = board.side_to_move();
    let legal_moves = board.all_legal_moves(side);
    println!("side_to_move: {side}");
    println!("status: {}", board.status());
    println!("notation: {}", board.to_notation());
    println!("history: {}", board.history_tokens().join(" "));
    println!("legal_moves: {}", legal_moves.len());
    for (from, to) in legal_moves {
        println!("{from}-{to}");
    }
    ExitCode::SUCCESS
}
