//! Scripted games through the text loop

use std::io::Cursor;

use alphabeta_engine::{AlphaBetaEngine, EngineConfig};
use chess_core::{Color, Outcome};
use chess_play::{play_game, result_message, GameEnd, GameRecord, HumanSide, PlayConfig};

fn config(human_side: HumanSide, start_fen: &str, depth: u8) -> PlayConfig {
    PlayConfig {
        human_side,
        start_fen: start_fen.to_string(),
        show_board: false,
        max_plies: 0,
        engine: EngineConfig::with_depth(depth).unwrap(),
    }
}

fn run(config: &PlayConfig, input: &str) -> (GameRecord, String) {
    let mut engine = AlphaBetaEngine::new(config.engine);
    let mut out = Vec::new();
    let record = play_game(config, &mut engine, Cursor::new(input.to_string()), &mut out)
        .expect("game runs");
    (record, String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn quit_ends_the_game() {
    let cfg = config(HumanSide::White, chess_core::STARTPOS_FEN, 1);
    let (record, out) = run(&cfg, "quit\n");

    assert_eq!(record.end, GameEnd::Quit);
    assert!(record.moves.is_empty());
    assert!(out.contains("Game Over!"));
}

#[test]
fn bad_input_is_rejected_and_reprompted() {
    let cfg = config(HumanSide::White, chess_core::STARTPOS_FEN, 1);
    let (record, out) = run(&cfg, "e2e5\nhello\ne2e4\nQUIT\n");

    assert!(out.contains("Invalid move! Try again."));
    assert!(out.contains("Invalid input! Use UCI format (e.g., e2e4)."));
    assert!(out.contains("AlphaBeta plays: "));
    assert_eq!(record.end, GameEnd::Quit);
    assert_eq!(record.moves.len(), 2);
    assert_eq!(record.moves[0].to_string(), "e2e4");
}

#[test]
fn promotion_without_letter_is_rejected() {
    let cfg = config(HumanSide::White, "8/P6k/8/8/8/8/8/K7 w - - 0 1", 1);
    let (record, out) = run(&cfg, "a7a8\nquit\n");

    assert!(out.contains("Invalid move! Try again."));
    assert!(record.moves.is_empty());
}

#[test]
fn closed_input_abandons_game() {
    let cfg = config(HumanSide::White, chess_core::STARTPOS_FEN, 1);
    let (record, _) = run(&cfg, "");

    assert_eq!(record.end, GameEnd::InputClosed);
}

#[test]
fn human_delivers_mate() {
    let cfg = config(HumanSide::Black, "7r/8/8/8/8/1k6/8/K7 b - - 0 1", 1);
    let (record, out) = run(&cfg, "h8h1\n");

    assert_eq!(
        record.end,
        GameEnd::Finished(Outcome::Checkmate {
            winner: Color::Black
        })
    );
    assert!(out.contains("Checkmate! Black wins!"));
}

#[test]
fn engine_delivers_mate() {
    let cfg = config(HumanSide::Black, "k7/8/1K6/8/8/8/8/7R w - - 0 1", 2);
    let (record, out) = run(&cfg, "");

    assert_eq!(record.moves.len(), 1);
    assert_eq!(record.moves[0].to_string(), "h1h8");
    assert!(out.contains("AlphaBeta plays: h1h8"));
    assert!(out.contains("Checkmate! White wins!"));
}

#[test]
fn self_play_stops_at_ply_limit() {
    let mut cfg = config(HumanSide::None, chess_core::STARTPOS_FEN, 1);
    cfg.max_plies = 4;
    let (record, out) = run(&cfg, "");

    assert_eq!(record.end, GameEnd::PlyLimit);
    assert_eq!(record.moves.len(), 4);
    assert!(out.contains("Stopped after 4 plies."));
}

#[test]
fn depth_zero_engine_uses_fallback() {
    let mut cfg = config(HumanSide::None, chess_core::STARTPOS_FEN, 0);
    cfg.max_plies = 1;
    let (record, out) = run(&cfg, "");

    assert_eq!(record.moves.len(), 1);
    assert!(out.contains("AlphaBeta plays (fallback): "));
}

#[test]
fn finished_start_position_plays_nothing() {
    let cfg = config(HumanSide::White, "k7/2K5/1Q6/8/8/8/8/8 b - - 0 1", 1);
    let (record, out) = run(&cfg, "");

    assert_eq!(record.end, GameEnd::Finished(Outcome::Stalemate));
    assert!(record.moves.is_empty());
    assert!(out.contains("Stalemate! Draw."));
}

#[test]
fn board_is_printed_when_enabled() {
    let mut cfg = config(HumanSide::White, chess_core::STARTPOS_FEN, 1);
    cfg.show_board = true;
    let (_, out) = run(&cfg, "quit\n");

    assert!(out.contains("1  R N B Q K B N R"));
}

#[test]
fn result_messages() {
    assert_eq!(
        result_message(Outcome::Checkmate {
            winner: Color::White
        }),
        "Checkmate! White wins!"
    );
    assert_eq!(
        result_message(Outcome::InsufficientMaterial),
        "Draw due to insufficient material."
    );
    assert_eq!(
        result_message(Outcome::FiftyMoveRule),
        "Draw by repetition or 50-move rule."
    );
    assert_eq!(
        result_message(Outcome::ThreefoldRepetition),
        "Draw by repetition or 50-move rule."
    );
}
