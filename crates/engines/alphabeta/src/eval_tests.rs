use super::*;
use chess_core::{play_uci_moves, Position};

const EPS: f64 = 1e-9;

fn fen(s: &str) -> Position {
    Position::from_fen(s).expect("valid FEN")
}

fn assert_close(got: Score, want: Score) {
    assert!((got - want).abs() < EPS, "expected {want}, got {got}");
}

#[test]
fn test_piece_values() {
    assert_eq!(piece_value(PieceKind::Pawn), 1.0);
    assert_eq!(piece_value(PieceKind::Knight), 3.0);
    assert_eq!(piece_value(PieceKind::Bishop), 3.0);
    assert_eq!(piece_value(PieceKind::Rook), 5.0);
    assert_eq!(piece_value(PieceKind::Queen), 9.0);
    assert_eq!(piece_value(PieceKind::King), 0.0);
}

#[test]
fn test_startpos_is_balanced() {
    assert_eq!(evaluate(&Position::startpos()), 0.0);
}

#[test]
fn test_after_e4() {
    // +0.2 for the e4 pawn, 30 vs 20 moves gives +0.5.
    let pos = play_uci_moves(&Position::startpos(), ["e2e4"]).unwrap();
    let terms = breakdown(&pos);

    assert_close(terms.material, 0.0);
    assert_close(terms.center, 0.2);
    assert_close(terms.mobility, 0.5);
    assert_close(terms.king_safety, 0.0);
    assert_close(evaluate(&pos), 0.7);
}

#[test]
fn test_symmetric_development_is_balanced() {
    let pos = play_uci_moves(&Position::startpos(), ["g1f3", "g8f6"]).unwrap();
    assert_close(evaluate(&pos), 0.0);
}

#[test]
fn test_mirrored_positions_negate() {
    let white = fen("4k3/8/8/8/3N4/8/8/R3K3 w - - 0 1");
    let black = fen("r3k3/8/8/3n4/8/8/8/4K3 b - - 0 1");

    assert_close(evaluate(&white), -evaluate(&black));
    assert!(evaluate(&white) > 8.0);
}

#[test]
fn test_checked_king_is_penalized() {
    // Black rook on e2 gives check to the white king on e1.
    let pos = fen("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1");
    let terms = breakdown(&pos);

    assert_close(terms.material, -5.0);
    assert_close(terms.king_safety, -0.5);
}

#[test]
fn test_fools_mate_scores_for_black() {
    let pos = play_uci_moves(&Position::startpos(), ["f2f3", "e7e5", "g2g4", "d8h4"]).unwrap();
    assert_eq!(terminal_score(&pos), Some(-MATE_SCORE));
    assert_eq!(evaluate(&pos), -1000.0);
}

#[test]
fn test_scholars_mate_scores_for_white() {
    let pos = fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1");
    assert_eq!(evaluate(&pos), 1000.0);
}

#[test]
fn test_mate_overrides_material() {
    // White is three pawns up but mated on the back rank.
    let pos = fen("k7/8/8/8/8/PPPPP3/5PPP/r5K1 w - - 0 1");
    assert!(breakdown(&pos).material > 0.0);
    assert!(pos.is_checkmate());
    assert_eq!(evaluate(&pos), -MATE_SCORE);
}

#[test]
fn test_draws_score_zero() {
    let stalemate = fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    let bare_kings = fen("8/8/8/4k3/8/4K3/8/8 w - - 0 1");
    let fifty = fen("8/8/8/4k3/8/4K3/4R3/8 w - - 100 60");

    for pos in [stalemate, bare_kings, fifty] {
        assert_eq!(terminal_score(&pos), Some(DRAW_SCORE), "{pos}");
        assert_eq!(evaluate(&pos), 0.0, "{pos}");
    }
}

#[test]
fn test_threefold_repetition_scores_zero() {
    let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];
    let twice = play_uci_moves(&Position::startpos(), shuffle).unwrap();
    let thrice = play_uci_moves(&twice, shuffle).unwrap();

    assert_eq!(evaluate(&thrice), 0.0);
}

#[test]
fn test_fifty_move_claim_on_next_move_scores_zero() {
    // White is a rook up, but any quiet move reaches the hundredth halfmove.
    let pos = fen("8/8/8/4k3/8/4K3/4R3/8 w - - 99 60");
    assert!(!pos.is_game_over());

    assert_eq!(terminal_score(&pos), Some(DRAW_SCORE));
    assert_eq!(evaluate(&pos), 0.0);
}

#[test]
fn test_repetition_claim_on_next_move_scores_zero() {
    let pos = play_uci_moves(
        &Position::startpos(),
        ["g1f3", "g8f6", "f3g1", "f6g8", "g1f3", "g8f6", "f3g1"],
    )
    .unwrap();
    assert!(!pos.is_game_over());

    assert_eq!(evaluate(&pos), 0.0);
}

#[test]
fn test_shuffle_delta_is_mobility_and_king_safety() {
    let pairs = [
        (
            Position::startpos(),
            play_uci_moves(&Position::startpos(), ["g1f3", "g8f6"]).unwrap(),
        ),
        // Ra1-a8 and back: same material and center, but the rook checks.
        (
            fen("4k3/8/8/8/8/8/8/R3K3 b - - 0 1"),
            fen("R3k3/8/8/8/8/8/8/4K3 b - - 0 1"),
        ),
    ];

    for (a, b) in pairs {
        let (ta, tb) = (breakdown(&a), breakdown(&b));
        assert_eq!(ta.material, tb.material, "{a} vs {b}");
        assert_eq!(ta.center, tb.center, "{a} vs {b}");

        let explained = (ta.mobility - tb.mobility) + (ta.king_safety - tb.king_safety);
        assert_close(evaluate(&a) - evaluate(&b), explained);
    }

    let quiet = breakdown(&fen("4k3/8/8/8/8/8/8/R3K3 b - - 0 1"));
    let check = breakdown(&fen("R3k3/8/8/8/8/8/8/4K3 b - - 0 1"));
    assert_close(check.king_safety - quiet.king_safety, 0.5);
}

#[test]
fn test_king_on_a1_is_scored_like_any_square() {
    // Black rook on h1 checks the white king on a1 along the first rank.
    let pos = fen("4k3/8/8/8/8/8/8/K6r w - - 0 1");
    let terms = breakdown(&pos);

    assert_close(terms.king_safety, -0.5);
    assert_close(terms.material, -5.0);
}

#[test]
fn test_live_position_has_no_terminal_score() {
    assert_eq!(terminal_score(&Position::startpos()), None);
}

#[test]
fn test_mobility_leaves_position_untouched() {
    let pos = play_uci_moves(&Position::startpos(), ["e2e4"]).unwrap();
    let before = pos.to_fen();
    evaluate(&pos);
    assert_eq!(pos.to_fen(), before);
}
