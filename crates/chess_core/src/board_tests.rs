use super::*;

fn board_from(fen: &str) -> Board {
    *crate::Position::from_fen(fen).expect("valid FEN").board()
}

#[test]
fn test_startpos_piece_count_and_kings() {
    let b = Board::startpos();
    assert_eq!(b.pieces().count(), 32);
    assert_eq!(b.king_sq(Color::White), Some(4));
    assert_eq!(b.king_sq(Color::Black), Some(60));
}

#[test]
fn test_attackers_counts_every_piece() {
    // Black king on e5 attacked by the d4 pawn, the f3 knight and the e1 rook.
    let b = board_from("8/8/8/4k3/3P4/5N2/8/K3R3 b - - 0 1");
    let mut attackers = b.attackers(36, Color::White);
    attackers.sort_unstable();
    assert_eq!(attackers, vec![4, 21, 27]);
    assert!(b.in_check(Color::Black));
}

#[test]
fn test_attackers_blocked_slider_is_not_counted() {
    // The rook on e1 is screened by the pawn on e2.
    let b = board_from("8/8/8/4k3/8/8/4P3/K3R3 b - - 0 1");
    assert!(b.attackers(36, Color::White).is_empty());
    assert!(!b.is_square_attacked(36, Color::White));
}

#[test]
fn test_pawn_attacks_only_forward() {
    // White pawn on e4 attacks d5 and f5, not d3.
    let b = board_from("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1");
    assert!(b.is_square_attacked(35, Color::White));
    assert!(b.is_square_attacked(37, Color::White));
    assert!(!b.is_square_attacked(19, Color::White));
}

#[test]
fn test_relocate_castling_moves_rook() {
    let mut b = board_from("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let mut mv = Move::new(4, 6);
    mv.is_castle = true;
    let king = Piece::new(Color::White, PieceKind::King);
    assert_eq!(b.relocate(mv, king), None);
    assert_eq!(b.piece_at(6), Some(king));
    assert_eq!(b.piece_at(5), Some(Piece::new(Color::White, PieceKind::Rook)));
    assert_eq!(b.piece_at(7), None);
}

#[test]
fn test_relocate_en_passant_removes_victim() {
    let mut b = board_from("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
    let mut mv = Move::new(36, 43);
    mv.is_en_passant = true;
    let pawn = Piece::new(Color::White, PieceKind::Pawn);
    assert_eq!(
        b.relocate(mv, pawn),
        Some(Piece::new(Color::Black, PieceKind::Pawn))
    );
    assert_eq!(b.piece_at(35), None);
    assert_eq!(b.piece_at(43), Some(pawn));
}
