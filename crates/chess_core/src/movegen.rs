use crate::{board::Board, position::Position, types::*};

/// Generate all legal moves, returning a freshly allocated vector.
///
/// Moves come out in square order of the moving piece (a1 first), which is
/// the enumeration order searches rely on for tie-breaking.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    legal_moves_into(pos, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(pos: &Position, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(pos, out);

    let mover = pos.side_to_move();
    let board = *pos.board();
    // A move is legal when, on a scratch copy of the placement, it does not
    // leave the mover's king attacked.
    out.retain(|&mv| {
        let mut scratch = board;
        if let Some(moved) = scratch.piece_at(mv.from) {
            scratch.relocate(mv, moved);
        }
        !scratch.in_check(mover)
    });
}

fn pseudo_moves(pos: &Position, out: &mut Vec<Move>) {
    let board = pos.board();
    let us = pos.side_to_move();
    for (from, pc) in board.pieces() {
        if pc.color != us {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(board, pos.en_passant(), from, us, out),
            PieceKind::Knight => gen_steps(board, from, us, &KNIGHT_DELTAS, out),
            PieceKind::Bishop => gen_slider(board, from, us, &DIAGONALS, out),
            PieceKind::Rook => gen_slider(board, from, us, &ORTHOGONALS, out),
            PieceKind::Queen => {
                gen_slider(board, from, us, &DIAGONALS, out);
                gen_slider(board, from, us, &ORTHOGONALS, out);
            }
            PieceKind::King => {
                gen_steps(board, from, us, &KING_DELTAS, out);
                gen_castle(pos, from, us, out);
            }
        }
    }
}

fn push_pawn_move(from: u8, to: u8, promo_rank: i8, out: &mut Vec<Move>) {
    if rank_of(to) == promo_rank {
        for pk in PieceKind::PROMOTIONS {
            out.push(Move::with_promo(from, to, pk));
        }
    } else {
        out.push(Move::new(from, to));
    }
}

fn gen_pawn(board: &Board, en_passant: Option<u8>, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);

    let (dir, start_rank, promo_rank): (i8, i8, i8) = match c {
        Color::White => (1, 1, 7),
        Color::Black => (-1, 6, 0),
    };

    // forward 1, then forward 2 from the start rank
    if let Some(to) = sq(f, r + dir) {
        if board.piece_at(to).is_none() {
            push_pawn_move(from, to, promo_rank, out);
            if r == start_rank {
                if let Some(to2) = sq(f, r + 2 * dir) {
                    if board.piece_at(to2).is_none() {
                        out.push(Move::new(from, to2));
                    }
                }
            }
        }
    }

    // captures + en-passant
    for df in [-1, 1] {
        let Some(to) = sq(f + df, r + dir) else {
            continue;
        };
        match board.piece_at(to) {
            Some(target) if target.color != c => push_pawn_move(from, to, promo_rank, out),
            Some(_) => {}
            None if en_passant == Some(to) => {
                let mut mv = Move::new(from, to);
                mv.is_en_passant = true;
                out.push(mv);
            }
            None => {}
        }
    }
}

/// Single-step movers: knight and king.
fn gen_steps(board: &Board, from: u8, c: Color, deltas: &[(i8, i8)], out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    for (df, dr) in deltas {
        if let Some(to) = sq(f + df, r + dr) {
            match board.piece_at(to) {
                Some(pc) if pc.color == c => {}
                _ => out.push(Move::new(from, to)),
            }
        }
    }
}

fn gen_slider(board: &Board, from: u8, c: Color, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    let f0 = file_of(from);
    let r0 = rank_of(from);
    for (df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = sq(f, r) {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => {
                    out.push(Move::new(from, to));
                    break;
                }
                _ => break,
            }
            f += df;
            r += dr;
        }
    }
}

fn gen_castle(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let rights = pos.castling();
    // (king home, kingside right, queenside right)
    let (home, king_side, queen_side) = match c {
        Color::White => (4u8, rights.wk, rights.wq),
        Color::Black => (60u8, rights.bk, rights.bq),
    };
    if from != home || !(king_side || queen_side) {
        return;
    }

    // Can't castle out of check.
    let board = pos.board();
    let enemy = c.other();
    if board.is_square_attacked(home, enemy) {
        return;
    }

    let empty = |squares: &[u8]| squares.iter().all(|&s| board.piece_at(s).is_none());
    let safe = |squares: &[u8]| squares.iter().all(|&s| !board.is_square_attacked(s, enemy));

    // King side: f and g files empty and not attacked.
    if king_side && empty(&[home + 1, home + 2]) && safe(&[home + 1, home + 2]) {
        let mut mv = Move::new(home, home + 2);
        mv.is_castle = true;
        out.push(mv);
    }
    // Queen side: b, c and d files empty; c and d not attacked.
    if queen_side && empty(&[home - 1, home - 2, home - 3]) && safe(&[home - 1, home - 2]) {
        let mut mv = Move::new(home, home - 2);
        mv.is_castle = true;
        out.push(mv);
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
