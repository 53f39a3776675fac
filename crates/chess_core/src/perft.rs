use crate::{movegen::legal_moves, position::Position};

/// Pure perft node count.
/// Counts all legal move sequences of exactly `depth` plies from `pos`.
pub fn perft(pos: &Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = legal_moves(pos);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .into_iter()
        .map(|mv| perft(&pos.play(mv), depth - 1))
        .sum()
}
