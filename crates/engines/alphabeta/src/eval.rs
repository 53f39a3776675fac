//! Static position evaluation, always from White's perspective.
//!
//! Positive scores favor White, negative favor Black. A decided game scores
//! `±MATE_SCORE` and any draw, claimable ones included, scores exactly zero;
//! otherwise the score is the sum of material, center control, mobility and
//! king safety. The heuristic terms can never reach the mate magnitude, so
//! mates dominate every comparison in the search.

use chess_core::{Color, PieceKind};

use crate::game::BoardView;

pub type Score = f64;

/// Magnitude of a checkmate score.
pub const MATE_SCORE: Score = 1000.0;
pub const DRAW_SCORE: Score = 0.0;

/// d4, e4, d5, e5
pub const CENTER_SQUARES: [u8; 4] = [27, 28, 35, 36];

const CENTER_BONUS: Score = 0.2;
const MOBILITY_WEIGHT: Score = 0.05;
const KING_ATTACKER_PENALTY: Score = 0.5;

/// Something that scores a static position from White's perspective.
pub trait Evaluator<G> {
    fn evaluate(&self, pos: &G) -> Score;
}

/// The material/center/mobility/king-safety heuristic below.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicEvaluator;

impl<P: BoardView> Evaluator<P> for HeuristicEvaluator {
    fn evaluate(&self, pos: &P) -> Score {
        evaluate(pos)
    }
}

/// Returns the material value of a piece in pawns.
#[inline]
pub fn piece_value(kind: PieceKind) -> Score {
    match kind {
        PieceKind::Pawn => 1.0,
        PieceKind::Knight => 3.0,
        PieceKind::Bishop => 3.0,
        PieceKind::Rook => 5.0,
        PieceKind::Queen => 9.0,
        PieceKind::King => 0.0,
    }
}

/// Per-term scores of a non-terminal position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EvalBreakdown {
    pub material: Score,
    pub center: Score,
    pub mobility: Score,
    pub king_safety: Score,
}

impl EvalBreakdown {
    pub fn total(&self) -> Score {
        self.material + self.center + self.mobility + self.king_safety
    }
}

#[inline]
fn signed(color: Color, value: Score) -> Score {
    match color {
        Color::White => value,
        Color::Black => -value,
    }
}

/// Score of a finished or claimably drawn game, or `None` otherwise.
///
/// A mated side is always the side to move, so the sign is the negation of
/// the side to move. A draw the side to move could claim with its next move
/// already scores zero.
pub fn terminal_score<P: BoardView>(pos: &P) -> Option<Score> {
    match pos.outcome() {
        Some(outcome) if outcome.is_draw() => Some(DRAW_SCORE),
        Some(_) => Some(signed(pos.side_to_move(), -MATE_SCORE)),
        None if pos.can_claim_draw() => Some(DRAW_SCORE),
        None => None,
    }
}

/// Heuristic terms, ignoring whether the game has ended.
pub fn breakdown<P: BoardView>(pos: &P) -> EvalBreakdown {
    let mut material = 0.0;
    for sq in 0..64u8 {
        if let Some(pc) = pos.piece_at(sq) {
            material += signed(pc.color, piece_value(pc.kind));
        }
    }

    let mut center = 0.0;
    for sq in CENTER_SQUARES {
        if let Some(pc) = pos.piece_at(sq) {
            center += signed(pc.color, CENTER_BONUS);
        }
    }

    let white_moves = pos.mobility(Color::White) as Score;
    let black_moves = pos.mobility(Color::Black) as Score;
    let mobility = MOBILITY_WEIGHT * (white_moves - black_moves);

    // Each enemy piece bearing on a king costs its owner.
    let mut king_safety = 0.0;
    for color in Color::ALL {
        if let Some(king) = pos.king_square(color) {
            let attackers = pos.attacker_count(king, color.other()) as Score;
            king_safety -= signed(color, KING_ATTACKER_PENALTY * attackers);
        }
    }

    EvalBreakdown {
        material,
        center,
        mobility,
        king_safety,
    }
}

/// Evaluates the position from White's perspective.
pub fn evaluate<P: BoardView>(pos: &P) -> Score {
    match terminal_score(pos) {
        Some(score) => score,
        None => breakdown(pos).total(),
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
