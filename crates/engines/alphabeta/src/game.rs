//! Capability interfaces between the search and a rules engine.
//!
//! Search and evaluation only ever talk to these traits. The chess rules in
//! `chess_core` plug in through the adapter impls at the bottom of this file;
//! tests plug in small synthetic game trees the same way.

use std::fmt::Debug;

use chess_core::{Color, Move, Outcome, Piece, Position};

/// What alpha-beta search needs from a game.
pub trait GameState: Sized {
    type Move: Copy + PartialEq + Debug;

    /// True once the game has ended (mate, stalemate or a draw).
    fn is_game_over(&self) -> bool;

    /// Legal moves in enumeration order. Search breaks ties in favour of the
    /// earliest move, so this order must be stable.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// The state after `mv`. `self` is left as it was.
    fn play(&self, mv: Self::Move) -> Self;
}

/// Queries the heuristic evaluator makes on a chess position.
pub trait BoardView {
    fn outcome(&self) -> Option<Outcome>;

    /// True when the side to move may claim a draw, including claims that
    /// one of its legal moves would complete.
    fn can_claim_draw(&self) -> bool;

    fn side_to_move(&self) -> Color;

    fn piece_at(&self, sq: u8) -> Option<Piece>;

    fn king_square(&self, color: Color) -> Option<u8>;

    /// Number of `by` pieces currently attacking `sq`.
    fn attacker_count(&self, sq: u8, by: Color) -> usize;

    /// Legal move count with `color` hypothetically to move. The receiver
    /// itself is not changed.
    fn mobility(&self, color: Color) -> usize;
}

impl GameState for Position {
    type Move = Move;

    fn is_game_over(&self) -> bool {
        Position::is_game_over(self)
    }

    fn legal_moves(&self) -> Vec<Move> {
        Position::legal_moves(self)
    }

    fn play(&self, mv: Move) -> Self {
        Position::play(self, mv)
    }
}

impl BoardView for Position {
    fn outcome(&self) -> Option<Outcome> {
        Position::outcome(self)
    }

    fn can_claim_draw(&self) -> bool {
        Position::can_claim_draw(self)
    }

    fn side_to_move(&self) -> Color {
        Position::side_to_move(self)
    }

    fn piece_at(&self, sq: u8) -> Option<Piece> {
        Position::piece_at(self, sq)
    }

    fn king_square(&self, color: Color) -> Option<u8> {
        self.king_sq(color)
    }

    fn attacker_count(&self, sq: u8, by: Color) -> usize {
        self.attackers(sq, by).len()
    }

    fn mobility(&self, color: Color) -> usize {
        if color == Position::side_to_move(self) {
            Position::legal_moves(self).len()
        } else {
            self.with_side_to_move(color).legal_moves().len()
        }
    }
}
