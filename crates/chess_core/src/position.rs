use std::fmt;
use std::hash::{Hash, Hasher};

use crate::board::Board;
use crate::movegen::legal_moves;
use crate::types::*;
use crate::zobrist::ZOBRIST;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        wk: true,
        wq: true,
        bk: true,
        bq: true,
    };
    pub const NONE: CastlingRights = CastlingRights {
        wk: false,
        wq: false,
        bk: false,
        bq: false,
    };

    pub fn as_array(self) -> [bool; 4] {
        [self.wk, self.wq, self.bk, self.bq]
    }

    pub fn any(self) -> bool {
        self.wk || self.wq || self.bk || self.bq
    }

    /// Drops every right that depends on a king or rook home square.
    /// Called for both squares of a move, so a moved king or rook and a
    /// captured rook are covered alike.
    fn touch(&mut self, sq: u8) {
        match sq {
            0 => self.wq = false,
            7 => self.wk = false,
            4 => {
                self.wk = false;
                self.wq = false;
            }
            56 => self.bq = false,
            63 => self.bk = false,
            60 => {
                self.bk = false;
                self.bq = false;
            }
            _ => {}
        }
    }
}

/// Why a game has ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
    InsufficientMaterial,
    /// Halfmove clock reached 100: a draw can be claimed.
    FiftyMoveRule,
    /// The current position has occurred three times: a draw can be claimed.
    ThreefoldRepetition,
}

impl Outcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn is_draw(self) -> bool {
        self.winner().is_none()
    }
}

/// An immutable chess position.
///
/// Moves are applied with [`Position::play`], which returns a new position
/// and leaves the receiver untouched. Besides the FEN fields the position
/// carries the keys of earlier positions since the last capture or pawn move,
/// which is all threefold-repetition detection needs.
#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<u8>, // square behind a pawn that just advanced 2
    halfmove_clock: u32,
    fullmove_number: u32,
    history: Vec<u64>,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    pub fn startpos() -> Self {
        Position {
            board: Board::startpos(),
            side_to_move: Color::White,
            castling: CastlingRights::ALL,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
        }
    }

    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        castling: CastlingRights,
        en_passant: Option<u8>,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> Self {
        Position {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }
    pub fn en_passant(&self) -> Option<u8> {
        self.en_passant
    }
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board.piece_at(sq)
    }
    pub fn king_sq(&self, c: Color) -> Option<u8> {
        self.board.king_sq(c)
    }
    pub fn in_check(&self, c: Color) -> bool {
        self.board.in_check(c)
    }
    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        self.board.is_square_attacked(target, by)
    }
    pub fn attackers(&self, target: u8, by: Color) -> Vec<u8> {
        self.board.attackers(target, by)
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(self)
    }

    /// File of the en-passant square, if a pawn to move can actually capture there.
    fn ep_capture_file(&self) -> Option<u8> {
        let ep = self.en_passant?;
        let capturable = self
            .board
            .attackers(ep, self.side_to_move)
            .into_iter()
            .any(|s| matches!(self.board.piece_at(s), Some(pc) if pc.kind == PieceKind::Pawn));
        capturable.then(|| file_of(ep) as u8)
    }

    /// Repetition key (Zobrist) of this position.
    pub fn key(&self) -> u64 {
        ZOBRIST.position_key(
            &self.board,
            self.side_to_move,
            self.castling,
            self.ep_capture_file(),
        )
    }

    /// How many times this position has occurred, counting itself.
    pub fn repetitions(&self) -> usize {
        let key = self.key();
        1 + self.history.iter().filter(|&&k| k == key).count()
    }

    /// Returns the position after `mv`. The receiver is not modified.
    ///
    /// # Panics
    /// If the from-square of `mv` is empty. Callers pass moves produced by
    /// [`Position::legal_moves`].
    pub fn play(&self, mv: Move) -> Position {
        let moved = self
            .board
            .piece_at(mv.from)
            .expect("play: no piece on the from-square");
        let key_before = self.key();

        let mut next = self.clone();
        let captured = next.board.relocate(mv, moved);

        next.castling.touch(mv.from);
        next.castling.touch(mv.to);

        next.en_passant = None;
        if moved.kind == PieceKind::Pawn && (rank_of(mv.to) - rank_of(mv.from)).abs() == 2 {
            // ep square is the square passed over
            next.en_passant = sq(file_of(mv.from), (rank_of(mv.from) + rank_of(mv.to)) / 2);
        }

        // Captures and pawn moves are irreversible: nothing before them can recur.
        if moved.kind == PieceKind::Pawn || captured.is_some() {
            next.halfmove_clock = 0;
            next.history.clear();
        } else {
            next.halfmove_clock += 1;
            next.history.push(key_before);
        }

        if self.side_to_move == Color::Black {
            next.fullmove_number += 1;
        }
        next.side_to_move = self.side_to_move.other();
        next
    }

    /// The same placement with `color` to move, for hypothetical queries such
    /// as counting the mobility of the side not on move.
    pub fn with_side_to_move(&self, color: Color) -> Position {
        let mut p = self.clone();
        if color != self.side_to_move {
            p.side_to_move = color;
            // The en-passant square only ever belongs to the side that was on move.
            p.en_passant = None;
        }
        p
    }

    pub fn is_checkmate(&self) -> bool {
        self.in_check(self.side_to_move) && self.legal_moves().is_empty()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.in_check(self.side_to_move) && self.legal_moves().is_empty()
    }

    /// Neither side can mate: bare kings, a single minor piece, or only
    /// bishops that all stand on squares of one colour.
    pub fn is_insufficient_material(&self) -> bool {
        let mut knights = 0;
        let mut bishops = 0;
        let mut light_bishop = false;
        let mut dark_bishop = false;
        for (s, pc) in self.board.pieces() {
            match pc.kind {
                PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
                PieceKind::King => {}
                PieceKind::Knight => knights += 1,
                PieceKind::Bishop => {
                    bishops += 1;
                    if is_light_square(s) {
                        light_bishop = true;
                    } else {
                        dark_bishop = true;
                    }
                }
            }
        }
        if knights + bishops <= 1 {
            return true;
        }
        knights == 0 && !(light_bishop && dark_bishop)
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    pub fn is_threefold_repetition(&self) -> bool {
        self.repetitions() >= 3
    }

    /// A draw the side to move may claim: either one that already holds, or
    /// one that a legal move of theirs would complete.
    pub fn can_claim_draw(&self) -> bool {
        self.can_claim_fifty_moves() || self.can_claim_threefold_repetition()
    }

    /// Fifty-move claim now, or after a quiet move at halfmove clock 99. A
    /// move that ends the game with mate or stalemate completes no claim.
    pub fn can_claim_fifty_moves(&self) -> bool {
        if self.is_fifty_move_draw() {
            return true;
        }
        self.halfmove_clock >= 99
            && self.legal_moves().into_iter().any(|mv| {
                let next = self.play(mv);
                next.is_fifty_move_draw() && !next.legal_moves().is_empty()
            })
    }

    /// Threefold claim now, or after a move into a position already seen twice.
    pub fn can_claim_threefold_repetition(&self) -> bool {
        if self.is_threefold_repetition() {
            return true;
        }
        // Only a key already present twice can reach three.
        let mut seen = self.history.clone();
        seen.push(self.key());
        seen.sort_unstable();
        if !seen.windows(2).any(|w| w[0] == w[1]) {
            return false;
        }
        self.legal_moves()
            .into_iter()
            .any(|mv| self.play(mv).is_threefold_repetition())
    }

    /// Returns why the game is over, or `None` while it goes on.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.legal_moves().is_empty() {
            return Some(if self.in_check(self.side_to_move) {
                Outcome::Checkmate {
                    winner: self.side_to_move.other(),
                }
            } else {
                Outcome::Stalemate
            });
        }
        if self.is_insufficient_material() {
            Some(Outcome::InsufficientMaterial)
        } else if self.is_fifty_move_draw() {
            Some(Outcome::FiftyMoveRule)
        } else if self.is_threefold_repetition() {
            Some(Outcome::ThreefoldRepetition)
        } else {
            None
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }
}

// Positions are identified by their FEN, which includes the side to move.
impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.to_fen() == other.to_fen()
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_fen().hash(state);
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fen())
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;
