use crate::types::*;

/// Mailbox piece placement, indexed a1 = 0 .. h8 = 63.
///
/// `Board` is `Copy`, so legality checks can relocate pieces on a scratch
/// copy without touching the position they came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Board {
    pub const EMPTY: Board = Board {
        squares: [None; 64],
    };

    pub fn startpos() -> Self {
        let mut b = Board::EMPTY;
        for f in 0..8 {
            b.squares[8 + f] = Some(Piece::new(Color::White, PieceKind::Pawn));
            b.squares[48 + f] = Some(Piece::new(Color::Black, PieceKind::Pawn));
        }
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            b.squares[f] = Some(Piece::new(Color::White, kind));
            b.squares[56 + f] = Some(Piece::new(Color::Black, kind));
        }
        b
    }

    #[inline]
    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.squares[sq as usize]
    }

    #[inline]
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.squares[sq as usize] = pc;
    }

    /// Occupied squares in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (u8, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(i, pc)| pc.map(|pc| (i as u8, pc)))
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        let king = Piece::new(c, PieceKind::King);
        self.pieces().find(|&(_, pc)| pc == king).map(|(s, _)| s)
    }

    #[inline]
    fn holds(&self, s: u8, color: Color, kind: PieceKind) -> bool {
        self.squares[s as usize] == Some(Piece::new(color, kind))
    }

    /// First occupied square walking from `from` (exclusive) along `(df, dr)`.
    fn first_piece_along(&self, from: u8, (df, dr): (i8, i8)) -> Option<(u8, Piece)> {
        let mut f = file_of(from) + df;
        let mut r = rank_of(from) + dr;
        while let Some(s) = sq(f, r) {
            if let Some(pc) = self.piece_at(s) {
                return Some((s, pc));
            }
            f += df;
            r += dr;
        }
        None
    }

    /// Feeds every square holding a `by` piece that attacks `target` to
    /// `visit`. Stops early and returns true once `visit` returns true.
    fn scan_attackers(&self, target: u8, by: Color, mut visit: impl FnMut(u8) -> bool) -> bool {
        let tf = file_of(target);
        let tr = rank_of(target);

        // A pawn attacks diagonally forward, so it sits one rank behind the target.
        let behind: i8 = match by {
            Color::White => -1,
            Color::Black => 1,
        };
        for df in [-1, 1] {
            if let Some(s) = sq(tf + df, tr + behind) {
                if self.holds(s, by, PieceKind::Pawn) && visit(s) {
                    return true;
                }
            }
        }

        for (df, dr) in KNIGHT_DELTAS {
            if let Some(s) = sq(tf + df, tr + dr) {
                if self.holds(s, by, PieceKind::Knight) && visit(s) {
                    return true;
                }
            }
        }

        for (df, dr) in KING_DELTAS {
            if let Some(s) = sq(tf + df, tr + dr) {
                if self.holds(s, by, PieceKind::King) && visit(s) {
                    return true;
                }
            }
        }

        for dir in DIAGONALS {
            if let Some((s, pc)) = self.first_piece_along(target, dir) {
                if pc.color == by
                    && matches!(pc.kind, PieceKind::Bishop | PieceKind::Queen)
                    && visit(s)
                {
                    return true;
                }
            }
        }
        for dir in ORTHOGONALS {
            if let Some((s, pc)) = self.first_piece_along(target, dir) {
                if pc.color == by
                    && matches!(pc.kind, PieceKind::Rook | PieceKind::Queen)
                    && visit(s)
                {
                    return true;
                }
            }
        }

        false
    }

    /// Squares of every `by` piece attacking `target`, pinned pieces included.
    pub fn attackers(&self, target: u8, by: Color) -> Vec<u8> {
        let mut out = Vec::new();
        self.scan_attackers(target, by, |s| {
            out.push(s);
            false
        });
        out
    }

    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        self.scan_attackers(target, by, |_| true)
    }

    pub fn in_check(&self, c: Color) -> bool {
        match self.king_sq(c) {
            Some(k) => self.is_square_attacked(k, c.other()),
            None => false,
        }
    }

    /// Moves `moved` along `mv`, including the en-passant victim, the castling
    /// rook and promotion. Returns the captured piece, if any.
    pub fn relocate(&mut self, mv: Move, moved: Piece) -> Option<Piece> {
        let mut captured = self.piece_at(mv.to);

        if mv.is_en_passant {
            let behind = match moved.color {
                Color::White => -1,
                Color::Black => 1,
            };
            if let Some(cs) = sq(file_of(mv.to), rank_of(mv.to) + behind) {
                captured = self.piece_at(cs);
                self.set_piece(cs, None);
            }
        }

        let last_rank = match moved.color {
            Color::White => 7,
            Color::Black => 0,
        };
        let placed = if moved.kind == PieceKind::Pawn && rank_of(mv.to) == last_rank {
            Piece::new(moved.color, mv.promo.unwrap_or(PieceKind::Queen))
        } else {
            moved
        };
        self.set_piece(mv.from, None);
        self.set_piece(mv.to, Some(placed));

        if mv.is_castle && moved.kind == PieceKind::King {
            if let Some((rf, rt)) = castle_rook_squares(mv.to) {
                let rook = self.piece_at(rf);
                self.set_piece(rf, None);
                self.set_piece(rt, rook);
            }
        }

        captured
    }
}

/// Rook (from, to) for a castling king landing on `king_to`.
pub fn castle_rook_squares(king_to: u8) -> Option<(u8, u8)> {
    // White: e1->g1 rook h1->f1, e1->c1 rook a1->d1
    // Black: e8->g8 rook h8->f8, e8->c8 rook a8->d8
    match king_to {
        6 => Some((7, 5)),
        2 => Some((0, 3)),
        62 => Some((63, 61)),
        58 => Some((56, 59)),
        _ => None,
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
