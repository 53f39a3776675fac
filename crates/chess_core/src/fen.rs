//! Forsyth-Edwards Notation: parsing and formatting.

use std::str::FromStr;

use crate::board::Board;
use crate::error::FenError;
use crate::position::{CastlingRights, Position};
use crate::types::*;

pub const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Parses a FEN string. Move counters are optional and default to `0 1`.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::MissingFields(parts.len()));
        }

        let board = parse_placement(parts[0])?;

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidSideToMove(other.to_string())),
        };

        let mut castling = CastlingRights::NONE;
        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => castling.wk = true,
                    'Q' => castling.wq = true,
                    'k' => castling.bk = true,
                    'q' => castling.bq = true,
                    _ => return Err(FenError::InvalidCastling(c)),
                }
            }
        }

        let en_passant = match parts[3] {
            "-" => None,
            s => Some(coord_to_sq(s).ok_or_else(|| FenError::InvalidEnPassant(s.to_string()))?),
        };

        let halfmove_clock = parse_counter(parts.get(4).copied().unwrap_or("0"))?;
        let fullmove_number = parse_counter(parts.get(5).copied().unwrap_or("1"))?;

        Ok(Position::from_parts(
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        ))
    }

    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(90);
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                let s = (rank * 8 + file) as u8;
                match self.piece_at(s) {
                    Some(pc) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(pc.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if rank > 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(match self.side_to_move() {
            Color::White => 'w',
            Color::Black => 'b',
        });

        out.push(' ');
        let c = self.castling();
        if c.any() {
            for (held, ch) in c.as_array().into_iter().zip(['K', 'Q', 'k', 'q']) {
                if held {
                    out.push(ch);
                }
            }
        } else {
            out.push('-');
        }

        out.push(' ');
        match self.en_passant() {
            Some(ep) => out.push_str(&sq_to_coord(ep)),
            None => out.push('-'),
        }

        out.push_str(&format!(
            " {} {}",
            self.halfmove_clock(),
            self.fullmove_number()
        ));
        out
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()));
    }

    let mut board = Board::EMPTY;
    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank: i8 = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
        let mut file: i8 = 0;
        for ch in rank_str.chars() {
            if let Some(d) = ch.to_digit(10) {
                file += d as i8;
            } else {
                let pc = Piece::from_char(ch).ok_or(FenError::InvalidPiece(ch))?;
                let s = sq(file, rank).ok_or(FenError::RankWidth { rank: 8 - rank_idx })?;
                board.set_piece(s, Some(pc));
                file += 1;
            }
            if file > 8 {
                return Err(FenError::RankWidth { rank: 8 - rank_idx });
            }
        }
        if file != 8 {
            return Err(FenError::RankWidth { rank: 8 - rank_idx });
        }
    }

    for color in Color::ALL {
        let king = Piece::new(color, PieceKind::King);
        let count = board.pieces().filter(|&(_, pc)| pc == king).count();
        if count != 1 {
            return Err(FenError::KingCount { color, count });
        }
    }

    Ok(board)
}

fn parse_counter(s: &str) -> Result<u32, FenError> {
    s.parse()
        .map_err(|_| FenError::InvalidCounter(s.to_string()))
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
