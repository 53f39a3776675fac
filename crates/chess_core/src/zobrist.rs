//! Zobrist keys identifying positions for repetition detection.
//!
//! A key XORs one random value per (piece, square), plus values for Black to
//! move, each castling right still held and a capturable en-passant file.
//! Two positions share a key exactly when they are the same position in the
//! threefold-repetition sense (move counters are ignored).

use crate::board::Board;
use crate::position::CastlingRights;
use crate::types::{Color, Piece};

pub struct ZobristKeys {
    /// Indexed by [color][piece_kind][square]
    pub pieces: [[[u64; 64]; 6]; 2],
    pub black_to_move: u64,
    /// [wk, wq, bk, bq]
    pub castling: [u64; 4],
    pub en_passant: [u64; 8],
}

impl ZobristKeys {
    /// Fills the tables from a fixed-seed xorshift64 stream so keys are
    /// identical across runs.
    pub const fn new() -> Self {
        const fn xorshift64(mut state: u64) -> u64 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        }

        let mut state = 0x9E37_79B9_7F4A_7C15u64;

        let mut pieces = [[[0u64; 64]; 6]; 2];
        let mut color = 0;
        while color < 2 {
            let mut kind = 0;
            while kind < 6 {
                let mut sq = 0;
                while sq < 64 {
                    state = xorshift64(state);
                    pieces[color][kind][sq] = state;
                    sq += 1;
                }
                kind += 1;
            }
            color += 1;
        }

        state = xorshift64(state);
        let black_to_move = state;

        let mut castling = [0u64; 4];
        let mut i = 0;
        while i < 4 {
            state = xorshift64(state);
            castling[i] = state;
            i += 1;
        }

        let mut en_passant = [0u64; 8];
        let mut i = 0;
        while i < 8 {
            state = xorshift64(state);
            en_passant[i] = state;
            i += 1;
        }

        ZobristKeys {
            pieces,
            black_to_move,
            castling,
            en_passant,
        }
    }

    #[inline(always)]
    pub fn piece_key(&self, piece: Piece, sq: u8) -> u64 {
        self.pieces[piece.color.idx()][piece.kind.idx()][sq as usize]
    }

    /// Full key of a position. `ep_file` is only passed when an en-passant
    /// capture is actually available.
    pub fn position_key(
        &self,
        board: &Board,
        side_to_move: Color,
        castling: CastlingRights,
        ep_file: Option<u8>,
    ) -> u64 {
        let mut key = 0u64;
        for (sq, pc) in board.pieces() {
            key ^= self.piece_key(pc, sq);
        }
        if side_to_move == Color::Black {
            key ^= self.black_to_move;
        }
        for (i, held) in castling.as_array().into_iter().enumerate() {
            if held {
                key ^= self.castling[i];
            }
        }
        if let Some(file) = ep_file {
            key ^= self.en_passant[file as usize];
        }
        key
    }
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

/// Global keys, computed at compile time.
pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
