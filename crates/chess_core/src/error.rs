//! Error types for position setup and move input.

use thiserror::Error;

/// Errors produced while parsing a FEN string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("expected at least 4 FEN fields, found {0}")]
    MissingFields(usize),

    #[error("expected 8 ranks in piece placement, found {0}")]
    RankCount(usize),

    #[error("rank {rank} does not describe exactly 8 files")]
    RankWidth { rank: usize },

    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),

    #[error("invalid side to move '{0}'")]
    InvalidSideToMove(String),

    #[error("invalid castling character '{0}'")]
    InvalidCastling(char),

    #[error("invalid en-passant square '{0}'")]
    InvalidEnPassant(String),

    #[error("invalid move counter '{0}'")]
    InvalidCounter(String),

    #[error("{color} must have exactly one king, found {count}")]
    KingCount { color: crate::Color, count: usize },
}

/// Errors produced while reading a move in UCI notation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("'{0}' is not UCI move syntax (expected e.g. e2e4 or a7a8q)")]
    Syntax(String),

    #[error("'{0}' is not a legal move in this position")]
    Illegal(String),
}
