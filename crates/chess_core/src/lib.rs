//! Chess rules: board representation, FEN, legal move generation, immutable
//! move application, attack queries and game-end detection.

pub mod board;
pub mod error;
pub mod fen;
pub mod movegen;
pub mod perft;
pub mod position;
pub mod types;
pub mod uci;
pub mod zobrist;

pub use board::*;
pub use error::*;
pub use fen::STARTPOS_FEN;
pub use movegen::*;
pub use perft::perft;
pub use position::*;
pub use types::*;
pub use uci::*;
pub use zobrist::ZOBRIST;

// =============================================================================
// Engine trait: implemented by move-choosing engines, consumed by drivers
// =============================================================================

/// What an engine decided for one position.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineReport {
    /// The move to play (None only if the position has no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation from White's perspective (positive favors White)
    pub score: f64,
    /// Search depth in plies
    pub depth: u8,
    /// Number of nodes visited
    pub nodes: u64,
    /// True when the search proposed nothing and the first legal move was taken
    pub fallback: bool,
}

/// Trait for anything that picks moves for a driver.
pub trait Engine {
    /// Choose a move for the side to move in `pos`.
    fn choose_move(&mut self, pos: &Position) -> EngineReport;

    /// Returns the engine's name for display
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
