//! Alpha-Beta Chess Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over a static heuristic
//! evaluation (material, center control, mobility and king safety).
//!
//! Search and evaluation are written against the capability traits in
//! [`game`], so they work on any game tree; `chess_core::Position` is the
//! instance the engine plays.

pub mod config;
pub mod eval;
pub mod game;
pub mod search;

use std::time::Instant;

use chess_core::{Color, Engine, EngineReport, Position};
use tracing::{debug, warn};

pub use config::{ConfigError, EngineConfig};
pub use eval::{
    breakdown, evaluate, terminal_score, EvalBreakdown, Evaluator, HeuristicEvaluator, Score,
    DRAW_SCORE, MATE_SCORE,
};
pub use game::{BoardView, GameState};
pub use search::{find_best_move, search, SearchResult, Searcher};

/// Chess engine that plays the best move of a fixed-depth alpha-beta search.
///
/// White is always the maximizing side. If the search proposes no move while
/// legal moves exist, the first legal move is played instead.
#[derive(Debug, Clone, Default)]
pub struct AlphaBetaEngine {
    config: EngineConfig,
    evaluator: HeuristicEvaluator,
}

impl AlphaBetaEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            evaluator: HeuristicEvaluator,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Engine for AlphaBetaEngine {
    fn choose_move(&mut self, pos: &Position) -> EngineReport {
        let start = Instant::now();
        let maximizing = pos.side_to_move() == Color::White;
        let max_depth = self.config.max_depth;

        let mut searcher = Searcher::new(&self.evaluator, max_depth);
        let result = searcher.alpha_beta(pos, 0, Score::NEG_INFINITY, Score::INFINITY, maximizing);

        debug!(
            depth = max_depth,
            nodes = searcher.nodes(),
            score = result.score,
            best_move = ?result.best_move.map(|mv| mv.to_string()),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "search finished"
        );

        let mut report = EngineReport {
            best_move: result.best_move,
            score: result.score,
            depth: max_depth,
            nodes: searcher.nodes(),
            fallback: false,
        };

        if report.best_move.is_none() {
            if let Some(&first) = pos.legal_moves().first() {
                warn!(fen = %pos, fallback = %first, "search proposed no move, playing first legal move");
                report.best_move = Some(first);
                report.fallback = true;
            }
        }

        report
    }

    fn name(&self) -> &str {
        "AlphaBeta"
    }
}
