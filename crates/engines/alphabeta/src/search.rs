//! Fixed-depth minimax search with alpha-beta pruning

use tracing::trace;

use crate::eval::{Evaluator, HeuristicEvaluator, Score};
use crate::game::{BoardView, GameState};

/// Score of a node and the move that achieves it.
///
/// `best_move` is `None` at a leaf (depth limit or game over), and when no
/// child improved on the initial worst-case bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult<M> {
    pub score: Score,
    pub best_move: Option<M>,
}

impl<M> SearchResult<M> {
    pub fn leaf(score: Score) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// Runs one search with a fixed ply budget and counts the nodes it visits.
pub struct Searcher<'e, E> {
    evaluator: &'e E,
    max_depth: u8,
    nodes: u64,
}

impl<'e, E> Searcher<'e, E> {
    pub fn new(evaluator: &'e E, max_depth: u8) -> Self {
        Self {
            evaluator,
            max_depth,
            nodes: 0,
        }
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Nodes visited so far, leaves included.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Minimax value of `pos` searched from ply `depth` down to the budget.
    ///
    /// `alpha` is the score the maximizer can already guarantee elsewhere,
    /// `beta` the minimizer's; the root passes `-inf` and `+inf`.
    /// `maximizing` says whether the side to move at `pos` is the maximizer.
    ///
    /// Only strict improvements replace the best move, so among equal scores
    /// the first move in enumeration order wins. Siblings after the point
    /// where `alpha >= beta` are never expanded.
    pub fn alpha_beta<G>(
        &mut self,
        pos: &G,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> SearchResult<G::Move>
    where
        G: GameState,
        E: Evaluator<G>,
    {
        self.nodes += 1;

        if depth >= self.max_depth || pos.is_game_over() {
            return SearchResult::leaf(self.evaluator.evaluate(pos));
        }

        let moves = pos.legal_moves();
        // The rules engine should have flagged this as game over; score it
        // statically rather than report a bogus best score.
        if moves.is_empty() {
            return SearchResult::leaf(self.evaluator.evaluate(pos));
        }

        let mut best = SearchResult {
            score: if maximizing {
                Score::NEG_INFINITY
            } else {
                Score::INFINITY
            },
            best_move: None,
        };

        // Children are built one at a time, so pruned siblings cost nothing.
        for (i, mv) in moves.iter().copied().enumerate() {
            let child = pos.play(mv);
            let score = self
                .alpha_beta(&child, depth + 1, alpha, beta, !maximizing)
                .score;

            if maximizing {
                if score > best.score {
                    best = SearchResult {
                        score,
                        best_move: Some(mv),
                    };
                }
                alpha = alpha.max(score);
            } else {
                if score < best.score {
                    best = SearchResult {
                        score,
                        best_move: Some(mv),
                    };
                }
                beta = beta.min(score);
            }

            if alpha >= beta {
                trace!(
                    depth,
                    pruned = moves.len() - i - 1,
                    "alpha-beta cutoff"
                );
                break;
            }
        }

        best
    }
}

/// One call of the search with the chess heuristic evaluator.
pub fn search<G>(
    pos: &G,
    depth: u8,
    alpha: Score,
    beta: Score,
    maximizing: bool,
    max_depth: u8,
) -> SearchResult<G::Move>
where
    G: GameState + BoardView,
{
    Searcher::new(&HeuristicEvaluator, max_depth).alpha_beta(pos, depth, alpha, beta, maximizing)
}

/// Root search: full window, starting at ply 0.
pub fn find_best_move<G>(pos: &G, maximizing: bool, max_depth: u8) -> SearchResult<G::Move>
where
    G: GameState + BoardView,
{
    search(
        pos,
        0,
        Score::NEG_INFINITY,
        Score::INFINITY,
        maximizing,
        max_depth,
    )
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
