//! Root move selection
//!
//! Every root move is searched with the full window so each one gets an
//! exact value that can be logged and compared; pruning starts one ply
//! below the root.

use super::make_unmake::play_and_undo;
use super::ordering::order_moves;
use super::session::{SearchSession, SearchStats};
use crate::config::SearchConfig;
use crate::constants::*;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::rules::Rules;
use crate::types::*;
use std::time::Duration;
use tracing::{debug, info};

/// Outcome of a root search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub best_move: Move,
    /// White-positive value of `best_move`
    pub score: Score,
    pub depth: u32,
    /// Plies until the forced mate, when `score` is a mate score
    ///
    /// A mate first reached inside the capture-only tail scores a flat
    /// `MATE_SCORE` and is reported as `depth`; the capture plies past the
    /// horizon are not counted, so the real distance can be longer.
    pub mate_in: Option<u32>,
    pub stats: SearchStats,
    pub elapsed: Duration,
}

impl SearchResult {
    /// True when the side that just got the move delivers the mate
    pub fn is_winning_mate_for(&self, side: Side) -> bool {
        self.mate_in.is_some() && self.score.signum() == side.sign()
    }
}

/// Plies from the root to the mate encoded in `score`
fn mate_distance(score: Score, depth: u32) -> Option<u32> {
    if !is_mate_score(score) {
        return None;
    }
    let remaining = ((score.abs() - MATE_SCORE) / MATE_DEPTH_BONUS).max(0) as u32;
    Some(depth.saturating_sub(remaining))
}

impl SearchSession {
    /// Search every root move to `depth` plies and return the best one
    ///
    /// White picks the highest score and Black the lowest; among equal
    /// scores the first move in search order wins.
    ///
    /// # Errors
    ///
    /// - [`ChessEngineError::InvalidDepth`] unless `1 <= depth <= MAX_SEARCH_DEPTH`
    /// - [`ChessEngineError::NoLegalMoves`] when the game is already over
    /// - interrupts and collaborator failures from the search itself; the
    ///   position is restored before any of them is returned
    pub fn best_move<R: Rules + ?Sized>(
        &mut self,
        rules: &mut R,
        depth: u32,
    ) -> ChessEngineResult<SearchResult> {
        let depth = SearchConfig::check_depth(depth)?;
        self.begin_search();
        self.enter_node()?;

        let side = rules.turn();
        let maximizing = side.is_maximizing();

        let mut moves = rules.legal_moves();
        if moves.is_empty() {
            return Err(ChessEngineError::NoLegalMoves);
        }
        order_moves(&mut moves, side, &rules.census());

        let mut best: Option<(Move, Score)> = None;
        for mv in moves {
            let score = play_and_undo(rules, &mv, |child| {
                self.alphabeta(child, depth - 1, -SCORE_INFINITY, SCORE_INFINITY, !maximizing)
            })?;
            debug!("[SEARCH] {} {}: {}", side, mv, score);

            let improves = match &best {
                None => true,
                Some((_, best_score)) if maximizing => score > *best_score,
                Some((_, best_score)) => score < *best_score,
            };
            if improves {
                best = Some((mv, score));
            }
        }

        let (best_move, score) = best.ok_or(ChessEngineError::NoLegalMoves)?;
        let stats = self.stats();
        let elapsed = self.elapsed();

        info!("[SEARCH] Best move: {}, Value: {}", best_move, score);
        info!(
            "[SEARCH] depth {} | {} nodes ({} quiescence) | {} cutoffs | {} tt hits | {:?}",
            depth, stats.nodes, stats.quiescence_nodes, stats.cutoffs, stats.tt_hits, elapsed
        );

        Ok(SearchResult {
            best_move,
            score,
            depth,
            mate_in: mate_distance(score, depth),
            stats,
            elapsed,
        })
    }
}
