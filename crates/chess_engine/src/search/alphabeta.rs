//! Alpha-beta search over the shared White-positive score
//!
//! White maximizes and Black minimizes the same score; there is no negamax
//! sign flipping between plies. The search is depth-first and recursive:
//! depth is capped at [`MAX_SEARCH_DEPTH`] and the quiescence tail is bounded
//! by the material on the board.

use super::make_unmake::play_and_undo;
use super::ordering::order_moves;
use super::session::SearchSession;
use crate::constants::*;
use crate::error::ChessEngineResult;
use crate::hash::{position_key, Bound};
use crate::rules::Rules;
use crate::types::*;

/// Score of the side to move being mated with `depth` plies still to search
///
/// Mates found nearer the root keep more of their remaining depth, so they
/// score strictly further from zero than mates found deeper in the tree.
#[inline]
pub(crate) fn mate_score(mated: Side, depth: u32) -> Score {
    -mated.sign() * (MATE_SCORE + MATE_DEPTH_BONUS * depth as Score)
}

impl SearchSession {
    /// Alpha-beta search from the collaborator's current position
    ///
    /// `maximizing` is true when White is to move. Returns the minimax value
    /// when it lies inside `(alpha, beta)`, otherwise a bound on it.
    ///
    /// # Errors
    ///
    /// Interrupts (cancellation, node or time limit) and collaborator
    /// failures propagate after the position has been restored.
    pub fn alphabeta<R: Rules + ?Sized>(
        &mut self,
        rules: &mut R,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> ChessEngineResult<Score> {
        if depth == 0 {
            return self.quiescence(rules, alpha, beta, maximizing);
        }

        self.enter_node()?;

        if rules.is_checkmate() {
            return Ok(mate_score(rules.turn(), depth));
        }
        if rules.is_draw() {
            return Ok(0);
        }

        let (alpha_orig, beta_orig) = (alpha, beta);

        let tt_key = if self.tt.is_enabled() {
            let encoding = rules.canonical_encoding();
            let key = position_key(&encoding);
            if let Some(entry) = self.tt.probe(key, &encoding) {
                if entry.depth >= depth {
                    self.stats.tt_hits += 1;
                    match entry.bound {
                        Bound::Exact => {
                            self.stats.tt_cutoffs += 1;
                            return Ok(entry.score);
                        }
                        Bound::Lower => alpha = alpha.max(entry.score),
                        Bound::Upper => beta = beta.min(entry.score),
                    }
                    if beta <= alpha {
                        self.stats.tt_cutoffs += 1;
                        return Ok(entry.score);
                    }
                }
            }
            Some((key, encoding))
        } else {
            None
        };

        let mut moves = rules.legal_moves();
        if moves.is_empty() {
            return self.quiescence(rules, alpha, beta, maximizing);
        }
        order_moves(&mut moves, rules.turn(), &rules.census());

        let mut best = if maximizing { -SCORE_INFINITY } else { SCORE_INFINITY };
        for mv in &moves {
            let score = play_and_undo(rules, mv, |child| {
                self.alphabeta(child, depth - 1, alpha, beta, !maximizing)
            })?;

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        if let Some((key, encoding)) = tt_key {
            let bound = Bound::classify(best, alpha_orig, beta_orig);
            self.tt.store(key, &encoding, best, depth, bound);
        }

        Ok(best)
    }
}
