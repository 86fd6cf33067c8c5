//! Quiescence search to avoid the horizon effect
//!
//! At the nominal depth limit the search keeps resolving captures until the
//! position is quiet. The side to move may always "stand pat" on the static
//! evaluation instead of capturing. Every capture removes material, so the
//! recursion ends once captures run out.

use super::make_unmake::play_and_undo;
use super::ordering::order_moves;
use super::session::SearchSession;
use crate::error::ChessEngineResult;
use crate::evaluation::{evaluate_board, terminal_score};
use crate::rules::Rules;
use crate::types::*;

impl SearchSession {
    /// Capture-only search below the main search horizon
    ///
    /// Scores are White-positive; `maximizing` is true when White is to move.
    /// Cutoffs return the violated bound (`beta` when maximizing, `alpha`
    /// when minimizing).
    ///
    /// # Errors
    ///
    /// Interrupts (cancellation, node or time limit) and collaborator
    /// failures propagate after the position has been restored.
    pub fn quiescence<R: Rules + ?Sized>(
        &mut self,
        rules: &mut R,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> ChessEngineResult<Score> {
        self.enter_node()?;
        self.stats.quiescence_nodes += 1;

        if let Some(score) = terminal_score(rules) {
            return Ok(score);
        }

        let board = rules.census();
        let stand_pat = evaluate_board(&board, rules.turn(), &self.config.eval);

        if maximizing {
            if stand_pat >= beta {
                return Ok(beta);
            }
            alpha = alpha.max(stand_pat);
        } else {
            if stand_pat <= alpha {
                return Ok(alpha);
            }
            beta = beta.min(stand_pat);
        }

        let mut captures = rules.capture_moves();
        if captures.is_empty() {
            return Ok(stand_pat);
        }
        order_moves(&mut captures, rules.turn(), &board);

        let mut best = stand_pat;
        for mv in &captures {
            let score = play_and_undo(rules, mv, |child| {
                self.quiescence(child, alpha, beta, !maximizing)
            })?;

            if maximizing {
                if score >= beta {
                    self.stats.cutoffs += 1;
                    return Ok(beta);
                }
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                if score <= alpha {
                    self.stats.cutoffs += 1;
                    return Ok(alpha);
                }
                best = best.min(score);
                beta = beta.min(score);
            }
        }

        Ok(best)
    }
}
