//! Full position evaluation
//!
//! Evaluates positions using material, piece-square tables and the endgame
//! king-herding term. Scores are White-positive regardless of whose turn it is.

use super::endgame::{endgame_phase, force_king_to_corner};
use super::pst::get_pst_value;
use crate::config::EvalConfig;
use crate::constants::*;
use crate::rules::Rules;
use crate::types::*;

/// Evaluate the collaborator's current position
///
/// Checkmate scores `-MATE_SCORE` when White is mated and `+MATE_SCORE` when
/// Black is; any draw scores 0.
pub fn evaluate_position<R: Rules + ?Sized>(rules: &R, config: &EvalConfig) -> Score {
    terminal_score(rules).unwrap_or_else(|| evaluate_board(&rules.census(), rules.turn(), config))
}

/// Score of a finished game, `None` while play continues
pub fn terminal_score<R: Rules + ?Sized>(rules: &R) -> Option<Score> {
    if rules.is_checkmate() {
        Some(-rules.turn().sign() * MATE_SCORE)
    } else if rules.is_draw() {
        Some(0)
    } else {
        None
    }
}

/// Static evaluation of a census (material + positional + endgame terms)
pub fn evaluate_board(board: &Board, side_to_move: Side, config: &EvalConfig) -> Score {
    let phase = endgame_phase(board, config);
    let mut score = 0;

    for square in Square::iter() {
        if let Some(piece) = board[square.index()] {
            let value = piece_value(piece.kind) + get_pst_value(piece, square, phase, config);
            score += piece.side.sign() * value;
        }
    }

    if phase.weight_halves() > 0 {
        let corner = force_king_to_corner(board, side_to_move, phase, config);
        score += side_to_move.sign() * config.corner_multiplier * corner;
    }

    score
}
