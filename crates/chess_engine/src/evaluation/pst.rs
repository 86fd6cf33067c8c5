//! Piece-square tables for positional evaluation
//!
//! Looks up the positional bonus of a piece, adjusting pawn and king tables
//! for the endgame phase.

use super::endgame::EndgamePhase;
use crate::config::EvalConfig;
use crate::constants::*;
use crate::types::*;

/// Table index for a piece standing on `square`
///
/// Tables are laid out rank 8 first, so White reads the mirrored square.
#[inline]
pub fn pst_index(square: Square, side: Side) -> usize {
    match side {
        Side::White => square.flip_vertical().index(),
        Side::Black => square.index(),
    }
}

/// Positional bonus of a piece, unsigned (good for its owner when positive)
pub fn get_pst_value(piece: Piece, square: Square, phase: EndgamePhase, config: &EvalConfig) -> Score {
    let index = pst_index(square, piece.side);

    match piece.kind {
        PieceKind::Pawn if phase.is_late() => PAWN_PST[index] * config.endgame_pawn_multiplier,
        PieceKind::King => king_value(index, phase, config),
        kind => piece_square_table(kind)[index],
    }
}

/// King bonus blended between the middlegame and endgame tables
fn king_value(index: usize, phase: EndgamePhase, config: &EvalConfig) -> Score {
    let mid_quarters = match phase {
        EndgamePhase::Opening | EndgamePhase::EarlyEndgame => 4,
        EndgamePhase::Endgame => config.endgame_king_mid_quarters,
        EndgamePhase::PawnEndgame => config.pawn_endgame_king_mid_quarters,
    }
    .clamp(0, 4);

    let mid = KING_MIDDLEGAME_PST[index];
    let end = KING_ENDGAME_PST[index];
    (mid * mid_quarters + end * (4 - mid_quarters)) / 4
}
