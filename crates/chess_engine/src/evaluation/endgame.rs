//! Endgame phase detection and mating technique
//!
//! Once material thins out, the engine switches king tables, values pawns
//! higher and starts rewarding the side to move for herding the enemy king
//! towards the edge while bringing its own king closer.

use super::material::count_material;
use crate::config::EvalConfig;
use crate::types::*;

/// Game phase derived from the census
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EndgamePhase {
    Opening,
    EarlyEndgame,
    Endgame,
    /// Only kings and pawns left
    PawnEndgame,
}

impl EndgamePhase {
    /// Phase weight in halves: 0, 0.5, 1 and 2 become 0, 1, 2 and 4
    #[inline]
    pub const fn weight_halves(self) -> i32 {
        match self {
            EndgamePhase::Opening => 0,
            EndgamePhase::EarlyEndgame => 1,
            EndgamePhase::Endgame => 2,
            EndgamePhase::PawnEndgame => 4,
        }
    }

    /// Endgame and pawn endgame, where pawn and king tables change
    #[inline]
    pub const fn is_late(self) -> bool {
        matches!(self, EndgamePhase::Endgame | EndgamePhase::PawnEndgame)
    }
}

/// Classify the position from its non-pawn piece and queen counts
pub fn endgame_phase(board: &Board, config: &EvalConfig) -> EndgamePhase {
    let count = count_material(board);

    if count.non_pawn_pieces == 0 {
        EndgamePhase::PawnEndgame
    } else if count.non_pawn_pieces <= config.endgame_max_pieces {
        EndgamePhase::Endgame
    } else if count.non_pawn_pieces <= config.early_endgame_max_pieces
        || (count.queens == 0 && count.non_pawn_pieces <= config.queenless_early_endgame_max_pieces)
    {
        EndgamePhase::EarlyEndgame
    } else {
        EndgamePhase::Opening
    }
}

/// Square of `side`'s king, if it has one
pub fn king_square(board: &Board, side: Side) -> Option<Square> {
    Square::iter().find(|sq| board[sq.index()] == Some(Piece::new(PieceKind::King, side)))
}

/// Reward for `side` driving the enemy king to the edge and closing in with its own
///
/// Unsigned: the caller applies `side`'s sign. Zero in the opening phase and
/// on boards missing a king.
pub fn force_king_to_corner(
    board: &Board,
    side: Side,
    phase: EndgamePhase,
    config: &EvalConfig,
) -> Score {
    let weight_halves = phase.weight_halves();
    if weight_halves == 0 {
        return 0;
    }

    let (Some(friendly), Some(opponent)) =
        (king_square(board, side), king_square(board, side.opponent()))
    else {
        return 0;
    };

    let edge_push = opponent.centre_manhattan();
    let king_proximity = 14 - friendly.manhattan(opponent);

    (edge_push + king_proximity) * config.corner_scale * weight_halves / 2
}
