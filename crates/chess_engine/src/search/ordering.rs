//! Move ordering for alpha-beta pruning
//!
//! Orders moves to maximize alpha-beta pruning efficiency by trying the most
//! promising moves first. Ordering only affects speed, never the value the
//! search returns.

use crate::constants::*;
use crate::types::*;
use std::cmp::Reverse;

/// Heuristic promise of a move, higher is searched first
///
/// - captures: ten times the value won minus the value of the moving piece
/// - promotions: the value of the new piece
/// - landing on a square an enemy pawn attacks: lose the moving piece's value
pub fn move_order_score(mv: &Move, side: Side, board: &Board) -> Score {
    let moving = piece_value(mv.piece);
    let mut score = 0;

    if let Some(captured) = mv.captured {
        score += 10 * (piece_value(captured) - moving);
    }

    if let Some(promotion) = mv.promotion {
        score += piece_value(promotion);
    }

    if attacked_by_enemy_pawn(mv.to, side, board) {
        score -= moving;
    }

    score
}

/// Whether a pawn of `side`'s opponent attacks `square`
fn attacked_by_enemy_pawn(square: Square, side: Side, board: &Board) -> bool {
    let enemy = side.opponent();
    // Enemy pawns capture towards us, so they sit one rank behind their advance
    let rank_back = -enemy.pawn_direction();

    [-1, 1]
        .into_iter()
        .filter_map(|file_delta| square.offset(file_delta, rank_back))
        .any(|from| board[from.index()] == Some(Piece::new(PieceKind::Pawn, enemy)))
}

/// Sort moves by descending heuristic score; equal scores keep their order
pub fn order_moves(moves: &mut [Move], side: Side, board: &Board) {
    moves.sort_by_cached_key(|mv| Reverse(move_order_score(mv, side, board)));
}
