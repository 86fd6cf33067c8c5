//! Material evaluation
//!
//! Material balance and the piece census the endgame phase is derived from.

use crate::constants::piece_value;
use crate::types::*;

/// Piece counts relevant to phase detection, both sides together
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterialCount {
    /// Knights, bishops, rooks and queens
    pub non_pawn_pieces: u32,
    pub queens: u32,
    pub pawns: u32,
}

/// Count pieces on the board
pub fn count_material(board: &Board) -> MaterialCount {
    let mut count = MaterialCount::default();

    for piece in board.iter().flatten() {
        match piece.kind {
            PieceKind::Pawn => count.pawns += 1,
            PieceKind::King => {}
            PieceKind::Queen => {
                count.queens += 1;
                count.non_pawn_pieces += 1;
            }
            _ => count.non_pawn_pieces += 1,
        }
    }

    count
}

/// Evaluate material balance, White-positive
pub fn evaluate_material(board: &Board) -> Score {
    board
        .iter()
        .flatten()
        .map(|piece| piece.side.sign() * piece_value(piece.kind))
        .sum()
}
