//! # Chess Engine Constants - Piece Values, Sentinels & Piece-Square Tables
//!
//! ## Centipawn Valuation
//!
//! Scores are integers in centipawns (1/100th of a pawn):
//!
//! - **Pawn**: 100
//! - **Knight**: 320
//! - **Bishop**: 330 (slightly above the knight, the bishop pair is usually
//!   worth more than two knights)
//! - **Rook**: 500
//! - **Queen**: 900
//! - **King**: 0 - the king is never traded, checkmate is scored separately
//!
//! ## Sentinels
//!
//! Two magnitudes are reserved above any static evaluation:
//!
//! - [`MATE_SCORE`] marks a forced mate. The search adds
//!   `MATE_DEPTH_BONUS * remaining_depth` so that a mate found with more depth
//!   left (i.e. sooner) scores higher than a later one.
//! - [`SCORE_INFINITY`] is the initial alpha-beta window.
//!
//! With [`MAX_SEARCH_DEPTH`] = 64 the largest mate score is 100 640, far
//! below `SCORE_INFINITY` and far above the largest material total (two full
//! armies are worth under 10 000 plus table bonuses), so the three ranges
//! never meet and `i32` arithmetic cannot overflow.
//!
//! ## Piece-Square Tables
//!
//! Tables are written the way a diagram is printed: rank 8 on the first line,
//! rank 1 on the last, file a on the left. A White piece on square `s` reads
//! entry `s.flip_vertical()`, a Black piece reads entry `s` directly, so both
//! sides see the table from their own side of the board. Values are the
//! well-known "simplified evaluation function" tables.

use crate::types::{PieceKind, Score};

/// Mate sentinel magnitude
pub const MATE_SCORE: Score = 100_000;

/// Per-ply-of-remaining-depth bonus added to mate scores
pub const MATE_DEPTH_BONUS: Score = 10;

/// Alpha-beta window sentinel
pub const SCORE_INFINITY: Score = 1_000_000;

/// Deepest search a session accepts
pub const MAX_SEARCH_DEPTH: u32 = 64;

/// Scores at or beyond this magnitude are mate scores
pub const MATE_THRESHOLD: Score = MATE_SCORE;

pub const PAWN_VALUE: Score = 100;
pub const KNIGHT_VALUE: Score = 320;
pub const BISHOP_VALUE: Score = 330;
pub const ROOK_VALUE: Score = 500;
pub const QUEEN_VALUE: Score = 900;
pub const KING_VALUE: Score = 0;

/// Material value of a piece kind
#[inline]
pub const fn piece_value(kind: PieceKind) -> Score {
    match kind {
        PieceKind::Pawn => PAWN_VALUE,
        PieceKind::Knight => KNIGHT_VALUE,
        PieceKind::Bishop => BISHOP_VALUE,
        PieceKind::Rook => ROOK_VALUE,
        PieceKind::Queen => QUEEN_VALUE,
        PieceKind::King => KING_VALUE,
    }
}

/// True when a score encodes a forced mate
#[inline]
pub fn is_mate_score(score: Score) -> bool {
    score.abs() >= MATE_THRESHOLD
}

#[rustfmt::skip]
pub const PAWN_PST: [Score; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
pub const KNIGHT_PST: [Score; 64] = [
   -50,-40,-30,-30,-30,-30,-40,-50,
   -40,-20,  0,  0,  0,  0,-20,-40,
   -30,  0, 10, 15, 15, 10,  0,-30,
   -30,  5, 15, 20, 20, 15,  5,-30,
   -30,  0, 15, 20, 20, 15,  0,-30,
   -30,  5, 10, 15, 15, 10,  5,-30,
   -40,-20,  0,  5,  5,  0,-20,-40,
   -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
pub const BISHOP_PST: [Score; 64] = [
   -20,-10,-10,-10,-10,-10,-10,-20,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -10,  0,  5, 10, 10,  5,  0,-10,
   -10,  5,  5, 10, 10,  5,  5,-10,
   -10,  0, 10, 10, 10, 10,  0,-10,
   -10, 10, 10, 10, 10, 10, 10,-10,
   -10,  5,  0,  0,  0,  0,  5,-10,
   -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
pub const ROOK_PST: [Score; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
pub const QUEEN_PST: [Score; 64] = [
   -20,-10,-10, -5, -5,-10,-10,-20,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -10,  0,  5,  5,  5,  5,  0,-10,
    -5,  0,  5,  5,  5,  5,  0, -5,
     0,  0,  5,  5,  5,  5,  0, -5,
   -10,  5,  5,  5,  5,  5,  0,-10,
   -10,  0,  5,  0,  0,  0,  0,-10,
   -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
pub const KING_MIDDLEGAME_PST: [Score; 64] = [
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -20,-30,-30,-40,-40,-30,-30,-20,
   -10,-20,-20,-20,-20,-20,-20,-10,
    20, 20,  0,  0,  0,  0, 20, 20,
    20, 30, 10,  0,  0, 10, 30, 20,
];

#[rustfmt::skip]
pub const KING_ENDGAME_PST: [Score; 64] = [
   -50,-40,-30,-20,-20,-30,-40,-50,
   -30,-20,-10,  0,  0,-10,-20,-30,
   -30,-10, 20, 30, 30, 20,-10,-30,
   -30,-10, 30, 40, 40, 30,-10,-30,
   -30,-10, 30, 40, 40, 30,-10,-30,
   -30,-10, 20, 30, 30, 20,-10,-30,
   -30,-30,  0,  0,  0,  0,-30,-30,
   -50,-30,-30,-30,-30,-30,-30,-50,
];

/// Middlegame table for a piece kind
pub const fn piece_square_table(kind: PieceKind) -> &'static [Score; 64] {
    match kind {
        PieceKind::Pawn => &PAWN_PST,
        PieceKind::Knight => &KNIGHT_PST,
        PieceKind::Bishop => &BISHOP_PST,
        PieceKind::Rook => &ROOK_PST,
        PieceKind::Queen => &QUEEN_PST,
        PieceKind::King => &KING_MIDDLEGAME_PST,
    }
}
