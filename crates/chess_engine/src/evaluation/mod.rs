//! Position evaluation with piece-square tables
//!
//! Evaluates chess positions using:
//! - Material count (piece values)
//! - Positional bonuses (piece-square tables)
//! - Endgame awareness (phase-dependent king/pawn tables, king herding)
//!
//! ## Module Organization
//!
//! - `pst` - Piece-square table lookup with endgame blending
//! - `material` - Material balance and piece census
//! - `endgame` - Phase detection and the king-to-corner term
//! - `position` - Full position evaluation

mod endgame;
mod material;
mod position;
mod pst;

pub use endgame::{endgame_phase, force_king_to_corner, king_square, EndgamePhase};
pub use material::{count_material, evaluate_material, MaterialCount};
pub use position::{evaluate_board, evaluate_position, terminal_score};
pub use pst::{get_pst_value, pst_index};
