//! Search configuration
//!
//! All knobs of a search session in one serde-friendly tree so the front end
//! can load them from a JSON settings file. Every struct is
//! `#[serde(default)]`: a settings file only needs the keys it overrides.
//!
//! The evaluation thresholds and heuristic scales in [`EvalConfig`] are
//! empirically tuned numbers. They are kept here as plain values rather than
//! derived from anything.

use crate::constants::MAX_SEARCH_DEPTH;
use crate::error::{ChessEngineError, ChessEngineResult};
use serde::{Deserialize, Serialize};

/// Default number of transposition-table slots
pub const DEFAULT_TT_CAPACITY: usize = 1 << 20;

/// Top-level session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Search depth in plies used by front ends that do not pass one explicitly
    pub depth: u32,
    pub tt: TtConfig,
    pub eval: EvalConfig,
    /// Abort the search after this many milliseconds
    pub time_limit_ms: Option<u64>,
    /// Abort the search after visiting this many nodes
    pub node_limit: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            tt: TtConfig::default(),
            eval: EvalConfig::default(),
            time_limit_ms: None,
            node_limit: None,
        }
    }
}

impl SearchConfig {
    /// Reject a depth the search cannot honour
    ///
    /// # Errors
    ///
    /// Returns [`ChessEngineError::InvalidDepth`] unless `1 <= depth <= MAX_SEARCH_DEPTH`.
    pub fn check_depth(depth: u32) -> ChessEngineResult<u32> {
        if (1..=MAX_SEARCH_DEPTH).contains(&depth) {
            Ok(depth)
        } else {
            Err(ChessEngineError::InvalidDepth {
                depth,
                max: MAX_SEARCH_DEPTH,
            })
        }
    }
}

/// How a store resolves a slot already holding a different position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplacementPolicy {
    /// Latest store wins
    AlwaysReplace,
    /// Keep the resident entry when it was searched deeper
    DepthPreferred,
}

/// Transposition table settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TtConfig {
    /// Number of slots; 0 disables the table
    pub capacity: usize,
    pub replacement: ReplacementPolicy,
    /// Keep the full position encoding per entry and compare it on probe
    pub verify_positions: bool,
}

impl Default for TtConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_TT_CAPACITY,
            replacement: ReplacementPolicy::AlwaysReplace,
            verify_positions: true,
        }
    }
}

impl TtConfig {
    /// A configuration with the table switched off
    pub fn disabled() -> Self {
        Self {
            capacity: 0,
            ..Self::default()
        }
    }
}

/// Evaluation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Non-pawn pieces (both sides, kings excluded) at or below which the
    /// position is an endgame
    pub endgame_max_pieces: u32,
    /// Non-pawn pieces at or below which the position is an early endgame
    pub early_endgame_max_pieces: u32,
    /// Same, when no queens are left
    pub queenless_early_endgame_max_pieces: u32,
    /// Scale of the king-to-corner term per unit of distance
    pub corner_scale: i32,
    /// Multiplier applied to the king-to-corner term when it is added
    pub corner_multiplier: i32,
    /// Pawn table multiplier in the endgame and pawn endgame phases
    pub endgame_pawn_multiplier: i32,
    /// Middlegame king-table share, in quarters, in the endgame phase
    pub endgame_king_mid_quarters: i32,
    /// Middlegame king-table share, in quarters, in the pawn endgame phase
    pub pawn_endgame_king_mid_quarters: i32,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            endgame_max_pieces: 4,
            early_endgame_max_pieces: 6,
            queenless_early_endgame_max_pieces: 8,
            corner_scale: 10,
            corner_multiplier: 2,
            endgame_pawn_multiplier: 2,
            endgame_king_mid_quarters: 2,
            pawn_endgame_king_mid_quarters: 1,
        }
    }
}
