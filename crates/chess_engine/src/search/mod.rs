//! Alpha-beta search with quiescence and a transposition table
//!
//! White maximizes and Black minimizes one shared, White-positive score.
//! All mutable search state lives in a [`SearchSession`]; the position lives
//! in the [`Rules`](crate::rules::Rules) collaborator and is only touched
//! through balanced apply/undo pairs.
//!
//! ## Module Organization
//!
//! - `session` - Session state, counters, limits and cancellation
//! - `root` - Root move selection
//! - `alphabeta` - Core alpha-beta search algorithm
//! - `quiescence` - Quiescence search to avoid horizon effect
//! - `ordering` - Move ordering heuristics
//! - `make_unmake` - Apply/undo pairing

mod alphabeta;
mod make_unmake;
mod ordering;
mod quiescence;
mod root;
mod session;

pub use ordering::{move_order_score, order_moves};
pub use root::SearchResult;
pub use session::{CancellationToken, SearchSession, SearchStats};

use crate::error::ChessEngineResult;
use crate::rules::Rules;

/// Best move at `depth` using a fresh session with default settings
///
/// # Errors
///
/// See [`SearchSession::best_move`].
pub fn find_best_move<R: Rules + ?Sized>(rules: &mut R, depth: u32) -> ChessEngineResult<SearchResult> {
    SearchSession::default().best_move(rules, depth)
}
