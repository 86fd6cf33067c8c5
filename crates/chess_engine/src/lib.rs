//! Chess move-search engine
//!
//! Picks a move for the side to move with depth-limited alpha-beta search,
//! a capture-only quiescence tail, move ordering and a bounded transposition
//! table, scoring leaves with material, piece-square tables and an endgame
//! king-herding term.
//!
//! The engine knows nothing about chess rules. Move generation, legality,
//! checkmate/draw detection and position encoding come from a [`Rules`]
//! collaborator; the engine drives it through apply/undo pairs and always
//! leaves it in the position it was handed.
//!
//! ```ignore
//! let mut session = SearchSession::new(SearchConfig::default());
//! let result = session.best_move(&mut rules, 3)?;
//! println!("{} ({})", result.best_move, result.score);
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod hash;
pub mod rules;
pub mod search;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{EvalConfig, ReplacementPolicy, SearchConfig, TtConfig};
pub use error::{ChessEngineError, ChessEngineResult};
pub use evaluation::{evaluate_board, evaluate_position};
pub use hash::{position_key, Bound, TranspositionTable, TtEntry, TtStats};
pub use rules::Rules;
pub use search::{find_best_move, CancellationToken, SearchResult, SearchSession, SearchStats};
pub use types::{Board, Move, Piece, PieceKind, Score, Side, Square, EMPTY_BOARD};
