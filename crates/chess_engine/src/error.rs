//! Error types for chess engine
//!
//! Provides custom error types for search requests, collaborator contract
//! violations and search budget exhaustion.

use thiserror::Error;

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// The position at the root has no legal moves (game over)
    #[error("No legal moves in the root position (game over)")]
    NoLegalMoves,

    /// A move handed over by the rules collaborator breaks the move contract
    #[error("Malformed move {notation:?}: {reason}")]
    MalformedMove { notation: String, reason: String },

    /// The rules collaborator could not apply a move
    #[error("Illegal move {notation:?} in the current position")]
    IllegalMove { notation: String },

    /// Undo requested without a matching apply
    #[error("Undo requested with no move to take back")]
    NothingToUndo,

    /// Invalid square index (out of bounds)
    #[error("Invalid square index: {square} (must be 0-63)")]
    InvalidSquare { square: u8 },

    /// Requested search depth is out of range
    #[error("Invalid search depth {depth} (must be 1-{max})")]
    InvalidDepth { depth: u32, max: u32 },

    /// Search stopped through its cancellation token
    #[error("Search cancelled after {nodes} nodes")]
    Cancelled { nodes: u64 },

    /// Search exceeded its node budget
    #[error("Search exceeded its node limit ({nodes} of {limit})")]
    NodeLimitExceeded { nodes: u64, limit: u64 },

    /// Search exceeded its wall-clock budget
    #[error("Search exceeded its time limit ({elapsed_ms}ms of {limit_ms}ms)")]
    TimeLimitExceeded { elapsed_ms: u64, limit_ms: u64 },
}

impl ChessEngineError {
    /// True for the errors raised by search limits rather than by bad input
    pub fn is_interrupt(&self) -> bool {
        matches!(
            self,
            ChessEngineError::Cancelled { .. }
                | ChessEngineError::NodeLimitExceeded { .. }
                | ChessEngineError::TimeLimitExceeded { .. }
        )
    }
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
