//! Error types for position setup

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// The text is not a FEN
    #[error("Invalid FEN {fen:?}: {reason}")]
    InvalidFen { fen: String, reason: String },

    /// Well-formed FEN describing an impossible position
    #[error("Illegal position {fen:?}: {reason}")]
    InvalidPosition { fen: String, reason: String },
}

pub type RulesResult<T> = Result<T, RulesError>;
