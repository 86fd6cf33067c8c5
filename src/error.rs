//! Error types for the application layer
//!
//! Wraps engine, rules and settings failures so callers deal with a single
//! error type.

use chess_engine::ChessEngineError;
use chess_logic_shared::RulesError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// Search or move application failed
    #[error("Engine error: {0}")]
    Engine(#[from] ChessEngineError),

    /// Position could not be set up
    #[error("Rules error: {0}")]
    Rules(#[from] RulesError),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
