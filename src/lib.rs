//! Command-line front end for the chess search engine
//!
//! Ties the search engine ([`chess_engine`]) to real chess rules
//! ([`chess_logic_shared`]), adds JSON settings persistence and an
//! engine-versus-engine play loop.

pub mod error;
pub mod game;
pub mod settings;

pub use error::{AppError, AppResult};
pub use game::{make_best_move, self_play};
pub use settings::{load_settings, read_settings, save_settings, SETTINGS_FILENAME};
