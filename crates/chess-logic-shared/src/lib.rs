//! Chess rules for the search engine
//!
//! [`ShakmatyRules`] implements [`chess_engine::Rules`] on top of shakmaty:
//! legal move generation, checkmate and draw detection, FEN encoding and an
//! undo history. Moves are reported with SAN notation.

mod error;
mod fen;
mod rules;

pub use error::{RulesError, RulesResult};
pub use fen::{mirror_fen, repetition_key};
pub use rules::ShakmatyRules;
