//! Rules collaborator boundary
//!
//! The engine does not generate moves, detect checkmate or encode positions
//! itself. Whatever owns the authoritative position implements [`Rules`] and
//! the search drives it through `apply`/`undo` pairs.
//!
//! # Contract
//!
//! - `apply` and `undo` are stack-ordered: `undo` takes back the most recent
//!   `apply` that has not been undone yet.
//! - Queries (`legal_moves`, `turn`, `census`, ...) describe the position as
//!   it stands after all outstanding applies.
//! - `canonical_encoding` must be equal for equal positions and is used only
//!   as transposition-table key material.
//!
//! The workspace's production implementation is
//! `chess_logic_shared::ShakmatyRules`.

use crate::error::ChessEngineResult;
use crate::types::{Board, Move, Side, Square};

pub trait Rules {
    /// All legal moves for the side to move
    fn legal_moves(&self) -> Vec<Move>;

    /// Legal moves that capture something
    fn capture_moves(&self) -> Vec<Move> {
        self.legal_moves()
            .into_iter()
            .filter(Move::is_capture)
            .collect()
    }

    /// Legal moves starting on `square`
    fn moves_from(&self, square: Square) -> Vec<Move> {
        self.legal_moves()
            .into_iter()
            .filter(|mv| mv.from == square)
            .collect()
    }

    /// Play a move produced by this collaborator
    fn apply(&mut self, mv: &Move) -> ChessEngineResult<()>;

    /// Take back the most recent outstanding move
    fn undo(&mut self) -> ChessEngineResult<()>;

    fn is_checkmate(&self) -> bool;

    /// Stalemate, insufficient material, repetition or the 50-move rule
    fn is_draw(&self) -> bool;

    fn is_game_over(&self) -> bool {
        self.is_checkmate() || self.is_draw()
    }

    fn turn(&self) -> Side;

    /// Canonical string form of the position (FEN for chess collaborators)
    fn canonical_encoding(&self) -> String;

    /// Occupant of every square
    fn census(&self) -> Board;
}
