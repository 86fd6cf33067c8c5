//! Move making and unmaking for search
//!
//! The position belongs to the rules collaborator; the search only borrows it
//! through apply/undo pairs. [`play_and_undo`] keeps every pair balanced even
//! when the child search fails, so `?` in the caller never leaves a move on
//! the board.

use crate::error::ChessEngineResult;
use crate::rules::Rules;
use crate::types::Move;

/// Apply `mv`, run `f` on the resulting position, then take the move back
///
/// The undo happens before `f`'s result is inspected. If the undo itself
/// fails the position is corrupt and that error wins.
pub(crate) fn play_and_undo<R, T, F>(rules: &mut R, mv: &Move, f: F) -> ChessEngineResult<T>
where
    R: Rules + ?Sized,
    F: FnOnce(&mut R) -> ChessEngineResult<T>,
{
    mv.validate()?;
    rules.apply(mv)?;
    let result = f(rules);
    rules.undo()?;
    result
}
