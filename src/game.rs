//! Engine-driven play
//!
//! Glue between a search session and a rules collaborator: pick a move,
//! play it, repeat until the game ends or the ply budget runs out.

use crate::error::AppResult;
use chess_engine::{Rules, SearchResult, SearchSession};
use tracing::info;

/// Search the current position and play the best move
///
/// Returns `None` without searching when the game is already over.
///
/// # Errors
///
/// Search failures (bad depth, interrupts) and a collaborator that refuses
/// its own move.
pub fn make_best_move<R: Rules + ?Sized>(
    session: &mut SearchSession,
    rules: &mut R,
    depth: u32,
) -> AppResult<Option<SearchResult>> {
    if rules.is_game_over() {
        info!("[PLAY] Game over, no move to make");
        return Ok(None);
    }

    let result = session.best_move(rules, depth)?;
    rules.apply(&result.best_move)?;
    Ok(Some(result))
}

/// Let the engine play both sides for up to `max_plies` moves
///
/// # Errors
///
/// See [`make_best_move`]. Moves played before the error stay on the board.
pub fn self_play<R: Rules + ?Sized>(
    session: &mut SearchSession,
    rules: &mut R,
    depth: u32,
    max_plies: usize,
) -> AppResult<Vec<SearchResult>> {
    let mut played = Vec::with_capacity(max_plies);
    for ply in 0..max_plies {
        match make_best_move(session, rules, depth)? {
            Some(result) => {
                info!(
                    "[PLAY] Ply {}: {} plays {} ({})",
                    ply + 1,
                    rules.turn().opponent(),
                    result.best_move,
                    result.score
                );
                played.push(result);
            }
            None => break,
        }
    }
    Ok(played)
}
