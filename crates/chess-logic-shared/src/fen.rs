//! FEN text helpers

use crate::error::{RulesError, RulesResult};
use shakmaty::fen::Fen;

fn invalid(fen: &str, reason: impl ToString) -> RulesError {
    RulesError::InvalidFen {
        fen: fen.to_string(),
        reason: reason.to_string(),
    }
}

/// FEN without the halfmove clock and fullmove number
///
/// Two positions with the same key are the same position for the
/// threefold-repetition rule.
pub fn repetition_key(fen: &str) -> String {
    fen.split_whitespace().take(4).collect::<Vec<_>>().join(" ")
}

/// Colour-flipped mirror of a position
///
/// Ranks are reversed and every piece changes colour, so White's position
/// becomes Black's and vice versa. Side to move, castling rights and the
/// en-passant square follow. Move counters are kept.
///
/// Only the FEN syntax is checked; the mirror of an impossible position is
/// just as impossible.
///
/// # Errors
///
/// Returns [`RulesError::InvalidFen`] when the text does not parse as FEN.
pub fn mirror_fen(fen: &str) -> RulesResult<String> {
    let parsed: Fen = fen.trim().parse().map_err(|e| invalid(fen, e))?;
    let mut setup = parsed.into_setup();
    setup.mirror();
    let mirrored = Fen::try_from(setup).map_err(|_| invalid(fen, "mirror has no FEN form"))?;
    Ok(mirrored.to_string())
}
