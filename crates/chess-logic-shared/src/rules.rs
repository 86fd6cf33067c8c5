//! [`Rules`] implementation over shakmaty's standard chess
//!
//! Undo keeps a stack of earlier positions rather than reversing moves; a
//! `Chess` value is small and cloning it is cheaper than recomputing check
//! and castling state. A parallel stack of repetition keys backs the
//! threefold-repetition draw.

use crate::error::{RulesError, RulesResult};
use crate::fen::repetition_key;
use chess_engine::{
    Board, ChessEngineError, ChessEngineResult, Move, Piece, PieceKind, Rules, Side, Square,
    EMPTY_BOARD,
};
use shakmaty::fen::Fen;
use shakmaty::san::San;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, Position, Role};
use tracing::debug;

/// Halfmove clock at which the fifty-move rule draws
const FIFTY_MOVE_HALFMOVES: u32 = 100;

fn side_of(color: Color) -> Side {
    match color {
        Color::White => Side::White,
        Color::Black => Side::Black,
    }
}

fn kind_of(role: Role) -> PieceKind {
    match role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    }
}

fn square_of(square: shakmaty::Square) -> Square {
    Square::wrapping(usize::from(square) as u8)
}

fn fen_of(position: &Chess) -> String {
    Fen::from_position(position, EnPassantMode::Legal).to_string()
}

/// Standard chess position with move history
#[derive(Debug, Clone)]
pub struct ShakmatyRules {
    position: Chess,
    history: Vec<Chess>,
    repetition_keys: Vec<String>,
}

impl Default for ShakmatyRules {
    fn default() -> Self {
        Self::new()
    }
}

impl ShakmatyRules {
    /// Standard starting position
    pub fn new() -> Self {
        Self::from_position(Chess::default())
    }

    /// Position from FEN
    ///
    /// # Errors
    ///
    /// [`RulesError::InvalidFen`] when the text does not parse,
    /// [`RulesError::InvalidPosition`] when it describes an impossible position.
    pub fn from_fen(fen: &str) -> RulesResult<Self> {
        let setup: Fen = fen.trim().parse().map_err(|e| RulesError::InvalidFen {
            fen: fen.to_string(),
            reason: format!("{e}"),
        })?;
        let position: Chess =
            setup
                .into_position(CastlingMode::Standard)
                .map_err(|e| RulesError::InvalidPosition {
                    fen: fen.to_string(),
                    reason: format!("{e}"),
                })?;
        debug!("[RULES] Loaded position {}", fen.trim());
        Ok(Self::from_position(position))
    }

    fn from_position(position: Chess) -> Self {
        let key = repetition_key(&fen_of(&position));
        Self {
            position,
            history: Vec::new(),
            repetition_keys: vec![key],
        }
    }

    /// Current position as FEN
    pub fn fen(&self) -> String {
        fen_of(&self.position)
    }

    /// Number of moves that can be taken back
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn position(&self) -> &Chess {
        &self.position
    }

    fn is_threefold_repetition(&self) -> bool {
        self.repetition_keys
            .last()
            .map(|current| self.repetition_keys.iter().filter(|key| *key == current).count() >= 3)
            .unwrap_or(false)
    }

    /// Origin and destination as the engine sees them
    fn endpoints(&self, m: &shakmaty::Move) -> (Square, Square) {
        // Castling is encoded king-to-rook by shakmaty, king-to-destination here
        let to = match m.castling_side() {
            Some(side) => side.king_to(self.position.turn()),
            None => m.to(),
        };
        let from = m.from().unwrap_or(to);
        (square_of(from), square_of(to))
    }

    /// Engine-side view of a shakmaty move
    fn convert(&self, m: shakmaty::Move) -> Move {
        let (from, to) = self.endpoints(&m);
        Move {
            from,
            to,
            piece: kind_of(m.role()),
            captured: m.capture().map(kind_of),
            promotion: m.promotion().map(kind_of),
            notation: San::from_move(&self.position, m).to_string(),
        }
    }
}

impl Rules for ShakmatyRules {
    fn legal_moves(&self) -> Vec<Move> {
        self.position
            .legal_moves()
            .into_iter()
            .map(|m| self.convert(m))
            .collect()
    }

    fn capture_moves(&self) -> Vec<Move> {
        self.position
            .legal_moves()
            .into_iter()
            .filter(|m| m.is_capture())
            .map(|m| self.convert(m))
            .collect()
    }

    fn apply(&mut self, mv: &Move) -> ChessEngineResult<()> {
        let chosen = self
            .position
            .legal_moves()
            .into_iter()
            .find(|m| {
                self.endpoints(m) == (mv.from, mv.to) && m.promotion().map(kind_of) == mv.promotion
            })
            .ok_or_else(|| ChessEngineError::IllegalMove {
                notation: mv.to_string(),
            })?;

        let next = {
            let mut next = self.position.clone();
            next.play_unchecked(chosen);
            next
        };
        let previous = std::mem::replace(&mut self.position, next);
        self.history.push(previous);
        self.repetition_keys.push(repetition_key(&self.fen()));
        Ok(())
    }

    fn undo(&mut self) -> ChessEngineResult<()> {
        let previous = self.history.pop().ok_or(ChessEngineError::NothingToUndo)?;
        self.position = previous;
        self.repetition_keys.pop();
        Ok(())
    }

    fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    fn is_draw(&self) -> bool {
        self.position.is_stalemate()
            || self.position.is_insufficient_material()
            || self.position.halfmoves() >= FIFTY_MOVE_HALFMOVES
            || self.is_threefold_repetition()
    }

    fn turn(&self) -> Side {
        side_of(self.position.turn())
    }

    fn canonical_encoding(&self) -> String {
        self.fen()
    }

    fn census(&self) -> Board {
        let board = self.position.board();
        let mut census = EMPTY_BOARD;
        for square in board.occupied() {
            if let Some(piece) = board.piece_at(square) {
                census[usize::from(square)] = Some(Piece::new(kind_of(piece.role), side_of(piece.color)));
            }
        }
        census
    }
}
