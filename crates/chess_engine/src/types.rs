//! # Core Types - What the Search Sees of a Chess Position
//!
//! ## Overview
//!
//! The engine never owns a chess position. Everything it knows comes from the
//! rules collaborator (see [`crate::rules::Rules`]) through a handful of small,
//! copyable value types defined here:
//!
//! - [`Side`] - whose turn it is, and the sign convention for scores
//! - [`PieceKind`] / [`Piece`] - occupants of a square
//! - [`Square`] - a 0-63 index, `a1 = 0`, `h1 = 7`, `a8 = 56`, `h8 = 63`
//! - [`Board`] - a census of all 64 squares, used by evaluation and ordering
//! - [`Move`] - a candidate transition produced by the collaborator
//!
//! ## Sign Convention
//!
//! Scores are always from White's point of view: positive favours White,
//! negative favours Black. White is the maximizing side of the minimax tree
//! and Black the minimizing one. [`Side::sign`] is the single place this
//! convention is encoded.
//!
//! ## Square Layout
//!
//! ```text
//!   a  b  c  d  e  f  g  h
//! 8 56 57 58 59 60 61 62 63
//! 7 48 .. .. .. .. .. .. 55
//! ...
//! 1  0  1  2  3  4  5  6  7
//! ```
//!
//! This matches the layout used by `shakmaty`, so the production collaborator
//! converts squares with a plain integer cast.

use crate::error::{ChessEngineError, ChessEngineResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Evaluation score in centipawns, White-positive
pub type Score = i32;

/// Census of all 64 squares, indexed by [`Square::index`]
pub type Board = [Option<Piece>; 64];

/// An empty census
pub const EMPTY_BOARD: Board = [None; 64];

/// Side to move / piece colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// +1 for White, -1 for Black
    #[inline]
    pub const fn sign(self) -> Score {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    #[inline]
    pub const fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// White maximizes the shared score, Black minimizes it
    #[inline]
    pub const fn is_maximizing(self) -> bool {
        matches!(self, Side::White)
    }

    /// Rank delta of a pawn advance for this side
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

/// Piece kind, independent of colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Dense index, used to address per-kind tables
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Lowercase letter as used in FEN
    pub const fn char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

/// A coloured piece standing on a square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side }
    }
}

/// Board square, `0..64`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square(u8);

impl Square {
    /// Build a square from an index
    ///
    /// # Errors
    ///
    /// Returns [`ChessEngineError::InvalidSquare`] for indices outside `0..64`.
    pub fn new(index: u8) -> ChessEngineResult<Self> {
        if index < 64 {
            Ok(Self(index))
        } else {
            Err(ChessEngineError::InvalidSquare { square: index })
        }
    }

    /// Build a square from file (0 = a) and rank (0 = first rank)
    #[inline]
    pub fn from_coords(file: u8, rank: u8) -> Option<Self> {
        (file < 8 && rank < 8).then(|| Self(rank * 8 + file))
    }

    /// Square of an index taken modulo 64
    #[inline]
    pub const fn wrapping(index: u8) -> Self {
        Self(index & 63)
    }

    /// All 64 squares, a1 first
    pub fn iter() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Same file, rank mirrored (a1 <-> a8)
    #[inline]
    pub const fn flip_vertical(self) -> Self {
        Self(self.0 ^ 56)
    }

    /// Square displaced by whole files/ranks, `None` when it leaves the board
    pub fn offset(self, files: i8, ranks: i8) -> Option<Self> {
        let file = self.file() as i8 + files;
        let rank = self.rank() as i8 + ranks;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Self((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    /// Manhattan distance between two squares
    pub fn manhattan(self, other: Square) -> i32 {
        (self.file() as i32 - other.file() as i32).abs()
            + (self.rank() as i32 - other.rank() as i32).abs()
    }

    /// Manhattan distance to the nearest of the four centre squares
    pub fn centre_manhattan(self) -> i32 {
        let file = self.file() as i32;
        let rank = self.rank() as i32;
        (3 - file).max(file - 4) + (3 - rank).max(rank - 4)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file()) as char;
        let rank = (b'1' + self.rank()) as char;
        write!(f, "{file}{rank}")
    }
}

/// A candidate move as produced by the rules collaborator
///
/// Immutable once generated. The search only reads the piece kinds (for
/// ordering) and hands the whole value back to the collaborator to apply.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: PieceKind,
    pub captured: Option<PieceKind>,
    pub promotion: Option<PieceKind>,
    /// Human-readable notation (SAN for the shakmaty collaborator)
    pub notation: String,
}

impl Move {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    /// Check the structural contract every collaborator move must satisfy
    ///
    /// # Errors
    ///
    /// Returns [`ChessEngineError::MalformedMove`] when the move cannot be a
    /// chess move at all. Legality in the current position is the
    /// collaborator's concern and is not checked here.
    pub fn validate(&self) -> ChessEngineResult<()> {
        let reason = if self.from == self.to {
            Some("origin and destination are the same square")
        } else if self.captured == Some(PieceKind::King) {
            Some("a king cannot be captured")
        } else if self.promotion.is_some() && self.piece != PieceKind::Pawn {
            Some("only pawns can promote")
        } else if matches!(self.promotion, Some(PieceKind::Pawn | PieceKind::King)) {
            Some("promotion must be to a knight, bishop, rook or queen")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(ChessEngineError::MalformedMove {
                notation: self.notation.clone(),
                reason: reason.to_string(),
            }),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.notation.is_empty() {
            write!(f, "{}{}", self.from, self.to)?;
            if let Some(promotion) = self.promotion {
                write!(f, "{}", promotion.char())?;
            }
            Ok(())
        } else {
            f.write_str(&self.notation)
        }
    }
}
