//! Test doubles for the rules boundary
//!
//! `GraphRules` is a synthetic collaborator over an explicit game graph.
//! Nodes carry a census, a side to move and terminal flags; edges carry the
//! move that leads to the child. Layered random graphs share children between
//! parents, so the same node is reached along different paths at the same
//! remaining depth, which is exactly what the transposition table caches.

use crate::constants::*;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::evaluation::evaluate_board;
use crate::config::EvalConfig;
use crate::rules::Rules;
use crate::types::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub(crate) const START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Parse the placement field of a FEN into a census
pub(crate) fn board_from_placement(placement: &str) -> Board {
    let mut board = EMPTY_BOARD;
    for (row, rank_text) in placement.split('/').enumerate() {
        let rank = 7 - row as u8;
        let mut file = 0u8;
        for ch in rank_text.chars() {
            if let Some(skip) = ch.to_digit(10) {
                file += skip as u8;
                continue;
            }
            let side = if ch.is_ascii_uppercase() { Side::White } else { Side::Black };
            let kind = match ch.to_ascii_lowercase() {
                'p' => PieceKind::Pawn,
                'n' => PieceKind::Knight,
                'b' => PieceKind::Bishop,
                'r' => PieceKind::Rook,
                'q' => PieceKind::Queen,
                'k' => PieceKind::King,
                other => panic!("bad placement character {other:?}"),
            };
            let square = Square::from_coords(file, rank).expect("placement overflows the board");
            board[square.index()] = Some(Piece::new(kind, side));
            file += 1;
        }
    }
    board
}

/// Colour-flipped mirror: every piece changes side and moves to the mirrored rank
pub(crate) fn mirror_board(board: &Board) -> Board {
    let mut mirrored = EMPTY_BOARD;
    for square in Square::iter() {
        if let Some(piece) = board[square.index()] {
            mirrored[square.flip_vertical().index()] =
                Some(Piece::new(piece.kind, piece.side.opponent()));
        }
    }
    mirrored
}

pub(crate) fn square(index: u8) -> Square {
    Square::new(index).expect("test square in range")
}

pub(crate) struct GraphNode {
    pub board: Board,
    pub turn: Side,
    pub checkmate: bool,
    pub draw: bool,
    pub edges: Vec<(Move, usize)>,
}

/// Synthetic rules collaborator walking an explicit game graph
pub(crate) struct GraphRules {
    nodes: Vec<GraphNode>,
    path: Vec<usize>,
    pub applies: usize,
}

impl GraphRules {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            path: Vec::new(),
            applies: 0,
        }
    }

    /// Add a node; the first node added is the root
    pub fn add_node(&mut self, board: Board, turn: Side) -> usize {
        self.nodes.push(GraphNode {
            board,
            turn,
            checkmate: false,
            draw: false,
            edges: Vec::new(),
        });
        if self.path.is_empty() {
            self.path.push(0);
        }
        self.nodes.len() - 1
    }

    pub fn mark_checkmate(&mut self, node: usize) {
        self.nodes[node].checkmate = true;
        self.nodes[node].edges.clear();
    }

    pub fn mark_draw(&mut self, node: usize) {
        self.nodes[node].draw = true;
    }

    /// Add an edge; the move's squares are derived from the edge number
    pub fn add_edge(&mut self, from: usize, to: usize, captured: Option<PieceKind>) -> Move {
        let ordinal = self.nodes[from].edges.len() as u8;
        let mv = Move {
            from: square(ordinal % 64),
            to: square((ordinal + 1 + to as u8 % 60) % 64),
            piece: PieceKind::Knight,
            captured,
            promotion: None,
            notation: format!("n{from}-{to}#{ordinal}"),
        };
        self.nodes[from].edges.push((mv.clone(), to));
        mv
    }

    pub fn current(&self) -> usize {
        *self.path.last().expect("graph has a root")
    }

    pub fn depth_from_root(&self) -> usize {
        self.path.len() - 1
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Random layered graph: a root plus `levels` layers of `width` nodes
    pub fn random_layered(seed: u64, levels: usize, width: usize, max_branching: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut graph = GraphRules::new();
        graph.add_node(random_board(&mut rng), Side::White);

        let mut previous: Vec<usize> = vec![0];
        for level in 1..=levels {
            let turn = if level % 2 == 0 { Side::White } else { Side::Black };
            let layer: Vec<usize> = (0..width)
                .map(|_| graph.add_node(random_board(&mut rng), turn))
                .collect();

            for &parent in &previous {
                if graph.nodes[parent].checkmate {
                    continue;
                }
                let branching = rng.random_range(1..=max_branching.min(width));
                let mut children: Vec<usize> = Vec::with_capacity(branching);
                while children.len() < branching {
                    let child = layer[rng.random_range(0..layer.len())];
                    if !children.contains(&child) {
                        children.push(child);
                    }
                }
                for child in children {
                    let captured = rng.random_bool(0.4).then(|| random_victim(&mut rng));
                    graph.add_edge(parent, child, captured);
                }
            }

            for &node in &layer {
                let roll = rng.random_range(0..100);
                if roll < 4 {
                    graph.mark_checkmate(node);
                } else if roll < 8 {
                    graph.mark_draw(node);
                }
            }
            previous = layer;
        }

        graph
    }

    /// Layered graph where every node links to every node of the next layer
    ///
    /// No terminal nodes, so the tree is as large as `width^levels`.
    pub fn complete_layered(seed: u64, levels: usize, width: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut graph = GraphRules::new();
        graph.add_node(random_board(&mut rng), Side::White);

        let mut previous: Vec<usize> = vec![0];
        for level in 1..=levels {
            let turn = if level % 2 == 0 { Side::White } else { Side::Black };
            let layer: Vec<usize> = (0..width)
                .map(|_| graph.add_node(random_board(&mut rng), turn))
                .collect();
            for &parent in &previous {
                for &child in &layer {
                    let captured = rng.random_bool(0.4).then(|| random_victim(&mut rng));
                    graph.add_edge(parent, child, captured);
                }
            }
            previous = layer;
        }

        graph
    }

    fn static_eval(&self, node: usize, config: &EvalConfig) -> Score {
        let n = &self.nodes[node];
        if n.checkmate {
            -n.turn.sign() * MATE_SCORE
        } else if n.draw {
            0
        } else {
            evaluate_board(&n.board, n.turn, config)
        }
    }

    /// Plain minimax without pruning or caching, from the current node
    pub fn exhaustive(&self, depth: u32, maximizing: bool, config: &EvalConfig) -> Score {
        self.exhaustive_from(self.current(), depth, maximizing, config)
    }

    fn exhaustive_from(&self, node: usize, depth: u32, maximizing: bool, config: &EvalConfig) -> Score {
        let n = &self.nodes[node];
        if depth == 0 {
            return self.exhaustive_quiescence(node, maximizing, config);
        }
        if n.checkmate {
            return -n.turn.sign() * (MATE_SCORE + MATE_DEPTH_BONUS * depth as Score);
        }
        if n.draw {
            return 0;
        }
        if n.edges.is_empty() {
            return self.exhaustive_quiescence(node, maximizing, config);
        }

        let scores = n
            .edges
            .iter()
            .map(|(_, child)| self.exhaustive_from(*child, depth - 1, !maximizing, config));
        let best = if maximizing { scores.max() } else { scores.min() };
        best.expect("node has edges")
    }

    /// Capture-only minimax with stand-pat, without pruning
    pub fn exhaustive_quiescence(&self, node: usize, maximizing: bool, config: &EvalConfig) -> Score {
        let n = &self.nodes[node];
        let stand_pat = self.static_eval(node, config);
        if n.checkmate || n.draw {
            return stand_pat;
        }

        n.edges
            .iter()
            .filter(|(mv, _)| mv.is_capture())
            .map(|(_, child)| self.exhaustive_quiescence(*child, !maximizing, config))
            .fold(stand_pat, |best, score| {
                if maximizing {
                    best.max(score)
                } else {
                    best.min(score)
                }
            })
    }
}

fn random_board(rng: &mut StdRng) -> Board {
    let mut board = EMPTY_BOARD;
    let place = |board: &mut Board, piece: Piece, rng: &mut StdRng| loop {
        let index = rng.random_range(0..64usize);
        if board[index].is_none() {
            board[index] = Some(piece);
            break;
        }
    };

    place(&mut board, Piece::new(PieceKind::King, Side::White), rng);
    place(&mut board, Piece::new(PieceKind::King, Side::Black), rng);
    for _ in 0..rng.random_range(0..8) {
        let kind = PieceKind::ALL[rng.random_range(0..5)];
        let side = if rng.random_bool(0.5) { Side::White } else { Side::Black };
        place(&mut board, Piece::new(kind, side), rng);
    }
    board
}

fn random_victim(rng: &mut StdRng) -> PieceKind {
    PieceKind::ALL[rng.random_range(0..5)]
}

impl Rules for GraphRules {
    fn legal_moves(&self) -> Vec<Move> {
        self.nodes[self.current()]
            .edges
            .iter()
            .map(|(mv, _)| mv.clone())
            .collect()
    }

    fn apply(&mut self, mv: &Move) -> ChessEngineResult<()> {
        let child = self.nodes[self.current()]
            .edges
            .iter()
            .find(|(edge, _)| edge == mv)
            .map(|(_, child)| *child)
            .ok_or_else(|| ChessEngineError::IllegalMove {
                notation: mv.notation.clone(),
            })?;
        self.path.push(child);
        self.applies += 1;
        Ok(())
    }

    fn undo(&mut self) -> ChessEngineResult<()> {
        if self.path.len() <= 1 {
            return Err(ChessEngineError::NothingToUndo);
        }
        self.path.pop();
        Ok(())
    }

    fn is_checkmate(&self) -> bool {
        self.nodes[self.current()].checkmate
    }

    fn is_draw(&self) -> bool {
        self.nodes[self.current()].draw
    }

    fn turn(&self) -> Side {
        self.nodes[self.current()].turn
    }

    fn canonical_encoding(&self) -> String {
        format!("node-{}", self.current())
    }

    fn census(&self) -> Board {
        self.nodes[self.current()].board
    }
}
