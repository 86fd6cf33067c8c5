//! Search Integration Tests
//!
//! Runs the engine against real chess positions:
//! - Legal move selection from the start position
//! - Mate-in-one for both colours
//! - Colour symmetry of evaluation and search
//! - Position restoration after searches and interrupts
//! - Transposition table transparency

use chess_engine::constants::{MATE_DEPTH_BONUS, MATE_SCORE, SCORE_INFINITY};
use chess_engine::{
    evaluate_position, find_best_move, CancellationToken, ChessEngineError, EvalConfig, Rules,
    SearchConfig, SearchSession, Side, TtConfig,
};
use chess_logic_shared::{mirror_fen, ShakmatyRules};

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
const BACK_RANK_MATE: &str = "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1";

const SAMPLE_FENS: [&str; 5] = [
    START_FEN,
    "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
    "r3k2r/1pp2ppp/p1n5/4P3/2B5/2N2Q2/PPq2PPP/R4RK1 b kq - 0 12",
    "8/8/4k3/8/2P5/8/5K2/8 w - - 0 50",
    "k7/8/1K6/8/8/8/8/6Q1 w - - 0 60",
];

fn rules(fen: &str) -> ShakmatyRules {
    ShakmatyRules::from_fen(fen).unwrap()
}

fn no_table() -> SearchConfig {
    SearchConfig {
        tt: TtConfig::disabled(),
        ..SearchConfig::default()
    }
}

// ============================================================================
// Move Selection
// ============================================================================

#[test]
fn test_start_position_returns_legal_move() {
    let mut position = ShakmatyRules::new();
    let legal = position.legal_moves();

    let result = find_best_move(&mut position, 3).unwrap();

    assert!(legal.contains(&result.best_move), "{} is not legal", result.best_move);
    assert_eq!(position.fen(), START_FEN);
    assert!(result.mate_in.is_none());
    assert!(result.stats.nodes > legal.len() as u64);
}

#[test]
fn test_white_finds_mate_in_one() {
    let mut position = rules(BACK_RANK_MATE);
    let result = find_best_move(&mut position, 2).unwrap();

    assert_eq!(result.best_move.notation, "Ra8");
    assert_eq!(result.score, MATE_SCORE + MATE_DEPTH_BONUS);
    assert_eq!(result.mate_in, Some(1));
    assert!(result.is_winning_mate_for(Side::White));
}

#[test]
fn test_black_finds_mate_in_one() {
    // Same pattern with colours swapped: the minimizing side must find it too
    let mut position = rules(&mirror_fen(BACK_RANK_MATE).unwrap());
    let result = find_best_move(&mut position, 2).unwrap();

    assert_eq!(result.best_move.notation, "Ra1");
    assert_eq!(result.score, -(MATE_SCORE + MATE_DEPTH_BONUS));
    assert_eq!(result.mate_in, Some(1));
    assert!(result.is_winning_mate_for(Side::Black));
}

#[test]
fn test_mate_is_found_at_greater_depth_too() {
    let mut position = rules(BACK_RANK_MATE);
    let result = find_best_move(&mut position, 3).unwrap();

    assert_eq!(result.best_move.notation, "Ra8");
    assert_eq!(result.score, MATE_SCORE + 2 * MATE_DEPTH_BONUS);
    assert_eq!(result.mate_in, Some(1));
}

#[test]
fn test_wins_hanging_queen() {
    let mut position = rules("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1");
    let result = find_best_move(&mut position, 2).unwrap();

    assert_eq!(result.best_move.notation, "Rxd5");
    assert!(result.score > 0);
}

#[test]
fn test_checkmated_position_has_no_move() {
    let mut position = rules("R5k1/5ppp/8/8/8/8/8/6K1 b - - 1 1");
    assert!(position.is_checkmate());

    let result = find_best_move(&mut position, 3);
    assert_eq!(result, Err(ChessEngineError::NoLegalMoves));
}

// ============================================================================
// Symmetry
// ============================================================================

#[test]
fn test_evaluation_is_colour_symmetric() {
    let config = EvalConfig::default();
    for fen in SAMPLE_FENS {
        let position = rules(fen);
        let mirrored = rules(&mirror_fen(fen).unwrap());

        assert_eq!(
            evaluate_position(&position, &config),
            -evaluate_position(&mirrored, &config),
            "asymmetric evaluation for {fen}"
        );
    }
}

#[test]
fn test_search_is_colour_symmetric() {
    for fen in SAMPLE_FENS {
        let mut position = rules(fen);
        let mut mirrored = rules(&mirror_fen(fen).unwrap());

        let score = find_best_move(&mut position, 2).unwrap().score;
        let mirrored_score = find_best_move(&mut mirrored, 2).unwrap().score;

        assert_eq!(score, -mirrored_score, "asymmetric search for {fen}");
    }
}

// ============================================================================
// Position Restoration
// ============================================================================

#[test]
fn test_position_restored_after_search() {
    for fen in SAMPLE_FENS {
        let mut position = rules(fen);
        find_best_move(&mut position, 3).unwrap();

        assert_eq!(position.fen(), fen);
        assert_eq!(position.history_len(), 0);
    }
}

#[test]
fn test_position_restored_after_node_limit() {
    let mut position = rules(SAMPLE_FENS[1]);
    let config = SearchConfig {
        node_limit: Some(500),
        ..SearchConfig::default()
    };

    let result = SearchSession::new(config).best_move(&mut position, 4);

    assert!(matches!(
        result,
        Err(ChessEngineError::NodeLimitExceeded { limit: 500, .. })
    ));
    assert_eq!(position.fen(), SAMPLE_FENS[1]);
    assert_eq!(position.history_len(), 0);
}

#[test]
fn test_cancellation_from_another_thread() {
    let mut position = rules(SAMPLE_FENS[2]);
    let token = CancellationToken::new();
    let mut session = SearchSession::default().with_cancellation(token.clone());

    std::thread::spawn(move || token.cancel()).join().unwrap();
    let result = session.best_move(&mut position, 5);

    assert!(matches!(result, Err(ChessEngineError::Cancelled { .. })));
    assert_eq!(position.fen(), SAMPLE_FENS[2]);
}

#[test]
fn test_quiet_position_quiescence_is_stand_pat() {
    let mut position = ShakmatyRules::new();
    let mut session = SearchSession::default();

    let score = session
        .quiescence(&mut position, -SCORE_INFINITY, SCORE_INFINITY, true)
        .unwrap();

    assert_eq!(score, 0);
    assert_eq!(session.stats().quiescence_nodes, 1);
    assert_eq!(position.history_len(), 0);
}

// ============================================================================
// Transposition Table
// ============================================================================

#[test]
fn test_table_does_not_change_result() {
    for fen in &SAMPLE_FENS[..3] {
        let mut cached_position = rules(fen);
        let mut plain_position = rules(fen);

        let cached = SearchSession::default().best_move(&mut cached_position, 3).unwrap();
        let plain = SearchSession::new(no_table()).best_move(&mut plain_position, 3).unwrap();

        assert_eq!(cached.best_move, plain.best_move, "different move for {fen}");
        assert_eq!(cached.score, plain.score, "different score for {fen}");
    }
}

#[test]
fn test_session_table_persists_between_searches() {
    let mut position = rules(SAMPLE_FENS[1]);
    let mut session = SearchSession::default();

    session.best_move(&mut position, 3).unwrap();
    let filled = session.transposition_table().len();
    assert!(filled > 0);

    session.clear();
    assert!(session.transposition_table().is_empty());
}
