//! Search session state
//!
//! Everything a search mutates besides the position lives here: the
//! transposition table, node counters and the limits the search is held to.
//! Nothing is global, so independent sessions (tests, several games) never
//! observe each other.

use crate::config::SearchConfig;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::hash::{TranspositionTable, TtStats};
use instant::Instant;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// How often (in nodes) the wall clock is consulted
const DEADLINE_CHECK_INTERVAL: u64 = 1024;

/// Cooperative stop flag, shareable with another thread
///
/// The search polls it at every node and unwinds with
/// [`ChessEngineError::Cancelled`] once it is set, restoring the position on
/// the way out.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Clear the flag so the token can be reused for the next search
    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

/// Node counters of the most recent search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// All visited nodes, quiescence included
    pub nodes: u64,
    pub quiescence_nodes: u64,
    /// Alpha-beta cutoffs (main and quiescence search)
    pub cutoffs: u64,
    /// Table entries deep enough to be used
    pub tt_hits: u64,
    /// Table hits that ended the node immediately
    pub tt_cutoffs: u64,
}

/// One search session: configuration, table, counters and limits
pub struct SearchSession {
    pub(crate) config: SearchConfig,
    pub(crate) tt: TranspositionTable,
    pub(crate) stats: SearchStats,
    cancel: CancellationToken,
    started: Instant,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl SearchSession {
    pub fn new(config: SearchConfig) -> Self {
        let tt = TranspositionTable::new(&config.tt);
        Self {
            config,
            tt,
            stats: SearchStats::default(),
            cancel: CancellationToken::new(),
            started: Instant::now(),
        }
    }

    /// Use an externally owned cancellation token
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Handle to stop the running search from elsewhere
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Counters of the most recent search
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn tt_stats(&self) -> TtStats {
        self.tt.stats()
    }

    pub fn transposition_table(&self) -> &TranspositionTable {
        &self.tt
    }

    /// Forget cached results, e.g. when a new game starts
    pub fn clear(&mut self) {
        self.tt.clear();
        self.stats = SearchStats::default();
    }

    /// Time since the current search started
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Reset per-search counters and restart the clock
    pub(crate) fn begin_search(&mut self) {
        self.stats = SearchStats::default();
        self.started = Instant::now();
    }

    /// Count a node and enforce the session's limits
    pub(crate) fn enter_node(&mut self) -> ChessEngineResult<()> {
        self.stats.nodes += 1;
        let nodes = self.stats.nodes;

        if self.cancel.is_cancelled() {
            return Err(ChessEngineError::Cancelled { nodes });
        }

        if let Some(limit) = self.config.node_limit {
            if nodes > limit {
                return Err(ChessEngineError::NodeLimitExceeded { nodes, limit });
            }
        }

        if nodes % DEADLINE_CHECK_INTERVAL == 0 {
            if let Some(limit_ms) = self.config.time_limit_ms {
                let elapsed_ms = self.started.elapsed().as_millis() as u64;
                if elapsed_ms >= limit_ms {
                    return Err(ChessEngineError::TimeLimitExceeded {
                        elapsed_ms,
                        limit_ms,
                    });
                }
            }
        }

        Ok(())
    }
}
