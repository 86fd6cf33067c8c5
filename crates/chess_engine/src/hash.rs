//! Position keys and transposition table
//!
//! Positions are keyed by a base-33 polynomial hash of the collaborator's
//! canonical encoding, kept at 64 bits. Entries may also keep the encoding
//! itself so a probe can tell a genuine hit from a key collision; with
//! verification off, a collision silently returns the other position's
//! result.
//!
//! The table is direct-mapped: each key owns exactly one slot. A store for
//! the position already in the slot always overwrites it; a store for a
//! different position follows the configured [`ReplacementPolicy`].

use crate::config::{ReplacementPolicy, TtConfig};
use crate::types::Score;
use tracing::debug;

/// Base-33 rolling hash of a canonical position encoding
pub fn position_key(encoding: &str) -> u64 {
    encoding
        .bytes()
        .fold(0u64, |hash, byte| hash.wrapping_mul(33).wrapping_add(u64::from(byte)))
}

/// What a stored score proves about the true value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    /// True value >= score (fail-high)
    Lower,
    /// True value <= score (fail-low)
    Upper,
}

impl Bound {
    /// Classify a node result against the window the node was entered with
    pub fn classify(score: Score, alpha: Score, beta: Score) -> Bound {
        if score <= alpha {
            Bound::Upper
        } else if score >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        }
    }
}

/// Result of a successful probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtEntry {
    pub score: Score,
    pub depth: u32,
    pub bound: Bound,
}

#[derive(Debug, Clone)]
struct Slot {
    key: u64,
    score: Score,
    depth: u32,
    bound: Bound,
    encoding: Option<Box<str>>,
}

impl Slot {
    fn entry(&self) -> TtEntry {
        TtEntry {
            score: self.score,
            depth: self.depth,
            bound: self.bound,
        }
    }
}

/// Table counters since creation or the last [`TranspositionTable::clear`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TtStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
    /// Same key, different position (verification enabled)
    pub collisions: u64,
    /// Stores dropped by the depth-preferred policy
    pub rejected: u64,
}

pub struct TranspositionTable {
    slots: Vec<Option<Slot>>,
    replacement: ReplacementPolicy,
    verify_positions: bool,
    occupied: usize,
    stats: TtStats,
}

impl TranspositionTable {
    pub fn new(config: &TtConfig) -> Self {
        Self {
            slots: vec![None; config.capacity],
            replacement: config.replacement,
            verify_positions: config.verify_positions,
            occupied: 0,
            stats: TtStats::default(),
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        !self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.occupied
    }

    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    pub fn stats(&self) -> TtStats {
        self.stats
    }

    #[inline]
    fn slot_index(&self, key: u64) -> usize {
        (key % self.slots.len() as u64) as usize
    }

    fn same_position(&self, entry: &Slot, key: u64, encoding: &str) -> bool {
        entry.key == key && (!self.verify_positions || entry.encoding.as_deref() == Some(encoding))
    }

    /// Look up a position
    pub fn probe(&mut self, key: u64, encoding: &str) -> Option<TtEntry> {
        if !self.is_enabled() {
            return None;
        }
        self.stats.probes += 1;

        let entry = self.slots[self.slot_index(key)].as_ref()?;
        if entry.key != key {
            return None;
        }
        if !self.same_position(entry, key, encoding) {
            self.stats.collisions += 1;
            return None;
        }

        let found = entry.entry();
        self.stats.hits += 1;
        Some(found)
    }

    /// Record a search result
    pub fn store(&mut self, key: u64, encoding: &str, score: Score, depth: u32, bound: Bound) {
        if !self.is_enabled() {
            return;
        }
        let index = self.slot_index(key);

        if let Some(resident) = &self.slots[index] {
            let replace = self.same_position(resident, key, encoding)
                || match self.replacement {
                    ReplacementPolicy::AlwaysReplace => true,
                    ReplacementPolicy::DepthPreferred => depth >= resident.depth,
                };
            if !replace {
                self.stats.rejected += 1;
                return;
            }
        } else {
            self.occupied += 1;
        }

        self.slots[index] = Some(Slot {
            key,
            score,
            depth,
            bound,
            encoding: self.verify_positions.then(|| encoding.into()),
        });
        self.stats.stores += 1;
    }

    pub fn clear(&mut self) {
        debug!(
            "[TT] Clearing {} of {} slots (probes {}, hits {}, stores {})",
            self.occupied,
            self.slots.len(),
            self.stats.probes,
            self.stats.hits,
            self.stats.stores
        );
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.occupied = 0;
        self.stats = TtStats::default();
    }
}
