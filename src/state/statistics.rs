// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context and incremented by the search engine
//! as it expands nodes, completes ducts and prunes branches.

use std::fmt;

use crate::pruning::PruneReason;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Search nodes entered, including the start cell.
    NodesVisited,
    /// Complete ducts found.
    PathsFound,
}

/// One slot per counter, then one slot per prune reason.
const COUNT: usize = Counters::COUNT + PruneReason::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Record one branch abandoned for `reason`.
    pub(crate) fn record_prune(&mut self, reason: &PruneReason) {
        self.stats[Counters::COUNT + reason.index()] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Branches cut by the degree check.
    pub fn dead_ends(&self) -> u64 {
        self.stats[Counters::COUNT + PruneReason::DEAD_END]
    }

    /// Branches cut by the connectivity check.
    pub fn disconnections(&self) -> u64 {
        self.stats[Counters::COUNT + PruneReason::DISCONNECTED]
    }

    /// Total branches cut by any heuristic.
    pub fn pruned(&self) -> u64 {
        self.stats[Counters::COUNT..].iter().sum()
    }

    pub fn reset(&mut self) {
        self.stats = [0; COUNT];
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nodes={} paths={} pruned={} (dead-end={}, disconnected={})",
            self.get(Counters::NodesVisited),
            self.get(Counters::PathsFound),
            self.pruned(),
            self.dead_ends(),
            self.disconnections()
        )
    }
}
