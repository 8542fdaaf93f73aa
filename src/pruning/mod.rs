// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Early detection of doomed partial ducts.
//!
//! Counting Hamiltonian paths is exponential in general. What makes typical
//! grids tractable is noticing, before expanding a node, that no completion
//! of the current partial duct can exist, and cutting the whole subtree.
//!
//! # Heuristics
//!
//! **Degree check** (`degree`, on by default): every free cell other than
//! END must be entered and left again, so it needs at least two usable
//! connections. A free cell with fewer is a dead end.
//!
//! **Connectivity check** (`connectivity`, off by default): every free cell
//! must still be reachable from the current cell through free cells,
//! otherwise the duct has walled part of the datacenter off.
//!
//! Both checks are sound: they only reject partial ducts that have no
//! completion, so enabling them never changes the count.

pub mod connectivity;
pub mod degree;

use std::fmt;

use crate::context::SearchContext;
use crate::grid::Position;
use connectivity::FloodFill;
use strum_macros::EnumCount as EnumCountMacro;

/// Why a branch was abandoned.
#[derive(Debug, Clone, PartialEq, Eq, EnumCountMacro)]
pub enum PruneReason {
    /// A free cell (not END) has fewer than two usable connections.
    DeadEnd { position: Position, degree: usize },

    /// Some free cells cannot be reached from the current cell.
    Disconnected { reached: usize, remaining: usize },
}

impl PruneReason {
    pub(crate) const DEAD_END: usize = 0;
    pub(crate) const DISCONNECTED: usize = 1;

    /// Statistics slot for this reason.
    pub(crate) fn index(&self) -> usize {
        match self {
            PruneReason::DeadEnd { .. } => Self::DEAD_END,
            PruneReason::Disconnected { .. } => Self::DISCONNECTED,
        }
    }
}

impl fmt::Display for PruneReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PruneReason::DeadEnd { position, degree } => {
                write!(f, "Cell {} is a dead end (degree {})", position, degree)
            }
            PruneReason::Disconnected { reached, remaining } => {
                write!(
                    f,
                    "Only {} of {} free cells are reachable",
                    reached, remaining
                )
            }
        }
    }
}

/// Which pruning heuristics are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heuristics {
    pub degree: bool,
    pub connectivity: bool,
}

impl Heuristics {
    /// Plain exhaustive search. Useful as a reference for the pruned search.
    pub fn none() -> Self {
        Self {
            degree: false,
            connectivity: false,
        }
    }

    pub fn all() -> Self {
        Self {
            degree: true,
            connectivity: true,
        }
    }
}

impl Default for Heuristics {
    fn default() -> Self {
        Self {
            degree: true,
            connectivity: false,
        }
    }
}

/// Runs the enabled heuristics against a search node.
///
/// Owns the scratch buffers the heuristics need so that checking a node does
/// not allocate.
#[derive(Debug, Clone, Default)]
pub struct Pruner {
    heuristics: Heuristics,
    flood: FloodFill,
}

impl Pruner {
    pub fn new(heuristics: Heuristics) -> Self {
        Self {
            heuristics,
            flood: FloodFill::default(),
        }
    }

    pub fn heuristics(&self) -> Heuristics {
        self.heuristics
    }

    /// Check whether the node standing on `current` with a duct of `length`
    /// cells can still be completed.
    pub fn check(
        &mut self,
        ctx: &SearchContext,
        current: Position,
        length: usize,
    ) -> Result<(), PruneReason> {
        if self.heuristics.degree {
            degree::check_dead_ends(ctx.grid(), &ctx.visited, current)?;
        }
        if self.heuristics.connectivity {
            self.flood.check(ctx.grid(), &ctx.visited, current, length)?;
        }
        Ok(())
    }
}
