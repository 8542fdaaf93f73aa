// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Connectivity check.
//!
//! ```text
//! 2--0--0  0
//!       |
//! 0  0--0  0
//!    |
//! 0  0  3  1
//! ```
//!
//! The duct above has cut the two right-hand cells off from the rest of the
//! free cells. Every remaining cell must be visited after the current one, so
//! every remaining cell must be reachable from it through free cells.

use super::PruneReason;
use crate::grid::{Grid, Position};
use crate::state::VisitedSet;

/// Flood fill with reusable buffers.
#[derive(Debug, Clone, Default)]
pub struct FloodFill {
    seen: Vec<bool>,
    stack: Vec<Position>,
}

impl FloodFill {
    /// Count the free cells reachable from `current` through free cells.
    pub fn reachable_from(&mut self, grid: &Grid, visited: &VisitedSet, current: Position) -> usize {
        self.seen.clear();
        self.seen.resize(grid.len(), false);
        self.stack.clear();

        self.seen[current.index()] = true;
        self.stack.push(current);

        let mut reached = 0;
        while let Some(cell) = self.stack.pop() {
            for neighbor in grid.neighbors(cell) {
                if !self.seen[neighbor.index()] && visited.is_free(neighbor) {
                    self.seen[neighbor.index()] = true;
                    reached += 1;
                    self.stack.push(neighbor);
                }
            }
        }
        reached
    }

    /// Fail if some of the `total_open - length` free cells are unreachable
    /// from `current`.
    pub fn check(
        &mut self,
        grid: &Grid,
        visited: &VisitedSet,
        current: Position,
        length: usize,
    ) -> Result<(), PruneReason> {
        let remaining = grid.total_open() - length;
        if remaining == 0 {
            return Ok(());
        }
        let reached = self.reachable_from(grid, visited, current);
        if reached < remaining {
            log::trace!(
                "Disconnected at {}: {} of {} free cells reachable",
                current,
                reached,
                remaining
            );
            return Err(PruneReason::Disconnected { reached, remaining });
        }
        Ok(())
    }
}
