// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Degree check.
//!
//! ```text
//! 2  0  0  0
//! |
//! 0--0--0  0
//!
//! 0  0  3  1
//! ```
//!
//! After the duct above, the second cell of the top row touches only one
//! free cell. Whichever way the duct enters it, it cannot leave again, and
//! it is not the END cell, so no completion exists.

use super::PruneReason;
use crate::grid::{Grid, Position};
use crate::state::VisitedSet;

/// Usable connections of `cell`: neighbours that are free, plus `current`
/// (the duct can still leave `current` into `cell`).
pub fn degree(grid: &Grid, visited: &VisitedSet, cell: Position, current: Position) -> usize {
    grid.neighbors(cell)
        .filter(|&neighbor| neighbor == current || visited.is_free(neighbor))
        .count()
}

/// Fail if any free cell other than END has fewer than two usable connections.
///
/// END is exempt: it is the last cell of the duct and needs only one.
pub fn check_dead_ends(
    grid: &Grid,
    visited: &VisitedSet,
    current: Position,
) -> Result<(), PruneReason> {
    let end = grid.end();
    for cell in grid.positions() {
        if cell == end || !visited.is_free(cell) {
            continue;
        }
        let degree = degree(grid, visited, cell, current);
        if degree < 2 {
            log::trace!("Dead end at {} (degree {}) from {}", cell, degree, current);
            return Err(PruneReason::DeadEnd {
                position: cell,
                degree,
            });
        }
    }
    Ok(())
}
