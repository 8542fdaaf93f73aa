// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking search for complete ducts.
//!
//! This module implements the depth-first search that counts Hamiltonian
//! paths from START to END. The engine coordinates with the trail to undo
//! visitation marks on backtracking, and with the [`Pruner`] to abandon
//! doomed branches early.
//!
//! # Algorithm
//!
//! Starting on START with a duct of length 1, each node:
//! 1. Counts 1 if it stands on END and the duct covers every open cell
//! 2. Otherwise runs the enabled heuristics; a detection returns 0
//! 3. Otherwise tries each free neighbour in [`Direction::ALL`] order,
//!    marking it, searching from it, and rewinding the mark afterwards
//!
//! Reaching END early is not special-cased: the node is expanded like any
//! other, and since END is then marked no completion can follow.
//!
//! # Strategies
//!
//! - [`Strategy::Recursive`]: plain recursion, depth bounded by the number
//!   of open cells
//! - [`Strategy::Iterative`]: explicit stack of frames with trail
//!   checkpoints, for grids large enough to threaten the thread stack
//!
//! Both produce identical counts and statistics.
//!
//! # Example
//!
//! ```
//! use duct_search::{Grid, PathSearch, SearchContext, SearchOptions};
//!
//! let grid: Grid = "4 3\n2 0 0 0\n0 0 0 0\n0 0 3 1\n".parse().unwrap();
//! let mut ctx = SearchContext::new(grid);
//! let mut search = PathSearch::new(SearchOptions::default());
//!
//! assert_eq!(search.count_paths(&mut ctx), 2);
//! ```

mod iterative;

use crate::context::SearchContext;
use crate::grid::{Direction, Grid, Position};
use crate::pruning::{Heuristics, Pruner};
use crate::state::Counters;

/// How the search walks the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    Recursive,
    Iterative,
}

/// Search configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOptions {
    pub heuristics: Heuristics,
    pub strategy: Strategy,
}

/// Outcome of arriving on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// The duct is complete.
    Complete,
    /// A heuristic proved the branch dead.
    Pruned,
    /// Keep extending the duct from this cell.
    Expand,
}

/// Counts complete ducts over a [`SearchContext`].
///
/// The engine holds only configuration and scratch buffers; all search
/// state lives in the context, so one engine can be reused across grids.
#[derive(Debug, Clone, Default)]
pub struct PathSearch {
    options: SearchOptions,
    pruner: Pruner,
}

impl PathSearch {
    pub fn new(options: SearchOptions) -> Self {
        Self {
            options,
            pruner: Pruner::new(options.heuristics),
        }
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// Count the Hamiltonian paths from the grid's START cell to its END cell.
    ///
    /// The context must be at rest (only walls and START marked), which is
    /// how [`SearchContext::new`] creates it and how this method leaves it.
    /// Statistics accumulate in `ctx.statistics` across calls.
    pub fn count_paths(&mut self, ctx: &mut SearchContext) -> u64 {
        debug_assert!(ctx.is_at_rest(), "search started on a context in use");
        let start = ctx.grid().start();
        log::debug!(
            "Counting ducts from {} to {} over {} open cells ({:?})",
            start,
            ctx.grid().end(),
            ctx.grid().total_open(),
            self.options
        );

        let checkpoint = ctx.trail.checkpoint();
        let count = match self.options.strategy {
            Strategy::Recursive => self.search(ctx, start, 1),
            Strategy::Iterative => self.search_iterative(ctx),
        };
        ctx.rewind_to(checkpoint);
        debug_assert!(ctx.is_at_rest(), "search left cells marked");

        log::debug!("Found {} ducts: {}", count, ctx.statistics);
        count
    }

    /// Classify the node standing on `current` with a duct of `length` cells.
    fn evaluate(&mut self, ctx: &mut SearchContext, current: Position, length: usize) -> Step {
        ctx.statistics.increment_counter(Counters::NodesVisited);

        let grid = ctx.grid();
        if current == grid.end() && length == grid.total_open() {
            ctx.statistics.increment_counter(Counters::PathsFound);
            return Step::Complete;
        }

        if let Err(reason) = self.pruner.check(ctx, current, length) {
            ctx.statistics.record_prune(&reason);
            return Step::Pruned;
        }
        Step::Expand
    }

    fn search(&mut self, ctx: &mut SearchContext, current: Position, length: usize) -> u64 {
        match self.evaluate(ctx, current, length) {
            Step::Complete => return 1,
            Step::Pruned => return 0,
            Step::Expand => {}
        }

        let mut total = 0;
        for direction in Direction::ALL {
            let Some(next) = ctx.grid().neighbor(current, direction) else {
                continue;
            };
            if !ctx.visited.is_free(next) {
                continue;
            }
            let checkpoint = ctx.enter(next);
            total += self.search(ctx, next, length + 1);
            ctx.rewind_to(checkpoint);
        }
        total
    }
}

/// Count complete ducts through `grid` with the default options.
///
/// Convenience wrapper that builds a fresh context and engine.
pub fn count_paths(grid: &Grid) -> u64 {
    let mut ctx = SearchContext::new(grid.clone());
    PathSearch::new(SearchOptions::default()).count_paths(&mut ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_with(codes: &[u8], width: usize, height: usize, options: SearchOptions) -> u64 {
        let grid = Grid::from_codes(width, height, codes).unwrap();
        let mut ctx = SearchContext::new(grid);
        PathSearch::new(options).count_paths(&mut ctx)
    }

    #[test]
    fn test_worked_example() {
        let grid = Grid::from_codes(4, 3, &[2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 1]).unwrap();
        assert_eq!(count_paths(&grid), 2);
    }

    #[test]
    fn test_two_cells() {
        let grid = Grid::from_codes(2, 1, &[2, 3]).unwrap();
        assert_eq!(count_paths(&grid), 1);
    }

    #[test]
    fn test_end_reached_early_is_not_counted() {
        // 2 3 0: the only route to cell 2 passes through END.
        let options = SearchOptions::default();
        assert_eq!(count_with(&[2, 3, 0], 3, 1, options), 0);

        let options = SearchOptions {
            heuristics: Heuristics::none(),
            ..SearchOptions::default()
        };
        assert_eq!(count_with(&[2, 3, 0], 3, 1, options), 0);
    }

    #[test]
    fn test_statistics_recorded() {
        let grid = Grid::from_codes(3, 3, &[2, 0, 0, 0, 0, 0, 0, 0, 3]).unwrap();
        let mut ctx = SearchContext::new(grid);
        let count = PathSearch::new(SearchOptions::default()).count_paths(&mut ctx);

        assert_eq!(count, 2);
        assert_eq!(ctx.statistics.get(Counters::PathsFound), 2);
        assert!(ctx.statistics.get(Counters::NodesVisited) >= 9);
    }

    #[test]
    fn test_heuristics_reduce_work() {
        let mut codes = [0u8; 20];
        codes[0] = 2;
        codes[19] = 3;
        let grid = Grid::from_codes(5, 4, &codes).unwrap();

        let mut plain = SearchContext::new(grid.clone());
        let plain_count = PathSearch::new(SearchOptions {
            heuristics: Heuristics::none(),
            ..SearchOptions::default()
        })
        .count_paths(&mut plain);

        let mut pruned = SearchContext::new(grid);
        let pruned_count = PathSearch::new(SearchOptions {
            heuristics: Heuristics::all(),
            ..SearchOptions::default()
        })
        .count_paths(&mut pruned);

        assert_eq!(plain_count, 20);
        assert_eq!(pruned_count, 20);
        assert_eq!(plain.statistics.pruned(), 0);
        assert!(
            pruned.statistics.get(Counters::NodesVisited)
                < plain.statistics.get(Counters::NodesVisited)
        );
    }
}
