// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Explicit-stack search.
//!
//! Same tree walk as the recursive search, with each recursion frame held in
//! a [`StackEntry`]. The trail checkpoint saved in each entry is what the
//! recursive search keeps in its local variable: popping an entry rewinds to
//! it, undoing exactly the mark that pushed the entry.

use super::{PathSearch, Step};
use crate::context::SearchContext;
use crate::grid::{Direction, Position};

/// Stack entry tracking one cell of the current duct.
#[derive(Debug)]
struct StackEntry {
    /// Cell this frame stands on.
    position: Position,

    /// Duct length including `position`.
    length: usize,

    /// Index into [`Direction::ALL`] of the next move to try.
    next_direction: usize,

    /// Trail checkpoint taken before `position` was marked.
    trail_checkpoint: usize,
}

impl PathSearch {
    pub(super) fn search_iterative(&mut self, ctx: &mut SearchContext) -> u64 {
        let start = ctx.grid().start();
        match self.evaluate(ctx, start, 1) {
            Step::Complete => return 1,
            Step::Pruned => return 0,
            Step::Expand => {}
        }

        let mut stack = Vec::with_capacity(ctx.grid().total_open());
        stack.push(StackEntry {
            position: start,
            length: 1,
            next_direction: 0,
            // START was marked when the context was built, not via the trail.
            trail_checkpoint: ctx.trail.checkpoint(),
        });

        let mut total = 0;
        while let Some(entry) = stack.last_mut() {
            if entry.next_direction >= Direction::ALL.len() {
                // All moves tried: backtrack off this cell.
                let checkpoint = entry.trail_checkpoint;
                stack.pop();
                ctx.rewind_to(checkpoint);
                continue;
            }

            let direction = Direction::ALL[entry.next_direction];
            entry.next_direction += 1;
            let (current, length) = (entry.position, entry.length);

            let Some(next) = ctx.grid().neighbor(current, direction) else {
                continue;
            };
            if !ctx.visited.is_free(next) {
                continue;
            }

            let checkpoint = ctx.enter(next);
            match self.evaluate(ctx, next, length + 1) {
                Step::Expand => stack.push(StackEntry {
                    position: next,
                    length: length + 1,
                    next_direction: 0,
                    trail_checkpoint: checkpoint,
                }),
                Step::Complete => {
                    total += 1;
                    ctx.rewind_to(checkpoint);
                }
                Step::Pruned => ctx.rewind_to(checkpoint),
            }
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::{PathSearch, SearchOptions, Strategy};
    use crate::grid::Grid;
    use crate::pruning::Heuristics;
    use crate::SearchContext;

    fn run(grid: &Grid, strategy: Strategy, heuristics: Heuristics) -> (u64, SearchContext) {
        let mut ctx = SearchContext::new(grid.clone());
        let count = PathSearch::new(SearchOptions {
            heuristics,
            strategy,
        })
        .count_paths(&mut ctx);
        (count, ctx)
    }

    #[test]
    fn test_matches_recursive_on_worked_example() {
        let grid = Grid::from_codes(4, 3, &[2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 1]).unwrap();

        let (recursive, rctx) = run(&grid, Strategy::Recursive, Heuristics::default());
        let (iterative, ictx) = run(&grid, Strategy::Iterative, Heuristics::default());

        assert_eq!(recursive, 2);
        assert_eq!(iterative, 2);
        // Same tree, same work.
        assert_eq!(rctx.statistics, ictx.statistics);
        assert!(ictx.is_at_rest());
    }

    #[test]
    fn test_single_step_duct() {
        let grid = Grid::from_codes(1, 2, &[2, 3]).unwrap();
        let (count, ctx) = run(&grid, Strategy::Iterative, Heuristics::none());
        assert_eq!(count, 1);
        assert!(ctx.is_at_rest());
    }

    #[test]
    fn test_no_duct() {
        let grid = Grid::from_codes(2, 2, &[2, 0, 0, 3]).unwrap();
        let (count, ctx) = run(&grid, Strategy::Iterative, Heuristics::all());
        assert_eq!(count, 0);
        assert!(ctx.is_at_rest());
    }
}
