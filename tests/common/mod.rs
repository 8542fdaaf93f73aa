// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use duct_search::{Grid, Heuristics, PathSearch, SearchContext, SearchOptions, Strategy};

/// The worked example from the problem statement.
pub const WORKED_EXAMPLE: &str = "4 3\n2 0 0 0\n0 0 0 0\n0 0 3 1\n";

/// Build a grid from input codes, panicking on invalid input.
pub fn grid(width: usize, height: usize, codes: &[u8]) -> Grid {
    Grid::from_codes(width, height, codes)
        .unwrap_or_else(|e| panic!("invalid test grid {}x{}: {}", width, height, e))
}

/// A fully open grid with START in the top-left and END in the bottom-right corner.
pub fn open_corners(width: usize, height: usize) -> Grid {
    let mut codes = vec![0u8; width * height];
    codes[0] = 2;
    codes[width * height - 1] = 3;
    grid(width, height, &codes)
}

pub fn options(heuristics: Heuristics, strategy: Strategy) -> SearchOptions {
    SearchOptions {
        heuristics,
        strategy,
    }
}

/// Count on a fresh context, returning the context for inspection.
pub fn count(grid: &Grid, options: SearchOptions) -> (u64, SearchContext) {
    let mut ctx = SearchContext::new(grid.clone());
    let count = PathSearch::new(options).count_paths(&mut ctx);
    (count, ctx)
}

/// Every combination of heuristics and strategy the engine supports.
pub fn all_configurations() -> Vec<SearchOptions> {
    let heuristics = [
        Heuristics::none(),
        Heuristics::default(),
        Heuristics {
            degree: false,
            connectivity: true,
        },
        Heuristics::all(),
    ];
    let strategies = [Strategy::Recursive, Strategy::Iterative];
    heuristics
        .iter()
        .flat_map(|&h| strategies.iter().map(move |&s| options(h, s)))
        .collect()
}
