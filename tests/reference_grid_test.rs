// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Larger datacenters with known duct counts.
//!
//! The full-size 7x8 grid takes minutes in a debug build; run it with
//! `cargo test --release -- --ignored`.

mod common;

use common::{all_configurations, count, open_corners, options};
use duct_search::state::Counters;
use duct_search::{Grid, Heuristics, Strategy};

const DATACENTER_7X8: &str = "\
7 8
2 0 0 0 0 0 0
0 0 0 0 0 0 0
0 0 0 0 0 0 0
0 0 0 0 0 0 0
0 0 0 0 0 0 0
0 0 0 0 0 0 0
0 0 0 0 0 0 0
3 0 0 0 0 1 1
";

#[test]
#[ignore]
fn test_datacenter_7x8() {
    let grid: Grid = DATACENTER_7X8.parse().unwrap();
    assert_eq!(grid.total_open(), 54);

    let (found, ctx) = count(&grid, options(Heuristics::all(), Strategy::Iterative));
    assert_eq!(found, 301716);
    assert_eq!(ctx.statistics.get(Counters::PathsFound), 301716);
    assert!(ctx.is_at_rest());
}

#[test]
fn test_datacenter_7x5_all_configurations() {
    let grid = open_corners(7, 5);
    assert_eq!(grid.total_open(), 35);

    for opts in all_configurations() {
        let (found, ctx) = count(&grid, opts);
        assert_eq!(found, 1670, "{:?}", opts);
        assert_eq!(ctx.statistics.get(Counters::PathsFound), 1670);
        assert!(ctx.is_at_rest(), "{:?} left state behind", opts);
    }
}
