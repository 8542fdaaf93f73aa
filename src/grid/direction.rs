// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Movement directions.

/// One of the four orthogonal moves. Diagonal moves are not allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Priority order in which the search tries moves.
    ///
    /// The order does not affect the final count, only the order in which
    /// paths are discovered.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];
}
