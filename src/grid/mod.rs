// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The datacenter grid.
//!
//! This module contains the immutable board the search runs over:
//! - CellState: OPEN / BLOCKED / START / END
//! - Direction: the four orthogonal moves, in search priority order
//! - Position: row-major linear index of a cell
//! - Grid: the board itself, with adjacency queries
//!
//! A `Grid` is built once from input and never mutated. All mutable search
//! state lives in [`SearchContext`](crate::context::SearchContext).

pub mod cell;
pub mod direction;
pub mod errors;
pub mod parse;
pub mod position;

pub use cell::CellState;
pub use direction::Direction;
pub use errors::GridError;
pub use position::Position;

use std::fmt;

/// Rectangular board of `width × height` cells.
///
/// Invariants established by [`Grid::new`]:
/// - `width > 0` and `height > 0`
/// - `width * height` fits in a `usize`
/// - `cells.len() == width * height`
/// - exactly one START and exactly one END cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
    start: Position,
    end: Position,
    /// Number of cells that are not BLOCKED; the required path length.
    total_open: usize,
}

impl Grid {
    /// Build a grid from row-major cell states.
    ///
    /// This is the only place the grid is validated. The search never checks
    /// these conditions again.
    pub fn new(width: usize, height: usize, cells: Vec<CellState>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroDimension { width, height });
        }
        let expected = width
            .checked_mul(height)
            .ok_or(GridError::DimensionOverflow { width, height })?;
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                found: cells.len(),
            });
        }

        let mut start: Option<usize> = None;
        let mut end: Option<usize> = None;
        for (index, &cell) in cells.iter().enumerate() {
            match cell {
                CellState::Start => {
                    if let Some(first) = start {
                        return Err(GridError::DuplicateStart {
                            first,
                            second: index,
                        });
                    }
                    start = Some(index);
                }
                CellState::End => {
                    if let Some(first) = end {
                        return Err(GridError::DuplicateEnd {
                            first,
                            second: index,
                        });
                    }
                    end = Some(index);
                }
                CellState::Open | CellState::Blocked => {}
            }
        }
        let start = start.ok_or(GridError::MissingStart)?;
        let end = end.ok_or(GridError::MissingEnd)?;
        let total_open = cells.iter().filter(|cell| cell.is_open()).count();

        Ok(Self {
            width,
            height,
            cells,
            start: Position::new(start),
            end: Position::new(end),
            total_open,
        })
    }

    /// Build a grid from input codes (0 = open, 1 = blocked, 2 = start, 3 = end).
    pub fn from_codes(width: usize, height: usize, codes: &[u8]) -> Result<Self, GridError> {
        let cells = codes
            .iter()
            .enumerate()
            .map(|(index, &code)| {
                CellState::try_from(code).map_err(|value| GridError::InvalidCell {
                    index,
                    value: value as u64,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(width, height, cells)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells, `width * height`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least its start and end cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    /// Number of cells a complete duct must visit (every non-BLOCKED cell).
    pub fn total_open(&self) -> usize {
        self.total_open
    }

    pub fn cell_state(&self, position: Position) -> CellState {
        self.cells[position.index()]
    }

    pub fn row(&self, position: Position) -> usize {
        position.index() / self.width
    }

    pub fn column(&self, position: Position) -> usize {
        position.index() % self.width
    }

    /// The cell one step from `position` in `direction`, if it is on the board.
    ///
    /// LEFT and RIGHT never wrap onto the neighbouring row: the rightmost
    /// cell of a row has no right neighbour even though the next linear
    /// index exists.
    pub fn neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        let index = position.index();
        let next = match direction {
            Direction::Up => index.checked_sub(self.width),
            Direction::Down => Some(index + self.width).filter(|&next| next < self.len()),
            Direction::Left => (self.column(position) > 0).then(|| index - 1),
            Direction::Right => (self.column(position) + 1 < self.width).then(|| index + 1),
        };
        next.map(Position::new)
    }

    /// All on-board neighbours of `position`, in [`Direction::ALL`] order.
    pub fn neighbors(&self, position: Position) -> impl Iterator<Item = Position> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.neighbor(position, direction))
    }

    /// Every position on the board, in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        (0..self.len()).map(Position::new)
    }
}

/// Renders the grid in its input format: dimensions, then one row per line.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.width, self.height)?;
        for row in self.cells.chunks(self.width) {
            let line = row
                .iter()
                .map(|cell| cell.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
