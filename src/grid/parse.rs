// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Textual grid format.
//!
//! Two integers `width height`, followed by `width * height` cell codes in
//! row-major order. Tokens are separated by any whitespace, so both the
//! one-row-per-line layout and a single line are accepted:
//!
//! ```text
//! 4 3
//! 2 0 0 0
//! 0 0 0 0
//! 0 0 3 1
//! ```

use std::str::FromStr;

use super::{CellState, Grid, GridError};

fn parse_number(token: &str) -> Result<u64, GridError> {
    token.parse::<u64>().map_err(|_| GridError::InvalidToken {
        token: token.to_string(),
    })
}

fn parse_dimension<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    name: &'static str,
) -> Result<usize, GridError> {
    let token = tokens.next().ok_or(GridError::MissingDimension(name))?;
    usize::try_from(parse_number(token)?).map_err(|_| GridError::InvalidToken {
        token: token.to_string(),
    })
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace().peekable();
        if tokens.peek().is_none() {
            return Err(GridError::Empty);
        }

        let width = parse_dimension(&mut tokens, "width")?;
        let height = parse_dimension(&mut tokens, "height")?;

        let cells = tokens
            .enumerate()
            .map(|(index, token)| {
                let value = parse_number(token)?;
                u8::try_from(value)
                    .ok()
                    .and_then(|code| CellState::try_from(code).ok())
                    .ok_or(GridError::InvalidCell { index, value })
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!(
            "Parsed {}x{} grid with {} cell codes",
            width,
            height,
            cells.len()
        );
        Grid::new(width, height, cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;

    #[test]
    fn test_parse_sample() {
        let grid: Grid = "4 3\n2 0 0 0\n0 0 0 0\n0 0 3 1\n".parse().unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.start(), Position::new(0));
        assert_eq!(grid.end(), Position::new(10));
        assert_eq!(grid.total_open(), 11);
    }

    #[test]
    fn test_parse_single_line() {
        let grid: Grid = "3 1 2 0 3".parse().unwrap();
        assert_eq!(grid.len(), 3);
        assert_eq!(grid.end(), Position::new(2));
    }

    #[test]
    fn test_display_parses_back() {
        let grid: Grid = "3 2\n2 0 1\n0 0 3\n".parse().unwrap();
        let reparsed: Grid = grid.to_string().parse().unwrap();
        assert_eq!(grid, reparsed);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Grid>(), Err(GridError::Empty));
        assert_eq!("  \n ".parse::<Grid>(), Err(GridError::Empty));
        assert_eq!(
            "4".parse::<Grid>(),
            Err(GridError::MissingDimension("height"))
        );
        assert_eq!(
            "4 x".parse::<Grid>(),
            Err(GridError::InvalidToken {
                token: "x".to_string()
            })
        );
        assert_eq!(
            "2 1 2 -3".parse::<Grid>(),
            Err(GridError::InvalidToken {
                token: "-3".to_string()
            })
        );
        assert_eq!(
            "2 1 2 9".parse::<Grid>(),
            Err(GridError::InvalidCell { index: 1, value: 9 })
        );
        assert_eq!(
            "2 1 2 3 0".parse::<Grid>(),
            Err(GridError::CellCountMismatch {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_parse_rejects_overflowing_dimensions() {
        assert_eq!(
            "18446744073709551615 2 2 3".parse::<Grid>(),
            Err(GridError::DimensionOverflow {
                width: usize::MAX,
                height: 2
            })
        );
        // An unchecked product wraps to 2, matching the two cells given.
        assert_eq!(
            "9223372036854775809 2 2 3".parse::<Grid>(),
            Err(GridError::DimensionOverflow {
                width: 9223372036854775809,
                height: 2
            })
        );
    }
}
