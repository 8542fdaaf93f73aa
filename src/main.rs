// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `duct`: count cooling-duct routes for a datacenter grid.
//!
//! Reads the grid from a file or stdin and prints the number of ducts.
//! Set `DUCT_LOG` (e.g. `DUCT_LOG=debug`) to enable logging.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use duct_search::{Grid, Heuristics, PathSearch, SearchContext, SearchOptions, Strategy};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Plain recursion
    Recursive,
    /// Explicit stack, for very large grids
    Iterative,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Recursive => Strategy::Recursive,
            StrategyArg::Iterative => Strategy::Iterative,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "duct",
    version,
    about = "Count the ways one duct can pass through every owned room of a datacenter"
)]
struct Cli {
    /// Grid file: `width height` then width*height codes (0 open, 1 blocked, 2 start, 3 end).
    /// Reads stdin when omitted or `-`.
    input: Option<PathBuf>,

    /// Search strategy
    #[arg(long, value_enum, default_value_t = StrategyArg::Recursive)]
    strategy: StrategyArg,

    /// Disable the degree-check pruning heuristic
    #[arg(long)]
    no_degree: bool,

    /// Enable the connectivity pruning heuristic
    #[arg(long)]
    connectivity: bool,

    /// Print search statistics to stderr
    #[arg(long)]
    stats: bool,
}

impl Cli {
    fn options(&self) -> SearchOptions {
        SearchOptions {
            heuristics: Heuristics {
                degree: !self.no_degree,
                connectivity: self.connectivity,
            },
            strategy: self.strategy.into(),
        }
    }

    fn read_input(&self) -> Result<String> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
                .with_context(|| format!("Failed to read grid file: {:?}", path)),
            _ => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read grid from stdin")?;
                Ok(text)
            }
        }
    }
}

fn main() -> Result<()> {
    if std::env::var("DUCT_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("DUCT_LOG")
            .write_style("DUCT_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let cli = Cli::parse();
    log::debug!("duct options: {:?}", cli);

    let text = cli.read_input()?;
    let grid: Grid = text.parse().context("Invalid grid")?;

    let mut ctx = SearchContext::new(grid);
    let mut search = PathSearch::new(cli.options());
    let count = search.count_paths(&mut ctx);

    println!("{}", count);
    if cli.stats {
        eprintln!("{}", ctx.statistics);
    }
    Ok(())
}
