//! Command-line flags.

use clap::Parser;
use routecalc_core::SymbolSet;

use crate::session::SessionConfig;

/// Interactive calculator for the cheapest route across a terrain map.
#[derive(Debug, Parser)]
#[command(name = "routecalc")]
#[command(about = "Find the cheapest route across a map of buildings and water")]
pub struct Args {
    /// Create a map with this many rows at start-up
    #[arg(long, requires = "cols")]
    pub rows: Option<i32>,

    /// Create a map with this many columns at start-up
    #[arg(long, requires = "rows")]
    pub cols: Option<i32>,

    /// Draw maps with ASCII characters instead of emoji
    #[arg(long)]
    pub ascii: bool,

    /// Do not repeat the option list before every prompt
    #[arg(long, short)]
    pub quiet: bool,
}

impl Args {
    /// Session settings selected by the flags.
    pub fn config(&self) -> SessionConfig {
        SessionConfig {
            symbols: if self.ascii {
                SymbolSet::ASCII
            } else {
                SymbolSet::EMOJI
            },
            quiet: self.quiet,
        }
    }

    /// Map size requested with `--rows`/`--cols`, if any.
    pub fn initial_size(&self) -> Option<(i32, i32)> {
        self.rows.zip(self.cols)
    }
}
