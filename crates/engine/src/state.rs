//! Per-run simulation state.

use stack_core::{Grid, Placement};
use tracing::debug;

use crate::apply::{place, Settled};
use crate::config::GridConfig;
use crate::error::SimError;

/// Diagnostics for one run. Never part of the output height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub placements: u32,
    pub rows_cleared: u32,
}

/// Final result of one run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub height: usize,
    pub stats: RunStats,
}

/// One grid plus its counters, created fresh for every input line.
#[derive(Clone, Debug)]
pub struct Simulation {
    grid: Grid,
    stats: RunStats,
}

impl Simulation {
    pub fn new(config: &GridConfig) -> Self {
        Self {
            grid: config.new_grid(),
            stats: RunStats::default(),
        }
    }

    pub fn place(&mut self, placement: Placement) -> Result<Settled, SimError> {
        debug!(%placement, "incoming shape");
        let settled = place(&mut self.grid, placement)?;
        self.stats.placements += 1;
        self.stats.rows_cleared += settled.rows_cleared;
        if settled.rows_cleared > 0 {
            debug!(
                rows = settled.rows_cleared,
                total = self.stats.rows_cleared,
                "cleared full rows"
            );
        }
        Ok(settled)
    }

    pub fn height(&self) -> usize {
        self.grid.stack_height()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    pub fn finish(self) -> RunReport {
        RunReport {
            height: self.height(),
            stats: self.stats,
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(&GridConfig::default())
    }
}
