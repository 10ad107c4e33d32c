//! Batch driver: one independent run per input line.

use rayon::prelude::*;
use tracing::{debug, info_span, Level};

use crate::config::GridConfig;
use crate::error::SimError;
use crate::input::parse_line;
use crate::state::{RunReport, Simulation};

/// Parse and run a single line on a fresh grid.
pub fn simulate_line(line: &str, config: &GridConfig) -> Result<RunReport, SimError> {
    let placements = parse_line(line)?;
    debug!(tokens = placements.len(), "parsed line");

    let mut sim = Simulation::new(config);
    for placement in placements {
        sim.place(placement)?;
    }

    if tracing::enabled!(Level::DEBUG) {
        debug!("final grid:\n{}", sim.grid());
    }
    let report = sim.finish();
    debug!(
        height = report.height,
        rows_cleared = report.stats.rows_cleared,
        "run finished"
    );
    Ok(report)
}

/// Runs every line in parallel; results keep input order.
/// Lines are raw bytes so one undecodable line fails on its own.
pub fn simulate_lines<S>(lines: &[S], config: &GridConfig) -> Vec<Result<RunReport, SimError>>
where
    S: AsRef<[u8]> + Sync,
{
    lines
        .par_iter()
        .enumerate()
        .map(|(i, line)| run_numbered(i, line.as_ref(), config))
        .collect()
}

/// Same as [`simulate_lines`] on the calling thread.
pub fn simulate_lines_sequential<S>(
    lines: &[S],
    config: &GridConfig,
) -> Vec<Result<RunReport, SimError>>
where
    S: AsRef<[u8]>,
{
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| run_numbered(i, line.as_ref(), config))
        .collect()
}

fn run_numbered(index: usize, line: &[u8], config: &GridConfig) -> Result<RunReport, SimError> {
    let span = info_span!("run", line = index + 1);
    let _enter = span.enter();
    let line = std::str::from_utf8(line).map_err(|e| SimError::InvalidUtf8 {
        valid_up_to: e.valid_up_to(),
    })?;
    simulate_line(line, config)
}
