//! stack-height - reads placement lines and prints the final stack height of each.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use stack_engine::{simulate_lines, simulate_lines_sequential, GridConfig, RunReport, SimError};

#[derive(Parser, Debug)]
#[command(name = "stack-height", version)]
struct Args {
    /// Read lines from this file instead of stdin.
    #[arg(long)]
    input: Option<PathBuf>,

    /// JSON grid config, e.g. {"width": 10, "height": 100}.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width (overrides --config).
    #[arg(long)]
    width: Option<usize>,

    /// Grid height (overrides --config).
    #[arg(long)]
    height: Option<usize>,

    /// Print this instead of skipping a line that fails.
    #[arg(long)]
    sentinel: Option<String>,

    /// Run lines one after another on the main thread.
    #[arg(long)]
    sequential: bool,

    /// -v info, -vv debug (dumps final grids), -vvv trace. RUST_LOG wins when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(args: &Args) -> Result<GridConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            GridConfig::from_json(&json)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => GridConfig::default(),
    };
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    config.validate().context("grid dimensions")?;
    Ok(config)
}

/// Splits on `\n` without decoding; each line is decoded when it runs.
fn read_raw_lines<R: BufRead>(reader: R) -> io::Result<Vec<Vec<u8>>> {
    reader.split(b'\n').collect()
}

fn read_lines(args: &Args) -> Result<Vec<Vec<u8>>> {
    match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening input {}", path.display()))?;
            read_raw_lines(BufReader::new(file))
                .with_context(|| format!("reading input {}", path.display()))
        }
        None => read_raw_lines(io::stdin().lock()).context("reading stdin"),
    }
}

/// One height per successful line; failed lines print the sentinel or nothing.
/// Returns the number of failed lines.
fn write_results<W: Write>(
    out: &mut W,
    results: &[Result<RunReport, SimError>],
    sentinel: Option<&str>,
) -> io::Result<usize> {
    let mut failed = 0;
    for (i, result) in results.iter().enumerate() {
        match result {
            Ok(report) => writeln!(out, "{}", report.height)?,
            Err(e) => {
                failed += 1;
                warn!(line = i + 1, error = %e, "line aborted");
                if let Some(s) = sentinel {
                    writeln!(out, "{s}")?;
                }
            }
        }
    }
    Ok(failed)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = load_config(&args)?;
    let lines = read_lines(&args)?;
    info!(
        lines = lines.len(),
        width = config.width,
        height = config.height,
        "simulating"
    );

    let results = if args.sequential {
        simulate_lines_sequential(&lines, &config)
    } else {
        simulate_lines(&lines, &config)
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let failed = write_results(&mut out, &results, args.sentinel.as_deref())?;
    out.flush()?;

    if failed > 0 {
        info!(failed, "some lines produced no height");
    }
    Ok(())
}
