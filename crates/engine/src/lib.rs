//! stack-engine - gravity drop, row clearing and the per-line batch driver.
//!
//! Every input line is an independent run on a fresh grid.

pub mod apply;
pub mod batch;
pub mod collision;
pub mod config;
pub mod error;
pub mod input;
pub mod state;

pub use apply::{place, Settled};
pub use batch::{simulate_line, simulate_lines, simulate_lines_sequential};
pub use collision::{can_place, collides, resting_y};
pub use config::{ConfigError, GridConfig};
pub use error::SimError;
pub use input::{parse_line, parse_token};
pub use state::{RunReport, RunStats, Simulation};
