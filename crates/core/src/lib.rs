//! Stack core crate - shapes, cells, grid and placements.

mod board;
mod moves;
mod piece;

pub use board::{Cell, Grid, GridSizeError};
pub use moves::Placement;
pub use piece::{Shape, ShapeId, UnknownShape};
