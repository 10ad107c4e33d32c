//! collision detection - walls, floor, settled cells

use stack_core::{Grid, Shape};

/// does the shape at (x, y) hit the floor, a wall, or a filled cell?
/// Rows at or above the grid's height are open air; overflow is caught after settling.
#[inline]
pub fn collides(grid: &Grid, shape: &Shape, x: i32, y: i32) -> bool {
    let width = grid.width() as i32;
    let height = grid.height_limit() as i32;
    shape.minos.iter().any(|&(dc, dr)| {
        let gx = x + dc as i32;
        let gy = y + dr as i32;
        if gy < 0 || gx < 0 || gx >= width {
            return true;
        }
        gy < height && !grid.get(gx as usize, gy as usize).is_empty()
    })
}

/// can we place here? (just !collides)
pub fn can_place(grid: &Grid, shape: &Shape, x: i32, y: i32) -> bool {
    !collides(grid, shape, x, y)
}

/// Lowest y the shape reaches falling straight down at column `x`.
/// Starts at the grid ceiling, above every filled cell.
#[inline]
pub fn resting_y(grid: &Grid, shape: &Shape, x: i32) -> i32 {
    let mut landing_y = grid.ceiling() as i32;
    debug_assert!(can_place(grid, shape, x, landing_y));
    while !collides(grid, shape, x, landing_y - 1) {
        landing_y -= 1;
    }
    landing_y
}
