use stack_core::{Cell, Grid, Placement, Shape};
use tracing::trace;

use crate::collision::resting_y;
use crate::error::SimError;

/// Where a placement came to rest and how many rows its cascade removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settled {
    pub y: i32,
    pub rows_cleared: u32,
}

/// Drop a shape straight down, lock it, then clear every full row.
/// The grid is left untouched when an error is returned.
pub fn place(grid: &mut Grid, placement: Placement) -> Result<Settled, SimError> {
    if !placement.fits_width(grid.width()) {
        return Err(SimError::OutOfBounds {
            placement,
            width: grid.width(),
        });
    }

    let shape = placement.shape_def();
    let y = resting_y(grid, shape, placement.x);
    if y as usize + shape.height as usize > grid.height_limit() {
        return Err(SimError::GridOverflow {
            placement,
            y,
            height: grid.height_limit(),
        });
    }

    lock(grid, shape, placement.x as usize, y as usize);
    let rows_cleared = grid.clear_full_rows();
    trace!(%placement, y, rows_cleared, "locked");

    Ok(Settled { y, rows_cleared })
}

fn lock(grid: &mut Grid, shape: &Shape, x: usize, y: usize) {
    for &(dc, dr) in shape.minos {
        let gx = x + dc as usize;
        let gy = y + dr as usize;
        // resting_y only stops on empty cells
        debug_assert!(grid.get(gx, gy).is_empty());
        grid.set(gx, gy, Cell::Filled(shape.id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::collides;
    use stack_core::ShapeId;

    #[test]
    fn test_place_q_on_empty() {
        let mut grid = Grid::default();
        let settled = place(&mut grid, Placement::new(ShapeId::Q, 0)).unwrap();
        assert_eq!(settled, Settled { y: 0, rows_cleared: 0 });
        assert_eq!(grid.get(0, 0), Cell::Filled(ShapeId::Q));
        assert_eq!(grid.get(1, 1), Cell::Filled(ShapeId::Q));
        assert_eq!(grid.filled_count(), 4);
        assert_eq!(grid.stack_height(), 2);
    }

    #[test]
    fn test_resting_position_is_unique() {
        let mut grid = Grid::default();
        place(&mut grid, Placement::new(ShapeId::I, 0)).unwrap();
        let before = grid.clone();
        let settled = place(&mut grid, Placement::new(ShapeId::T, 1)).unwrap();
        let t = ShapeId::T.shape();
        assert!(!collides(&before, t, 1, settled.y));
        assert!(collides(&before, t, 1, settled.y - 1));
    }

    #[test]
    fn test_i_completes_row() {
        let mut grid = Grid::default();
        place(&mut grid, Placement::new(ShapeId::I, 0)).unwrap();
        place(&mut grid, Placement::new(ShapeId::I, 4)).unwrap();
        place(&mut grid, Placement::new(ShapeId::Q, 8)).unwrap();
        // row 0 full, Q's upper half stays
        assert_eq!(grid.stack_height(), 1);
        assert_eq!(grid.filled_count(), 2);
        assert_eq!(grid.get(8, 0), Cell::Filled(ShapeId::Q));
    }

    #[test]
    fn test_out_of_bounds_rejected_before_search() {
        let mut grid = Grid::default();
        let err = place(&mut grid, Placement::new(ShapeId::I, 8)).unwrap_err();
        assert!(matches!(err, SimError::OutOfBounds { width: 10, .. }));
        assert!(matches!(
            place(&mut grid, Placement::new(ShapeId::Q, -1)),
            Err(SimError::OutOfBounds { .. })
        ));
        assert_eq!(grid.filled_count(), 0);
    }

    #[test]
    fn test_overflow_leaves_grid_untouched() {
        let mut grid = Grid::new(10, 5);
        place(&mut grid, Placement::new(ShapeId::L, 0)).unwrap();
        let before = grid.clone();
        let err = place(&mut grid, Placement::new(ShapeId::Q, 0)).unwrap_err();
        assert_eq!(
            err,
            SimError::GridOverflow {
                placement: Placement::new(ShapeId::Q, 0),
                y: 4,
                height: 5,
            }
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn test_exact_fit_to_top_is_allowed() {
        let mut grid = Grid::new(10, 4);
        place(&mut grid, Placement::new(ShapeId::Q, 0)).unwrap();
        let settled = place(&mut grid, Placement::new(ShapeId::Q, 0)).unwrap();
        assert_eq!(settled.y, 2);
        assert_eq!(grid.stack_height(), 4);
    }
}
