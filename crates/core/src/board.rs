//! grid representation - one flat row-major Vec of tagged cells
//! row 0 is the floor, rows grow upward

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::ShapeId;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(ShapeId),
}

impl Cell {
    #[inline(always)]
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Filled(id) => id.tag(),
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        if c == '.' {
            return Some(Cell::Empty);
        }
        ShapeId::ALL
            .into_iter()
            .find(|id| id.tag() == c)
            .map(Cell::Filled)
    }
}

/// Dimensions a grid cannot be allocated with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GridSizeError {
    #[error("grid width must be at least 1")]
    ZeroWidth,
    #[error("grid height must be at least 1")]
    ZeroHeight,
    #[error("grid of {width}x{height} exceeds {max} cells", max = Grid::MAX_CELLS)]
    TooLarge { width: usize, height: usize },
}

/// Fixed-size grid, `width * height` cells addressed as `y * width + x`.
/// `ceiling` is one past the highest row that may hold material; every row
/// at or above it is empty.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    ceiling: usize,
}

impl Grid {
    pub const DEFAULT_WIDTH: usize = 10;
    pub const DEFAULT_HEIGHT: usize = 100;
    /// Upper bound on `width * height` (64M cells).
    pub const MAX_CELLS: usize = 1 << 26;

    /// Cell count for a `width x height` grid, if one can be allocated.
    pub fn check_dimensions(width: usize, height: usize) -> Result<usize, GridSizeError> {
        if width == 0 {
            return Err(GridSizeError::ZeroWidth);
        }
        if height == 0 {
            return Err(GridSizeError::ZeroHeight);
        }
        width
            .checked_mul(height)
            .filter(|&n| n <= Self::MAX_CELLS)
            .ok_or(GridSizeError::TooLarge { width, height })
    }

    /// All-empty grid. Dimensions are fixed for the grid's lifetime.
    pub fn try_new(width: usize, height: usize) -> Result<Self, GridSizeError> {
        let len = Self::check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Empty; len],
            ceiling: 0,
        })
    }

    /// Like [`Grid::try_new`].
    ///
    /// # Panics
    /// If either dimension is zero or the cell count exceeds [`Grid::MAX_CELLS`].
    pub fn new(width: usize, height: usize) -> Self {
        match Self::try_new(width, height) {
            Ok(grid) => grid,
            Err(e) => panic!("{e}"),
        }
    }

    #[inline(always)]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Allocated row count (the grid's hard upper bound).
    #[inline(always)]
    pub fn height_limit(&self) -> usize {
        self.height
    }

    #[inline(always)]
    pub fn ceiling(&self) -> usize {
        self.ceiling
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let idx = self.index(x, y);
        self.cells[idx] = cell;
        if !cell.is_empty() {
            self.ceiling = self.ceiling.max(y + 1);
        }
    }

    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).iter().all(|c| !c.is_empty())
    }

    pub fn is_row_empty(&self, y: usize) -> bool {
        y >= self.ceiling || self.row(y).iter().all(|c| c.is_empty())
    }

    /// Clear every full row, shifting the rows above down, until none remain.
    /// Returns the number of rows removed.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0u32;
        let mut y = 0;
        // rows below y are not full and a shift never touches them, so
        // staying at y is the same as rescanning from the floor
        while y < self.ceiling {
            if self.is_row_full(y) {
                self.remove_row(y);
                cleared += 1;
            } else {
                y += 1;
            }
        }
        cleared
    }

    fn remove_row(&mut self, y: usize) {
        let w = self.width;
        self.cells.copy_within((y + 1) * w.., y * w);
        let top = self.cells.len() - w;
        self.cells[top..].fill(Cell::Empty);
        self.ceiling -= 1;
    }

    /// Rows counted from the floor up to the first entirely empty row.
    pub fn stack_height(&self) -> usize {
        (0..self.ceiling)
            .find(|&y| self.is_row_empty(y))
            .unwrap_or(self.ceiling)
    }

    pub fn filled_count(&self) -> usize {
        self.cells[..self.ceiling * self.width]
            .iter()
            .filter(|c| !c.is_empty())
            .count()
    }

    fn row_string(&self, y: usize) -> String {
        self.row(y).iter().map(|c| c.symbol()).collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

/// Serialized as `height` row strings, floor first, e.g. `"qq........"`.
impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let rows: Vec<String> = (0..self.height).map(|y| self.row_string(y)).collect();
        rows.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows: Vec<String> = Vec::deserialize(deserializer)?;
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let mut grid = Grid::try_new(width, rows.len())
            .map_err(<D::Error as serde::de::Error>::custom)?;
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(serde::de::Error::custom(format!(
                    "row {y} has {} cells, expected {width}",
                    row.chars().count()
                )));
            }
            for (x, c) in row.chars().enumerate() {
                let cell = Cell::from_symbol(c).ok_or_else(|| {
                    <D::Error as serde::de::Error>::custom(format!(
                        "illegal cell '{c}' at ({x}, {y})"
                    ))
                })?;
                grid.set(x, y, cell);
            }
        }
        Ok(grid)
    }
}

/// Occupied rows, topmost first.
impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in (0..self.ceiling).rev() {
            writeln!(f, "{}", self.row_string(y))?;
        }
        Ok(())
    }
}
