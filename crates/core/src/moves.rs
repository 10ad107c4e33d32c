//! Placement - a shape dropped with its leftmost column at `x`.

use crate::{Shape, ShapeId};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Placement {
    pub shape: ShapeId,
    pub x: i32,
}

impl Placement {
    pub fn new(shape: ShapeId, x: i32) -> Self {
        Self { shape, x }
    }

    #[inline]
    pub fn shape_def(&self) -> &'static Shape {
        self.shape.shape()
    }

    /// Does the bounding box stay within `0..width`?
    pub fn fits_width(&self, width: usize) -> bool {
        self.x >= 0 && (self.x as usize + self.shape_def().width as usize) <= width
    }
}

/// Token form, e.g. `Q0`.
impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.shape, self.x)
    }
}
