//! Shape catalog - the seven fixed pieces and their occupied cells.

use thiserror::Error;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum ShapeId {
    Q,
    Z,
    S,
    T,
    I,
    L,
    J,
}

/// Identifier character is not in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("unknown shape identifier '{0}'")]
pub struct UnknownShape(pub char);

/// Fixed bounding box and the cells it occupies.
/// Mino offsets are (col, row), row 0 is the bottom of the box.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Shape {
    pub id: ShapeId,
    pub width: u8,
    pub height: u8,
    pub minos: &'static [(u8, u8)],
}

static CATALOG: [Shape; 7] = [
    Shape {
        id: ShapeId::Q,
        width: 2,
        height: 2,
        minos: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    // .zz on the bottom, zz. on top
    Shape {
        id: ShapeId::Z,
        width: 3,
        height: 2,
        minos: &[(1, 0), (2, 0), (0, 1), (1, 1)],
    },
    Shape {
        id: ShapeId::S,
        width: 3,
        height: 2,
        minos: &[(0, 0), (1, 0), (1, 1), (2, 1)],
    },
    // points down: single cell under a bar of three
    Shape {
        id: ShapeId::T,
        width: 3,
        height: 2,
        minos: &[(1, 0), (0, 1), (1, 1), (2, 1)],
    },
    Shape {
        id: ShapeId::I,
        width: 4,
        height: 1,
        minos: &[(0, 0), (1, 0), (2, 0), (3, 0)],
    },
    Shape {
        id: ShapeId::L,
        width: 2,
        height: 4,
        minos: &[(0, 0), (1, 0), (0, 1), (0, 2), (0, 3)],
    },
    Shape {
        id: ShapeId::J,
        width: 2,
        height: 4,
        minos: &[(0, 0), (1, 0), (1, 1), (1, 2), (1, 3)],
    },
];

impl ShapeId {
    pub const ALL: [ShapeId; 7] = [
        ShapeId::Q,
        ShapeId::Z,
        ShapeId::S,
        ShapeId::T,
        ShapeId::I,
        ShapeId::L,
        ShapeId::J,
    ];

    #[inline]
    pub fn shape(self) -> &'static Shape {
        Shape::get(self)
    }

    /// Identifier as written in input tokens.
    pub fn symbol(self) -> char {
        match self {
            ShapeId::Q => 'Q',
            ShapeId::Z => 'Z',
            ShapeId::S => 'S',
            ShapeId::T => 'T',
            ShapeId::I => 'I',
            ShapeId::L => 'L',
            ShapeId::J => 'J',
        }
    }

    /// Tag written into grid cells occupied by this shape.
    pub fn tag(self) -> char {
        self.symbol().to_ascii_lowercase()
    }
}

impl TryFrom<char> for ShapeId {
    type Error = UnknownShape;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        ShapeId::ALL
            .into_iter()
            .find(|id| id.symbol() == c)
            .ok_or(UnknownShape(c))
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Shape {
    /// Catalog lookup.
    #[inline]
    pub fn get(id: ShapeId) -> &'static Shape {
        &CATALOG[id as usize]
    }

    pub fn is_filled(&self, col: u8, row: u8) -> bool {
        self.minos.contains(&(col, row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Occupancy matrix, bottom row first.
    fn occupancy(shape: &Shape) -> Vec<Vec<bool>> {
        (0..shape.height)
            .map(|row| (0..shape.width).map(|col| shape.is_filled(col, row)).collect())
            .collect()
    }

    #[test]
    fn test_catalog_order_matches_ids() {
        for id in ShapeId::ALL {
            assert_eq!(Shape::get(id).id, id);
        }
    }

    #[test]
    fn test_minos_inside_bounding_box() {
        for id in ShapeId::ALL {
            let shape = id.shape();
            for &(col, row) in shape.minos {
                assert!(col < shape.width, "{id} col {col}");
                assert!(row < shape.height, "{id} row {row}");
            }
        }
    }

    #[test]
    fn test_every_row_and_column_used() {
        for id in ShapeId::ALL {
            let shape = id.shape();
            for row in 0..shape.height {
                assert!((0..shape.width).any(|c| shape.is_filled(c, row)));
            }
            for col in 0..shape.width {
                assert!((0..shape.height).any(|r| shape.is_filled(col, r)));
            }
        }
    }

    #[test]
    fn test_t_points_down() {
        let t = occupancy(ShapeId::T.shape());
        assert_eq!(t[0], vec![false, true, false]);
        assert_eq!(t[1], vec![true, true, true]);
    }

    #[test]
    fn test_l_and_j_feet() {
        let l = occupancy(ShapeId::L.shape());
        assert_eq!(l[0], vec![true, true]);
        assert_eq!(l[3], vec![true, false]);
        let j = occupancy(ShapeId::J.shape());
        assert_eq!(j[0], vec![true, true]);
        assert_eq!(j[3], vec![false, true]);
    }

    #[test]
    fn test_try_from_char() {
        assert_eq!(ShapeId::try_from('Q'), Ok(ShapeId::Q));
        assert_eq!(ShapeId::try_from('J'), Ok(ShapeId::J));
        assert_eq!(ShapeId::try_from('q'), Err(UnknownShape('q')));
        assert_eq!(ShapeId::try_from('X'), Err(UnknownShape('X')));
    }

    #[test]
    fn test_tags_are_lowercase() {
        assert_eq!(ShapeId::S.tag(), 's');
        assert_eq!(ShapeId::I.to_string(), "I");
    }
}
