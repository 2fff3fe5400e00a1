//! Shapes module - the piece catalog and shape rotation
//!
//! A shape is a small boolean matrix in the piece's local frame. The catalog
//! pairs each of the seven kinds with its spawn matrix and color.

use arrayvec::ArrayVec;

use crate::types::{Rgb, ShapeKind, MAX_SHAPE_DIM};

/// Occupied cell of a shape, as (local_x, local_y).
pub type LocalCell = (i32, i32);

/// Occupied cells of one shape. Never allocates.
pub type ShapeCells = ArrayVec<LocalCell, { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

/// A `height` x `width` occupancy matrix, both at most `MAX_SHAPE_DIM`.
///
/// Entries outside `height` x `width` are always false, so derived equality
/// compares only the live region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    filled: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from text rows; `#` marks an occupied cell.
    ///
    /// Panics on an empty pattern, ragged rows, or rows longer than
    /// `MAX_SHAPE_DIM`. Usable in const context.
    pub const fn from_pattern(pattern: &[&str]) -> Self {
        assert!(!pattern.is_empty() && pattern.len() <= MAX_SHAPE_DIM);
        let width = pattern[0].len();
        assert!(width > 0 && width <= MAX_SHAPE_DIM);

        let mut filled = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut y = 0;
        while y < pattern.len() {
            let row = pattern[y].as_bytes();
            assert!(row.len() == width);
            let mut x = 0;
            while x < width {
                filled[y][x] = row[x] == b'#';
                x += 1;
            }
            y += 1;
        }

        Self {
            width: width as u8,
            height: pattern.len() as u8,
            filled,
        }
    }

    pub fn width(&self) -> i32 {
        self.width as i32
    }

    pub fn height(&self) -> i32 {
        self.height as i32
    }

    /// Whether local cell (x, y) is occupied. Out-of-range cells are empty.
    pub fn is_filled(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return false;
        }
        self.filled[y as usize][x as usize]
    }

    /// Occupied cells in row-major order.
    pub fn cells(&self) -> ShapeCells {
        let mut out = ShapeCells::new();
        for y in 0..self.height() {
            for x in 0..self.width() {
                if self.is_filled(x, y) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    /// Rotate 90° clockwise.
    ///
    /// Output row `i` is input column `i` read bottom to top, so width and
    /// height swap.
    pub fn rotate_cw(&self) -> Self {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut filled = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (i, out_row) in filled.iter_mut().enumerate().take(w) {
            for (j, out_cell) in out_row.iter_mut().enumerate().take(h) {
                *out_cell = self.filled[h - 1 - j][i];
            }
        }
        Self {
            width: self.height,
            height: self.width,
            filled,
        }
    }

    /// Render as text rows, mainly for test failure output.
    pub fn to_pattern(&self) -> Vec<String> {
        (0..self.height())
            .map(|y| {
                (0..self.width())
                    .map(|x| if self.is_filled(x, y) { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }
}

/// One catalog entry: a kind, its spawn shape and its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub kind: ShapeKind,
    pub shape: Shape,
    pub color: Rgb,
}

/// The seven-entry reference catalog, in `ShapeKind::ALL` order.
pub const CATALOG: [CatalogEntry; 7] = [
    CatalogEntry {
        kind: ShapeKind::I,
        shape: Shape::from_pattern(&["####"]),
        color: Rgb::new(0x00, 0xFF, 0xFF),
    },
    CatalogEntry {
        kind: ShapeKind::O,
        shape: Shape::from_pattern(&["##", "##"]),
        color: Rgb::new(0xFF, 0xFF, 0x00),
    },
    CatalogEntry {
        kind: ShapeKind::T,
        shape: Shape::from_pattern(&["###", ".#."]),
        color: Rgb::new(0xFF, 0x00, 0xFF),
    },
    CatalogEntry {
        kind: ShapeKind::Z,
        shape: Shape::from_pattern(&["##.", ".##"]),
        color: Rgb::new(0x00, 0xFF, 0x00),
    },
    CatalogEntry {
        kind: ShapeKind::S,
        shape: Shape::from_pattern(&[".##", "##."]),
        color: Rgb::new(0xFF, 0x00, 0x00),
    },
    CatalogEntry {
        kind: ShapeKind::J,
        shape: Shape::from_pattern(&["#..", "###"]),
        color: Rgb::new(0x00, 0x00, 0xFF),
    },
    CatalogEntry {
        kind: ShapeKind::L,
        shape: Shape::from_pattern(&["..#", "###"]),
        color: Rgb::new(0xFF, 0xA5, 0x00),
    },
];

/// Catalog entry for a kind.
pub fn catalog_entry(kind: ShapeKind) -> &'static CatalogEntry {
    &CATALOG[kind.index()]
}
