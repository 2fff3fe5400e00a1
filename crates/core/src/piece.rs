//! Piece module - the active falling piece and its pure transforms
//!
//! Transforms never mutate in place; they return a new `Piece` that the game
//! commits only after it passes the collision check.

use crate::shape::{catalog_entry, Shape};
use crate::types::{Rgb, ShapeKind};

/// A shape placed on the grid.
///
/// `x`, `y` is the grid position of the shape's local origin (top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub shape: Shape,
    pub color: Rgb,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Create a catalog piece at its spawn position on a grid `cols` wide.
    ///
    /// Spawn centers the shape horizontally (`cols / 2 - width / 2`, floor
    /// division) on row 0.
    pub fn spawn(kind: ShapeKind, cols: u16) -> Self {
        let entry = catalog_entry(kind);
        Self {
            kind,
            shape: entry.shape,
            color: entry.color,
            x: cols as i32 / 2 - entry.shape.width() / 2,
            y: 0,
        }
    }

    /// Copy of this piece moved by (dx, dy).
    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Copy of this piece rotated 90° clockwise about its origin.
    ///
    /// Position is unchanged; there are no wall kicks.
    pub fn rotate(&self) -> Self {
        Self {
            shape: self.shape.rotate_cw(),
            ..*self
        }
    }

    /// Absolute grid cells covered by this piece.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .cells()
            .into_iter()
            .map(move |(lx, ly)| (self.x + lx, self.y + ly))
    }
}
