use crate::piece::Piece;
use crate::types::Cell;

/// Read-only view of a session handed to render sinks.
///
/// `cells` is the locked grid only (row-major, `rows * cols`); the falling
/// piece is carried separately in `current`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub rows: u16,
    pub cols: u16,
    pub cells: Vec<Cell>,
    pub current: Piece,
    pub next: Piece,
    pub score: u32,
    pub lines: u32,
    pub over: bool,
}

impl GameSnapshot {
    /// Locked cell at (x, y), or None when out of bounds.
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        if x < 0 || y < 0 || x >= self.cols as i32 || y >= self.rows as i32 {
            return None;
        }
        self.cells
            .get(y as usize * self.cols as usize + x as usize)
            .copied()
    }

    /// Cell as it should be drawn: the falling piece over the locked grid.
    pub fn visible_cell(&self, x: i32, y: i32) -> Option<Cell> {
        let locked = self.cell(x, y)?;
        if self.current.cells().any(|c| c == (x, y)) {
            return Some(Some(self.current.color));
        }
        Some(locked)
    }
}
