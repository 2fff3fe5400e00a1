//! Grid module - the fixed-size occupancy matrix
//!
//! Cells are stored in a flat row-major vector sized once at creation.
//! Coordinates: (x, y) where x is the column (left to right) and y the row
//! (top to bottom). Rows above the top edge (y < 0) are treated as free space so
//! freshly spawned or rotated pieces may poke above the board.

use crate::types::{Cell, GridError, Rgb};

/// The playfield: `rows` x `cols` cells, each empty or holding a color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: u16,
    cols: u16,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// Panics if either dimension is zero.
    pub fn new(rows: u16, cols: u16) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be non-zero");
        Self {
            rows,
            cols,
            cells: vec![None; rows as usize * cols as usize],
        }
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.cols as i32 || y < 0 || y >= self.rows as i32 {
            return None;
        }
        Some(y as usize * self.cols as usize + x as usize)
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Get cell at position (x, y). Returns None if out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// True iff (x, y) is in bounds and filled. Any y < 0 is unoccupied.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Write a color at (x, y), reporting out-of-range coordinates.
    pub fn try_set(&mut self, x: i32, y: i32, color: Rgb) -> Result<(), GridError> {
        let idx = self.index(x, y).ok_or(GridError::OutOfRange {
            x,
            y,
            cols: self.cols,
            rows: self.rows,
        })?;
        self.cells[idx] = Some(color);
        Ok(())
    }

    /// Write a color at (x, y).
    ///
    /// Writing outside the grid is a caller bug and panics.
    pub fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if let Err(err) = self.try_set(x, y, color) {
            panic!("{err}");
        }
    }

    /// Borrow row `y`. Returns None if out of bounds.
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.rows as usize {
            return None;
        }
        let width = self.cols as usize;
        let start = y * width;
        Some(&self.cells[start..start + width])
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Remove row `y` and insert an empty row at the top.
    ///
    /// Rows above `y` shift down by one. Returns false if `y` is out of bounds.
    pub fn clear_row(&mut self, y: usize) -> bool {
        if y >= self.rows as usize {
            return false;
        }

        let width = self.cols as usize;
        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..y * width, width);
        self.cells[..width].fill(None);

        true
    }

    /// Clear every full row and return how many were removed.
    ///
    /// Scans bottom to top. After a clear the same index is checked again,
    /// since the row that shifted into it may also be full.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = self.rows as usize;

        while y > 0 {
            if self.is_row_full(y - 1) {
                self.clear_row(y - 1);
                cleared += 1;
            } else {
                y -= 1;
            }
        }

        cleared
    }

    /// Number of filled cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Build a grid from text rows, one string per row.
    ///
    /// `.` is empty; any other character fills the cell with `color`.
    /// Missing rows are padded at the top, so a short picture describes the
    /// bottom of the board.
    ///
    /// ```
    /// use blockfall_core::Grid;
    /// use blockfall_core::types::Rgb;
    ///
    /// let grid = Grid::from_rows(4, 4, &["#..#", "####"], Rgb::new(9, 9, 9));
    /// assert!(grid.is_row_full(3));
    /// assert!(grid.is_occupied(3, 2));
    /// assert!(!grid.is_occupied(1, 2));
    /// ```
    pub fn from_rows(rows: u16, cols: u16, picture: &[&str], color: Rgb) -> Self {
        let mut grid = Self::new(rows, cols);
        let offset = rows as usize - picture.len().min(rows as usize);
        for (i, line) in picture.iter().take(rows as usize).enumerate() {
            for (x, ch) in line.chars().take(cols as usize).enumerate() {
                if ch != '.' {
                    grid.set(x as i32, (offset + i) as i32, color);
                }
            }
        }
        grid
    }
}
