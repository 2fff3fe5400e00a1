//! Collision checking for candidate piece placements.

use crate::grid::Grid;
use crate::piece::Piece;

/// True if any occupied cell of `piece` is left of column 0, right of the last
/// column, below the last row, or on a filled grid cell.
///
/// Cells above the top edge (y < 0) never collide. The same predicate guards
/// falling, sliding, rotating and spawning.
pub fn collides(piece: &Piece, grid: &Grid) -> bool {
    let cols = grid.cols() as i32;
    let rows = grid.rows() as i32;
    piece
        .cells()
        .any(|(px, py)| px < 0 || px >= cols || py >= rows || (py >= 0 && grid.is_occupied(px, py)))
}
