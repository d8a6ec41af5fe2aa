//! Collision predicate.
//!
//! Cells above the field (y < 0) never collide, which lets pieces spawn with
//! their empty leading rows sticking out of the top.

use crate::grid::Grid;
use crate::pieces::Piece;

/// True when any filled cell of `piece` is left of, right of, or below the grid,
/// or lands on an occupied cell.
pub fn would_collide(piece: &Piece, grid: &Grid) -> bool {
    let cols = grid.cols() as i32;
    let rows = grid.rows() as i32;
    piece.cells().iter().any(|&(x, y)| {
        x < 0 || x >= cols || y >= rows || (y >= 0 && grid.is_occupied(x, y))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{I_SHAPE, O_SHAPE};
    use crate::types::ColorId;

    fn grid() -> Grid {
        Grid::new(20, 10).unwrap()
    }

    #[test]
    fn test_inside_empty_grid_is_clear() {
        let piece = Piece::new(O_SHAPE, ColorId(1), 4, 0);
        assert!(!would_collide(&piece, &grid()));
    }

    #[test]
    fn test_walls_and_floor() {
        let g = grid();
        assert!(would_collide(&Piece::new(O_SHAPE, ColorId(1), -1, 0), &g));
        assert!(would_collide(&Piece::new(O_SHAPE, ColorId(1), 9, 0), &g));
        assert!(would_collide(&Piece::new(O_SHAPE, ColorId(1), 0, 19), &g));
        assert!(!would_collide(&Piece::new(O_SHAPE, ColorId(1), 8, 18), &g));
    }

    #[test]
    fn test_cells_above_field_do_not_collide() {
        // The I bar sits on its second row, so y = -1 puts it on row 0.
        let piece = Piece::new(I_SHAPE, ColorId(0), 3, -1);
        assert!(!would_collide(&piece, &grid()));

        // Entirely above the field is still fine.
        let piece = Piece::new(O_SHAPE, ColorId(1), 3, -5);
        assert!(!would_collide(&piece, &grid()));
    }

    #[test]
    fn test_occupied_cell_collides() {
        let mut g = grid();
        g.paint(5, 1, ColorId(3));
        assert!(would_collide(&Piece::new(O_SHAPE, ColorId(1), 4, 0), &g));
        assert!(!would_collide(&Piece::new(O_SHAPE, ColorId(1), 6, 0), &g));
    }
}
