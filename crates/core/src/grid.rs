//! Grid module - the occupancy matrix of locked cells
//!
//! The grid is `rows x cols`, fixed at construction. Each cell is empty or holds one color.
//! Storage is a flat row-major vector for cache locality; row shifts are `copy_within`.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.

use crate::error::ConfigError;
use crate::types::{Cell, ColorId};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: u16,
    cols: u16,
    /// Row-major cells (y * cols + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid. Zero rows or columns is a configuration error.
    pub fn new(rows: u16, cols: u16) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyGrid { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![None; rows as usize * cols as usize],
        })
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.is_inside(x, y) {
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

    /// 0 <= x < cols and 0 <= y < rows
    pub fn is_inside(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.cols as i32 && y < self.rows as i32
    }

    /// Cell at (x, y), or `None` when out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// True only for in-bounds filled cells. Out of bounds is the caller's concern.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Write a cell. Returns false if out of bounds.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Fill (x, y) with `color`. Returns false if out of bounds.
    pub fn paint(&mut self, x: i32, y: i32, color: ColorId) -> bool {
        self.set(x, y, Some(color))
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Cells of row `y`, or `None` past the bottom
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        let width = self.cols as usize;
        self.cells.get(y * width..(y + 1) * width)
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    pub fn is_row_empty(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_none()))
    }

    /// Indices of completely filled rows, top to bottom
    pub fn full_rows(&self) -> Vec<usize> {
        (0..self.rows as usize)
            .filter(|&y| self.is_row_full(y))
            .collect()
    }

    /// Remove the given rows and insert as many empty rows at the top.
    ///
    /// Survivors keep their relative order. Indices may come in any order;
    /// duplicates and out-of-range entries are ignored. Returns the number of rows removed.
    pub fn remove_rows(&mut self, indices: &[usize]) -> usize {
        let height = self.rows as usize;
        let width = self.cols as usize;

        let mut doomed = vec![false; height];
        for &y in indices {
            if y < height {
                doomed[y] = true;
            }
        }

        // Compact survivors toward the bottom, scanning upward.
        let mut write_y = height;
        for read_y in (0..height).rev() {
            if doomed[read_y] {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(None);
        write_y
    }

    /// Row-major view of all cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Build a grid from text rows, `.` for empty and a digit for a color.
    ///
    /// Any other non-`.` character becomes color 0. Handy for tests and fixtures.
    pub fn from_rows(rows: &[&str]) -> Result<Self, ConfigError> {
        let height = rows.len() as u16;
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0) as u16;
        let mut grid = Self::new(height, width)?;
        for (y, line) in rows.iter().enumerate() {
            for (x, ch) in line.chars().take(width as usize).enumerate() {
                if ch == '.' {
                    continue;
                }
                let color = ch.to_digit(10).map(|d| d as u8).unwrap_or(0);
                grid.paint(x as i32, y as i32, ColorId(color));
            }
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_rejects_zero_dimensions() {
        assert_eq!(
            Grid::new(0, 10),
            Err(ConfigError::EmptyGrid { rows: 0, cols: 10 })
        );
        assert!(Grid::new(20, 0).is_err());
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(20, 10).unwrap();
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(9, 0), Some(9));
        assert_eq!(grid.index(0, 1), Some(10));
        assert_eq!(grid.index(9, 19), Some(199));
        assert_eq!(grid.index(-1, 0), None);
        assert_eq!(grid.index(10, 0), None);
        assert_eq!(grid.index(0, 20), None);
    }

    #[test]
    fn test_grid_flat_storage() {
        let mut grid = Grid::new(20, 10).unwrap();
        grid.paint(0, 0, ColorId(1));
        grid.paint(5, 10, ColorId(2));

        assert_eq!(grid.cells[0], Some(ColorId(1)));
        assert_eq!(grid.cells[10 * 10 + 5], Some(ColorId(2)));
        assert_eq!(grid.filled_count(), 2);
    }

    #[test]
    fn test_row_past_bottom_is_none() {
        let grid = Grid::from_rows(&["1.", "22"]).unwrap();
        assert_eq!(grid.row(1), Some(&[Some(ColorId(2)), Some(ColorId(2))][..]));
        assert_eq!(grid.row(2), None);
        assert!(!grid.is_row_full(2));
        assert!(!grid.is_row_empty(2));
    }

    #[test]
    fn test_remove_rows_ignores_duplicates_and_out_of_range() {
        let mut grid = Grid::from_rows(&["1...", "2222", "3..."]).unwrap();
        let removed = grid.remove_rows(&[1, 1, 7]);
        assert_eq!(removed, 1);
        assert!(grid.is_row_empty(0));
        assert_eq!(grid.get(0, 1), Some(Some(ColorId(1))));
        assert_eq!(grid.get(0, 2), Some(Some(ColorId(3))));
    }

    #[test]
    fn test_from_rows_parses_colors() {
        let grid = Grid::from_rows(&[".5", "x."]).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 2);
        assert_eq!(grid.get(1, 0), Some(Some(ColorId(5))));
        assert_eq!(grid.get(0, 1), Some(Some(ColorId(0))));
        assert_eq!(grid.get(0, 0), Some(None));
    }
}
