//! Grid and line clearing tests

use blockfall::core::{clear_full_rows, ConfigError, Grid};
use blockfall::types::ColorId;

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new(20, 10).unwrap();
    assert_eq!((grid.rows(), grid.cols()), (20, 10));
    for y in 0..20 {
        for x in 0..10 {
            assert_eq!(grid.get(x, y), Some(None), "cell ({x}, {y}) should be empty");
        }
    }
}

#[test]
fn test_grid_rejects_zero_dimensions() {
    assert_eq!(Grid::new(0, 10), Err(ConfigError::EmptyGrid { rows: 0, cols: 10 }));
    assert!(Grid::new(20, 0).is_err());
}

#[test]
fn test_grid_out_of_bounds() {
    let mut grid = Grid::new(4, 3).unwrap();
    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, -1), None);
    assert_eq!(grid.get(3, 0), None);
    assert_eq!(grid.get(0, 4), None);
    assert!(!grid.paint(3, 0, ColorId(1)));
    assert!(!grid.is_occupied(-1, 2));
    assert_eq!(grid.filled_count(), 0);
}

#[test]
fn test_grid_set_and_clear_cell() {
    let mut grid = Grid::new(4, 3).unwrap();
    assert!(grid.paint(1, 2, ColorId(4)));
    assert_eq!(grid.get(1, 2), Some(Some(ColorId(4))));
    assert!(grid.is_occupied(1, 2));
    assert!(grid.set(1, 2, None));
    assert!(!grid.is_occupied(1, 2));
}

#[test]
fn test_remove_rows_one_and_three_of_four() {
    // Rows 1 and 3 full: former rows 0 and 2 end up at rows 2 and 3.
    let mut grid = Grid::from_rows(&["1...", "2222", ".3.3", "4444"]).unwrap();
    let cleared = clear_full_rows(&mut grid);
    assert_eq!(cleared.rows, vec![1, 3]);

    assert!(grid.is_row_empty(0));
    assert!(grid.is_row_empty(1));
    assert_eq!(grid.row(2), Some(&[Some(ColorId(1)), None, None, None][..]));
    assert_eq!(
        grid.row(3),
        Some(&[None, Some(ColorId(3)), None, Some(ColorId(3))][..])
    );
    assert_eq!(grid.row(4), None);
}

#[test]
fn test_clear_without_full_rows_is_identity() {
    let mut grid = Grid::from_rows(&["....", "1.1.", ".222", "333."]).unwrap();
    let before = grid.clone();
    assert_eq!(clear_full_rows(&mut grid).count(), 0);
    assert_eq!(grid, before);
}

#[test]
fn test_clear_more_than_four_rows() {
    let mut grid = Grid::from_rows(&["..5", "111", "222", "333", "444", "555", "666"]).unwrap();
    let cleared = clear_full_rows(&mut grid);
    assert_eq!(cleared.count(), 6);
    assert_eq!(grid.filled_count(), 1);
    assert_eq!(grid.get(2, 6), Some(Some(ColorId(5))));
}

#[test]
fn test_remove_rows_ignores_duplicates_and_out_of_range() {
    let mut grid = Grid::from_rows(&["1..", "2..", "3.."]).unwrap();
    assert_eq!(grid.remove_rows(&[2, 2, 9]), 1);
    assert_eq!(grid.get(0, 2), Some(Some(ColorId(2))));
    assert_eq!(grid.get(0, 1), Some(Some(ColorId(1))));
    assert!(grid.is_row_empty(0));
}
