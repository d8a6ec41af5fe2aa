//! Line clearing.
//!
//! Full rows are collected first and removed in one pass, so any mix of
//! contiguous and scattered rows is handled the same way and no limit on how
//! many rows clear at once is assumed.

use crate::grid::Grid;

/// Rows removed by one clear, top to bottom (indices refer to the grid before removal)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearedRows {
    pub rows: Vec<usize>,
}

impl ClearedRows {
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Remove every full row from `grid`, shifting the rest down.
///
/// With no full rows the grid is left untouched.
pub fn clear_full_rows(grid: &mut Grid) -> ClearedRows {
    let rows = grid.full_rows();
    if !rows.is_empty() {
        grid.remove_rows(&rows);
        log::debug!("cleared rows {:?}", rows);
    }
    ClearedRows { rows }
}
