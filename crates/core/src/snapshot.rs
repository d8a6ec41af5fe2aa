//! Read-only view of the game for renderers.
//!
//! A snapshot is filled by [`GameState::snapshot_into`](crate::GameState::snapshot_into)
//! and can be reused frame after frame without reallocating.

use crate::pieces::CellOffsets;
use crate::types::{Cell, ColorId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    /// Absolute grid coordinates of the filled cells
    pub cells: CellOffsets,
    pub color: ColorId,
    pub x: i32,
    pub y: i32,
}

impl ActiveSnapshot {
    pub fn covers(&self, x: i32, y: i32) -> bool {
        self.cells.iter().any(|&c| c == (x, y))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub rows: u16,
    pub cols: u16,
    /// Row-major locked cells
    pub cells: Vec<Cell>,
    pub active: ActiveSnapshot,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
    pub soft_drop: bool,
    pub game_over: bool,
    pub session_id: u32,
}

impl GameSnapshot {
    /// Locked cell at `(x, y)`; `None` when empty or outside the grid
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        if x >= self.cols as usize || y >= self.rows as usize {
            return None;
        }
        self.cells
            .get(y * self.cols as usize + x)
            .copied()
            .flatten()
    }

    /// What a renderer should draw at `(x, y)`: the active piece wins over locked cells
    pub fn visible_cell(&self, x: usize, y: usize) -> Cell {
        if self.active.covers(x as i32, y as i32) {
            return Some(self.active.color);
        }
        self.cell(x, y)
    }

    pub fn clear(&mut self) {
        self.rows = 0;
        self.cols = 0;
        self.cells.clear();
        self.active = ActiveSnapshot::default();
        self.score = 0;
        self.lines = 0;
        self.level = 0;
        self.drop_interval_ms = 0;
        self.soft_drop = false;
        self.game_over = false;
        self.session_id = 0;
    }
}
