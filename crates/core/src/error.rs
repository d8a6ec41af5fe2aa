//! Configuration errors.
//!
//! These only come out of construction. Once a [`crate::GameState`] exists every
//! operation on it is infallible: rejected moves are no-ops and game over is an event.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid must have at least one row and one column (got {rows}x{cols})")]
    EmptyGrid { rows: u16, cols: u16 },

    #[error("shape table is empty")]
    NoShapes,

    #[error("shape `{name}` has no rows")]
    EmptyShape { name: String },

    #[error("shape `{name}` is ragged: row {row} has {len} cells, expected {expected}")]
    RaggedShape {
        name: String,
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("shape `{name}` is {rows}x{cols}, larger than the {max}x{max} limit")]
    ShapeTooLarge {
        name: String,
        rows: usize,
        cols: usize,
        max: usize,
    },

    #[error("shape `{name}` has an unrecognised cell `{ch}` (use `#`/`X`/`1` or `.`/`0`/space)")]
    BadShapeCell { name: String, ch: char },

    #[error("shape `{name}` has no filled cells")]
    BlankShape { name: String },

    #[error("shape `{name}` ({rows}x{cols}) does not fit a {grid_rows}x{grid_cols} grid")]
    ShapeExceedsGrid {
        name: String,
        rows: usize,
        cols: usize,
        grid_rows: u16,
        grid_cols: u16,
    },

    #[error("tiered scoring needs at least one entry")]
    EmptyScoreTable,

    #[error("lines_per_level must be positive")]
    ZeroLinesPerLevel,

    #[error("base_drop_interval_ms must be positive")]
    ZeroDropInterval,

    #[error("drop_interval_step_ms must be positive")]
    ZeroDropStep,

    #[error("min_drop_interval_ms ({min}) must be between 1 and base_drop_interval_ms ({base})")]
    BadDropFloor { min: u32, base: u32 },

    #[error("soft_drop_divisor must be positive")]
    ZeroSoftDropDivisor,
}
