//! Engine configuration.
//!
//! [`EngineConfig::default`] is the canonical game: a 20x10 grid, the seven
//! tetrominoes, tiered scoring, a level every 10 lines and a 500ms drop interval
//! shrinking by 50ms per level down to 100ms. Everything is serde-friendly so
//! hosts can load overrides from a file; missing fields fall back to the defaults.
//!
//! [`EngineConfig::validate`] checks the whole thing and compiles the shape table.
//! Nothing else in the engine re-checks these values.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::pieces::{get_shape, Shape};
use crate::scoring::{LevelCurve, ScoringRule};
use crate::types::{
    ColorId, PieceKind, BASE_DROP_MS, DEFAULT_COLS, DEFAULT_ROWS, DROP_STEP_MS, LINES_PER_LEVEL,
    MIN_DROP_MS, SOFT_DROP_DIVISOR, START_LEVEL,
};

/// Where a freshly spawned piece's bounding box starts vertically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpawnPlacement {
    /// Empty leading rows of the shape start above the field, so its first
    /// filled row appears on row 0.
    #[default]
    HideEmptyRows,
    /// The bounding box starts on row 0.
    TopAligned,
}

/// One entry of the shape table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeSpec {
    pub name: String,
    pub color: ColorId,
    /// Text rows, `#` filled and `.` empty
    pub rows: Vec<String>,
}

impl ShapeSpec {
    pub fn canonical(kind: PieceKind) -> Self {
        Self {
            name: kind.as_str().to_string(),
            color: kind.color(),
            rows: get_shape(kind).to_rows(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub rows: u16,
    pub cols: u16,
    pub shapes: Vec<ShapeSpec>,
    pub scoring: ScoringRule,
    pub start_level: u32,
    pub lines_per_level: u32,
    pub base_drop_interval_ms: u32,
    pub drop_interval_step_ms: u32,
    pub min_drop_interval_ms: u32,
    pub soft_drop_divisor: u32,
    pub spawn: SpawnPlacement,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            shapes: PieceKind::ALL.iter().map(|&k| ShapeSpec::canonical(k)).collect(),
            scoring: ScoringRule::default(),
            start_level: START_LEVEL,
            lines_per_level: LINES_PER_LEVEL,
            base_drop_interval_ms: BASE_DROP_MS,
            drop_interval_step_ms: DROP_STEP_MS,
            min_drop_interval_ms: MIN_DROP_MS,
            soft_drop_divisor: SOFT_DROP_DIVISOR,
            spawn: SpawnPlacement::default(),
        }
    }
}

/// A compiled shape table entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeEntry {
    pub name: String,
    pub color: ColorId,
    pub shape: Shape,
}

/// Validated shape table (never empty)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeTable {
    entries: Vec<ShapeEntry>,
}

impl ShapeTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ShapeEntry> {
        self.entries.get(index)
    }

    /// Entry for a random draw; out-of-range indices wrap around
    pub fn pick(&self, index: usize) -> &ShapeEntry {
        &self.entries[index % self.entries.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShapeEntry> {
        self.entries.iter()
    }
}

impl EngineConfig {
    /// Same as the default but with a different grid size
    pub fn with_grid(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Only the given canonical pieces, in order
    pub fn with_pieces(mut self, kinds: &[PieceKind]) -> Self {
        self.shapes = kinds.iter().map(|&k| ShapeSpec::canonical(k)).collect();
        self
    }

    pub fn level_curve(&self) -> LevelCurve {
        LevelCurve {
            start_level: self.start_level,
            lines_per_level: self.lines_per_level,
            base_interval_ms: self.base_drop_interval_ms,
            step_ms: self.drop_interval_step_ms,
            min_interval_ms: self.min_drop_interval_ms,
        }
    }

    /// Check every field and compile the shape table
    pub fn validate(&self) -> Result<ShapeTable, ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.lines_per_level == 0 {
            return Err(ConfigError::ZeroLinesPerLevel);
        }
        if self.base_drop_interval_ms == 0 {
            return Err(ConfigError::ZeroDropInterval);
        }
        if self.drop_interval_step_ms == 0 {
            return Err(ConfigError::ZeroDropStep);
        }
        if self.min_drop_interval_ms == 0 || self.min_drop_interval_ms > self.base_drop_interval_ms {
            return Err(ConfigError::BadDropFloor {
                min: self.min_drop_interval_ms,
                base: self.base_drop_interval_ms,
            });
        }
        if self.soft_drop_divisor == 0 {
            return Err(ConfigError::ZeroSoftDropDivisor);
        }
        if let ScoringRule::Tiered { points } = &self.scoring {
            if points.is_empty() {
                return Err(ConfigError::EmptyScoreTable);
            }
        }
        if self.shapes.is_empty() {
            return Err(ConfigError::NoShapes);
        }

        let mut entries = Vec::with_capacity(self.shapes.len());
        for spec in &self.shapes {
            let shape = Shape::parse(&spec.name, spec.rows.as_slice())?;
            // Either orientation has to fit or the piece could never rotate in place.
            let longest = shape.rows().max(shape.cols());
            if longest > self.rows as usize || longest > self.cols as usize {
                return Err(ConfigError::ShapeExceedsGrid {
                    name: spec.name.clone(),
                    rows: shape.rows(),
                    cols: shape.cols(),
                    grid_rows: self.rows,
                    grid_cols: self.cols,
                });
            }
            entries.push(ShapeEntry {
                name: spec.name.clone(),
                color: spec.color,
                shape,
            });
        }

        Ok(ShapeTable { entries })
    }
}
