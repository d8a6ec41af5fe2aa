//! Scoring module - line clear points, levels and drop intervals
//!
//! Points for a lock depend only on how many rows it cleared. Two rules exist:
//! - `Tiered` (default): a per-count table, 40/100/300/1200 for 1-4 rows.
//!   Counts past the end of the table score the last entry.
//! - `Linear`: a flat amount per row (10 in the simplest variant of the game).
//!
//! Levels advance every `lines_per_level` cleared lines and each level-up shortens the
//! drop interval by a fixed step, never going below the floor.

use serde::{Deserialize, Serialize};

use crate::types::{LINEAR_POINTS_PER_ROW, TIERED_LINE_SCORES};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoringRule {
    Linear { per_row: u32 },
    Tiered { points: Vec<u32> },
}

impl Default for ScoringRule {
    fn default() -> Self {
        ScoringRule::Tiered {
            points: TIERED_LINE_SCORES.to_vec(),
        }
    }
}

impl ScoringRule {
    /// The flat 10-points-per-row rule
    pub fn linear() -> Self {
        ScoringRule::Linear {
            per_row: LINEAR_POINTS_PER_ROW,
        }
    }

    /// Points for clearing `rows` rows with one lock
    pub fn points(&self, rows: usize) -> u32 {
        if rows == 0 {
            return 0;
        }
        match self {
            ScoringRule::Linear { per_row } => per_row.saturating_mul(rows as u32),
            ScoringRule::Tiered { points } => points
                .get(rows - 1)
                .or_else(|| points.last())
                .copied()
                .unwrap_or(0),
        }
    }
}

/// Level thresholds and the drop interval curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelCurve {
    pub start_level: u32,
    pub lines_per_level: u32,
    pub base_interval_ms: u32,
    pub step_ms: u32,
    pub min_interval_ms: u32,
}

impl LevelCurve {
    /// Level reached after clearing `total_lines` since the session began.
    ///
    /// Saturates at `u32::MAX`.
    pub fn level_for_lines(&self, total_lines: u32) -> u32 {
        self.start_level
            .saturating_add(total_lines / self.lines_per_level.max(1))
    }

    /// Drop interval at `level`, clamped at the floor
    pub fn interval_ms(&self, level: u32) -> u32 {
        let ups = level.saturating_sub(self.start_level);
        self.base_interval_ms
            .saturating_sub(self.step_ms.saturating_mul(ups))
            .max(self.min_interval_ms)
    }
}

/// Soft drop interval: base interval divided by the divisor, at least 1ms
pub fn soft_drop_interval_ms(base_interval: u32, divisor: u32) -> u32 {
    (base_interval / divisor.max(1)).max(1)
}
