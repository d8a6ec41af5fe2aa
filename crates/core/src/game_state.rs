//! Game state module - owns the grid, the falling piece and the counters
//!
//! Every player command and every gravity step goes through here. Commands run
//! to completion: when a move ends in a lock, the merge, the line clear, the
//! scoring, the level check and the next spawn all happen before the call
//! returns. The host only decides *when* to call [`GameState::tick`], using
//! [`GameState::drop_interval_ms`].
//!
//! A spawn that collides ends the session. The grid and counters are reset on
//! the spot, a fresh piece is spawned and [`GameEvent::GameOver`] carries the
//! final numbers of the session that ended.

use log::{debug, info};

use crate::collision::would_collide;
use crate::config::{EngineConfig, ShapeTable, SpawnPlacement};
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::lines::clear_full_rows;
use crate::pieces::Piece;
use crate::rng::{RandomSource, StdRandom};
use crate::rotation::try_rotate;
use crate::scoring::{soft_drop_interval_ms, LevelCurve};
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, GameEvent};

/// What a single move or gravity step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// The piece moved
    Moved,
    /// The move was illegal and nothing changed
    Blocked,
    /// The piece locked and the next one spawned
    Locked { rows_cleared: u32 },
    /// The piece locked, the next spawn collided and the session was reset
    GameOver,
}

impl StepResult {
    /// Whether the grid or the active piece changed
    pub fn changed(&self) -> bool {
        !matches!(self, StepResult::Blocked)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = StdRandom> {
    config: EngineConfig,
    shapes: ShapeTable,
    curve: LevelCurve,
    grid: Grid,
    active: Piece,
    rng: R,
    score: u32,
    lines: u32,
    level: u32,
    /// Interval for the current level, before any soft drop adjustment.
    base_interval_ms: u32,
    soft_drop: bool,
    /// Set by the command whose lock ended the session, cleared by the next command.
    game_over: bool,
    /// Monotonic session id (increments on restart and game over).
    session_id: u32,
    /// Pieces spawned since construction.
    pieces_spawned: u32,
    /// Last lock/game over event (consumed by the host).
    last_event: Option<GameEvent>,
}

impl GameState<StdRandom> {
    /// Engine backed by a seeded `StdRng`
    pub fn with_seed(config: EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, StdRandom::seeded(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Validate `config` and start the first session
    pub fn new(config: EngineConfig, rng: R) -> Result<Self, ConfigError> {
        let shapes = config.validate()?;
        let curve = config.level_curve();
        let grid = Grid::new(config.rows, config.cols)?;
        let level = curve.start_level;

        let mut state = Self {
            active: Piece::new(shapes.pick(0).shape, shapes.pick(0).color, 0, 0),
            config,
            shapes,
            curve,
            grid,
            rng,
            score: 0,
            lines: 0,
            level,
            base_interval_ms: curve.interval_ms(level),
            soft_drop: false,
            game_over: false,
            session_id: 0,
            pieces_spawned: 0,
            last_event: None,
        };
        // An empty grid always has room for a validated shape.
        state.spawn();
        Ok(state)
    }

    // ---- queries ----

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn shapes(&self) -> &ShapeTable {
        &self.shapes
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access for setting up positions (puzzles, tests, tooling).
    ///
    /// The active piece is not re-checked against the new contents.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// True only right after the command that ended a session
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_soft_dropping(&self) -> bool {
        self.soft_drop
    }

    pub fn session_id(&self) -> u32 {
        self.session_id
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    /// Interval for the current level, ignoring soft drop
    pub fn base_drop_interval_ms(&self) -> u32 {
        self.base_interval_ms
    }

    /// Time the host should wait between gravity steps right now
    pub fn drop_interval_ms(&self) -> u32 {
        if self.soft_drop {
            soft_drop_interval_ms(self.base_interval_ms, self.config.soft_drop_divisor)
        } else {
            self.base_interval_ms
        }
    }

    /// Take the most recent event, leaving `None` behind
    pub fn take_last_event(&mut self) -> Option<GameEvent> {
        self.last_event.take()
    }

    pub fn last_event(&self) -> Option<GameEvent> {
        self.last_event
    }

    /// Fill `out` with the current state, reusing its allocations
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.grid.rows();
        out.cols = self.grid.cols();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());
        out.active.cells = self.active.cells();
        out.active.color = self.active.color;
        out.active.x = self.active.x;
        out.active.y = self.active.y;
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.drop_interval_ms = self.drop_interval_ms();
        out.soft_drop = self.soft_drop;
        out.game_over = self.game_over;
        out.session_id = self.session_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    // ---- commands ----

    /// Draw a shape and place it at the spawn position.
    ///
    /// Returns false when the placement collides. The piece is then left out
    /// of the grid and the caller decides what happens to the session.
    fn spawn(&mut self) -> bool {
        let index = self.rng.next_index(self.shapes.len());
        let entry = self.shapes.pick(index);
        let shape = entry.shape;

        let x = i32::from(self.grid.cols()) / 2 - (shape.width() as i32) / 2;
        let y = match self.config.spawn {
            SpawnPlacement::HideEmptyRows => -(shape.first_filled_row() as i32),
            SpawnPlacement::TopAligned => 0,
        };
        let piece = Piece::new(shape, entry.color, x, y);

        if would_collide(&piece, &self.grid) {
            debug!("spawn of {} at ({}, {}) blocked", entry.name, x, y);
            return false;
        }

        debug!("spawned {} at ({}, {})", entry.name, x, y);
        self.active = piece;
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        true
    }

    /// Move the active piece by `(dx, dy)`.
    ///
    /// A clear destination is committed. A blocked move straight down locks
    /// the piece; any other blocked move changes nothing.
    pub fn move_by(&mut self, dx: i32, dy: i32) -> StepResult {
        self.game_over = false;

        let candidate = self.active.translated(dx, dy);
        if !would_collide(&candidate, &self.grid) {
            self.active = candidate;
            return StepResult::Moved;
        }

        if dx == 0 && dy > 0 {
            return self.lock_active();
        }
        StepResult::Blocked
    }

    pub fn move_left(&mut self) -> bool {
        self.move_by(-1, 0).changed()
    }

    pub fn move_right(&mut self) -> bool {
        self.move_by(1, 0).changed()
    }

    /// One row down, locking when blocked
    pub fn move_down(&mut self) -> StepResult {
        self.move_by(0, 1)
    }

    /// Gravity step, called by the host every [`Self::drop_interval_ms`]
    pub fn tick(&mut self) -> StepResult {
        self.move_by(0, 1)
    }

    /// Rotate clockwise, kicking sideways if needed. Returns false if abandoned.
    pub fn rotate(&mut self) -> bool {
        self.game_over = false;

        match try_rotate(&self.active, &self.grid) {
            Some(outcome) => {
                self.active = outcome.piece;
                true
            }
            None => false,
        }
    }

    /// Hold or release soft drop
    pub fn soft_drop(&mut self, on: bool) {
        self.soft_drop = on;
    }

    /// Throw the current session away and start a new one
    pub fn restart(&mut self) {
        info!(
            "restart: score={} lines={} level={}",
            self.score, self.lines, self.level
        );
        self.reset_session();
        self.game_over = false;
        self.last_event = None;
    }

    /// Forward a host command. Returns whether anything changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::MoveDown => self.move_down().changed(),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDropOn => {
                let changed = !self.soft_drop;
                self.soft_drop(true);
                changed
            }
            GameAction::SoftDropOff => {
                let changed = self.soft_drop;
                self.soft_drop(false);
                changed
            }
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Merge the active piece, clear rows, score, level up and spawn the next piece
    fn lock_active(&mut self) -> StepResult {
        let piece = self.active;
        // Cells still above the field have nowhere to go and are dropped.
        for (x, y) in piece.cells() {
            self.grid.paint(x, y, piece.color);
        }

        let cleared = clear_full_rows(&mut self.grid);
        let rows_cleared = cleared.count() as u32;
        let points = self.config.scoring.points(cleared.count());
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(rows_cleared);

        let level_before = self.level;
        self.level = self.curve.level_for_lines(self.lines);
        let level_up = self.level != level_before;
        if level_up {
            self.base_interval_ms = self.curve.interval_ms(self.level);
            info!(
                "level up: {} -> {} (interval {}ms)",
                level_before, self.level, self.base_interval_ms
            );
        }

        debug!(
            "locked at ({}, {}): rows={} points={} score={}",
            piece.x, piece.y, rows_cleared, points, self.score
        );
        self.last_event = Some(GameEvent::Locked {
            rows_cleared,
            points,
            level_up,
        });

        if self.spawn() {
            StepResult::Locked { rows_cleared }
        } else {
            self.end_session();
            StepResult::GameOver
        }
    }

    fn end_session(&mut self) {
        let report = GameEvent::GameOver {
            score: self.score,
            lines: self.lines,
            level: self.level,
        };
        info!(
            "game over: score={} lines={} level={}",
            self.score, self.lines, self.level
        );
        self.reset_session();
        self.game_over = true;
        self.last_event = Some(report);
    }

    fn reset_session(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.lines = 0;
        self.level = self.curve.start_level;
        self.base_interval_ms = self.curve.interval_ms(self.level);
        self.soft_drop = false;
        self.session_id = self.session_id.wrapping_add(1);
        self.spawn();
    }
}
