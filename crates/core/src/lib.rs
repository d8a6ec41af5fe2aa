//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains every rule of the game and nothing else: no terminal,
//! no clock, no threads. A host drives it by calling commands and the gravity
//! step at the interval the engine reports.
//!
//! # Module Structure
//!
//! - [`grid`]: the playfield of colored cells
//! - [`pieces`]: shape matrices, the canonical tetrominoes and the falling piece
//! - [`collision`]: the single placement predicate
//! - [`rotation`]: clockwise rotation with horizontal kicks
//! - [`lines`]: full-row detection and removal
//! - [`scoring`]: points per lock, level thresholds and drop intervals
//! - [`config`]: [`EngineConfig`] and its validation
//! - [`rng`]: injectable piece selection
//! - [`game_state`]: the engine tying it all together
//! - [`snapshot`]: a reusable read-only view for renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::{EngineConfig, GameState, SequenceRandom};
//! use blockfall_core::types::GameAction;
//!
//! let mut game = GameState::new(EngineConfig::default(), SequenceRandom::constant(1)).unwrap();
//!
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::Rotate);
//! while game.pieces_spawned() == 1 {
//!     game.tick();
//! }
//!
//! assert_eq!(game.grid().filled_count(), 4);
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! The engine never looks at a clock. [`GameState::drop_interval_ms`] tells the
//! host how long to wait before the next [`GameState::tick`]: 500ms at level 1,
//! 50ms less per level down to 100ms, divided by 5 while soft drop is held.

pub mod collision;
pub mod config;
pub mod error;
pub mod game_state;
pub mod grid;
pub mod lines;
pub mod pieces;
pub mod rng;
pub mod rotation;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use collision::would_collide;
pub use config::{EngineConfig, ShapeEntry, ShapeSpec, ShapeTable, SpawnPlacement};
pub use error::ConfigError;
pub use game_state::{GameState, StepResult};
pub use grid::Grid;
pub use lines::{clear_full_rows, ClearedRows};
pub use pieces::{get_shape, Piece, Shape};
pub use rng::{RandomSource, SequenceRandom, StdRandom};
pub use rotation::{try_rotate, RotationOutcome};
pub use scoring::{LevelCurve, ScoringRule};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
