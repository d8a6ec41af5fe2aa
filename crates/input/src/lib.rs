//! Terminal input (engine-facing).
//!
//! Independent of any UI framework: maps `crossterm` key events to
//! [`crate::types::GameAction`] and keeps track of the soft-drop hold, which
//! needs care on terminals that never report key releases.

pub mod handler;
pub mod map;

pub use blockfall_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, map_key, should_quit};
