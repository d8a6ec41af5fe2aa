//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and holds the pieces of
//! the terminal binary that are worth testing on their own: argument and
//! config handling ([`cli`]) and log setup ([`logging`]).

pub mod cli;
pub mod logging;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
