//! Terminal rendering for the game.
//!
//! A small game-oriented layer instead of a widget toolkit: [`GameView`] draws a
//! [`core::GameSnapshot`] into a [`FrameBuffer`], and [`TerminalRenderer`]
//! flushes framebuffers to the terminal, sending only what changed.
//!
//! Board cells are two columns wide to compensate for the usual glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{piece_color, FrameBuffer, Glyph, Rgb, Style, PIECE_PALETTE};
pub use game_view::{GameView, Overlay, Viewport};
pub use renderer::{encode_changes_into, encode_full_into, TerminalRenderer};
