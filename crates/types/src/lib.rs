//! Shared types and default constants.
//!
//! Everything in here is plain data with no behaviour beyond parsing and
//! formatting, so the engine, the input layer and the renderer can agree on
//! vocabulary without depending on each other.
//!
//! # Grid Dimensions
//!
//! The canonical playfield is 20 rows by 10 columns:
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! Both are only defaults; the engine takes its dimensions from configuration.
//!
//! # Drop Interval Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DROP_MS` | 500 | Interval at the starting level |
//! | `DROP_STEP_MS` | 50 | Reduction per level-up |
//! | `MIN_DROP_MS` | 100 | Floor the interval never goes below |
//! | `SOFT_DROP_DIVISOR` | 5 | Divisor applied while soft drop is held |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{ColorId, GameAction, PieceKind, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//! assert_eq!(kind.color(), ColorId(2));
//!
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//!
//! assert_eq!(DEFAULT_ROWS, 20);
//! assert_eq!(DEFAULT_COLS, 10);
//! ```

use serde::{Deserialize, Serialize};

/// Canonical grid height in rows
pub const DEFAULT_ROWS: u16 = 20;

/// Canonical grid width in columns
pub const DEFAULT_COLS: u16 = 10;

/// Level a fresh session starts at
pub const START_LEVEL: u32 = 1;

/// Cleared lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Drop interval at the starting level (500ms per row)
pub const BASE_DROP_MS: u32 = 500;

/// Drop interval reduction applied on every level-up
pub const DROP_STEP_MS: u32 = 50;

/// Floor for the drop interval
pub const MIN_DROP_MS: u32 = 100;

/// Soft drop divides the drop interval by this value
pub const SOFT_DROP_DIVISOR: u32 = 5;

/// Points awarded for clearing 1, 2, 3 and 4 rows with a single lock
pub const TIERED_LINE_SCORES: [u32; 4] = [40, 100, 300, 1200];

/// Points per row for the flat scoring rule
pub const LINEAR_POINTS_PER_ROW: u32 = 10;

/// Host polling interval for input and timers (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Identifier of a cell color.
///
/// The engine never interprets it; renderers map it to whatever palette they use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorId(pub u8);

/// A cell on the grid
///
/// - `None`: empty
/// - `Some(color)`: locked block of that color
pub type Cell = Option<ColorId>;

/// The seven canonical tetrominoes
///
/// Colors follow the usual convention:
/// - **I**: cyan
/// - **O**: yellow
/// - **T**: purple
/// - **S**: green
/// - **Z**: red
/// - **J**: blue
/// - **L**: orange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Upper-case single letter name
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }

    /// Default color of the kind (its index in [`PieceKind::ALL`])
    pub fn color(&self) -> ColorId {
        let idx = match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        };
        ColorId(idx)
    }
}

/// Commands a host can forward to the engine
///
/// Keyboard, scripted and test drivers all speak in these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it if blocked
    MoveDown,
    /// Rotate piece 90° clockwise with horizontal kicks
    Rotate,
    /// Start holding soft drop (shortens the drop interval)
    SoftDropOn,
    /// Release soft drop
    SoftDropOff,
    /// Throw the session away and start a new one
    Restart,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "movedown" => Some(GameAction::MoveDown),
            "rotate" => Some(GameAction::Rotate),
            "softdropon" => Some(GameAction::SoftDropOn),
            "softdropoff" => Some(GameAction::SoftDropOff),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveDown => "moveDown",
            GameAction::Rotate => "rotate",
            GameAction::SoftDropOn => "softDropOn",
            GameAction::SoftDropOff => "softDropOff",
            GameAction::Restart => "restart",
        }
    }
}

/// Event recorded by the engine when a piece locks or a session ends.
///
/// Hosts poll it after each command to drive messages and sounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A piece merged into the grid
    Locked {
        rows_cleared: u32,
        points: u32,
        level_up: bool,
    },
    /// The replacement piece could not spawn. Counters hold the final values
    /// of the session that just ended; the engine has already reset itself.
    GameOver { score: u32, lines: u32, level: u32 },
}
