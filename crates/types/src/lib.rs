//! Shared types and constants for the blockfall workspace.
//!
//! Everything here is plain data: constants the engine is parameterized by,
//! the color token stored in grid cells, the catalog piece kinds, and the
//! discrete commands an input source delivers to the game.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_ROWS` | 20 | Rows in the playfield |
//! | `GRID_COLS` | 10 | Columns in the playfield |
//! | `TICK_PERIOD_MS` | 500 | Interval between automatic steps |
//! | `LINE_CLEAR_REWARD` | 100 | Points per cleared row |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameCommand, ShapeKind, GRID_COLS, GRID_ROWS};
//!
//! assert_eq!(ShapeKind::from_str("t"), Some(ShapeKind::T));
//! assert_eq!(GameCommand::from_str("softDrop"), Some(GameCommand::SoftDrop));
//! assert_eq!((GRID_ROWS, GRID_COLS), (20, 10));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default playfield height in rows.
pub const GRID_ROWS: u16 = 20;

/// Default playfield width in columns.
pub const GRID_COLS: u16 = 10;

/// Smallest grid edge accepted by configuration (fits every catalog shape).
pub const MIN_GRID_EDGE: u16 = 4;

/// Default automatic step interval in milliseconds.
pub const TICK_PERIOD_MS: u32 = 500;

/// Points awarded per cleared row. There is no multi-line bonus.
pub const LINE_CLEAR_REWARD: u32 = 100;

/// Largest width or height of a catalog shape.
pub const MAX_SHAPE_DIM: usize = 4;

/// 24-bit RGB color, used as the opaque color token of locked cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional).
    ///
    /// ```
    /// use blockfall_types::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#FFA500"), Some(Rgb::new(255, 165, 0)));
    /// assert_eq!(Rgb::from_hex("nope"), None);
    /// ```
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A cell on the grid: `None` is empty, `Some(color)` holds a locked block.
pub type Cell = Option<Rgb>;

/// The seven catalog shapes.
///
/// Colors follow the catalog order:
/// - **I**: cyan, horizontal bar
/// - **O**: yellow, 2x2 square
/// - **T**: magenta
/// - **Z**: green
/// - **S**: red
/// - **J**: blue
/// - **L**: orange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    I,
    O,
    T,
    Z,
    S,
    J,
    L,
}

impl ShapeKind {
    /// All kinds in catalog order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::Z,
        ShapeKind::S,
        ShapeKind::J,
        ShapeKind::L,
    ];

    /// Position in the catalog.
    pub fn index(self) -> usize {
        match self {
            ShapeKind::I => 0,
            ShapeKind::O => 1,
            ShapeKind::T => 2,
            ShapeKind::Z => 3,
            ShapeKind::S => 4,
            ShapeKind::J => 5,
            ShapeKind::L => 6,
        }
    }

    /// Parse from a one-letter name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            "t" => Some(ShapeKind::T),
            "z" => Some(ShapeKind::Z),
            "s" => Some(ShapeKind::S),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "I",
            ShapeKind::O => "O",
            ShapeKind::T => "T",
            ShapeKind::Z => "Z",
            ShapeKind::S => "S",
            ShapeKind::J => "J",
            ShapeKind::L => "L",
        }
    }
}

/// Horizontal movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column offset: -1 for left, +1 for right.
    pub fn dx(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Discrete commands delivered by an input source.
///
/// Rejected commands (ones that would collide) are silent no-ops in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameCommand {
    /// Move the active piece one column left
    MoveLeft,
    /// Move the active piece one column right
    MoveRight,
    /// One step down, identical to a scheduler tick
    SoftDrop,
    /// Rotate the active piece 90° clockwise
    Rotate,
}

impl GameCommand {
    /// Parse from camelCase (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameCommand::MoveLeft),
            "moveright" => Some(GameCommand::MoveRight),
            "softdrop" => Some(GameCommand::SoftDrop),
            "rotate" => Some(GameCommand::Rotate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::MoveLeft => "moveLeft",
            GameCommand::MoveRight => "moveRight",
            GameCommand::SoftDrop => "softDrop",
            GameCommand::Rotate => "rotate",
        }
    }
}

/// Contract violations on the grid. These indicate a caller bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({x}, {y}) is outside the {cols}x{rows} grid")]
    OutOfRange { x: i32, y: i32, cols: u16, rows: u16 },
}
