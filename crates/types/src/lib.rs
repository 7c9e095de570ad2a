//! Shared data types and constants for the world renderer.
//!
//! Everything here is plain data with no I/O, so it can be used from the
//! texture loader, the renderer core, the terminal backend and input mapping
//! alike.
//!
//! # Layout constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CELL_SIZE` | 60 | Side of one world cell on screen, in pixels |
//! | `POINTER_Y_OFFSET` | 15 | Vertical correction between pointer and glyph box |
//! | `TICK_MS` | 50 | Fixed simulation step of the demo world |
//! | `WALK_SPEED` | 4.0 | Camera entity speed in cells per second |
//!
//! # Examples
//!
//! ```
//! use wordcraft_types::{Identifier, Rgb};
//!
//! let id: Identifier = "core:stone".parse().unwrap();
//! assert_eq!(id.namespace(), "core");
//! assert_eq!(id.path(), "stone");
//! assert_eq!(id.to_string(), "core:stone");
//!
//! // Bare paths land in the default namespace.
//! let dirt: Identifier = "dirt".parse().unwrap();
//! assert_eq!(dirt.to_string(), "core:dirt");
//!
//! assert_eq!(Rgb::from([128, 128, 128]), Rgb::new(128, 128, 128));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Side of one world cell on screen, in pixels.
///
/// Shared by block glyphs, entity sprites and the viewport math.
pub const CELL_SIZE: u32 = 60;

/// Vertical distance between where the pointer is reported and where the glyph
/// box actually starts (font ascent padding).
pub const POINTER_Y_OFFSET: f32 = 15.0;

/// Fixed simulation step of the demo world, in milliseconds.
pub const TICK_MS: u32 = 50;

/// Camera entity speed in cells per second.
pub const WALK_SPEED: f64 = 4.0;

/// Namespace used when an identifier string has no `namespace:` prefix.
pub const DEFAULT_NAMESPACE: &str = "core";

/// Namespaced name (`namespace:path`) of a block or entity kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier {
    namespace: String,
    path: String,
}

impl Identifier {
    /// Build an identifier from its two parts.
    ///
    /// Returns `None` if either part is empty or the namespace contains `:`.
    pub fn new(namespace: &str, path: &str) -> Option<Self> {
        if namespace.is_empty() || path.is_empty() || namespace.contains(':') {
            return None;
        }
        Some(Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        })
    }

    /// Identifier in the default namespace. `path` must not be empty.
    pub fn core(path: &str) -> Self {
        debug_assert!(!path.is_empty());
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            path: path.to_string(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Error returned when parsing an [`Identifier`] fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdentifierError(String);

impl fmt::Display for ParseIdentifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid identifier {:?}", self.0)
    }
}

impl std::error::Error for ParseIdentifierError {}

impl FromStr for Identifier {
    type Err = ParseIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace, path) = match s.split_once(':') {
            Some((ns, path)) => (ns, path),
            None => (DEFAULT_NAMESPACE, s),
        };
        Identifier::new(namespace, path).ok_or_else(|| ParseIdentifierError(s.to_string()))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

/// Continuous 2D vector in world units (cells), y pointing up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// `self + velocity * seconds`.
    pub fn extrapolate(self, velocity: Vec2, seconds: f64) -> Self {
        Self {
            x: self.x + velocity.x * seconds,
            y: self.y + velocity.y * seconds,
        }
    }
}

/// Integer address of one world cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockPos {
    pub x: i64,
    pub y: i64,
}

impl BlockPos {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Point-in-time snapshot of the pointer device, in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    /// Whether the pointer is inside (and focused on) the window.
    pub focused: bool,
    /// Whether the primary button is currently held.
    pub primary_pressed: bool,
}

impl PointerState {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            focused: true,
            primary_pressed: false,
        }
    }

    pub fn pressed(mut self) -> Self {
        self.primary_pressed = true;
        self
    }
}

/// Camera entity movement requested by input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraAction {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Stop,
}

/// Size of one terminal character cell in surface pixels.
///
/// Lets pixel-space rendering and pointer picking run on a character grid.
/// The default makes one 60 px world cell two columns wide and one row tall,
/// which roughly matches the aspect ratio of common terminal fonts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelScale {
    pub col_px: f32,
    pub row_px: f32,
}

impl PixelScale {
    pub const fn new(col_px: f32, row_px: f32) -> Self {
        Self { col_px, row_px }
    }

    /// Pixel position of the centre of terminal cell (`col`, `row`).
    pub fn cell_center(&self, col: u16, row: u16) -> (f32, f32) {
        (
            (col as f32 + 0.5) * self.col_px,
            (row as f32 + 0.5) * self.row_px,
        )
    }

    /// Terminal surface size in pixels.
    pub fn surface_size(&self, cols: u16, rows: u16) -> (u32, u32) {
        (
            (cols as f32 * self.col_px) as u32,
            (rows as f32 * self.row_px) as u32,
        )
    }
}

impl Default for PixelScale {
    fn default() -> Self {
        Self::new(CELL_SIZE as f32 / 2.0, CELL_SIZE as f32)
    }
}
