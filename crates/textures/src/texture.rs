//! Resolved glyph textures and their on-disk definitions.
//!
//! Pack tables map a path segment to a positional definition:
//!
//! ```json
//! { "stone": ["#", [128, 128, 128]],
//!   "grass": ["\"", [60, 160, 60], "Noto Sans Mono", 48] }
//! ```
//!
//! Entity definitions use a list of row strings instead of a single character:
//!
//! ```json
//! { "player": [["o", "|"], [20, 20, 200]] }
//! ```

use serde::Deserialize;
use serde_json::Value;

use wordcraft_types::{Identifier, Rgb};

use crate::error::TextureError;

/// Glyph drawn for a block whose texture cannot be found in any pack.
pub const MISSING_BLOCK_CHAR: char = '?';

/// Glyph drawn for an entity whose texture cannot be found in any pack.
pub const MISSING_ENTITY_CHAR: char = '〇';

/// Which pack table a texture lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKind {
    Block,
    Entity,
}

impl TextureKind {
    fn table_name(self) -> &'static str {
        match self {
            TextureKind::Block => "blocks",
            TextureKind::Entity => "entities",
        }
    }

    /// Relative path of this kind's table inside `pack` for `namespace`.
    pub fn table_path(self, pack: &str, namespace: &str) -> String {
        let name = self.table_name();
        format!("{pack}/{namespace}/{name}/{name}.json")
    }
}

/// Single-glyph visual of a block kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockTexture {
    ch: char,
    color: Rgb,
    font: Option<String>,
    size: u32,
}

impl BlockTexture {
    pub fn new(ch: char, color: Rgb, size: u32) -> Self {
        Self {
            ch,
            color,
            font: None,
            size,
        }
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// Placeholder used when no pack defines the block.
    pub fn missing(size: u32) -> Self {
        Self::new(MISSING_BLOCK_CHAR, Rgb::BLACK, size)
    }

    pub fn ch(&self) -> char {
        self.ch
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn font(&self) -> Option<&str> {
        self.font.as_deref()
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub(crate) fn from_value(
        id: &Identifier,
        value: &Value,
        default_size: u32,
    ) -> Result<Self, TextureError> {
        let BlockDef(text, color, font, size) =
            BlockDef::deserialize(value).map_err(|e| malformed(id, e.to_string()))?;
        let ch = text
            .chars()
            .next()
            .ok_or_else(|| malformed(id, "empty character".to_string()))?;
        Ok(Self {
            ch,
            color,
            font,
            size: checked_size(id, size, default_size)?,
        })
    }
}

/// Multi-cell ASCII sprite of an entity kind. All cells share one color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityTexture {
    rows: Vec<Vec<char>>,
    color: Rgb,
    font: Option<String>,
    size: u32,
}

impl EntityTexture {
    pub fn new<R: AsRef<str>>(rows: &[R], color: Rgb, size: u32) -> Self {
        Self {
            rows: rows.iter().map(|r| r.as_ref().chars().collect()).collect(),
            color,
            font: None,
            size,
        }
    }

    /// Placeholder used when no pack defines the entity.
    pub fn missing(size: u32) -> Self {
        Self::new(&[MISSING_ENTITY_CHAR.to_string()], Rgb::BLACK, size)
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn font(&self) -> Option<&str> {
        self.font.as_deref()
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Width of the widest row, in cells.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn from_value(
        id: &Identifier,
        value: &Value,
        default_size: u32,
    ) -> Result<Self, TextureError> {
        let EntityDef(rows, color, font, size) =
            EntityDef::deserialize(value).map_err(|e| malformed(id, e.to_string()))?;
        if rows.iter().all(|r| r.is_empty()) {
            return Err(malformed(id, "sprite has no characters".to_string()));
        }
        Ok(Self {
            rows: rows.iter().map(|r| r.chars().collect()).collect(),
            color,
            font,
            size: checked_size(id, size, default_size)?,
        })
    }
}

#[derive(Debug, Deserialize)]
struct BlockDef(
    String,
    Rgb,
    #[serde(default)] Option<String>,
    #[serde(default)] Option<u32>,
);

#[derive(Debug, Deserialize)]
struct EntityDef(
    Vec<String>,
    Rgb,
    #[serde(default)] Option<String>,
    #[serde(default)] Option<u32>,
);

fn checked_size(
    id: &Identifier,
    size: Option<u32>,
    default_size: u32,
) -> Result<u32, TextureError> {
    match size {
        Some(0) => Err(malformed(id, "size must be positive".to_string())),
        Some(s) => Ok(s),
        None => Ok(default_size),
    }
}

fn malformed(id: &Identifier, reason: String) -> TextureError {
    TextureError::MalformedDefinition {
        id: id.to_string(),
        reason,
    }
}
