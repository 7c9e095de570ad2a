//! Renderer configuration.

use std::path::PathBuf;

use wordcraft_types::{CELL_SIZE, POINTER_Y_OFFSET};

/// Renderer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Root directory of the texture packs (holds `index.json`).
    pub textures_dir: PathBuf,
    pub cell_size: u32,
    pub pointer_y_offset: f32,
    pub log_path: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            textures_dir: PathBuf::from("assets/textures"),
            cell_size: CELL_SIZE,
            pointer_y_offset: POINTER_Y_OFFSET,
            log_path: None,
        }
    }
}

impl RenderConfig {
    /// Create from environment variables.
    ///
    /// - `WORDCRAFT_TEXTURES_DIR`
    /// - `WORDCRAFT_CELL_SIZE`
    /// - `WORDCRAFT_POINTER_Y_OFFSET`
    /// - `WORDCRAFT_LOG_PATH`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`RenderConfig::from_env`], reading variables through `get`.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let textures_dir = get("WORDCRAFT_TEXTURES_DIR")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.textures_dir);

        let cell_size = get("WORDCRAFT_CELL_SIZE")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&n: &u32| n > 0)
            .unwrap_or(defaults.cell_size);

        let pointer_y_offset = get("WORDCRAFT_POINTER_Y_OFFSET")
            .and_then(|s| s.trim().parse().ok())
            .filter(|n: &f32| n.is_finite())
            .unwrap_or(defaults.pointer_y_offset);

        let log_path = get("WORDCRAFT_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            textures_dir,
            cell_size,
            pointer_y_offset,
            log_path,
        }
    }
}
