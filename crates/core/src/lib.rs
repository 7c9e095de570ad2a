//! Camera-relative tile-grid rendering.
//!
//! Draws the blocks around a moving camera entity as glyphs on a pixel
//! [`Surface`], picks the cell under the pointer and asks the [`World`] to
//! remove it while the primary button is held.
//!
//! # Module Structure
//!
//! - [`viewport`]: visible cell window and world ↔ screen mapping
//! - [`surface`]: drawing target trait, block/entity draw helpers, a recording surface
//! - [`world`]: world and camera entity traits plus small in-memory implementations
//! - [`renderer`]: the per-frame pass
//! - [`config`]: environment-driven renderer configuration
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//!
//! use wordcraft_core::{GridWorld, Player, RecordingSurface, RenderConfig, WorldRenderer};
//! use wordcraft_core::textures::{MemorySource, TextureCache};
//! use wordcraft_core::types::{PointerState, Vec2};
//!
//! let source = MemorySource::new().with_file("index.json", r#"["default"]"#);
//! let mut renderer = WorldRenderer::new(TextureCache::new(source), &RenderConfig::default());
//!
//! let now = Instant::now();
//! let mut world = GridWorld::new(now);
//! let player = Player::new(Vec2::new(0.0, 5.0));
//! let mut surface = RecordingSurface::new(1024, 720);
//!
//! let report = renderer.frame(&mut world, &player, PointerState::default(), &mut surface, now);
//! assert_eq!(report.bounds.columns(), 21);
//! assert_eq!(report.bounds.rows(), 15);
//! ```

pub mod config;
pub mod renderer;
pub mod surface;
pub mod viewport;
pub mod world;

pub use wordcraft_textures as textures;
pub use wordcraft_types as types;

pub use config::RenderConfig;
pub use renderer::{FrameReport, WorldRenderer, LABEL_POSITION};
pub use surface::{
    draw_block, draw_entity, DrawCommand, RecordingSurface, Rect, Surface, SELECTION_STROKE,
};
pub use viewport::{CellRect, ScreenMapping, Viewport, ViewportWindow};
pub use world::{Block, CameraEntity, GridWorld, Palette, Player, World};
