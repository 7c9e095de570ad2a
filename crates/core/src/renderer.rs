//! WorldRenderer: draws the world around the camera entity, one frame at a time.
//!
//! A frame:
//!
//! 1. Dead-reckons the camera position from the last tick
//!    (`position + velocity * elapsed`), so scrolling is smooth regardless of
//!    the simulation rate.
//! 2. Plans the visible cell rectangle and fetches it from the [`World`].
//! 3. Walks the grid north to south, west to east, drawing each block's glyph
//!    with sub-cell scroll offset and picking the cell under the pointer.
//! 4. Draws the camera entity at the fixed anchor point.

use std::time::Instant;

use log::trace;

use wordcraft_textures::{DirSource, TextureCache};
use wordcraft_types::{BlockPos, PointerState, Rgb, Vec2};

use crate::config::RenderConfig;
use crate::surface::{draw_block, draw_entity, Surface};
use crate::viewport::{CellRect, Viewport};
use crate::world::{CameraEntity, World};

/// Where the hovered cell's coordinates are printed.
pub const LABEL_POSITION: (f32, f32) = (0.0, 30.0);

/// What happened during one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// Extrapolated camera position the frame was drawn around.
    pub camera: Vec2,
    /// Cell rectangle requested from the world.
    pub bounds: CellRect,
    /// Cell under the pointer, if any.
    pub selected: Option<BlockPos>,
    /// Cells whose removal was requested this frame.
    pub removed: Vec<BlockPos>,
}

pub struct WorldRenderer {
    textures: TextureCache,
    cell_size: u32,
    pointer_y_offset: f32,
}

impl WorldRenderer {
    pub fn new(textures: TextureCache, config: &RenderConfig) -> Self {
        Self {
            textures: textures.with_default_size(config.cell_size),
            cell_size: config.cell_size,
            pointer_y_offset: config.pointer_y_offset,
        }
    }

    /// Renderer reading texture packs from `config.textures_dir`.
    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(
            TextureCache::new(DirSource::new(config.textures_dir.clone())),
            config,
        )
    }

    pub fn textures(&mut self) -> &mut TextureCache {
        &mut self.textures
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Render one frame onto `surface` as of `now`.
    ///
    /// Removal requests go straight to `world`; a held primary button removes
    /// the hovered cell once per frame.
    pub fn frame<W, C, S>(
        &mut self,
        world: &mut W,
        camera: &C,
        pointer: PointerState,
        surface: &mut S,
        now: Instant,
    ) -> FrameReport
    where
        W: World + ?Sized,
        C: CameraEntity + ?Sized,
        S: Surface + ?Sized,
    {
        let (width, height) = surface.size();
        let viewport = Viewport::plan(width, height, self.cell_size);

        let elapsed = now.saturating_duration_since(world.last_tick()).as_secs_f64();
        let anchor = camera.position().extrapolate(camera.velocity(), elapsed);

        let mapping = viewport.map(anchor);
        let bounds = mapping.bounds();
        let mut grid = world.get_blocks(bounds.x_min, bounds.x_max, bounds.y_min, bounds.y_max);
        // World rows come south first; the screen draws north first.
        grid.reverse();

        let pointer_x = pointer.x;
        let pointer_y = pointer.y - self.pointer_y_offset;
        let mut report = FrameReport {
            camera: anchor,
            bounds,
            selected: None,
            removed: Vec::new(),
        };

        for (row, cells) in grid.iter().enumerate() {
            for (col, block) in cells.iter().enumerate() {
                let texture = self.textures.block_texture(&block.id);
                let rect = mapping.cell_rect(col, row);

                let hovered = pointer.focused && rect.contains(pointer_x, pointer_y);
                if hovered {
                    let pos = mapping.grid_to_world(col, row);
                    report.selected = Some(pos);
                    if pointer.primary_pressed {
                        trace!("Removing block at {}", pos);
                        world.remove_block(pos.x, pos.y);
                        report.removed.push(pos);
                    }
                }

                draw_block(surface, &texture, rect.x, rect.y, hovered, self.pointer_y_offset);
            }
        }

        // Drawn after the grid so no cell paints over it.
        if let Some(pos) = report.selected {
            let (x, y) = LABEL_POSITION;
            surface.draw_text(x, y, &pos.to_string(), Rgb::BLACK, self.cell_size);
        }

        let sprite = self.textures.entity_texture(camera.entity_type());
        draw_entity(surface, &sprite, viewport.anchor_x, viewport.anchor_y);

        report
    }
}

impl std::fmt::Debug for WorldRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorldRenderer")
            .field("cached_textures", &self.textures.len())
            .field("cell_size", &self.cell_size)
            .field("pointer_y_offset", &self.pointer_y_offset)
            .finish()
    }
}
