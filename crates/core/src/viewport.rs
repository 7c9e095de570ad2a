//! Viewport planning and world ↔ screen coordinate mapping.
//!
//! The camera anchor sits horizontally in the middle of the surface and
//! vertically at three quarters of its height, so more of the world is visible
//! above the anchor than below it. Every side gets one extra cell of margin so
//! the window stays covered while the camera is between two cells.
//!
//! This module is pure (no I/O).

use wordcraft_types::{BlockPos, Vec2};

use crate::surface::Rect;

/// Number of cells needed on each side of the anchor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportWindow {
    pub left: i64,
    pub right: i64,
    /// Cells below the anchor (below the feet).
    pub bottom: i64,
    /// Cells above the anchor (above the head).
    pub top: i64,
}

/// Cell counts plus the fixed screen point where the camera entity is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub window: ViewportWindow,
    pub anchor_x: f32,
    pub anchor_y: f32,
    pub cell_size: u32,
}

impl Viewport {
    /// Plan the cell window for a `width` x `height` surface.
    pub fn plan(width: u32, height: u32, cell_size: u32) -> Self {
        let cell_size = cell_size.max(1);
        let cs = cell_size as f64;
        let half_width = (width as f64 - cs) / 2.0;
        let quarter_height = (height as f64 - cs) / 4.0;

        let side = (half_width / cs).ceil() as i64 + 1;
        let window = ViewportWindow {
            left: side,
            right: side,
            bottom: (quarter_height / cs).ceil() as i64 + 1,
            top: (quarter_height * 3.0 / cs).ceil() as i64 + 1,
        };

        Self {
            window,
            anchor_x: (half_width - cs / 2.0) as f32,
            anchor_y: (quarter_height * 3.0 - cs / 2.0) as f32,
            cell_size,
        }
    }

    /// Place the grid for a camera at continuous world position `camera`.
    pub fn map(&self, camera: Vec2) -> ScreenMapping {
        let w = self.window;
        let cs = self.cell_size as f64;
        let base_x = camera.x.floor();
        let base_y = camera.y.floor();
        let frac_x = camera.x - base_x;
        let frac_y = camera.y - base_y;
        let base_x = base_x as i64;
        let base_y = base_y as i64;

        ScreenMapping {
            bounds: CellRect {
                x_min: base_x - w.left,
                x_max: base_x + w.right,
                y_min: base_y - w.bottom,
                y_max: base_y + w.top,
            },
            origin_x: (self.anchor_x as f64 - cs * (w.left as f64 + frac_x)) as f32,
            origin_y: (self.anchor_y as f64 - cs * (w.top as f64 - frac_y)) as f32,
            cell_size: self.cell_size as f32,
        }
    }
}

/// Inclusive rectangle of world cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x_min: i64,
    pub x_max: i64,
    pub y_min: i64,
    pub y_max: i64,
}

impl CellRect {
    pub fn columns(&self) -> usize {
        (self.x_max - self.x_min + 1).max(0) as usize
    }

    pub fn rows(&self) -> usize {
        (self.y_max - self.y_min + 1).max(0) as usize
    }
}

/// Where each grid cell of one frame lands on screen.
///
/// Grid column 0 is `x_min`; grid row 0 is `y_max` (screen rows grow downward
/// while world rows grow upward). Every row starts at the same screen `x`,
/// shifted left by the camera's fractional position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMapping {
    bounds: CellRect,
    origin_x: f32,
    origin_y: f32,
    cell_size: f32,
}

impl ScreenMapping {
    pub fn bounds(&self) -> CellRect {
        self.bounds
    }

    /// Top-left screen position of grid cell (0, 0).
    pub fn origin(&self) -> (f32, f32) {
        (self.origin_x, self.origin_y)
    }

    pub fn cell_rect(&self, col: usize, row: usize) -> Rect {
        Rect {
            x: self.origin_x + self.cell_size * col as f32,
            y: self.origin_y + self.cell_size * row as f32,
            w: self.cell_size,
            h: self.cell_size,
        }
    }

    pub fn grid_to_world(&self, col: usize, row: usize) -> BlockPos {
        BlockPos::new(self.bounds.x_min + col as i64, self.bounds.y_max - row as i64)
    }

    /// Top-left screen position of a world cell (may lie off-screen).
    pub fn world_to_screen(&self, pos: BlockPos) -> (f32, f32) {
        let col = (pos.x - self.bounds.x_min) as f32;
        let row = (self.bounds.y_max - pos.y) as f32;
        (
            self.origin_x + self.cell_size * col,
            self.origin_y + self.cell_size * row,
        )
    }

    /// World cell under a screen point.
    pub fn screen_to_world(&self, x: f32, y: f32) -> BlockPos {
        let col = ((x - self.origin_x) / self.cell_size).floor() as i64;
        let row = ((y - self.origin_y) / self.cell_size).floor() as i64;
        BlockPos::new(self.bounds.x_min + col, self.bounds.y_max - row)
    }
}
