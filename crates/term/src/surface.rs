//! TermSurface: a pixel [`Surface`] backed by a terminal framebuffer.
//!
//! Pixel coordinates are quantized onto character cells through a
//! [`PixelScale`]. A glyph lands on the cell whose centre lies inside the
//! glyph's ink box, which is the same box pointer picking tests against, so
//! the outlined cell is always the one under the mouse.
//!
//! This module is pure (no I/O). It can be unit-tested.

use wordcraft_core::{Rect, Surface};
use wordcraft_types::{PixelScale, Rgb, POINTER_Y_OFFSET};

use crate::fb::{Cell, CellStyle, FrameBuffer};

pub struct TermSurface {
    fb: FrameBuffer,
    scale: PixelScale,
    /// Distance from a glyph box's top edge to its ink.
    ink_offset_y: f32,
}

impl Default for TermSurface {
    fn default() -> Self {
        Self::new(PixelScale::default())
    }
}

impl TermSurface {
    pub fn new(scale: PixelScale) -> Self {
        Self {
            fb: FrameBuffer::new(0, 0),
            scale,
            ink_offset_y: POINTER_Y_OFFSET,
        }
    }

    pub fn with_ink_offset(mut self, ink_offset_y: f32) -> Self {
        self.ink_offset_y = ink_offset_y;
        self
    }

    pub fn scale(&self) -> PixelScale {
        self.scale
    }

    /// Resize to the terminal and clear to the background.
    pub fn begin_frame(&mut self, cols: u16, rows: u16) {
        self.fb.resize(cols, rows);
        self.fb.clear(Cell::default());
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn framebuffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.fb
    }

    /// Terminal cell whose centre lies inside the ink box starting at (`x`, `y`).
    fn cell_at(&self, x: f32, y: f32) -> (i32, i32) {
        let col = (x / self.scale.col_px - 0.5).ceil() as i32;
        let row = ((y + self.ink_offset_y) / self.scale.row_px - 0.5).ceil() as i32;
        (col, row)
    }

    /// How many terminal columns a glyph of `size` pixels covers.
    fn span(&self, size: u32) -> i32 {
        ((size as f32 / self.scale.col_px).round() as i32).max(1)
    }
}

impl Surface for TermSurface {
    fn size(&self) -> (u32, u32) {
        self.scale.surface_size(self.fb.width(), self.fb.height())
    }

    fn draw_glyph(&mut self, x: f32, y: f32, ch: char, color: Rgb, size: u32) {
        let (col, row) = self.cell_at(x, y);
        let style = CellStyle::fg(color);
        self.fb.put_char(col, row, ch, style);
        for dx in 1..self.span(size) {
            self.fb.put_char(col + dx, row, ' ', style);
        }
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Rgb, _size: u32) {
        let (col, row) = self.cell_at(x, y);
        let style = CellStyle {
            bold: true,
            ..CellStyle::fg(color)
        };
        self.fb.put_str(col.max(0), row, text, style);
    }

    fn stroke_rect(&mut self, rect: Rect, _color: Rgb, _width: u32) {
        for row in 0..self.fb.height() {
            for col in 0..self.fb.width() {
                let (cx, cy) = self.scale.cell_center(col, row);
                if rect.contains(cx, cy) {
                    self.fb.invert(col as i32, row as i32);
                }
            }
        }
    }
}
