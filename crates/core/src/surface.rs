//! Drawing target abstraction.
//!
//! Coordinates are surface pixels with the origin at the top-left corner.
//! Positions may be negative or beyond the surface size; implementations clip.

use wordcraft_textures::{BlockTexture, EntityTexture};
use wordcraft_types::Rgb;

/// Axis-aligned rectangle in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Half-open containment: low edges inclusive, high edges exclusive.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        self.x <= px && px < self.x + self.w && self.y <= py && py < self.y + self.h
    }
}

pub trait Surface {
    /// Surface size in pixels.
    fn size(&self) -> (u32, u32);

    /// Draw a single glyph with its box's top-left corner at (`x`, `y`).
    fn draw_glyph(&mut self, x: f32, y: f32, ch: char, color: Rgb, size: u32);

    /// Draw a line of text starting at (`x`, `y`).
    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Rgb, size: u32);

    /// Outline `rect` with a `width`-pixel stroke.
    fn stroke_rect(&mut self, rect: Rect, color: Rgb, width: u32);
}

/// Stroke width of the selection outline.
pub const SELECTION_STROKE: u32 = 2;

/// Draw a block glyph; a selected block also gets a black outline.
///
/// The outline is shifted down by `ink_offset` so it frames the visible glyph
/// rather than the font's line box.
pub fn draw_block<S: Surface + ?Sized>(
    surface: &mut S,
    texture: &BlockTexture,
    x: f32,
    y: f32,
    selected: bool,
    ink_offset: f32,
) {
    surface.draw_glyph(x, y, texture.ch(), texture.color(), texture.size());
    if selected {
        let size = texture.size() as f32;
        surface.stroke_rect(
            Rect::new(x, y + ink_offset, size, size),
            Rgb::BLACK,
            SELECTION_STROKE,
        );
    }
}

/// Draw an entity sprite row by row, one cell per character.
pub fn draw_entity<S: Surface + ?Sized>(surface: &mut S, texture: &EntityTexture, x: f32, y: f32) {
    let step = texture.size() as f32;
    for (row, chars) in texture.rows().iter().enumerate() {
        for (col, &ch) in chars.iter().enumerate() {
            surface.draw_glyph(
                x + step * col as f32,
                y + step * row as f32,
                ch,
                texture.color(),
                texture.size(),
            );
        }
    }
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Glyph {
        x: f32,
        y: f32,
        ch: char,
        color: Rgb,
    },
    Text {
        x: f32,
        y: f32,
        text: String,
    },
    Stroke {
        rect: Rect,
    },
}

/// Surface that records drawing calls instead of rasterizing them.
///
/// Used by tests and benchmarks to observe a frame.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn glyphs(&self) -> impl Iterator<Item = (f32, f32, char)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Glyph { x, y, ch, .. } => Some((*x, *y, *ch)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn strokes(&self) -> impl Iterator<Item = Rect> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Stroke { rect } => Some(*rect),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn draw_glyph(&mut self, x: f32, y: f32, ch: char, color: Rgb, _size: u32) {
        self.commands.push(DrawCommand::Glyph { x, y, ch, color });
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, _color: Rgb, _size: u32) {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
        });
    }

    fn stroke_rect(&mut self, rect: Rect, _color: Rgb, _width: u32) {
        self.commands.push(DrawCommand::Stroke { rect });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_is_half_open_on_every_edge() {
        let r = Rect::new(10.0, 20.0, 60.0, 60.0);
        assert!(r.contains(10.0, 20.0));
        assert!(r.contains(69.9, 79.9));
        assert!(!r.contains(70.0, 50.0));
        assert!(!r.contains(40.0, 80.0));
        assert!(!r.contains(9.9, 50.0));
        assert!(!r.contains(40.0, 19.9));
    }

    #[test]
    fn selected_block_gets_offset_outline() {
        let mut s = RecordingSurface::new(100, 100);
        let stone = BlockTexture::new('#', Rgb::new(128, 128, 128), 60);
        draw_block(&mut s, &stone, 5.0, 7.0, true, 15.0);
        assert_eq!(s.glyphs().collect::<Vec<_>>(), vec![(5.0, 7.0, '#')]);
        assert_eq!(
            s.strokes().collect::<Vec<_>>(),
            vec![Rect::new(5.0, 22.0, 60.0, 60.0)]
        );

        s.clear();
        draw_block(&mut s, &stone, 5.0, 7.0, false, 15.0);
        assert_eq!(s.strokes().count(), 0);
    }

    #[test]
    fn entity_sprite_draws_row_major() {
        let mut s = RecordingSurface::new(100, 100);
        let sprite = EntityTexture::new(&["ab", "c"], Rgb::BLACK, 10);
        draw_entity(&mut s, &sprite, 1.0, 2.0);
        assert_eq!(
            s.glyphs().collect::<Vec<_>>(),
            vec![(1.0, 2.0, 'a'), (11.0, 2.0, 'b'), (1.0, 12.0, 'c')]
        );
    }
}
