//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Each frame is compared row by row with the one on screen and only rows that
//! differ are rewritten. The first frame, a resize or [`TerminalRenderer::invalidate`]
//! repaint everything.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    queue,
    style::{Attribute, Color, Colors, Print, ResetColor, SetAttribute, SetColors},
    terminal, QueueableCommand,
};

use wordcraft_types::Rgb;

use crate::fb::{Cell, CellStyle, FrameBuffer};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Frame currently on screen.
    shown: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Raw mode, alternate screen, mouse and focus reporting.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        queue!(
            self.buf,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
            EnableMouseCapture,
            EnableFocusChange,
        )?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        queue!(
            self.buf,
            DisableFocusChange,
            DisableMouseCapture,
            ResetColor,
            SetAttribute(Attribute::Reset),
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen,
        )?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Repaint everything on the next draw (after a resize).
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Flush `fb` to the terminal.
    ///
    /// `fb` is swapped with the frame previously on screen, so the caller gets
    /// a buffer to clear and draw into without allocating.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        match self.shown.as_ref().filter(|s| same_size(s, fb)) {
            Some(shown) => encode_rows_into(fb, changed_rows(shown, fb), &mut self.buf)?,
            None => encode_full_into(fb, &mut self.buf)?,
        }
        self.flush_buf()?;

        let previous = self.shown.take().unwrap_or_else(|| FrameBuffer::new(0, 0));
        self.shown = Some(std::mem::replace(fb, previous));
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn same_size(a: &FrameBuffer, b: &FrameBuffer) -> bool {
    a.width() == b.width() && a.height() == b.height()
}

/// Rows of `next` that differ from `prev`. Both must have the same size.
pub fn changed_rows<'a>(
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
) -> impl Iterator<Item = u16> + 'a {
    (0..next.height()).filter(move |&y| prev.row(y) != next.row(y))
}

/// Encode a clear-screen repaint of every row into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    encode_rows_into(fb, 0..fb.height(), out)
}

/// Encode the given rows of `fb` into `out`, each rewritten from column 0.
pub fn encode_rows_into(
    fb: &FrameBuffer,
    rows: impl IntoIterator<Item = u16>,
    out: &mut Vec<u8>,
) -> Result<()> {
    let mut pen = None;
    let mut wrote = false;
    for y in rows {
        out.queue(cursor::MoveTo(0, y))?;
        for cell in fb.row(y) {
            write_cell(out, cell, &mut pen)?;
        }
        wrote = true;
    }
    if wrote {
        queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

/// Colors and weight a cell is printed with, reverse video already applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pen {
    fg: Rgb,
    bg: Rgb,
    bold: bool,
}

impl From<CellStyle> for Pen {
    fn from(style: CellStyle) -> Self {
        let (fg, bg) = if style.reverse {
            (style.bg, style.fg)
        } else {
            (style.fg, style.bg)
        };
        Self {
            fg,
            bg,
            bold: style.bold,
        }
    }
}

fn write_cell(out: &mut Vec<u8>, cell: &Cell, pen: &mut Option<Pen>) -> Result<()> {
    let next = Pen::from(cell.style);
    if *pen != Some(next) {
        if pen.map_or(true, |p| p.bold != next.bold) {
            let weight = if next.bold {
                Attribute::Bold
            } else {
                Attribute::NormalIntensity
            };
            out.queue(SetAttribute(weight))?;
        }
        out.queue(SetColors(Colors::new(truecolor(next.fg), truecolor(next.bg))))?;
        *pen = Some(next);
    }
    out.queue(Print(cell.ch))?;
    Ok(())
}

fn truecolor(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
