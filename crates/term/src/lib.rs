//! Terminal backend for the world renderer.
//!
//! The renderer core draws in pixels; this crate turns those pixels into a
//! framebuffer of character cells and flushes it to a real terminal.
//!
//! - [`surface`]: [`TermSurface`], a pixel surface quantized onto character cells
//! - [`fb`]: framebuffer and cell styles
//! - [`renderer`]: full/diff encoding and terminal mode setup

pub mod fb;
pub mod renderer;
pub mod surface;

pub use wordcraft_core as core;
pub use wordcraft_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, BACKGROUND};
pub use renderer::{changed_rows, encode_full_into, encode_rows_into, TerminalRenderer};
pub use surface::TermSurface;
