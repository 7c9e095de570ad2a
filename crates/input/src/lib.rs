//! Terminal input mapping.
//!
//! Maps `crossterm` key events into [`crate::types::CameraAction`] and tracks
//! the mouse as a pixel-space [`crate::types::PointerState`].

pub mod map;
pub mod pointer;

pub use wordcraft_types as types;

pub use map::{handle_key_event, should_quit};
pub use pointer::PointerTracker;
