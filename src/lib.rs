//! Wordcraft (workspace facade crate).
//!
//! Re-exports the renderer crates under `crates/` as `wordcraft::{core,input,term,textures,types}`.

pub use wordcraft_core as core;
pub use wordcraft_input as input;
pub use wordcraft_term as term;
pub use wordcraft_textures as textures;
pub use wordcraft_types as types;
