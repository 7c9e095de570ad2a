//! Texture packs and the glyph texture cache.
//!
//! # Module Structure
//!
//! - [`source`]: where pack files come from (disk directory or memory)
//! - [`pack`]: ordered pack index with first-match-wins lookup
//! - [`texture`]: block glyphs, entity sprites and their JSON definitions
//! - [`cache`]: per-session memoized identifier → texture lookup
//!
//! # Pack Layout
//!
//! ```text
//! <root>/index.json                                ["hd", "default"]
//! <root>/<pack>/<namespace>/blocks/blocks.json     {"stone": ["#", [128,128,128]]}
//! <root>/<pack>/<namespace>/entities/entities.json {"player": [["o","|"], [0,0,0]]}
//! ```
//!
//! # Example
//!
//! ```
//! use wordcraft_textures::{MemorySource, TextureCache};
//!
//! let source = MemorySource::new()
//!     .with_file("index.json", r#"["default"]"#)
//!     .with_file("default/core/blocks/blocks.json", r##"{"stone": ["#", [128, 128, 128]]}"##);
//! let mut cache = TextureCache::new(source);
//!
//! let stone = cache.block_texture(&"core:stone".parse().unwrap());
//! assert_eq!(stone.ch(), '#');
//! ```

pub mod cache;
pub mod error;
pub mod pack;
pub mod source;
pub mod texture;

pub use wordcraft_types as types;

pub use cache::TextureCache;
pub use error::TextureError;
pub use pack::{Found, PackSet};
pub use source::{DirSource, MemorySource, PackSource, INDEX_PATH};
pub use texture::{
    BlockTexture, EntityTexture, TextureKind, MISSING_BLOCK_CHAR, MISSING_ENTITY_CHAR,
};
