//! Memoized identifier → texture lookup.
//!
//! A [`TextureCache`] is owned by whoever renders (one per world session) and
//! hands out shared, immutable textures. Once an identifier has been resolved
//! the same `Rc` is returned for every later lookup; entries are never evicted.
//!
//! Two lookup flavours exist for each kind:
//!
//! - `lookup_*` returns `None` when no pack defines the identifier.
//! - `*_texture` always returns a texture, substituting the documented
//!   placeholder ([`BlockTexture::missing`], [`EntityTexture::missing`]) on a
//!   miss. The placeholder is cached per identifier, so two different
//!   identifiers never share a texture object.

use std::collections::HashMap;
use std::rc::Rc;

use log::debug;

use wordcraft_types::{Identifier, CELL_SIZE};

use crate::pack::PackSet;
use crate::source::PackSource;
use crate::texture::{BlockTexture, EntityTexture, TextureKind};

#[derive(Debug)]
struct Entry<T> {
    texture: Rc<T>,
    /// `false` when `texture` is the placeholder for a miss.
    resolved: bool,
}

impl<T> Entry<T> {
    fn found(&self) -> Option<Rc<T>> {
        self.resolved.then(|| Rc::clone(&self.texture))
    }
}

#[derive(Debug)]
pub struct TextureCache {
    packs: PackSet,
    default_size: u32,
    blocks: HashMap<Identifier, Entry<BlockTexture>>,
    entities: HashMap<Identifier, Entry<EntityTexture>>,
}

impl TextureCache {
    pub fn new(source: impl PackSource + 'static) -> Self {
        Self::with_packs(PackSet::new(source))
    }

    pub fn with_packs(packs: PackSet) -> Self {
        Self {
            packs,
            default_size: CELL_SIZE,
            blocks: HashMap::new(),
            entities: HashMap::new(),
        }
    }

    /// Size given to textures whose definition has no explicit size.
    pub fn with_default_size(mut self, size: u32) -> Self {
        self.default_size = size;
        self
    }

    /// Block texture for `id`, or `None` if no pack defines it.
    pub fn lookup_block(&mut self, id: &Identifier) -> Option<Rc<BlockTexture>> {
        self.block_entry(id).found()
    }

    /// Block texture for `id`, falling back to the missing-texture placeholder.
    pub fn block_texture(&mut self, id: &Identifier) -> Rc<BlockTexture> {
        Rc::clone(&self.block_entry(id).texture)
    }

    /// Entity sprite for `id`, or `None` if no pack defines it.
    pub fn lookup_entity(&mut self, id: &Identifier) -> Option<Rc<EntityTexture>> {
        self.entity_entry(id).found()
    }

    /// Entity sprite for `id`, falling back to the missing-texture placeholder.
    pub fn entity_texture(&mut self, id: &Identifier) -> Rc<EntityTexture> {
        Rc::clone(&self.entity_entry(id).texture)
    }

    /// Number of cached identifiers (blocks and entities, hits and misses).
    pub fn len(&self) -> usize {
        self.blocks.len() + self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached texture and re-read the packs on the next lookup.
    pub fn clear(&mut self) {
        self.blocks.clear();
        self.entities.clear();
        self.packs.reload();
    }

    fn block_entry(&mut self, id: &Identifier) -> &Entry<BlockTexture> {
        if !self.blocks.contains_key(id) {
            let size = self.default_size;
            let found = self.packs.resolve(id, TextureKind::Block, |v| {
                BlockTexture::from_value(id, v, size)
            });
            let entry = match found {
                Some(found) => {
                    debug!("Block texture {} from pack {}", id, found.pack);
                    Entry {
                        texture: Rc::new(found.value),
                        resolved: true,
                    }
                }
                None => {
                    debug!("No block texture for {}, using placeholder", id);
                    Entry {
                        texture: Rc::new(BlockTexture::missing(size)),
                        resolved: false,
                    }
                }
            };
            self.blocks.insert(id.clone(), entry);
        }
        &self.blocks[id]
    }

    fn entity_entry(&mut self, id: &Identifier) -> &Entry<EntityTexture> {
        if !self.entities.contains_key(id) {
            let size = self.default_size;
            let found = self.packs.resolve(id, TextureKind::Entity, |v| {
                EntityTexture::from_value(id, v, size)
            });
            let entry = match found {
                Some(found) => {
                    debug!("Entity texture {} from pack {}", id, found.pack);
                    Entry {
                        texture: Rc::new(found.value),
                        resolved: true,
                    }
                }
                None => {
                    debug!("No entity texture for {}, using placeholder", id);
                    Entry {
                        texture: Rc::new(EntityTexture::missing(size)),
                        resolved: false,
                    }
                }
            };
            self.entities.insert(id.clone(), entry);
        }
        &self.entities[id]
    }
}
