//! Ordered, layered texture packs.
//!
//! The pack index (`index.json`) is a JSON array of pack names. Earlier packs
//! take priority: the first pack whose table defines an identifier wins and
//! later packs are not consulted.
//!
//! The index and every table are read at most once. Missing or malformed files
//! are remembered as empty, so repeated misses cost a hash lookup rather than
//! a file read. Call [`PackSet::reload`] after the packs on disk change.

use std::collections::HashMap;

use log::{debug, warn};
use serde_json::{Map, Value};

use wordcraft_types::Identifier;

use crate::error::TextureError;
use crate::source::{PackSource, INDEX_PATH};
use crate::texture::TextureKind;

type Table = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct TableKey {
    pack: String,
    namespace: String,
    kind: TextureKind,
}

/// A value found in a pack, tagged with the pack it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Found<T> {
    pub pack: String,
    pub value: T,
}

pub struct PackSet {
    source: Box<dyn PackSource>,
    index: Option<Vec<String>>,
    tables: HashMap<TableKey, Option<Table>>,
}

impl PackSet {
    pub fn new(source: impl PackSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            index: None,
            tables: HashMap::new(),
        }
    }

    /// Pack names in priority order. Empty if the index cannot be read.
    pub fn packs(&mut self) -> &[String] {
        let source = &self.source;
        self.index.get_or_insert_with(|| load_index(&**source))
    }

    /// Forget the index and all tables; the next lookup reads them again.
    pub fn reload(&mut self) {
        self.index = None;
        self.tables.clear();
    }

    /// Find the first pack defining `id` in its `kind` table and parse the entry.
    ///
    /// An entry that fails to parse is logged and skipped, so a lower-priority
    /// pack can still supply the texture.
    pub fn resolve<T>(
        &mut self,
        id: &Identifier,
        kind: TextureKind,
        mut parse: impl FnMut(&Value) -> Result<T, TextureError>,
    ) -> Option<Found<T>> {
        let packs = self.packs().to_vec();
        for pack in packs {
            let table = self.table(&pack, id.namespace(), kind);
            let Some(value) = table.and_then(|t| t.get(id.path())) else {
                continue;
            };
            match parse(value) {
                Ok(value) => return Some(Found { pack, value }),
                Err(e) => warn!("Skipping {} in pack {}: {}", id, pack, e),
            }
        }
        None
    }

    fn table(&mut self, pack: &str, namespace: &str, kind: TextureKind) -> Option<&Table> {
        let key = TableKey {
            pack: pack.to_string(),
            namespace: namespace.to_string(),
            kind,
        };
        let source = &self.source;
        self.tables
            .entry(key)
            .or_insert_with(|| load_table(&**source, &kind.table_path(pack, namespace)))
            .as_ref()
    }
}

impl std::fmt::Debug for PackSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PackSet")
            .field("index", &self.index)
            .field("tables", &self.tables.len())
            .finish()
    }
}

fn load_index(source: &dyn PackSource) -> Vec<String> {
    let parsed = source.read(INDEX_PATH).and_then(|text| {
        serde_json::from_str::<Vec<String>>(&text).map_err(|e| TextureError::Json {
            path: INDEX_PATH.to_string(),
            source: e,
        })
    });
    match parsed {
        Ok(packs) => {
            debug!("Texture packs: {:?}", packs);
            packs
        }
        Err(e) => {
            warn!("Exception while reading textures index: {}", e);
            Vec::new()
        }
    }
}

fn load_table(source: &dyn PackSource, path: &str) -> Option<Table> {
    let text = match source.read(path) {
        Ok(text) => text,
        // A pack is not required to cover every namespace.
        Err(e) if e.is_not_found() => return None,
        Err(e) => {
            warn!("Failed to read texture table: {}", e);
            return None;
        }
    };
    match serde_json::from_str::<Table>(&text) {
        Ok(table) => Some(table),
        Err(e) => {
            warn!(
                "{}",
                TextureError::Json {
                    path: path.to_string(),
                    source: e,
                }
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::source::MemorySource;

    /// Counts reads so tests can assert on memoization.
    struct CountingSource {
        inner: MemorySource,
        reads: Rc<Cell<usize>>,
    }

    impl PackSource for CountingSource {
        fn read(&self, path: &str) -> Result<String, TextureError> {
            self.reads.set(self.reads.get() + 1);
            self.inner.read(path)
        }
    }

    fn string_value(v: &Value) -> Result<String, TextureError> {
        v.as_str().map(str::to_string).ok_or_else(|| TextureError::MalformedDefinition {
            id: "test".to_string(),
            reason: "not a string".to_string(),
        })
    }

    fn two_packs() -> MemorySource {
        MemorySource::new()
            .with_file("index.json", r#"["hd", "default"]"#)
            .with_file("hd/core/blocks/blocks.json", r#"{"stone": "hd-stone"}"#)
            .with_file(
                "default/core/blocks/blocks.json",
                r#"{"stone": "default-stone", "dirt": "default-dirt"}"#,
            )
    }

    #[test]
    fn first_pack_in_index_wins() {
        let mut packs = PackSet::new(two_packs());
        let stone: Identifier = "core:stone".parse().unwrap();
        let found = packs.resolve(&stone, TextureKind::Block, string_value).unwrap();
        assert_eq!(found.pack, "hd");
        assert_eq!(found.value, "hd-stone");
    }

    #[test]
    fn falls_through_to_lower_priority_pack() {
        let mut packs = PackSet::new(two_packs());
        let dirt: Identifier = "core:dirt".parse().unwrap();
        let found = packs.resolve(&dirt, TextureKind::Block, string_value).unwrap();
        assert_eq!(found.pack, "default");
    }

    #[test]
    fn malformed_entry_falls_through() {
        let src = two_packs().with_file("hd/core/blocks/blocks.json", r#"{"stone": 7}"#);
        let mut packs = PackSet::new(src);
        let stone: Identifier = "core:stone".parse().unwrap();
        let found = packs.resolve(&stone, TextureKind::Block, string_value).unwrap();
        assert_eq!(found.pack, "default");
    }

    #[test]
    fn corrupt_table_is_treated_as_absent() {
        let src = two_packs().with_file("hd/core/blocks/blocks.json", "{not json");
        let mut packs = PackSet::new(src);
        let stone: Identifier = "core:stone".parse().unwrap();
        assert_eq!(
            packs.resolve(&stone, TextureKind::Block, string_value).unwrap().pack,
            "default"
        );
    }

    #[test]
    fn missing_or_corrupt_index_means_no_packs() {
        let mut packs = PackSet::new(MemorySource::new());
        assert!(packs.packs().is_empty());

        let mut packs = PackSet::new(MemorySource::new().with_file("index.json", "{}"));
        assert!(packs.packs().is_empty());
    }

    #[test]
    fn misses_do_not_reread_files_until_reload() {
        let reads = Rc::new(Cell::new(0));
        let mut packs = PackSet::new(CountingSource {
            inner: two_packs(),
            reads: reads.clone(),
        });
        let ghost: Identifier = "core:ghost".parse().unwrap();

        assert!(packs.resolve(&ghost, TextureKind::Block, string_value).is_none());
        // index + two tables
        assert_eq!(reads.get(), 3);

        assert!(packs.resolve(&ghost, TextureKind::Block, string_value).is_none());
        assert_eq!(reads.get(), 3);

        packs.reload();
        assert!(packs.resolve(&ghost, TextureKind::Block, string_value).is_none());
        assert_eq!(reads.get(), 6);
    }

    #[test]
    fn namespaces_and_kinds_use_separate_tables() {
        let src = two_packs().with_file(
            "default/mymod/entities/entities.json",
            r#"{"stone": "entity-stone"}"#,
        );
        let mut packs = PackSet::new(src);
        let stone: Identifier = "mymod:stone".parse().unwrap();
        assert!(packs.resolve(&stone, TextureKind::Block, string_value).is_none());
        assert_eq!(
            packs.resolve(&stone, TextureKind::Entity, string_value).unwrap().value,
            "entity-stone"
        );
    }
}
