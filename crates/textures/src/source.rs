//! Where texture pack files come from.
//!
//! Paths handed to a [`PackSource`] are relative to the texture root and always
//! use `/` separators, e.g. `default/core/blocks/blocks.json`.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::TextureError;

/// Path of the ordered pack list, relative to the texture root.
pub const INDEX_PATH: &str = "index.json";

/// Read access to texture pack files.
pub trait PackSource {
    fn read(&self, path: &str) -> Result<String, TextureError>;
}

/// Packs stored in a directory tree on disk.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl PackSource for DirSource {
    fn read(&self, path: &str) -> Result<String, TextureError> {
        let full = path
            .split('/')
            .fold(self.root.clone(), |acc, part| acc.join(part));
        fs::read_to_string(&full).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => TextureError::NotFound(path.to_string()),
            _ => TextureError::Io {
                path: full.display().to_string(),
                source: e,
            },
        })
    }
}

/// Packs held in memory, keyed by relative path.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<String>, contents: impl Into<String>) -> Self {
        self.insert(path, contents);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into());
    }
}

impl PackSource for MemorySource {
    fn read(&self, path: &str) -> Result<String, TextureError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| TextureError::NotFound(path.to_string()))
    }
}

impl<S: PackSource + ?Sized> PackSource for &S {
    fn read(&self, path: &str) -> Result<String, TextureError> {
        (**self).read(path)
    }
}
