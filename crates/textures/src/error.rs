//! Error type for texture pack access.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextureError {
    /// The requested file does not exist in the pack source.
    #[error("texture file not found: {0}")]
    NotFound(String),

    #[error("io error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid json in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed texture definition for {id}: {reason}")]
    MalformedDefinition { id: String, reason: String },
}

impl TextureError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, TextureError::NotFound(_))
    }
}
