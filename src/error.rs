//! Error types for name tables and table files

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NamesError {
    /// The model has no entry for this semantic key
    #[error("`{key}` is not available for model `{model}`")]
    KeyNotFound { model: String, key: String },

    #[error("Unknown model `{0}`")]
    UnknownModel(String),

    #[error("Model `{0}` is already registered")]
    DuplicateModel(String),

    /// A semantic key was given twice while building a model
    #[error("Duplicate key `{key}` in model `{model}`")]
    DuplicateKey { model: String, key: String },

    #[error("Empty key in model `{model}`")]
    EmptyKey { model: String },

    #[error("Empty identifier for key `{key}` in model `{model}`")]
    EmptyIdentifier { model: String, key: String },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("RON serialization error: {0}")]
    RonSerialize(#[from] ron::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported table format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for name table operations
pub type Result<T> = std::result::Result<T, NamesError>;
