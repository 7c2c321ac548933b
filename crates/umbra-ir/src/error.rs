//! Error types for scene documents.

use thiserror::Error;

/// Errors reading or writing a scene document.
#[derive(Error, Debug)]
pub enum IrError {
    /// JSON could not be parsed or produced.
    #[error("invalid JSON scene: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML could not be parsed.
    #[error("invalid TOML scene: {0}")]
    TomlRead(#[from] toml::de::Error),

    /// TOML could not be produced.
    #[error("cannot write TOML scene: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    /// File extension names no known document format.
    #[error("unknown scene format {0:?} (expected .json or .toml)")]
    UnknownFormat(String),
}

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, IrError>;
