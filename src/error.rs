//! Error types for block color extraction.

use thiserror::Error;

/// Result type alias using ExtractError.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Main error type for color extraction operations.
///
/// Every variant is fatal: the extractor has no per-block recovery or
/// partial-output mode, so errors propagate straight out of the pipeline.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Failed to parse JSON data.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The block catalog is missing, unreadable, or not a top-level JSON
    /// object.
    #[error("Malformed block catalog: {0}")]
    MalformedCatalog(String),

    /// A referenced texture file is missing or not decodable as an image.
    #[error("Texture not found: {0}")]
    TextureNotFound(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
