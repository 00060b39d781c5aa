//! Unified error types for pixel_engine

use thiserror::Error;

use crate::{ColorIdentifier, Size};

/// A persisted artwork that cannot be turned back into a consistent model.
///
/// Recoverable: callers usually skip the artwork or substitute a blank one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodingError {
    #[error("Invalid canvas size {size}")]
    InvalidSize { size: Size },

    #[error("Pixel count mismatch: {pixels} pixels, {semantics} semantics, size requires {expected}")]
    PixelCountMismatch { pixels: usize, semantics: usize, expected: usize },

    #[error("Color id count mismatch: expected {expected}, got {actual}")]
    ColorIdCountMismatch { expected: usize, actual: usize },

    #[error("Buffer length {actual} does not match size {size}")]
    BufferLengthMismatch { size: Size, actual: usize },

    #[error("Semantic id {id} is not part of the identifier tree")]
    UnknownSemantic { id: i32 },

    #[error("Semantic id {id} occurs more than once in the identifier tree")]
    DuplicateSemantic { id: i32 },

    #[error("Color id {id} occurs more than once in the palette")]
    DuplicateColorId { id: ColorIdentifier },

    #[error("Palette is missing the default color id 0")]
    MissingDefaultColor,
}

/// Main error type for pixel_engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Decoding error: {0}")]
    Decoding(#[from] DecodingError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid hex color: {value}")]
    InvalidHexColor { value: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("{0}")]
    Generic(String),
}

/// Result type alias for pixel_engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Create a generic error from any displayable type
    pub fn generic(msg: impl std::fmt::Display) -> Self {
        Self::Generic(msg.to_string())
    }

    /// Create a configuration error
    pub fn invalid_config(msg: impl std::fmt::Display) -> Self {
        Self::InvalidConfig { message: msg.to_string() }
    }
}
