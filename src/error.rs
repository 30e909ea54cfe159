//! Starfield
//! =========
//!
//! Error types
//! -----------
//!
//! Defines the error kinds surfaced by the public API.

/// Canvas construction error: a non-positive dimension was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("canvas dimensions must be positive, got {width}x{height}")]
pub struct DimensionError {
    /// The rejected width.
    pub width: u32,
    /// The rejected height.
    pub height: u32,
}

/// Image export encoder error type.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ExportError {
    /// The requested image format is not compiled in (the `png` feature is disabled).
    #[error("image format not available: the \"png\" feature is disabled")]
    NotImplemented,

    /// The underlying PNG encoder failed.
    #[cfg(feature = "png")]
    #[error("PNG encoding failed: {0}")]
    Encoding(#[from] png::EncodingError),

    /// Writing encoded PNG data failed.
    #[cfg(feature = "png")]
    #[error("PNG output write failed: {0}")]
    Io(#[from] std::io::Error),
}
