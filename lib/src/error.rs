use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the conversion pipeline.
#[derive(Error, Debug)]
pub enum AsciiError {
    /// A file or directory could not be opened, created or written.
    #[error("I/O error on {}", path.display())]
    Io {
        /// Path involved in the failed operation.
        path: PathBuf,
        /// Underlying OS error.
        source: std::io::Error,
    },

    /// The input is not a supported image or is corrupt.
    #[error("failed to decode image {}", path.display())]
    Decode {
        /// Path of the input image.
        path: PathBuf,
        /// Decoder error.
        source: image::ImageError,
    },

    /// The rendered image could not be PNG-encoded.
    #[error("failed to encode PNG {}", path.display())]
    Encode {
        /// Path of the output image.
        path: PathBuf,
        /// Encoder error.
        source: image::ImageError,
    },

    /// The image has a zero side and cannot be scaled.
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The embedded font could not be parsed.
    #[error("invalid embedded font")]
    Font(#[from] ab_glyph::InvalidFont),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, AsciiError>;
