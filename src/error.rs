use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by drawing operations. None of these are fatal: the UI layer
/// logs them and shows a status message, leaving the surface untouched.
#[derive(Debug, Error)]
pub enum SketchError {
    /// The selected file does not look like a supported image.
    #[error("unsupported file type: {}", .0.display())]
    UnsupportedFile(PathBuf),

    /// The selected file could not be read from disk.
    #[error("failed to read {}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The selected file could not be decoded as an image.
    #[error("failed to decode image")]
    Decode(#[from] image::ImageError),

    /// No usable font could be found for text stamping.
    #[error("no usable system font found")]
    FontUnavailable,

    /// The surface could not be encoded or written during export.
    #[error("failed to export drawing to {}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
