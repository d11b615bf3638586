//! Custom error types for the galleryinfo-parser crate.

use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum GalleryInfoError {
    /// An error originating from I/O operations other than a missing sidecar.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The folder basename does not resolve to a gallery id.
    #[error("Invalid gallery identifier in folder name {name:?}")]
    InvalidIdentifier { name: String },

    /// The sidecar file does not exist inside the gallery folder.
    #[error("Sidecar file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The sidecar file is not valid text in the configured encoding.
    #[error("Failed to decode {} as {encoding}", path.display())]
    DecodeError {
        path: PathBuf,
        encoding: &'static str,
    },

    /// A timestamp header value does not match the configured format.
    #[error("Invalid timestamp for {field}: {value:?} ({source})")]
    TimestampFormat {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The sidecar ended without one of the required header labels.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// A convenience `Result` type alias using the crate's `GalleryInfoError` type.
pub type Result<T> = std::result::Result<T, GalleryInfoError>;
