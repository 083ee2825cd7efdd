//! Error types for the tamper-diff crate.

use std::fmt;

/// Which of the two compared inputs an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRole {
    /// The scanned document under inspection.
    Subject,
    /// The reference template the subject is compared against.
    Reference,
}

impl fmt::Display for ImageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Subject => f.write_str("subject"),
            Self::Reference => f.write_str("reference"),
        }
    }
}

/// Errors that can occur while comparing two images.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input bytes are not a decodable image (including empty input).
    #[error("failed to decode {role} image: {source}")]
    Decode {
        /// Which input failed to decode.
        role: ImageRole,
        /// Underlying decoder error.
        #[source]
        source: image::ImageError,
    },

    /// A decoded image has a zero dimension.
    #[error("{role} image is empty ({width}x{height})")]
    EmptyImage {
        /// Which input is empty.
        role: ImageRole,
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
    },

    /// An I/O error occurred while reading inputs or writing the mask.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The difference mask could not be encoded.
    #[error("failed to encode mask: {0}")]
    Encode(#[source] image::ImageError),

    /// The requested output format is not supported for masks.
    #[error("unsupported mask format: {0}")]
    UnsupportedFormat(String),

    /// The processing options are out of range.
    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
