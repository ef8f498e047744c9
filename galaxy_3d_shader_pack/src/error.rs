//! Error types for the Galaxy3D shader pack
//!
//! These errors are produced while encoding or decoding the binary pack format.
//! The public loading entry point (`ShaderPack::from_serialized`) never returns
//! them: it logs the error and hands back an invalid pack instead.

use std::fmt;

/// Result type for shader pack operations
pub type Result<T> = std::result::Result<T, Error>;

/// Shader pack errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Underlying reader/writer failure
    Io(String),

    /// The stream ended before a complete value could be read
    UnexpectedEof,

    /// Format version tag not produced by any revision of the format
    UnsupportedVersion(i32),

    /// An integer-encoded enum carried a value outside its declared range
    InvalidEnumValue {
        /// Name of the enum being decoded (e.g. "ShaderStage")
        kind: &'static str,
        /// The raw value found in the stream
        value: i32,
    },

    /// zlib compression or decompression failed
    Compression(String),

    /// Decompressed payload would exceed the configured limit
    DecompressedSizeExceeded {
        /// Size announced by the stream header
        size: usize,
        /// Configured maximum
        limit: usize,
    },

    /// Decompressed payload does not match the size announced in the header
    SizeMismatch {
        /// Size announced by the stream header
        expected: usize,
        /// Size actually produced
        found: usize,
    },

    /// Structurally invalid data (negative counts, unwritable revisions, ...)
    Corrupt(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(msg) => write!(f, "I/O error: {}", msg),
            Error::UnexpectedEof => write!(f, "Unexpected end of stream"),
            Error::UnsupportedVersion(version) => {
                write!(f, "Unsupported shader pack version {}", version)
            }
            Error::InvalidEnumValue { kind, value } => {
                write!(f, "Invalid {} value: {}", kind, value)
            }
            Error::Compression(msg) => write!(f, "Compression error: {}", msg),
            Error::DecompressedSizeExceeded { size, limit } => write!(
                f,
                "Decompressed size {} exceeds limit {}",
                size, limit
            ),
            Error::SizeMismatch { expected, found } => write!(
                f,
                "Size mismatch: expected {} bytes, got {}",
                expected, found
            ),
            Error::Corrupt(msg) => write!(f, "Corrupt shader pack: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            Error::UnexpectedEof
        } else {
            Error::Io(err.to_string())
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
