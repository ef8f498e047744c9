//! Serialization settings for shader packs
//!
//! Passed to `ShaderPack::serialized_with_config` and
//! `ShaderPack::from_serialized_with_config`. The plain `serialized` /
//! `from_serialized` entry points use `PackConfig::default()`.

/// Default zlib compression level
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

/// Default upper bound on the size of a decompressed pack (256 MiB)
pub const DEFAULT_MAX_DECOMPRESSED_SIZE: usize = 256 * 1024 * 1024;

/// Shader pack serialization configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackConfig {
    /// zlib compression level (0 = store, 9 = best). Values above 9 are clamped.
    pub compression_level: u32,
    /// Maximum accepted uncompressed size when loading. Streams announcing
    /// a larger payload are rejected before decompression starts.
    pub max_decompressed_size: usize,
}

impl PackConfig {
    /// Compression level clamped to the range zlib accepts
    pub fn effective_compression_level(&self) -> u32 {
        self.compression_level.min(9)
    }
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            compression_level: DEFAULT_COMPRESSION_LEVEL,
            max_decompressed_size: DEFAULT_MAX_DECOMPRESSED_SIZE,
        }
    }
}
