//! Whole-buffer zlib compression for serialized packs
//!
//! A compressed buffer is the uncompressed size as a big-endian `u32`
//! followed by a zlib stream.

use flate2::read::{ZlibDecoder, ZlibEncoder};
use flate2::Compression;
use std::io::Read;

use crate::error::{Error, Result};

/// Size of the uncompressed-length header
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// Compress `data` and prepend its uncompressed length.
///
/// # Arguments
/// * `data` - The uncompressed stream
/// * `level` - zlib level, 0-9
pub fn compress(data: &[u8], level: u32) -> Result<Vec<u8>> {
    let len: u32 = data
        .len()
        .try_into()
        .map_err(|_| Error::Compression(format!("payload of {} bytes is too large", data.len())))?;

    let mut out = Vec::with_capacity(LENGTH_PREFIX_SIZE + data.len() / 2);
    out.extend_from_slice(&len.to_be_bytes());

    let mut encoder = ZlibEncoder::new(data, Compression::new(level.min(9)));
    encoder
        .read_to_end(&mut out)
        .map_err(|e| Error::Compression(format!("compression failed: {}", e)))?;

    Ok(out)
}

/// Decompress a buffer produced by [`compress`].
///
/// # Arguments
/// * `data` - Length prefix plus zlib stream
/// * `max_size` - Largest uncompressed size accepted (decompression bomb guard)
///
/// # Errors
/// * `UnexpectedEof` if the length prefix is missing
/// * `DecompressedSizeExceeded` if the announced size is above `max_size`
/// * `Compression` if the zlib stream is invalid
/// * `SizeMismatch` if the stream inflates to a different size than announced
pub fn decompress(data: &[u8], max_size: usize) -> Result<Vec<u8>> {
    if data.len() < LENGTH_PREFIX_SIZE {
        return Err(Error::UnexpectedEof);
    }

    let (prefix, payload) = data.split_at(LENGTH_PREFIX_SIZE);
    let expected = u32::from_be_bytes([prefix[0], prefix[1], prefix[2], prefix[3]]) as usize;

    if expected > max_size {
        return Err(Error::DecompressedSizeExceeded { size: expected, limit: max_size });
    }

    let mut decompressed = Vec::with_capacity(expected);
    // One byte past the announced size is enough to detect a lying header
    ZlibDecoder::new(payload)
        .take(expected as u64 + 1)
        .read_to_end(&mut decompressed)
        .map_err(|e| Error::Compression(format!("decompression failed: {}", e)))?;

    if decompressed.len() != expected {
        return Err(Error::SizeMismatch { expected, found: decompressed.len() });
    }

    Ok(decompressed)
}

#[cfg(test)]
#[path = "compression_tests.rs"]
mod tests;
