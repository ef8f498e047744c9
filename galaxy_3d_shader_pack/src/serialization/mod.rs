//! Binary pack format
//!
//! - `stream`: big-endian primitives and length-prefixed byte strings
//! - `format`: schema revisions and per-section decode outcomes
//! - `compression`: whole-buffer zlib with a length prefix
//! - `pack_codec`: layout of a shader pack stream

pub mod stream;
pub mod format;
pub mod compression;
pub mod pack_codec;

pub use format::{FormatVersion, Section};
pub use pack_codec::DecodedPack;
