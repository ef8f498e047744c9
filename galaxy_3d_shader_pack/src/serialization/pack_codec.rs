//! Layout of an (uncompressed) shader pack stream
//!
//! ```text
//! i32                       format version
//! i32                       stage
//! ...                       reflection description (binary, or a legacy blob)
//! i32                       shader count
//!   key, bytes code, bytes entry point
//! [version > 1]  i32        binding map count
//!   key, i32 size, size * (i32 binding, i32 native, i32 native sampler)
//! [version > 5]  i32        sampler split list count
//!   key, i32 size, size * (bytes combined name, i32 texture, i32 sampler)
//! ```
//!
//! A key is `i32 source, i32 version, u32 version flags, i32 variant`.
//! Entries are written in key order so equal packs encode to equal bytes.

use std::io::{Cursor, Read, Write};

use crate::error::{Error, Result};
use crate::reflection::ReflectionDescription;
use crate::serialization::stream::{ReadStreamExt, WriteStreamExt};
use crate::serialization::{FormatVersion, Section};
use crate::shader::shader_pack::ShaderPackData;
use crate::shader::{
    CodeEntry, NativeResourceBindingMap, SamplerSplitMapping, SamplerSplitMappingList,
    ShaderSource, ShaderStage, ShaderVariant, ShaderVersion, ShaderVersionFlags, VariantKey,
};

const SOURCE: &str = "galaxy3d::ShaderPack";

/// Everything read from a stream, with the outcome of each optional section
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedPack {
    pub version: FormatVersion,
    pub stage: ShaderStage,
    pub description: Section<ReflectionDescription>,
    pub shaders: Vec<(VariantKey, CodeEntry)>,
    pub bindings: Section<Vec<(VariantKey, NativeResourceBindingMap)>>,
    pub sampler_maps: Section<Vec<(VariantKey, SamplerSplitMappingList)>>,
}

// ============================================================================
// Keys
// ============================================================================

fn write_key<W: Write + ?Sized>(w: &mut W, key: &VariantKey) -> Result<()> {
    w.write_i32(key.source().to_raw())?;
    w.write_i32(key.source_version().version())?;
    w.write_u32(key.source_version().flags().bits())?;
    w.write_i32(key.source_variant().to_raw())?;
    Ok(())
}

fn read_key<R: Read + ?Sized>(r: &mut R) -> Result<VariantKey> {
    let source = ShaderSource::try_from(r.read_i32()?)?;
    let version = r.read_i32()?;
    let flags = ShaderVersionFlags::from_bits_retain(r.read_u32()?);
    let variant = ShaderVariant::try_from(r.read_i32()?)?;
    Ok(VariantKey::new(source, ShaderVersion::new(version, flags), variant))
}

/// Map entries sorted by key
fn sorted_entries<'a, V>(map: impl IntoIterator<Item = (&'a VariantKey, &'a V)>) -> Vec<(&'a VariantKey, &'a V)>
where
    V: 'a,
{
    let mut entries: Vec<_> = map.into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}

// ============================================================================
// Encoding
// ============================================================================

/// Encode pack data as a stream of the given revision.
///
/// Sections the revision did not have are left out.
pub(crate) fn encode(data: &ShaderPackData, version: FormatVersion) -> Result<Vec<u8>> {
    if !version.is_writable() {
        return Err(Error::Corrupt(format!("format version {} cannot be written", version)));
    }

    let mut w = Vec::new();
    w.write_i32(version.0)?;
    w.write_i32(data.stage.to_raw())?;
    data.description.serialize(&mut w, version)?;

    w.write_count(data.shaders.len())?;
    for (key, code) in sorted_entries(&data.shaders) {
        write_key(&mut w, key)?;
        w.write_len_prefixed_bytes(code.code())?;
        w.write_len_prefixed_bytes(code.entry_point())?;
    }

    if version.has_resource_bindings() {
        w.write_count(data.bindings.len())?;
        for (key, map) in sorted_entries(&data.bindings) {
            write_key(&mut w, key)?;
            w.write_count(map.len())?;
            for (&binding, &(native, native_sampler)) in map {
                w.write_i32(binding)?;
                w.write_i32(native)?;
                w.write_i32(native_sampler)?;
            }
        }
    }

    if version.has_sampler_split_maps() {
        w.write_count(data.sampler_maps.len())?;
        for (key, list) in sorted_entries(&data.sampler_maps) {
            write_key(&mut w, key)?;
            w.write_count(list.len())?;
            for mapping in list {
                w.write_len_prefixed_bytes(&mapping.combined_sampler_name)?;
                w.write_i32(mapping.texture_binding)?;
                w.write_i32(mapping.sampler_binding)?;
            }
        }
    }

    Ok(w)
}

// ============================================================================
// Decoding
// ============================================================================

/// Trace how an optional entry section came out of the stream
fn trace_section<T>(name: &str, section: &Section<Vec<T>>, version: FormatVersion) {
    match section {
        Section::Present(entries) => {
            crate::pack_trace!(SOURCE, "Decoded {} section: {} entries", name, entries.len())
        }
        Section::AbsentByVersion => {
            crate::pack_trace!(SOURCE, "No {} section in format version {}", name, version)
        }
        Section::UnreadableLegacy => {
            crate::pack_trace!(SOURCE, "Skipped unreadable {} section", name)
        }
    }
}

/// Decode an uncompressed stream.
///
/// # Errors
///
/// `UnsupportedVersion` for a version tag no revision ever produced, and any
/// stream error for truncated or malformed data. A legacy description
/// encoding is not an error: it is skipped and reported as
/// `Section::UnreadableLegacy`.
pub fn decode(stream: &[u8]) -> Result<DecodedPack> {
    let mut r = Cursor::new(stream);

    let version = FormatVersion(r.read_i32()?);
    if !version.is_known() {
        return Err(Error::UnsupportedVersion(version.0));
    }

    let stage = ShaderStage::try_from(r.read_i32()?)?;

    let description = if version.has_binary_description() {
        Section::Present(ReflectionDescription::deserialize(&mut r, version)?)
    } else {
        // Binary JSON / CBOR blob: skip it so the shader entries stay readable
        let blob = r.read_len_prefixed_bytes()?;
        let encoding = if version > FormatVersion::WITH_BINARY_JSON { "CBOR" } else { "binary JSON" };
        crate::pack_warn!(
            SOURCE,
            "Cannot load a reflection description stored as {} (format version {}, {} bytes); description left empty",
            encoding,
            version,
            blob.len()
        );
        Section::UnreadableLegacy
    };
    if let Section::Present(desc) = &description {
        crate::pack_trace!(
            SOURCE,
            "Decoded description: {} inputs, {} outputs, {} uniform blocks",
            desc.input_variables.len(),
            desc.output_variables.len(),
            desc.uniform_blocks.len()
        );
    }

    let count = r.read_count()?;
    let mut shaders = Vec::new();
    for _ in 0..count {
        let key = read_key(&mut r)?;
        let code = r.read_len_prefixed_bytes()?;
        let entry_point = r.read_len_prefixed_bytes()?;
        shaders.push((key, CodeEntry::new(code, entry_point)));
    }
    crate::pack_trace!(SOURCE, "Decoded {} shader entries", shaders.len());

    let bindings = if version.has_resource_bindings() {
        let count = r.read_count()?;
        let mut bindings = Vec::new();
        for _ in 0..count {
            let key = read_key(&mut r)?;
            let size = r.read_count()?;
            let mut map = NativeResourceBindingMap::new();
            for _ in 0..size {
                let binding = r.read_i32()?;
                let native = r.read_i32()?;
                let native_sampler = r.read_i32()?;
                map.insert(binding, (native, native_sampler));
            }
            bindings.push((key, map));
        }
        Section::Present(bindings)
    } else {
        Section::AbsentByVersion
    };
    trace_section("binding map", &bindings, version);

    let sampler_maps = if version.has_sampler_split_maps() {
        let count = r.read_count()?;
        let mut maps = Vec::new();
        for _ in 0..count {
            let key = read_key(&mut r)?;
            let size = r.read_count()?;
            let mut list = SamplerSplitMappingList::new();
            for _ in 0..size {
                let name = r.read_len_prefixed_bytes()?;
                let texture_binding = r.read_i32()?;
                let sampler_binding = r.read_i32()?;
                list.push(SamplerSplitMapping::new(name, texture_binding, sampler_binding));
            }
            maps.push((key, list));
        }
        Section::Present(maps)
    } else {
        Section::AbsentByVersion
    };
    trace_section("sampler split", &sampler_maps, version);

    Ok(DecodedPack {
        version,
        stage,
        description,
        shaders,
        bindings,
        sampler_maps,
    })
}

#[cfg(test)]
#[path = "pack_codec_tests.rs"]
mod tests;
