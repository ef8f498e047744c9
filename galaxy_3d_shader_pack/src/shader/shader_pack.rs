//! Shader pack: one logical shader in many representations
//!
//! A `ShaderPack` bundles, for a single pipeline stage:
//! - the code for every (language, version, variant) it was baked for
//! - one reflection description of the shader interface
//! - per-key native resource binding maps and sampler split lists
//!
//! Packs are cheap to clone. Clones share one representation until one of
//! them is mutated, at which point the mutated handle detaches (clones the
//! representation) before writing.
//!
//! Equality and hashing only look at the stage and the shader code. Two packs
//! with identical code are assumed to carry identical reflection and binding
//! data, so those are not compared.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use rustc_hash::FxHashMap;

use crate::config::PackConfig;
use crate::error::Result;
use crate::reflection::ReflectionDescription;
use crate::serialization::{compression, pack_codec, DecodedPack, FormatVersion};
use crate::shader::{
    CodeEntry, NativeResourceBindingMap, SamplerSplitMappingList, ShaderStage, VariantKey,
};

const SOURCE: &str = "galaxy3d::ShaderPack";

// ===== SHARED REPRESENTATION =====

/// Representation shared between clones of a pack
#[derive(Debug, Clone, Default)]
pub(crate) struct ShaderPackData {
    pub(crate) stage: ShaderStage,
    pub(crate) description: ReflectionDescription,
    pub(crate) shaders: FxHashMap<VariantKey, CodeEntry>,
    pub(crate) bindings: FxHashMap<VariantKey, NativeResourceBindingMap>,
    pub(crate) sampler_maps: FxHashMap<VariantKey, SamplerSplitMappingList>,
}

// ===== SHADER PACK =====

/// Copy-on-write bundle of shader representations
///
/// # Example
///
/// ```
/// use galaxy_3d_shader_pack::galaxy3d::shader::{
///     CodeEntry, ShaderPack, ShaderSource, ShaderStage, ShaderVersion, ShaderVersionFlags, VariantKey,
/// };
///
/// let key = VariantKey::standard(ShaderSource::Glsl, ShaderVersion::new(100, ShaderVersionFlags::GLSL_ES));
///
/// let mut pack = ShaderPack::new();
/// pack.set_stage(ShaderStage::Fragment);
/// pack.set_shader(key, CodeEntry::new("void main() {}", "main"));
///
/// let loaded = ShaderPack::from_serialized(&pack.serialized());
/// assert!(loaded.is_valid());
/// assert_eq!(loaded, pack);
/// assert_eq!(loaded.shader(&key).entry_point(), b"main");
/// ```
#[derive(Clone, Default)]
pub struct ShaderPack {
    d: Arc<ShaderPackData>,
}

impl ShaderPack {
    /// Create an empty (invalid) pack
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty pack for `stage`
    pub fn with_stage(stage: ShaderStage) -> Self {
        let mut pack = Self::new();
        pack.set_stage(stage);
        pack
    }

    /// Representation this handle may write to, cloned first if shared
    fn detach(&mut self) -> &mut ShaderPackData {
        Arc::make_mut(&mut self.d)
    }

    /// True when no other handle shares this pack's representation
    pub fn is_detached(&self) -> bool {
        Arc::strong_count(&self.d) == 1
    }

    /// True when both handles point at the same representation
    pub fn shares_data_with(&self, other: &ShaderPack) -> bool {
        Arc::ptr_eq(&self.d, &other.d)
    }

    /// A pack is valid once it holds at least one shader
    pub fn is_valid(&self) -> bool {
        !self.d.shaders.is_empty()
    }

    // ===== STAGE =====

    pub fn stage(&self) -> ShaderStage {
        self.d.stage
    }

    /// Set the stage. Setting the current stage does not detach.
    pub fn set_stage(&mut self, stage: ShaderStage) {
        if stage != self.d.stage {
            self.detach().stage = stage;
        }
    }

    // ===== DESCRIPTION =====

    pub fn description(&self) -> &ReflectionDescription {
        &self.d.description
    }

    /// Replace the reflection description. Always detaches.
    pub fn set_description(&mut self, description: ReflectionDescription) {
        self.detach().description = description;
    }

    // ===== SHADERS =====

    /// Keys of all stored shaders, in no particular order
    pub fn available_shaders(&self) -> Vec<VariantKey> {
        self.d.shaders.keys().copied().collect()
    }

    pub fn contains_shader(&self, key: &VariantKey) -> bool {
        self.d.shaders.contains_key(key)
    }

    /// Code stored at `key`, or an empty entry when absent
    pub fn shader(&self, key: &VariantKey) -> CodeEntry {
        self.d.shaders.get(key).cloned().unwrap_or_default()
    }

    /// Store `code` at `key`, replacing any previous entry.
    ///
    /// Storing an entry equal to the current one does not detach.
    pub fn set_shader(&mut self, key: VariantKey, code: CodeEntry) {
        if self.d.shaders.get(&key) == Some(&code) {
            return;
        }
        self.detach().shaders.insert(key, code);
    }

    pub fn remove_shader(&mut self, key: &VariantKey) {
        if !self.d.shaders.contains_key(key) {
            return;
        }
        self.detach().shaders.remove(key);
    }

    // ===== NATIVE RESOURCE BINDINGS =====

    /// Binding remap for `key`, or an empty map when absent or not applicable
    pub fn native_resource_binding_map(&self, key: &VariantKey) -> NativeResourceBindingMap {
        self.d.bindings.get(key).cloned().unwrap_or_default()
    }

    /// Binding and sampler split writes always detach, even when nothing changes
    pub fn set_resource_binding_map(&mut self, key: VariantKey, map: NativeResourceBindingMap) {
        self.detach().bindings.insert(key, map);
    }

    pub fn remove_resource_binding_map(&mut self, key: &VariantKey) {
        self.detach().bindings.remove(key);
    }

    // ===== SAMPLER SPLITS =====

    /// Sampler split list for `key`, or an empty list when absent
    pub fn separate_to_combined_image_sampler_mapping_list(&self, key: &VariantKey) -> SamplerSplitMappingList {
        self.d.sampler_maps.get(key).cloned().unwrap_or_default()
    }

    pub fn set_separate_to_combined_image_sampler_mapping_list(
        &mut self,
        key: VariantKey,
        list: SamplerSplitMappingList,
    ) {
        self.detach().sampler_maps.insert(key, list);
    }

    pub fn remove_separate_to_combined_image_sampler_mapping_list(&mut self, key: &VariantKey) {
        self.detach().sampler_maps.remove(key);
    }

    // ===== SERIALIZATION =====

    /// Serialize using the current format version and default settings.
    ///
    /// Returns an empty buffer (after logging) if encoding fails.
    pub fn serialized(&self) -> Vec<u8> {
        match self.serialized_with_config(FormatVersion::CURRENT, &PackConfig::default()) {
            Ok(bytes) => bytes,
            Err(e) => {
                crate::pack_error!(SOURCE, "Failed to serialize shader pack: {}", e);
                Vec::new()
            }
        }
    }

    /// Serialize as an older (still writable) format version
    pub fn serialized_as(&self, version: FormatVersion) -> Result<Vec<u8>> {
        self.serialized_with_config(version, &PackConfig::default())
    }

    pub fn serialized_with_config(&self, version: FormatVersion, config: &PackConfig) -> Result<Vec<u8>> {
        let stream = pack_codec::encode(&self.d, version)?;
        if version != FormatVersion::CURRENT {
            crate::pack_info!(
                SOURCE,
                "Wrote {} shader pack as format version {} (current is {})",
                self.d.stage,
                version,
                FormatVersion::CURRENT
            );
        }
        compression::compress(&stream, config.effective_compression_level())
    }

    /// Load a pack produced by any revision of `serialized`.
    ///
    /// Never fails: malformed data or an unknown version yields an invalid
    /// pack and an error log line. Check `is_valid()` afterwards.
    pub fn from_serialized(data: &[u8]) -> ShaderPack {
        Self::from_serialized_with_config(data, &PackConfig::default())
    }

    pub fn from_serialized_with_config(data: &[u8], config: &PackConfig) -> ShaderPack {
        match Self::try_from_serialized_with_config(data, config) {
            Ok(pack) => pack,
            Err(e) => {
                crate::pack_error!(SOURCE, "Failed to load shader pack: {}", e);
                ShaderPack::new()
            }
        }
    }

    /// Like `from_serialized`, but reports why loading failed
    pub fn try_from_serialized(data: &[u8]) -> Result<ShaderPack> {
        Self::try_from_serialized_with_config(data, &PackConfig::default())
    }

    pub fn try_from_serialized_with_config(data: &[u8], config: &PackConfig) -> Result<ShaderPack> {
        let stream = compression::decompress(data, config.max_decompressed_size)?;
        let decoded = pack_codec::decode(&stream)?;
        let pack = Self::from_decoded(decoded);
        crate::pack_debug!(
            SOURCE,
            "Loaded {} shader pack with {} shaders",
            pack.stage(),
            pack.d.shaders.len()
        );
        Ok(pack)
    }

    /// Build a pack from decoded stream sections
    pub fn from_decoded(decoded: DecodedPack) -> ShaderPack {
        let data = ShaderPackData {
            stage: decoded.stage,
            description: decoded.description.unwrap_or_default(),
            shaders: decoded.shaders.into_iter().collect(),
            bindings: decoded.bindings.unwrap_or_default().into_iter().collect(),
            sampler_maps: decoded.sampler_maps.unwrap_or_default().into_iter().collect(),
        };
        ShaderPack { d: Arc::new(data) }
    }
}

// ===== EQUALITY / HASH =====

impl PartialEq for ShaderPack {
    fn eq(&self, other: &Self) -> bool {
        if self.shares_data_with(other) {
            return true;
        }
        self.d.stage == other.d.stage && self.d.shaders == other.d.shaders
    }
}

impl Eq for ShaderPack {}

impl Hash for ShaderPack {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.d.stage.hash(state);
        let mut entries: Vec<_> = self.d.shaders.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.hash(state);
    }
}

impl fmt::Debug for ShaderPack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys = self.available_shaders();
        keys.sort();
        f.debug_struct("ShaderPack")
            .field("stage", &self.d.stage)
            .field("shaders", &keys)
            .field("description_valid", &self.d.description.is_valid())
            .finish()
    }
}

#[cfg(test)]
#[path = "shader_pack_tests.rs"]
mod tests;
