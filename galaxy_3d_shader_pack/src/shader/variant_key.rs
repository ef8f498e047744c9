//! Key identifying one representation inside a shader pack
//!
//! A pack holds the same logical shader in several shading languages, language
//! versions and pipeline variants. `VariantKey` is the (source, version,
//! variant) triple that selects one of them. Keys are totally ordered by
//! source, then version, then variant.

use std::fmt;
use crate::error::Error;
use crate::shader::ShaderVersion;

/// Shading language / bytecode format of a representation
///
/// Declaration order is the ordering used by `VariantKey`, and the
/// discriminants are the values stored in the serialized format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ShaderSource {
    /// SPIR-V binary
    #[default]
    Spirv = 0,
    /// GLSL source
    Glsl = 1,
    /// HLSL source
    Hlsl = 2,
    /// DXBC (Shader Model 5.x) bytecode
    Dxbc = 3,
    /// Metal Shading Language source
    Msl = 4,
    /// DXIL (Shader Model 6.x) bytecode
    Dxil = 5,
    /// Precompiled Metal library
    MetalLib = 6,
}

impl ShaderSource {
    /// All sources in declaration order
    pub const ALL: [ShaderSource; 7] = [
        ShaderSource::Spirv,
        ShaderSource::Glsl,
        ShaderSource::Hlsl,
        ShaderSource::Dxbc,
        ShaderSource::Msl,
        ShaderSource::Dxil,
        ShaderSource::MetalLib,
    ];

    pub fn to_raw(self) -> i32 {
        self as i32
    }

    /// Whether the representation is a binary blob rather than text
    pub fn is_binary(self) -> bool {
        matches!(
            self,
            ShaderSource::Spirv | ShaderSource::Dxbc | ShaderSource::Dxil | ShaderSource::MetalLib
        )
    }
}

impl TryFrom<i32> for ShaderSource {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        ShaderSource::ALL
            .get(usize::try_from(value).unwrap_or(usize::MAX))
            .copied()
            .ok_or(Error::InvalidEnumValue { kind: "ShaderSource", value })
    }
}

/// Pipeline variant of a representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ShaderVariant {
    /// The shader as written
    #[default]
    Standard = 0,
    /// Vertex shader rewritten for scene batching
    BatchableVertex = 1,
}

impl ShaderVariant {
    pub fn to_raw(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for ShaderVariant {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ShaderVariant::Standard),
            1 => Ok(ShaderVariant::BatchableVertex),
            _ => Err(Error::InvalidEnumValue { kind: "ShaderVariant", value }),
        }
    }
}

/// (source, version, variant) triple identifying one representation
///
/// Field order matters: the derived ordering compares `source` first, then
/// `source_version`, then `source_variant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct VariantKey {
    source: ShaderSource,
    source_version: ShaderVersion,
    source_variant: ShaderVariant,
}

impl VariantKey {
    pub fn new(source: ShaderSource, source_version: ShaderVersion, source_variant: ShaderVariant) -> Self {
        Self {
            source,
            source_version,
            source_variant,
        }
    }

    /// Key for the standard variant
    pub fn standard(source: ShaderSource, source_version: ShaderVersion) -> Self {
        Self::new(source, source_version, ShaderVariant::Standard)
    }

    pub fn source(&self) -> ShaderSource {
        self.source
    }

    pub fn set_source(&mut self, source: ShaderSource) {
        self.source = source;
    }

    pub fn source_version(&self) -> ShaderVersion {
        self.source_version
    }

    pub fn set_source_version(&mut self, version: ShaderVersion) {
        self.source_version = version;
    }

    pub fn source_variant(&self) -> ShaderVariant {
        self.source_variant
    }

    pub fn set_source_variant(&mut self, variant: ShaderVariant) {
        self.source_variant = variant;
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {} ({:?})",
            self.source, self.source_version, self.source_variant
        )
    }
}

#[cfg(test)]
#[path = "variant_key_tests.rs"]
mod tests;
