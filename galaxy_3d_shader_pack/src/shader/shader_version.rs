//! Versioned shading-language identifier
//!
//! A `ShaderVersion` pairs a numeric language version (e.g. GLSL 100, HLSL 50,
//! MSL 12) with dialect flags. It is ordered by version first, then by the
//! raw flag bits.

use bitflags::bitflags;
use std::cmp::Ordering;
use std::fmt;

bitflags! {
    /// Dialect flags attached to a shading-language version
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ShaderVersionFlags: u32 {
        /// GLSL ES (OpenGL ES / WebGL) rather than desktop GLSL
        const GLSL_ES = 0x01;
    }
}

impl Default for ShaderVersionFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Default language version when none is specified
pub const DEFAULT_SHADER_VERSION: i32 = 100;

/// Language version plus dialect flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderVersion {
    version: i32,
    flags: ShaderVersionFlags,
}

impl ShaderVersion {
    /// Create a version with the given flags
    pub fn new(version: i32, flags: ShaderVersionFlags) -> Self {
        Self { version, flags }
    }

    /// Create a version without dialect flags
    pub fn plain(version: i32) -> Self {
        Self::new(version, ShaderVersionFlags::empty())
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn set_version(&mut self, version: i32) {
        self.version = version;
    }

    pub fn flags(&self) -> ShaderVersionFlags {
        self.flags
    }

    pub fn set_flags(&mut self, flags: ShaderVersionFlags) {
        self.flags = flags;
    }
}

impl Default for ShaderVersion {
    fn default() -> Self {
        Self::plain(DEFAULT_SHADER_VERSION)
    }
}

impl PartialOrd for ShaderVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ShaderVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.version
            .cmp(&other.version)
            .then_with(|| self.flags.bits().cmp(&other.flags.bits()))
    }
}

impl fmt::Display for ShaderVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.version)?;
        if self.flags.contains(ShaderVersionFlags::GLSL_ES) {
            write!(f, " es")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "shader_version_tests.rs"]
mod tests;
