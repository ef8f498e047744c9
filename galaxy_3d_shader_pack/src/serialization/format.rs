//! Schema revisions of the serialized shader pack
//!
//! Every revision ever written is listed here. Optional sections are gated
//! by "introduced after" thresholds: a section is present in a stream when
//! the stream's version is greater than the revision that lacked it.

use std::fmt;

/// Format version tag at the start of every (uncompressed) pack stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FormatVersion(pub i32);

impl FormatVersion {
    /// No resource binding maps; description stored as binary JSON
    pub const WITHOUT_BINDINGS: FormatVersion = FormatVersion(1);
    /// Description stored as binary JSON
    pub const WITH_BINARY_JSON: FormatVersion = FormatVersion(2);
    /// Description stored as CBOR
    pub const WITH_CBOR: FormatVersion = FormatVersion(3);
    /// Binary description, but in/out variables carry no array dimensions
    pub const WITHOUT_VAR_ARRAY_DIMS: FormatVersion = FormatVersion(4);
    /// No separate-to-combined image sampler maps
    pub const WITHOUT_SEPARATE_IMAGES_AND_SAMPLERS: FormatVersion = FormatVersion(5);
    /// Current revision
    pub const CURRENT: FormatVersion = FormatVersion(6);

    /// Every revision ever shipped, oldest first
    pub const KNOWN: [FormatVersion; 6] = [
        FormatVersion::WITHOUT_BINDINGS,
        FormatVersion::WITH_BINARY_JSON,
        FormatVersion::WITH_CBOR,
        FormatVersion::WITHOUT_VAR_ARRAY_DIMS,
        FormatVersion::WITHOUT_SEPARATE_IMAGES_AND_SAMPLERS,
        FormatVersion::CURRENT,
    ];

    pub fn is_known(self) -> bool {
        Self::KNOWN.contains(&self)
    }

    /// The reflection description is in its binary encoding
    pub fn has_binary_description(self) -> bool {
        self > Self::WITH_CBOR
    }

    /// In/out variables carry array dimensions
    pub fn has_variable_array_dims(self) -> bool {
        self > Self::WITHOUT_VAR_ARRAY_DIMS
    }

    /// The native resource binding map section follows the shader entries
    pub fn has_resource_bindings(self) -> bool {
        self > Self::WITHOUT_BINDINGS
    }

    /// The sampler split map section follows the binding maps
    pub fn has_sampler_split_maps(self) -> bool {
        self > Self::WITHOUT_SEPARATE_IMAGES_AND_SAMPLERS
    }

    /// Whether this revision can be produced by the encoder
    ///
    /// Revisions whose description encoding is no longer supported can be
    /// read (with the description dropped) but never written.
    pub fn is_writable(self) -> bool {
        self.is_known() && self.has_binary_description()
    }
}

impl Default for FormatVersion {
    fn default() -> Self {
        FormatVersion::CURRENT
    }
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of decoding one optional section of a stream
#[derive(Debug, Clone, PartialEq)]
pub enum Section<T> {
    /// Section was present and decoded
    Present(T),
    /// The stream's revision predates the section
    AbsentByVersion,
    /// The section exists in an encoding this decoder no longer reads
    UnreadableLegacy,
}

impl<T: Default> Section<T> {
    /// Decoded value, or the default for absent and legacy sections
    pub fn unwrap_or_default(self) -> T {
        match self {
            Section::Present(value) => value,
            Section::AbsentByVersion | Section::UnreadableLegacy => T::default(),
        }
    }
}

impl<T> Section<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Section::Present(_))
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
