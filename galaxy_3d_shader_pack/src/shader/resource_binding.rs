//! Cross-API resource binding remaps
//!
//! Shaders are reflected in a unified binding space (one binding number per
//! resource, SPIR-V style). Register-based targets need other numbers:
//! - `NativeResourceBindingMap` translates a unified binding into the native
//!   binding(s). The second value is only meaningful for combined image
//!   samplers, where it holds the sampler register.
//! - `SamplerSplitMapping` records how a combined image sampler was split into
//!   a separate texture and sampler for targets without combined samplers.

use std::collections::BTreeMap;

/// Native binding value for a resource that is declared but never referenced
pub const UNUSED_NATIVE_BINDING: i32 = -1;

/// Unified binding number -> (native binding, native sampler binding)
pub type NativeResourceBindingMap = BTreeMap<i32, (i32, i32)>;

/// Split of one combined image sampler into separate texture and sampler bindings
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SamplerSplitMapping {
    /// Name of the combined sampler in the unified reflection data
    pub combined_sampler_name: Vec<u8>,
    /// Native binding of the texture half
    pub texture_binding: i32,
    /// Native binding of the sampler half
    pub sampler_binding: i32,
}

impl SamplerSplitMapping {
    pub fn new(combined_sampler_name: impl Into<Vec<u8>>, texture_binding: i32, sampler_binding: i32) -> Self {
        Self {
            combined_sampler_name: combined_sampler_name.into(),
            texture_binding,
            sampler_binding,
        }
    }
}

/// All sampler splits for one key
pub type SamplerSplitMappingList = Vec<SamplerSplitMapping>;

/// Whether a native binding pair refers to an active binding
///
/// A primary value of -1 marks a resource that is declared in the shader
/// interface but not referenced by the generated code.
pub fn is_active_binding(native: (i32, i32)) -> bool {
    native.0 != UNUSED_NATIVE_BINDING
}
