//! Shader pack and the value types it is keyed by

pub mod shader_stage;
pub mod shader_version;
pub mod variant_key;
pub mod code_entry;
pub mod resource_binding;
pub mod shader_pack;

pub use shader_stage::ShaderStage;
pub use shader_version::{ShaderVersion, ShaderVersionFlags, DEFAULT_SHADER_VERSION};
pub use variant_key::{ShaderSource, ShaderVariant, VariantKey};
pub use code_entry::CodeEntry;
pub use resource_binding::{
    NativeResourceBindingMap,
    SamplerSplitMapping, SamplerSplitMappingList,
    UNUSED_NATIVE_BINDING, is_active_binding,
};
pub use shader_pack::ShaderPack;
