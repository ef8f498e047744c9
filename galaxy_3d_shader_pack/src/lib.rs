/*!
# Galaxy 3D Shader Pack

Container for one logical shader baked into many representations.

A shader pack holds, for a single pipeline stage, the code of the shader in
every language/version/variant it was compiled to (SPIR-V, GLSL, GLSL ES,
HLSL, MSL, ...), a reflection description of its interface, and per-target
resource binding remaps. Packs are cheap to clone (copy-on-write) and can be
serialized to a compact, versioned, zlib-compressed binary format that stays
loadable across format revisions.

## Architecture

- **ShaderPack**: Copy-on-write container, keyed by `VariantKey`
- **VariantKey**: (source language, version + flags, variant) lookup key
- **CodeEntry**: Shader code bytes plus entry point name
- **ReflectionDescription**: Inputs, outputs, blocks and resources of the shader
- **FormatVersion**: Revisions of the serialized format

## Example

```
use galaxy_3d_shader_pack::galaxy3d::shader::{
    CodeEntry, ShaderPack, ShaderSource, ShaderStage, ShaderVersion, VariantKey,
};

let mut pack = ShaderPack::with_stage(ShaderStage::Vertex);
pack.set_shader(
    VariantKey::standard(ShaderSource::Spirv, ShaderVersion::plain(100)),
    CodeEntry::new(vec![0x03, 0x02, 0x23, 0x07], "main"),
);

let bytes = pack.serialized();
assert_eq!(ShaderPack::from_serialized(&bytes), pack);
```
*/

// Internal modules
mod error;
pub mod log;
pub mod config;
pub mod shader;
pub mod reflection;
pub mod serialization;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Loader settings
    pub use crate::config::PackConfig;

    // The container itself
    pub use crate::shader::ShaderPack;

    // Logging sub-module (types and global logger, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        pub use crate::log::{set_logger, reset_logger, log, log_detailed};
        // Note: pack_* macros are NOT re-exported here - they are internal only
    }

    // Shader sub-module with the pack and its key/value types
    pub mod shader {
        pub use crate::shader::*;
    }

    // Reflection sub-module
    pub mod reflection {
        pub use crate::reflection::*;
    }

    // Serialization sub-module
    pub mod serialization {
        pub use crate::serialization::{FormatVersion, Section, DecodedPack};
        pub use crate::serialization::pack_codec::decode;
    }
}
