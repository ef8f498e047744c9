//! Shader interface reflection
//!
//! Produced by the shader baker alongside the code, consumed by pipelines to
//! build resource layouts.

pub mod types;
pub mod description;

pub use types::{VariableType, ImageFormat, ImageFlags};
pub use description::{
    ReflectionDescription,
    InOutVariable, BlockVariable,
    UniformBlock, PushConstantBlock, StorageBlock,
    UNDECORATED,
};
