//! Shader stage of a pack

use std::fmt;
use crate::error::Error;

/// Pipeline stage a shader pack is written for
///
/// The discriminants are the values stored in the serialized format and
/// must never be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ShaderStage {
    /// Vertex shader
    #[default]
    Vertex = 0,
    /// Tessellation control (hull) shader
    TessControl = 1,
    /// Tessellation evaluation (domain) shader
    TessEval = 2,
    /// Geometry shader
    Geometry = 3,
    /// Fragment/Pixel shader
    Fragment = 4,
    /// Compute shader
    Compute = 5,
}

impl ShaderStage {
    /// All stages in declaration order
    pub const ALL: [ShaderStage; 6] = [
        ShaderStage::Vertex,
        ShaderStage::TessControl,
        ShaderStage::TessEval,
        ShaderStage::Geometry,
        ShaderStage::Fragment,
        ShaderStage::Compute,
    ];

    /// Integer value written to the serialized format
    pub fn to_raw(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for ShaderStage {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ShaderStage::Vertex),
            1 => Ok(ShaderStage::TessControl),
            2 => Ok(ShaderStage::TessEval),
            3 => Ok(ShaderStage::Geometry),
            4 => Ok(ShaderStage::Fragment),
            5 => Ok(ShaderStage::Compute),
            _ => Err(Error::InvalidEnumValue { kind: "ShaderStage", value }),
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShaderStage::Vertex => "Vertex",
            ShaderStage::TessControl => "TessControl",
            ShaderStage::TessEval => "TessEval",
            ShaderStage::Geometry => "Geometry",
            ShaderStage::Fragment => "Fragment",
            ShaderStage::Compute => "Compute",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
#[path = "shader_stage_tests.rs"]
mod tests;
