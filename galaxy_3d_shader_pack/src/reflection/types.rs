//! Enumerations used by reflection data
//!
//! Every enum here is stored as an `i32` in the serialized format, so the
//! discriminants are fixed and new values are only ever appended.

use bitflags::bitflags;
use crate::error::Error;

/// Declares a fieldless enum with fixed wire values, `to_raw()` and `TryFrom<i32>`
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $value ),+
        }

        impl $name {
            pub fn to_raw(self) -> i32 {
                self as i32
            }
        }

        impl TryFrom<i32> for $name {
            type Error = Error;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                match value {
                    $( x if x == $value => Ok($name::$variant), )+
                    _ => Err(Error::InvalidEnumValue { kind: stringify!($name), value }),
                }
            }
        }
    };
}

wire_enum! {
    /// Type of a shader interface variable or block member
    pub enum VariableType {
        Unknown = 0,

        Float = 1,
        Vec2 = 2,
        Vec3 = 3,
        Vec4 = 4,
        Mat2 = 5,
        Mat2x3 = 6,
        Mat2x4 = 7,
        Mat3 = 8,
        Mat3x2 = 9,
        Mat3x4 = 10,
        Mat4 = 11,
        Mat4x2 = 12,
        Mat4x3 = 13,

        Int = 14,
        Int2 = 15,
        Int3 = 16,
        Int4 = 17,

        Uint = 18,
        Uint2 = 19,
        Uint3 = 20,
        Uint4 = 21,

        Bool = 22,
        Bool2 = 23,
        Bool3 = 24,
        Bool4 = 25,

        Double = 26,
        Double2 = 27,
        Double3 = 28,
        Double4 = 29,

        Sampler1D = 30,
        Sampler2D = 31,
        Sampler2DMS = 32,
        Sampler3D = 33,
        SamplerCube = 34,
        Sampler1DArray = 35,
        Sampler2DArray = 36,
        Sampler2DMSArray = 37,
        SamplerCubeArray = 38,
        SamplerRect = 39,
        SamplerBuffer = 40,
        SamplerExternalOES = 41,
        /// Standalone sampler object (separate sampler model)
        Sampler = 42,

        Image1D = 43,
        Image2D = 44,
        Image2DMS = 45,
        Image3D = 46,
        ImageCube = 47,
        Image1DArray = 48,
        Image2DArray = 49,
        Image2DMSArray = 50,
        ImageCubeArray = 51,
        ImageRect = 52,
        ImageBuffer = 53,

        /// Sampled texture without sampler (separate image model)
        Texture1D = 54,
        Texture2D = 55,
        Texture2DMS = 56,
        Texture3D = 57,
        TextureCube = 58,
        Texture1DArray = 59,
        Texture2DArray = 60,
        Texture2DMSArray = 61,
        TextureCubeArray = 62,
        TextureBuffer = 63,

        Struct = 64,
    }
}

impl Default for VariableType {
    fn default() -> Self {
        VariableType::Unknown
    }
}

impl VariableType {
    /// Combined image sampler types
    pub fn is_combined_sampler(self) -> bool {
        (VariableType::Sampler1D.to_raw()..=VariableType::SamplerExternalOES.to_raw())
            .contains(&self.to_raw())
    }

    /// Storage image types
    pub fn is_storage_image(self) -> bool {
        (VariableType::Image1D.to_raw()..=VariableType::ImageBuffer.to_raw()).contains(&self.to_raw())
    }

    /// Separate (sampler-less) texture types
    pub fn is_separate_image(self) -> bool {
        (VariableType::Texture1D.to_raw()..=VariableType::TextureBuffer.to_raw())
            .contains(&self.to_raw())
    }
}

wire_enum! {
    /// Declared format of a storage image
    pub enum ImageFormat {
        Unknown = 0,
        Rgba32f = 1,
        Rgba16f = 2,
        R32f = 3,
        Rgba8 = 4,
        Rgba8Snorm = 5,
        Rg32f = 6,
        Rg16f = 7,
        R11fG11fB10f = 8,
        R16f = 9,
        Rgba16 = 10,
        Rgb10A2 = 11,
        Rg16 = 12,
        Rg8 = 13,
        R16 = 14,
        R8 = 15,
        Rgba16Snorm = 16,
        Rg16Snorm = 17,
        Rg8Snorm = 18,
        R16Snorm = 19,
        R8Snorm = 20,
        Rgba32i = 21,
        Rgba16i = 22,
        Rgba8i = 23,
        R32i = 24,
        Rg32i = 25,
        Rg16i = 26,
        Rg8i = 27,
        R16i = 28,
        R8i = 29,
        Rgba32ui = 30,
        Rgba16ui = 31,
        Rgba8ui = 32,
        R32ui = 33,
        Rgb10a2ui = 34,
        Rg32ui = 35,
        Rg16ui = 36,
        Rg8ui = 37,
        R16ui = 38,
        R8ui = 39,
    }
}

impl Default for ImageFormat {
    fn default() -> Self {
        ImageFormat::Unknown
    }
}

bitflags! {
    /// Access qualifiers of a storage image
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ImageFlags: u32 {
        const READ_ONLY = 0x01;
        const WRITE_ONLY = 0x02;
    }
}
