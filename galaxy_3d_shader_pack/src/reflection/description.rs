//! Reflection description of a shader's interface
//!
//! Describes what a shader consumes and produces: vertex inputs, fragment
//! outputs, uniform/push-constant/storage blocks, samplers and images, and
//! the compute work group size. Bindings and locations are in the unified
//! (SPIR-V style) binding space; see `NativeResourceBindingMap` for the
//! translation to register-based targets.
//!
//! The description serializes itself. The pack's format version is passed
//! through so older revisions (without in/out array dimensions) still decode.

use std::io::{Read, Write};

use crate::error::{Error, Result};
use crate::reflection::{ImageFlags, ImageFormat, VariableType};
use crate::serialization::stream::{ReadStreamExt, WriteStreamExt};
use crate::serialization::FormatVersion;

/// Location/binding value for "not decorated"
pub const UNDECORATED: i32 = -1;

/// Deepest struct nesting accepted when encoding or decoding block members
pub const MAX_STRUCT_DEPTH: usize = 32;

// ============================================================================
// Interface entries
// ============================================================================

/// Shader input, output, sampler or image variable
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InOutVariable {
    pub name: String,
    pub var_type: VariableType,
    pub location: i32,
    pub binding: i32,
    pub descriptor_set: i32,
    /// Only meaningful for storage images
    pub image_format: ImageFormat,
    /// Only meaningful for storage images
    pub image_flags: ImageFlags,
    /// Array dimensions, outermost first; empty for non-arrays
    pub array_dims: Vec<i32>,
}

impl Default for InOutVariable {
    fn default() -> Self {
        Self {
            name: String::new(),
            var_type: VariableType::Unknown,
            location: UNDECORATED,
            binding: UNDECORATED,
            descriptor_set: UNDECORATED,
            image_format: ImageFormat::Unknown,
            image_flags: ImageFlags::empty(),
            array_dims: Vec::new(),
        }
    }
}

impl InOutVariable {
    /// Vertex input or fragment output at `location`
    pub fn at_location(name: impl Into<String>, var_type: VariableType, location: i32) -> Self {
        Self {
            name: name.into(),
            var_type,
            location,
            ..Default::default()
        }
    }

    /// Resource (sampler, image) at `binding` in `descriptor_set`
    pub fn at_binding(name: impl Into<String>, var_type: VariableType, binding: i32, descriptor_set: i32) -> Self {
        Self {
            name: name.into(),
            var_type,
            binding,
            descriptor_set,
            ..Default::default()
        }
    }
}

/// Member of a uniform, push constant or storage block
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BlockVariable {
    pub name: String,
    pub var_type: VariableType,
    pub offset: i32,
    pub size: i32,
    pub array_dims: Vec<i32>,
    pub array_stride: i32,
    pub matrix_stride: i32,
    pub matrix_is_row_major: bool,
    /// Members when `var_type` is `Struct`
    pub struct_members: Vec<BlockVariable>,
}

impl BlockVariable {
    pub fn new(name: impl Into<String>, var_type: VariableType, offset: i32, size: i32) -> Self {
        Self {
            name: name.into(),
            var_type,
            offset,
            size,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UniformBlock {
    pub block_name: String,
    /// Instance name (may be empty for anonymous blocks)
    pub struct_name: String,
    pub size: i32,
    pub binding: i32,
    pub descriptor_set: i32,
    pub members: Vec<BlockVariable>,
}

impl Default for UniformBlock {
    fn default() -> Self {
        Self {
            block_name: String::new(),
            struct_name: String::new(),
            size: 0,
            binding: UNDECORATED,
            descriptor_set: UNDECORATED,
            members: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PushConstantBlock {
    pub name: String,
    pub size: i32,
    pub members: Vec<BlockVariable>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageBlock {
    pub block_name: String,
    pub instance_name: String,
    /// Size excluding a trailing runtime-sized array
    pub known_size: i32,
    pub binding: i32,
    pub descriptor_set: i32,
    pub members: Vec<BlockVariable>,
}

impl Default for StorageBlock {
    fn default() -> Self {
        Self {
            block_name: String::new(),
            instance_name: String::new(),
            known_size: 0,
            binding: UNDECORATED,
            descriptor_set: UNDECORATED,
            members: Vec::new(),
        }
    }
}

// ============================================================================
// ReflectionDescription
// ============================================================================

/// Interface description of one shader
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ReflectionDescription {
    pub input_variables: Vec<InOutVariable>,
    pub output_variables: Vec<InOutVariable>,
    pub uniform_blocks: Vec<UniformBlock>,
    pub push_constant_blocks: Vec<PushConstantBlock>,
    pub storage_blocks: Vec<StorageBlock>,
    pub combined_image_samplers: Vec<InOutVariable>,
    pub separate_images: Vec<InOutVariable>,
    pub separate_samplers: Vec<InOutVariable>,
    pub storage_images: Vec<InOutVariable>,
    /// `local_size_x/y/z` of a compute shader, zero otherwise
    pub compute_work_group_size: [u32; 3],
}

impl ReflectionDescription {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the description carries any interface information
    pub fn is_valid(&self) -> bool {
        !self.input_variables.is_empty()
            || !self.output_variables.is_empty()
            || !self.uniform_blocks.is_empty()
            || !self.push_constant_blocks.is_empty()
            || !self.storage_blocks.is_empty()
            || !self.combined_image_samplers.is_empty()
            || !self.separate_images.is_empty()
            || !self.separate_samplers.is_empty()
            || !self.storage_images.is_empty()
            || self.compute_work_group_size.iter().any(|&n| n != 0)
    }

    /// Uniform block bound at `binding`, if any
    pub fn uniform_block_at(&self, binding: i32) -> Option<&UniformBlock> {
        self.uniform_blocks.iter().find(|b| b.binding == binding)
    }

    /// Combined image sampler named `name`, if any
    pub fn combined_image_sampler(&self, name: &str) -> Option<&InOutVariable> {
        self.combined_image_samplers.iter().find(|v| v.name == name)
    }

    // ===== SERIALIZATION =====

    /// Write the binary encoding for the given pack format version
    pub fn serialize<W: Write + ?Sized>(&self, w: &mut W, version: FormatVersion) -> Result<()> {
        write_in_out_list(w, &self.input_variables, version)?;
        write_in_out_list(w, &self.output_variables, version)?;

        w.write_count(self.uniform_blocks.len())?;
        for block in &self.uniform_blocks {
            w.write_string(&block.block_name)?;
            w.write_string(&block.struct_name)?;
            w.write_i32(block.size)?;
            w.write_i32(block.binding)?;
            w.write_i32(block.descriptor_set)?;
            write_block_members(w, &block.members, 0)?;
        }

        w.write_count(self.push_constant_blocks.len())?;
        for block in &self.push_constant_blocks {
            w.write_string(&block.name)?;
            w.write_i32(block.size)?;
            write_block_members(w, &block.members, 0)?;
        }

        w.write_count(self.storage_blocks.len())?;
        for block in &self.storage_blocks {
            w.write_string(&block.block_name)?;
            w.write_string(&block.instance_name)?;
            w.write_i32(block.known_size)?;
            w.write_i32(block.binding)?;
            w.write_i32(block.descriptor_set)?;
            write_block_members(w, &block.members, 0)?;
        }

        write_in_out_list(w, &self.combined_image_samplers, version)?;
        write_in_out_list(w, &self.separate_images, version)?;
        write_in_out_list(w, &self.separate_samplers, version)?;
        write_in_out_list(w, &self.storage_images, version)?;

        for n in self.compute_work_group_size {
            w.write_u32(n)?;
        }
        Ok(())
    }

    /// Read the binary encoding written by `serialize` with the same version
    pub fn deserialize<R: Read + ?Sized>(r: &mut R, version: FormatVersion) -> Result<Self> {
        let mut desc = ReflectionDescription::new();

        desc.input_variables = read_in_out_list(r, version)?;
        desc.output_variables = read_in_out_list(r, version)?;

        let count = r.read_count()?;
        for _ in 0..count {
            desc.uniform_blocks.push(UniformBlock {
                block_name: r.read_string()?,
                struct_name: r.read_string()?,
                size: r.read_i32()?,
                binding: r.read_i32()?,
                descriptor_set: r.read_i32()?,
                members: read_block_members(r, 0)?,
            });
        }

        let count = r.read_count()?;
        for _ in 0..count {
            desc.push_constant_blocks.push(PushConstantBlock {
                name: r.read_string()?,
                size: r.read_i32()?,
                members: read_block_members(r, 0)?,
            });
        }

        let count = r.read_count()?;
        for _ in 0..count {
            desc.storage_blocks.push(StorageBlock {
                block_name: r.read_string()?,
                instance_name: r.read_string()?,
                known_size: r.read_i32()?,
                binding: r.read_i32()?,
                descriptor_set: r.read_i32()?,
                members: read_block_members(r, 0)?,
            });
        }

        desc.combined_image_samplers = read_in_out_list(r, version)?;
        desc.separate_images = read_in_out_list(r, version)?;
        desc.separate_samplers = read_in_out_list(r, version)?;
        desc.storage_images = read_in_out_list(r, version)?;

        for n in desc.compute_work_group_size.iter_mut() {
            *n = r.read_u32()?;
        }
        Ok(desc)
    }
}

// ============================================================================
// Encoding helpers
// ============================================================================

fn write_array_dims<W: Write + ?Sized>(w: &mut W, dims: &[i32]) -> Result<()> {
    w.write_count(dims.len())?;
    for &d in dims {
        w.write_i32(d)?;
    }
    Ok(())
}

fn read_array_dims<R: Read + ?Sized>(r: &mut R) -> Result<Vec<i32>> {
    let count = r.read_count()?;
    let mut dims = Vec::new();
    for _ in 0..count {
        dims.push(r.read_i32()?);
    }
    Ok(dims)
}

fn write_in_out_list<W: Write + ?Sized>(w: &mut W, vars: &[InOutVariable], version: FormatVersion) -> Result<()> {
    w.write_count(vars.len())?;
    for v in vars {
        w.write_string(&v.name)?;
        w.write_i32(v.var_type.to_raw())?;
        w.write_i32(v.location)?;
        w.write_i32(v.binding)?;
        w.write_i32(v.descriptor_set)?;
        w.write_i32(v.image_format.to_raw())?;
        w.write_u32(v.image_flags.bits())?;
        if version.has_variable_array_dims() {
            write_array_dims(w, &v.array_dims)?;
        }
    }
    Ok(())
}

fn read_in_out_list<R: Read + ?Sized>(r: &mut R, version: FormatVersion) -> Result<Vec<InOutVariable>> {
    let count = r.read_count()?;
    let mut vars = Vec::new();
    for _ in 0..count {
        let mut v = InOutVariable {
            name: r.read_string()?,
            var_type: VariableType::try_from(r.read_i32()?)?,
            location: r.read_i32()?,
            binding: r.read_i32()?,
            descriptor_set: r.read_i32()?,
            image_format: ImageFormat::try_from(r.read_i32()?)?,
            image_flags: ImageFlags::from_bits_retain(r.read_u32()?),
            array_dims: Vec::new(),
        };
        if version.has_variable_array_dims() {
            v.array_dims = read_array_dims(r)?;
        }
        vars.push(v);
    }
    Ok(vars)
}

fn nesting_too_deep() -> Error {
    Error::Corrupt(format!("block members nested deeper than {}", MAX_STRUCT_DEPTH))
}

fn write_block_members<W: Write + ?Sized>(w: &mut W, members: &[BlockVariable], depth: usize) -> Result<()> {
    // Mirrors the limit in read_block_members
    if depth > MAX_STRUCT_DEPTH {
        return Err(nesting_too_deep());
    }
    w.write_count(members.len())?;
    for m in members {
        w.write_string(&m.name)?;
        w.write_i32(m.var_type.to_raw())?;
        w.write_i32(m.offset)?;
        w.write_i32(m.size)?;
        write_array_dims(w, &m.array_dims)?;
        w.write_i32(m.array_stride)?;
        w.write_i32(m.matrix_stride)?;
        w.write_bool(m.matrix_is_row_major)?;
        write_block_members(w, &m.struct_members, depth + 1)?;
    }
    Ok(())
}

fn read_block_members<R: Read + ?Sized>(r: &mut R, depth: usize) -> Result<Vec<BlockVariable>> {
    if depth > MAX_STRUCT_DEPTH {
        return Err(nesting_too_deep());
    }
    let count = r.read_count()?;
    let mut members = Vec::new();
    for _ in 0..count {
        members.push(BlockVariable {
            name: r.read_string()?,
            var_type: VariableType::try_from(r.read_i32()?)?,
            offset: r.read_i32()?,
            size: r.read_i32()?,
            array_dims: read_array_dims(r)?,
            array_stride: r.read_i32()?,
            matrix_stride: r.read_i32()?,
            matrix_is_row_major: r.read_bool()?,
            struct_members: read_block_members(r, depth + 1)?,
        });
    }
    Ok(members)
}

#[cfg(test)]
#[path = "description_tests.rs"]
mod tests;
