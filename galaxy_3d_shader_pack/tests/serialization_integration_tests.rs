//! Integration tests for shader pack serialization
//!
//! Exercises the public save/load entry points across format revisions.
//!
//! Run with: cargo test --test serialization_integration_tests

use galaxy_3d_shader_pack::galaxy3d::{Error, PackConfig};
use galaxy_3d_shader_pack::galaxy3d::reflection::{
    BlockVariable, ImageFlags, ImageFormat, InOutVariable, ReflectionDescription, UniformBlock, VariableType,
};
use galaxy_3d_shader_pack::galaxy3d::serialization::{decode, FormatVersion, Section};
use galaxy_3d_shader_pack::galaxy3d::shader::{
    CodeEntry, NativeResourceBindingMap, SamplerSplitMapping, ShaderPack, ShaderSource, ShaderStage,
    ShaderVariant, ShaderVersion, ShaderVersionFlags, VariantKey,
};
use flate2::read::ZlibDecoder;
use std::io::Read;

// ============================================================================
// HELPERS
// ============================================================================

fn spirv() -> VariantKey {
    VariantKey::standard(ShaderSource::Spirv, ShaderVersion::plain(100))
}

fn glsl_330() -> VariantKey {
    VariantKey::standard(ShaderSource::Glsl, ShaderVersion::plain(330))
}

fn glsl_es_300_batchable() -> VariantKey {
    VariantKey::new(
        ShaderSource::Glsl,
        ShaderVersion::new(300, ShaderVersionFlags::GLSL_ES),
        ShaderVariant::BatchableVertex,
    )
}

fn hlsl_50() -> VariantKey {
    VariantKey::standard(ShaderSource::Hlsl, ShaderVersion::plain(50))
}

fn msl_12() -> VariantKey {
    VariantKey::standard(ShaderSource::Msl, ShaderVersion::plain(12))
}

fn vertex_description() -> ReflectionDescription {
    let mut desc = ReflectionDescription::new();
    desc.input_variables.push(InOutVariable::at_location("position", VariableType::Vec3, 0));
    let mut weights = InOutVariable::at_location("weights", VariableType::Float, 1);
    weights.array_dims = vec![4];
    desc.input_variables.push(weights);
    desc.output_variables.push(InOutVariable::at_location("v_uv", VariableType::Vec2, 0));

    desc.uniform_blocks.push(UniformBlock {
        block_name: "buf".to_string(),
        struct_name: "ubuf".to_string(),
        size: 64,
        binding: 0,
        descriptor_set: 0,
        members: vec![BlockVariable::new("mvp", VariableType::Mat4, 0, 64)],
    });

    let mut target = InOutVariable::at_binding("target", VariableType::Image2D, 2, 0);
    target.image_format = ImageFormat::Rgba16f;
    target.image_flags = ImageFlags::READ_ONLY | ImageFlags::WRITE_ONLY;
    desc.storage_images.push(target);
    desc
}

/// Vertex shader baked for every supported target
fn full_pack() -> ShaderPack {
    let mut pack = ShaderPack::with_stage(ShaderStage::Vertex);
    pack.set_description(vertex_description());

    pack.set_shader(spirv(), CodeEntry::new(vec![0x03, 0x02, 0x23, 0x07, 0x00, 0x00, 0x01, 0x00], "main"));
    pack.set_shader(glsl_330(), CodeEntry::new("#version 330\nvoid main() {}\n", "main"));
    pack.set_shader(glsl_es_300_batchable(), CodeEntry::new("#version 300 es\nvoid main() {}\n", "main"));
    pack.set_shader(hlsl_50(), CodeEntry::new("float4 main(float3 p : POSITION) : SV_Position { return 0; }", "main"));
    pack.set_shader(msl_12(), CodeEntry::new("vertex float4 main0() { return 0; }", "main0"));

    let mut hlsl_map = NativeResourceBindingMap::new();
    hlsl_map.insert(0, (0, -1));
    hlsl_map.insert(2, (-1, -1));
    pack.set_resource_binding_map(hlsl_50(), hlsl_map);

    let mut msl_map = NativeResourceBindingMap::new();
    msl_map.insert(0, (1, -1));
    pack.set_resource_binding_map(msl_12(), msl_map);

    pack.set_separate_to_combined_image_sampler_mapping_list(
        glsl_330(),
        vec![SamplerSplitMapping::new("SPIRV_Cross_Combinedtexsmp", 3, 4)],
    );
    pack
}

fn inflate(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    ZlibDecoder::new(&bytes[4..]).read_to_end(&mut out).unwrap();
    out
}

// ============================================================================
// ROUNDTRIPS
// ============================================================================

#[test]
fn test_full_pack_roundtrip() {
    let pack = full_pack();
    let loaded = ShaderPack::try_from_serialized(&pack.serialized()).unwrap();

    assert_eq!(loaded, pack);
    assert_eq!(loaded.description(), pack.description());

    let mut keys = loaded.available_shaders();
    keys.sort();
    let mut expected = pack.available_shaders();
    expected.sort();
    assert_eq!(keys, expected);

    for key in &expected {
        assert_eq!(loaded.shader(key), pack.shader(key));
        assert_eq!(loaded.native_resource_binding_map(key), pack.native_resource_binding_map(key));
        assert_eq!(
            loaded.separate_to_combined_image_sampler_mapping_list(key),
            pack.separate_to_combined_image_sampler_mapping_list(key)
        );
    }
}

#[test]
fn test_serialized_output_is_stable() {
    let bytes = full_pack().serialized();
    let reloaded = ShaderPack::from_serialized(&bytes);
    assert_eq!(reloaded.serialized(), bytes);
}

#[test]
fn test_header_announces_inflated_length() {
    let bytes = full_pack().serialized();
    let announced = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize;
    let stream = inflate(&bytes);
    assert_eq!(stream.len(), announced);
    assert_eq!(&stream[..4], &FormatVersion::CURRENT.0.to_be_bytes());
}

#[test]
fn test_compression_level_changes_size_not_content() {
    let pack = full_pack();
    let stored = pack
        .serialized_with_config(FormatVersion::CURRENT, &PackConfig { compression_level: 0, ..PackConfig::default() })
        .unwrap();
    let best = pack
        .serialized_with_config(FormatVersion::CURRENT, &PackConfig { compression_level: 42, ..PackConfig::default() })
        .unwrap();

    assert!(best.len() < stored.len());
    assert_eq!(inflate(&stored), inflate(&best));
    assert_eq!(ShaderPack::from_serialized(&stored), ShaderPack::from_serialized(&best));
}

// ============================================================================
// OLDER FORMAT REVISIONS
// ============================================================================

#[test]
fn test_version_5_loads_without_sampler_splits() {
    let pack = full_pack();
    let bytes = pack.serialized_as(FormatVersion::WITHOUT_SEPARATE_IMAGES_AND_SAMPLERS).unwrap();

    let decoded = decode(&inflate(&bytes)).unwrap();
    assert_eq!(decoded.version, FormatVersion::WITHOUT_SEPARATE_IMAGES_AND_SAMPLERS);
    assert_eq!(decoded.sampler_maps, Section::AbsentByVersion);

    let loaded = ShaderPack::try_from_serialized(&bytes).unwrap();
    assert_eq!(loaded, pack);
    assert_eq!(loaded.description(), pack.description());
    assert!(loaded.separate_to_combined_image_sampler_mapping_list(&glsl_330()).is_empty());
    assert_eq!(loaded.native_resource_binding_map(&hlsl_50()), pack.native_resource_binding_map(&hlsl_50()));
}

#[test]
fn test_version_4_loses_only_in_out_array_dims() {
    let pack = full_pack();
    let bytes = pack.serialized_as(FormatVersion::WITHOUT_VAR_ARRAY_DIMS).unwrap();
    let loaded = ShaderPack::try_from_serialized(&bytes).unwrap();

    assert_eq!(loaded, pack);
    let inputs = &loaded.description().input_variables;
    assert_eq!(inputs.len(), 2);
    assert_eq!(inputs[1].name, "weights");
    assert!(inputs[1].array_dims.is_empty());
    assert_eq!(loaded.description().uniform_blocks, pack.description().uniform_blocks);
    assert_eq!(loaded.description().storage_images, pack.description().storage_images);
}

#[test]
fn test_legacy_versions_are_read_only() {
    let pack = full_pack();
    for version in [FormatVersion::WITHOUT_BINDINGS, FormatVersion::WITH_BINARY_JSON, FormatVersion::WITH_CBOR] {
        assert!(pack.serialized_as(version).is_err(), "version {} must not be writable", version);
    }
}

// ============================================================================
// REJECTED INPUT
// ============================================================================

#[test]
fn test_size_limit_rejects_large_packs() {
    let bytes = full_pack().serialized();
    let config = PackConfig { max_decompressed_size: 64, ..PackConfig::default() };

    let err = ShaderPack::try_from_serialized_with_config(&bytes, &config).unwrap_err();
    assert!(matches!(err, Error::DecompressedSizeExceeded { limit: 64, .. }));
    assert!(!ShaderPack::from_serialized_with_config(&bytes, &config).is_valid());
}

#[test]
fn test_truncated_input_is_rejected() {
    let bytes = full_pack().serialized();
    for cut in [0, 2, 4, 10, bytes.len() / 2] {
        assert!(ShaderPack::try_from_serialized(&bytes[..cut]).is_err(), "cut at {} should fail", cut);
    }
}

#[test]
fn test_error_messages_are_readable() {
    let err = ShaderPack::try_from_serialized(&[1, 2]).unwrap_err();
    assert_eq!(err, Error::UnexpectedEof);
    assert_eq!(err.to_string(), "Unexpected end of stream");
}
