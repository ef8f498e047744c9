use super::*;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_default_is_100_without_flags() {
    let v = ShaderVersion::default();
    assert_eq!(v.version(), 100);
    assert!(v.flags().is_empty());
}

#[test]
fn test_setters() {
    let mut v = ShaderVersion::plain(330);
    v.set_version(300);
    v.set_flags(ShaderVersionFlags::GLSL_ES);
    assert_eq!(v, ShaderVersion::new(300, ShaderVersionFlags::GLSL_ES));
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_version_number_dominates() {
    let es_100 = ShaderVersion::new(100, ShaderVersionFlags::GLSL_ES);
    let desktop_120 = ShaderVersion::plain(120);
    // Higher version wins even though the lower one has flags set
    assert!(es_100 < desktop_120);
}

#[test]
fn test_flags_break_ties() {
    let desktop = ShaderVersion::plain(100);
    let es = ShaderVersion::new(100, ShaderVersionFlags::GLSL_ES);
    assert_ne!(desktop, es);
    assert!(desktop < es);
    assert!(es > desktop);
}

#[test]
fn test_equal_versions_compare_equal() {
    let a = ShaderVersion::new(310, ShaderVersionFlags::GLSL_ES);
    let b = ShaderVersion::new(310, ShaderVersionFlags::GLSL_ES);
    assert_eq!(a.cmp(&b), Ordering::Equal);
}

#[test]
fn test_sort_is_lexicographic() {
    let mut versions = vec![
        ShaderVersion::plain(330),
        ShaderVersion::new(100, ShaderVersionFlags::GLSL_ES),
        ShaderVersion::plain(100),
        ShaderVersion::new(300, ShaderVersionFlags::GLSL_ES),
    ];
    versions.sort();
    assert_eq!(
        versions,
        vec![
            ShaderVersion::plain(100),
            ShaderVersion::new(100, ShaderVersionFlags::GLSL_ES),
            ShaderVersion::new(300, ShaderVersionFlags::GLSL_ES),
            ShaderVersion::plain(330),
        ]
    );
}

// ============================================================================
// Display
// ============================================================================

#[test]
fn test_display() {
    assert_eq!(ShaderVersion::plain(50).to_string(), "50");
    assert_eq!(ShaderVersion::new(100, ShaderVersionFlags::GLSL_ES).to_string(), "100 es");
}
