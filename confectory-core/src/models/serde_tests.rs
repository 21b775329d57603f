//! Serde serialization/deserialization tests for core types.
//!
//! These tests verify that model types serialize to the expected JSON shape
//! and survive a round-trip with all data preserved.

use crate::{Candy, CandyKind, CandyMetadata};

// ============================================================================
// CandyKind Serde Tests
// ============================================================================

#[test]
fn test_candy_kind_serde_roundtrip_all_variants() {
    for kind in CandyKind::all() {
        let json = serde_json::to_string(kind).unwrap();
        let deserialized: CandyKind = serde_json::from_str(&json).unwrap();
        assert_eq!(*kind, deserialized, "Round-trip failed for {:?}", kind);
    }
}

#[test]
fn test_candy_kind_serializes_lowercase() {
    // CandyKind uses serde(rename_all = "lowercase")
    assert_eq!(
        serde_json::to_string(&CandyKind::Cookie).unwrap(),
        r#""cookie""#
    );
    assert_eq!(
        serde_json::to_string(&CandyKind::Lollipop).unwrap(),
        r#""lollipop""#
    );
}

#[test]
fn test_candy_kind_invalid_deserialize() {
    let result: Result<CandyKind, _> = serde_json::from_str(r#""nougat""#);
    assert!(result.is_err());
}

// ============================================================================
// Candy Serde Tests
// ============================================================================

#[test]
fn test_candy_roundtrip_preserves_fields() {
    let cookie = Candy::of(CandyKind::Cookie);
    let json = serde_json::to_string(&cookie).unwrap();
    let parsed: Candy = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, cookie);
    assert_eq!(parsed.kind(), Some(CandyKind::Cookie));
    assert_eq!(parsed.name(), "Cookie");
    assert_eq!(
        parsed.recipe().unwrap(),
        ["all-purpose flour", "margarine", "sugar", "eggs", "milk"]
    );
}

#[test]
fn test_generic_candy_roundtrip() {
    let generic = Candy::generic();
    let json = serde_json::to_string(&generic).unwrap();
    let parsed: Candy = serde_json::from_str(&json).unwrap();

    assert!(parsed.is_generic());
    assert_eq!(parsed.recipe(), None);
}

// ============================================================================
// CandyMetadata Serde Tests
// ============================================================================

#[test]
fn test_metadata_roundtrip() {
    let meta = CandyMetadata::for_kind(CandyKind::Cookie);
    let json = serde_json::to_string(&meta).unwrap();
    let parsed: CandyMetadata = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.id, CandyKind::Cookie);
    assert_eq!(parsed.slug, "cookie");
}
