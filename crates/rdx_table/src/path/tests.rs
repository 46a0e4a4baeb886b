use super::*;
use pretty_assertions::assert_eq;
use std::path::Path;

#[test]
fn parse_and_display() {
    let path = TraitPath::parse("core::default::Default").unwrap();
    assert_eq!(path.name(), "Default");
    assert_eq!(path.module(), ["core".to_owned(), "default".to_owned()]);
    assert_eq!(path.to_string(), "core::default::Default");
}

#[test]
fn fragment_path_matches_site_layout() {
    let path: TraitPath = "core::default::Default".parse().unwrap();
    assert_eq!(
        path.fragment_path(),
        Path::new("implementors/core/default/trait.Default.js")
    );
}

#[test]
fn single_segment_path_sits_at_fragment_root() {
    let path = TraitPath::parse("Marker").unwrap();
    assert!(path.module().is_empty());
    assert_eq!(path.fragment_path(), Path::new("implementors/trait.Marker.js"));
}

#[test]
fn empty_path_rejected() {
    assert!(matches!(
        TraitPath::parse("  "),
        Err(TableError::EmptyTraitPath)
    ));
}

#[test]
fn bad_segments_rejected() {
    for bad in ["core::", "::Default", "core::1st", "core::Vec<T>", "a b"] {
        match TraitPath::parse(bad) {
            Err(TableError::InvalidSegment { path, .. }) => assert_eq!(path, bad),
            other => panic!("expected InvalidSegment for {bad:?}, got {other:?}"),
        }
    }
}
