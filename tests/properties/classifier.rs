//! Property tests for path classification.

use proptest::prelude::*;

use docbundle::domain::services::classify;
use docbundle::domain::value_objects::PathCategory;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9_-]{1,8}(\\.md)?").unwrap()
}

fn rel_path() -> impl Strategy<Value = String> {
    proptest::collection::vec(segment(), 1..=4).prop_map(|parts| parts.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Anything below the cleared folder is Cleared with a
    /// leading-slash display path relative to that folder.
    #[test]
    fn property_cleared_paths_are_rewritten(rel in rel_path()) {
        let path = format!("cleared/{}", rel);
        let classified = classify(&path, "cleared", "combined");
        prop_assert_eq!(classified.category, PathCategory::Cleared);
        prop_assert_eq!(classified.display_path, format!("/{}", rel));
    }

    /// PROPERTY: Anything below the combined folder keeps its configured path.
    #[test]
    fn property_combined_paths_are_unchanged(rel in rel_path()) {
        let path = format!("combined/{}", rel);
        let classified = classify(&path, "cleared", "combined");
        prop_assert_eq!(classified.category, PathCategory::Combined);
        prop_assert_eq!(classified.display_path, path);
    }

    /// PROPERTY: A sibling sharing the folder name as a string prefix is Raw.
    #[test]
    fn property_prefix_siblings_are_raw(suffix in "[a-z0-9_-]{1,6}", rel in rel_path()) {
        let path = format!("cleared{}/{}", suffix, rel);
        let classified = classify(&path, "cleared", "combined");
        prop_assert_eq!(classified.category, PathCategory::Raw);
        prop_assert_eq!(classified.display_path, path);
    }

    /// PROPERTY: Classification is a pure function of its inputs.
    #[test]
    fn property_classify_is_deterministic(path in "[a-z./\\\\]{0,30}") {
        prop_assert_eq!(
            classify(&path, "cleared", "combined"),
            classify(&path, "cleared", "combined")
        );
    }
}
