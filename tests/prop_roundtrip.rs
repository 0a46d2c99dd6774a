/// Property-based tests for serializer round-trips and path writes.
///
/// Strategies generate trees of JSON-safe scalars (strings, integers, finite
/// doubles, booleans, null) nested in mappings and sequences up to three
/// levels deep, plus dotted paths over lowercase keys.
use proptest::prelude::*;
use treepath::config::Configuration;
use treepath::document::parser::{JsonSerializer, Serializer, YamlSerializer};
use treepath::document::{Mapping, TreeValue};
use treepath::navigator;

// ============================================================================
// Strategies
// ============================================================================

fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,10}").unwrap()
}

fn arb_scalar() -> impl Strategy<Value = TreeValue> {
    prop_oneof![
        prop::string::string_regex("s[a-z0-9 ]{0,12}[a-z]")
            .unwrap()
            .prop_map(TreeValue::from),
        any::<i64>().prop_map(TreeValue::from),
        (-1.0e6..1.0e6f64).prop_map(TreeValue::from),
        any::<bool>().prop_map(TreeValue::from),
        Just(TreeValue::null()),
    ]
}

fn arb_value() -> impl Strategy<Value = TreeValue> {
    arb_scalar().prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(TreeValue::Sequence),
            arb_mapping_of(inner).prop_map(TreeValue::Mapping),
        ]
    })
}

fn arb_mapping_of(
    values: impl Strategy<Value = TreeValue>,
) -> impl Strategy<Value = Mapping> {
    prop::collection::vec((arb_key(), values), 0..6)
        .prop_map(|entries| entries.into_iter().collect())
}

fn arb_root() -> impl Strategy<Value = Mapping> {
    arb_mapping_of(arb_value())
}

fn arb_path() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_key(), 1..5)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// parse(render(tree)) == tree for YAML.
    #[test]
    fn roundtrip_yaml(root in arb_root()) {
        let text = YamlSerializer.render(&root).unwrap();
        let parsed = YamlSerializer.parse(&text).unwrap();
        prop_assert_eq!(parsed, root, "YAML:\n{}", text);
    }

    /// parse(render(tree)) == tree for JSON.
    #[test]
    fn roundtrip_json(root in arb_root()) {
        let text = JsonSerializer.render(&root).unwrap();
        let parsed = JsonSerializer.parse(&text).unwrap();
        prop_assert_eq!(parsed, root, "JSON:\n{}", text);
    }

    /// set(path, v) then get(path) == v on trees without sequences.
    #[test]
    fn write_then_read(
        root in arb_mapping_of(arb_scalar()),
        segments in arb_path(),
        value in arb_value(),
    ) {
        let config = Configuration::default();
        let path = segments.join(".");
        let mut tree = TreeValue::Mapping(root);

        navigator::set(&mut tree, path.as_str(), value.clone(), &config);
        prop_assert_eq!(navigator::get(&tree, path.as_str(), &config), Some(&value));
    }

    /// remove(path) then get(path) is not found.
    #[test]
    fn delete_then_read(root in arb_root(), segments in arb_path()) {
        let config = Configuration::default();
        let path = segments.join(".");
        let mut tree = TreeValue::Mapping(root);

        navigator::remove(&mut tree, path.as_str(), &config);
        prop_assert!(navigator::get(&tree, path.as_str(), &config).is_none());
    }

    /// get("") returns the root and remove("") empties it.
    #[test]
    fn empty_path_addresses_root(root in arb_root()) {
        let config = Configuration::default();
        let mut tree = TreeValue::Mapping(root);

        prop_assert_eq!(navigator::get(&tree, "", &config), Some(&tree));
        navigator::remove(&mut tree, "", &config);
        prop_assert_eq!(tree, TreeValue::empty_mapping());
    }
}
