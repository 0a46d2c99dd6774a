//! Integration tests for typed getters and the missing-value policies.

use treepath::config::Configuration;
use treepath::document::tree::Document;
use treepath::document::TreeValue;

fn fixture() -> Document {
    Document::from_yaml_str(include_str!("fixtures/sample.yaml")).unwrap()
}

/// Fixture addressed with null fallbacks for scalars and lists.
fn strict() -> Document {
    let mut doc = fixture();
    doc.set_configuration(Configuration::default().with_missing_returns_empty(false));
    doc
}

/// Fixture addressed with zero-value fallbacks.
fn lenient() -> Document {
    let mut doc = fixture();
    doc.set_configuration(Configuration::default().with_missing_returns_null(false));
    doc
}

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn test_get_string() {
    let doc = strict();
    let view = doc.view();
    assert_eq!(view.get_string("notExist"), None);
    assert_eq!(view.get_string("core").as_deref(), Some("foo"));
    assert_eq!(view.get_string("inty").as_deref(), Some("4"));
    assert_eq!(view.get_string("doubley").as_deref(), Some("4.5"));
    assert_eq!(view.get_string(""), Some(doc.root().to_string()));
    assert_eq!(view.get_string(None::<&str>), None);
}

#[test]
fn test_get_integer() {
    let doc = strict();
    let view = doc.view();
    assert_eq!(view.get_integer("notExist"), None);
    assert_eq!(view.get_integer("core"), None);
    assert_eq!(view.get_integer("inty"), Some(4));
    assert_eq!(view.get_integer("doubley"), Some(4));
    assert_eq!(view.get_integer(""), None);
    assert_eq!(view.get_integer(None::<&str>), None);
}

#[test]
fn test_get_double() {
    let doc = strict();
    let view = doc.view();
    assert_eq!(view.get_double("notExist"), None);
    assert_eq!(view.get_double("core"), None);
    assert_eq!(view.get_double("inty"), Some(4.0));
    assert_eq!(view.get_double("doubley"), Some(4.5));
    assert_eq!(view.get_double(""), None);
}

#[test]
fn test_get_boolean() {
    let doc = strict();
    let view = doc.view();
    assert_eq!(view.get_boolean("notExist"), None);
    assert_eq!(view.get_boolean("core"), Some(false));
    assert_eq!(view.get_boolean("inty"), Some(false));
    assert_eq!(view.get_boolean("doubley"), Some(false));
    assert_eq!(view.get_boolean("booley"), Some(true));
    assert_eq!(view.get_boolean(""), Some(false));
    assert_eq!(view.get_boolean(None::<&str>), None);
}

#[test]
fn test_boolean_ignores_default_for_present_values() {
    let doc = fixture();
    let view = doc.view();
    assert_eq!(view.get_boolean_or("core", Some(true)), Some(false));
    assert_eq!(view.get_boolean_or("notExist", Some(true)), Some(true));
}

#[test]
fn test_explicit_default_on_conversion_failure() {
    let doc = fixture();
    let view = doc.view();
    assert_eq!(view.get_integer_or("core", Some(-1)), Some(-1));
    assert_eq!(view.get_double_or("core", Some(-1.0)), Some(-1.0));
    assert_eq!(view.get_integer_or("core", None), None);
}

#[test]
fn test_zero_value_fallbacks() {
    let doc = lenient();
    let view = doc.view();
    assert_eq!(view.get_string("absent.path").as_deref(), Some(""));
    assert_eq!(view.get_integer("absent.path"), Some(0));
    assert_eq!(view.get_double("absent.path"), Some(0.0));
    assert_eq!(view.get_boolean("absent.path"), Some(false));
    assert_eq!(view.get_integer("core"), Some(0));
    assert_eq!(view.get_string("nothing").as_deref(), Some(""));
}

// ============================================================================
// Nested views
// ============================================================================

#[test]
fn test_get_nested_view() {
    let doc = strict();
    let view = doc.view();
    assert!(view.get_nested_view("notExist").is_none());
    assert!(view.get_nested_view("core").is_none());
    assert!(view.get_nested_view("children").is_none());
    assert_eq!(view.get_nested_view(""), Some(view));

    let list = view.get_nested_view("list").unwrap();
    assert_eq!(list.get_string("key").as_deref(), Some("value"));
    assert_eq!(list.node().to_string(), "{key: value}");
}

#[test]
fn test_nested_view_through_sequence() {
    let doc = fixture();
    let element = doc.view().get_nested_view("keyldren.1").unwrap();
    assert_eq!(element.get_string("bar").as_deref(), Some("foo"));
}

#[test]
fn test_missing_nested_view_is_blank_when_lenient() {
    let doc = lenient();
    let blank = doc.view().get_nested_view("notExist").unwrap();
    assert!(blank.is_empty());
    assert_eq!(blank.configuration(), doc.configuration());
    assert_eq!(blank.get_integer("anything"), Some(0));
}

#[test]
fn test_nested_view_shares_configuration() {
    let mut doc = fixture();
    let config = Configuration::default().with_separator_char('/');
    doc.set_configuration(config);
    let keyldren = doc.view().get_nested_view("keyldren/0").unwrap();
    assert_eq!(keyldren.configuration(), config);
}

// ============================================================================
// Lists
// ============================================================================

#[test]
fn test_get_list() {
    let doc = strict();
    let view = doc.view();
    assert_eq!(view.get_list("notExist"), None);
    assert_eq!(
        view.get_list("children"),
        Some(&[TreeValue::from("foo"), TreeValue::from("bar")][..])
    );
    assert_eq!(view.get_list("core"), None);
    assert_eq!(view.get_list(""), None);
    assert_eq!(view.get_list(None::<&str>), None);
}

#[test]
fn test_get_string_list() {
    let doc = strict();
    let view = doc.view();
    assert_eq!(
        view.get_string_list("children"),
        Some(vec![Some("foo".to_string()), Some("bar".to_string())])
    );
    assert_eq!(view.get_string_list("core"), None);
}

#[test]
fn test_get_integer_list_keeps_failed_slots() {
    let doc = strict();
    assert_eq!(
        doc.view().get_integer_list("intList"),
        Some(vec![Some(1), Some(3), None])
    );
}

#[test]
fn test_get_double_list() {
    let doc = strict();
    assert_eq!(
        doc.view().get_double_list("doubleList"),
        Some(vec![Some(1.3), Some(3.5)])
    );
}

#[test]
fn test_get_boolean_list() {
    let doc = strict();
    assert_eq!(
        doc.view().get_boolean_list("boolList"),
        Some(vec![Some(false), Some(true), Some(false)])
    );
}

#[test]
fn test_get_view_list() {
    let doc = strict();
    let views = doc.view().get_view_list("mapNodeList").unwrap();
    assert_eq!(views.len(), 2);
    assert_eq!(
        views[0].and_then(|v| v.get_string("key")).as_deref(),
        Some("value")
    );
    assert!(views[1].is_none());
}

#[test]
fn test_list_element_independence() {
    let mut doc = Document::new();
    doc.set("numbers", TreeValue::from(vec!["3", "x", "5"]));
    assert_eq!(
        doc.view().get_integer_list("numbers"),
        Some(vec![Some(3), None, Some(5)])
    );
}

#[test]
fn test_null_list_elements() {
    let doc = Document::from_yaml_str("items: [a, null, c]\n").unwrap();
    assert_eq!(
        doc.view().get_string_list("items"),
        Some(vec![Some("a".to_string()), None, Some("c".to_string())])
    );
}

#[test]
fn test_missing_lists_are_empty_by_default() {
    let doc = fixture();
    let view = doc.view();
    assert_eq!(view.get_list("notExist"), Some(&[][..]));
    assert_eq!(view.get_string_list("notExist"), Some(vec![]));
    assert_eq!(view.get_view_list("core").map(|v| v.len()), Some(0));
}

#[test]
fn test_explicit_list_default() {
    let doc = fixture();
    let fallback = vec![Some(7)];
    assert_eq!(
        doc.view().get_integer_list_or("notExist", Some(fallback.clone())),
        Some(fallback)
    );
}

// ============================================================================
// Mutable views
// ============================================================================

#[test]
fn test_mutation_through_nested_view_mut() {
    let mut doc = fixture();
    {
        let mut root = doc.view_mut();
        let mut list = root.get_nested_view_mut("list").unwrap();
        list.set("added", 1i64);
        list.remove("key");
    }
    assert_eq!(doc.view().get_string("list").as_deref(), Some("{added: 1}"));
}

#[test]
fn test_mutation_through_view_list_mut() {
    let mut doc = fixture();
    {
        let mut root = doc.view_mut();
        for view in root.get_view_list_mut("keyldren").unwrap().iter_mut().flatten() {
            view.set("seen", true);
        }
    }
    assert_eq!(doc.view().get_boolean("keyldren.0.seen"), Some(true));
    assert_eq!(doc.view().get_boolean("keyldren.1.seen"), Some(true));
}
