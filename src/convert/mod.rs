//! Value converters for typed extraction.
//!
//! A converter maps a [`TreeValue`] to an optional value of one target type.
//! `None` means "no value" and lets the caller fall back to a default. A null
//! scalar never converts, so typed getters treat an explicit null the same as
//! a missing value.
//!
//! Boolean conversion is the odd one out: any present, non-null value
//! converts, and everything other than a case-insensitive `"true"` is `false`.
//!
//! # Example
//!
//! ```
//! use treepath::convert::{IntegerConverter, ListConverter, ValueConverter};
//! use treepath::document::node::TreeValue;
//!
//! let list = TreeValue::from(vec!["3", "x", "5"]);
//! let converted = ListConverter::new(IntegerConverter).convert(&list);
//! assert_eq!(converted, Some(vec![Some(3), None, Some(5)]));
//! ```

use crate::config::Configuration;
use crate::document::node::{ScalarValue, TreeValue};
use crate::view::View;

/// Maps a tree value to an optional typed value.
pub trait ValueConverter {
    /// Converted type. May borrow from the converted node.
    type Output<'t>;

    fn convert<'t>(&self, value: &'t TreeValue) -> Option<Self::Output<'t>>;
}

/// Canonical string form of any non-null value.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringConverter;

impl ValueConverter for StringConverter {
    type Output<'t> = String;

    fn convert<'t>(&self, value: &'t TreeValue) -> Option<String> {
        if value.is_null() {
            return None;
        }
        Some(value.to_string())
    }
}

/// Integer literal, or a floating literal truncated toward zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerConverter;

impl ValueConverter for IntegerConverter {
    type Output<'t> = i64;

    fn convert<'t>(&self, value: &'t TreeValue) -> Option<i64> {
        match value.as_scalar()? {
            ScalarValue::Integer(i) => Some(*i),
            ScalarValue::Double(d) => Some(*d as i64),
            ScalarValue::String(s) => parse_integer(s),
            ScalarValue::Boolean(_) | ScalarValue::Null => None,
        }
    }
}

/// Parses `text` as an integer, falling back to a truncated float.
pub fn parse_integer(text: &str) -> Option<i64> {
    let text = text.trim();
    text.parse::<i64>()
        .ok()
        .or_else(|| text.parse::<f64>().ok().map(|d| d as i64))
}

/// Floating-point literal.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleConverter;

impl ValueConverter for DoubleConverter {
    type Output<'t> = f64;

    fn convert<'t>(&self, value: &'t TreeValue) -> Option<f64> {
        match value.as_scalar()? {
            ScalarValue::Integer(i) => Some(*i as f64),
            ScalarValue::Double(d) => Some(*d),
            ScalarValue::String(s) => s.trim().parse().ok(),
            ScalarValue::Boolean(_) | ScalarValue::Null => None,
        }
    }
}

/// Case-insensitive `"true"`; any other non-null value is `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanConverter;

impl ValueConverter for BooleanConverter {
    type Output<'t> = bool;

    fn convert<'t>(&self, value: &'t TreeValue) -> Option<bool> {
        match value {
            TreeValue::Scalar(ScalarValue::Null) => None,
            TreeValue::Scalar(ScalarValue::Boolean(b)) => Some(*b),
            other => Some(other.to_string().eq_ignore_ascii_case("true")),
        }
    }
}

/// Wraps a mapping in a [`View`] carrying the given configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewConverter {
    config: Configuration,
}

impl ViewConverter {
    pub fn new(config: Configuration) -> Self {
        Self { config }
    }
}

impl ValueConverter for ViewConverter {
    type Output<'t> = View<'t>;

    fn convert<'t>(&self, value: &'t TreeValue) -> Option<View<'t>> {
        View::with_configuration(value, self.config)
    }
}

/// Borrows the elements of a sequence without converting them.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceConverter;

impl ValueConverter for SequenceConverter {
    type Output<'t> = &'t [TreeValue];

    fn convert<'t>(&self, value: &'t TreeValue) -> Option<&'t [TreeValue]> {
        value.as_sequence()
    }
}

/// Converts every element of a sequence with an inner converter.
///
/// Elements that fail to convert become `None` in place; the result always
/// has the same length as the sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListConverter<C> {
    inner: C,
}

impl<C: ValueConverter> ListConverter<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: ValueConverter> ValueConverter for ListConverter<C> {
    type Output<'t> = Vec<Option<C::Output<'t>>>;

    fn convert<'t>(&self, value: &'t TreeValue) -> Option<Self::Output<'t>> {
        let items = value.as_sequence()?;
        Some(items.iter().map(|item| self.inner.convert(item)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_renders_scalars() {
        assert_eq!(StringConverter.convert(&"foo".into()), Some("foo".to_string()));
        assert_eq!(StringConverter.convert(&4i64.into()), Some("4".to_string()));
        assert_eq!(StringConverter.convert(&4.5.into()), Some("4.5".to_string()));
        assert_eq!(StringConverter.convert(&true.into()), Some("true".to_string()));
        assert_eq!(StringConverter.convert(&TreeValue::null()), None);
    }

    #[test]
    fn test_integer_from_strings() {
        assert_eq!(IntegerConverter.convert(&"4".into()), Some(4));
        assert_eq!(IntegerConverter.convert(&"-12".into()), Some(-12));
        assert_eq!(IntegerConverter.convert(&"4.5".into()), Some(4));
        assert_eq!(IntegerConverter.convert(&"-4.9".into()), Some(-4));
        assert_eq!(IntegerConverter.convert(&"foo".into()), None);
        assert_eq!(IntegerConverter.convert(&"".into()), None);
    }

    #[test]
    fn test_integer_from_numbers() {
        assert_eq!(IntegerConverter.convert(&7i64.into()), Some(7));
        assert_eq!(IntegerConverter.convert(&7.8.into()), Some(7));
        assert_eq!(IntegerConverter.convert(&true.into()), None);
    }

    #[test]
    fn test_integer_rejects_containers() {
        assert_eq!(IntegerConverter.convert(&TreeValue::empty_mapping()), None);
        assert_eq!(IntegerConverter.convert(&vec![1i64].into()), None);
    }

    #[test]
    fn test_double() {
        assert_eq!(DoubleConverter.convert(&"4.5".into()), Some(4.5));
        assert_eq!(DoubleConverter.convert(&"4".into()), Some(4.0));
        assert_eq!(DoubleConverter.convert(&3i64.into()), Some(3.0));
        assert_eq!(DoubleConverter.convert(&"four".into()), None);
    }

    #[test]
    fn test_boolean_never_fails_on_present_value() {
        assert_eq!(BooleanConverter.convert(&"true".into()), Some(true));
        assert_eq!(BooleanConverter.convert(&"TRUE".into()), Some(true));
        assert_eq!(BooleanConverter.convert(&"tue".into()), Some(false));
        assert_eq!(BooleanConverter.convert(&1i64.into()), Some(false));
        assert_eq!(BooleanConverter.convert(&false.into()), Some(false));
        assert_eq!(BooleanConverter.convert(&TreeValue::empty_mapping()), Some(false));
        assert_eq!(BooleanConverter.convert(&TreeValue::null()), None);
    }

    #[test]
    fn test_view_only_for_mappings() {
        let converter = ViewConverter::default();
        assert!(converter.convert(&TreeValue::empty_mapping()).is_some());
        assert!(converter.convert(&vec!["a"].into()).is_none());
        assert!(converter.convert(&"a".into()).is_none());
    }

    #[test]
    fn test_list_preserves_length() {
        let list = TreeValue::from(vec![
            TreeValue::from("1.5"),
            TreeValue::null(),
            TreeValue::from("x"),
        ]);
        let converted = ListConverter::new(DoubleConverter).convert(&list).unwrap();
        assert_eq!(converted, vec![Some(1.5), None, None]);
    }

    #[test]
    fn test_list_requires_sequence() {
        assert!(ListConverter::new(StringConverter).convert(&"a".into()).is_none());
    }
}
