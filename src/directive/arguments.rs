//! Argument extraction.
//!
//! Turns the raw argument list of a directive occurrence into a
//! [`ValidatorArguments`] record. Extraction is total: it never fails and it
//! does not check which arguments belong together. Those rules live in
//! [`ValidatorDirective::resolve`](crate::directive::resolve::ValidatorDirective::resolve).

use crate::core::schema::Argument;
use crate::core::types::ArgumentValue;
use crate::directive::declaration::{
    self, ARG_ARRAY_FLOAT, ARG_ARRAY_INT, ARG_ARRAY_STRING, ARG_EXPRESSION, ARG_FILTER, ARG_MAX,
    ARG_MIN, ARG_TYPE, ARG_VALUE_BOOLEAN, ARG_VALUE_FLOAT, ARG_VALUE_INT, ARG_VALUE_STRING,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An extracted argument value: literal text, or an ordered list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtractedValue {
    /// Scalar literal text
    Scalar(String),
    /// List members' literal text, in source order
    List(Vec<String>),
}

/// Parameter record of one `@validator` occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidatorArguments {
    values: IndexMap<String, ExtractedValue>,
}

impl ValidatorArguments {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract a record from a directive's arguments.
    ///
    /// Lists collapse to their scalar members' text (other members are
    /// skipped), scalars keep their text, and null, object and variable
    /// values are dropped. A repeated name keeps the last value.
    pub fn extract(arguments: &[Argument]) -> Self {
        let mut record = Self::new();
        for argument in arguments {
            record.insert(&argument.name, &argument.value);
        }
        record
    }

    /// Record one argument, applying the extraction rules.
    pub fn insert(&mut self, name: &str, value: &ArgumentValue) {
        let extracted = match value {
            ArgumentValue::List(items) => {
                ExtractedValue::List(items.iter().filter_map(ArgumentValue::literal).collect())
            }
            scalar => match scalar.literal() {
                Some(text) => ExtractedValue::Scalar(text),
                None => {
                    log::warn!(
                        "Dropping @{} argument '{}': {} values are not supported",
                        declaration::DIRECTIVE_NAME,
                        name,
                        value.shape()
                    );
                    return;
                }
            },
        };

        if !declaration::is_declared_argument(name) {
            log::debug!("Keeping undeclared @{} argument '{}'", declaration::DIRECTIVE_NAME, name);
        }
        self.values.insert(name.to_string(), extracted);
    }

    /// Get a raw extracted value.
    pub fn get(&self, name: &str) -> Option<&ExtractedValue> {
        self.values.get(name)
    }

    /// Get a scalar argument's text. Lists yield `None`.
    pub fn scalar(&self, name: &str) -> Option<&str> {
        match self.values.get(name)? {
            ExtractedValue::Scalar(text) => Some(text),
            ExtractedValue::List(_) => None,
        }
    }

    /// Get a list argument's members.
    ///
    /// A scalar given where a list is expected counts as a one-element list,
    /// the way GraphQL coerces list inputs.
    pub fn list(&self, name: &str) -> Option<Vec<&str>> {
        match self.values.get(name)? {
            ExtractedValue::Scalar(text) => Some(vec![text.as_str()]),
            ExtractedValue::List(items) => Some(items.iter().map(String::as_str).collect()),
        }
    }

    /// Check whether an argument was given.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Argument names in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of recorded arguments.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no argument was recorded.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // ========================================================================
    // Named accessors
    // ========================================================================

    /// `type`
    pub fn kind(&self) -> Option<&str> {
        self.scalar(ARG_TYPE)
    }

    /// `filter`
    pub fn filter(&self) -> Option<&str> {
        self.scalar(ARG_FILTER)
    }

    /// `expression`
    pub fn expression(&self) -> Option<&str> {
        self.scalar(ARG_EXPRESSION)
    }

    /// `arrayString`
    pub fn array_string(&self) -> Option<Vec<&str>> {
        self.list(ARG_ARRAY_STRING)
    }

    /// `arrayInt`
    pub fn array_int(&self) -> Option<Vec<&str>> {
        self.list(ARG_ARRAY_INT)
    }

    /// `arrayFloat`
    pub fn array_float(&self) -> Option<Vec<&str>> {
        self.list(ARG_ARRAY_FLOAT)
    }

    /// `valueString`
    pub fn value_string(&self) -> Option<&str> {
        self.scalar(ARG_VALUE_STRING)
    }

    /// `valueInt`
    pub fn value_int(&self) -> Option<&str> {
        self.scalar(ARG_VALUE_INT)
    }

    /// `valueFloat`
    pub fn value_float(&self) -> Option<&str> {
        self.scalar(ARG_VALUE_FLOAT)
    }

    /// `valueBoolean`
    pub fn value_boolean(&self) -> Option<&str> {
        self.scalar(ARG_VALUE_BOOLEAN)
    }

    /// `min` (reserved; no generator reads it)
    pub fn min(&self) -> Option<&str> {
        self.scalar(ARG_MIN)
    }

    /// `max` (reserved; no generator reads it)
    pub fn max(&self) -> Option<&str> {
        self.scalar(ARG_MAX)
    }
}

impl<'a> FromIterator<(&'a str, ArgumentValue)> for ValidatorArguments {
    fn from_iter<I: IntoIterator<Item = (&'a str, ArgumentValue)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (name, value) in iter {
            record.insert(name, &value);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_scalars_and_lists() {
        let arguments = vec![
            Argument::new("type", ArgumentValue::Enum("in".to_string())),
            Argument::new(
                "arrayString",
                ArgumentValue::List(vec!["asd".into(), "123".into()]),
            ),
            Argument::new("valueInt", ArgumentValue::Int("7".to_string())),
            Argument::new("valueBoolean", ArgumentValue::Boolean(true)),
        ];

        let args = ValidatorArguments::extract(&arguments);
        assert_eq!(args.kind(), Some("in"));
        assert_eq!(args.array_string(), Some(vec!["asd", "123"]));
        assert_eq!(args.value_int(), Some("7"));
        assert_eq!(args.value_boolean(), Some("true"));
        assert_eq!(args.names().collect::<Vec<_>>(), vec!["type", "arrayString", "valueInt", "valueBoolean"]);
    }

    #[test]
    fn test_unsupported_shapes_are_dropped() {
        let args: ValidatorArguments = vec![
            ("type", ArgumentValue::Enum("regex".to_string())),
            ("expression", ArgumentValue::Null),
            ("min", ArgumentValue::Variable("lower".to_string())),
            ("max", ArgumentValue::Object(vec![])),
        ]
        .into_iter()
        .collect();

        assert_eq!(args.len(), 1);
        assert!(args.expression().is_none());
        assert!(args.min().is_none());
        assert!(args.max().is_none());
    }

    #[test]
    fn test_list_members_keep_text_and_skip_non_scalars() {
        let args: ValidatorArguments = vec![(
            "arrayInt",
            ArgumentValue::List(vec![
                ArgumentValue::Int("1".into()),
                ArgumentValue::Null,
                ArgumentValue::List(vec![]),
                ArgumentValue::Int("-2".into()),
            ]),
        )]
        .into_iter()
        .collect();

        assert_eq!(args.array_int(), Some(vec!["1", "-2"]));
    }

    #[test]
    fn test_scalar_for_list_is_single_element() {
        let args: ValidatorArguments = vec![("arrayString", ArgumentValue::from("only"))]
            .into_iter()
            .collect();
        assert_eq!(args.array_string(), Some(vec!["only"]));
        // ...but a list never reads as a scalar
        let args: ValidatorArguments = vec![("expression", ArgumentValue::List(vec!["a".into()]))]
            .into_iter()
            .collect();
        assert!(args.expression().is_none());
        assert!(args.contains("expression"));
    }

    #[test]
    fn test_last_duplicate_wins() {
        let args: ValidatorArguments = vec![
            ("type", ArgumentValue::Enum("string".into())),
            ("type", ArgumentValue::Enum("number".into())),
        ]
        .into_iter()
        .collect();
        assert_eq!(args.kind(), Some("number"));
        assert_eq!(args.len(), 1);
    }

    #[test]
    fn test_undeclared_names_are_kept() {
        let args: ValidatorArguments = vec![("message", ArgumentValue::from("custom"))]
            .into_iter()
            .collect();
        assert_eq!(args.scalar("message"), Some("custom"));
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let args: ValidatorArguments = vec![
            ("type", ArgumentValue::Enum("in".into())),
            ("arrayFloat", ArgumentValue::List(vec![ArgumentValue::Float("1.5".into())])),
        ]
        .into_iter()
        .collect();
        let json = serde_json::to_string(&args).unwrap();
        assert_eq!(json, r#"{"type":"in","arrayFloat":["1.5"]}"#);
    }
}
