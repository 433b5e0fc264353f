//! The `@validator` directive grammar.
//!
//! The two closed enumerations and the argument list are declared once and
//! never change at runtime. The SDL handed to the host is rendered from them
//! on first use and shared process-wide.

use crate::core::types::FieldType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Name of the field directive (`@validator`).
pub const DIRECTIVE_NAME: &str = "validator";

/// Argument selecting the validator kind.
pub const ARG_TYPE: &str = "type";
/// Argument selecting the filter sub-kind.
pub const ARG_FILTER: &str = "filter";
/// Regular expression for `regex`.
pub const ARG_EXPRESSION: &str = "expression";
/// Allowed values of a String field for `in`.
pub const ARG_ARRAY_STRING: &str = "arrayString";
/// Allowed values of an Int field for `in`.
pub const ARG_ARRAY_INT: &str = "arrayInt";
/// Allowed values of a Float field for `in`.
pub const ARG_ARRAY_FLOAT: &str = "arrayFloat";
/// Default of a String field.
pub const ARG_VALUE_STRING: &str = "valueString";
/// Default of an Int field.
pub const ARG_VALUE_INT: &str = "valueInt";
/// Default of a Float field.
pub const ARG_VALUE_FLOAT: &str = "valueFloat";
/// Default of a Boolean field.
pub const ARG_VALUE_BOOLEAN: &str = "valueBoolean";
/// Lower bound (reserved).
pub const ARG_MIN: &str = "min";
/// Upper bound (reserved).
pub const ARG_MAX: &str = "max";

/// Declared argument of the directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentDefinition {
    /// Argument name
    pub name: &'static str,
    /// GraphQL input type
    pub type_name: &'static str,
}

/// All arguments in declaration order.
pub const ARGUMENTS: &[ArgumentDefinition] = &[
    ArgumentDefinition { name: ARG_TYPE, type_name: "ValidatorName!" },
    ArgumentDefinition { name: ARG_FILTER, type_name: "FilterName" },
    ArgumentDefinition { name: ARG_EXPRESSION, type_name: "String" },
    ArgumentDefinition { name: ARG_ARRAY_STRING, type_name: "[String]" },
    ArgumentDefinition { name: ARG_ARRAY_INT, type_name: "[Int]" },
    ArgumentDefinition { name: ARG_ARRAY_FLOAT, type_name: "[Float]" },
    ArgumentDefinition { name: ARG_VALUE_STRING, type_name: "String" },
    ArgumentDefinition { name: ARG_VALUE_INT, type_name: "Int" },
    ArgumentDefinition { name: ARG_VALUE_FLOAT, type_name: "Float" },
    ArgumentDefinition { name: ARG_VALUE_BOOLEAN, type_name: "Boolean" },
    ArgumentDefinition { name: ARG_MIN, type_name: "Int" },
    ArgumentDefinition { name: ARG_MAX, type_name: "Int" },
];

/// Check whether an argument name is part of the directive grammar.
pub fn is_declared_argument(name: &str) -> bool {
    ARGUMENTS.iter().any(|a| a.name == name)
}

// ============================================================================
// ValidatorName
// ============================================================================

/// Validator kind selected by the `type` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidatorName {
    /// Rewrites the field instead of rejecting it
    Filter,
    /// Value must be truthy
    Required,
    /// Value must match a caller-supplied pattern
    Regex,
    /// Value must be numeric
    Number,
    /// Value must be a string
    String,
    /// Value must be a boolean
    Boolean,
    /// Value must look like a URL
    Url,
    /// Value must look like an email address
    Email,
    /// Value must be one of a fixed list
    In,
}

impl ValidatorName {
    /// Get all kinds in declaration order.
    pub fn all() -> &'static [ValidatorName] {
        &[
            ValidatorName::Filter,
            ValidatorName::Required,
            ValidatorName::Regex,
            ValidatorName::Number,
            ValidatorName::String,
            ValidatorName::Boolean,
            ValidatorName::Url,
            ValidatorName::Email,
            ValidatorName::In,
        ]
    }

    /// Get the enum value as written in the schema.
    pub fn graphql_name(&self) -> &'static str {
        match self {
            ValidatorName::Filter => "filter",
            ValidatorName::Required => "required",
            ValidatorName::Regex => "regex",
            ValidatorName::Number => "number",
            ValidatorName::String => "string",
            ValidatorName::Boolean => "boolean",
            ValidatorName::Url => "url",
            ValidatorName::Email => "email",
            ValidatorName::In => "in",
        }
    }

    /// One-line description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            ValidatorName::Filter => "Rewrite the field value with the filter selected by `filter`",
            ValidatorName::Required => "Reject absent, empty, zero or false values",
            ValidatorName::Regex => "Reject values that do not match `expression`",
            ValidatorName::Number => "Reject values that are not numbers",
            ValidatorName::String => "Reject values that are not strings",
            ValidatorName::Boolean => "Reject values that are not booleans",
            ValidatorName::Url => "Reject values that are not http, https, ftp or file URLs",
            ValidatorName::Email => "Reject values that are not email addresses",
            ValidatorName::In => "Reject values that are not members of the configured list",
        }
    }

    /// Field types this kind accepts, or `None` when any type is accepted.
    ///
    /// For `filter` the answer depends on the sub-kind; see
    /// [`FilterName::supported_field_types`].
    pub fn supported_field_types(&self) -> Option<&'static [&'static str]> {
        match self {
            ValidatorName::In => Some(&["String", "Int", "Float"]),
            _ => None,
        }
    }

    /// Name of the argument this kind requires for a field type.
    ///
    /// Returns `None` when nothing beyond `type` is needed or when the field
    /// type is unsupported.
    pub fn required_parameter(&self, field_type: &FieldType) -> Option<&'static str> {
        match (self, field_type) {
            (ValidatorName::Regex, _) => Some(ARG_EXPRESSION),
            (ValidatorName::Filter, _) => Some(ARG_FILTER),
            (ValidatorName::In, FieldType::String) => Some(ARG_ARRAY_STRING),
            (ValidatorName::In, FieldType::Int) => Some(ARG_ARRAY_INT),
            (ValidatorName::In, FieldType::Float) => Some(ARG_ARRAY_FLOAT),
            _ => None,
        }
    }

    /// Check whether generated snippets raise errors (as opposed to rewriting).
    pub fn is_check(&self) -> bool {
        !matches!(self, ValidatorName::Filter)
    }
}

impl FromStr for ValidatorName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValidatorName::all()
            .iter()
            .copied()
            .find(|k| k.graphql_name() == s)
            .ok_or_else(|| format!("Invalid validator type '{}'", s))
    }
}

impl fmt::Display for ValidatorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.graphql_name())
    }
}

// ============================================================================
// FilterName
// ============================================================================

/// Filter sub-kind selected by the `filter` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterName {
    /// Fill in a default when the value is absent
    #[serde(rename = "default")]
    Default,
    /// Lowercase the whole value
    #[serde(rename = "lowercase")]
    Lowercase,
    /// Uppercase the whole value
    #[serde(rename = "uppercase")]
    Uppercase,
    /// Lowercase the first character
    #[serde(rename = "lcFirst")]
    LowerFirst,
    /// Uppercase the first character
    #[serde(rename = "ucFirst")]
    UpperFirst,
    /// Strip leading and trailing whitespace
    #[serde(rename = "trim")]
    Trim,
}

impl FilterName {
    /// Get all filters in declaration order.
    pub fn all() -> &'static [FilterName] {
        &[
            FilterName::Default,
            FilterName::Lowercase,
            FilterName::Uppercase,
            FilterName::LowerFirst,
            FilterName::UpperFirst,
            FilterName::Trim,
        ]
    }

    /// Get the enum value as written in the schema.
    pub fn graphql_name(&self) -> &'static str {
        match self {
            FilterName::Default => "default",
            FilterName::Lowercase => "lowercase",
            FilterName::Uppercase => "uppercase",
            FilterName::LowerFirst => "lcFirst",
            FilterName::UpperFirst => "ucFirst",
            FilterName::Trim => "trim",
        }
    }

    /// One-line description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            FilterName::Default => "Set the field to the configured value when it is absent",
            FilterName::Lowercase => "Convert the value to lower case",
            FilterName::Uppercase => "Convert the value to upper case",
            FilterName::LowerFirst => "Convert the first character to lower case",
            FilterName::UpperFirst => "Convert the first character to upper case",
            FilterName::Trim => "Remove leading and trailing whitespace",
        }
    }

    /// Field types this filter accepts, or `None` when any type is accepted.
    pub fn supported_field_types(&self) -> Option<&'static [&'static str]> {
        match self {
            FilterName::Default => Some(&["String", "Int", "Float", "Boolean"]),
            _ => None,
        }
    }

    /// Name of the argument this filter requires for a field type.
    pub fn required_parameter(&self, field_type: &FieldType) -> Option<&'static str> {
        match (self, field_type) {
            (FilterName::Default, FieldType::String) => Some(ARG_VALUE_STRING),
            (FilterName::Default, FieldType::Int) => Some(ARG_VALUE_INT),
            (FilterName::Default, FieldType::Float) => Some(ARG_VALUE_FLOAT),
            (FilterName::Default, FieldType::Boolean) => Some(ARG_VALUE_BOOLEAN),
            _ => None,
        }
    }
}

impl FromStr for FilterName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterName::all()
            .iter()
            .copied()
            .find(|f| f.graphql_name() == s)
            .ok_or_else(|| format!("Invalid filter '{}'", s))
    }
}

impl fmt::Display for FilterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.graphql_name())
    }
}

// ============================================================================
// SDL
// ============================================================================

/// SDL declaring the directive and its enumerations.
pub fn directive_definition() -> &'static str {
    static SDL: OnceLock<String> = OnceLock::new();
    SDL.get_or_init(render_definition)
}

fn render_definition() -> String {
    let arguments: Vec<String> = ARGUMENTS
        .iter()
        .map(|a| format!("  {}: {}", a.name, a.type_name))
        .collect();
    let kinds: Vec<&str> = ValidatorName::all().iter().map(|k| k.graphql_name()).collect();
    let filters: Vec<&str> = FilterName::all().iter().map(|f| f.graphql_name()).collect();

    format!(
        "directive @{}(\n{}\n) on FIELD_DEFINITION\n\nenum ValidatorName {{ {} }}\n\nenum FilterName {{ {} }}\n",
        DIRECTIVE_NAME,
        arguments.join("\n"),
        kinds.join(" "),
        filters.join(" "),
    )
}
