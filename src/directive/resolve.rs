//! Strict resolution of extracted arguments into a closed directive.
//!
//! [`ValidatorDirective`] has one variant per kind/filter combination and
//! every variant carries exactly the parameters it needs, already read as the
//! type the field demands. Once a directive resolves, rendering cannot fail.

use crate::core::error::{TransformError, TransformResult};
use crate::core::types::FieldType;
use crate::directive::arguments::ValidatorArguments;
use crate::directive::declaration::{
    FilterName, ValidatorName, ARG_FILTER, ARG_TYPE, DIRECTIVE_NAME,
};

/// A fully validated `@validator` occurrence.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatorDirective {
    /// Truthiness check
    Required,
    /// `$util.isNumber` check
    Number,
    /// `$util.isString` check
    String,
    /// `$util.isBoolean` check
    Boolean,
    /// Built-in email pattern check
    Email,
    /// Built-in URL pattern check
    Url,
    /// Pattern check with a caller-supplied expression
    Regex {
        /// Java regular expression the value must match
        expression: String,
    },
    /// Membership check against a typed list
    In(MembershipList),
    /// Field rewrite
    Filter(FieldFilter),
}

/// Allowed values of an `in` check, typed by the field.
#[derive(Debug, Clone, PartialEq)]
pub enum MembershipList {
    /// Members of a String field
    Strings(Vec<String>),
    /// Members of an Int field
    Ints(Vec<i64>),
    /// Members of a Float field
    Floats(Vec<f64>),
}

/// Filter sub-kinds with their parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldFilter {
    /// Fill in a value when the field is absent
    Default(DefaultValue),
    /// `toLowerCase()`
    Lowercase,
    /// `toUpperCase()`
    Uppercase,
    /// Lowercase the first character
    LowerFirst,
    /// Uppercase the first character
    UpperFirst,
    /// `trim()`
    Trim,
}

/// Default value of a `default` filter, typed by the field.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    /// Default of a String field
    String(String),
    /// Default of an Int field
    Int(i64),
    /// Default of a Float field
    Float(f64),
    /// Default of a Boolean field
    Boolean(bool),
}

impl ValidatorDirective {
    /// Resolve an extracted record against the field's declared type.
    ///
    /// Fails with [`TransformError::InvalidDirective`] when `type` or
    /// `filter` is missing or unknown, when the field type is not supported
    /// by the kind, or when the kind's parameter is missing or unreadable.
    pub fn resolve(args: &ValidatorArguments, field_type: &FieldType) -> TransformResult<Self> {
        let kind_text = args.kind().ok_or_else(|| {
            TransformError::invalid_directive(format!(
                "@{} requires the '{}' argument.",
                DIRECTIVE_NAME, ARG_TYPE
            ))
        })?;
        let kind: ValidatorName = kind_text
            .parse()
            .map_err(|e: String| TransformError::invalid_directive(format!("{}.", e)))?;

        let directive = match kind {
            ValidatorName::Required => ValidatorDirective::Required,
            ValidatorName::Number => ValidatorDirective::Number,
            ValidatorName::String => ValidatorDirective::String,
            ValidatorName::Boolean => ValidatorDirective::Boolean,
            ValidatorName::Email => ValidatorDirective::Email,
            ValidatorName::Url => ValidatorDirective::Url,
            ValidatorName::Regex => {
                let expression = args.expression().ok_or_else(|| {
                    TransformError::invalid_directive(
                        "expression must be set to validate a pattern.",
                    )
                })?;
                ValidatorDirective::Regex {
                    expression: expression.to_string(),
                }
            }
            ValidatorName::In => ValidatorDirective::In(resolve_membership(args, field_type)?),
            ValidatorName::Filter => ValidatorDirective::Filter(resolve_filter(args, field_type)?),
        };

        Ok(directive)
    }

    /// Get the kind this directive was resolved from.
    pub fn name(&self) -> ValidatorName {
        match self {
            ValidatorDirective::Required => ValidatorName::Required,
            ValidatorDirective::Number => ValidatorName::Number,
            ValidatorDirective::String => ValidatorName::String,
            ValidatorDirective::Boolean => ValidatorName::Boolean,
            ValidatorDirective::Email => ValidatorName::Email,
            ValidatorDirective::Url => ValidatorName::Url,
            ValidatorDirective::Regex { .. } => ValidatorName::Regex,
            ValidatorDirective::In(_) => ValidatorName::In,
            ValidatorDirective::Filter(_) => ValidatorName::Filter,
        }
    }
}

impl FieldFilter {
    /// Get the filter name this filter was resolved from.
    pub fn name(&self) -> FilterName {
        match self {
            FieldFilter::Default(_) => FilterName::Default,
            FieldFilter::Lowercase => FilterName::Lowercase,
            FieldFilter::Uppercase => FilterName::Uppercase,
            FieldFilter::LowerFirst => FilterName::LowerFirst,
            FieldFilter::UpperFirst => FilterName::UpperFirst,
            FieldFilter::Trim => FilterName::Trim,
        }
    }
}

fn resolve_membership(args: &ValidatorArguments, field_type: &FieldType) -> TransformResult<MembershipList> {
    let param = ValidatorName::In
        .required_parameter(field_type)
        .ok_or_else(|| unsupported_type(ValidatorName::In.graphql_name(), field_type, ValidatorName::In.supported_field_types()))?;
    let items = args
        .list(param)
        .ok_or_else(|| TransformError::invalid_directive(format!("{} must be defined.", param)))?;

    let list = match field_type {
        FieldType::Int => MembershipList::Ints(
            items
                .iter()
                .map(|item| parse_int(param, item))
                .collect::<TransformResult<_>>()?,
        ),
        FieldType::Float => MembershipList::Floats(
            items
                .iter()
                .map(|item| parse_float(param, item))
                .collect::<TransformResult<_>>()?,
        ),
        _ => MembershipList::Strings(items.iter().map(|item| item.to_string()).collect()),
    };
    Ok(list)
}

fn resolve_filter(args: &ValidatorArguments, field_type: &FieldType) -> TransformResult<FieldFilter> {
    let filter_text = args.filter().ok_or_else(|| {
        TransformError::invalid_directive(format!(
            "'{}' must be set when type is {}.",
            ARG_FILTER,
            ValidatorName::Filter
        ))
    })?;
    let filter: FilterName = filter_text
        .parse()
        .map_err(|e: String| TransformError::invalid_directive(format!("{}.", e)))?;

    let resolved = match filter {
        FilterName::Default => FieldFilter::Default(resolve_default(args, field_type)?),
        FilterName::Lowercase => FieldFilter::Lowercase,
        FilterName::Uppercase => FieldFilter::Uppercase,
        FilterName::LowerFirst => FieldFilter::LowerFirst,
        FilterName::UpperFirst => FieldFilter::UpperFirst,
        FilterName::Trim => FieldFilter::Trim,
    };
    Ok(resolved)
}

fn resolve_default(args: &ValidatorArguments, field_type: &FieldType) -> TransformResult<DefaultValue> {
    let param = FilterName::Default
        .required_parameter(field_type)
        .ok_or_else(|| unsupported_type("default filter", field_type, FilterName::Default.supported_field_types()))?;
    let text = args
        .scalar(param)
        .ok_or_else(|| TransformError::invalid_directive(format!("{} must be defined.", param)))?;

    let value = match field_type {
        FieldType::Int => DefaultValue::Int(parse_int(param, text)?),
        FieldType::Float => DefaultValue::Float(parse_float(param, text)?),
        FieldType::Boolean => DefaultValue::Boolean(parse_bool(param, text)?),
        _ => DefaultValue::String(text.to_string()),
    };
    Ok(value)
}

fn unsupported_type(what: &str, field_type: &FieldType, supported: Option<&[&str]>) -> TransformError {
    TransformError::invalid_directive(format!(
        "Unexpected field type {} for {}; expected one of {}.",
        field_type,
        what,
        supported.unwrap_or_default().join(", ")
    ))
}

fn parse_int(param: &str, text: &str) -> TransformResult<i64> {
    text.trim().parse::<i64>().map_err(|_| {
        TransformError::invalid_directive(format!("{} value '{}' is not a valid Int.", param, text))
    })
}

fn parse_float(param: &str, text: &str) -> TransformResult<f64> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(TransformError::invalid_directive(format!(
            "{} value '{}' is not a valid Float.",
            param, text
        ))),
    }
}

fn parse_bool(param: &str, text: &str) -> TransformResult<bool> {
    match text.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(TransformError::invalid_directive(format!(
            "{} value '{}' is not a valid Boolean.",
            param, text
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ArgumentValue;

    fn args(pairs: Vec<(&str, ArgumentValue)>) -> ValidatorArguments {
        pairs.into_iter().collect()
    }

    fn kind(name: &str) -> (&str, ArgumentValue) {
        ("type", ArgumentValue::Enum(name.to_string()))
    }

    fn message(result: TransformResult<ValidatorDirective>) -> String {
        result.unwrap_err().directive_message().unwrap().to_string()
    }

    #[test]
    fn test_simple_kinds_ignore_field_type() {
        let other = FieldType::Other("AWSDateTime".to_string());
        for (name, expected) in [
            ("required", ValidatorDirective::Required),
            ("number", ValidatorDirective::Number),
            ("string", ValidatorDirective::String),
            ("boolean", ValidatorDirective::Boolean),
            ("email", ValidatorDirective::Email),
            ("url", ValidatorDirective::Url),
        ] {
            let resolved = ValidatorDirective::resolve(&args(vec![kind(name)]), &other).unwrap();
            assert_eq!(resolved, expected);
            assert_eq!(resolved.name().graphql_name(), name);
        }
    }

    #[test]
    fn test_missing_and_unknown_kind() {
        let msg = message(ValidatorDirective::resolve(&args(vec![]), &FieldType::String));
        assert!(msg.contains("'type'"));

        let msg = message(ValidatorDirective::resolve(&args(vec![kind("integer")]), &FieldType::Int));
        assert!(msg.contains("Invalid validator type 'integer'"));
    }

    #[test]
    fn test_regex_requires_expression() {
        let msg = message(ValidatorDirective::resolve(&args(vec![kind("regex")]), &FieldType::String));
        assert!(msg.contains("expression"));

        let resolved = ValidatorDirective::resolve(
            &args(vec![kind("regex"), ("expression", ArgumentValue::from("^[a-z]+$"))]),
            &FieldType::String,
        )
        .unwrap();
        assert_eq!(
            resolved,
            ValidatorDirective::Regex {
                expression: "^[a-z]+$".to_string()
            }
        );
    }

    #[test]
    fn test_in_selects_list_by_field_type() {
        let record = args(vec![
            kind("in"),
            ("arrayString", ArgumentValue::List(vec!["a".into(), "b".into()])),
            ("arrayInt", ArgumentValue::List(vec![ArgumentValue::Int("1".into()), ArgumentValue::Int("2".into())])),
            ("arrayFloat", ArgumentValue::List(vec![ArgumentValue::Float("0.5".into()), ArgumentValue::Int("3".into())])),
        ]);

        assert_eq!(
            ValidatorDirective::resolve(&record, &FieldType::String).unwrap(),
            ValidatorDirective::In(MembershipList::Strings(vec!["a".into(), "b".into()]))
        );
        assert_eq!(
            ValidatorDirective::resolve(&record, &FieldType::Int).unwrap(),
            ValidatorDirective::In(MembershipList::Ints(vec![1, 2]))
        );
        assert_eq!(
            ValidatorDirective::resolve(&record, &FieldType::Float).unwrap(),
            ValidatorDirective::In(MembershipList::Floats(vec![0.5, 3.0]))
        );
    }

    #[test]
    fn test_in_rejects_unsupported_types_and_missing_lists() {
        let record = args(vec![kind("in"), ("arrayString", ArgumentValue::List(vec!["a".into()]))]);

        let msg = message(ValidatorDirective::resolve(&record, &FieldType::Boolean));
        assert!(msg.contains("Unexpected field type Boolean"));
        assert!(msg.contains("String, Int, Float"));

        let msg = message(ValidatorDirective::resolve(&record, &FieldType::Int));
        assert_eq!(msg, "arrayInt must be defined.");
    }

    #[test]
    fn test_in_rejects_unreadable_numbers() {
        let record = args(vec![
            kind("in"),
            ("arrayInt", ArgumentValue::List(vec!["one".into()])),
            ("arrayFloat", ArgumentValue::List(vec!["NaN".into()])),
        ]);
        assert!(message(ValidatorDirective::resolve(&record, &FieldType::Int)).contains("not a valid Int"));
        assert!(message(ValidatorDirective::resolve(&record, &FieldType::Float)).contains("not a valid Float"));
    }

    #[test]
    fn test_filter_requires_known_filter() {
        let msg = message(ValidatorDirective::resolve(&args(vec![kind("filter")]), &FieldType::String));
        assert!(msg.contains("'filter' must be set"));

        let msg = message(ValidatorDirective::resolve(
            &args(vec![kind("filter"), ("filter", ArgumentValue::Enum("reverse".into()))]),
            &FieldType::String,
        ));
        assert!(msg.contains("Invalid filter 'reverse'"));
    }

    #[test]
    fn test_simple_filters() {
        for (name, expected) in [
            ("lowercase", FieldFilter::Lowercase),
            ("uppercase", FieldFilter::Uppercase),
            ("lcFirst", FieldFilter::LowerFirst),
            ("ucFirst", FieldFilter::UpperFirst),
            ("trim", FieldFilter::Trim),
        ] {
            let record = args(vec![kind("filter"), ("filter", ArgumentValue::Enum(name.into()))]);
            let resolved = ValidatorDirective::resolve(&record, &FieldType::String).unwrap();
            assert_eq!(resolved, ValidatorDirective::Filter(expected.clone()));
            assert_eq!(expected.name().graphql_name(), name);
        }
    }

    #[test]
    fn test_default_selects_value_by_field_type() {
        let record = args(vec![
            kind("filter"),
            ("filter", ArgumentValue::Enum("default".into())),
            ("valueString", ArgumentValue::from("none")),
            ("valueInt", ArgumentValue::Int("-3".into())),
            ("valueFloat", ArgumentValue::Float("2.5".into())),
            ("valueBoolean", ArgumentValue::Boolean(false)),
        ]);

        let cases = [
            (FieldType::String, DefaultValue::String("none".into())),
            (FieldType::Int, DefaultValue::Int(-3)),
            (FieldType::Float, DefaultValue::Float(2.5)),
            (FieldType::Boolean, DefaultValue::Boolean(false)),
        ];
        for (ty, expected) in cases {
            assert_eq!(
                ValidatorDirective::resolve(&record, &ty).unwrap(),
                ValidatorDirective::Filter(FieldFilter::Default(expected))
            );
        }

        let msg = message(ValidatorDirective::resolve(&record, &FieldType::Other("ID".into())));
        assert!(msg.contains("Unexpected field type ID for default filter"));
    }

    #[test]
    fn test_default_missing_value() {
        let record = args(vec![
            kind("filter"),
            ("filter", ArgumentValue::Enum("default".into())),
            ("valueString", ArgumentValue::from("none")),
        ]);
        let msg = message(ValidatorDirective::resolve(&record, &FieldType::Boolean));
        assert_eq!(msg, "valueBoolean must be defined.");
    }
}
