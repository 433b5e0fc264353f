//! Snippet generation.
//!
//! [`generate`] is the whole compiler from a parameter record to VTL text:
//! it resolves the record into a [`ValidatorDirective`] (where every domain
//! rule is enforced) and renders it. Rendering itself cannot fail.

pub mod checks;
pub mod filters;
pub mod literal;
pub mod vtl;

use crate::core::config::{is_identifier, TransformerConfig};
use crate::core::context::SnippetContext;
use crate::core::error::{TransformError, TransformResult};
use crate::core::types::FieldType;
use crate::directive::arguments::ValidatorArguments;
use crate::directive::resolve::ValidatorDirective;
use std::fmt;

/// Generated VTL for one directive occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    text: String,
}

impl Snippet {
    /// Wrap already generated text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Get the snippet text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Take the snippet text.
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Snippet {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Generate the snippet for a field using the standard references.
pub fn generate(
    field_name: &str,
    field_type: &FieldType,
    args: &ValidatorArguments,
) -> TransformResult<Snippet> {
    generate_with_config(field_name, field_type, args, &TransformerConfig::default())
}

/// Generate the snippet for a field using the references from a configuration.
pub fn generate_with_config(
    field_name: &str,
    field_type: &FieldType,
    args: &ValidatorArguments,
    config: &TransformerConfig,
) -> TransformResult<Snippet> {
    if !is_identifier(field_name) {
        return Err(TransformError::invalid_directive(format!(
            "Invalid field name '{}'.",
            field_name
        )));
    }

    let directive = ValidatorDirective::resolve(args, field_type)?;
    let ctx = SnippetContext::with_config(field_name, config);
    let snippet = render(&directive, &ctx);
    log::debug!(
        "Generated {} snippet for field '{}' ({})",
        directive.name(),
        field_name,
        field_type
    );
    Ok(snippet)
}

/// Render a resolved directive.
pub fn render(directive: &ValidatorDirective, ctx: &SnippetContext) -> Snippet {
    let text = match directive {
        ValidatorDirective::Required => checks::required(ctx),
        ValidatorDirective::Number => checks::number(ctx),
        ValidatorDirective::String => checks::string(ctx),
        ValidatorDirective::Boolean => checks::boolean(ctx),
        ValidatorDirective::Email => checks::email(ctx),
        ValidatorDirective::Url => checks::url(ctx),
        ValidatorDirective::Regex { expression } => checks::regex(ctx, expression),
        ValidatorDirective::In(list) => checks::membership(ctx, list),
        ValidatorDirective::Filter(filter) => filters::render(ctx, filter),
    };
    Snippet::new(text)
}
