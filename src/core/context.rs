//! Snippet rendering context.
//!
//! The context carries what every renderer needs besides the directive
//! itself: the field being validated and the references the generated VTL
//! must use to reach the mutation input and raise errors.

use crate::core::config::TransformerConfig;

/// Context provided to snippet renderers for one annotated field.
#[derive(Debug, Clone)]
pub struct SnippetContext {
    /// Name of the annotated field.
    pub field_name: String,
    input_path: String,
    error_type: String,
}

impl SnippetContext {
    /// Create a context using the standard input path and error type.
    pub fn new(field_name: impl Into<String>) -> Self {
        Self::with_config(field_name, &TransformerConfig::default())
    }

    /// Create a context using the references from a configuration.
    pub fn with_config(field_name: impl Into<String>, config: &TransformerConfig) -> Self {
        Self {
            field_name: field_name.into(),
            input_path: config.input_path.clone(),
            error_type: config.error_type.clone(),
        }
    }

    /// VTL reference to the mutation input object (`$ctx.args.input`).
    pub fn input(&self) -> &str {
        &self.input_path
    }

    /// VTL reference to the field value (`$ctx.args.input.title`).
    pub fn field_ref(&self) -> String {
        format!("{}.{}", self.input_path, self.field_name)
    }

    /// Error type passed to `$util.error`.
    pub fn error_type(&self) -> &str {
        &self.error_type
    }

    /// Name of the local variable holding a membership list (`$titleArr`).
    pub fn array_var(&self) -> String {
        format!("${}Arr", self.field_name)
    }
}
