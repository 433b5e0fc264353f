//! The validator transformer.
//!
//! Compiles `@validator` occurrences into VTL and prepends the result to the
//! owning type's mutation request templates. Each occurrence runs through
//! four steps:
//!
//! 1. **Guard**: the owning type must carry the model directive
//! 2. **Extract**: the directive's arguments become a parameter record
//! 3. **Generate**: the record resolves against the field type and renders
//! 4. **Augment**: the snippet is prepended to the create/update templates
//!
//! A failing step aborts the occurrence before any template is touched.

use crate::augment::{AugmentReport, ResolverStore, TemplateAugmenter};
use crate::core::config::TransformerConfig;
use crate::core::error::{TransformError, TransformResult};
use crate::core::schema::{DirectiveNode, FieldDefinition, SchemaDocument, TypeDefinition};
use crate::directive::arguments::ValidatorArguments;
use crate::directive::declaration::{self, DIRECTIVE_NAME};
use crate::snippet;

/// Transformer name as registered with the host.
pub const TRANSFORMER_NAME: &str = "ValidatorTransformer";

/// Compiles `@validator` directives into request template snippets.
#[derive(Debug, Clone, Default)]
pub struct ValidatorTransformer {
    config: TransformerConfig,
    augmenter: TemplateAugmenter,
}

impl ValidatorTransformer {
    /// Create a transformer with the standard configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transformer with a custom configuration.
    pub fn with_config(config: TransformerConfig) -> Self {
        let augmenter = TemplateAugmenter::new(&config);
        Self { config, augmenter }
    }

    /// Transformer name.
    pub fn name(&self) -> &'static str {
        TRANSFORMER_NAME
    }

    /// SDL declaring `@validator` and its enumerations.
    pub fn directive_definition(&self) -> &'static str {
        declaration::directive_definition()
    }

    /// Get the active configuration.
    pub fn config(&self) -> &TransformerConfig {
        &self.config
    }

    /// Handle one directive occurrence on a field of `parent`.
    ///
    /// Directives other than `@validator` are ignored and yield an empty
    /// report.
    pub fn field<S>(
        &self,
        parent: &TypeDefinition,
        field: &FieldDefinition,
        directive: &DirectiveNode,
        store: &mut S,
    ) -> TransformResult<AugmentReport>
    where
        S: ResolverStore + ?Sized,
    {
        if directive.name != DIRECTIVE_NAME {
            return Ok(AugmentReport::default());
        }

        if !parent.has_directive(&self.config.model_directive) {
            return Err(TransformError::invalid_directive(format!(
                "{} directive requires {} directive on parent type",
                DIRECTIVE_NAME, self.config.model_directive
            )));
        }

        let args = ValidatorArguments::extract(&directive.arguments);
        let snippet =
            snippet::generate_with_config(&field.name, &field.field_type(), &args, &self.config)?;

        Ok(self.augmenter.augment(store, &parent.name, &snippet))
    }

    /// Handle every directive on every field of a document, in source order.
    ///
    /// Stops at the first invalid directive; templates augmented by earlier
    /// occurrences keep their snippets.
    pub fn apply<S>(&self, document: &SchemaDocument, store: &mut S) -> TransformResult<AugmentReport>
    where
        S: ResolverStore + ?Sized,
    {
        let mut report = AugmentReport::default();
        for parent in &document.types {
            for field in &parent.fields {
                for directive in &field.directives {
                    let field_report = self.field(parent, field, directive, store).map_err(|e| {
                        log::error!("{}.{}: {}", parent.name, field.name, e);
                        e
                    })?;
                    report.merge(field_report);
                }
            }
        }
        Ok(report)
    }
}
