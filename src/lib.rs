//! # vtl-validator - Input validation snippets for VTL resolvers
//!
//! vtl-validator compiles `@validator` field directives into Velocity
//! Template Language snippets and prepends them to the request mapping
//! templates of the owning type's create and update mutations.
//!
//! ## Features
//!
//! - **Checks**: `required`, `number`, `string`, `boolean`, `email`, `url`,
//!   `regex` and `in` reject bad input with `$util.error`
//! - **Filters**: `default`, `lowercase`, `uppercase`, `lcFirst`, `ucFirst`
//!   and `trim` rewrite the input in place
//! - **Typed parameters**: every directive is resolved against the field's
//!   declared type before any VTL is produced
//! - **Safe literals**: parameters are embedded as VTL literals that read
//!   back to the original text
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vtl_validator::prelude::*;
//!
//! let post = TypeDefinition::object("Post").with_directive(DirectiveNode::new("model"));
//! let title = FieldDefinition::new("title", "String!".parse().unwrap());
//! let directive = DirectiveNode::new("validator")
//!     .with_argument("type", ArgumentValue::Enum("required".to_string()));
//!
//! let mut store = InMemoryResolverStore::new()
//!     .with_resolver("CreatePostResolver", ResolverResource::new("Mutation", "createPost", "..."));
//!
//! let transformer = ValidatorTransformer::new();
//! let report = transformer.field(&post, &title, &directive, &mut store).unwrap();
//! assert_eq!(report.augmented, vec!["CreatePostResolver"]);
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: Argument values, schema model, configuration and errors
//! - [`directive`]: Directive grammar, argument extraction and resolution
//! - [`snippet`]: VTL generation for checks and filters
//! - [`augment`]: Resolver store and template augmentation
//! - [`transformer`]: The per-directive pipeline tying the stages together

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod augment;
pub mod core;
pub mod directive;
pub mod snippet;
pub mod transformer;

/// Prelude module for convenient imports.
///
/// Import everything commonly needed with:
/// ```rust,ignore
/// use vtl_validator::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::core::types::{ArgumentValue, FieldType, TypeRef};
    pub use crate::core::schema::{
        Argument, DirectiveNode, FieldDefinition, SchemaDocument, TypeDefinition, TypeKind,
    };
    pub use crate::core::config::TransformerConfig;
    pub use crate::core::context::SnippetContext;

    // Errors
    pub use crate::core::error::{ConfigError, TransformError, TransformResult};

    // Directive
    pub use crate::directive::declaration::{directive_definition, FilterName, ValidatorName};
    pub use crate::directive::arguments::{ExtractedValue, ValidatorArguments};
    pub use crate::directive::resolve::{DefaultValue, FieldFilter, MembershipList, ValidatorDirective};

    // Snippets
    pub use crate::snippet::{generate, generate_with_config, Snippet};

    // Augmentation
    pub use crate::augment::store::{InMemoryResolverStore, ResolverResource, ResolverStore};
    pub use crate::augment::resolver::{
        prepend_snippet, resolver_file_name, AugmentReport, MutationOperation, ResolverIds,
        TemplateAugmenter,
    };

    // Transformer
    pub use crate::transformer::ValidatorTransformer;
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
        assert_eq!(super::NAME, "vtl-validator");
    }

    #[test]
    fn test_document_end_to_end() {
        let json = r#"{
            "types": [{
                "name": "Post",
                "directives": [{ "name": "model" }],
                "fields": [
                    {
                        "name": "title",
                        "type": "String!",
                        "directives": [{
                            "name": "validator",
                            "arguments": [
                                { "name": "type", "value": { "kind": "Enum", "value": "filter" } },
                                { "name": "filter", "value": { "kind": "Enum", "value": "trim" } }
                            ]
                        }]
                    },
                    {
                        "name": "rating",
                        "type": "Int",
                        "directives": [{
                            "name": "validator",
                            "arguments": [
                                { "name": "type", "value": { "kind": "Enum", "value": "in" } },
                                { "name": "arrayInt", "value": { "kind": "List", "value": [
                                    { "kind": "Int", "value": "1" },
                                    { "kind": "Int", "value": "5" }
                                ] } }
                            ]
                        }]
                    }
                ]
            }]
        }"#;
        let store_json = r#"{
            "CreatePostResolver": {
                "TypeName": "Mutation",
                "FieldName": "createPost",
                "RequestMappingTemplate": "CREATE"
            }
        }"#;

        let document = SchemaDocument::from_json(json).unwrap();
        let mut store = InMemoryResolverStore::from_json(store_json).unwrap();
        let report = ValidatorTransformer::new().apply(&document, &mut store).unwrap();

        assert_eq!(report.augmented.len(), 2);
        assert_eq!(report.skipped, vec!["UpdatePostResolver", "UpdatePostResolver"]);

        let text = &store.resolver("CreatePostResolver").unwrap().request_mapping_template;
        assert!(text.starts_with("## [Start] Membership list for \"rating\". **\n#set( $ratingArr = [1, 5] )"));
        assert!(text.contains("$ctx.args.input.title.trim()"));
        assert!(text.ends_with("\n\nCREATE"));
    }

    #[test]
    fn test_sdl_lists_every_kind() {
        let sdl = ValidatorTransformer::new().directive_definition();
        for kind in ValidatorName::all() {
            assert!(sdl.contains(kind.graphql_name()));
        }
        for filter in FilterName::all() {
            assert!(sdl.contains(filter.graphql_name()));
        }
    }
}
