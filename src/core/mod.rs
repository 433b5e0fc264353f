//! Core types for the validator transformer.
//!
//! This module contains the foundational pieces shared by every stage:
//! - Argument values and declared field types
//! - The host schema model (types, fields, directives)
//! - Configuration
//! - The snippet rendering context
//! - Error types

pub mod types;
pub mod schema;
pub mod config;
pub mod error;
pub mod context;

// Re-export commonly used types
pub use types::{ArgumentValue, FieldType, TypeRef};
pub use schema::{Argument, DirectiveNode, FieldDefinition, SchemaDocument, TypeDefinition, TypeKind};
pub use config::TransformerConfig;
pub use error::{ConfigError, TransformError, TransformResult};
pub use context::SnippetContext;
