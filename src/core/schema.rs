//! Host schema model.
//!
//! The minimal slice of a parsed GraphQL document the transformer needs:
//! type definitions with their directives, and field definitions with their
//! type references and directives. The host parser owns the full AST; these
//! types are what it hands to [`ValidatorTransformer`](crate::transformer::ValidatorTransformer).

use crate::core::types::{ArgumentValue, FieldType, TypeRef};
use serde::{Deserialize, Serialize};

/// A single `name: value` directive argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    /// Argument name
    pub name: String,
    /// Parsed argument value
    pub value: ArgumentValue,
}

impl Argument {
    /// Create a new argument.
    pub fn new(name: impl Into<String>, value: ArgumentValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A directive occurrence such as `@validator(type: required)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectiveNode {
    /// Directive name without the `@`
    pub name: String,
    /// Arguments in source order
    #[serde(default)]
    pub arguments: Vec<Argument>,
}

impl DirectiveNode {
    /// Create a directive without arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    /// Append an argument (builder style).
    pub fn with_argument(mut self, name: impl Into<String>, value: ArgumentValue) -> Self {
        self.arguments.push(Argument::new(name, value));
        self
    }
}

/// Kind of a type definition that can own fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    /// `type Post { ... }`
    #[default]
    Object,
    /// `interface Node { ... }`
    Interface,
}

/// A field definition inside an object or interface type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field name
    pub name: String,
    /// Declared type, e.g. `String!`
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    /// Directives attached to the field
    #[serde(default)]
    pub directives: Vec<DirectiveNode>,
}

impl FieldDefinition {
    /// Create a field without directives.
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
            directives: Vec::new(),
        }
    }

    /// Attach a directive (builder style).
    pub fn with_directive(mut self, directive: DirectiveNode) -> Self {
        self.directives.push(directive);
        self
    }

    /// Declared named type with list/non-null wrappers removed.
    pub fn field_type(&self) -> FieldType {
        self.type_ref.field_type()
    }
}

/// An object or interface type definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDefinition {
    /// Type name
    pub name: String,
    /// Object or interface
    #[serde(default)]
    pub kind: TypeKind,
    /// Directives attached to the type
    #[serde(default)]
    pub directives: Vec<DirectiveNode>,
    /// Field definitions in source order
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

impl TypeDefinition {
    /// Create an object type without directives or fields.
    pub fn object(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Object,
            directives: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Attach a directive (builder style).
    pub fn with_directive(mut self, directive: DirectiveNode) -> Self {
        self.directives.push(directive);
        self
    }

    /// Add a field (builder style).
    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }

    /// Check whether the type carries a directive with the given name.
    pub fn has_directive(&self, name: &str) -> bool {
        self.directives.iter().any(|d| d.name == name)
    }
}

/// A schema document: the annotated types the host feeds to the transformer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaDocument {
    /// Type definitions in source order
    pub types: Vec<TypeDefinition>,
}

impl SchemaDocument {
    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_lookup() {
        let post = TypeDefinition::object("Post")
            .with_directive(DirectiveNode::new("model"))
            .with_field(FieldDefinition::new(
                "title",
                "String!".parse().unwrap(),
            ));

        assert!(post.has_directive("model"));
        assert!(!post.has_directive("searchable"));
        assert_eq!(post.fields[0].field_type(), FieldType::String);
    }

    #[test]
    fn test_document_from_json() {
        let json = r#"{
            "types": [{
                "name": "Post",
                "directives": [{ "name": "model" }],
                "fields": [{
                    "name": "title",
                    "type": "String!",
                    "directives": [{
                        "name": "validator",
                        "arguments": [
                            { "name": "type", "value": { "kind": "Enum", "value": "required" } }
                        ]
                    }]
                }]
            }]
        }"#;

        let document = SchemaDocument::from_json(json).unwrap();
        let post = &document.types[0];
        assert_eq!(post.kind, TypeKind::Object);
        assert_eq!(post.fields[0].directives[0].name, "validator");
        assert_eq!(
            post.fields[0].directives[0].arguments[0].value,
            ArgumentValue::Enum("required".to_string())
        );
    }
}
