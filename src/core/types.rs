//! Core value types handed over by the host schema parser.
//!
//! The type system uses closed enums for the same reasons everywhere in this
//! crate: the set of GraphQL value shapes is finite, serde handles enums
//! natively, and exhaustive matching catches missing cases at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A directive argument value as produced by the GraphQL parser.
///
/// Scalars keep their literal source text (GraphQL parsers do not coerce
/// numeric literals), which lets the generator decide how to read a value
/// once it knows the declared field type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "value")]
pub enum ArgumentValue {
    /// Quoted string literal (already unescaped)
    String(String),
    /// Integer literal text
    Int(String),
    /// Float literal text
    Float(String),
    /// Boolean literal
    Boolean(bool),
    /// Bare enum value
    Enum(String),
    /// List literal
    List(Vec<ArgumentValue>),
    /// Object literal
    Object(Vec<(String, ArgumentValue)>),
    /// Variable reference (`$name`)
    Variable(String),
    /// `null`
    Null,
}

impl ArgumentValue {
    /// Literal text of a scalar value, or `None` for lists, objects,
    /// variables and null.
    pub fn literal(&self) -> Option<String> {
        match self {
            ArgumentValue::String(s)
            | ArgumentValue::Int(s)
            | ArgumentValue::Float(s)
            | ArgumentValue::Enum(s) => Some(s.clone()),
            ArgumentValue::Boolean(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Get the shape name of this value (for logging).
    pub fn shape(&self) -> &'static str {
        match self {
            ArgumentValue::String(_) => "String",
            ArgumentValue::Int(_) => "Int",
            ArgumentValue::Float(_) => "Float",
            ArgumentValue::Boolean(_) => "Boolean",
            ArgumentValue::Enum(_) => "Enum",
            ArgumentValue::List(_) => "List",
            ArgumentValue::Object(_) => "Object",
            ArgumentValue::Variable(_) => "Variable",
            ArgumentValue::Null => "Null",
        }
    }
}

impl From<&str> for ArgumentValue {
    fn from(s: &str) -> Self {
        ArgumentValue::String(s.to_string())
    }
}

impl From<bool> for ArgumentValue {
    fn from(b: bool) -> Self {
        ArgumentValue::Boolean(b)
    }
}

impl From<i64> for ArgumentValue {
    fn from(v: i64) -> Self {
        ArgumentValue::Int(v.to_string())
    }
}

/// Declared named type of an annotated field.
///
/// Only the four built-in scalars matter to the generator; everything else
/// (ID, custom scalars, object types, enums) is carried as `Other` and rejected
/// by the kinds that need a typed parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    /// `String`
    String,
    /// `Int`
    Int,
    /// `Float`
    Float,
    /// `Boolean`
    Boolean,
    /// Any other named type
    Other(String),
}

impl FieldType {
    /// Get the GraphQL name of this type.
    pub fn name(&self) -> &str {
        match self {
            FieldType::String => "String",
            FieldType::Int => "Int",
            FieldType::Float => "Float",
            FieldType::Boolean => "Boolean",
            FieldType::Other(name) => name,
        }
    }
}

impl From<&str> for FieldType {
    fn from(name: &str) -> Self {
        match name {
            "String" => FieldType::String,
            "Int" => FieldType::Int,
            "Float" => FieldType::Float,
            "Boolean" => FieldType::Boolean,
            other => FieldType::Other(other.to_string()),
        }
    }
}

impl From<String> for FieldType {
    fn from(name: String) -> Self {
        FieldType::from(name.as_str())
    }
}

impl From<FieldType> for String {
    fn from(ty: FieldType) -> Self {
        ty.name().to_string()
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A field's full type reference, including list and non-null wrappers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeRef {
    /// Named type (`String`)
    Named(String),
    /// List wrapper (`[T]`)
    List(Box<TypeRef>),
    /// Non-null wrapper (`T!`)
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    /// Create a named type reference.
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    /// Innermost named type with all wrappers removed.
    pub fn named_type(&self) -> &str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::List(inner) | TypeRef::NonNull(inner) => inner.named_type(),
        }
    }

    /// Declared field type used by the snippet generator.
    pub fn field_type(&self) -> FieldType {
        FieldType::from(self.named_type())
    }
}

impl FromStr for TypeRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(inner) = s.strip_suffix('!') {
            let inner: TypeRef = inner.parse()?;
            if matches!(inner, TypeRef::NonNull(_)) {
                return Err(format!("Invalid type reference '{}'", s));
            }
            return Ok(TypeRef::NonNull(Box::new(inner)));
        }
        if let Some(inner) = s.strip_prefix('[') {
            let inner = inner
                .strip_suffix(']')
                .ok_or_else(|| format!("Unbalanced list type '{}'", s))?;
            return Ok(TypeRef::List(Box::new(inner.parse()?)));
        }
        let valid = !s.is_empty()
            && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
            && !s.starts_with(|c: char| c.is_ascii_digit());
        if valid {
            Ok(TypeRef::Named(s.to_string()))
        } else {
            Err(format!("Invalid type name '{}'", s))
        }
    }
}

impl TryFrom<String> for TypeRef {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TypeRef> for String {
    fn from(ty: TypeRef) -> Self {
        ty.to_string()
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => write!(f, "{}", name),
            TypeRef::List(inner) => write!(f, "[{}]", inner),
            TypeRef::NonNull(inner) => write!(f, "{}!", inner),
        }
    }
}
