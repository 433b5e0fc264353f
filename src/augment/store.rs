//! Resolver resource storage.
//!
//! The host owns the resolver resources produced by the model transformer.
//! The augmenter only reads a resource by logical id and writes it back, so
//! the seam is a two-method trait. [`InMemoryResolverStore`] backs the CLI
//! and the tests.

use crate::core::error::TransformResult;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A resolver resource as the host describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResolverResource {
    /// Owning GraphQL type (`Mutation`)
    pub type_name: String,
    /// Resolved field (`createPost`)
    pub field_name: String,
    /// Request mapping template text
    pub request_mapping_template: String,
    /// Response mapping template text
    #[serde(default)]
    pub response_mapping_template: String,
}

impl ResolverResource {
    /// Create a resource with an empty response template.
    pub fn new(
        type_name: impl Into<String>,
        field_name: impl Into<String>,
        request_mapping_template: impl Into<String>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            field_name: field_name.into(),
            request_mapping_template: request_mapping_template.into(),
            response_mapping_template: String::new(),
        }
    }
}

/// Keyed access to resolver resources.
pub trait ResolverStore {
    /// Look up a resource by logical id.
    fn get_resolver(&self, id: &str) -> Option<ResolverResource>;

    /// Store a resource under a logical id, replacing any previous one.
    fn set_resolver(&mut self, id: &str, resource: ResolverResource);
}

/// Insertion-ordered in-memory store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InMemoryResolverStore {
    resolvers: IndexMap<String, ResolverResource>,
}

impl InMemoryResolverStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource (builder style).
    pub fn with_resolver(mut self, id: impl Into<String>, resource: ResolverResource) -> Self {
        self.resolvers.insert(id.into(), resource);
        self
    }

    /// Borrow a resource without copying it.
    pub fn resolver(&self, id: &str) -> Option<&ResolverResource> {
        self.resolvers.get(id)
    }

    /// Iterate over `(id, resource)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolverResource)> {
        self.resolvers.iter().map(|(id, r)| (id.as_str(), r))
    }

    /// Get the stored logical ids in insertion order.
    pub fn ids(&self) -> Vec<&str> {
        self.resolvers.keys().map(String::as_str).collect()
    }

    /// Number of stored resources.
    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    /// Check whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    /// Deserialize from a JSON object of `id -> resource`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load a store from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> TransformResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let store = Self::from_json(&json)?;
        log::debug!("Loaded {} resolvers from {}", store.len(), path.display());
        Ok(store)
    }
}

impl ResolverStore for InMemoryResolverStore {
    fn get_resolver(&self, id: &str) -> Option<ResolverResource> {
        self.resolvers.get(id).cloned()
    }

    fn set_resolver(&mut self, id: &str, resource: ResolverResource) {
        self.resolvers.insert(id.to_string(), resource);
    }
}
