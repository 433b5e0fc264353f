//! Prepending snippets to mutation request templates.

use crate::augment::store::ResolverStore;
use crate::core::config::{TransformerConfig, TYPE_PLACEHOLDER};
use crate::snippet::Snippet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mutations whose request templates receive validator snippets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationOperation {
    /// `create{Type}`
    Create,
    /// `update{Type}`
    Update,
}

impl MutationOperation {
    /// Get all augmented operations, in the order they are visited.
    pub fn all() -> &'static [MutationOperation] {
        &[MutationOperation::Create, MutationOperation::Update]
    }

    /// Get the operation prefix used in field names.
    pub fn prefix(&self) -> &'static str {
        match self {
            MutationOperation::Create => "create",
            MutationOperation::Update => "update",
        }
    }

    /// Mutation field name for a type (`createPost`).
    pub fn field_name(&self, type_name: &str) -> String {
        format!("{}{}", self.prefix(), type_name)
    }
}

impl fmt::Display for MutationOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// File name of a mutation's request template (`Mutation.createPost.req.vtl`).
pub fn resolver_file_name(operation: MutationOperation, type_name: &str) -> String {
    format!("Mutation.{}.req.vtl", operation.field_name(type_name))
}

/// Put a snippet ahead of an existing template, separated by a blank line.
pub fn prepend_snippet(existing: &str, snippet: &str) -> String {
    format!("{}\n\n{}", snippet, existing)
}

/// Logical resolver ids derived from the configured templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverIds {
    create: String,
    update: String,
}

impl ResolverIds {
    /// Take the id templates from a configuration.
    pub fn from_config(config: &TransformerConfig) -> Self {
        Self {
            create: config.create_resolver_id.clone(),
            update: config.update_resolver_id.clone(),
        }
    }

    /// Logical id of an operation's resolver for a type (`CreatePostResolver`).
    pub fn id(&self, operation: MutationOperation, type_name: &str) -> String {
        let template = match operation {
            MutationOperation::Create => &self.create,
            MutationOperation::Update => &self.update,
        };
        template.replace(TYPE_PLACEHOLDER, type_name)
    }
}

impl Default for ResolverIds {
    fn default() -> Self {
        Self::from_config(&TransformerConfig::default())
    }
}

/// Outcome of augmenting one type's resolvers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AugmentReport {
    /// Resolver ids whose templates were rewritten
    pub augmented: Vec<String>,
    /// Resolver ids that were not present in the store
    pub skipped: Vec<String>,
}

impl AugmentReport {
    /// Check whether any template was rewritten.
    pub fn is_augmented(&self) -> bool {
        !self.augmented.is_empty()
    }

    /// Fold another report into this one.
    pub fn merge(&mut self, other: AugmentReport) {
        self.augmented.extend(other.augmented);
        self.skipped.extend(other.skipped);
    }
}

/// Writes snippets into the create and update request templates of a type.
#[derive(Debug, Clone, Default)]
pub struct TemplateAugmenter {
    ids: ResolverIds,
}

impl TemplateAugmenter {
    /// Create an augmenter using the configured resolver ids.
    pub fn new(config: &TransformerConfig) -> Self {
        Self {
            ids: ResolverIds::from_config(config),
        }
    }

    /// Get the resolver ids this augmenter targets.
    pub fn ids(&self) -> &ResolverIds {
        &self.ids
    }

    /// Prepend a snippet to every mutation template of `type_name` that
    /// exists in the store. Missing resolvers are skipped.
    pub fn augment<S>(&self, store: &mut S, type_name: &str, snippet: &Snippet) -> AugmentReport
    where
        S: ResolverStore + ?Sized,
    {
        let mut report = AugmentReport::default();

        for &operation in MutationOperation::all() {
            let id = self.ids.id(operation, type_name);
            match store.get_resolver(&id) {
                Some(mut resource) => {
                    resource.request_mapping_template =
                        prepend_snippet(&resource.request_mapping_template, snippet.as_str());
                    store.set_resolver(&id, resource);
                    log::info!("Added validator snippet to {}", id);
                    report.augmented.push(id);
                }
                None => {
                    log::debug!("No resolver {} for {}; skipping", id, type_name);
                    report.skipped.push(id);
                }
            }
        }

        report
    }
}
