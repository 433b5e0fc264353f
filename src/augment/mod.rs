//! Template augmentation.
//!
//! Generated snippets are prepended to the request mapping templates of the
//! owning type's create and update mutations, which live in a host-owned
//! [`ResolverStore`].

pub mod store;
pub mod resolver;

pub use store::{InMemoryResolverStore, ResolverResource, ResolverStore};
pub use resolver::{
    prepend_snippet, resolver_file_name, AugmentReport, MutationOperation, ResolverIds,
    TemplateAugmenter,
};
