//! Transformer configuration.
//!
//! Every setting defaults to the contract the model transformer establishes
//! for generated resolvers, so an empty file (or no file at all) yields the
//! standard behavior. Files are TOML:
//!
//! ```toml
//! model_directive = "model"
//! input_path = "$ctx.args.input"
//! error_type = "InvalidArgumentsError"
//! create_resolver_id = "Create{type}Resolver"
//! update_resolver_id = "Update{type}Resolver"
//! ```

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Placeholder substituted with the owning type name in resolver id templates.
pub const TYPE_PLACEHOLDER: &str = "{type}";

/// Configuration for [`ValidatorTransformer`](crate::transformer::ValidatorTransformer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransformerConfig {
    /// Name of the marker directive the parent type must carry.
    pub model_directive: String,
    /// VTL reference to the mutation input object.
    pub input_path: String,
    /// Error type passed as the second argument of `$util.error`.
    pub error_type: String,
    /// Logical id template of the create mutation resolver.
    pub create_resolver_id: String,
    /// Logical id template of the update mutation resolver.
    pub update_resolver_id: String,
}

impl Default for TransformerConfig {
    fn default() -> Self {
        Self {
            model_directive: "model".to_string(),
            input_path: "$ctx.args.input".to_string(),
            error_type: "InvalidArgumentsError".to_string(),
            create_resolver_id: "Create{type}Resolver".to_string(),
            update_resolver_id: "Update{type}Resolver".to_string(),
        }
    }
}

impl TransformerConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: TransformerConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        let config = Self::from_toml_str(&source)?;
        log::debug!("Loaded transformer config from {}", path.display());
        Ok(config)
    }

    /// Check that every value can be spliced into generated templates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model_directive.is_empty() {
            return Err(invalid("model_directive", "must not be empty"));
        }

        let path_ok = self.input_path.starts_with('$')
            && self.input_path[1..]
                .split('.')
                .all(|segment| is_identifier(segment));
        if !path_ok {
            return Err(invalid(
                "input_path",
                "must be a '$'-prefixed dotted reference such as $ctx.args.input",
            ));
        }

        if !is_identifier(&self.error_type) {
            return Err(invalid("error_type", "must be a plain identifier"));
        }

        for (key, template) in [
            ("create_resolver_id", &self.create_resolver_id),
            ("update_resolver_id", &self.update_resolver_id),
        ] {
            if !template.contains(TYPE_PLACEHOLDER) {
                return Err(invalid(key, "must contain the {type} placeholder"));
            }
        }
        if self.create_resolver_id == self.update_resolver_id {
            return Err(invalid(
                "update_resolver_id",
                "must differ from create_resolver_id",
            ));
        }

        Ok(())
    }
}

fn invalid(key: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

/// GraphQL / VTL identifier: `[_A-Za-z][_0-9A-Za-z]*`.
pub(crate) fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
