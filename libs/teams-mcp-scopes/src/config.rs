//! Configuration for the scope resolver.

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use serde::Deserialize;

use crate::constants::{CONFIG_ENV_PREFIX, READ_ONLY_ENV_VAR};
use crate::error::ScopeError;
use crate::mode::AccessMode;

/// Keys read from `TEAMS_MCP_SCOPES_*`, after the prefix is stripped.
const ENV_KEYS: &[&str] = &["mode", "read_only_env"];

/// Resolver configuration.
///
/// ```yaml
/// read_only_env: "TEAMS_MCP_READ_ONLY"
/// mode: read_only   # optional; overrides the environment flag
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScopeResolverConfig {
    /// Environment variable consulted when no explicit mode is set.
    pub read_only_env: String,

    /// Fixed access mode. When absent the environment decides.
    pub mode: Option<AccessMode>,
}

impl Default for ScopeResolverConfig {
    fn default() -> Self {
        Self {
            read_only_env: READ_ONLY_ENV_VAR.to_owned(),
            mode: None,
        }
    }
}

impl ScopeResolverConfig {
    /// Extract the configuration from an already assembled figment.
    ///
    /// # Errors
    /// Returns [`ScopeError::Config`] if a value has the wrong type or an
    /// unknown key is present.
    pub fn from_figment(figment: &Figment) -> Result<Self, ScopeError> {
        Ok(figment.extract()?)
    }

    /// Parse the configuration from a YAML document.
    ///
    /// # Errors
    /// Returns [`ScopeError::Config`] if the document is not valid YAML or
    /// does not match [`ScopeResolverConfig`].
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ScopeError> {
        Self::from_figment(&Figment::from(Yaml::string(yaml)))
    }

    /// Load the configuration from an optional YAML file, then from
    /// `TEAMS_MCP_SCOPES_MODE` and `TEAMS_MCP_SCOPES_READ_ONLY_ENV`, later
    /// sources winning.
    ///
    /// A missing file is treated as empty. Other variables sharing the
    /// prefix are ignored. Environment values are parsed by type, so a
    /// purely numeric `TEAMS_MCP_SCOPES_READ_ONLY_ENV` is rejected.
    ///
    /// # Errors
    /// Returns [`ScopeError::Config`] if any source holds an invalid value.
    pub fn load(path: Option<&Path>) -> Result<Self, ScopeError> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(Env::prefixed(CONFIG_ENV_PREFIX).only(ENV_KEYS));
        Self::from_figment(&figment)
    }
}
