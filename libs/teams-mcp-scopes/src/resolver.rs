//! Scope resolver service.

use tracing::debug;

use crate::config::ScopeResolverConfig;
use crate::mode::{AccessMode, read_only_from_env};
use crate::scope_set::ScopeSet;

/// Decides which delegated scopes the server requests.
///
/// A configured mode is fixed for the resolver's lifetime. Otherwise the
/// configured environment variable is read on every call.
#[derive(Debug, Clone)]
pub struct ScopeResolver {
    read_only_env: String,
    mode: Option<AccessMode>,
}

impl Default for ScopeResolver {
    fn default() -> Self {
        Self::from_config(&ScopeResolverConfig::default())
    }
}

impl ScopeResolver {
    /// Create a resolver from configuration.
    #[must_use]
    pub fn from_config(cfg: &ScopeResolverConfig) -> Self {
        debug!(
            read_only_env = %cfg.read_only_env,
            mode = ?cfg.mode,
            "Loaded scope resolver configuration"
        );
        Self {
            read_only_env: cfg.read_only_env.clone(),
            mode: cfg.mode,
        }
    }

    /// The current access mode.
    #[must_use]
    pub fn access_mode(&self) -> AccessMode {
        if let Some(mode) = self.mode {
            debug!(%mode, source = "config", "Resolved access mode");
            return mode;
        }

        let mode = AccessMode::from(read_only_from_env(&self.read_only_env));
        debug!(%mode, source = %self.read_only_env, "Resolved access mode");
        mode
    }

    /// The scopes to request for the current access mode.
    #[must_use]
    pub fn delegated_scopes(&self) -> ScopeSet {
        self.access_mode().scopes()
    }
}
