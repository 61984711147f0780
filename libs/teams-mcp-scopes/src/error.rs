//! Error types for scope resolution.

use thiserror::Error;

/// Errors raised by the fallible parts of the crate.
///
/// Resolving the read-only flag and selecting a scope set never fail; only
/// configuration loading and parsing an access mode by name do.
#[derive(Debug, Error)]
pub enum ScopeError {
    /// The resolver configuration could not be extracted.
    #[error("invalid scope resolver configuration: {0}")]
    Config(String),

    /// An access mode name was not recognized.
    #[error("unknown access mode '{0}' (expected 'full_access' or 'read_only')")]
    UnknownAccessMode(String),
}

impl From<figment::Error> for ScopeError {
    fn from(e: figment::Error) -> Self {
        Self::Config(e.to_string())
    }
}
