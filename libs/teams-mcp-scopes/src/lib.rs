#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Delegated Microsoft Graph scopes for the Teams MCP server.
//!
//! Two fixed scope sets exist: [`FULL_ACCESS_SCOPES`] for normal operation and
//! [`READ_ONLY_SCOPES`] when the `TEAMS_MCP_READ_ONLY` environment variable is
//! set to `true`, `1` or `yes`.
//!
//! ```
//! use teams_mcp_scopes::{get_delegated_scopes, is_read_only_mode};
//!
//! let scopes = get_delegated_scopes(is_read_only_mode());
//! assert!(scopes.contains("User.Read"));
//! ```
//!
//! [`ScopeResolver`] wraps the same rule behind a configuration that can pin
//! the mode or read a different variable.

pub mod config;
pub mod constants;
pub mod error;
pub mod mode;
pub mod resolver;
pub mod scope_set;

pub use config::ScopeResolverConfig;
pub use error::ScopeError;
pub use mode::{AccessMode, is_read_only_mode, is_truthy, read_only_from_env};
pub use resolver::ScopeResolver;
pub use scope_set::{
    FULL_ACCESS_SCOPES, READ_ONLY_SCOPES, Scope, ScopeSet, get_delegated_scopes, is_mutating,
    resource_prefix,
};
