//! Read-only mode detection.
//!
//! The environment is consulted on every call. Nothing is cached, so a change
//! to `TEAMS_MCP_READ_ONLY` is visible to the next caller.

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::constants::READ_ONLY_ENV_VAR;
use crate::error::ScopeError;
use crate::scope_set::{ScopeSet, get_delegated_scopes};

/// Values (after trimming and lowercasing) that enable read-only mode.
const TRUTHY_VALUES: &[&str] = &["true", "1", "yes"];

/// Whether the process should run in read-only mode.
///
/// Reads `TEAMS_MCP_READ_ONLY`; unset, non-UTF-8 or unrecognized values all
/// mean `false`.
#[must_use]
pub fn is_read_only_mode() -> bool {
    read_only_from_env(READ_ONLY_ENV_VAR)
}

/// Same rule as [`is_read_only_mode`], for an arbitrary variable name.
#[must_use]
pub fn read_only_from_env(key: &str) -> bool {
    env::var(key).is_ok_and(|value| is_truthy(&value))
}

/// Whether `value` is one of `true`, `1` or `yes`, ignoring case and
/// surrounding whitespace.
#[must_use]
pub fn is_truthy(value: &str) -> bool {
    let normalized = value.trim().to_lowercase();
    TRUTHY_VALUES.contains(&normalized.as_str())
}

/// Operating mode of the server with respect to Graph permissions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessMode {
    /// Request every delegated scope, including send and write.
    #[default]
    FullAccess,
    /// Request non-mutating scopes only.
    ReadOnly,
}

impl AccessMode {
    /// Resolve the mode from `TEAMS_MCP_READ_ONLY`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from(is_read_only_mode())
    }

    #[must_use]
    pub const fn is_read_only(self) -> bool {
        matches!(self, Self::ReadOnly)
    }

    /// The scope set requested in this mode.
    #[must_use]
    pub const fn scopes(self) -> ScopeSet {
        get_delegated_scopes(self.is_read_only())
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullAccess => "full_access",
            Self::ReadOnly => "read_only",
        }
    }
}

impl From<bool> for AccessMode {
    fn from(read_only: bool) -> Self {
        if read_only {
            Self::ReadOnly
        } else {
            Self::FullAccess
        }
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessMode {
    type Err = ScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "full_access" => Ok(Self::FullAccess),
            "read_only" => Ok(Self::ReadOnly),
            other => Err(ScopeError::UnknownAccessMode(other.to_owned())),
        }
    }
}
