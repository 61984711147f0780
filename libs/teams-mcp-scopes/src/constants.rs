//! Microsoft Graph delegated permission names used by the Teams MCP server.
//!
//! These constants are the single source of truth for scope spelling; the
//! [`crate::scope_set`] tables are built from them.

/// Sign in and read the signed-in user's profile.
pub const USER_READ: &str = "User.Read";

/// Read basic profiles of all users in the organization.
pub const USER_READ_BASIC_ALL: &str = "User.ReadBasic.All";

/// Read the names and descriptions of joined teams.
pub const TEAM_READ_BASIC_ALL: &str = "Team.ReadBasic.All";

/// Read channel names and descriptions.
pub const CHANNEL_READ_BASIC_ALL: &str = "Channel.ReadBasic.All";

/// Read channel messages.
pub const CHANNEL_MESSAGE_READ_ALL: &str = "ChannelMessage.Read.All";

/// Post messages to channels.
pub const CHANNEL_MESSAGE_SEND: &str = "ChannelMessage.Send";

/// Read team memberships.
pub const TEAM_MEMBER_READ_ALL: &str = "TeamMember.Read.All";

/// Read chat names and members, without message content.
pub const CHAT_READ_BASIC: &str = "Chat.ReadBasic";

/// Read chats and their messages.
pub const CHAT_READ: &str = "Chat.Read";

/// Read and send chat messages.
pub const CHAT_READ_WRITE: &str = "Chat.ReadWrite";

/// Environment variable that switches the process into read-only mode.
pub const READ_ONLY_ENV_VAR: &str = "TEAMS_MCP_READ_ONLY";

/// Prefix for environment variables consumed by
/// [`crate::config::ScopeResolverConfig::load`].
pub const CONFIG_ENV_PREFIX: &str = "TEAMS_MCP_SCOPES_";
