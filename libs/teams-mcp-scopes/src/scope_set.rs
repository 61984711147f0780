use std::slice;

use crate::constants::{
    CHANNEL_MESSAGE_READ_ALL, CHANNEL_MESSAGE_SEND, CHANNEL_READ_BASIC_ALL, CHAT_READ,
    CHAT_READ_BASIC, CHAT_READ_WRITE, TEAM_MEMBER_READ_ALL, TEAM_READ_BASIC_ALL, USER_READ,
    USER_READ_BASIC_ALL,
};

/// A delegated permission name, e.g. `"User.Read"`.
pub type Scope = &'static str;

/// Segments that mark a scope as granting mutation (`Chat.ReadWrite`,
/// `ChannelMessage.Send`, ...).
const MUTATING_SEGMENTS: &[&str] = &["ReadWrite", "Write", "Send"];

/// Scopes requested in normal operation.
pub const FULL_ACCESS_SCOPES: ScopeSet = ScopeSet::new(&[
    USER_READ,
    USER_READ_BASIC_ALL,
    TEAM_READ_BASIC_ALL,
    CHANNEL_READ_BASIC_ALL,
    CHANNEL_MESSAGE_READ_ALL,
    CHANNEL_MESSAGE_SEND,
    TEAM_MEMBER_READ_ALL,
    CHAT_READ_BASIC,
    CHAT_READ_WRITE,
]);

/// Scopes requested in read-only mode.
///
/// Drops `ChannelMessage.Send` and swaps `Chat.ReadWrite` for `Chat.Read`.
pub const READ_ONLY_SCOPES: ScopeSet = ScopeSet::new(&[
    USER_READ,
    USER_READ_BASIC_ALL,
    TEAM_READ_BASIC_ALL,
    CHANNEL_READ_BASIC_ALL,
    CHANNEL_MESSAGE_READ_ALL,
    TEAM_MEMBER_READ_ALL,
    CHAT_READ_BASIC,
    CHAT_READ,
]);

/// An ordered, immutable sequence of unique scopes.
///
/// Instances are `'static` tables; copying a `ScopeSet` copies the view, not
/// the data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScopeSet(&'static [Scope]);

impl ScopeSet {
    /// Wrap a static scope table.
    #[must_use]
    pub const fn new(scopes: &'static [Scope]) -> Self {
        Self(scopes)
    }

    /// The scopes in request order.
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &'static [Scope] {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the scopes in request order.
    pub fn iter(&self) -> impl Iterator<Item = Scope> {
        self.0.iter().copied()
    }

    /// Exact, case-sensitive membership test.
    #[must_use]
    pub fn contains(&self, scope: &str) -> bool {
        self.0.iter().any(|s| *s == scope)
    }

    /// Whether any scope in the set grants mutation.
    #[must_use]
    pub fn has_mutating_scope(&self) -> bool {
        self.iter().any(is_mutating)
    }

    /// Render the set as an `OAuth` 2.0 `scope` parameter (space-delimited,
    /// order preserved).
    #[must_use]
    pub fn to_scope_param(&self) -> String {
        self.0.join(" ")
    }
}

impl IntoIterator for ScopeSet {
    type Item = &'static Scope;
    type IntoIter = slice::Iter<'static, Scope>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl AsRef<[Scope]> for ScopeSet {
    fn as_ref(&self) -> &[Scope] {
        self.0
    }
}

/// Select the scope set for the given mode.
///
/// Any boolean is accepted; callers usually pass
/// [`crate::is_read_only_mode`].
#[must_use]
pub const fn get_delegated_scopes(read_only: bool) -> ScopeSet {
    if read_only {
        READ_ONLY_SCOPES
    } else {
        FULL_ACCESS_SCOPES
    }
}

/// The resource part of a scope: everything before the first `.`.
///
/// A scope without a dot is its own resource.
#[must_use]
pub fn resource_prefix(scope: &str) -> &str {
    scope.split_once('.').map_or(scope, |(resource, _)| resource)
}

/// Whether a scope grants write or send access.
#[must_use]
pub fn is_mutating(scope: &str) -> bool {
    scope
        .split('.')
        .skip(1)
        .any(|segment| MUTATING_SEGMENTS.contains(&segment))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn full_access_has_nine_scopes_in_order() {
        assert_eq!(
            FULL_ACCESS_SCOPES.as_slice(),
            &[
                "User.Read",
                "User.ReadBasic.All",
                "Team.ReadBasic.All",
                "Channel.ReadBasic.All",
                "ChannelMessage.Read.All",
                "ChannelMessage.Send",
                "TeamMember.Read.All",
                "Chat.ReadBasic",
                "Chat.ReadWrite",
            ]
        );
    }

    #[test]
    fn read_only_has_eight_scopes_in_order() {
        assert_eq!(
            READ_ONLY_SCOPES.as_slice(),
            &[
                "User.Read",
                "User.ReadBasic.All",
                "Team.ReadBasic.All",
                "Channel.ReadBasic.All",
                "ChannelMessage.Read.All",
                "TeamMember.Read.All",
                "Chat.ReadBasic",
                "Chat.Read",
            ]
        );
    }

    #[test]
    fn scope_sets_have_no_duplicates() {
        for set in [FULL_ACCESS_SCOPES, READ_ONLY_SCOPES] {
            let mut seen = std::collections::HashSet::new();
            assert!(set.iter().all(|s| seen.insert(s)), "duplicate in {set:?}");
        }
    }

    #[test]
    fn selector_returns_the_shared_tables() {
        assert_eq!(get_delegated_scopes(true), READ_ONLY_SCOPES);
        assert_eq!(get_delegated_scopes(false), FULL_ACCESS_SCOPES);
    }

    #[test]
    fn resource_prefix_stops_at_first_dot() {
        assert_eq!(resource_prefix("ChannelMessage.Read.All"), "ChannelMessage");
        assert_eq!(resource_prefix("Chat.ReadWrite"), "Chat");
        assert_eq!(resource_prefix("offline_access"), "offline_access");
        assert_eq!(resource_prefix(""), "");
    }

    #[test]
    fn mutation_is_detected_by_segment() {
        assert!(is_mutating("Chat.ReadWrite"));
        assert!(is_mutating("ChannelMessage.Send"));
        assert!(is_mutating("Files.ReadWrite.All"));
        assert!(is_mutating("Group.Write.All"));
        assert!(!is_mutating("Chat.Read"));
        assert!(!is_mutating("Chat.ReadBasic"));
        assert!(!is_mutating("User.ReadBasic.All"));
        // the resource name itself is never treated as a verb
        assert!(!is_mutating("Send.Read"));
    }

    #[test]
    fn only_full_access_mutates() {
        assert!(FULL_ACCESS_SCOPES.has_mutating_scope());
        assert!(!READ_ONLY_SCOPES.has_mutating_scope());
    }

    #[test]
    fn contains_is_exact() {
        assert!(FULL_ACCESS_SCOPES.contains("Chat.ReadWrite"));
        assert!(!FULL_ACCESS_SCOPES.contains("chat.readwrite"));
        assert!(!READ_ONLY_SCOPES.contains("Chat.ReadWrite"));
    }

    #[test]
    fn scope_param_is_space_delimited() {
        assert_eq!(
            READ_ONLY_SCOPES.to_scope_param(),
            "User.Read User.ReadBasic.All Team.ReadBasic.All Channel.ReadBasic.All \
             ChannelMessage.Read.All TeamMember.Read.All Chat.ReadBasic Chat.Read"
        );
    }

    #[test]
    fn into_iter_preserves_order() {
        let collected: Vec<&str> = FULL_ACCESS_SCOPES.into_iter().copied().collect();
        assert_eq!(collected, FULL_ACCESS_SCOPES.as_slice());
        assert_eq!(FULL_ACCESS_SCOPES.len(), 9);
        assert!(!READ_ONLY_SCOPES.is_empty());
    }
}
