//! Public models for the user-settings module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the module and its consumers.

use std::fmt;

use time::OffsetDateTime;

/// Stable identifier of an authenticated user.
///
/// The value is opaque: it is issued by the identity provider and is never
/// interpreted by this module beyond equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(String);

impl UserId {
    /// Build a user id from a raw identifier.
    ///
    /// Surrounding whitespace is trimmed. Returns `None` for an empty value.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-user currency and timezone preferences.
///
/// `currency` is always a code from the currency catalog and `timezone` a
/// label from the timezone catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSettings {
    pub user_id: UserId,
    pub currency: String,
    pub timezone: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_trims_whitespace() {
        let id = UserId::parse("  user_2abc ").unwrap();
        assert_eq!(id.as_str(), "user_2abc");
        assert_eq!(id.to_string(), "user_2abc");
    }

    #[test]
    fn user_id_rejects_blank_values() {
        assert!(UserId::parse("").is_none());
        assert!(UserId::parse("   ").is_none());
    }
}
