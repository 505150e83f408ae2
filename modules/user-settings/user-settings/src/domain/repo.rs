use async_trait::async_trait;
use user_settings_sdk::{UserId, UserSettings};

use super::validation::{CurrencyCode, TimezoneLabel};

/// Storage port for settings records, keyed by user id.
///
/// Writes accept only catalog-validated values. Each call is a single atomic
/// statement against the store; none of them spans records.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn find_by_user(&self, user_id: &UserId) -> anyhow::Result<Option<UserSettings>>;

    /// Create the record unless one already exists for `user_id`.
    ///
    /// Returns `true` if this call created the record and `false` if a record
    /// was already present (including one created by a concurrent caller).
    async fn insert_if_absent(
        &self,
        user_id: &UserId,
        currency: &CurrencyCode,
        timezone: &TimezoneLabel,
    ) -> anyhow::Result<bool>;

    /// Returns `None` when no record exists for `user_id`.
    async fn update_currency(
        &self,
        user_id: &UserId,
        currency: &CurrencyCode,
    ) -> anyhow::Result<Option<UserSettings>>;

    /// Returns `None` when no record exists for `user_id`.
    async fn update_timezone(
        &self,
        user_id: &UserId,
        timezone: &TimezoneLabel,
    ) -> anyhow::Result<Option<UserSettings>>;
}
