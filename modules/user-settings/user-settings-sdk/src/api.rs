//! `UserSettingsClientV1` trait definition.
//!
//! All methods require a `SecurityContext`; an anonymous context is rejected
//! with `SettingsError::Unauthenticated`.

use async_trait::async_trait;

use crate::errors::SettingsError;
use crate::models::UserSettings;
use crate::security::SecurityContext;

/// Public API trait for the user-settings module (Version 1).
#[async_trait]
pub trait UserSettingsClientV1: Send + Sync {
    /// Get settings for the current user.
    /// Provisions a record with the default currency and timezone if none exists.
    async fn get_settings(&self, ctx: &SecurityContext) -> Result<UserSettings, SettingsError>;

    /// Change the preferred currency.
    /// Fails with `NotFound` if settings were never provisioned for the user.
    async fn update_currency(
        &self,
        ctx: &SecurityContext,
        currency: &str,
    ) -> Result<UserSettings, SettingsError>;

    /// Change the preferred timezone.
    /// Fails with `NotFound` if settings were never provisioned for the user.
    async fn update_timezone(
        &self,
        ctx: &SecurityContext,
        timezone: &str,
    ) -> Result<UserSettings, SettingsError>;
}
