use std::sync::Arc;

use user_settings_sdk::{SecurityContext, UserId, UserSettings};

use super::catalog::Catalogs;
use super::error::DomainError;
use super::events::SettingsEvent;
use super::ports::EventPublisher;
use super::repo::SettingsRepository;
use super::validation::{CurrencyCode, TimezoneLabel};

pub const DEFAULT_CURRENCY: &str = "INR";
pub const DEFAULT_TIMEZONE: &str = "Asia/Kolkata (GMT+05:30)";

// ============================================================================
// Service Configuration
// ============================================================================

/// Values written into a freshly provisioned record.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub default_currency: CurrencyCode,
    pub default_timezone: TimezoneLabel,
}

impl ServiceConfig {
    /// # Errors
    /// Returns `DomainError::Validation` if either default is not in its catalog.
    pub fn new(catalogs: &Catalogs, currency: &str, timezone: &str) -> Result<Self, DomainError> {
        Ok(Self {
            default_currency: CurrencyCode::parse(&catalogs.currencies, currency)?,
            default_timezone: TimezoneLabel::parse(&catalogs.timezones, timezone)?,
        })
    }
}

// ============================================================================
// Service Implementation
// ============================================================================

#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn SettingsRepository>,
    events: Arc<dyn EventPublisher<SettingsEvent>>,
    catalogs: Arc<Catalogs>,
    config: ServiceConfig,
}

impl Service {
    #[must_use]
    pub fn new(
        repo: Arc<dyn SettingsRepository>,
        events: Arc<dyn EventPublisher<SettingsEvent>>,
        catalogs: Arc<Catalogs>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            repo,
            events,
            catalogs,
            config,
        }
    }

    /// Return the caller's settings, creating the default record on first access.
    ///
    /// Reading never changes an existing record. When a concurrent caller wins
    /// the create, the record it wrote is re-read and returned.
    ///
    /// # Errors
    /// `Unauthenticated` for an anonymous caller, `StoreUnavailable` when the store fails.
    pub async fn get_or_create_settings(
        &self,
        ctx: &SecurityContext,
    ) -> Result<UserSettings, DomainError> {
        let user_id = require_subject(ctx)?;

        if let Some(settings) = self.repo.find_by_user(user_id).await? {
            return Ok(settings);
        }

        let created = self
            .repo
            .insert_if_absent(
                user_id,
                &self.config.default_currency,
                &self.config.default_timezone,
            )
            .await?;

        let settings = self
            .repo
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| DomainError::internal("settings record missing after provisioning"))?;

        if created {
            self.events.publish(&SettingsEvent::Provisioned {
                user_id: settings.user_id.clone(),
                at: settings.created_at,
            });
        }

        Ok(settings)
    }

    /// Requires a record provisioned by `get_or_create_settings`.
    ///
    /// # Errors
    /// `Validation` for a code outside the catalog (checked before anything else),
    /// then `Unauthenticated`, `NotFound` or `StoreUnavailable`.
    pub async fn update_currency(
        &self,
        ctx: &SecurityContext,
        currency: &str,
    ) -> Result<UserSettings, DomainError> {
        let currency = CurrencyCode::parse(&self.catalogs.currencies, currency)?;
        let user_id = require_subject(ctx)?;

        let settings = self
            .repo
            .update_currency(user_id, &currency)
            .await?
            .ok_or(DomainError::NotFound)?;

        self.events.publish(&SettingsEvent::CurrencyChanged {
            user_id: settings.user_id.clone(),
            currency: settings.currency.clone(),
            at: settings.updated_at,
        });

        Ok(settings)
    }

    /// # Errors
    /// Same as [`Service::update_currency`], for the timezone label.
    pub async fn update_timezone(
        &self,
        ctx: &SecurityContext,
        timezone: &str,
    ) -> Result<UserSettings, DomainError> {
        let timezone = TimezoneLabel::parse(&self.catalogs.timezones, timezone)?;
        let user_id = require_subject(ctx)?;

        let settings = self
            .repo
            .update_timezone(user_id, &timezone)
            .await?
            .ok_or(DomainError::NotFound)?;

        self.events.publish(&SettingsEvent::TimezoneChanged {
            user_id: settings.user_id.clone(),
            timezone: settings.timezone.clone(),
            at: settings.updated_at,
        });

        Ok(settings)
    }

    #[must_use]
    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }
}

fn require_subject(ctx: &SecurityContext) -> Result<&UserId, DomainError> {
    ctx.subject_id().ok_or(DomainError::Unauthenticated)
}
