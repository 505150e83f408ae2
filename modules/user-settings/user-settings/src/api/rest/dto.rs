use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use user_settings_sdk::models::UserSettings;
use utoipa::ToSchema;

use crate::domain::catalog::{CurrencyEntry, TimezoneEntry};
use crate::domain::events::SettingsEvent;

/// REST DTO for a user's settings record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(title = "UserSettings")]
pub struct UserSettingsDto {
    pub user_id: String,
    /// Currency code, e.g. `INR`
    pub currency: String,
    /// Timezone label, e.g. `Asia/Kolkata (GMT+05:30)`
    pub timezone: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<UserSettings> for UserSettingsDto {
    fn from(settings: UserSettings) -> Self {
        Self {
            user_id: settings.user_id.into_inner(),
            currency: settings.currency,
            timezone: settings.timezone,
            created_at: settings.created_at,
            updated_at: settings.updated_at,
        }
    }
}

/// A missing field deserializes to an empty string and is rejected by validation.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateCurrencyRequest {
    #[serde(default)]
    pub currency: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateTimezoneRequest {
    #[serde(default)]
    pub timezone: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[schema(title = "Currency")]
pub struct CurrencyDto {
    pub value: String,
    pub label: String,
    pub locale: String,
}

impl From<&CurrencyEntry> for CurrencyDto {
    fn from(entry: &CurrencyEntry) -> Self {
        Self {
            value: entry.value.clone(),
            label: entry.label.clone(),
            locale: entry.locale.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(title = "Timezone")]
pub struct TimezoneDto {
    pub label: String,
    pub tz_code: String,
    pub name: String,
    pub utc: String,
}

impl From<&TimezoneEntry> for TimezoneDto {
    fn from(entry: &TimezoneEntry) -> Self {
        Self {
            label: entry.label.clone(),
            tz_code: entry.tz_code.clone(),
            name: entry.name.clone(),
            utc: entry.utc.clone(),
        }
    }
}

/// Transport-level SSE payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(title = "SettingsEvent", description = "Server-sent settings change")]
pub struct SettingsEventDto {
    pub kind: String,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub timezone: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub at: OffsetDateTime,
}

impl From<&SettingsEvent> for SettingsEventDto {
    fn from(event: &SettingsEvent) -> Self {
        let (currency, timezone) = match event {
            SettingsEvent::Provisioned { .. } => (None, None),
            SettingsEvent::CurrencyChanged { currency, .. } => (Some(currency.clone()), None),
            SettingsEvent::TimezoneChanged { timezone, .. } => (None, Some(timezone.clone())),
        };
        Self {
            kind: event.kind().to_owned(),
            user_id: event.user_id().as_str().to_owned(),
            currency,
            timezone,
            at: event.at(),
        }
    }
}
