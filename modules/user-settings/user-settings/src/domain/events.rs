use time::OffsetDateTime;
use user_settings_sdk::UserId;

/// Transport-agnostic domain event, emitted after a successful write.
///
/// Consumers treat every event as "the caller's settings changed; re-fetch".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    Provisioned {
        user_id: UserId,
        at: OffsetDateTime,
    },
    CurrencyChanged {
        user_id: UserId,
        currency: String,
        at: OffsetDateTime,
    },
    TimezoneChanged {
        user_id: UserId,
        timezone: String,
        at: OffsetDateTime,
    },
}

impl SettingsEvent {
    #[must_use]
    pub fn user_id(&self) -> &UserId {
        match self {
            Self::Provisioned { user_id, .. }
            | Self::CurrencyChanged { user_id, .. }
            | Self::TimezoneChanged { user_id, .. } => user_id,
        }
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Provisioned { .. } => "provisioned",
            Self::CurrencyChanged { .. } => "currency_changed",
            Self::TimezoneChanged { .. } => "timezone_changed",
        }
    }

    #[must_use]
    pub fn at(&self) -> OffsetDateTime {
        match self {
            Self::Provisioned { at, .. }
            | Self::CurrencyChanged { at, .. }
            | Self::TimezoneChanged { at, .. } => *at,
        }
    }
}
