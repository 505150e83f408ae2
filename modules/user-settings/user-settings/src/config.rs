//! Configuration for the user-settings module.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Catalogs;
use crate::domain::service::{DEFAULT_CURRENCY, DEFAULT_TIMEZONE, ServiceConfig};

/// Configuration for the user-settings module.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct UserSettingsConfig {
    /// Currency code written into new records. Must be a catalog code.
    /// Default: `INR`
    pub default_currency: String,

    /// Timezone label written into new records. Must be a catalog label.
    /// Default: `Asia/Kolkata (GMT+05:30)`
    pub default_timezone: String,

    /// Where unauthenticated REST callers are redirected.
    pub sign_in_url: String,

    /// Buffer size of the settings event channel.
    pub event_buffer: usize,

    pub identity: IdentityConfig,
}

impl Default for UserSettingsConfig {
    fn default() -> Self {
        Self {
            default_currency: DEFAULT_CURRENCY.to_owned(),
            default_timezone: DEFAULT_TIMEZONE.to_owned(),
            sign_in_url: "/sign-in".to_owned(),
            event_buffer: 1024,
            identity: IdentityConfig::default(),
        }
    }
}

impl UserSettingsConfig {
    /// Check the configured defaults against the built-in catalogs.
    ///
    /// # Errors
    /// Returns an error naming the offending value when a default is not a
    /// catalog member or `sign_in_url` is empty.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.sign_in_url.trim().is_empty() {
            anyhow::bail!("user_settings.sign_in_url must not be empty");
        }
        self.service_config(&Catalogs::builtin()).map(|_| ())
    }

    pub(crate) fn service_config(&self, catalogs: &Catalogs) -> anyhow::Result<ServiceConfig> {
        ServiceConfig::new(catalogs, &self.default_currency, &self.default_timezone)
            .map_err(|e| anyhow::anyhow!("invalid user-settings defaults: {e}"))
    }
}

/// How REST callers are identified.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum IdentityConfig {
    /// `Authorization: Bearer <token>` looked up in a fixed token table.
    StaticTokens { tokens: BTreeMap<String, String> },
    /// Trust a header set by an authenticating reverse proxy.
    TrustedHeader {
        #[serde(default = "default_user_header")]
        header: String,
    },
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self::TrustedHeader {
            header: default_user_header(),
        }
    }
}

fn default_user_header() -> String {
    "x-user-id".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = UserSettingsConfig::default();
        assert_eq!(cfg.default_currency, "INR");
        assert_eq!(cfg.default_timezone, "Asia/Kolkata (GMT+05:30)");
        assert_eq!(cfg.sign_in_url, "/sign-in");
        assert_eq!(
            cfg.identity,
            IdentityConfig::TrustedHeader {
                header: "x-user-id".to_owned()
            }
        );
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let cfg: UserSettingsConfig = serde_json::from_value(serde_json::json!({
            "sign_in_url": "https://id.example.com/login",
            "identity": { "mode": "static_tokens", "tokens": { "t-1": "alice" } }
        }))
        .unwrap();

        assert_eq!(cfg.default_currency, "INR");
        assert_eq!(cfg.sign_in_url, "https://id.example.com/login");
        match cfg.identity {
            IdentityConfig::StaticTokens { tokens } => {
                assert_eq!(tokens.get("t-1").map(String::as_str), Some("alice"));
            }
            IdentityConfig::TrustedHeader { .. } => panic!("expected static tokens"),
        }
    }

    #[test]
    fn test_validate_rejects_defaults_outside_catalogs() {
        assert!(UserSettingsConfig::default().validate().is_ok());

        let cfg = UserSettingsConfig {
            default_timezone: "Asia/Kolkata".to_owned(),
            ..UserSettingsConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid Timezone: Asia/Kolkata"));

        let cfg = UserSettingsConfig {
            sign_in_url: String::new(),
            ..UserSettingsConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let res: Result<UserSettingsConfig, _> =
            serde_json::from_value(serde_json::json!({ "default_currancy": "USD" }));
        assert!(res.is_err());
    }
}
