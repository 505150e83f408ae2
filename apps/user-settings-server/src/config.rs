//! Layered server configuration.
//!
//! Order of precedence, lowest first: built-in defaults, the YAML file given
//! with `--config`, `APP__*` environment variables, then CLI flags.

use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use user_settings::UserSettingsConfig;

const ENV_PREFIX: &str = "APP__";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub user_settings: UserSettingsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8087".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    pub dsn: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dsn: "sqlite://user_settings.db?mode=rwc".to_owned(),
            max_connections: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directives; `RUST_LOG` takes precedence when set.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info,tower_http=info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Values from the command line that override the loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub verbose: u8,
    pub mock: bool,
}

impl AppConfig {
    /// Load defaults, then `path` (if any), then `APP__*` environment variables.
    ///
    /// # Errors
    /// Returns an error if the file cannot be parsed or a value has the wrong shape.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("failed to load configuration")
    }

    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(port) = cli.port {
            self.server.bind_addr = match self.server.bind_addr.rsplit_once(':') {
                Some((host, _)) => format!("{host}:{port}"),
                None => format!("{}:{port}", self.server.bind_addr),
            };
        }

        match cli.verbose {
            0 => {}
            1 => "info".clone_into(&mut self.logging.level),
            2 => "debug".clone_into(&mut self.logging.level),
            _ => "trace".clone_into(&mut self.logging.level),
        }

        if cli.mock {
            // Every pooled connection would otherwise get its own empty database.
            "sqlite::memory:".clone_into(&mut self.database.dsn);
            self.database.max_connections = 1;
        }
    }

    /// # Errors
    /// Returns an error if `server.bind_addr` is not a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server
            .bind_addr
            .parse()
            .with_context(|| format!("invalid bind address '{}'", self.server.bind_addr))
    }

    /// # Errors
    /// Returns an error if any section is inconsistent.
    pub fn validate(&self) -> Result<()> {
        self.bind_addr()?;
        if self.database.dsn.trim().is_empty() {
            anyhow::bail!("database.dsn must not be empty");
        }
        if self.database.max_connections == 0 {
            anyhow::bail!("database.max_connections must be at least 1");
        }
        self.user_settings.validate()
    }

    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_yaml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_are_valid() {
        temp_env::with_vars_unset(
            ["APP__SERVER__BIND_ADDR", "APP__USER_SETTINGS__DEFAULT_CURRENCY"],
            || {
                let config = AppConfig::load(None).unwrap();
                assert_eq!(config.user_settings.default_currency, "INR");
                config.validate().unwrap();
            },
        );
    }

    #[test]
    fn yaml_overrides_defaults_and_env_overrides_yaml() {
        let file = write_yaml(
            "server:\n  bind_addr: \"0.0.0.0:9000\"\nuser_settings:\n  default_currency: EUR\n",
        );

        temp_env::with_var("APP__USER_SETTINGS__DEFAULT_CURRENCY", Some("USD"), || {
            let config = AppConfig::load(Some(file.path())).unwrap();
            assert_eq!(config.server.bind_addr, "0.0.0.0:9000");
            assert_eq!(config.user_settings.default_currency, "USD");
            assert_eq!(
                config.user_settings.default_timezone,
                "Asia/Kolkata (GMT+05:30)"
            );
        });
    }

    #[test]
    fn unknown_keys_fail_to_load() {
        let file = write_yaml("servr:\n  bind_addr: \"0.0.0.0:9000\"\n");
        assert!(AppConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn cli_overrides_win() {
        let mut config = AppConfig::default();
        config.apply_cli_overrides(&CliOverrides {
            port: Some(9999),
            verbose: 2,
            mock: true,
        });

        assert_eq!(config.server.bind_addr, "127.0.0.1:9999");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.database.dsn, "sqlite::memory:");
        assert_eq!(config.database.max_connections, 1);
    }

    #[test]
    fn validate_reports_bad_bind_address() {
        let mut config = AppConfig::default();
        "not-an-address".clone_into(&mut config.server.bind_addr);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("invalid bind address"));
    }
}
