//! User Settings Module Implementation
//!
//! Per-user currency and timezone preferences, provisioned with defaults on
//! first read. The public API is defined in `user-settings-sdk` and
//! re-exported here.

#![forbid(unsafe_code)]

pub use user_settings_sdk::{
    SecurityContext, SettingsError, UserId, UserSettings, UserSettingsClientV1,
};

pub mod module;
pub use module::UserSettingsModule;

pub mod config;
pub use config::{IdentityConfig, UserSettingsConfig};

pub mod local_client;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
