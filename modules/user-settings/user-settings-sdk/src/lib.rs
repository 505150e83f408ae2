//! User Settings SDK
//!
//! This crate provides the public API for the user-settings module:
//! - `UserSettingsClientV1` trait for in-process consumers
//! - Model types (`UserSettings`, `UserId`)
//! - Caller identity (`SecurityContext`)
//! - Error type (`SettingsError`)
//!
//! ```ignore
//! let client: Arc<dyn UserSettingsClientV1> = module.client();
//! let settings = client.get_settings(&ctx).await?;
//! ```

#![forbid(unsafe_code)]

pub mod api;
pub mod errors;
pub mod models;
pub mod security;

pub use api::UserSettingsClientV1;
pub use errors::SettingsError;
pub use models::{UserId, UserSettings};
pub use security::SecurityContext;
