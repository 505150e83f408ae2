//! Error types for the user-settings SDK.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Caller is not authenticated")]
    Unauthenticated,

    #[error("Validation error on field '{field}': {message}")]
    Validation {
        field: String,
        value: String,
        message: String,
    },

    #[error("Settings not found")]
    NotFound,

    #[error("Settings store unavailable")]
    StoreUnavailable,

    #[error("Internal error")]
    Internal,
}

impl SettingsError {
    #[must_use]
    pub fn validation(
        field: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Validation {
            field: field.into(),
            value: value.into(),
            message: message.into(),
        }
    }
}
