use user_settings_sdk::errors::SettingsError;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
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

    #[error("Settings store unavailable: {0}")]
    StoreUnavailable(#[from] anyhow::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
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

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<DomainError> for SettingsError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Unauthenticated => Self::Unauthenticated,
            DomainError::Validation {
                field,
                value,
                message,
            } => Self::validation(field, value, message),
            DomainError::NotFound => Self::NotFound,
            DomainError::StoreUnavailable(_) => Self::StoreUnavailable,
            DomainError::Internal(_) => Self::Internal,
        }
    }
}
