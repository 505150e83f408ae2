//! Catalog membership rules and the validated values built on them.
//!
//! `CurrencyCode` and `TimezoneLabel` can only be obtained through `parse`,
//! so a value that reaches the repository is always a catalog member.

use std::fmt;

use super::catalog::{CurrencyCatalog, TimezoneCatalog};
use super::error::DomainError;
use super::fields::SettingsFields;

/// True iff `code` is the `value` of some currency catalog entry.
#[must_use]
pub fn is_valid_currency(catalog: &CurrencyCatalog, code: &str) -> bool {
    catalog.find(code).is_some()
}

/// True iff `label` is the `label` of some timezone catalog entry.
#[must_use]
pub fn is_valid_timezone(catalog: &TimezoneCatalog, label: &str) -> bool {
    catalog.find(label).is_some()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// # Errors
    /// Returns `DomainError::Validation` naming `raw` when it is empty or not in the catalog.
    pub fn parse(catalog: &CurrencyCatalog, raw: &str) -> Result<Self, DomainError> {
        if raw.is_empty() {
            return Err(DomainError::validation(
                SettingsFields::CURRENCY,
                raw,
                "must not be empty",
            ));
        }
        if !is_valid_currency(catalog, raw) {
            return Err(DomainError::validation(
                SettingsFields::CURRENCY,
                raw,
                format!("Invalid Currency: {raw}"),
            ));
        }
        Ok(Self(raw.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimezoneLabel(String);

impl TimezoneLabel {
    /// # Errors
    /// Returns `DomainError::Validation` naming `raw` when it is empty or not in the catalog.
    pub fn parse(catalog: &TimezoneCatalog, raw: &str) -> Result<Self, DomainError> {
        if raw.is_empty() {
            return Err(DomainError::validation(
                SettingsFields::TIMEZONE,
                raw,
                "must not be empty",
            ));
        }
        if !is_valid_timezone(catalog, raw) {
            return Err(DomainError::validation(
                SettingsFields::TIMEZONE,
                raw,
                format!("Invalid Timezone: {raw}"),
            ));
        }
        Ok(Self(raw.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimezoneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
