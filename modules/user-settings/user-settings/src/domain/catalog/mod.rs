//! Reference catalogs for the currency and timezone fields.
//!
//! Catalogs are immutable once built. The module builds them once at start-up
//! and shares them behind an `Arc`; tests build small ones by hand.

mod builtin;

/// One supported currency. Only `value` is stored and validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyEntry {
    /// ISO 4217 code, e.g. `USD`
    pub value: String,
    /// Display label, e.g. `$ Dollar`
    pub label: String,
    /// BCP 47 locale used to format amounts
    pub locale: String,
}

impl CurrencyEntry {
    #[must_use]
    pub fn new(
        value: impl Into<String>,
        label: impl Into<String>,
        locale: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            locale: locale.into(),
        }
    }
}

/// One supported timezone. `label` is the stored and validated key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimezoneEntry {
    /// e.g. `Asia/Kolkata (GMT+05:30)`
    pub label: String,
    /// IANA identifier, e.g. `Asia/Kolkata`
    pub tz_code: String,
    /// e.g. `(GMT+05:30) Mumbai, Delhi, Bengaluru, Kolkata`
    pub name: String,
    /// UTC offset, e.g. `+05:30`
    pub utc: String,
}

impl TimezoneEntry {
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        tz_code: impl Into<String>,
        name: impl Into<String>,
        utc: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            tz_code: tz_code.into(),
            name: name.into(),
            utc: utc.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CurrencyCatalog {
    entries: Vec<CurrencyEntry>,
}

impl CurrencyCatalog {
    #[must_use]
    pub fn new(entries: Vec<CurrencyEntry>) -> Self {
        Self { entries }
    }

    /// Exact, case-sensitive match on the currency code.
    #[must_use]
    pub fn find(&self, value: &str) -> Option<&CurrencyEntry> {
        self.entries.iter().find(|entry| entry.value == value)
    }

    #[must_use]
    pub fn entries(&self) -> &[CurrencyEntry] {
        &self.entries
    }
}

#[derive(Debug, Clone, Default)]
pub struct TimezoneCatalog {
    entries: Vec<TimezoneEntry>,
}

impl TimezoneCatalog {
    #[must_use]
    pub fn new(entries: Vec<TimezoneEntry>) -> Self {
        Self { entries }
    }

    /// Exact, case-sensitive match on the timezone label.
    #[must_use]
    pub fn find(&self, label: &str) -> Option<&TimezoneEntry> {
        self.entries.iter().find(|entry| entry.label == label)
    }

    #[must_use]
    pub fn entries(&self) -> &[TimezoneEntry] {
        &self.entries
    }
}

/// Both reference tables, injected into the service as one dependency.
#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    pub currencies: CurrencyCatalog,
    pub timezones: TimezoneCatalog,
}

impl Catalogs {
    #[must_use]
    pub fn new(currencies: CurrencyCatalog, timezones: TimezoneCatalog) -> Self {
        Self {
            currencies,
            timezones,
        }
    }

    #[must_use]
    pub fn builtin() -> Self {
        Self::new(
            CurrencyCatalog::new(builtin::currencies()),
            TimezoneCatalog::new(builtin::timezones()),
        )
    }
}
