pub struct SettingsFields;

impl SettingsFields {
    pub const CURRENCY: &'static str = "currency";
    pub const TIMEZONE: &'static str = "timezone";
}
