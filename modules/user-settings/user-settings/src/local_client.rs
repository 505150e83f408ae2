use std::sync::Arc;

use async_trait::async_trait;
use user_settings_sdk::{SecurityContext, SettingsError, UserSettings, UserSettingsClientV1};

use crate::domain::service::Service;

/// In-process implementation of the SDK client, backed directly by the service.
pub struct LocalClient {
    service: Arc<Service>,
}

impl LocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UserSettingsClientV1 for LocalClient {
    async fn get_settings(&self, ctx: &SecurityContext) -> Result<UserSettings, SettingsError> {
        self.service
            .get_or_create_settings(ctx)
            .await
            .map_err(Into::into)
    }

    async fn update_currency(
        &self,
        ctx: &SecurityContext,
        currency: &str,
    ) -> Result<UserSettings, SettingsError> {
        self.service
            .update_currency(ctx, currency)
            .await
            .map_err(Into::into)
    }

    async fn update_timezone(
        &self,
        ctx: &SecurityContext,
        timezone: &str,
    ) -> Result<UserSettings, SettingsError> {
        self.service
            .update_timezone(ctx, timezone)
            .await
            .map_err(Into::into)
    }
}
