use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tokio::sync::broadcast;
use tracing::info;
use user_settings_sdk::UserSettingsClientV1;

use crate::api::rest::auth::AuthState;
use crate::api::rest::routes;
use crate::config::UserSettingsConfig;
use crate::domain::catalog::Catalogs;
use crate::domain::events::SettingsEvent;
use crate::domain::service::Service;
use crate::infra::events::BroadcastEventPublisher;
use crate::infra::identity::{IdentityProvider, provider_from_config};
use crate::infra::storage::SeaOrmSettingsRepository;
use crate::infra::storage::migrations::Migrator;
use crate::local_client::LocalClient;

/// The wired user-settings module: service, event channel and identity provider.
#[derive(Clone)]
pub struct UserSettingsModule {
    service: Arc<Service>,
    events: BroadcastEventPublisher,
    identity: Arc<dyn IdentityProvider>,
    sign_in_url: String,
}

impl UserSettingsModule {
    /// Run migrations and wire the module against `db`.
    ///
    /// # Errors
    /// Fails if migrations fail or a configured default is not in its catalog.
    pub async fn init(db: DatabaseConnection, config: &UserSettingsConfig) -> anyhow::Result<Self> {
        Self::init_with_identity(db, config, provider_from_config(&config.identity)).await
    }

    /// Like [`UserSettingsModule::init`] with an explicit identity provider.
    ///
    /// # Errors
    /// Fails if migrations fail or a configured default is not in its catalog.
    pub async fn init_with_identity(
        db: DatabaseConnection,
        config: &UserSettingsConfig,
        identity: Arc<dyn IdentityProvider>,
    ) -> anyhow::Result<Self> {
        info!("Initializing user-settings module");

        let catalogs = Arc::new(Catalogs::builtin());
        let service_config = config.service_config(&catalogs)?;

        info!("Running user-settings database migrations");
        Migrator::up(&db, None).await?;

        let events = BroadcastEventPublisher::new(config.event_buffer);
        let repo = Arc::new(SeaOrmSettingsRepository::new(db));
        let service = Arc::new(Service::new(
            repo,
            Arc::new(events.clone()),
            catalogs,
            service_config,
        ));

        info!(
            default_currency = %config.default_currency,
            default_timezone = %config.default_timezone,
            "User-settings module initialized"
        );

        Ok(Self {
            service,
            events,
            identity,
            sign_in_url: config.sign_in_url.clone(),
        })
    }

    /// REST routes under `/user-settings/v1`.
    pub fn router(&self) -> Router {
        routes::register_routes(
            self.service.clone(),
            self.events.clone(),
            AuthState::new(self.identity.clone(), &self.sign_in_url),
        )
    }

    #[must_use]
    pub fn client(&self) -> Arc<dyn UserSettingsClientV1> {
        Arc::new(LocalClient::new(self.service.clone()))
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SettingsEvent> {
        self.events.subscribe()
    }
}
