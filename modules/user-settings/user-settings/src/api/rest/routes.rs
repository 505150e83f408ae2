use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Extension, Router, middleware};

use crate::api::rest::{auth, dto, handlers};
use crate::domain::service::Service;
use crate::infra::events::BroadcastEventPublisher;

use super::auth::AuthState;
use super::openapi::{OpenApiRegistry, OperationDoc};

pub const BASE_PATH: &str = "/user-settings/v1";

const TAG: &str = "User Settings";

/// Build the module router. Settings routes sit behind `require_identity`;
/// the catalog and the `OpenAPI` document are public.
#[allow(clippy::needless_pass_by_value)] // Arc is intentionally passed by value for Extension layer
pub fn register_routes(
    service: Arc<Service>,
    events: BroadcastEventPublisher,
    auth_state: AuthState,
) -> Router {
    let mut openapi = OpenApiRegistry::default();
    document_routes(&mut openapi);
    let doc = Arc::new(openapi.build("User Settings API", env!("CARGO_PKG_VERSION")));

    let protected = Router::new()
        .route("/settings", get(handlers::get_settings))
        .route("/settings/currency", put(handlers::update_currency))
        .route("/settings/timezone", put(handlers::update_timezone))
        .route("/settings/events", get(handlers::settings_events))
        .route_layer(middleware::from_fn_with_state(
            auth_state,
            auth::require_identity,
        ));

    let public = Router::new()
        .route("/catalog/currencies", get(handlers::list_currencies))
        .route("/catalog/timezones", get(handlers::list_timezones))
        .route("/openapi.json", get(handlers::openapi_json));

    Router::new()
        .nest(BASE_PATH, protected.merge(public))
        .layer(Extension(service))
        .layer(Extension(events))
        .layer(Extension(doc))
}

fn document_routes(openapi: &mut OpenApiRegistry) {
    OperationDoc::get(format!("{BASE_PATH}/settings"))
        .operation_id("user-settings.get_settings")
        .summary("Get the caller's settings, provisioning defaults on first access")
        .tag(TAG)
        .json_response::<dto::UserSettingsDto>(openapi, StatusCode::OK, "Settings retrieved")
        .sign_in_redirect()
        .problem_response(openapi, StatusCode::SERVICE_UNAVAILABLE, "Store unavailable")
        .register(openapi);

    OperationDoc::put(format!("{BASE_PATH}/settings/currency"))
        .operation_id("user-settings.update_currency")
        .summary("Change the preferred currency")
        .tag(TAG)
        .json_request::<dto::UpdateCurrencyRequest>(openapi, "Currency code from the catalog")
        .json_response::<dto::UserSettingsDto>(openapi, StatusCode::OK, "Currency updated")
        .sign_in_redirect()
        .problem_response(openapi, StatusCode::NOT_FOUND, "Settings not provisioned")
        .problem_response(openapi, StatusCode::UNPROCESSABLE_ENTITY, "Unknown currency")
        .problem_response(openapi, StatusCode::SERVICE_UNAVAILABLE, "Store unavailable")
        .register(openapi);

    OperationDoc::put(format!("{BASE_PATH}/settings/timezone"))
        .operation_id("user-settings.update_timezone")
        .summary("Change the preferred timezone")
        .tag(TAG)
        .json_request::<dto::UpdateTimezoneRequest>(openapi, "Timezone label from the catalog")
        .json_response::<dto::UserSettingsDto>(openapi, StatusCode::OK, "Timezone updated")
        .sign_in_redirect()
        .problem_response(openapi, StatusCode::NOT_FOUND, "Settings not provisioned")
        .problem_response(openapi, StatusCode::UNPROCESSABLE_ENTITY, "Unknown timezone")
        .problem_response(openapi, StatusCode::SERVICE_UNAVAILABLE, "Store unavailable")
        .register(openapi);

    OperationDoc::get(format!("{BASE_PATH}/settings/events"))
        .operation_id("user-settings.settings_events")
        .summary("Settings events stream (SSE)")
        .tag(TAG)
        .sse_json::<dto::SettingsEventDto>(openapi, "SSE stream of SettingsEvent")
        .sign_in_redirect()
        .register(openapi);

    OperationDoc::get(format!("{BASE_PATH}/catalog/currencies"))
        .operation_id("user-settings.list_currencies")
        .summary("List supported currencies")
        .tag(TAG)
        .json_array_response::<dto::CurrencyDto>(openapi, StatusCode::OK, "Currency catalog")
        .register(openapi);

    OperationDoc::get(format!("{BASE_PATH}/catalog/timezones"))
        .operation_id("user-settings.list_timezones")
        .summary("List supported timezones")
        .tag(TAG)
        .json_array_response::<dto::TimezoneDto>(openapi, StatusCode::OK, "Timezone catalog")
        .register(openapi);
}
