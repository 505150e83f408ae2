use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::OriginalUri;
use axum::http::{HeaderValue, header};
use axum::response::IntoResponse;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::{Extension, Json};
use futures::Stream;
use serde::Serialize;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tracing::{debug, info};
use utoipa::openapi::OpenApi;

use crate::domain::error::DomainError;
use crate::domain::service::Service;
use crate::infra::events::BroadcastEventPublisher;

use super::auth::Authz;
use super::dto::{
    CurrencyDto, SettingsEventDto, TimezoneDto, UpdateCurrencyRequest, UpdateTimezoneRequest,
    UserSettingsDto,
};
use super::error::{domain_error_to_problem, json_rejection_to_problem};
use super::problem::Problem;

pub type ApiResult<T> = Result<T, Problem>;

/// Settings are per-user; shared caches must not keep them.
fn no_store<T: Serialize>(body: T) -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))],
        Json(body),
    )
}

pub async fn get_settings(
    Authz(ctx): Authz,
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
) -> ApiResult<impl IntoResponse> {
    let settings = svc
        .get_or_create_settings(&ctx)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(no_store(UserSettingsDto::from(settings)))
}

pub async fn update_currency(
    Authz(ctx): Authz,
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
    body: Result<Json<UpdateCurrencyRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(req) = body.map_err(|e| json_rejection_to_problem(&e, uri.path()))?;
    let settings = svc
        .update_currency(&ctx, &req.currency)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    debug!(user_id = %settings.user_id, currency = %settings.currency, "Currency updated");
    Ok(no_store(UserSettingsDto::from(settings)))
}

pub async fn update_timezone(
    Authz(ctx): Authz,
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
    body: Result<Json<UpdateTimezoneRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(req) = body.map_err(|e| json_rejection_to_problem(&e, uri.path()))?;
    let settings = svc
        .update_timezone(&ctx, &req.timezone)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    debug!(user_id = %settings.user_id, timezone = %settings.timezone, "Timezone updated");
    Ok(no_store(UserSettingsDto::from(settings)))
}

/// Stream of the caller's own settings events.
pub async fn settings_events(
    Authz(ctx): Authz,
    Extension(events): Extension<BroadcastEventPublisher>,
    OriginalUri(uri): OriginalUri,
) -> ApiResult<Sse<impl Stream<Item = Result<Event, axum::Error>>>> {
    let Some(user_id) = ctx.subject_id().cloned() else {
        return Err(domain_error_to_problem(
            &DomainError::Unauthenticated,
            uri.path(),
        ));
    };
    info!(user_id = %user_id, "New SSE connection for settings events");

    let stream = BroadcastStream::new(events.subscribe()).filter_map(move |item| match item {
        Ok(event) if event.user_id() == &user_id => Some(
            Event::default()
                .event(event.kind())
                .json_data(SettingsEventDto::from(&event)),
        ),
        Ok(_) => None,
        Err(BroadcastStreamRecvError::Lagged(skipped)) => {
            debug!(skipped, "Settings event subscriber lagged");
            None
        }
    });

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}

pub async fn list_currencies(Extension(svc): Extension<Arc<Service>>) -> Json<Vec<CurrencyDto>> {
    Json(
        svc.catalogs()
            .currencies
            .entries()
            .iter()
            .map(CurrencyDto::from)
            .collect(),
    )
}

pub async fn list_timezones(Extension(svc): Extension<Arc<Service>>) -> Json<Vec<TimezoneDto>> {
    Json(
        svc.catalogs()
            .timezones
            .entries()
            .iter()
            .map(TimezoneDto::from)
            .collect(),
    )
}

pub async fn openapi_json(Extension(doc): Extension<Arc<OpenApi>>) -> Json<OpenApi> {
    Json(doc.as_ref().clone())
}
