//! Caller identification for the settings routes.
//!
//! `require_identity` runs before every settings handler. A request with no
//! recognizable identity is sent to the sign-in page and never reaches the
//! domain.

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use user_settings_sdk::SecurityContext;

use crate::infra::identity::IdentityProvider;

#[derive(Clone)]
pub struct AuthState {
    provider: Arc<dyn IdentityProvider>,
    sign_in_url: Arc<str>,
}

impl AuthState {
    #[must_use]
    pub fn new(provider: Arc<dyn IdentityProvider>, sign_in_url: &str) -> Self {
        Self {
            provider,
            sign_in_url: Arc::from(sign_in_url),
        }
    }
}

/// Resolve the caller and store its `SecurityContext` in request extensions,
/// or answer `303 See Other` pointing at the sign-in URL.
pub async fn require_identity(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Response {
    let Some(ctx) = state.provider.authenticate(req.headers()).await else {
        tracing::debug!(
            path = %req.uri().path(),
            "No identity on request, redirecting to sign-in"
        );
        return Redirect::to(&state.sign_in_url).into_response();
    };
    req.extensions_mut().insert(ctx);
    next.run(req).await
}

/// Extractor for the caller's `SecurityContext`.
///
/// Falls back to an anonymous context when the middleware did not run, which
/// the service rejects as unauthenticated.
#[derive(Debug, Clone)]
pub struct Authz(pub SecurityContext);

impl<S> FromRequestParts<S> for Authz
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(
            parts
                .extensions
                .get::<SecurityContext>()
                .cloned()
                .unwrap_or_default(),
        ))
    }
}
