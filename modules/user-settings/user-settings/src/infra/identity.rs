//! Resolving the caller of a REST request to a `SecurityContext`.
//!
//! Providers only read request headers. A request that carries no usable
//! credential yields `None`; the REST layer decides what to do about it.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use http::HeaderMap;
use http::header::AUTHORIZATION;
use user_settings_sdk::{SecurityContext, UserId};

use crate::config::IdentityConfig;

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn authenticate(&self, headers: &HeaderMap) -> Option<SecurityContext>;
}

/// Bearer tokens mapped to user ids from configuration.
pub struct StaticTokenIdentityProvider {
    tokens: HashMap<String, UserId>,
}

impl StaticTokenIdentityProvider {
    /// Entries whose user id is blank are skipped.
    #[must_use]
    pub fn new<I, K, V>(tokens: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let tokens = tokens
            .into_iter()
            .filter_map(|(token, user)| UserId::parse(user.as_ref()).map(|id| (token.into(), id)))
            .collect();
        Self { tokens }
    }
}

#[async_trait]
impl IdentityProvider for StaticTokenIdentityProvider {
    async fn authenticate(&self, headers: &HeaderMap) -> Option<SecurityContext> {
        let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
        let token = value.strip_prefix("Bearer ")?.trim();
        self.tokens
            .get(token)
            .cloned()
            .map(SecurityContext::for_subject)
    }
}

/// Trusts a header populated by an authenticating proxy in front of the service.
pub struct TrustedHeaderIdentityProvider {
    header: String,
}

impl TrustedHeaderIdentityProvider {
    #[must_use]
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
        }
    }
}

#[async_trait]
impl IdentityProvider for TrustedHeaderIdentityProvider {
    async fn authenticate(&self, headers: &HeaderMap) -> Option<SecurityContext> {
        let raw = headers.get(self.header.as_str())?.to_str().ok()?;
        UserId::parse(raw).map(SecurityContext::for_subject)
    }
}

#[must_use]
pub fn provider_from_config(config: &IdentityConfig) -> Arc<dyn IdentityProvider> {
    match config {
        IdentityConfig::StaticTokens { tokens } => Arc::new(StaticTokenIdentityProvider::new(
            tokens.iter().map(|(token, user)| (token.clone(), user.clone())),
        )),
        IdentityConfig::TrustedHeader { header } => {
            Arc::new(TrustedHeaderIdentityProvider::new(header.clone()))
        }
    }
}
