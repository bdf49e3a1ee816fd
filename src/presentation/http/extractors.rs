// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// The auth gate. Decodes the bearer token, if any, before a resolver runs.
/// Verification failure is swallowed: the request simply proceeds as
/// anonymous, and each resolver decides whether that is acceptable.
#[derive(Debug, Clone)]
pub struct AuthContext(pub Option<AuthenticatedUser>);

impl AuthContext {
    pub fn actor(&self) -> Option<&AuthenticatedUser> {
        self.0.as_ref()
    }
}

impl FromRequestParts<()> for AuthContext {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &()) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::Infrastructure(
                    "application state missing".into(),
                ))
            })?;

        let Some(header) = parts.headers.typed_get::<Authorization<Bearer>>() else {
            return Ok(Self(None));
        };

        let manager = app_state.services.token_manager();
        match manager.authenticate(header.token()).await {
            Ok(user) => Ok(Self(Some(user))),
            Err(err) => {
                tracing::debug!(error = %err, "bearer token rejected, continuing as anonymous");
                Ok(Self(None))
            }
        }
    }
}
