// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AdminPrincipal, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{
    Extension, Json,
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use serde::de::DeserializeOwned;

use super::error::HttpError;

/// Request carrying a valid admin bearer token.
#[derive(Debug, Clone)]
pub struct AdminAuthenticated(pub AdminPrincipal);

impl<S> FromRequestParts<S> for AdminAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::Infrastructure(
                    "application state missing".into(),
                ))
            })?;

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::Unauthorized(
                    "missing Authorization header".into(),
                ))
            })?;

        let principal = app_state
            .services
            .authenticate_admin(header.token())
            .map_err(|err| {
                tracing::warn!(path = %parts.uri.path(), "admin authentication failed");
                HttpError::from_error(err)
            })?;

        Ok(Self(principal))
    }
}

/// `Json` whose rejections render as validation errors in the API error shape.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| Self(value))
            .map_err(|rejection| HttpError::validation(rejection.body_text()))
    }
}
