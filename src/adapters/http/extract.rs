//! Request extractors that reject with `AppError` instead of axum's plain-text bodies.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Request, rejection::JsonRejection},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::app_error::AppError;

/// Pro Key taken from the `Authorization` header.
///
/// `Bearer <key>` yields `<key>` (scheme matched case-insensitively); a value
/// without the scheme is used as-is.
/// An absent or blank header rejects with `MissingProKey`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerProKey(pub String);

impl<S> FromRequestParts<S> for BearerProKey
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .unwrap_or_default();

        let key = match raw.split_once(' ') {
            Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim(),
            None if raw.eq_ignore_ascii_case("bearer") => "",
            _ => raw,
        };
        if key.is_empty() {
            return Err(AppError::MissingProKey);
        }

        Ok(BearerProKey(key.to_string()))
    }
}

/// `Json<T>` whose rejections are reported as `InvalidInput` (400).
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(rejection.into()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}
