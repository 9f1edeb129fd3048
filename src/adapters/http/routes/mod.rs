pub mod paystack;
pub mod receipts;
pub mod validate_key;

use axum::Router;

use crate::{adapters::http::app_state::AppState, app_error::AppError};

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(validate_key::router())
        .merge(receipts::router())
        .merge(paystack::router())
}

/// Method-router fallback for known paths hit with an unsupported method.
pub(crate) async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
