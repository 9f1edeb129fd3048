use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};

use super::method_not_allowed;
use crate::{
    adapters::http::{app_state::AppState, extract::JsonBody},
    app_error::AppResult,
};

#[derive(Deserialize)]
struct ValidateKeyPayload {
    key: Option<String>,
}

#[derive(Serialize)]
struct ValidateKeyResponse {
    valid: bool,
    message: &'static str,
}

/// POST /api/validate-key
async fn validate_key(
    State(app_state): State<AppState>,
    JsonBody(payload): JsonBody<ValidateKeyPayload>,
) -> AppResult<Json<ValidateKeyResponse>> {
    let verdict = app_state
        .pro_key_use_cases
        .validate_key(payload.key.as_deref())
        .await?;

    Ok(Json(ValidateKeyResponse {
        valid: verdict.valid,
        message: verdict.message,
    }))
}

pub(crate) fn router() -> Router<AppState> {
    Router::new().route(
        "/validate-key",
        post(validate_key).fallback(method_not_allowed),
    )
}
