use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};

use super::method_not_allowed;
use crate::{
    adapters::http::{app_state::AppState, extract::JsonBody},
    app_error::AppResult,
};

/// Transaction notification as posted by Paystack's callback.
#[derive(Deserialize)]
struct PaystackCallbackPayload {
    reference: Option<String>,
    status: Option<String>,
}

#[derive(Serialize)]
struct CallbackAck {
    message: &'static str,
}

/// POST /api/paystack-callback
async fn paystack_callback(
    State(app_state): State<AppState>,
    JsonBody(payload): JsonBody<PaystackCallbackPayload>,
) -> AppResult<Json<CallbackAck>> {
    app_state
        .payment_webhook_use_cases
        .handle_notification(payload.reference.as_deref(), payload.status.as_deref())
        .await?;

    Ok(Json(CallbackAck { message: "OK" }))
}

pub(crate) fn router() -> Router<AppState> {
    Router::new().route(
        "/paystack-callback",
        post(paystack_callback).fallback(method_not_allowed),
    )
}
