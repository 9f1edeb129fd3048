use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::method_not_allowed;
use crate::{
    adapters::http::{
        app_state::AppState,
        extract::{BearerProKey, JsonBody},
    },
    app_error::AppResult,
    entities::receipt::Receipt,
    use_cases::receipt::ReceiptInput,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateReceiptPayload {
    token: Option<String>,
    customer_name: Option<String>,
    date: Option<String>,
    #[serde(default)]
    items: serde_json::Value,
    total: Option<f64>,
}

impl From<CreateReceiptPayload> for ReceiptInput {
    fn from(payload: CreateReceiptPayload) -> Self {
        ReceiptInput {
            token: payload.token,
            customer_name: payload.customer_name,
            date: payload.date,
            items: payload.items,
            total: payload.total,
        }
    }
}

#[derive(Serialize)]
struct MessageResponse {
    message: &'static str,
}

#[derive(Serialize)]
struct ReceiptResponse {
    token: String,
    customer_name: Option<String>,
    date: Option<String>,
    items: serde_json::Value,
    total: Option<f64>,
    timestamp: DateTime<Utc>,
}

impl From<Receipt> for ReceiptResponse {
    fn from(receipt: Receipt) -> Self {
        ReceiptResponse {
            token: receipt.token,
            customer_name: receipt.customer_name,
            date: receipt.date,
            items: receipt.items,
            total: receipt.total,
            timestamp: receipt.timestamp,
        }
    }
}

#[derive(Deserialize)]
struct LookupQuery {
    token: Option<String>,
}

/// POST /api/receipts
/// The bearer extractor runs first, so a missing key is reported before the body is read.
async fn create_receipt(
    State(app_state): State<AppState>,
    BearerProKey(key): BearerProKey,
    JsonBody(payload): JsonBody<CreateReceiptPayload>,
) -> AppResult<Json<MessageResponse>> {
    app_state
        .receipt_use_cases
        .save_receipt(&key, payload.into())
        .await?;

    Ok(Json(MessageResponse {
        message: "Receipt saved successfully",
    }))
}

/// GET /api/receipts
async fn list_receipts(
    State(app_state): State<AppState>,
    BearerProKey(key): BearerProKey,
) -> AppResult<Json<Vec<ReceiptResponse>>> {
    let receipts = app_state.receipt_use_cases.list_receipts(&key).await?;

    Ok(Json(receipts.into_iter().map(Into::into).collect()))
}

/// GET /api/receipt?token=XXXXXXXX
async fn get_receipt_by_query(
    State(app_state): State<AppState>,
    Query(query): Query<LookupQuery>,
) -> AppResult<Json<ReceiptResponse>> {
    let receipt = app_state
        .receipt_use_cases
        .get_by_token(query.token.as_deref())
        .await?;

    Ok(Json(receipt.into()))
}

/// GET /api/receipt/{token}
async fn get_receipt_by_path(
    State(app_state): State<AppState>,
    Path(token): Path<String>,
) -> AppResult<Json<ReceiptResponse>> {
    let receipt = app_state
        .receipt_use_cases
        .get_by_token(Some(&token))
        .await?;

    Ok(Json(receipt.into()))
}

pub(crate) fn router() -> Router<AppState> {
    // `get` would also answer HEAD; these paths only serve GET and POST.
    Router::new()
        .route(
            "/receipts",
            get(list_receipts)
                .post(create_receipt)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route(
            "/receipt",
            get(get_receipt_by_query)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route(
            "/receipt/{token}",
            get(get_receipt_by_path)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
}
