// 🌐 HTTP API - Axum routes over the receipt store
//
//   POST /receipts/process      → 201 {"id": "..."}
//   GET  /receipts/:id/points   → 200 {"points": n} | 404 {"id": "id not found"}

use crate::receipt::Receipt;
use crate::scoring::Points;
use crate::store::ReceiptStore;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ReceiptStore>,
}

impl AppState {
    pub fn new(store: Arc<ReceiptStore>) -> Self {
        AppState { store }
    }
}

// ============================================================================
// Responses & errors
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: Points,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid receipt: {0}")]
    InvalidReceipt(String),

    #[error("no receipt with id {0}")]
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidReceipt(reason) => {
                tracing::warn!(%reason, "rejected receipt");
                (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({ "error": reason })),
                )
                    .into_response()
            }
            ApiError::NotFound(id) => {
                tracing::debug!(%id, "points lookup for unknown id");
                (
                    StatusCode::NOT_FOUND,
                    Json(serde_json::json!({ "id": "id not found" })),
                )
                    .into_response()
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidReceipt(rejection.body_text())
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /receipts/process - Score and store a receipt
async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<(StatusCode, Json<ProcessResponse>), ApiError> {
    let Json(receipt) = payload?;
    let id = state.store.record(&receipt);
    Ok((StatusCode::CREATED, Json(ProcessResponse { id })))
}

/// GET /receipts/:id/points - Points for a stored receipt
async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    state
        .store
        .lookup(&id)
        .map(|points| Json(PointsResponse { points }))
        .ok_or(ApiError::NotFound(id))
}

// ============================================================================
// Router
// ============================================================================

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(get_points))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ============================================================================
// TESTS
// ============================================================================
