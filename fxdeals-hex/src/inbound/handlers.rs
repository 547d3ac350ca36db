//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use utoipa::OpenApi;

use fxdeals_types::{AppError, BatchRequest, BatchStatus, DealRepository, DealSubmission};

use crate::DealService;
use crate::openapi::ApiDoc;

/// Application state shared across handlers.
pub struct AppState<R: DealRepository> {
    pub service: DealService<R>,
    /// Upper bound on `deals` in one batch request.
    pub max_batch_size: usize,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(AppError::BadRequest(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let timestamp = chrono::Utc::now();

        let (status, title, message) = match self.0 {
            AppError::Validation(errors) => {
                let body = serde_json::json!({
                    "timestamp": timestamp,
                    "status": StatusCode::BAD_REQUEST.as_u16(),
                    "error": "Validation failed",
                    "errors": errors,
                });
                return (StatusCode::BAD_REQUEST, Json(body)).into_response();
            }
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "Duplicate Deal", msg),
            AppError::InvalidDeal(msg) => (StatusCode::BAD_REQUEST, "Invalid Deal", msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "Bad Request", msg),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = serde_json::json!({
            "timestamp": timestamp,
            "status": status.as_u16(),
            "error": title,
            "message": message,
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Import a single deal.
///
/// The body is read as raw JSON so a badly typed field is reported per
/// field, the same way a missing one is.
#[tracing::instrument(skip(state, payload))]
pub async fn import_deal<R: DealRepository>(
    State(state): State<Arc<AppState<R>>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = payload?;
    let submission = DealSubmission::try_from(body).map_err(AppError::from)?;

    let response = state
        .service
        .import_one(submission)
        .await
        .map_err(AppError::from)?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Import a batch of deals, each row independently.
#[tracing::instrument(skip(state, payload))]
pub async fn import_batch<R: DealRepository>(
    State(state): State<Arc<AppState<R>>>,
    payload: Result<Json<BatchRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(batch) = payload?;
    let rows = batch
        .into_rows(state.max_batch_size)
        .map_err(AppError::from)?;

    let result = state.service.import_batch(rows).await;
    let status = match result.status() {
        BatchStatus::FullyAccepted => StatusCode::CREATED,
        BatchStatus::PartialSuccess => StatusCode::MULTI_STATUS,
        BatchStatus::Rejected => StatusCode::BAD_REQUEST,
    };
    Ok((status, Json(result)))
}

/// List every stored deal.
#[tracing::instrument(skip(state))]
pub async fn list_deals<R: DealRepository>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<impl IntoResponse, ApiError> {
    let deals = state.service.list_all().await?;
    Ok(Json(deals))
}

/// Serve the generated OpenAPI document.
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
