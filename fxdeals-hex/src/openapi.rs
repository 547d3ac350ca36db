//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use fxdeals_types::domain::{CurrencyCode, Deal};
use fxdeals_types::dto::{BatchRequest, BatchResult, DealError, DealRequest, DealResponse};
use utoipa::OpenApi;

// Stand-ins carrying path documentation; the real handlers live in `inbound`.

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Import a single deal
#[utoipa::path(
    post,
    path = "/api/deals",
    tag = "deals",
    request_body = DealRequest,
    responses(
        (status = 201, description = "Deal imported", body = DealResponse),
        (status = 400, description = "Validation failed or invalid deal"),
        (status = 409, description = "Deal already exists"),
        (status = 500, description = "Unexpected error")
    )
)]
async fn import_deal() {}

/// Import a batch of deals
///
/// Each row is imported independently; one failing row never blocks another.
#[utoipa::path(
    post,
    path = "/api/deals/batch",
    tag = "deals",
    request_body = BatchRequest,
    responses(
        (status = 201, description = "Every deal imported", body = BatchResult),
        (status = 207, description = "Some deals imported, some failed", body = BatchResult),
        (status = 400, description = "No deal imported, or the deals list is empty or too large", body = BatchResult)
    )
)]
async fn import_batch() {}

/// List every stored deal, oldest first
#[utoipa::path(
    get,
    path = "/api/deals",
    tag = "deals",
    responses(
        (status = 200, description = "All deals", body = Vec<Deal>)
    )
)]
async fn list_deals() {}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FX Deals Warehouse API",
        version = "0.1.0",
        description = "Import and list foreign-exchange deals"
    ),
    paths(health, import_deal, import_batch, list_deals),
    components(
        schemas(
            DealRequest,
            BatchRequest,
            DealResponse,
            DealError,
            BatchResult,
            Deal,
            CurrencyCode,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "deals", description = "Deal import and listing"),
    )
)]
pub struct ApiDoc;
