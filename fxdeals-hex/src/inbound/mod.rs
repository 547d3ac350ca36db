//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the import service.

mod handlers;
mod server;

pub use handlers::{ApiError, AppState};
pub use server::{DEFAULT_MAX_BATCH_SIZE, HttpServer};
