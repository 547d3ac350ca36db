//! # FX Deals Hex
//!
//! Import orchestration and HTTP adapter for the FX deals warehouse.
//!
//! ## Architecture
//!
//! - `validator` - Business checks run before persistence
//! - `service` - Import orchestration (single and batch)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi` - Generated API document
//!
//! The service is generic over `R: DealRepository`, allowing
//! different repository implementations to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;
pub mod validator;

#[cfg(test)]
mod service_tests;

pub use service::DealService;
pub use validator::DealValidator;
