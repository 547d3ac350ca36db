//! # FX Deals Types
//!
//! Domain types and port traits for the FX deals warehouse.
//! This crate has ZERO external IO dependencies - only data structures,
//! precondition checks, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Deal, DealId, DealSubmission)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `validation/` - Structural preconditions applied at the boundary
//! - `timestamp/` - Deal timestamp parsing (with or without an offset)
//! - `error/` - Domain, repository and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;
pub mod timestamp;
pub mod validation;

// Re-export commonly used types
pub use domain::{CurrencyCode, CurrencySide, Deal, DealId, DealSubmission, NewDeal};
pub use dto::*;
pub use error::{AppError, DomainError, ImportError, RepoError};
pub use ports::DealRepository;
pub use timestamp::parse_deal_timestamp;
pub use validation::FieldErrors;
