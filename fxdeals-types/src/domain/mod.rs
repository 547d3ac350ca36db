//! Domain models for the FX deals warehouse.

pub mod deal;

pub use deal::{CurrencySide, Deal, DealId, DealSubmission, NewDeal};
pub use iso_currencies::CurrencyCode;
