//! Fee computation
//!
//! This module provides:
//! - Rate card configuration (`FeeRates`)
//! - The pricing function and calculator (`calculator`)
//! - Self-documenting fee schedule (`schema_docs`)
//!
//! # Single Source of Truth
//!
//! Every pricing constant lives in `FeeRates`. The calculator and the
//! schedule both read from it, so they can never disagree.

pub mod calculator;
pub mod rates;
pub mod schema_docs;

#[cfg(test)]
mod golden_vectors;

// Re-exports
pub use calculator::{calculate_shipping_fee, FeeCalculator, FeeError};
pub use rates::{FeeRates, RateCardError};
pub use schema_docs::{fee_schedule, FeeScheduleDoc, FeeScheduleEntry, RateCategory, RateElement};
