//! Shipping Fee Core
//!
//! Validated, tiered shipping fee computation.
//!
//! # Architecture
//!
//! - **models**: Domain types (Zone, WeightTier, FeeBreakdown, QuoteOutcome)
//! - **fees**: Rate card, calculator and fee schedule documentation
//!
//! # Critical Invariants
//!
//! 1. Pricing is pure: identical inputs always produce identical fees
//! 2. Validation runs before pricing; a failed check never yields a partial fee
//! 3. Zone names are matched exactly (case-sensitive, no trimming)

// Module declarations
pub mod fees;
pub mod models;

// Re-exports for convenience
pub use fees::{
    calculate_shipping_fee, fee_schedule, FeeCalculator, FeeError, FeeRates, FeeScheduleDoc,
    RateCardError,
};
pub use models::{FeeBreakdown, QuoteError, QuoteOutcome, WeightTier, Zone};
