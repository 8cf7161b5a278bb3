//! Domain models for shipping fee calculation

pub mod quote;
pub mod tier;
pub mod zone;

// Re-exports
pub use quote::{FeeBreakdown, QuoteError, QuoteOutcome};
pub use tier::{get_weight_tier, WeightTier};
pub use zone::Zone;
