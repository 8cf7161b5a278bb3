//! Shipping fee calculator
//!
//! Pure, deterministic pricing of a single package.
//!
//! # Algorithm
//!
//! 1. Reject weights outside (0, max_weight] with [`FeeError::InvalidWeight`]
//! 2. Reject unknown zones with [`FeeError::InvalidZone`]
//! 3. `tiered = zone_fee + (weight > heavy_threshold ? heavy_surcharge : 0)`
//! 4. `fee = tiered × (insured ? insurance_multiplier : 1.0)`
//!
//! Validation happens before any pricing and the first failing check wins,
//! so `(0.0, "Local", _)` reports `InvalidWeight`.
//!
//! # Example
//!
//! ```
//! use shipping_fee_core::{calculate_shipping_fee, FeeError};
//!
//! assert_eq!(calculate_shipping_fee(20.0, "Domestic", false), Ok(12.5));
//! assert!(matches!(
//!     calculate_shipping_fee(5.0, "Local", false),
//!     Err(FeeError::InvalidZone { .. })
//! ));
//! ```

use crate::fees::rates::{FeeRates, RateCardError};
use crate::models::quote::FeeBreakdown;
use crate::models::tier::{get_weight_tier, WeightTier};
use crate::models::zone::Zone;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when pricing a package
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FeeError {
    #[error("Invalid weight {weight}: must be greater than 0 and at most {max_weight}")]
    InvalidWeight { weight: f64, max_weight: f64 },

    #[error("Invalid zone '{zone}': expected one of Domestic, International, Express")]
    InvalidZone { zone: String },
}

impl FeeError {
    /// Stable, machine-readable error kind
    pub fn kind(&self) -> &'static str {
        match self {
            FeeError::InvalidWeight { .. } => "InvalidWeight",
            FeeError::InvalidZone { .. } => "InvalidZone",
        }
    }
}

/// Prices packages against a validated rate card
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeeCalculator {
    rates: FeeRates,
}

impl FeeCalculator {
    /// Create a calculator from a rate card
    ///
    /// # Errors
    /// Returns the first [`RateCardError::InvalidRate`] found by
    /// [`FeeRates::validate`].
    pub fn new(rates: FeeRates) -> Result<Self, RateCardError> {
        rates.validate()?;
        debug!(?rates, "fee calculator configured");
        Ok(Self { rates })
    }

    /// Rate card this calculator prices against
    pub fn rates(&self) -> &FeeRates {
        &self.rates
    }

    /// Compute the fee for one package
    ///
    /// # Arguments
    /// * `weight` - Package weight, must be in (0, max_weight]
    /// * `zone` - Exact zone literal (case-sensitive)
    /// * `insured` - Whether the insurance surcharge applies
    pub fn calculate(&self, weight: f64, zone: &str, insured: bool) -> Result<f64, FeeError> {
        self.quote(weight, zone, insured)
            .map(|breakdown| breakdown.total)
    }

    /// Compute the itemised fee for one package
    ///
    /// Same validation as [`FeeCalculator::calculate`].
    pub fn quote(&self, weight: f64, zone: &str, insured: bool) -> Result<FeeBreakdown, FeeError> {
        self.check_weight(weight)?;
        let zone: Zone = zone.parse()?;

        let base_fee = self.rates.base_fee_for_zone(zone);
        let tier = get_weight_tier(weight, self.rates.heavy_threshold);
        let heavy_surcharge = match tier {
            WeightTier::Standard => 0.0,
            WeightTier::Heavy => self.rates.heavy_surcharge,
        };

        let tiered = base_fee + heavy_surcharge;
        let total = if insured {
            tiered * self.rates.insurance_multiplier
        } else {
            tiered
        };

        Ok(FeeBreakdown {
            zone,
            tier,
            weight,
            insured,
            base_fee,
            heavy_surcharge,
            insurance_surcharge: total - tiered,
            total,
        })
    }

    fn check_weight(&self, weight: f64) -> Result<(), FeeError> {
        // Written as a negated range test so NaN fails too
        if !(weight > 0.0 && weight <= self.rates.max_weight) {
            return Err(FeeError::InvalidWeight {
                weight,
                max_weight: self.rates.max_weight,
            });
        }
        Ok(())
    }
}

/// Compute a shipping fee with the default rate card
///
/// # Arguments
/// * `weight` - Package weight, must satisfy 0 < weight <= 50
/// * `zone` - `"Domestic"`, `"International"` or `"Express"` (exact match)
/// * `insured` - Adds a 1.5% surcharge when true
///
/// # Returns
/// The fee, or the first validation error encountered
pub fn calculate_shipping_fee(weight: f64, zone: &str, insured: bool) -> Result<f64, FeeError> {
    FeeCalculator::default().calculate(weight, zone, insured)
}
