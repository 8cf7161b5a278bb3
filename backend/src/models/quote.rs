//! Quote model
//!
//! Result shapes returned by the calculator:
//! - [`FeeBreakdown`]: every component of a successfully priced package
//! - [`QuoteOutcome`]: flat `(fee, error)` record, with a zero fee on failure

use crate::fees::calculator::FeeError;
use crate::models::tier::WeightTier;
use crate::models::zone::Zone;
use serde::{Deserialize, Serialize};

/// Itemised fee for a single package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    pub zone: Zone,
    pub tier: WeightTier,
    pub weight: f64,
    pub insured: bool,

    /// Standard-tier fee for the zone
    pub base_fee: f64,

    /// Heavy-tier surcharge (0.0 for Standard packages)
    pub heavy_surcharge: f64,

    /// Amount added by insurance (0.0 when not insured)
    pub insurance_surcharge: f64,

    /// Fee charged: (base_fee + heavy_surcharge) × insurance multiplier
    pub total: f64,
}

/// Validation error as reported in a [`QuoteOutcome`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteError {
    /// Stable error kind (`InvalidWeight` or `InvalidZone`)
    pub kind: String,
    /// Human-readable message
    pub message: String,
}

/// `(fee, error)` pair
///
/// On failure the fee is always 0.0; no partial result is reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteOutcome {
    pub fee: f64,
    pub error: Option<QuoteError>,
}

impl QuoteOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

impl From<Result<f64, FeeError>> for QuoteOutcome {
    fn from(result: Result<f64, FeeError>) -> Self {
        match result {
            Ok(fee) => Self { fee, error: None },
            Err(err) => Self {
                fee: 0.0,
                error: Some(QuoteError {
                    kind: err.kind().to_string(),
                    message: err.to_string(),
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_ok() {
        let outcome = QuoteOutcome::from(Ok(12.5));
        assert!(outcome.is_ok());
        assert_eq!(outcome.fee, 12.5);
    }

    #[test]
    fn test_outcome_from_err_has_zero_fee() {
        let outcome = QuoteOutcome::from(Err(FeeError::InvalidZone {
            zone: "Local".to_string(),
        }));
        assert!(!outcome.is_ok());
        assert_eq!(outcome.fee, 0.0);
        assert_eq!(outcome.error.unwrap().kind, "InvalidZone");
    }

    #[test]
    fn test_outcome_json_shape() {
        let outcome = QuoteOutcome::from(Err(FeeError::InvalidWeight {
            weight: 51.0,
            max_weight: 50.0,
        }));
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["fee"], 0.0);
        assert_eq!(json["error"]["kind"], "InvalidWeight");

        let ok = serde_json::to_value(QuoteOutcome::from(Ok(5.0))).unwrap();
        assert!(ok["error"].is_null());
    }
}
