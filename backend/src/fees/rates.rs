//! Fee Rates (rate card)
//!
//! Every pricing constant used by the calculator. The default rate card
//! reproduces the published tariff:
//!
//! | Zone | Standard (0 < w ≤ 10) | Heavy (10 < w ≤ 50) |
//! |---|---|---|
//! | Domestic | 5.0 | 12.5 |
//! | International | 20.0 | 27.5 |
//! | Express | 30.0 | 37.5 |
//!
//! Insured packages pay the tiered fee × 1.015.
//!
//! A rate card can be loaded from JSON. Missing fields fall back to the
//! defaults, so a file only needs to name the rates it overrides.

use crate::models::zone::Zone;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading or validating a rate card
#[derive(Debug, Error)]
pub enum RateCardError {
    #[error("Failed to read rate card {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse rate card: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid rate {field} = {value}: {reason}")]
    InvalidRate {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Fee Rates Configuration
///
/// All fees are in the same (unspecified) currency unit as the output fee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeeRates {
    /// Standard-tier fee for the Domestic zone
    pub domestic_base_fee: f64,

    /// Standard-tier fee for the International zone
    pub international_base_fee: f64,

    /// Standard-tier fee for the Express zone
    pub express_base_fee: f64,

    /// Largest weight still priced as Standard
    pub heavy_threshold: f64,

    /// Flat amount added to the zone fee for Heavy packages
    pub heavy_surcharge: f64,

    /// Largest accepted weight (inclusive)
    pub max_weight: f64,

    /// Multiplier applied to the tiered fee when the package is insured
    ///
    /// 1.015 is a 1.5% surcharge. 1.0 disables the surcharge.
    pub insurance_multiplier: f64,
}

impl Default for FeeRates {
    fn default() -> Self {
        Self {
            domestic_base_fee: 5.0,
            international_base_fee: 20.0,
            express_base_fee: 30.0,
            heavy_threshold: 10.0,
            heavy_surcharge: 7.5,
            max_weight: 50.0,
            insurance_multiplier: 1.015, // 1.5% surcharge
        }
    }
}

impl FeeRates {
    /// Standard-tier fee for a zone
    pub fn base_fee_for_zone(&self, zone: Zone) -> f64 {
        match zone {
            Zone::Domestic => self.domestic_base_fee,
            Zone::International => self.international_base_fee,
            Zone::Express => self.express_base_fee,
        }
    }

    /// Parse and validate a rate card from a JSON string
    ///
    /// # Example
    /// ```
    /// use shipping_fee_core::FeeRates;
    ///
    /// let rates = FeeRates::from_json_str(r#"{ "heavy_surcharge": 10.0 }"#).unwrap();
    /// assert_eq!(rates.heavy_surcharge, 10.0);
    /// assert_eq!(rates.domestic_base_fee, 5.0);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, RateCardError> {
        let rates: FeeRates = serde_json::from_str(json)?;
        rates.validate()?;
        Ok(rates)
    }

    /// Read, parse and validate a rate card file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RateCardError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| RateCardError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let rates = Self::from_json_str(&contents)?;
        debug!(path = %path.display(), ?rates, "loaded rate card");
        Ok(rates)
    }

    /// Check that the rate card describes a usable tariff
    ///
    /// # Errors
    /// - any fee or surcharge is negative or not finite
    /// - `heavy_threshold` is not in (0, max_weight]
    /// - `insurance_multiplier` is below 1.0 or not finite
    pub fn validate(&self) -> Result<(), RateCardError> {
        let fees = [
            ("domestic_base_fee", self.domestic_base_fee),
            ("international_base_fee", self.international_base_fee),
            ("express_base_fee", self.express_base_fee),
            ("heavy_surcharge", self.heavy_surcharge),
        ];
        for (field, value) in fees {
            if !value.is_finite() || value < 0.0 {
                return Err(RateCardError::InvalidRate {
                    field,
                    value,
                    reason: "must be a finite, non-negative amount",
                });
            }
        }

        if !self.max_weight.is_finite() || self.max_weight <= 0.0 {
            return Err(RateCardError::InvalidRate {
                field: "max_weight",
                value: self.max_weight,
                reason: "must be finite and greater than 0",
            });
        }

        if !(self.heavy_threshold > 0.0 && self.heavy_threshold <= self.max_weight) {
            return Err(RateCardError::InvalidRate {
                field: "heavy_threshold",
                value: self.heavy_threshold,
                reason: "must be greater than 0 and at most max_weight",
            });
        }

        if !self.insurance_multiplier.is_finite() || self.insurance_multiplier < 1.0 {
            return Err(RateCardError::InvalidRate {
                field: "insurance_multiplier",
                value: self.insurance_multiplier,
                reason: "must be finite and at least 1.0",
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_rates_default() {
        let rates = FeeRates::default();
        assert_eq!(rates.domestic_base_fee, 5.0);
        assert_eq!(rates.international_base_fee, 20.0);
        assert_eq!(rates.express_base_fee, 30.0);
        assert_eq!(rates.heavy_threshold, 10.0);
        assert_eq!(rates.heavy_surcharge, 7.5);
        assert_eq!(rates.max_weight, 50.0);
        assert_eq!(rates.insurance_multiplier, 1.015);
        assert!(rates.validate().is_ok());
    }

    #[test]
    fn test_base_fee_for_zone() {
        let rates = FeeRates::default();
        assert_eq!(rates.base_fee_for_zone(Zone::Domestic), 5.0);
        assert_eq!(rates.base_fee_for_zone(Zone::International), 20.0);
        assert_eq!(rates.base_fee_for_zone(Zone::Express), 30.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let rates = FeeRates::from_json_str(r#"{ "express_base_fee": 45.0 }"#).unwrap();
        assert_eq!(rates.express_base_fee, 45.0);
        assert_eq!(rates.domestic_base_fee, 5.0);
        assert_eq!(rates.insurance_multiplier, 1.015);
    }

    #[test]
    fn test_empty_json_is_default() {
        let rates = FeeRates::from_json_str("{}").unwrap();
        assert_eq!(rates, FeeRates::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = FeeRates::from_json_str(r#"{ "local_base_fee": 1.0 }"#).unwrap_err();
        assert!(matches!(err, RateCardError::Parse(_)));
    }

    #[test]
    fn test_negative_fee_rejected() {
        let err = FeeRates::from_json_str(r#"{ "domestic_base_fee": -1.0 }"#).unwrap_err();
        match err {
            RateCardError::InvalidRate { field, value, .. } => {
                assert_eq!(field, "domestic_base_fee");
                assert_eq!(value, -1.0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_threshold_above_max_weight_rejected() {
        let rates = FeeRates {
            heavy_threshold: 60.0,
            ..FeeRates::default()
        };
        assert!(matches!(
            rates.validate(),
            Err(RateCardError::InvalidRate {
                field: "heavy_threshold",
                ..
            })
        ));
    }

    #[test]
    fn test_discounting_multiplier_rejected() {
        let rates = FeeRates {
            insurance_multiplier: 0.9,
            ..FeeRates::default()
        };
        assert!(matches!(
            rates.validate(),
            Err(RateCardError::InvalidRate {
                field: "insurance_multiplier",
                ..
            })
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = FeeRates::from_json_file("/nonexistent/rates.json").unwrap_err();
        assert!(matches!(err, RateCardError::Io { .. }));
    }
}
