//! Golden Vector Tests for the default rate card
//!
//! These tests pin EXACT fees for specific inputs. A failure means the
//! published tariff changed; update the vectors only when that change is
//! intentional.

#[cfg(test)]
mod tests {
    use crate::{calculate_shipping_fee, FeeError, QuoteOutcome};

    /// Light domestic parcel, no insurance
    ///
    /// - tier: Standard (1 <= 10)
    /// - fee: 5.0
    #[test]
    fn golden_domestic_standard_uninsured() {
        let fee = calculate_shipping_fee(1.0, "Domestic", false).unwrap();
        assert_eq!(fee, 5.0, "Golden vector mismatch: domestic_standard_uninsured");
    }

    /// Light domestic parcel, insured
    ///
    /// - fee: 5.0 * 1.015 = 5.075
    #[test]
    fn golden_domestic_standard_insured() {
        let fee = calculate_shipping_fee(1.0, "Domestic", true).unwrap();
        assert_eq!(fee, 5.0 * 1.015);
        assert!((fee - 5.075).abs() < 1e-9, "Golden vector mismatch: {fee}");
    }

    /// Heavy domestic parcel
    ///
    /// - tier: Heavy (20 > 10)
    /// - fee: 5.0 + 7.5 = 12.5
    #[test]
    fn golden_domestic_heavy_uninsured() {
        let fee = calculate_shipping_fee(20.0, "Domestic", false).unwrap();
        assert_eq!(fee, 12.5, "Golden vector mismatch: domestic_heavy_uninsured");
    }

    /// Heaviest accepted express parcel, insured
    ///
    /// - tier: Heavy (50 > 10, 50 <= 50)
    /// - fee: (30.0 + 7.5) * 1.015 = 38.0625
    #[test]
    fn golden_express_max_weight_insured() {
        let fee = calculate_shipping_fee(50.0, "Express", true).unwrap();
        assert_eq!(fee, 37.5 * 1.015);
        assert!((fee - 38.0625).abs() < 1e-9, "Golden vector mismatch: {fee}");
    }

    /// Unknown zone: zero fee plus InvalidZone
    #[test]
    fn golden_unknown_zone() {
        let result = calculate_shipping_fee(5.0, "Local", false);
        assert_eq!(
            result,
            Err(FeeError::InvalidZone {
                zone: "Local".to_string()
            })
        );
        let outcome = QuoteOutcome::from(result);
        assert_eq!(outcome.fee, 0.0);
        assert_eq!(outcome.error.unwrap().kind, "InvalidZone");
    }

    /// Overweight parcel: zero fee plus InvalidWeight
    #[test]
    fn golden_overweight() {
        let result = calculate_shipping_fee(51.0, "Domestic", false);
        assert_eq!(
            result,
            Err(FeeError::InvalidWeight {
                weight: 51.0,
                max_weight: 50.0
            })
        );
        let outcome = QuoteOutcome::from(result);
        assert_eq!(outcome.fee, 0.0);
        assert_eq!(outcome.error.unwrap().kind, "InvalidWeight");
    }
}
