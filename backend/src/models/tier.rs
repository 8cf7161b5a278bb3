//! Weight tiers
//!
//! Packages are priced in two tiers split at the heavy threshold
//! (10.0 with the default rate card). The threshold itself belongs to
//! the Standard tier.

use serde::{Deserialize, Serialize};

/// Weight tier for pricing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightTier {
    /// Weight in (0, heavy_threshold]
    Standard,
    /// Weight in (heavy_threshold, max_weight]
    Heavy,
}

/// Get the weight tier for an already-validated weight
///
/// # Arguments
/// * `weight` - Package weight, assumed to be inside (0, max_weight]
/// * `heavy_threshold` - Largest weight still priced as Standard
///
/// # Returns
/// The corresponding weight tier
pub fn get_weight_tier(weight: f64, heavy_threshold: f64) -> WeightTier {
    if weight > heavy_threshold {
        WeightTier::Heavy
    } else {
        WeightTier::Standard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_standard() {
        assert_eq!(get_weight_tier(10.0, 10.0), WeightTier::Standard);
    }

    #[test]
    fn test_just_above_threshold_is_heavy() {
        assert_eq!(get_weight_tier(10.01, 10.0), WeightTier::Heavy);
        assert_eq!(get_weight_tier(50.0, 10.0), WeightTier::Heavy);
    }

    #[test]
    fn test_light_packages_are_standard() {
        assert_eq!(get_weight_tier(0.01, 10.0), WeightTier::Standard);
        assert_eq!(get_weight_tier(9.99, 10.0), WeightTier::Standard);
    }
}
