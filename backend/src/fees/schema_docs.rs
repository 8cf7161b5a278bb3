//! Fee Schedule Documentation
//!
//! Self-documenting view of a rate card: the priced (zone, tier) matrix
//! plus a description of every rate-card element. Consumed by the CLI
//! command `shipping-fee schedule`.

use serde::{Deserialize, Serialize};

use super::rates::FeeRates;
use crate::models::tier::WeightTier;
use crate::models::zone::Zone;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Category for grouping rate-card elements
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RateCategory {
    /// Per-zone base fees
    ZoneFee,
    /// Weight limits and tier boundaries
    WeightLimit,
    /// Amounts added on top of the base fee
    Surcharge,
    /// Multipliers that modify the tiered fee
    Modifier,
}

/// Documentation for a single rate-card element
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RateElement {
    /// Field name in the rate-card JSON (e.g., "heavy_surcharge")
    pub name: String,

    /// Human-readable display name
    pub display_name: String,

    pub category: RateCategory,

    pub description: String,

    /// How the element enters the fee (plain text)
    pub formula: String,

    /// Value in the documented rate card
    pub value: f64,

    /// Value in the built-in rate card
    pub default_value: f64,

    pub unit: String,
}

/// Priced cell of the (zone, tier) matrix
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeeScheduleEntry {
    pub zone: Zone,
    pub tier: WeightTier,

    /// Weight range covered, as text (e.g., "0 < w <= 10")
    pub weight_range: String,

    pub fee: f64,
    pub insured_fee: f64,
}

/// Complete fee schedule documentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeScheduleDoc {
    pub version: String,
    pub entries: Vec<FeeScheduleEntry>,
    pub rate_elements: Vec<RateElement>,
}

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

/// Build the schedule for a rate card
///
/// Entries are ordered zone-major (Domestic, International, Express),
/// Standard before Heavy.
pub fn fee_schedule(rates: &FeeRates) -> FeeScheduleDoc {
    let mut entries = Vec::with_capacity(Zone::ALL.len() * 2);
    for zone in Zone::ALL {
        let standard = rates.base_fee_for_zone(zone);
        let heavy = standard + rates.heavy_surcharge;
        entries.push(FeeScheduleEntry {
            zone,
            tier: WeightTier::Standard,
            weight_range: format!("0 < w <= {}", rates.heavy_threshold),
            fee: standard,
            insured_fee: standard * rates.insurance_multiplier,
        });
        entries.push(FeeScheduleEntry {
            zone,
            tier: WeightTier::Heavy,
            weight_range: format!("{} < w <= {}", rates.heavy_threshold, rates.max_weight),
            fee: heavy,
            insured_fee: heavy * rates.insurance_multiplier,
        });
    }

    FeeScheduleDoc {
        version: env!("CARGO_PKG_VERSION").to_string(),
        entries,
        rate_elements: rate_elements(rates),
    }
}

fn rate_elements(rates: &FeeRates) -> Vec<RateElement> {
    let defaults = FeeRates::default();
    vec![
        RateElement {
            name: "domestic_base_fee".to_string(),
            display_name: "Domestic Base Fee".to_string(),
            category: RateCategory::ZoneFee,
            description: "Fee for a Standard-tier package shipped to the Domestic zone."
                .to_string(),
            formula: "base_fee when zone == \"Domestic\"".to_string(),
            value: rates.domestic_base_fee,
            default_value: defaults.domestic_base_fee,
            unit: "currency units".to_string(),
        },
        RateElement {
            name: "international_base_fee".to_string(),
            display_name: "International Base Fee".to_string(),
            category: RateCategory::ZoneFee,
            description: "Fee for a Standard-tier package shipped to the International zone."
                .to_string(),
            formula: "base_fee when zone == \"International\"".to_string(),
            value: rates.international_base_fee,
            default_value: defaults.international_base_fee,
            unit: "currency units".to_string(),
        },
        RateElement {
            name: "express_base_fee".to_string(),
            display_name: "Express Base Fee".to_string(),
            category: RateCategory::ZoneFee,
            description: "Fee for a Standard-tier package shipped with Express delivery."
                .to_string(),
            formula: "base_fee when zone == \"Express\"".to_string(),
            value: rates.express_base_fee,
            default_value: defaults.express_base_fee,
            unit: "currency units".to_string(),
        },
        RateElement {
            name: "heavy_threshold".to_string(),
            display_name: "Heavy Threshold".to_string(),
            category: RateCategory::WeightLimit,
            description: "Largest weight still priced as Standard. \
                The threshold itself is Standard."
                .to_string(),
            formula: "tier = Heavy if weight > heavy_threshold else Standard".to_string(),
            value: rates.heavy_threshold,
            default_value: defaults.heavy_threshold,
            unit: "kg".to_string(),
        },
        RateElement {
            name: "max_weight".to_string(),
            display_name: "Maximum Weight".to_string(),
            category: RateCategory::WeightLimit,
            description: "Largest accepted weight. Heavier packages are rejected \
                with InvalidWeight."
                .to_string(),
            formula: "valid if 0 < weight <= max_weight".to_string(),
            value: rates.max_weight,
            default_value: defaults.max_weight,
            unit: "kg".to_string(),
        },
        RateElement {
            name: "heavy_surcharge".to_string(),
            display_name: "Heavy Surcharge".to_string(),
            category: RateCategory::Surcharge,
            description: "Flat amount added to the zone fee for Heavy packages.".to_string(),
            formula: "tiered = base_fee + heavy_surcharge (Heavy only)".to_string(),
            value: rates.heavy_surcharge,
            default_value: defaults.heavy_surcharge,
            unit: "currency units".to_string(),
        },
        RateElement {
            name: "insurance_multiplier".to_string(),
            display_name: "Insurance Multiplier".to_string(),
            category: RateCategory::Modifier,
            description: "Applied to the tiered fee when the package is insured. \
                1.015 is a 1.5% surcharge."
                .to_string(),
            formula: "fee = tiered * insurance_multiplier (insured only)".to_string(),
            value: rates.insurance_multiplier,
            default_value: defaults.insurance_multiplier,
            unit: "multiplier".to_string(),
        },
    ]
}
