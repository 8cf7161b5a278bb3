//! Destination zone model
//!
//! A zone is the destination category of a package. Only three literal
//! names are recognised, matched exactly and case-sensitively:
//! `"Domestic"`, `"International"` and `"Express"`. No trimming or case
//! folding is applied, so `"domestic"` and `" Domestic"` are rejected.

use crate::fees::calculator::FeeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Destination zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Delivery inside the home country
    Domestic,
    /// Cross-border delivery
    International,
    /// Expedited delivery
    Express,
}

impl Zone {
    /// Every zone, in rate-card order
    pub const ALL: [Zone; 3] = [Zone::Domestic, Zone::International, Zone::Express];

    /// The exact literal accepted by [`Zone::from_str`]
    pub const fn as_str(self) -> &'static str {
        match self {
            Zone::Domestic => "Domestic",
            Zone::International => "International",
            Zone::Express => "Express",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Zone {
    type Err = FeeError;

    /// Parse a zone literal
    ///
    /// # Errors
    /// Returns [`FeeError::InvalidZone`] for anything other than the three
    /// exact literals, including the empty string and case variants.
    ///
    /// # Example
    /// ```
    /// use shipping_fee_core::Zone;
    ///
    /// assert_eq!("Express".parse::<Zone>().unwrap(), Zone::Express);
    /// assert!("express".parse::<Zone>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Domestic" => Ok(Zone::Domestic),
            "International" => Ok(Zone::International),
            "Express" => Ok(Zone::Express),
            other => Err(FeeError::InvalidZone {
                zone: other.to_string(),
            }),
        }
    }
}
