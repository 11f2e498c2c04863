use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::domain::AmenityFactor;
use super::{checked_product, ValuationError};

/// Strategy for combining the selected amenities into one fractional uplift.
///
/// Inputs are assumed to be resolved, de-duplicated records for the right building kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmenityPolicy {
    /// Each amenity adds `base_value * uplift_percent`; the uplift is reported relative to the base.
    AdditiveOfBase,
    /// Uplift percentages are summed and later applied as `(1 + uplift)`.
    #[default]
    SummedPercent,
}

impl AmenityPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "additive" | "additive_of_base" => Some(Self::AdditiveOfBase),
            "summed" | "summed_percent" => Some(Self::SummedPercent),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            AmenityPolicy::AdditiveOfBase => "additive_of_base",
            AmenityPolicy::SummedPercent => "summed_percent",
        }
    }

    /// Combined uplift fraction for `amenities` against a building worth `base_value`.
    pub fn combined_uplift(
        self,
        base_value: Decimal,
        amenities: &[AmenityFactor],
    ) -> Result<Decimal, ValuationError> {
        let overflow = ValuationError::Overflow {
            step: "amenity_percent",
        };
        match self {
            AmenityPolicy::AdditiveOfBase => {
                if base_value.is_zero() {
                    return Ok(Decimal::ZERO);
                }
                let addition = amenities.iter().try_fold(Decimal::ZERO, |total, amenity| {
                    let share =
                        checked_product(base_value, amenity.uplift_percent, "amenity_percent")?;
                    total.checked_add(share).ok_or(overflow.clone())
                })?;
                addition.checked_div(base_value).ok_or(overflow)
            }
            AmenityPolicy::SummedPercent => amenities
                .iter()
                .try_fold(Decimal::ZERO, |total, amenity| {
                    total.checked_add(amenity.uplift_percent)
                })
                .ok_or(overflow),
        }
    }
}
