use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::domain::PropertyCategory;
use super::{checked_product, ValuationError};

const FALLBACK_CONFIDENCE: Decimal = dec!(0.75);
const CONFIDENCE_PER_AMENITY: Decimal = dec!(0.02);
const MAX_COUNTED_AMENITIES: usize = 5;
const CONFIDENCE_CEILING: Decimal = dec!(0.95);

/// Multipliers turning a point estimate into a low/high band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeFactors {
    pub low: Decimal,
    pub high: Decimal,
}

impl RangeFactors {
    pub const STANDARD: Self = Self {
        low: dec!(0.90),
        high: dec!(1.10),
    };
    pub const NARROW: Self = Self {
        low: dec!(0.92),
        high: dec!(1.10),
    };

    pub fn bounds(&self, estimated_value: Decimal) -> Result<(Decimal, Decimal), ValuationError> {
        Ok((
            checked_product(estimated_value, self.low, "low_estimate")?,
            checked_product(estimated_value, self.high, "high_estimate")?,
        ))
    }

    /// `0 < low <= 1 <= high`, which keeps the point estimate inside its band.
    pub fn brackets_estimate(&self) -> bool {
        self.low > Decimal::ZERO && self.low <= Decimal::ONE && Decimal::ONE <= self.high
    }
}

impl Default for RangeFactors {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Advisory confidence for an estimate. Not part of the value computation.
///
/// `None` covers categories the scorer has no base score for.
pub fn confidence_score(category: Option<PropertyCategory>, amenity_count: usize) -> Decimal {
    let base = match category {
        Some(PropertyCategory::Land) => dec!(0.78),
        Some(PropertyCategory::House) => dec!(0.82),
        Some(PropertyCategory::Apartment) => dec!(0.85),
        None => FALLBACK_CONFIDENCE,
    };
    let counted = Decimal::from(amenity_count.min(MAX_COUNTED_AMENITIES));
    let adjusted = base + counted * CONFIDENCE_PER_AMENITY;
    adjusted.min(CONFIDENCE_CEILING).round_dp(2)
}
