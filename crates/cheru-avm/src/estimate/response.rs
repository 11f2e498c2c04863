use rust_decimal::Decimal;
use serde::Serialize;

use crate::valuation::{Estimate, EstimateBreakdown, PropertyCategory};

pub const DISCLAIMER: &str = "Kindly note that this is an automatic estimated value. \
The real value can differ as each property is unique. \
If you need an official valuation, kindly contact our valuers.";

/// Wire shape returned by `POST /api/estimate`.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateResponse {
    pub property_type: PropertyCategory,
    pub area: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub estimated_value: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub low_estimate: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub high_estimate: Decimal,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub base_price_per_sqm: Option<Decimal>,
    pub breakdown: EstimateBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "rust_decimal::serde::float_option")]
    pub confidence_score: Option<Decimal>,
    pub disclaimer: &'static str,
}

impl From<Estimate> for EstimateResponse {
    fn from(estimate: Estimate) -> Self {
        Self {
            property_type: estimate.property_type,
            area: estimate.area,
            estimated_value: estimate.estimated_value,
            value: estimate.estimated_value,
            low_estimate: estimate.low_estimate,
            high_estimate: estimate.high_estimate,
            base_price_per_sqm: estimate.breakdown.base_price_per_sqm(),
            breakdown: estimate.breakdown,
            confidence_score: estimate.confidence_score,
            disclaimer: DISCLAIMER,
        }
    }
}
