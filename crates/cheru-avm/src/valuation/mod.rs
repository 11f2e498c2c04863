//! Deterministic valuation rules for land, apartments, and houses.
//!
//! Every calculator is a pure function of the resolved area pricing, the property attributes,
//! the selected amenities, and the valuation year. Nothing here performs I/O or holds state
//! beyond the read-only [`ValuationConfig`].

mod amenities;
mod breakdown;
pub mod calculators;
mod config;
mod depreciation;
pub mod domain;
mod range;
mod shape;

#[cfg(test)]
mod tests;

pub use amenities::AmenityPolicy;
pub use breakdown::{BuildingBreakdown, EstimateBreakdown, HouseBreakdown, LandBreakdown};
pub use calculators::{BuildingSpec, LandSpec, Valuation};
pub use config::{FormulaRevision, ValuationConfig};
pub use depreciation::{DepreciationPolicy, LINEAR_ANNUAL_RATE, LINEAR_MAX_DEPRECIATION};
pub use domain::{AmenityFactor, AreaPricing, BuildingKind, PlotShape, PropertyCategory};
pub use range::{confidence_score, RangeFactors};
pub use shape::{ShapeMultipliers, IRREGULAR_LAUNCH, IRREGULAR_REVISED};

use rust_decimal::Decimal;
use serde::Serialize;

/// Guard failures for inputs that should have been rejected before reaching a calculator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValuationError {
    #[error("{field} must be greater than zero (found {value})")]
    NonPositiveSize { field: &'static str, value: Decimal },
    #[error("year_built {year_built} is later than the valuation year {current_year}")]
    YearBuiltInFuture { year_built: i32, current_year: i32 },
    #[error("year_built {year_built} cannot be aged against the valuation year {current_year}")]
    YearOutOfRange { year_built: i32, current_year: i32 },
    #[error("{step} exceeds the representable range")]
    Overflow { step: &'static str },
    #[error("amenity '{name}' is priced for {found} properties, not {expected}")]
    AmenityKindMismatch {
        name: String,
        expected: BuildingKind,
        found: BuildingKind,
    },
}

fn checked_product(
    lhs: Decimal,
    rhs: Decimal,
    step: &'static str,
) -> Result<Decimal, ValuationError> {
    lhs.checked_mul(rhs).ok_or(ValuationError::Overflow { step })
}

/// Resolved inputs for one valuation, one variant per property category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValuationSubject<'a> {
    Land(LandSpec),
    Apartment(BuildingSpec<'a>),
    House {
        land: LandSpec,
        building: BuildingSpec<'a>,
    },
}

impl ValuationSubject<'_> {
    pub fn category(&self) -> PropertyCategory {
        match self {
            ValuationSubject::Land(_) => PropertyCategory::Land,
            ValuationSubject::Apartment(_) => PropertyCategory::Apartment,
            ValuationSubject::House { .. } => PropertyCategory::House,
        }
    }

    pub fn amenity_count(&self) -> usize {
        match self {
            ValuationSubject::Land(_) => 0,
            ValuationSubject::Apartment(building) | ValuationSubject::House { building, .. } => {
                building.amenities.len()
            }
        }
    }
}

/// Final, immutable result of a valuation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Estimate {
    pub property_type: PropertyCategory,
    pub area: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub estimated_value: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub low_estimate: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub high_estimate: Decimal,
    pub breakdown: EstimateBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "rust_decimal::serde::float_option")]
    pub confidence_score: Option<Decimal>,
}

/// Stateless engine applying one [`ValuationConfig`] to resolved inputs.
#[derive(Debug, Clone, Default)]
pub struct ValuationEngine {
    config: ValuationConfig,
}

impl ValuationEngine {
    pub fn new(config: ValuationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValuationConfig {
        &self.config
    }

    pub fn estimate_land(
        &self,
        area: &AreaPricing,
        land: &LandSpec,
    ) -> Result<Valuation<LandBreakdown>, ValuationError> {
        calculators::estimate_land(area, land, &self.config.shapes)
    }

    pub fn estimate_apartment(
        &self,
        area: &AreaPricing,
        building: &BuildingSpec<'_>,
        current_year: i32,
    ) -> Result<Valuation<BuildingBreakdown>, ValuationError> {
        calculators::estimate_apartment(area, building, current_year, &self.config)
    }

    pub fn estimate_house(
        &self,
        area: &AreaPricing,
        land: &LandSpec,
        building: &BuildingSpec<'_>,
        current_year: i32,
    ) -> Result<Valuation<HouseBreakdown>, ValuationError> {
        calculators::estimate_house(area, land, building, current_year, &self.config)
    }

    /// Value a subject and derive its range and advisory confidence.
    pub fn appraise(
        &self,
        area: &AreaPricing,
        subject: &ValuationSubject<'_>,
        current_year: i32,
    ) -> Result<Estimate, ValuationError> {
        let (estimated_value, breakdown) = match subject {
            ValuationSubject::Land(land) => {
                let valuation = self.estimate_land(area, land)?;
                (valuation.value, EstimateBreakdown::from(valuation.breakdown))
            }
            ValuationSubject::Apartment(building) => {
                let valuation = self.estimate_apartment(area, building, current_year)?;
                (valuation.value, EstimateBreakdown::Apartment(valuation.breakdown))
            }
            ValuationSubject::House { land, building } => {
                let valuation = self.estimate_house(area, land, building, current_year)?;
                (valuation.value, EstimateBreakdown::from(valuation.breakdown))
            }
        };

        let (low_estimate, high_estimate) = self.config.range.bounds(estimated_value)?;
        let category = subject.category();

        Ok(Estimate {
            property_type: category,
            area: area.name.clone(),
            estimated_value,
            low_estimate,
            high_estimate,
            breakdown,
            confidence_score: Some(confidence_score(Some(category), subject.amenity_count())),
        })
    }
}
