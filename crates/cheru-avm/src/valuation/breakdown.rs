use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Land component accounting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandBreakdown {
    #[serde(with = "rust_decimal::serde::float")]
    pub land_base_value: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub land_shape_multiplier: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub land_final_value: Decimal,
}

/// Building component accounting shared by apartments and houses.
///
/// `depreciation_percent` is `1 - retained factor`; `amenity_percent` is the combined uplift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingBreakdown {
    #[serde(with = "rust_decimal::serde::float")]
    pub base_price_per_sqm: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub depreciation_percent: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub amenity_percent: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub final_price_per_sqm: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub building_value_before_amenities: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub building_value_after_amenities: Decimal,
}

/// House accounting; both halves serialize into one flat object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseBreakdown {
    #[serde(flatten)]
    pub land: LandBreakdown,
    #[serde(flatten)]
    pub building: BuildingBreakdown,
}

/// Itemized accounting of an estimate, shaped by property category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EstimateBreakdown {
    Land(LandBreakdown),
    Apartment(BuildingBreakdown),
    House(HouseBreakdown),
}

impl EstimateBreakdown {
    pub fn land(&self) -> Option<&LandBreakdown> {
        match self {
            EstimateBreakdown::Land(land) => Some(land),
            EstimateBreakdown::House(house) => Some(&house.land),
            EstimateBreakdown::Apartment(_) => None,
        }
    }

    pub fn building(&self) -> Option<&BuildingBreakdown> {
        match self {
            EstimateBreakdown::Apartment(building) => Some(building),
            EstimateBreakdown::House(house) => Some(&house.building),
            EstimateBreakdown::Land(_) => None,
        }
    }

    pub fn base_price_per_sqm(&self) -> Option<Decimal> {
        self.building().map(|building| building.base_price_per_sqm)
    }
}

impl From<LandBreakdown> for EstimateBreakdown {
    fn from(value: LandBreakdown) -> Self {
        Self::Land(value)
    }
}

impl From<HouseBreakdown> for EstimateBreakdown {
    fn from(value: HouseBreakdown) -> Self {
        Self::House(value)
    }
}
