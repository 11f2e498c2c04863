use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Property families the engine knows how to price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyCategory {
    Land,
    Apartment,
    House,
}

impl PropertyCategory {
    pub const fn label(self) -> &'static str {
        match self {
            PropertyCategory::Land => "land",
            PropertyCategory::Apartment => "apartment",
            PropertyCategory::House => "house",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "land" => Some(Self::Land),
            "apartment" => Some(Self::Apartment),
            "house" => Some(Self::House),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Categories with a building component, and therefore amenities and depreciation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingKind {
    Apartment,
    House,
}

impl BuildingKind {
    pub const fn label(self) -> &'static str {
        match self {
            BuildingKind::Apartment => "apartment",
            BuildingKind::House => "house",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match PropertyCategory::parse(value)? {
            PropertyCategory::Apartment => Some(Self::Apartment),
            PropertyCategory::House => Some(Self::House),
            PropertyCategory::Land => None,
        }
    }
}

impl From<BuildingKind> for PropertyCategory {
    fn from(kind: BuildingKind) -> Self {
        match kind {
            BuildingKind::Apartment => PropertyCategory::Apartment,
            BuildingKind::House => PropertyCategory::House,
        }
    }
}

impl fmt::Display for BuildingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Plot geometry categories recognised by the shape multiplier table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlotShape {
    Normal,
    Corner,
    Irregular,
}

impl PlotShape {
    pub const fn ordered() -> [Self; 3] {
        [Self::Irregular, Self::Normal, Self::Corner]
    }

    pub const fn label(self) -> &'static str {
        match self {
            PlotShape::Normal => "normal",
            PlotShape::Corner => "corner",
            PlotShape::Irregular => "irregular",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "normal" => Some(Self::Normal),
            "corner" => Some(Self::Corner),
            "irregular" => Some(Self::Irregular),
            _ => None,
        }
    }
}

/// Reference unit prices for a named area. Read-only from the engine's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaPricing {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub land_price_per_acre: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub apartment_price_per_sqm: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub house_price_per_sqm: Decimal,
}

impl AreaPricing {
    pub fn price_per_sqm(&self, kind: BuildingKind) -> Decimal {
        match kind {
            BuildingKind::Apartment => self.apartment_price_per_sqm,
            BuildingKind::House => self.house_price_per_sqm,
        }
    }
}

/// Fractional value uplift contributed by an amenity, scoped to one building kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmenityFactor {
    pub name: String,
    #[serde(rename = "property_type")]
    pub kind: BuildingKind,
    #[serde(with = "rust_decimal::serde::float")]
    pub uplift_percent: Decimal,
}
