use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::valuation::{BuildingKind, PlotShape, PropertyCategory};

/// Inbound estimate request, discriminated by `property_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "property_type", rename_all = "snake_case")]
pub enum PropertyRequest {
    Land(LandRequest),
    Apartment(ApartmentRequest),
    House(HouseRequest),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandRequest {
    pub area: String,
    pub land_size_acres: Decimal,
    pub plot_shape: PlotShape,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApartmentRequest {
    pub area: String,
    pub size_sqm: Decimal,
    pub year_built: i32,
    pub bedrooms: u8,
    #[serde(default)]
    pub bathrooms: u8,
    pub floor: u8,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apartment_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseRequest {
    pub area: String,
    pub house_size_sqm: Decimal,
    pub land_size_acres: Decimal,
    pub year_built: i32,
    #[serde(default)]
    pub bedrooms: u8,
    #[serde(default)]
    pub bathrooms: u8,
    pub plot_shape: PlotShape,
    #[serde(default)]
    pub amenities: Vec<String>,
}

impl PropertyRequest {
    pub fn category(&self) -> PropertyCategory {
        match self {
            PropertyRequest::Land(_) => PropertyCategory::Land,
            PropertyRequest::Apartment(_) => PropertyCategory::Apartment,
            PropertyRequest::House(_) => PropertyCategory::House,
        }
    }

    pub fn area(&self) -> &str {
        match self {
            PropertyRequest::Land(land) => &land.area,
            PropertyRequest::Apartment(apartment) => &apartment.area,
            PropertyRequest::House(house) => &house.area,
        }
    }

    pub fn year_built(&self) -> Option<i32> {
        match self {
            PropertyRequest::Land(_) => None,
            PropertyRequest::Apartment(apartment) => Some(apartment.year_built),
            PropertyRequest::House(house) => Some(house.year_built),
        }
    }

    /// Requested amenity names with the building kind they must resolve against.
    pub fn amenities(&self) -> Option<(BuildingKind, &[String])> {
        match self {
            PropertyRequest::Land(_) => None,
            PropertyRequest::Apartment(apartment) => {
                Some((BuildingKind::Apartment, apartment.amenities.as_slice()))
            }
            PropertyRequest::House(house) => Some((BuildingKind::House, house.amenities.as_slice())),
        }
    }
}
