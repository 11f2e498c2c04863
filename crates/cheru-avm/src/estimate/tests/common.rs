use std::sync::Arc;

use axum::response::Response;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

use crate::estimate::{
    ApartmentRequest, EstimateService, HouseRequest, LandRequest, PropertyRequest,
    ValidationPolicy,
};
use crate::reference::{ReferenceCatalog, ReferenceError, ReferenceRepository};
use crate::valuation::{AmenityFactor, AreaPricing, BuildingKind, PlotShape, ValuationConfig};

pub(super) const VALUATION_YEAR: i32 = 2026;

pub(super) fn service() -> EstimateService<ReferenceCatalog> {
    EstimateService::new(
        Arc::new(ReferenceCatalog::seeded()),
        ValuationConfig::default(),
        ValidationPolicy::default(),
    )
}

pub(super) fn land_request(area: &str, acres: Decimal, plot_shape: PlotShape) -> PropertyRequest {
    PropertyRequest::Land(LandRequest {
        area: area.to_string(),
        land_size_acres: acres,
        plot_shape,
    })
}

pub(super) fn apartment(year_built: i32, amenities: &[&str]) -> ApartmentRequest {
    ApartmentRequest {
        area: "Karen".to_string(),
        size_sqm: dec!(100),
        year_built,
        bedrooms: 3,
        bathrooms: 2,
        floor: 4,
        amenities: amenities.iter().map(|name| name.to_string()).collect(),
        apartment_name: Some("Karen Gardens".to_string()),
    }
}

pub(super) fn apartment_request(year_built: i32, amenities: &[&str]) -> PropertyRequest {
    PropertyRequest::Apartment(apartment(year_built, amenities))
}

pub(super) fn house(year_built: i32, amenities: &[&str]) -> HouseRequest {
    HouseRequest {
        area: "karen".to_string(),
        house_size_sqm: dec!(200),
        land_size_acres: dec!(0.25),
        year_built,
        bedrooms: 4,
        bathrooms: 3,
        plot_shape: PlotShape::Normal,
        amenities: amenities.iter().map(|name| name.to_string()).collect(),
    }
}

pub(super) fn house_request(year_built: i32, amenities: &[&str]) -> PropertyRequest {
    PropertyRequest::House(house(year_built, amenities))
}

pub(super) fn number_field(payload: &Value, field: &str) -> f64 {
    payload
        .get(field)
        .and_then(Value::as_f64)
        .unwrap_or_else(|| panic!("{field} is not a JSON number in {payload}"))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) struct OfflineRepository;

impl ReferenceRepository for OfflineRepository {
    fn find_area(&self, _key: &str) -> Result<Option<AreaPricing>, ReferenceError> {
        Err(ReferenceError::Unavailable("database offline".to_string()))
    }

    fn find_amenity(
        &self,
        _key: &str,
        _kind: BuildingKind,
    ) -> Result<Option<AmenityFactor>, ReferenceError> {
        Err(ReferenceError::Unavailable("database offline".to_string()))
    }

    fn areas(&self) -> Result<Vec<AreaPricing>, ReferenceError> {
        Err(ReferenceError::Unavailable("database offline".to_string()))
    }

    fn amenities(&self, _kind: BuildingKind) -> Result<Vec<AmenityFactor>, ReferenceError> {
        Err(ReferenceError::Unavailable("database offline".to_string()))
    }
}
