use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::valuation::{
    AmenityFactor, AreaPricing, BuildingKind, BuildingSpec, LandSpec, PlotShape, ValuationConfig,
    ValuationEngine,
};

pub(super) const VALUATION_YEAR: i32 = 2026;

pub(super) fn karen() -> AreaPricing {
    AreaPricing {
        name: "Karen".to_string(),
        land_price_per_acre: dec!(220000000),
        apartment_price_per_sqm: dec!(180000),
        house_price_per_sqm: dec!(200000),
    }
}

pub(super) fn kilimani() -> AreaPricing {
    AreaPricing {
        name: "Kilimani".to_string(),
        land_price_per_acre: dec!(300000000),
        apartment_price_per_sqm: dec!(220000),
        house_price_per_sqm: dec!(210000),
    }
}

pub(super) fn amenity(name: &str, kind: BuildingKind, uplift: Decimal) -> AmenityFactor {
    AmenityFactor {
        name: name.to_string(),
        kind,
        uplift_percent: uplift,
    }
}

pub(super) fn apartment_amenities() -> Vec<AmenityFactor> {
    vec![
        amenity("lift", BuildingKind::Apartment, dec!(0.03)),
        amenity("parking", BuildingKind::Apartment, dec!(0.02)),
    ]
}

pub(super) fn house_amenities() -> Vec<AmenityFactor> {
    vec![
        amenity("pool", BuildingKind::House, dec!(0.06)),
        amenity("garage", BuildingKind::House, dec!(0.03)),
    ]
}

pub(super) fn half_acre(plot_shape: PlotShape) -> LandSpec {
    LandSpec {
        size_acres: dec!(0.5),
        plot_shape,
    }
}

pub(super) fn building(size_sqm: Decimal, age: i32, amenities: &[AmenityFactor]) -> BuildingSpec<'_> {
    BuildingSpec {
        size_sqm,
        year_built: VALUATION_YEAR - age,
        amenities,
    }
}

pub(super) fn engine() -> ValuationEngine {
    ValuationEngine::new(ValuationConfig::default())
}
