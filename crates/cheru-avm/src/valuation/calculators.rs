use rust_decimal::Decimal;

use super::breakdown::{BuildingBreakdown, HouseBreakdown, LandBreakdown};
use super::config::ValuationConfig;
use super::domain::{AmenityFactor, AreaPricing, BuildingKind, PlotShape};
use super::shape::ShapeMultipliers;
use super::{checked_product, ValuationError};

/// A computed value with the accounting that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Valuation<B> {
    pub value: Decimal,
    pub breakdown: B,
}

/// Land attributes consumed by the land calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandSpec {
    pub size_acres: Decimal,
    pub plot_shape: PlotShape,
}

/// Building attributes plus the already-resolved amenities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildingSpec<'a> {
    pub size_sqm: Decimal,
    pub year_built: i32,
    pub amenities: &'a [AmenityFactor],
}

pub fn estimate_land(
    area: &AreaPricing,
    land: &LandSpec,
    shapes: &ShapeMultipliers,
) -> Result<Valuation<LandBreakdown>, ValuationError> {
    ensure_positive("land_size_acres", land.size_acres)?;

    let base_value =
        checked_product(land.size_acres, area.land_price_per_acre, "land_base_value")?;
    let multiplier = shapes.multiplier(land.plot_shape);
    let final_value = checked_product(base_value, multiplier, "land_final_value")?;

    Ok(Valuation {
        value: final_value,
        breakdown: LandBreakdown {
            land_base_value: base_value,
            land_shape_multiplier: multiplier,
            land_final_value: final_value,
        },
    })
}

pub fn estimate_apartment(
    area: &AreaPricing,
    building: &BuildingSpec<'_>,
    current_year: i32,
    config: &ValuationConfig,
) -> Result<Valuation<BuildingBreakdown>, ValuationError> {
    estimate_building(area, BuildingKind::Apartment, building, current_year, config)
}

/// Land and building are priced separately; amenities only lift the building.
pub fn estimate_house(
    area: &AreaPricing,
    land: &LandSpec,
    building: &BuildingSpec<'_>,
    current_year: i32,
    config: &ValuationConfig,
) -> Result<Valuation<HouseBreakdown>, ValuationError> {
    let land = estimate_land(area, land, &config.shapes)?;
    let building = estimate_building(area, BuildingKind::House, building, current_year, config)?;

    let value = land
        .value
        .checked_add(building.value)
        .ok_or(ValuationError::Overflow {
            step: "house_value",
        })?;

    Ok(Valuation {
        value,
        breakdown: HouseBreakdown {
            land: land.breakdown,
            building: building.breakdown,
        },
    })
}

// Depreciation is applied before the amenity uplift for every building kind.
fn estimate_building(
    area: &AreaPricing,
    kind: BuildingKind,
    building: &BuildingSpec<'_>,
    current_year: i32,
    config: &ValuationConfig,
) -> Result<Valuation<BuildingBreakdown>, ValuationError> {
    ensure_positive(size_field(kind), building.size_sqm)?;
    if let Some(stray) = building.amenities.iter().find(|amenity| amenity.kind != kind) {
        return Err(ValuationError::AmenityKindMismatch {
            name: stray.name.clone(),
            expected: kind,
            found: stray.kind,
        });
    }

    let base_price_per_sqm = area.price_per_sqm(kind);
    let retained = config
        .depreciation
        .factor_for(building.year_built, current_year)?;
    let depreciated_price = checked_product(base_price_per_sqm, retained, "depreciated_price_per_sqm")?;
    let value_before_amenities = checked_product(
        depreciated_price,
        building.size_sqm,
        "building_value_before_amenities",
    )?;

    let uplift = config
        .amenities
        .combined_uplift(value_before_amenities, building.amenities)?;
    let uplift_factor = Decimal::ONE
        .checked_add(uplift)
        .ok_or(ValuationError::Overflow {
            step: "amenity_percent",
        })?;
    let final_price_per_sqm =
        checked_product(depreciated_price, uplift_factor, "final_price_per_sqm")?;
    let value_after_amenities = checked_product(
        final_price_per_sqm,
        building.size_sqm,
        "building_value_after_amenities",
    )?;

    Ok(Valuation {
        value: value_after_amenities,
        breakdown: BuildingBreakdown {
            base_price_per_sqm,
            depreciation_percent: Decimal::ONE - retained,
            amenity_percent: uplift,
            final_price_per_sqm,
            building_value_before_amenities: value_before_amenities,
            building_value_after_amenities: value_after_amenities,
        },
    })
}

fn size_field(kind: BuildingKind) -> &'static str {
    match kind {
        BuildingKind::Apartment => "size_sqm",
        BuildingKind::House => "house_size_sqm",
    }
}

fn ensure_positive(field: &'static str, value: Decimal) -> Result<(), ValuationError> {
    if value > Decimal::ZERO {
        Ok(())
    } else {
        Err(ValuationError::NonPositiveSize { field, value })
    }
}
