use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::common::*;
use crate::estimate::{EstimateService, EstimateServiceError, InvalidPropertyAttributes, ValidationPolicy};
use crate::reference::ResolutionError;
use crate::valuation::{
    EstimateBreakdown, FormulaRevision, PlotShape, PropertyCategory, ValuationConfig,
};

#[test]
fn land_estimate_matches_reference_scenario() {
    let estimate = service()
        .estimate(
            &land_request("Karen", dec!(0.5), PlotShape::Normal),
            VALUATION_YEAR,
        )
        .expect("land estimate");

    assert_eq!(estimate.property_type, PropertyCategory::Land);
    assert_eq!(estimate.estimated_value, dec!(110000000));
    let land = estimate.breakdown.land().expect("land breakdown");
    assert_eq!(land.land_shape_multiplier, dec!(1.00));
}

#[test]
fn apartment_without_amenities_is_priced_at_base() {
    let estimate = service()
        .estimate(&apartment_request(VALUATION_YEAR - 5, &[]), VALUATION_YEAR)
        .expect("apartment estimate");

    assert_eq!(estimate.estimated_value, dec!(18000000));
    let building = estimate.breakdown.building().expect("building breakdown");
    assert_eq!(building.amenity_percent, Decimal::ZERO);
    assert_eq!(building.depreciation_percent, Decimal::ZERO);
    assert_eq!(estimate.confidence_score, Some(dec!(0.85)));
}

#[test]
fn apartment_amenities_resolve_through_aliases() {
    let estimate = service()
        .estimate(
            &apartment_request(VALUATION_YEAR - 5, &["Pool"]),
            VALUATION_YEAR,
        )
        .expect("apartment estimate");

    assert_eq!(estimate.estimated_value, dec!(18900000));
    assert_eq!(estimate.low_estimate, dec!(17010000));
    assert_eq!(estimate.high_estimate, dec!(20790000));
}

#[test]
fn house_estimate_combines_land_and_building() {
    let estimate = service()
        .estimate(
            &house_request(VALUATION_YEAR - 15, &["pool", "garage"]),
            VALUATION_YEAR,
        )
        .expect("house estimate");

    assert!(matches!(estimate.breakdown, EstimateBreakdown::House(_)));
    assert_eq!(estimate.estimated_value, dec!(96420000));
    assert_eq!(estimate.confidence_score, Some(dec!(0.86)));
}

#[test]
fn unknown_area_is_rejected_before_valuation() {
    let err = service()
        .estimate(
            &land_request("Nowhereville", dec!(1), PlotShape::Normal),
            VALUATION_YEAR,
        )
        .expect_err("unknown area");

    assert!(matches!(
        err,
        EstimateServiceError::Resolution(ResolutionError::UnknownArea(ref name)) if name == "Nowhereville"
    ));
}

#[test]
fn unknown_amenity_is_reported_by_name() {
    let err = service()
        .estimate(
            &apartment_request(VALUATION_YEAR - 5, &["jacuzzi"]),
            VALUATION_YEAR,
        )
        .expect_err("unknown amenity");

    match err {
        EstimateServiceError::Resolution(ResolutionError::UnknownAmenity(names)) => {
            assert_eq!(names, vec!["jacuzzi".to_string()]);
        }
        other => panic!("expected unknown amenity, got {other:?}"),
    }
}

#[test]
fn validation_runs_before_lookups() {
    let service = EstimateService::new(
        Arc::new(OfflineRepository),
        ValuationConfig::default(),
        ValidationPolicy::default(),
    );

    let err = service
        .estimate(&house_request(1979, &[]), VALUATION_YEAR)
        .expect_err("too classic");
    assert!(matches!(
        err,
        EstimateServiceError::Invalid(InvalidPropertyAttributes::TooClassic { .. })
    ));

    let err = service
        .estimate(&house_request(2010, &[]), VALUATION_YEAR)
        .expect_err("repository offline");
    assert!(matches!(
        err,
        EstimateServiceError::Resolution(ResolutionError::Repository(_))
    ));
}

#[test]
fn revised_formula_is_selectable() {
    let service = EstimateService::new(
        Arc::new(crate::reference::ReferenceCatalog::seeded()),
        ValuationConfig::for_revision(FormulaRevision::Revised),
        ValidationPolicy::default(),
    );

    let estimate = service
        .estimate(&apartment_request(VALUATION_YEAR - 10, &[]), VALUATION_YEAR)
        .expect("apartment estimate");

    assert_eq!(estimate.estimated_value, dec!(14400000));
    assert_eq!(estimate.low_estimate, dec!(13248000));
    assert_eq!(service.engine().config().range.low, dec!(0.92));
}
