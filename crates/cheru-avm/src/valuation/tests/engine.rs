use rust_decimal_macros::dec;

use super::common::*;
use crate::valuation::{
    EstimateBreakdown, FormulaRevision, LandSpec, PlotShape, PropertyCategory, ValuationConfig,
    ValuationEngine, ValuationSubject,
};

#[test]
fn appraise_land_builds_full_estimate() {
    let estimate = engine()
        .appraise(
            &karen(),
            &ValuationSubject::Land(half_acre(PlotShape::Normal)),
            VALUATION_YEAR,
        )
        .expect("estimate");

    assert_eq!(estimate.property_type, PropertyCategory::Land);
    assert_eq!(estimate.area, "Karen");
    assert_eq!(estimate.estimated_value, dec!(110000000));
    assert_eq!(estimate.low_estimate, dec!(99000000));
    assert_eq!(estimate.high_estimate, dec!(121000000));
    assert_eq!(estimate.confidence_score, Some(dec!(0.78)));
    assert!(matches!(estimate.breakdown, EstimateBreakdown::Land(_)));
    assert!(estimate.breakdown.base_price_per_sqm().is_none());
}

#[test]
fn appraise_apartment_counts_amenities_toward_confidence() {
    let amenities = apartment_amenities();
    let estimate = engine()
        .appraise(
            &karen(),
            &ValuationSubject::Apartment(building(dec!(100), 5, &amenities)),
            VALUATION_YEAR,
        )
        .expect("estimate");

    assert_eq!(estimate.estimated_value, dec!(18900000));
    assert_eq!(estimate.low_estimate, dec!(17010000));
    assert_eq!(estimate.high_estimate, dec!(20790000));
    assert_eq!(estimate.confidence_score, Some(dec!(0.89)));
    assert_eq!(estimate.breakdown.base_price_per_sqm(), Some(dec!(180000)));
}

#[test]
fn appraise_house_exposes_both_components() {
    let amenities = house_amenities();
    let estimate = engine()
        .appraise(
            &karen(),
            &ValuationSubject::House {
                land: LandSpec {
                    size_acres: dec!(0.25),
                    plot_shape: PlotShape::Corner,
                },
                building: building(dec!(200), 3, &amenities),
            },
            VALUATION_YEAR,
        )
        .expect("estimate");

    let land = estimate.breakdown.land().expect("land component");
    let building = estimate.breakdown.building().expect("building component");
    assert_eq!(land.land_final_value, dec!(57750000));
    assert_eq!(building.building_value_after_amenities, dec!(43600000));
    assert_eq!(estimate.estimated_value, dec!(101350000));
    assert_eq!(estimate.confidence_score, Some(dec!(0.86)));
}

#[test]
fn appraisal_is_deterministic() {
    let engine = ValuationEngine::new(ValuationConfig::for_revision(FormulaRevision::Revised));
    let amenities = house_amenities();
    let subject = ValuationSubject::House {
        land: half_acre(PlotShape::Irregular),
        building: building(dec!(180), 22, &amenities),
    };

    let first = engine.appraise(&kilimani(), &subject, VALUATION_YEAR).expect("first");
    for _ in 0..10 {
        let again = engine.appraise(&kilimani(), &subject, VALUATION_YEAR).expect("again");
        assert_eq!(first, again);
    }
}

#[test]
fn revised_formula_uses_linear_depreciation_and_narrow_band() {
    let engine = ValuationEngine::new(ValuationConfig::for_revision(FormulaRevision::Revised));
    let amenities = vec![amenity(
        "lift",
        crate::valuation::BuildingKind::Apartment,
        dec!(0.03),
    )];
    let estimate = engine
        .appraise(
            &kilimani(),
            &ValuationSubject::Apartment(building(dec!(80), 10, &amenities)),
            VALUATION_YEAR,
        )
        .expect("estimate");

    let building = estimate.breakdown.building().expect("building");
    assert_eq!(building.depreciation_percent, dec!(0.20));
    assert_eq!(building.building_value_before_amenities, dec!(14080000));
    assert_eq!(estimate.estimated_value, dec!(14502400));
    assert_eq!(estimate.low_estimate, dec!(13342208));
}

#[test]
fn range_always_contains_the_estimate() {
    for revision in [FormulaRevision::Launch, FormulaRevision::Revised] {
        let engine = ValuationEngine::new(ValuationConfig::for_revision(revision));
        for shape in PlotShape::ordered() {
            let estimate = engine
                .appraise(&karen(), &ValuationSubject::Land(half_acre(shape)), VALUATION_YEAR)
                .expect("estimate");
            assert!(estimate.low_estimate <= estimate.estimated_value);
            assert!(estimate.estimated_value <= estimate.high_estimate);
        }
    }
}
