use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::valuation::{AmenityFactor, AreaPricing, BuildingKind};

// name, land per acre, apartment per sqm, house per sqm
const DEFAULT_AREAS: &[(&str, Decimal, Decimal, Decimal)] = &[
    ("Karen", dec!(220000000), dec!(180000), dec!(200000)),
    ("Kilimani", dec!(300000000), dec!(220000), dec!(210000)),
    ("Kileleshwa", dec!(280000000), dec!(210000), dec!(200000)),
    ("Runda", dec!(260000000), dec!(190000), dec!(210000)),
    ("Lavington", dec!(240000000), dec!(200000), dec!(205000)),
    ("Westlands", dec!(320000000), dec!(240000), dec!(220000)),
    ("Muthaiga", dec!(350000000), dec!(230000), dec!(230000)),
    ("Gigiri", dec!(270000000), dec!(210000), dec!(215000)),
    ("Riverside", dec!(310000000), dec!(225000), dec!(215000)),
    ("Nyari", dec!(250000000), dec!(195000), dec!(205000)),
];

const DEFAULT_AMENITIES: &[(&str, BuildingKind, Decimal)] = &[
    ("lift", BuildingKind::Apartment, dec!(0.03)),
    ("pool", BuildingKind::Apartment, dec!(0.05)),
    ("gym", BuildingKind::Apartment, dec!(0.03)),
    ("backup_generator", BuildingKind::Apartment, dec!(0.025)),
    ("parking", BuildingKind::Apartment, dec!(0.02)),
    ("balcony", BuildingKind::Apartment, dec!(0.015)),
    ("security", BuildingKind::Apartment, dec!(0.02)),
    ("pool", BuildingKind::House, dec!(0.06)),
    ("gym", BuildingKind::House, dec!(0.03)),
    ("garage", BuildingKind::House, dec!(0.03)),
    ("solar", BuildingKind::House, dec!(0.02)),
    ("garden", BuildingKind::House, dec!(0.03)),
    ("security", BuildingKind::House, dec!(0.02)),
    ("staff_quarters", BuildingKind::House, dec!(0.04)),
];

pub(crate) fn default_areas() -> impl Iterator<Item = AreaPricing> {
    DEFAULT_AREAS
        .iter()
        .map(|(name, land, apartment, house)| AreaPricing {
            name: (*name).to_string(),
            land_price_per_acre: *land,
            apartment_price_per_sqm: *apartment,
            house_price_per_sqm: *house,
        })
}

pub(crate) fn default_amenities() -> impl Iterator<Item = AmenityFactor> {
    DEFAULT_AMENITIES
        .iter()
        .map(|(name, kind, uplift)| AmenityFactor {
            name: (*name).to_string(),
            kind: *kind,
            uplift_percent: *uplift,
        })
}
