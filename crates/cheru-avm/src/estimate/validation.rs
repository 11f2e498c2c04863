use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::request::PropertyRequest;

pub const DEFAULT_MIN_YEAR_BUILT: i32 = 1970;
pub const DEFAULT_CLASSIC_YEAR: i32 = 1985;

const CLASSIC_MESSAGE: &str = "This property is too classic for automated estimation. \
Please contact our team for a professional valuation.";

/// Structural limits checked before any lookup or calculation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub min_year_built: i32,
    pub classic_year: i32,
    pub min_floor_area_sqm: Decimal,
    pub min_land_acres: Decimal,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            min_year_built: DEFAULT_MIN_YEAR_BUILT,
            classic_year: DEFAULT_CLASSIC_YEAR,
            min_floor_area_sqm: dec!(1),
            min_land_acres: dec!(0.01),
        }
    }
}

/// The first structural constraint a request violates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPropertyAttributes {
    #[error("area must not be blank")]
    BlankArea,
    #[error("{field} must be at least {minimum} (found {value})")]
    SizeTooSmall {
        field: &'static str,
        minimum: Decimal,
        value: Decimal,
    },
    #[error("year_built must be between {minimum} and {current_year}")]
    YearOutOfRange {
        year_built: i32,
        minimum: i32,
        current_year: i32,
    },
    #[error("{}", CLASSIC_MESSAGE)]
    TooClassic { year_built: i32, classic_year: i32 },
    #[error("bedrooms must be between 1 and 9 (found {0})")]
    Bedrooms(u8),
    #[error("floor must be between 1 and 99 (found {0})")]
    Floor(u8),
}

impl ValidationPolicy {
    pub fn validate(
        &self,
        request: &PropertyRequest,
        current_year: i32,
    ) -> Result<(), InvalidPropertyAttributes> {
        if request.area().trim().is_empty() {
            return Err(InvalidPropertyAttributes::BlankArea);
        }

        match request {
            PropertyRequest::Land(land) => {
                self.check_land(land.land_size_acres)?;
            }
            PropertyRequest::Apartment(apartment) => {
                self.check_floor_area("size_sqm", apartment.size_sqm)?;
                self.check_year(apartment.year_built, current_year)?;
                if !(1..=9).contains(&apartment.bedrooms) {
                    return Err(InvalidPropertyAttributes::Bedrooms(apartment.bedrooms));
                }
                if !(1..=99).contains(&apartment.floor) {
                    return Err(InvalidPropertyAttributes::Floor(apartment.floor));
                }
            }
            PropertyRequest::House(house) => {
                self.check_floor_area("house_size_sqm", house.house_size_sqm)?;
                self.check_land(house.land_size_acres)?;
                self.check_year(house.year_built, current_year)?;
            }
        }

        Ok(())
    }

    fn check_floor_area(
        &self,
        field: &'static str,
        value: Decimal,
    ) -> Result<(), InvalidPropertyAttributes> {
        minimum(field, self.min_floor_area_sqm, value)
    }

    fn check_land(&self, value: Decimal) -> Result<(), InvalidPropertyAttributes> {
        minimum("land_size_acres", self.min_land_acres, value)
    }

    fn check_year(&self, year_built: i32, current_year: i32) -> Result<(), InvalidPropertyAttributes> {
        if year_built > current_year || year_built < self.min_year_built {
            return Err(InvalidPropertyAttributes::YearOutOfRange {
                year_built,
                minimum: self.min_year_built,
                current_year,
            });
        }
        if year_built < self.classic_year {
            return Err(InvalidPropertyAttributes::TooClassic {
                year_built,
                classic_year: self.classic_year,
            });
        }
        Ok(())
    }
}

fn minimum(
    field: &'static str,
    minimum: Decimal,
    value: Decimal,
) -> Result<(), InvalidPropertyAttributes> {
    // Positive regardless of the configured minimum.
    if value < minimum || value <= Decimal::ZERO {
        return Err(InvalidPropertyAttributes::SizeTooSmall {
            field,
            minimum,
            value,
        });
    }
    Ok(())
}
