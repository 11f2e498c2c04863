use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::ValuationError;

pub const LINEAR_ANNUAL_RATE: Decimal = dec!(0.02);
pub const LINEAR_MAX_DEPRECIATION: Decimal = dec!(0.60);

/// Maps building age to the fraction of value retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum DepreciationPolicy {
    /// Banded retention: under 10 years keeps full value, then 95%, 90%, and a floor of 85%.
    #[default]
    Stepped,
    /// `1 - min(age * annual_rate, max_depreciation)`.
    LinearCapped {
        annual_rate: Decimal,
        max_depreciation: Decimal,
    },
}

impl DepreciationPolicy {
    pub const fn linear() -> Self {
        Self::LinearCapped {
            annual_rate: LINEAR_ANNUAL_RATE,
            max_depreciation: LINEAR_MAX_DEPRECIATION,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "stepped" => Some(Self::Stepped),
            "linear" | "linear_capped" => Some(Self::linear()),
            _ => None,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            DepreciationPolicy::Stepped => "stepped",
            DepreciationPolicy::LinearCapped { .. } => "linear_capped",
        }
    }

    /// Retained-value fraction for a building of the given age.
    pub fn factor(&self, age_years: u32) -> Decimal {
        match self {
            DepreciationPolicy::Stepped => match age_years {
                0..=9 => Decimal::ONE,
                10..=19 => dec!(0.95),
                20..=29 => dec!(0.90),
                _ => dec!(0.85),
            },
            DepreciationPolicy::LinearCapped {
                annual_rate,
                max_depreciation,
            } => {
                let depreciation = (Decimal::from(age_years) * annual_rate).min(*max_depreciation);
                Decimal::ONE - depreciation
            }
        }
    }

    /// Retained-value fraction for a construction year, rejecting years after `current_year`.
    pub fn factor_for(&self, year_built: i32, current_year: i32) -> Result<Decimal, ValuationError> {
        let age = current_year
            .checked_sub(year_built)
            .ok_or(ValuationError::YearOutOfRange {
                year_built,
                current_year,
            })?;
        let age = u32::try_from(age).map_err(|_| ValuationError::YearBuiltInFuture {
            year_built,
            current_year,
        })?;
        Ok(self.factor(age))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepped_bands_match_published_schedule() {
        let policy = DepreciationPolicy::Stepped;
        assert_eq!(policy.factor(0), dec!(1.00));
        assert_eq!(policy.factor(9), dec!(1.00));
        assert_eq!(policy.factor(10), dec!(0.95));
        assert_eq!(policy.factor(19), dec!(0.95));
        assert_eq!(policy.factor(20), dec!(0.90));
        assert_eq!(policy.factor(29), dec!(0.90));
        assert_eq!(policy.factor(30), dec!(0.85));
        assert_eq!(policy.factor(120), dec!(0.85));
    }

    #[test]
    fn linear_policy_caps_at_sixty_percent() {
        let policy = DepreciationPolicy::linear();
        assert_eq!(policy.factor(0), dec!(1));
        assert_eq!(policy.factor(5), dec!(0.90));
        assert_eq!(policy.factor(29), dec!(0.42));
        assert_eq!(policy.factor(30), dec!(0.40));
        assert_eq!(policy.factor(75), dec!(0.40));
    }

    #[test]
    fn future_construction_year_is_rejected() {
        let err = DepreciationPolicy::Stepped
            .factor_for(2031, 2030)
            .expect_err("future year rejected");
        assert_eq!(
            err,
            ValuationError::YearBuiltInFuture {
                year_built: 2031,
                current_year: 2030,
            }
        );
    }

    #[test]
    fn extreme_construction_years_are_typed_errors() {
        let policy = DepreciationPolicy::Stepped;
        assert_eq!(
            policy.factor_for(i32::MIN, 2030),
            Err(ValuationError::YearOutOfRange {
                year_built: i32::MIN,
                current_year: 2030,
            })
        );
        assert!(matches!(
            policy.factor_for(i32::MAX, 2030),
            Err(ValuationError::YearBuiltInFuture { .. })
        ));
        assert_eq!(DepreciationPolicy::linear().factor_for(1, 2030), Ok(dec!(0.40)));
    }

    #[test]
    fn factors_never_increase_as_buildings_age() {
        for policy in [DepreciationPolicy::Stepped, DepreciationPolicy::linear()] {
            let mut previous = Decimal::ONE;
            for year_built in (1900..=2030).rev() {
                let factor = policy.factor_for(year_built, 2030).expect("valid year");
                assert!(
                    factor <= previous,
                    "{} factor rose at {year_built}",
                    policy.label()
                );
                assert!(factor > Decimal::ZERO && factor <= Decimal::ONE);
                previous = factor;
            }
        }
    }

    #[test]
    fn parses_policy_names() {
        assert_eq!(
            DepreciationPolicy::parse(" Stepped "),
            Some(DepreciationPolicy::Stepped)
        );
        assert_eq!(
            DepreciationPolicy::parse("linear"),
            Some(DepreciationPolicy::linear())
        );
        assert_eq!(DepreciationPolicy::parse("straight"), None);
    }
}
