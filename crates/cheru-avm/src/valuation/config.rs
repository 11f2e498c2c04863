use serde::{Deserialize, Serialize};

use super::amenities::AmenityPolicy;
use super::depreciation::DepreciationPolicy;
use super::range::RangeFactors;
use super::shape::{ShapeMultipliers, IRREGULAR_LAUNCH, IRREGULAR_REVISED};

/// Formula dials read by the engine. Built once at startup and shared read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValuationConfig {
    pub depreciation: DepreciationPolicy,
    pub amenities: AmenityPolicy,
    pub shapes: ShapeMultipliers,
    pub range: RangeFactors,
}

impl ValuationConfig {
    pub fn for_revision(revision: FormulaRevision) -> Self {
        match revision {
            FormulaRevision::Launch => Self {
                depreciation: DepreciationPolicy::Stepped,
                amenities: AmenityPolicy::AdditiveOfBase,
                shapes: ShapeMultipliers::CANONICAL.with_irregular(IRREGULAR_LAUNCH),
                range: RangeFactors::STANDARD,
            },
            FormulaRevision::Revised => Self {
                depreciation: DepreciationPolicy::linear(),
                amenities: AmenityPolicy::SummedPercent,
                shapes: ShapeMultipliers::CANONICAL.with_irregular(IRREGULAR_REVISED),
                range: RangeFactors::NARROW,
            },
        }
    }
}

/// The two published formula sets, kept side by side so either can be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormulaRevision {
    Launch,
    Revised,
}

impl FormulaRevision {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "launch" | "v1" => Some(Self::Launch),
            "revised" | "v2" => Some(Self::Revised),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            FormulaRevision::Launch => "launch",
            FormulaRevision::Revised => "revised",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn default_is_the_canonical_formula() {
        let config = ValuationConfig::default();
        assert_eq!(config.depreciation, DepreciationPolicy::Stepped);
        assert_eq!(config.amenities, AmenityPolicy::SummedPercent);
        assert_eq!(config.shapes.irregular, dec!(0.95));
        assert_eq!(config.range, RangeFactors::STANDARD);
    }

    #[test]
    fn revisions_differ_on_every_dial() {
        let launch = ValuationConfig::for_revision(FormulaRevision::Launch);
        let revised = ValuationConfig::for_revision(FormulaRevision::Revised);
        assert_ne!(launch.depreciation, revised.depreciation);
        assert_ne!(launch.amenities, revised.amenities);
        assert_eq!(revised.shapes.irregular, dec!(0.90));
        assert_eq!(revised.range.low, dec!(0.92));
        assert!(launch.shapes.is_ordered() && revised.shapes.is_ordered());
    }

    #[test]
    fn parses_revision_names() {
        assert_eq!(FormulaRevision::parse("LAUNCH"), Some(FormulaRevision::Launch));
        assert_eq!(FormulaRevision::parse("v2"), Some(FormulaRevision::Revised));
        assert_eq!(FormulaRevision::parse("latest"), None);
    }
}
