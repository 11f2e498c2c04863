use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::domain::PlotShape;

pub const IRREGULAR_LAUNCH: Decimal = dec!(0.95);
pub const IRREGULAR_REVISED: Decimal = dec!(0.90);

/// Land-value multiplier per plot shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeMultipliers {
    pub normal: Decimal,
    pub corner: Decimal,
    pub irregular: Decimal,
}

impl ShapeMultipliers {
    pub const CANONICAL: Self = Self {
        normal: dec!(1.00),
        corner: dec!(1.05),
        irregular: IRREGULAR_LAUNCH,
    };

    pub const fn with_irregular(self, irregular: Decimal) -> Self {
        Self { irregular, ..self }
    }

    pub fn multiplier(&self, shape: PlotShape) -> Decimal {
        match shape {
            PlotShape::Normal => self.normal,
            PlotShape::Corner => self.corner,
            PlotShape::Irregular => self.irregular,
        }
    }

    /// `irregular <= normal <= corner`, all positive.
    pub fn is_ordered(&self) -> bool {
        self.irregular > Decimal::ZERO && self.irregular <= self.normal && self.normal <= self.corner
    }
}

impl Default for ShapeMultipliers {
    fn default() -> Self {
        Self::CANONICAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_table_values() {
        let table = ShapeMultipliers::CANONICAL;
        assert_eq!(table.multiplier(PlotShape::Normal), dec!(1.00));
        assert_eq!(table.multiplier(PlotShape::Corner), dec!(1.05));
        assert_eq!(table.multiplier(PlotShape::Irregular), dec!(0.95));
    }

    #[test]
    fn multipliers_follow_shape_ordering() {
        for table in [
            ShapeMultipliers::CANONICAL,
            ShapeMultipliers::CANONICAL.with_irregular(IRREGULAR_REVISED),
        ] {
            assert!(table.is_ordered());
            let values = PlotShape::ordered().map(|shape| table.multiplier(shape));
            assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
        }
    }

    #[test]
    fn rejects_inverted_tables() {
        let inverted = ShapeMultipliers::CANONICAL.with_irregular(dec!(1.10));
        assert!(!inverted.is_ordered());
    }
}
