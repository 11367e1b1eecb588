//! Sex-adjusted classification thresholds.

use serde::Serialize;

use crate::classification::Classification;
use crate::sex::Sex;

/// Upper bounds (exclusive) of the first three BMI brackets.
///
/// A BMI is `Underweight` below `underweight`, `Normal` below `normal`,
/// `Overweight` below `overweight`, and `Obese` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    pub underweight: f64,
    pub normal: f64,
    pub overweight: f64,
}

impl Thresholds {
    /// Thresholds for men (the standard WHO cut-offs).
    pub const MALE: Self = Self {
        underweight: 18.5,
        normal: 24.9,
        overweight: 29.9,
    };

    /// Thresholds for women, shifted slightly upward.
    pub const FEMALE: Self = Self {
        underweight: 19.0,
        normal: 25.9,
        overweight: 30.9,
    };

    /// Select the thresholds for the given sex.
    #[must_use]
    pub fn for_sex(sex: Sex) -> Self {
        match sex {
            Sex::Male => Self::MALE,
            Sex::Female => Self::FEMALE,
        }
    }

    /// Classify a BMI. Bounds are half-open and checked in order.
    #[must_use]
    pub fn classify(&self, bmi: f64) -> Classification {
        if bmi < self.underweight {
            Classification::Underweight
        } else if bmi < self.normal {
            Classification::Normal
        } else if bmi < self.overweight {
            Classification::Overweight
        } else {
            Classification::Obese
        }
    }

    /// BMI from which the obese bracket starts.
    #[must_use]
    pub fn obesity_cutoff(&self) -> f64 {
        self.overweight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_by_sex() {
        assert_eq!(Thresholds::for_sex(Sex::Male), Thresholds::MALE);
        assert_eq!(Thresholds::for_sex(Sex::Female), Thresholds::FEMALE);
    }

    #[test]
    fn male_boundaries_half_open() {
        let t = Thresholds::MALE;
        assert_eq!(t.classify(18.49), Classification::Underweight);
        assert_eq!(t.classify(18.5), Classification::Normal);
        assert_eq!(t.classify(24.89), Classification::Normal);
        assert_eq!(t.classify(24.9), Classification::Overweight);
        assert_eq!(t.classify(29.89), Classification::Overweight);
        assert_eq!(t.classify(29.9), Classification::Obese);
    }

    #[test]
    fn female_boundaries_half_open() {
        let t = Thresholds::FEMALE;
        assert_eq!(t.classify(18.9), Classification::Underweight);
        assert_eq!(t.classify(19.0), Classification::Normal);
        assert_eq!(t.classify(25.0), Classification::Normal);
        assert_eq!(t.classify(25.9), Classification::Overweight);
        assert_eq!(t.classify(30.9), Classification::Obese);
    }

    #[test]
    fn same_bmi_differs_by_sex() {
        // 18.7 is normal for a man but underweight for a woman.
        assert_eq!(Thresholds::MALE.classify(18.7), Classification::Normal);
        assert_eq!(
            Thresholds::FEMALE.classify(18.7),
            Classification::Underweight
        );
        // 30.0 is obese for a man but overweight for a woman.
        assert_eq!(Thresholds::MALE.classify(30.0), Classification::Obese);
        assert_eq!(
            Thresholds::FEMALE.classify(30.0),
            Classification::Overweight
        );
    }

    #[test]
    fn extreme_values() {
        assert_eq!(Thresholds::MALE.classify(0.0), Classification::Underweight);
        assert_eq!(Thresholds::MALE.classify(1e9), Classification::Obese);
    }

    #[test]
    fn obesity_cutoff_is_last_bound() {
        assert!((Thresholds::MALE.obesity_cutoff() - 29.9).abs() < f64::EPSILON);
        assert!((Thresholds::FEMALE.obesity_cutoff() - 30.9).abs() < f64::EPSILON);
    }
}
