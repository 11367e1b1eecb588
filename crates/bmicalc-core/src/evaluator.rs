//! The BMI evaluator: a pure function from validated input to result.

use serde::Serialize;

use crate::advice::{select_advice, Advice, AdviceContext};
use crate::classification::{Classification, ColorTag};
use crate::constants::{HEALTHY_BMI_MAX, HEALTHY_BMI_MIN, MAX_AGE, MIN_AGE};
use crate::sex::Sex;
use crate::thresholds::Thresholds;
use crate::validation::{Field, InputError};

/// Validated evaluator input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiInput {
    pub weight_kg: f64,
    pub height_m: f64,
    pub age_years: u32,
    pub sex: Sex,
}

impl BmiInput {
    /// Build an input, checking every range the evaluator relies on.
    pub fn new(
        weight_kg: f64,
        height_m: f64,
        age_years: u32,
        sex: Sex,
    ) -> Result<Self, InputError> {
        if !(weight_kg.is_finite() && weight_kg > 0.0) {
            return Err(InputError::NotPositive(Field::Weight));
        }
        if !(height_m.is_finite() && height_m > 0.0) {
            return Err(InputError::NotPositive(Field::Height));
        }
        if !(MIN_AGE..=MAX_AGE).contains(&age_years) {
            return Err(InputError::AgeOutOfRange(age_years));
        }
        Ok(Self {
            weight_kg,
            height_m,
            age_years,
            sex,
        })
    }
}

/// Weight interval (kg) matching the standard healthy BMI band for a height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HealthyWeightRange {
    pub min: f64,
    pub max: f64,
}

impl HealthyWeightRange {
    /// Range for the given height, independent of sex.
    #[must_use]
    pub fn for_height(height_m: f64) -> Self {
        let h2 = height_m.powi(2);
        Self {
            min: HEALTHY_BMI_MIN * h2,
            max: HEALTHY_BMI_MAX * h2,
        }
    }

    /// Sentence shown under the result, bounds with one decimal.
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "Per a la teva alçada, un pes saludable es troba entre {:.1} kg i {:.1} kg.",
            self.min, self.max
        )
    }
}

/// Outcome of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiResult {
    pub bmi: f64,
    pub classification: Classification,
    pub color: ColorTag,
    pub healthy_weight_range: HealthyWeightRange,
    pub advice: Advice,
    /// Sex-specific thresholds the classification was made with.
    pub thresholds: Thresholds,
}

/// Evaluate a validated input.
///
/// Classification uses sex-adjusted thresholds while the healthy weight
/// range always uses the standard 18.5–24.9 band.
#[must_use]
pub fn evaluate(input: &BmiInput) -> BmiResult {
    let bmi = input.weight_kg / input.height_m.powi(2);
    let thresholds = Thresholds::for_sex(input.sex);
    let classification = thresholds.classify(bmi);
    let advice = select_advice(&AdviceContext {
        bmi,
        age_years: input.age_years,
        sex: input.sex,
        thresholds,
    });

    BmiResult {
        bmi,
        classification,
        color: classification.color(),
        healthy_weight_range: HealthyWeightRange::for_height(input.height_m),
        advice,
        thresholds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(weight_kg: f64, height_m: f64, age_years: u32, sex: Sex) -> BmiInput {
        BmiInput::new(weight_kg, height_m, age_years, sex).unwrap()
    }

    #[test]
    fn adult_male_normal() {
        let r = evaluate(&input(70.0, 1.75, 30, Sex::Male));
        assert_eq!(format!("{:.2}", r.bmi), "22.86");
        assert_eq!(r.classification, Classification::Normal);
        assert_eq!(r.color, ColorTag::Green);
        assert_eq!(r.advice, Advice::HealthyLifestyle);
    }

    #[test]
    fn elderly_female_gets_protective_advice() {
        let r = evaluate(&input(50.0, 1.60, 70, Sex::Female));
        assert_eq!(format!("{:.2}", r.bmi), "19.53");
        assert_eq!(r.classification, Classification::Normal);
        assert_eq!(r.advice, Advice::ElderlyProtectiveWeight);
    }

    #[test]
    fn obese_male_gets_abdominal_advice() {
        let r = evaluate(&input(100.0, 1.70, 40, Sex::Male));
        assert_eq!(format!("{:.2}", r.bmi), "34.60");
        assert_eq!(r.classification, Classification::Obese);
        assert_eq!(r.color, ColorTag::Red);
        assert_eq!(r.advice, Advice::MaleAbdominalFat);
    }

    #[test]
    fn underweight_female() {
        let r = evaluate(&input(45.0, 1.65, 25, Sex::Female));
        assert_eq!(r.classification, Classification::Underweight);
        assert_eq!(r.color, ColorTag::LightBlue);
        assert_eq!(r.advice, Advice::NutritionConsultation);
    }

    #[test]
    fn bmi_matches_formula() {
        let r = evaluate(&input(82.5, 1.83, 45, Sex::Male));
        assert!((r.bmi - 82.5 / (1.83 * 1.83)).abs() < 1e-12);
    }

    #[test]
    fn healthy_range_ignores_sex() {
        let male = evaluate(&input(60.0, 1.70, 30, Sex::Male));
        let female = evaluate(&input(60.0, 1.70, 30, Sex::Female));
        assert_eq!(male.healthy_weight_range, female.healthy_weight_range);
        assert!((male.healthy_weight_range.min - 18.5 * 1.70 * 1.70).abs() < 1e-9);
        assert!((male.healthy_weight_range.max - 24.9 * 1.70 * 1.70).abs() < 1e-9);
    }

    #[test]
    fn healthy_range_display_precision() {
        let range = HealthyWeightRange::for_height(1.75);
        assert_eq!(format!("{:.1}", range.min), "56.7");
        assert_eq!(format!("{:.1}", range.max), "76.3");
        assert_eq!(
            range.describe(),
            "Per a la teva alçada, un pes saludable es troba entre 56.7 kg i 76.3 kg."
        );
    }

    #[test]
    fn result_carries_thresholds() {
        let r = evaluate(&input(60.0, 1.70, 30, Sex::Female));
        assert_eq!(r.thresholds, Thresholds::FEMALE);
    }

    #[test]
    fn repeated_calls_identical() {
        let i = input(77.7, 1.81, 52, Sex::Female);
        assert_eq!(evaluate(&i), evaluate(&i));
    }

    #[test]
    fn new_rejects_bad_ranges() {
        assert_eq!(
            BmiInput::new(0.0, 1.7, 30, Sex::Male),
            Err(InputError::NotPositive(Field::Weight))
        );
        assert_eq!(
            BmiInput::new(70.0, -1.0, 30, Sex::Male),
            Err(InputError::NotPositive(Field::Height))
        );
        assert_eq!(
            BmiInput::new(f64::NAN, 1.7, 30, Sex::Male),
            Err(InputError::NotPositive(Field::Weight))
        );
        assert_eq!(
            BmiInput::new(70.0, 1.7, 17, Sex::Male),
            Err(InputError::AgeOutOfRange(17))
        );
        assert_eq!(
            BmiInput::new(70.0, 1.7, 121, Sex::Male),
            Err(InputError::AgeOutOfRange(121))
        );
        assert!(BmiInput::new(70.0, 1.7, 18, Sex::Male).is_ok());
        assert!(BmiInput::new(70.0, 1.7, 120, Sex::Male).is_ok());
    }
}
