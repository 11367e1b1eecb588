//! Property-based tests for the BMI evaluator.
//!
//! These tests exercise `evaluate` directly with generated inputs, without
//! going through the text validation gate.

use proptest::prelude::*;

use bmicalc_core::{
    evaluate, Advice, BmiInput, Classification, HealthyWeightRange, Sex, Thresholds,
    HEALTHY_BMI_MAX, HEALTHY_BMI_MIN,
};

fn sex_strategy() -> impl Strategy<Value = Sex> {
    prop_oneof![Just(Sex::Male), Just(Sex::Female)]
}

fn input_strategy() -> impl Strategy<Value = BmiInput> {
    (20.0f64..250.0, 1.2f64..2.3, 18u32..=120, sex_strategy()).prop_map(
        |(weight_kg, height_m, age_years, sex)| {
            BmiInput::new(weight_kg, height_m, age_years, sex).unwrap()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The BMI is weight over height squared.
    #[test]
    fn bmi_is_weight_over_height_squared(input in input_strategy()) {
        let result = evaluate(&input);
        let expected = input.weight_kg / (input.height_m * input.height_m);
        prop_assert!((result.bmi - expected).abs() < 1e-9);
    }

    /// The healthy range depends only on height.
    #[test]
    fn healthy_range_independent_of_sex(input in input_strategy()) {
        let male = evaluate(&BmiInput { sex: Sex::Male, ..input });
        let female = evaluate(&BmiInput { sex: Sex::Female, ..input });
        prop_assert_eq!(male.healthy_weight_range, female.healthy_weight_range);

        let h2 = input.height_m * input.height_m;
        let range = male.healthy_weight_range;
        prop_assert!((range.min - HEALTHY_BMI_MIN * h2).abs() < 1e-9);
        prop_assert!((range.max - HEALTHY_BMI_MAX * h2).abs() < 1e-9);
    }

    /// Classification agrees with the sex-specific half-open bounds.
    #[test]
    fn classification_matches_bounds(input in input_strategy()) {
        let result = evaluate(&input);
        let t = Thresholds::for_sex(input.sex);
        let expected = match result.bmi {
            b if b < t.underweight => Classification::Underweight,
            b if b < t.normal => Classification::Normal,
            b if b < t.overweight => Classification::Overweight,
            _ => Classification::Obese,
        };
        prop_assert_eq!(result.classification, expected);
        prop_assert_eq!(result.color, expected.color());
    }

    /// Obese adults always get the sex-specific advice.
    #[test]
    fn obese_advice_by_sex(input in input_strategy()) {
        let result = evaluate(&input);
        if result.classification == Classification::Obese {
            let expected = match input.sex {
                Sex::Male => Advice::MaleAbdominalFat,
                Sex::Female => Advice::FemaleBodyFat,
            };
            prop_assert_eq!(result.advice, expected);
        }
    }

    /// Over-65s with a BMI under 22 always get the elderly advice.
    #[test]
    fn elderly_rule_has_priority(input in input_strategy()) {
        let result = evaluate(&input);
        if input.age_years > 65 && result.bmi < 22.0 {
            prop_assert_eq!(result.advice, Advice::ElderlyProtectiveWeight);
        }
    }

    /// Evaluation is deterministic.
    #[test]
    fn evaluation_is_deterministic(input in input_strategy()) {
        prop_assert_eq!(evaluate(&input), evaluate(&input));
    }

    /// A weight inside the healthy range gives a BMI inside the standard band.
    #[test]
    fn healthy_weight_gives_standard_bmi(height_m in 1.2f64..2.3, t in 0.0f64..=1.0) {
        let range = HealthyWeightRange::for_height(height_m);
        let weight_kg = range.min + t * (range.max - range.min);
        let input = BmiInput::new(weight_kg, height_m, 40, Sex::Male).unwrap();
        let bmi = evaluate(&input).bmi;
        prop_assert!(bmi >= HEALTHY_BMI_MIN - 1e-9 && bmi <= HEALTHY_BMI_MAX + 1e-9);
    }
}

/// The three reference scenarios.
#[test]
fn reference_scenarios() {
    let cases = [
        (70.0, 1.75, 30, Sex::Male, "22.86", Classification::Normal, Advice::HealthyLifestyle),
        (
            50.0,
            1.60,
            70,
            Sex::Female,
            "19.53",
            Classification::Normal,
            Advice::ElderlyProtectiveWeight,
        ),
        (
            100.0,
            1.70,
            40,
            Sex::Male,
            "34.60",
            Classification::Obese,
            Advice::MaleAbdominalFat,
        ),
    ];

    for (weight, height, age, sex, bmi, classification, advice) in cases {
        let result = evaluate(&BmiInput::new(weight, height, age, sex).unwrap());
        assert_eq!(format!("{:.2}", result.bmi), bmi);
        assert_eq!(result.classification, classification);
        assert_eq!(result.advice, advice);
    }
}
