//! # bmicalc-core
//!
//! Core library for the bmicalc Body Mass Index calculator.
//! Computes the BMI, classifies it with sex-adjusted thresholds, derives the
//! sex-independent healthy weight range, and picks a personalized advice.
//! Raw form text goes through the [`validation`] gate before it reaches
//! [`evaluate`].

pub mod about;
pub mod advice;
pub mod classification;
pub mod constants;
pub mod evaluator;
pub mod sex;
pub mod thresholds;
pub mod validation;

// Re-exports
pub use advice::Advice;
pub use classification::{Classification, ColorTag};
pub use constants::{exit_codes, HEALTHY_BMI_MAX, HEALTHY_BMI_MIN, MAX_AGE, MIN_AGE};
pub use evaluator::{evaluate, BmiInput, BmiResult, HealthyWeightRange};
pub use sex::Sex;
pub use thresholds::Thresholds;
pub use validation::{InputError, RawForm, INVALID_INPUT_MESSAGE};

/// Validate raw form text and evaluate it in one step.
///
/// # Example
/// ```
/// use bmicalc_core::{evaluate_form, Classification, RawForm, Sex};
///
/// let form = RawForm::new("70", "1,75", "30", Some(Sex::Male));
/// let result = evaluate_form(&form).unwrap();
/// assert_eq!(result.classification, Classification::Normal);
/// assert_eq!(format!("{:.2}", result.bmi), "22.86");
/// ```
pub fn evaluate_form(form: &RawForm) -> Result<BmiResult, InputError> {
    let input = form.validate()?;
    Ok(evaluate(&input))
}
