//! CLI output formatting.

use serde::Serialize;

use bmicalc_core::{Advice, BmiInput, BmiResult, Classification, HealthyWeightRange};

/// Format a BMI for display (two decimals).
#[must_use]
pub fn format_bmi(bmi: f64) -> String {
    format!("{bmi:.2}")
}

/// Sentence describing the healthy weight range (one decimal).
#[must_use]
pub fn healthy_range_message(range: &HealthyWeightRange) -> String {
    range.describe()
}

/// Machine-readable report of one evaluation.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub input: &'a BmiInput,
    pub bmi: f64,
    pub bmi_display: String,
    pub classification: Classification,
    pub label: &'static str,
    pub color: String,
    pub healthy_weight_range: HealthyWeightRange,
    pub healthy_range_message: String,
    pub advice: Advice,
    pub advice_text: &'static str,
}

impl<'a> JsonReport<'a> {
    #[must_use]
    pub fn new(input: &'a BmiInput, result: &BmiResult) -> Self {
        Self {
            input,
            bmi: result.bmi,
            bmi_display: format_bmi(result.bmi),
            classification: result.classification,
            label: result.classification.label(),
            color: result.color.hex(),
            healthy_weight_range: result.healthy_weight_range,
            healthy_range_message: healthy_range_message(&result.healthy_weight_range),
            advice: result.advice,
            advice_text: result.advice.text(),
        }
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the report cannot be encoded.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
