//! Validation gate between raw form text and the evaluator.
//!
//! Form fields arrive as free text. Weight and height accept a comma as
//! decimal separator, and the age field keeps only its digits. Anything
//! missing, non-numeric, non-positive, or an age outside 18..=120 is rejected
//! with an [`InputError`] and the evaluator is never called.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{MAX_AGE, MIN_AGE};
use crate::evaluator::BmiInput;
use crate::sex::Sex;

/// Message shown to the user for any invalid input.
pub const INVALID_INPUT_MESSAGE: &str =
    "Si us plau, omple tots els camps amb valors vàlids (Edat entre 18 i 120).";

/// Form field identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Weight,
    Height,
    Age,
    Sex,
}

impl Field {
    /// Form label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Weight => "Pes (kg)",
            Self::Height => "Alçada (metres)",
            Self::Age => "Edat",
            Self::Sex => "Sexe",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a form was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("{0} is empty")]
    MissingField(Field),

    #[error("{0} is not a number: {1:?}")]
    NotANumber(Field, String),

    #[error("{0} must be greater than zero")]
    NotPositive(Field),

    #[error("age {0} is outside {min}..={max}", min = MIN_AGE, max = MAX_AGE)]
    AgeOutOfRange(u32),

    #[error("sex is not selected")]
    MissingSex,

    #[error("unknown sex {0:?}, expected male/home or female/dona")]
    UnknownSex(String),
}

impl InputError {
    /// Field the error refers to.
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::MissingField(field) | Self::NotANumber(field, _) | Self::NotPositive(field) => {
                *field
            }
            Self::AgeOutOfRange(_) => Field::Age,
            Self::MissingSex | Self::UnknownSex(_) => Field::Sex,
        }
    }

    /// Static text shown to the user, whatever the cause.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        INVALID_INPUT_MESSAGE
    }
}

/// Replace comma decimal separators with periods.
#[must_use]
pub fn normalize_decimal(text: &str) -> String {
    text.replace(',', ".")
}

/// Keep only ASCII digits.
#[must_use]
pub fn digits_only(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Unvalidated form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawForm {
    pub weight: String,
    pub height: String,
    pub age: String,
    pub sex: Option<Sex>,
}

impl RawForm {
    #[must_use]
    pub fn new(
        weight: impl Into<String>,
        height: impl Into<String>,
        age: impl Into<String>,
        sex: Option<Sex>,
    ) -> Self {
        Self {
            weight: weight.into(),
            height: height.into(),
            age: age.into(),
            sex,
        }
    }

    /// Run the validation gate.
    pub fn validate(&self) -> Result<BmiInput, InputError> {
        self.try_validate().inspect_err(|err| {
            debug!(field = %err.field(), "rejected form: {err}");
        })
    }

    fn try_validate(&self) -> Result<BmiInput, InputError> {
        let weight_kg = parse_decimal(&self.weight, Field::Weight)?;
        let height_m = parse_decimal(&self.height, Field::Height)?;
        let age_years = parse_age(&self.age)?;
        let sex = self.sex.ok_or(InputError::MissingSex)?;
        BmiInput::new(weight_kg, height_m, age_years, sex)
    }
}

fn parse_decimal(text: &str, field: Field) -> Result<f64, InputError> {
    let normalized = normalize_decimal(text.trim());
    if normalized.is_empty() {
        return Err(InputError::MissingField(field));
    }
    normalized
        .parse::<f64>()
        .map_err(|_| InputError::NotANumber(field, text.to_string()))
}

fn parse_age(text: &str) -> Result<u32, InputError> {
    let digits = digits_only(text);
    if digits.is_empty() {
        return Err(InputError::MissingField(Field::Age));
    }
    digits
        .parse::<u32>()
        .map_err(|_| InputError::NotANumber(Field::Age, text.to_string()))
}
