//! Constants for BMI thresholds, accepted input ranges, and exit codes.

/// Lower bound of the standard healthy BMI interval.
pub const HEALTHY_BMI_MIN: f64 = 18.5;

/// Upper bound of the standard healthy BMI interval.
pub const HEALTHY_BMI_MAX: f64 = 24.9;

/// Youngest accepted age, inclusive.
pub const MIN_AGE: u32 = 18;

/// Oldest accepted age, inclusive.
pub const MAX_AGE: u32 = 120;

/// Above this age a low BMI triggers the elderly advice.
pub const ELDERLY_AGE: u32 = 65;

/// BMI below which the elderly advice applies.
pub const ELDERLY_PROTECTIVE_BMI: f64 = 22.0;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (terminal, I/O, serialization).
    pub const ERROR_GENERIC: i32 = 1;
    /// Missing or malformed weight, height, age, or sex.
    pub const ERROR_INVALID_INPUT: i32 = 2;
}
