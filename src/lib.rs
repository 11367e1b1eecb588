//! Shared loader for the reference scenarios in `tests/testdata`.

use std::path::Path;

use bmicalc_core::validation::Field;
use bmicalc_core::{Advice, Classification, RawForm, Sex};
use serde::Deserialize;

/// Contents of `bmi_scenarios.json`.
#[derive(Debug, Deserialize)]
pub struct ScenarioFile {
    pub description: String,
    pub scenarios: Vec<Scenario>,
    pub rejected: Vec<Rejected>,
}

/// A form that must evaluate to the given display values.
#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub weight: String,
    pub height: String,
    pub age: String,
    pub sex: Sex,
    pub bmi: String,
    pub classification: Classification,
    pub advice: Advice,
    pub range_min: String,
    pub range_max: String,
}

impl Scenario {
    pub fn form(&self) -> RawForm {
        RawForm::new(
            self.weight.as_str(),
            self.height.as_str(),
            self.age.as_str(),
            Some(self.sex),
        )
    }
}

/// A form the validation gate must reject on `field`.
#[derive(Debug, Deserialize)]
pub struct Rejected {
    pub name: String,
    pub weight: String,
    pub height: String,
    pub age: String,
    pub sex: Option<Sex>,
    pub field: Field,
}

impl Rejected {
    pub fn form(&self) -> RawForm {
        RawForm::new(
            self.weight.as_str(),
            self.height.as_str(),
            self.age.as_str(),
            self.sex,
        )
    }
}

/// Load the scenario file, from the workspace root or a crate directory.
pub fn load_scenarios() -> Result<ScenarioFile, Box<dyn std::error::Error>> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let data = std::fs::read_to_string(root.join("tests/testdata/bmi_scenarios.json"))?;
    Ok(serde_json::from_str(&data)?)
}
