//! Biological sex selector used for threshold and advice selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validation::InputError;

/// Sex of the person being evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Both variants, in the order the form shows them.
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    /// Form label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Home",
            Self::Female => "Dona",
        }
    }

    /// The other variant.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Male => Self::Female,
            Self::Female => Self::Male,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sex {
    type Err = InputError;

    /// Accepts English and Catalan spellings, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "home" | "h" => Ok(Self::Male),
            "female" | "f" | "dona" | "d" => Ok(Self::Female),
            "" => Err(InputError::MissingSex),
            other => Err(InputError::UnknownSex(other.to_string())),
        }
    }
}
