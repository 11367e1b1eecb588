//! BMI categories and their display color tags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// BMI category, after sex-adjusted thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl Classification {
    /// Display label shown under the BMI value.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Pes insuficient",
            Self::Normal => "Pes normal",
            Self::Overweight => "Sobrepès",
            Self::Obese => "Obesitat",
        }
    }

    /// Color tag associated with the bracket.
    #[must_use]
    pub fn color(self) -> ColorTag {
        match self {
            Self::Underweight => ColorTag::LightBlue,
            Self::Normal => ColorTag::Green,
            Self::Overweight => ColorTag::Amber,
            Self::Obese => ColorTag::Red,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Presentation-neutral color tag; front-ends map it to their own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTag {
    LightBlue,
    Green,
    Amber,
    Red,
}

impl ColorTag {
    /// RGB components.
    #[must_use]
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::LightBlue => (0xAD, 0xD8, 0xE6), // #ADD8E6
            Self::Green => (0x8B, 0xC3, 0x4A),     // #8BC34A
            Self::Amber => (0xFF, 0xC1, 0x07),     // #FFC107
            Self::Red => (0xF4, 0x43, 0x36),       // #F44336
        }
    }

    /// `#RRGGBB` form.
    #[must_use]
    pub fn hex(self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}
