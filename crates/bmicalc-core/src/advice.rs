//! Personalized advice, chosen by an ordered first-match rule list.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{ELDERLY_AGE, ELDERLY_PROTECTIVE_BMI};
use crate::sex::Sex;
use crate::thresholds::Thresholds;

/// Advice shown under the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advice {
    /// Older adults with a low BMI.
    ElderlyProtectiveWeight,
    /// Women at or above their obesity cutoff.
    FemaleBodyFat,
    /// Men at or above their obesity cutoff.
    MaleAbdominalFat,
    /// Anyone below their underweight threshold.
    NutritionConsultation,
    /// Fallback.
    HealthyLifestyle,
}

impl Advice {
    /// Advice text.
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::ElderlyProtectiveWeight => {
                "Per a la gent gran, un IMC lleugerament superior pot ser protector. Parla amb el teu metge."
            }
            Self::FemaleBodyFat => {
                "Recorda que les dones solen tenir una major proporció de greix corporal. És un bon moment per revisar hàbits."
            }
            Self::MaleAbdominalFat => {
                "L'excés de greix abdominal és un risc particular per als homes. Considera augmentar l'activitat cardiovascular."
            }
            Self::NutritionConsultation => {
                "És important assegurar una ingesta suficient de nutrients. Consulta un professional."
            }
            Self::HealthyLifestyle => {
                "Mantenir un estil de vida actiu i una dieta equilibrada és clau per a la salut a llarg termini."
            }
        }
    }
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Facts the advice rules look at.
#[derive(Debug, Clone, Copy)]
pub struct AdviceContext {
    pub bmi: f64,
    pub age_years: u32,
    pub sex: Sex,
    pub thresholds: Thresholds,
}

type Rule = (fn(&AdviceContext) -> bool, Advice);

fn elderly_low_bmi(c: &AdviceContext) -> bool {
    c.age_years > ELDERLY_AGE && c.bmi < ELDERLY_PROTECTIVE_BMI
}

fn female_obese(c: &AdviceContext) -> bool {
    c.sex == Sex::Female && c.bmi >= c.thresholds.obesity_cutoff()
}

fn male_obese(c: &AdviceContext) -> bool {
    c.sex == Sex::Male && c.bmi >= c.thresholds.obesity_cutoff()
}

fn underweight(c: &AdviceContext) -> bool {
    c.bmi < c.thresholds.underweight
}

/// Evaluated top to bottom; the first matching predicate wins.
const RULES: &[Rule] = &[
    (elderly_low_bmi, Advice::ElderlyProtectiveWeight),
    (female_obese, Advice::FemaleBodyFat),
    (male_obese, Advice::MaleAbdominalFat),
    (underweight, Advice::NutritionConsultation),
];

/// Pick the advice for the given context.
#[must_use]
pub fn select_advice(ctx: &AdviceContext) -> Advice {
    RULES
        .iter()
        .find(|(matches, _)| matches(ctx))
        .map_or(Advice::HealthyLifestyle, |&(_, advice)| advice)
}
