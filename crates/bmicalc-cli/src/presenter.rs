//! CLI result presenter.

use std::io::{self, Write};

use bmicalc_core::about::{about_text, ABOUT_TITLE};
use bmicalc_core::{BmiInput, BmiResult, Classification, InputError, Thresholds};
use tracing::debug;

use crate::output::{format_bmi, healthy_range_message, JsonReport};
use crate::ui;

/// How a result is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable report.
    #[default]
    Pretty,
    /// BMI value only.
    Quiet,
    /// Pretty-printed JSON report.
    Json,
}

/// Presents evaluation outcomes to the user.
pub trait ResultPresenter {
    /// Write a successful evaluation.
    fn present_result(
        &self,
        out: &mut dyn Write,
        input: &BmiInput,
        result: &BmiResult,
    ) -> io::Result<()>;

    /// Report a rejected form.
    fn present_error(&self, error: &InputError);
}

/// CLI result presenter.
pub struct CLIResultPresenter {
    mode: OutputMode,
    details: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(mode: OutputMode, details: bool) -> Self {
        Self { mode, details }
    }

    fn write_pretty(
        &self,
        out: &mut dyn Write,
        input: &BmiInput,
        result: &BmiResult,
    ) -> io::Result<()> {
        writeln!(out, "{}", ui::header("Resultat"))?;
        writeln!(
            out,
            "El teu IMC és {}",
            ui::paint(&format_bmi(result.bmi), result.color)
        )?;
        writeln!(
            out,
            "{}",
            ui::paint(result.classification.label(), result.color)
        )?;
        writeln!(out)?;
        writeln!(out, "{}", ui::section("Rang de Pes Saludable Estàndard"))?;
        writeln!(out, "{}", healthy_range_message(&result.healthy_weight_range))?;
        writeln!(out)?;
        writeln!(out, "{}", ui::section("Consell Personalitzat"))?;
        writeln!(out, "{}", result.advice.text())?;

        if self.details {
            writeln!(out)?;
            write_thresholds(out, input, &result.thresholds)?;
        }
        Ok(())
    }
}

fn write_thresholds(out: &mut dyn Write, input: &BmiInput, t: &Thresholds) -> io::Result<()> {
    writeln!(out, "{}", ui::section(&format!("Llindars ({})", input.sex)))?;
    let rows = [
        (Classification::Underweight, "<", t.underweight),
        (Classification::Normal, "<", t.normal),
        (Classification::Overweight, "<", t.overweight),
        (Classification::Obese, ">=", t.overweight),
    ];
    for (class, op, bound) in rows {
        writeln!(out, "  {:<16} {op:>2} {bound:.1}", class.label())?;
    }
    Ok(())
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(
        &self,
        out: &mut dyn Write,
        input: &BmiInput,
        result: &BmiResult,
    ) -> io::Result<()> {
        debug!(mode = ?self.mode, details = self.details, "presenting result");
        match self.mode {
            OutputMode::Quiet => writeln!(out, "{}", format_bmi(result.bmi)),
            OutputMode::Json => {
                let json = JsonReport::new(input, result)
                    .to_json()
                    .map_err(io::Error::other)?;
                writeln!(out, "{json}")
            }
            OutputMode::Pretty => self.write_pretty(out, input, result),
        }
    }

    fn present_error(&self, error: &InputError) {
        ui::print_error(error.user_message());
        if self.details {
            eprintln!("  ({error})");
        }
    }
}

/// Write the "what is BMI" explanation.
pub fn present_about(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", ui::header(ABOUT_TITLE))?;
    writeln!(out, "{}", about_text())
}
