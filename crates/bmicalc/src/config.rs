//! Application configuration from CLI flags and environment.

use bmicalc_cli::OutputMode;
use bmicalc_core::{InputError, RawForm, Sex};
use clap::Parser;

/// bmicalc — BMI calculator with sex-adjusted classification and advice.
#[derive(Parser, Debug)]
#[command(name = "bmicalc", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Weight in kilograms (a comma is accepted as decimal separator).
    #[arg(short, long, env = "BMICALC_WEIGHT")]
    pub weight: Option<String>,

    /// Height in metres (a comma is accepted as decimal separator).
    #[arg(short = 'H', long, env = "BMICALC_HEIGHT")]
    pub height: Option<String>,

    /// Age in whole years, 18 to 120.
    #[arg(short, long, env = "BMICALC_AGE")]
    pub age: Option<String>,

    /// Sex: male/home or female/dona.
    #[arg(short, long, env = "BMICALC_SEX")]
    pub sex: Option<String>,

    /// Print the result as a JSON report.
    #[arg(short, long, conflicts_with = "quiet")]
    pub json: bool,

    /// Quiet mode (only output the BMI).
    #[arg(short, long)]
    pub quiet: bool,

    /// Show the thresholds used for the classification.
    #[arg(short, long)]
    pub details: bool,

    /// Verbose output (debug logging).
    #[arg(short, long)]
    pub verbose: bool,

    /// Explain what BMI is and exit.
    #[arg(long)]
    pub info: bool,

    /// Launch interactive TUI.
    #[arg(long)]
    pub tui: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Output mode selected by the flags.
    #[must_use]
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Pretty
        }
    }

    /// Parsed sex flag, `None` when absent.
    pub fn parsed_sex(&self) -> Result<Option<Sex>, InputError> {
        self.sex.as_deref().map(str::parse).transpose()
    }

    /// Build the raw form from the flags.
    pub fn form(&self) -> Result<RawForm, InputError> {
        Ok(RawForm::new(
            self.weight.clone().unwrap_or_default(),
            self.height.clone().unwrap_or_default(),
            self.age.clone().unwrap_or_default(),
            self.parsed_sex()?,
        ))
    }
}
