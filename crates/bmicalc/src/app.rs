//! Application entry point and dispatch.

use std::io::{self, Write};

use anyhow::{Context, Result};
use bmicalc_cli::presenter::present_about;
use bmicalc_cli::{CLIResultPresenter, ResultPresenter};
use bmicalc_core::{evaluate, RawForm};
use bmicalc_tui::TuiApp;
use tracing::{debug, info};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        bmicalc_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    if config.info {
        let mut stdout = io::stdout().lock();
        present_about(&mut stdout)?;
        return Ok(stdout.flush()?);
    }

    let presenter = CLIResultPresenter::new(config.output_mode(), config.details);
    let form = config.form().inspect_err(|err| presenter.present_error(err))?;

    // Handle TUI mode
    if config.tui {
        return run_tui(&form);
    }

    // CLI mode
    run_cli(&form, &presenter)
}

fn run_cli(form: &RawForm, presenter: &dyn ResultPresenter) -> Result<()> {
    debug!(?form, "evaluating form from flags");
    let input = form
        .validate()
        .inspect_err(|err| presenter.present_error(err))?;
    let result = evaluate(&input);
    info!(
        bmi = result.bmi,
        classification = ?result.classification,
        advice = ?result.advice,
        "evaluated"
    );

    let mut stdout = io::stdout().lock();
    presenter
        .present_result(&mut stdout, &input, &result)
        .context("failed to write result")?;
    stdout.flush()?;
    Ok(())
}

fn run_tui(form: &RawForm) -> Result<()> {
    debug!("starting TUI");
    let mut app = TuiApp::new().with_form(form);
    app.run().context("TUI error")?;
    Ok(())
}
