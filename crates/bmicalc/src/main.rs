//! bmicalc — sex-adjusted BMI calculator.

use std::process::ExitCode;

use bmicalc_lib::{app, config, errors};
use tracing::Level;

fn main() -> ExitCode {
    let config = config::AppConfig::parse();

    // Initialize tracing
    let level = if config.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!("exiting with error: {err:#}");
            errors::report(&err);
            let code = errors::exit_code(&err);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
