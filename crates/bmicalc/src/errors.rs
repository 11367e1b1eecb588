//! Error handling and exit codes.

use bmicalc_core::exit_codes;
use bmicalc_core::InputError;

/// Map an application error to its process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<InputError>().is_some() {
        exit_codes::ERROR_INVALID_INPUT
    } else {
        exit_codes::ERROR_GENERIC
    }
}

/// Report an error that has not been shown to the user yet.
///
/// Invalid input is already presented by the result presenter.
pub fn report(err: &anyhow::Error) {
    if err.downcast_ref::<InputError>().is_none() {
        bmicalc_cli::ui::print_error(&format!("{err:#}"));
    }
}
