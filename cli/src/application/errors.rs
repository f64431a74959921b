use std::process::ExitCode;

use chefmate_core::domain::common::entities::app_errors::CoreError;
use validator::ValidationErrors;

/// Exit status for rejected input, as opposed to a failed operation.
pub const USAGE_EXIT_CODE: u8 = 2;

/// True when the command was refused because of its input, before any work was done.
pub fn is_validation_error(error: &anyhow::Error) -> bool {
    if error.downcast_ref::<ValidationErrors>().is_some() {
        return true;
    }
    error
        .downcast_ref::<CoreError>()
        .is_some_and(CoreError::is_validation)
}

/// Log a failed command and pick the process exit status for it.
pub fn report_failure(command: &str, error: &anyhow::Error) -> ExitCode {
    if is_validation_error(error) {
        tracing::warn!(command, "Rejected input: {}", error);
        eprintln!("{}", error);
        return ExitCode::from(USAGE_EXIT_CODE);
    }

    tracing::error!(command, "Command failed: {:#}", error);
    eprintln!("Error: {}", error);
    ExitCode::FAILURE
}
