use fileops_core::{logging, FileOpsError};

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Log to the state dir when possible; stderr otherwise.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable: {:#}", err);
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("fileops error: {:#}", err);
        let code = err
            .downcast_ref::<FileOpsError>()
            .map(FileOpsError::status_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}
