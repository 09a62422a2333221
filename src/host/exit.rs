use std::{io, process::ExitCode};

use anyhow::Error;
use tracing::warn;

use crate::cli::HostMode;

use super::{ActionsHost, HostChannel};

/// Bundles a collaborator-level error message with an exit code.
///
/// Used for failures outside the validation contract: unreadable config,
/// unusable working directory, a host channel that cannot be written.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:#}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }

    /// Report on stderr and, on the Actions host, also fail the step with an
    /// `::error::` annotation.
    pub fn report_for(self, host: HostMode) -> ExitCode {
        if host == HostMode::Actions {
            self.annotate(&mut ActionsHost::new(io::stdout(), None));
        }
        self.report()
    }

    /// Hand the message to `host` as the step failure.
    pub fn annotate<H: HostChannel>(&self, host: &mut H) {
        if let Err(err) = host.set_failed(&self.message) {
            warn!(
                target: "file_checker::host",
                host = host.name(),
                reason = %err,
                "Could not annotate runtime failure"
            );
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}
