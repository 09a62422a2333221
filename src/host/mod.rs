//! Invocation boundary: feeds the raw input to validation and reports the
//! outcome through exactly one host call.
mod actions;
mod console;
mod exit;

use std::{env, io, process::ExitCode};

use anyhow::Context;
use tracing::{info, warn, Instrument};

use crate::{
    cli::{HostMode, InvocationProfile, REQUIRED_FILES_INPUT},
    config::CheckerConfig,
    lib::{errors::HostError, telemetry::InvocationSpan},
    validation::{validate_required_files, ExistenceChecker},
};

pub use actions::ActionsHost;
pub use console::ConsoleHost;
pub use exit::RuntimeExit;

/// Output set when every required file exists.
pub const EXISTS_OUTPUT: &str = "exists";

/// Host-side sink for the single success output or failure message.
pub trait HostChannel {
    fn name(&self) -> &'static str;
    fn set_output(&mut self, name: &str, value: &str) -> Result<(), HostError>;
    fn set_failed(&mut self, message: &str) -> Result<(), HostError>;
}

/// Overall outcome of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed,
}

impl Verdict {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Verdict::Passed => "passed",
            Verdict::Failed => "failed",
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        match self {
            Verdict::Passed => ExitCode::SUCCESS,
            Verdict::Failed => ExitCode::FAILURE,
        }
    }
}

/// Validate `raw` and report the outcome to `host`.
///
/// `None` means the host never supplied the input. Only failures to talk to
/// the host itself are returned as errors.
pub async fn execute<H: HostChannel>(
    raw: Option<&str>,
    checker: &ExistenceChecker,
    host: &mut H,
) -> Result<Verdict, HostError> {
    let span = InvocationSpan::start(host.name());
    let (verdict, missing_files) = report(raw, checker, host)
        .instrument(span.span())
        .await?;
    span.finish(verdict.as_str(), missing_files);
    Ok(verdict)
}

async fn report<H: HostChannel>(
    raw: Option<&str>,
    checker: &ExistenceChecker,
    host: &mut H,
) -> Result<(Verdict, usize), HostError> {
    let Some(raw) = raw else {
        let error = HostError::MissingInput {
            name: REQUIRED_FILES_INPUT,
        };
        warn!(target: "file_checker::host", reason = %error, "Rejected invocation");
        host.set_failed(&error.to_string())?;
        return Ok((Verdict::Failed, 0));
    };

    let result = match validate_required_files(raw, checker).await {
        Ok(result) => result,
        Err(error) => {
            warn!(target: "file_checker::host", reason = %error, "Rejected input");
            host.set_failed(&error.to_string())?;
            return Ok((Verdict::Failed, 0));
        }
    };

    match result.failure_message() {
        None => {
            host.set_output(EXISTS_OUTPUT, "true")?;
            Ok((Verdict::Passed, 0))
        }
        Some(message) => {
            host.set_failed(&message)?;
            Ok((Verdict::Failed, result.missing_files().len()))
        }
    }
}

/// Wire profile, config, checker, and host together for the binary.
pub async fn run(profile: InvocationProfile, config: CheckerConfig) -> Result<ExitCode, RuntimeExit> {
    let base_dir = match config.checker.base_dir.clone() {
        Some(base_dir) => base_dir,
        None => env::current_dir()
            .context("failed to obtain current directory")
            .map_err(RuntimeExit::from_error)?,
    };
    let checker = ExistenceChecker::new(base_dir)
        .with_max_concurrent_probes(config.checker.max_concurrent_probes);

    info!(
        target: "file_checker::host",
        host = profile.host.as_str(),
        input_source = ?profile.input_source,
        base_dir = %checker.base_dir().display(),
        max_concurrent_probes = checker.max_concurrent_probes(),
        "Resolved invocation profile"
    );

    let raw = profile.required_files.as_deref();
    let verdict = match profile.host {
        HostMode::Actions => {
            let mut host = ActionsHost::from_env(io::stdout());
            execute(raw, &checker, &mut host).await
        }
        HostMode::Cli => {
            let format = profile.format_override.unwrap_or(config.report.format);
            let mut host = ConsoleHost::new(format, io::stdout(), io::stderr());
            execute(raw, &checker, &mut host).await
        }
    }
    .map_err(RuntimeExit::from_error)?;

    Ok(verdict.exit_code())
}
