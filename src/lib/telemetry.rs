//! Telemetry initialization and invocation span helpers.

use std::{env, time::Instant};

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

use crate::cli::HostMode;

const RUNNER_DEBUG_ENV: &str = "RUNNER_DEBUG";

/// Initialize `tracing` and format developer logs on stderr.
///
/// `RUST_LOG` always wins. Without it the Actions host follows the runner's
/// step-debug switch so `File exists: ...` diagnostics show up exactly when
/// the workflow asks for debug output.
pub fn init_tracing(host: HostMode) -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let default_directive = default_directive(host, env::var(RUNNER_DEBUG_ENV).ok().as_deref());
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_ansi(host == HostMode::Cli)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

fn default_directive(host: HostMode, runner_debug: Option<&str>) -> &'static str {
    match (host, runner_debug) {
        (HostMode::Actions, Some("1")) => "debug",
        _ => "info",
    }
}

/// Span helper to record start and finish of one validation invocation.
pub struct InvocationSpan {
    span: Span,
    started_at: Instant,
    invocation_id: Uuid,
}

impl InvocationSpan {
    /// Start an invocation span.
    pub fn start(host: &'static str) -> Self {
        let invocation_id = Uuid::new_v4();
        let span = info_span!(
            target: "file_checker::host",
            "invocation",
            %invocation_id,
            host
        );
        Self {
            span,
            started_at: Instant::now(),
            invocation_id,
        }
    }

    /// Span to instrument the invocation future with.
    pub fn span(&self) -> Span {
        self.span.clone()
    }

    /// Close the span while recording status and completion info.
    pub fn finish(self, status: &'static str, missing_files: usize) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "file_checker::host",
            invocation_id = %self.invocation_id,
            status = status,
            missing_files = missing_files,
            elapsed_ms = elapsed_ms,
            "Completed file validation"
        );
    }
}
