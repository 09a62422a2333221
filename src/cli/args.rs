//! CLI argument definitions and `InvocationProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::ReportFormat;

use super::{
    resolve_config_location, resolve_host_mode, resolve_required_files, HostMode,
    InvocationProfile,
};

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Verify that every file in a comma-separated list exists",
    long_about = None,
    after_help = "Without REQUIRED_FILES the list is read from INPUT_REQUIRED-FILES, as set by the GitHub Actions runner."
)]
pub struct InvocationArgs {
    /// Comma-separated list of files to check, e.g. `README.md,LICENSE`.
    #[arg(value_name = "REQUIRED_FILES")]
    pub required_files: Option<String>,
    /// Report to a plain terminal or as a GitHub Actions step (auto-detected).
    #[arg(long, value_enum)]
    pub host: Option<HostMode>,
    /// Path to file-checker.toml (overrides FILE_CHECKER_CONFIG).
    #[arg(long = "config")]
    pub config_override: Option<PathBuf>,
    /// Output format for the cli host (overrides report.format).
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,
}

impl InvocationArgs {
    /// Build an `InvocationProfile` from CLI args and environment variables.
    pub fn build(self) -> Result<InvocationProfile> {
        let host = resolve_host_mode(self.host);
        let (required_files, input_source) = resolve_required_files(self.required_files);
        let config = resolve_config_location(self.config_override)?;

        Ok(InvocationProfile {
            host,
            required_files,
            input_source,
            config,
            format_override: self.format,
        })
    }
}
