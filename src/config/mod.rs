//! Load and validate the optional checker configuration.
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{error, info};

use crate::{cli::ConfigLocation, lib::errors::ConfigError};

pub mod checker;
pub mod report;
pub mod telemetry;

pub use checker::{
    parse_checker_section, CheckerSection, RawCheckerSection, MAX_CONCURRENT_PROBES_LIMIT,
};
pub use report::{parse_report_section, RawReportSection, ReportFormat, ReportSection};

const CONFIG_ENV_KEY: &str = "FILE_CHECKER_CONFIG";

/// Top-level configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckerConfig {
    pub checker: CheckerSection,
    pub report: ReportSection,
    /// `None` when built from defaults.
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawCheckerConfig {
    checker: Option<RawCheckerSection>,
    report: Option<RawReportSection>,
}

impl CheckerConfig {
    /// Load from the resolved location; a missing implicit default yields defaults.
    pub fn load(location: &ConfigLocation) -> Result<Self, ConfigError> {
        if !location.explicit && !location.path.exists() {
            telemetry::log_defaults(&location.path);
            return Ok(Self::default());
        }
        Self::load_from_path(location.path.clone())
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "file_checker::config",
            path = %path.display(),
            "Starting configuration load"
        );

        let source = config::File::from(path.clone()).format(config::FileFormat::Toml);
        let document = config::Config::builder()
            .add_source(source)
            .build()
            .map_err(|err| {
                let error = ConfigError::from_read_error(path.clone(), err);
                error!(
                    target: "file_checker::config",
                    path = %path.display(),
                    reason = %error,
                    "Failed to read configuration file"
                );
                error
            })?;

        let raw: RawCheckerConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "file_checker::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "file_checker::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawCheckerConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let checker = parse_checker_section(raw.checker, &path)?;
        let report = parse_report_section(raw.report);

        Ok(Self {
            checker,
            report,
            source_path: Some(path),
        })
    }
}
