use std::path::Path;

use tracing::{debug, info};

use super::{CheckerConfig, CONFIG_ENV_KEY};

pub fn log_defaults(path: &Path) {
    debug!(
        target: "file_checker::config",
        path = %path.display(),
        env = CONFIG_ENV_KEY,
        "No configuration file found; using defaults"
    );
}

pub fn log_loaded(config: &CheckerConfig) {
    info!(
        target: "file_checker::config",
        path = %config
            .source_path
            .as_deref()
            .map(|path| path.display().to_string())
            .unwrap_or_default(),
        max_concurrent_probes = config.checker.max_concurrent_probes,
        base_dir = ?config.checker.base_dir,
        format = config.report.format.as_str(),
        "Configuration file loaded successfully"
    );
}
