use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{lib::errors::ConfigError, lib::paths, validation::DEFAULT_MAX_CONCURRENT_PROBES};

pub const MAX_CONCURRENT_PROBES_LIMIT: usize = 64;

/// Existence checker settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerSection {
    pub max_concurrent_probes: usize,
    /// Directory relative candidates resolve against; `None` means the working directory.
    pub base_dir: Option<PathBuf>,
}

impl Default for CheckerSection {
    fn default() -> Self {
        Self {
            max_concurrent_probes: DEFAULT_MAX_CONCURRENT_PROBES,
            base_dir: None,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawCheckerSection {
    pub max_concurrent_probes: Option<usize>,
    pub base_dir: Option<PathBuf>,
}

pub fn parse_checker_section(
    raw: Option<RawCheckerSection>,
    path: &Path,
) -> Result<CheckerSection, ConfigError> {
    let checker_raw = raw.unwrap_or_default();
    let max_concurrent_probes = checker_raw
        .max_concurrent_probes
        .unwrap_or(DEFAULT_MAX_CONCURRENT_PROBES);
    validate_concurrency(max_concurrent_probes, path)?;

    if let Some(base_dir) = &checker_raw.base_dir {
        if !paths::is_nonempty_absolute(base_dir) {
            return Err(ConfigError::InvalidField {
                path: path.to_path_buf(),
                field: "checker.base_dir",
                message: format!("{} must be an absolute path", base_dir.display()),
            });
        }
    }

    Ok(CheckerSection {
        max_concurrent_probes,
        base_dir: checker_raw.base_dir,
    })
}

fn validate_concurrency(limit: usize, path: &Path) -> Result<(), ConfigError> {
    if (1..=MAX_CONCURRENT_PROBES_LIMIT).contains(&limit) {
        return Ok(());
    }

    Err(ConfigError::InvalidField {
        path: path.to_path_buf(),
        field: "checker.max_concurrent_probes",
        message: format!("Use a value in the range 1-{MAX_CONCURRENT_PROBES_LIMIT}"),
    })
}
