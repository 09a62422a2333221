//! InvocationProfile and host/input/config resolution.
use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::config::ReportFormat;

const DEFAULT_CONFIG: &str = "file-checker.toml";
const CONFIG_ENV: &str = "FILE_CHECKER_CONFIG";
const GITHUB_ACTIONS_ENV: &str = "GITHUB_ACTIONS";

/// Name of the single input the action declares.
pub const REQUIRED_FILES_INPUT: &str = "required-files";

/// The runner exports `INPUT_<NAME>` with the name upper-cased and hyphens
/// kept; the underscore spelling is accepted for shells that cannot set it.
const REQUIRED_FILES_ENV_KEYS: [&str; 2] = ["INPUT_REQUIRED-FILES", "INPUT_REQUIRED_FILES"];

/// Host the result is reported to.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum HostMode {
    /// Plain terminal: stdout/stderr and exit status.
    Cli,
    /// GitHub Actions workflow commands and `GITHUB_OUTPUT`.
    Actions,
}

impl HostMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            HostMode::Cli => "cli",
            HostMode::Actions => "actions",
        }
    }
}

/// Where the raw `required-files` value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Cli,
    Env,
    Missing,
}

/// Resolved configuration file location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    pub path: PathBuf,
    /// False when the path is the implicit default, which may be absent.
    pub explicit: bool,
}

/// Resolved invocation profile.
#[derive(Debug, Clone)]
pub struct InvocationProfile {
    pub host: HostMode,
    pub required_files: Option<String>,
    pub input_source: InputSource,
    pub config: ConfigLocation,
    pub format_override: Option<ReportFormat>,
}

/// Resolve host in the order: CLI flag → `GITHUB_ACTIONS=true` → cli.
pub fn resolve_host_mode(flag: Option<HostMode>) -> HostMode {
    resolve_host_mode_with(flag, env_lookup)
}

/// Resolve the raw input in the order: CLI argument → `INPUT_REQUIRED-FILES` env.
pub fn resolve_required_files(cli_value: Option<String>) -> (Option<String>, InputSource) {
    resolve_required_files_with(cli_value, env_lookup)
}

/// Resolve config path in the order: CLI override → env var → default.
pub fn resolve_config_location(override_path: Option<PathBuf>) -> Result<ConfigLocation> {
    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok(resolve_config_location_with(override_path, env_lookup, &cwd))
}

fn env_lookup(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn resolve_host_mode_with(
    flag: Option<HostMode>,
    lookup: impl Fn(&str) -> Option<String>,
) -> HostMode {
    if let Some(host) = flag {
        return host;
    }
    match lookup(GITHUB_ACTIONS_ENV).as_deref() {
        Some("true") => HostMode::Actions,
        _ => HostMode::Cli,
    }
}

fn resolve_required_files_with(
    cli_value: Option<String>,
    lookup: impl Fn(&str) -> Option<String>,
) -> (Option<String>, InputSource) {
    if let Some(value) = cli_value {
        return (Some(value), InputSource::Cli);
    }

    REQUIRED_FILES_ENV_KEYS
        .iter()
        .find_map(|key| lookup(key))
        .map(|value| (Some(value), InputSource::Env))
        .unwrap_or((None, InputSource::Missing))
}

fn resolve_config_location_with(
    override_path: Option<PathBuf>,
    lookup: impl Fn(&str) -> Option<String>,
    cwd: &Path,
) -> ConfigLocation {
    let explicit = override_path.or_else(|| {
        lookup(CONFIG_ENV)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
    });

    let (path, explicit) = match explicit {
        Some(path) => (path, true),
        None => (PathBuf::from(DEFAULT_CONFIG), false),
    };

    if path.is_absolute() {
        return ConfigLocation { path, explicit };
    }

    ConfigLocation {
        path: cwd.join(path),
        explicit,
    }
}
