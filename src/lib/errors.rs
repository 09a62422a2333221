use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Rejections raised while parsing the raw `required-files` input.
///
/// The messages are surfaced to the host unmodified, so they are part of the
/// public contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// Input was empty or whitespace-only.
    #[error(
        "Input cannot be empty. Please provide a comma-separated list of files to validate."
    )]
    EmptyInput,
    /// Input was non-empty but held nothing but delimiters and whitespace.
    #[error("No valid files found in input. Please provide a comma-separated list of file names.")]
    NoValidCandidates,
}

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Failures at the invocation boundary.
#[derive(Debug, Error)]
pub enum HostError {
    /// The host did not supply the required input at all.
    #[error("Input required and not supplied: {name}")]
    MissingInput { name: &'static str },
    /// Appending to the host's output file failed.
    #[error("Failed to write output file {path}: {source}")]
    OutputFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Writing a command or message to the host stream failed.
    #[error("Failed to write to host channel: {source}")]
    Channel {
        #[source]
        source: io::Error,
    },
    #[error("Failed to encode host payload: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
}

impl From<io::Error> for HostError {
    fn from(source: io::Error) -> Self {
        HostError::Channel { source }
    }
}
