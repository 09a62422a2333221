//! GitHub Actions host: workflow commands on stdout and the `GITHUB_OUTPUT` file.
use std::{
    env,
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use uuid::Uuid;

use crate::lib::errors::HostError;

use super::HostChannel;

const OUTPUT_FILE_ENV: &str = "GITHUB_OUTPUT";

/// Reports through the Actions runner protocol.
///
/// Outputs go to the file named by `GITHUB_OUTPUT` when the runner provides
/// one, otherwise to the legacy `::set-output` command.
pub struct ActionsHost<W> {
    stdout: W,
    output_file: Option<PathBuf>,
}

impl<W: Write> ActionsHost<W> {
    pub fn new(stdout: W, output_file: Option<PathBuf>) -> Self {
        Self {
            stdout,
            output_file,
        }
    }

    /// Pick up `GITHUB_OUTPUT` from the environment.
    pub fn from_env(stdout: W) -> Self {
        let output_file = env::var_os(OUTPUT_FILE_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self::new(stdout, output_file)
    }
}

impl<W: Write> HostChannel for ActionsHost<W> {
    fn name(&self) -> &'static str {
        "actions"
    }

    fn set_output(&mut self, name: &str, value: &str) -> Result<(), HostError> {
        if let Some(path) = &self.output_file {
            return append_file_command(path, &key_value_message(name, value));
        }

        writeln!(self.stdout)?;
        writeln!(
            self.stdout,
            "::set-output name={}::{}",
            escape_property(name),
            escape_data(value)
        )?;
        self.stdout.flush()?;
        Ok(())
    }

    fn set_failed(&mut self, message: &str) -> Result<(), HostError> {
        writeln!(self.stdout, "::error::{}", escape_data(message))?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// `name<<delimiter` heredoc form; the random delimiter keeps multi-line
/// values from terminating the entry early.
fn key_value_message(name: &str, value: &str) -> String {
    let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());
    format!("{name}<<{delimiter}\n{value}\n{delimiter}")
}

fn append_file_command(path: &Path, message: &str) -> Result<(), HostError> {
    let to_error = |source| HostError::OutputFile {
        path: path.to_path_buf(),
        source,
    };
    // The runner creates the file; a missing one means we are not in a real step.
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(to_error)?;
    writeln!(file, "{message}").map_err(to_error)
}

fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
