//! Terminal host: plain lines or a JSON payload.
use std::io::Write;

use serde_json::{json, Value};

use crate::{config::ReportFormat, lib::errors::HostError};

use super::HostChannel;

/// Reports to stdout/stderr in the configured format.
pub struct ConsoleHost<O, E> {
    format: ReportFormat,
    stdout: O,
    stderr: E,
}

impl<O: Write, E: Write> ConsoleHost<O, E> {
    pub fn new(format: ReportFormat, stdout: O, stderr: E) -> Self {
        Self {
            format,
            stdout,
            stderr,
        }
    }

    fn write_payload(&mut self, payload: Value) -> Result<(), HostError> {
        let rendered = serde_json::to_string_pretty(&payload)
            .map_err(|source| HostError::Encode { source })?;
        writeln!(self.stdout, "{rendered}")?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl<O: Write, E: Write> HostChannel for ConsoleHost<O, E> {
    fn name(&self) -> &'static str {
        "cli"
    }

    fn set_output(&mut self, name: &str, value: &str) -> Result<(), HostError> {
        match self.format {
            ReportFormat::Text => {
                writeln!(self.stdout, "{name}={value}")?;
                self.stdout.flush()?;
                Ok(())
            }
            ReportFormat::Json => self.write_payload(json!({
                "status": "passed",
                "outputs": { name: value },
            })),
        }
    }

    fn set_failed(&mut self, message: &str) -> Result<(), HostError> {
        match self.format {
            ReportFormat::Text => {
                writeln!(self.stderr, "{message}")?;
                self.stderr.flush()?;
                Ok(())
            }
            ReportFormat::Json => self.write_payload(json!({
                "status": "failed",
                "message": message,
            })),
        }
    }
}
