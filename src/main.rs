//! Entry point for File Checker.
use std::process::ExitCode;

use anyhow::Error;
use clap::Parser;
use file_checker::{
    cli::{InvocationArgs, InvocationProfile},
    config::CheckerConfig,
    host::{self, RuntimeExit},
    lib::telemetry,
};

#[tokio::main]
async fn main() -> ExitCode {
    let profile = match InvocationArgs::parse().build() {
        Ok(profile) => profile,
        Err(err) => return RuntimeExit::from_error(err).report(),
    };
    let host = profile.host;
    match bootstrap(profile).await {
        Ok(code) => code,
        Err(exit) => exit.report_for(host),
    }
}

async fn bootstrap(profile: InvocationProfile) -> Result<ExitCode, RuntimeExit> {
    telemetry::init_tracing(profile.host).map_err(RuntimeExit::from_error)?;

    let config = CheckerConfig::load(&profile.config)
        .map_err(|err| RuntimeExit::from_error(Error::new(err)))?;
    host::run(profile, config).await
}
