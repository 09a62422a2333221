use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::Result;

use crate::{cmd::required_files, repo};

/// Cargo gate, in order; the first failure stops the run.
const CARGO_STEPS: &[&[&str]] = &[
    &["fetch"],
    &["check", "--all-targets"],
    &["test", "--all"],
    &["fmt", "--", "--check"],
    &["clippy", "--all-targets", "--", "-D", "warnings"],
    &["build", "--release"],
];

pub fn run() -> Result<()> {
    let root = repo::repo_root()?;
    for args in CARGO_STEPS {
        cargo(&root, args)?;
    }

    eprintln!("==> required files");
    required_files::run(None)
}

fn cargo(root: &Path, args: &[&str]) -> Result<()> {
    let label = format!("cargo {}", args.join(" "));
    eprintln!("==> {label}");
    let status = Command::new("cargo")
        .args(args)
        .current_dir(root)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    if !status.success() {
        anyhow::bail!("{label} failed (status {status})");
    }
    Ok(())
}
