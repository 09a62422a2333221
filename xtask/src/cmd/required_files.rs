use std::path::Path;

use anyhow::Result;
use file_checker::validation::{validate_required_files, ExistenceChecker};

use crate::repo;

/// Files every release of the repository must ship.
pub const RELEASE_FILES: &str = "Cargo.toml,README.md,DESIGN.md,action.yml,xtask/Cargo.toml";

pub fn run(files: Option<String>) -> Result<()> {
    let root = repo::repo_root()?;
    let list = files.unwrap_or_else(|| RELEASE_FILES.to_string());
    let summary = check_in(&root, &list)?;
    println!("{summary}");
    Ok(())
}

fn check_in(root: &Path, list: &str) -> Result<String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let checker = ExistenceChecker::new(root.to_path_buf());
    let result = runtime.block_on(validate_required_files(list, &checker))?;

    if let Some(message) = result.failure_message() {
        anyhow::bail!("FAIL: {message}");
    }
    Ok("PASS: required files exist".to_string())
}
