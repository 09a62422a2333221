use std::env;
use std::path::{Path, PathBuf};

pub fn repo_root() -> anyhow::Result<PathBuf> {
    let mut dir = env::current_dir()?;
    loop {
        if looks_like_repo_root(&dir) {
            return Ok(dir);
        }
        if !dir.pop() {
            anyhow::bail!("failed to find repository root (no workspace Cargo.toml/.git found)");
        }
    }
}

/// The workspace manifest, not `xtask/Cargo.toml`, marks the root.
fn looks_like_repo_root(dir: &Path) -> bool {
    (dir.join("xtask").is_dir() && dir.join("Cargo.toml").is_file()) || dir.join(".git").is_dir()
}
