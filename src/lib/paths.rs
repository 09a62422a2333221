//! Shared helpers reused across modules (e.g., path resolution).

use std::path::{Component, Path, PathBuf};

/// Returns true if the path is non-empty and absolute.
pub fn is_nonempty_absolute(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_absolute()
}

/// Resolve `candidate` against `base` unless it is already absolute, then
/// normalize the result lexically.
///
/// `.` segments and trailing separators are dropped and `..` removes the
/// preceding segment. The filesystem is never consulted, so symlinks are not
/// followed and `a/link/..` collapses to `a` whatever `link` points at.
pub fn resolve_against(base: &Path, candidate: impl AsRef<Path>) -> PathBuf {
    let candidate = candidate.as_ref();
    if candidate.is_absolute() {
        return normalize_lexically(candidate);
    }
    normalize_lexically(&base.join(candidate))
}

/// Collapse `.` and `..` without touching the filesystem.
///
/// `..` at the root stays at the root; leading `..` of a relative path is kept.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::ParentDir | Component::CurDir) | None => {
                    normalized.push(Component::ParentDir);
                }
            },
            other => normalized.push(other),
        }
    }
    normalized
}
