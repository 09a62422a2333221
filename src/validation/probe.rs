use std::{io, path::Path};

/// Abstraction for filesystem access during existence checks.
///
/// `Ok(false)` and `Err(_)` are both reported as missing by the checker;
/// the distinction only reaches the debug log.
pub trait ExistenceProbe: Send + Sync {
    fn exists(&self, path: &Path) -> io::Result<bool>;
}

/// Probe that operates against the real filesystem.
///
/// Symlinks are followed, so a dangling link counts as missing. Directories
/// count as existing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl ExistenceProbe for FsProbe {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        path.try_exists()
    }
}

impl<F> ExistenceProbe for F
where
    F: Fn(&Path) -> io::Result<bool> + Send + Sync,
{
    fn exists(&self, path: &Path) -> io::Result<bool> {
        self(path)
    }
}
