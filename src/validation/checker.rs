//! Existence checking over a parsed candidate list.
use std::{
    io,
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::{
    sync::Semaphore,
    task::{self, JoinError},
};
use tracing::{debug, warn};

use crate::lib::paths;

use super::{CandidateList, ExistenceProbe, FsProbe, ValidationResult};

/// Default fan-out for concurrent probes.
pub const DEFAULT_MAX_CONCURRENT_PROBES: usize = 8;

/// Probes every candidate once and summarizes which ones are missing.
#[derive(Clone)]
pub struct ExistenceChecker {
    probe: Arc<dyn ExistenceProbe>,
    base_dir: PathBuf,
    max_concurrent_probes: usize,
}

impl ExistenceChecker {
    /// Checker backed by the real filesystem, resolving relative candidates
    /// against `base_dir`.
    pub fn new(base_dir: PathBuf) -> Self {
        Self::with_probe(Arc::new(FsProbe), base_dir)
    }

    /// Version that allows injecting a test double.
    pub fn with_probe(probe: Arc<dyn ExistenceProbe>, base_dir: PathBuf) -> Self {
        Self {
            probe,
            base_dir,
            max_concurrent_probes: DEFAULT_MAX_CONCURRENT_PROBES,
        }
    }

    /// Bound the number of probes in flight. Zero is raised to one.
    pub fn with_max_concurrent_probes(mut self, limit: usize) -> Self {
        self.max_concurrent_probes = limit.max(1);
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn max_concurrent_probes(&self) -> usize {
        self.max_concurrent_probes
    }

    /// Probe every candidate and collect the missing ones in candidate order.
    ///
    /// Probes run on the blocking pool and may finish in any order; the
    /// per-candidate diagnostics and the missing list are produced afterwards
    /// in candidate order. Probe failures never escape: they count as missing.
    pub async fn check(&self, candidates: &CandidateList) -> ValidationResult {
        let permits = Arc::new(Semaphore::new(self.max_concurrent_probes));
        let mut pending = Vec::with_capacity(candidates.len());

        for candidate in candidates {
            let path = paths::resolve_against(&self.base_dir, candidate);
            let probe = Arc::clone(&self.probe);
            // The semaphore is never closed, so acquisition only fails in theory.
            let permit = Arc::clone(&permits).acquire_owned().await.ok();
            pending.push(task::spawn_blocking(move || {
                let _permit = permit;
                probe.exists(&path)
            }));
        }

        let mut missing_files = Vec::new();
        for (candidate, handle) in candidates.iter().zip(pending) {
            if is_present(candidate, handle.await) {
                debug!(target: "file_checker::checker", "File exists: {candidate}");
            } else {
                debug!(target: "file_checker::checker", "File does not exist: {candidate}");
                missing_files.push(candidate.clone());
            }
        }

        ValidationResult::from_missing(missing_files)
    }
}

fn is_present(candidate: &str, outcome: Result<io::Result<bool>, JoinError>) -> bool {
    match outcome {
        Ok(Ok(present)) => present,
        Ok(Err(err)) => {
            debug!(
                target: "file_checker::checker",
                candidate,
                kind = ?err.kind(),
                reason = %err,
                "Existence probe failed; counting candidate as missing"
            );
            false
        }
        Err(err) => {
            warn!(
                target: "file_checker::checker",
                candidate,
                reason = %err,
                "Existence probe did not complete; counting candidate as missing"
            );
            false
        }
    }
}
