//! Required-files validation: parse the raw list, probe each path, summarize.
//!
//! Nothing in here talks to the host. Callers hand in the raw input string and
//! receive a [`ValidationResult`] or the [`InputError`] that rejected the input.
mod checker;
mod parser;
mod probe;
mod result;

pub use checker::{ExistenceChecker, DEFAULT_MAX_CONCURRENT_PROBES};
pub use parser::{parse, CandidateList};
pub use probe::{ExistenceProbe, FsProbe};
pub use result::ValidationResult;

use tracing::debug;

use crate::lib::errors::InputError;

/// Parse `raw` and check every candidate against `checker`.
pub async fn validate_required_files(
    raw: &str,
    checker: &ExistenceChecker,
) -> Result<ValidationResult, InputError> {
    let candidates = parse(raw)?;
    debug!(
        target: "file_checker::validation",
        candidates = candidates.len(),
        base_dir = %checker.base_dir().display(),
        "Parsed required files"
    );
    Ok(checker.check(&candidates).await)
}
