use serde::Serialize;

const MISSING_FILES_PREFIX: &str = "The following files do not exist: ";
const MISSING_FILES_SEPARATOR: &str = ", ";

/// Outcome of one existence check run.
///
/// `exists` is derived from `missing_files`, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    exists: bool,
    missing_files: Vec<String>,
}

impl ValidationResult {
    /// Build a result from the missing candidates, in candidate order.
    pub fn from_missing(missing_files: Vec<String>) -> Self {
        Self {
            exists: missing_files.is_empty(),
            missing_files,
        }
    }

    /// True when every candidate exists.
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// Candidates (original trimmed text) that do not exist.
    pub fn missing_files(&self) -> &[String] {
        &self.missing_files
    }

    /// Human-readable failure message, or `None` when nothing is missing.
    pub fn failure_message(&self) -> Option<String> {
        if self.exists {
            return None;
        }
        Some(format!(
            "{MISSING_FILES_PREFIX}{}",
            self.missing_files.join(MISSING_FILES_SEPARATOR)
        ))
    }
}
