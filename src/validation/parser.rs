//! Comma-separated path list parsing.
use std::slice;

use crate::lib::errors::InputError;

const DELIMITER: char = ',';
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Ordered, non-empty list of trimmed path candidates.
///
/// Only [`parse`] builds one, so every element is trimmed and non-empty and
/// the list always holds at least one candidate. Duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateList(Vec<String>);

impl CandidateList {
    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a CandidateList {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Split `raw` on commas into trimmed, non-empty candidates.
///
/// Commas inside file names cannot be escaped. Whitespace inside a name is
/// preserved; only leading and trailing whitespace of each segment is cut.
/// A byte order mark is trimmed like whitespace.
pub fn parse(raw: &str) -> Result<CandidateList, InputError> {
    if trim(raw).is_empty() {
        return Err(InputError::EmptyInput);
    }

    let candidates: Vec<String> = raw
        .split(DELIMITER)
        .map(trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();

    if candidates.is_empty() {
        return Err(InputError::NoValidCandidates);
    }

    Ok(CandidateList(candidates))
}

fn trim(segment: &str) -> &str {
    segment.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}
