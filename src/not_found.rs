//! Not-found classification
//!
//! The catalog API answers lookups of unknown names with a plain-text body
//! instead of a JSON error object, so the failure surfaces as a decode error.
//! This module maps such failures back to "resource does not exist" by
//! matching the decode error message against a configured list of known
//! signatures.
//!
//! Only 404 bodies reach the decoder; other client and server errors fail
//! as `HttpStatus` first, so an error page behind a 400 or 403 is never
//! classified as not-found.
//!
//! Matching is on message text and breaks silently if the upstream wording
//! changes. Keep the patterns in configuration and replace this step
//! wholesale if the API ever returns structured errors.

use crate::config::DEFAULT_NOT_FOUND_PATTERN;
use crate::error::Error;

/// Returns true when `err` is a decode failure whose message contains one
/// of `patterns`. Matching is case-sensitive; other error kinds never match.
pub fn classify<S: AsRef<str>>(err: &Error, patterns: &[S]) -> bool {
    match err.root() {
        Error::Decode { .. } => {
            let message = err.root().to_string();
            patterns
                .iter()
                .map(|p| p.as_ref())
                .filter(|p| !p.is_empty())
                .any(|p| message.contains(p))
        }
        _ => false,
    }
}

/// Holds the injectable set of not-found signatures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundClassifier {
    patterns: Vec<String>,
}

impl Default for NotFoundClassifier {
    fn default() -> Self {
        Self::new([DEFAULT_NOT_FOUND_PATTERN])
    }
}

impl NotFoundClassifier {
    /// Create a classifier from a pattern list
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// A classifier that never reports not-found
    pub fn disabled() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Configured patterns
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Check whether `err` means the resource does not exist
    pub fn is_not_found(&self, err: &Error) -> bool {
        classify(err, &self.patterns)
    }
}
