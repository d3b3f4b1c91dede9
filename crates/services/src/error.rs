//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{OptionKeyError, TestDocumentError, TestId};

/// Errors emitted by the test-content provider.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("test {0} was not found")]
    NotFound(TestId),
    #[error("content request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Document(#[from] TestDocumentError),
    #[error(transparent)]
    Key(#[from] OptionKeyError),
}

impl ContentError {
    /// True when the failure means the test has no usable questions
    /// rather than the fetch itself failing. Both block the attempt,
    /// but the UI words them differently.
    #[must_use]
    pub fn is_empty_test(&self) -> bool {
        matches!(self, ContentError::Document(TestDocumentError::EmptyTest))
    }
}

/// Errors emitted while starting or driving an attempt.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AttemptError {
    #[error(transparent)]
    Content(#[from] ContentError),
}
