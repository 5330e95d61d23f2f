use thiserror::Error;

use crate::dom::{QueryError, VirtualDocument};

/// The expected text was not present in the rendered document.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected `{expected}` to be in the document: {source}")]
pub struct AssertionFailure {
    pub expected: String,
    pub source: QueryError,
}

/// Passes when exactly one text node in `doc` equals `expected`.
pub fn assert_in_document(doc: &VirtualDocument, expected: &str) -> Result<(), AssertionFailure> {
    match doc.get_by_text(expected) {
        Ok(_) => Ok(()),
        Err(source) => {
            tracing::debug!(%expected, error = %source, "assertion failed");
            Err(AssertionFailure {
                expected: expected.to_string(),
                source,
            })
        }
    }
}
