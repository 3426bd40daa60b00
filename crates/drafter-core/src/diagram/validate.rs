//! Structural validation of an extracted diagram candidate.
//!
//! Deliberately shallow: parse as XML, assert the root element, nothing
//! more. Edge endpoint integrity, id uniqueness and style correctness
//! are promised by the prompt contract and not re-verified here --
//! callers that need those guarantees must add their own checks.

use roxmltree::Document;
use thiserror::Error;

/// Required root element of a diagram document.
pub const ROOT_TAG: &str = "mxfile";

/// Errors from candidate validation.
#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("XML parse error: {0}")]
    Parse(#[from] roxmltree::Error),

    #[error("root element must be <mxfile>, found <{0}>")]
    WrongRoot(String),
}

/// Parse `candidate` and assert the `<mxfile>` root. Success is silent.
pub fn validate(candidate: &str) -> Result<(), ValidateError> {
    let doc = Document::parse(candidate)?;
    let root = doc.root_element();
    if root.tag_name().name() != ROOT_TAG {
        return Err(ValidateError::WrongRoot(root.tag_name().name().to_string()));
    }
    Ok(())
}
