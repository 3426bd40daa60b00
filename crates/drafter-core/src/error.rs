//! Pipeline-level error taxonomy.
//!
//! Each stage boundary surfaces exactly one of these variants. Module-local
//! errors ([`ModelError`], [`ValidateError`]) convert via `#[from]` so stage
//! code can use `?` throughout.

use thiserror::Error;

use crate::diagram::ValidateError;
use crate::model::ModelError;

/// Errors surfaced by [`crate::Pipeline`] stage calls.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The caller supplied an empty or whitespace-only input. No model
    /// call is made in this case.
    #[error("missing {field}")]
    MissingInput { field: &'static str },

    /// The model capability failed during either stage.
    #[error("generation failed: {0}")]
    Generation(#[from] ModelError),

    /// The extracted candidate is not a well-rooted XML document.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidateError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_names_the_field() {
        let err = PipelineError::MissingInput {
            field: "instruction",
        };
        assert_eq!(err.to_string(), "missing instruction");
    }

    #[test]
    fn generation_carries_underlying_message() {
        let err = PipelineError::from(ModelError::Empty);
        assert!(
            err.to_string().contains("no content"),
            "unexpected message: {err}"
        );
    }

    #[test]
    fn validation_carries_underlying_message() {
        let inner = crate::diagram::validate("<mxGraph/>").unwrap_err();
        let err = PipelineError::from(inner);
        assert!(
            err.to_string().contains("root element must be <mxfile>"),
            "unexpected message: {err}"
        );
    }
}
