//! Diagram stage invocation: assembles the request and calls the model.
//!
//! Returns the raw model text verbatim; extraction and validation are
//! the pipeline's next steps, not this function's.

use crate::diagram::prompt;
use crate::model::{CompletionRequest, ModelClient, ModelError};

/// Sampling temperature for the diagram stage. Slightly lower than the
/// plan stage -- the output format leaves no room for creativity.
pub const DIAGRAM_TEMPERATURE: f32 = 0.15;

/// Output ceiling for the diagram stage. Diagrams are verbose.
pub const DIAGRAM_MAX_TOKENS: u32 = 4000;

/// Ask the model to render `plan` as a draw.io document.
pub async fn generate_diagram(
    client: &dyn ModelClient,
    model: &str,
    plan: &str,
) -> Result<String, ModelError> {
    let request = CompletionRequest {
        model: model.to_string(),
        system: prompt::SYSTEM_PROMPT.to_string(),
        user: prompt::user_prompt(plan),
        temperature: DIAGRAM_TEMPERATURE,
        max_tokens: DIAGRAM_MAX_TOKENS,
    };

    tracing::debug!(model, backend = client.name(), "requesting diagram XML");
    client.complete(&request).await
}
