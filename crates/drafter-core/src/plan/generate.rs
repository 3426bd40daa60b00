//! Plan stage invocation: assembles the request and calls the model.
//!
//! Input validation (rejecting empty instructions) happens in the
//! pipeline, before this function is reached. The model's answer is
//! returned verbatim -- no post-processing at this stage.

use crate::model::{CompletionRequest, ModelClient, ModelError};
use crate::plan::prompt;

/// Sampling temperature for the plan stage. Near-deterministic.
pub const PLAN_TEMPERATURE: f32 = 0.2;

/// Output ceiling for the plan stage. Plans are short.
pub const PLAN_MAX_TOKENS: u32 = 1000;

/// Ask the model to turn `instruction` into a flowchart plan.
pub async fn generate_plan(
    client: &dyn ModelClient,
    model: &str,
    instruction: &str,
) -> Result<String, ModelError> {
    let request = CompletionRequest {
        model: model.to_string(),
        system: prompt::SYSTEM_PROMPT.to_string(),
        user: prompt::user_prompt(instruction),
        temperature: PLAN_TEMPERATURE,
        max_tokens: PLAN_MAX_TOKENS,
    };

    tracing::debug!(model, backend = client.name(), "requesting flowchart plan");
    client.complete(&request).await
}
