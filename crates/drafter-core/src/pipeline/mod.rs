//! Pipeline orchestrator: sequences the two generation stages.
//!
//! `plan_stage` turns an instruction into plan notation; `diagram_stage`
//! turns plan notation into a validated `<mxfile>` document. Each stage
//! makes at most one model call, rejects empty input before calling, and
//! surfaces failures unchanged. The pipeline holds no mutable state --
//! requests are independent and the two calls within one request are
//! strictly sequential.

use std::sync::Arc;

use crate::diagram;
use crate::error::PipelineError;
use crate::model::ModelClient;
use crate::plan;

/// How much of raw model output to show in debug logs.
const LOG_PREVIEW_LEN: usize = 200;

/// Model selection for the two stages. Built once at startup and
/// injected; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Model id for the plan stage.
    pub plan_model: String,
    /// Model id for the diagram stage.
    pub diagram_model: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            plan_model: "gpt-4o-mini".to_string(),
            diagram_model: "gpt-4o-mini".to_string(),
        }
    }
}

/// The two-stage instruction -> plan -> diagram pipeline.
pub struct Pipeline {
    client: Arc<dyn ModelClient>,
    config: GenerationConfig,
}

impl Pipeline {
    pub fn new(client: Arc<dyn ModelClient>, config: GenerationConfig) -> Self {
        Self { client, config }
    }

    /// Stage A: instruction -> plan notation.
    ///
    /// Rejects empty or whitespace-only instructions without invoking
    /// the model. Returns the model's plan text verbatim.
    pub async fn plan_stage(&self, instruction: &str) -> Result<String, PipelineError> {
        if instruction.trim().is_empty() {
            return Err(PipelineError::MissingInput {
                field: "instruction",
            });
        }

        let text =
            plan::generate_plan(self.client.as_ref(), &self.config.plan_model, instruction)
                .await?;
        tracing::debug!(preview = preview(&text), "plan stage output");
        Ok(text)
    }

    /// Stage B: plan notation -> validated diagram XML.
    ///
    /// Rejects empty or whitespace-only plans without invoking the
    /// model. On success the returned text is the extracted candidate
    /// that passed validation -- never the raw model output.
    pub async fn diagram_stage(&self, plan_text: &str) -> Result<String, PipelineError> {
        if plan_text.trim().is_empty() {
            return Err(PipelineError::MissingInput { field: "plan" });
        }

        let raw = diagram::generate_diagram(
            self.client.as_ref(),
            &self.config.diagram_model,
            plan_text,
        )
        .await?;
        tracing::debug!(preview = preview(&raw), "raw diagram output");

        let candidate = diagram::extract(&raw);
        tracing::debug!(preview = preview(&candidate), "extracted candidate");

        diagram::validate(&candidate)?;
        Ok(candidate)
    }
}

/// First `LOG_PREVIEW_LEN` chars, for debug logging only.
fn preview(text: &str) -> &str {
    match text.char_indices().nth(LOG_PREVIEW_LEN) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::model::{CompletionRequest, ModelError};

    const MINIMAL: &str = "<mxfile><diagram/></mxfile>";

    /// Answers from a scripted queue and counts invocations.
    struct ScriptedClient {
        responses: Mutex<VecDeque<Result<String, ModelError>>>,
        calls: AtomicUsize,
    }

    impl ScriptedClient {
        fn new(responses: Vec<Result<String, ModelError>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into()),
                calls: AtomicUsize::new(0),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ModelClient for ScriptedClient {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn complete(&self, _request: &CompletionRequest) -> Result<String, ModelError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("scripted client ran out of responses")
        }
    }

    fn pipeline_with(client: Arc<ScriptedClient>) -> Pipeline {
        Pipeline::new(client, GenerationConfig::default())
    }

    // -- plan_stage --

    #[tokio::test]
    async fn plan_stage_returns_plan_text() {
        let client = ScriptedClient::new(vec![Ok(
            "NODES:\n- [A] Open login page (Type: Start)\n- [B] Done (Type: End)\nEDGES:\n- A -> B : submit".to_string(),
        )]);
        let pipeline = pipeline_with(client.clone());

        let plan = pipeline.plan_stage("user login flow").await.unwrap();
        assert!(plan.contains("NODES:"));
        assert!(plan.contains("EDGES:"));
        assert!(plan.contains("A -> B"));
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn plan_stage_rejects_empty_instruction_without_model_call() {
        let client = ScriptedClient::new(vec![]);
        let pipeline = pipeline_with(client.clone());

        let err = pipeline.plan_stage("").await.unwrap_err();
        assert!(matches!(
            err,
            PipelineError::MissingInput {
                field: "instruction"
            }
        ));
        assert_eq!(client.call_count(), 0, "empty input must not reach the model");
    }

    #[tokio::test]
    async fn plan_stage_rejects_whitespace_instruction() {
        let client = ScriptedClient::new(vec![]);
        let pipeline = pipeline_with(client.clone());

        let err = pipeline.plan_stage("  \n\t ").await.unwrap_err();
        assert!(matches!(err, PipelineError::MissingInput { .. }));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn plan_stage_propagates_generation_failure() {
        let client = ScriptedClient::new(vec![Err(ModelError::Api {
            status: 500,
            message: "upstream down".to_string(),
        })]);
        let pipeline = pipeline_with(client);

        let err = pipeline.plan_stage("anything").await.unwrap_err();
        match err {
            PipelineError::Generation(inner) => {
                assert!(inner.to_string().contains("upstream down"));
            }
            other => panic!("expected Generation, got {other:?}"),
        }
    }

    // -- diagram_stage --

    #[tokio::test]
    async fn diagram_stage_cleans_fenced_commented_output() {
        let raw = "```xml\n<mxfile><!-- generated --><diagram/></mxfile>\n```".to_string();
        let client = ScriptedClient::new(vec![Ok(raw)]);
        let pipeline = pipeline_with(client.clone());

        let xml = pipeline.diagram_stage("NODES:\n- [A] x").await.unwrap();
        assert_eq!(xml, MINIMAL);
        assert!(!xml.contains("<!--"));
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn diagram_stage_drops_surrounding_prose() {
        let client = ScriptedClient::new(vec![Ok(format!(
            "Sure! Here's your diagram: {MINIMAL}"
        ))]);
        let pipeline = pipeline_with(client);

        let xml = pipeline.diagram_stage("plan").await.unwrap();
        assert_eq!(xml, MINIMAL);
    }

    #[tokio::test]
    async fn diagram_stage_rejects_wrong_root() {
        let client = ScriptedClient::new(vec![Ok(
            "<mxGraph><diagram/></mxGraph>".to_string()
        )]);
        let pipeline = pipeline_with(client);

        let err = pipeline.diagram_stage("plan").await.unwrap_err();
        match err {
            PipelineError::Validation(inner) => {
                assert!(inner.to_string().contains("root element must be <mxfile>"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn diagram_stage_rejects_unparseable_output() {
        let client = ScriptedClient::new(vec![Ok("I couldn't do that, sorry.".to_string())]);
        let pipeline = pipeline_with(client);

        let err = pipeline.diagram_stage("plan").await.unwrap_err();
        assert!(matches!(err, PipelineError::Validation(_)));
    }

    #[tokio::test]
    async fn diagram_stage_rejects_empty_plan_without_model_call() {
        let client = ScriptedClient::new(vec![]);
        let pipeline = pipeline_with(client.clone());

        let err = pipeline.diagram_stage("   ").await.unwrap_err();
        assert!(matches!(
            err,
            PipelineError::MissingInput { field: "plan" }
        ));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn diagram_stage_propagates_generation_failure() {
        let client = ScriptedClient::new(vec![Err(ModelError::Empty)]);
        let pipeline = pipeline_with(client);

        let err = pipeline.diagram_stage("plan").await.unwrap_err();
        assert!(matches!(err, PipelineError::Generation(_)));
    }

    // -- both stages end to end --

    #[tokio::test]
    async fn full_pipeline_over_scripted_model() {
        let plan_text = "NODES:\n- [A] Start (Type: Start)\n- [B] End (Type: End)\nEDGES:\n- A -> B :";
        let diagram_text = format!("```xml\n{MINIMAL}\n```");
        let client = ScriptedClient::new(vec![
            Ok(plan_text.to_string()),
            Ok(diagram_text),
        ]);
        let pipeline = pipeline_with(client.clone());

        let plan = pipeline.plan_stage("user login flow").await.unwrap();
        let xml = pipeline.diagram_stage(&plan).await.unwrap();

        assert_eq!(xml, MINIMAL);
        assert_eq!(client.call_count(), 2, "one model call per stage");
    }

    // -- config --

    #[test]
    fn default_config_uses_the_same_model_for_both_stages() {
        let config = GenerationConfig::default();
        assert_eq!(config.plan_model, "gpt-4o-mini");
        assert_eq!(config.diagram_model, "gpt-4o-mini");
    }

    #[test]
    fn preview_truncates_on_char_boundary() {
        let long = "x".repeat(500);
        assert_eq!(preview(&long).len(), 200);
        assert_eq!(preview("short"), "short");
    }
}
