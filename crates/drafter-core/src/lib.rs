//! Two-stage natural-language to draw.io diagram pipeline.
//!
//! Stage one turns a free-text instruction into a constrained flowchart
//! plan (a `NODES:` / `EDGES:` notation). Stage two turns that plan into
//! a complete `<mxfile>` document, then cleans the raw model output and
//! validates its structure. Both stages go through the [`ModelClient`]
//! capability; the [`Pipeline`] sequences them.

pub mod diagram;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod plan;

pub use error::PipelineError;
pub use model::{CompletionRequest, ModelClient, ModelError, OpenAiClient};
pub use pipeline::{GenerationConfig, Pipeline};
