//! Model capability interface for text generation.
//!
//! This module defines the [`ModelClient`] trait that all model adapters
//! implement, the [`CompletionRequest`] parameter bundle, and the
//! [`OpenAiClient`] adapter for OpenAI-compatible chat-completions APIs.
//!
//! # Architecture
//!
//! ```text
//! Pipeline
//!     |
//!     v
//! &dyn ModelClient --complete(request)--> Result<String, ModelError>
//!     ^
//!     |
//! OpenAiClient (reqwest, POST {base}/chat/completions)
//! ```

pub mod openai;
pub mod trait_def;

use thiserror::Error;

// Re-export the primary public API at the module level.
pub use openai::{DEFAULT_API_BASE, OpenAiClient};
pub use trait_def::ModelClient;

/// Parameters for a single model invocation.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Model identifier (e.g. "gpt-4o-mini").
    pub model: String,
    /// System prompt establishing the model's role.
    pub system: String,
    /// User prompt carrying the task and output contract.
    pub user: String,
    /// Sampling temperature. Both stages run near-deterministic.
    pub temperature: f32,
    /// Output-length ceiling in tokens.
    pub max_tokens: u32,
}

/// Errors from a model invocation.
///
/// The upstream service exposes no error taxonomy worth modeling beyond
/// "the transport failed", "the API said no", and "the response carried
/// nothing usable".
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("model response contained no content")]
    Empty,
}
