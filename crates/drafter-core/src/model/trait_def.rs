//! The `ModelClient` trait -- the adapter interface for model backends.
//!
//! The trait is intentionally object-safe so the pipeline can hold an
//! `Arc<dyn ModelClient>` and tests can substitute scripted stubs.

use async_trait::async_trait;

use super::{CompletionRequest, ModelError};

/// Adapter interface for a synchronous-feeling, single-shot text
/// generation capability.
///
/// Implementors wrap a specific provider API and translate its failures
/// into [`ModelError`]. One call maps 1:1 to one upstream invocation; no
/// retries happen at this layer.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Human-readable name for this backend (e.g. "openai").
    fn name(&self) -> &str;

    /// Run one completion and return the model's text verbatim.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ModelError>;
}

// Compile-time assertion: ModelClient must be object-safe.
// If this line compiles, the trait can be used as `dyn ModelClient`.
const _: () = {
    fn _assert_object_safe(_: &dyn ModelClient) {}
};
