//! The completion capability seam: a prompt goes out, model output comes back.

use async_trait::async_trait;
use serde_json::Value;

/// Unprocessed model output. Providers usually hand back raw text, but a
/// client stack may decode a structured reply before we see it, so both
/// forms are carried through to the extractor.
#[derive(Debug, Clone)]
pub enum RawCompletion {
    Structured(Value),
    Text(String),
}

/// Maps a prompt to model-generated output. One outbound call per
/// invocation, no retries; transport and provider failures are returned
/// as-is for the HTTP layer to surface.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn ask(&self, prompt: &str) -> Result<RawCompletion, String>;
}
