//! Application state shared across all handlers.

use std::sync::Arc;

use crate::completion::CompletionClient;

/// Holds the completion client, built once at startup and never mutated
/// afterwards, so concurrent handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub ai: Arc<dyn CompletionClient>,
}

impl AppState {
    pub fn new(ai: Arc<dyn CompletionClient>) -> Self {
        Self { ai }
    }
}
