pub mod api;
pub mod completion;
pub mod config;
pub mod extract;
pub mod gemini;
pub mod prompts;
pub mod state;
