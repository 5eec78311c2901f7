// Survey and recommendation workflows.
// Each endpoint is a fixed sequence of model calls, extractions, and store
// lookups. All model calls go through llm_client::TextGenerator; no direct
// Gemini calls here.

pub mod classify;
pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod questions;
pub mod steps;
