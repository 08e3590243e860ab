// Profile analysis: seven fixed prompt agents issued as one concurrent batch.
// All LLM calls go through llm_client — no direct OpenAI calls here.

pub mod agents;
pub mod analyzer;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod scoring;
