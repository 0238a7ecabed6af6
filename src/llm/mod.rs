pub mod ollama;
pub mod prompts;
pub mod provider;

pub use ollama::OllamaRunner;
pub use prompts::{candidate_prompt, FALLBACK_RECOMMENDATION};
pub use provider::InferenceProvider;
