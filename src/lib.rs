pub mod analysis;
pub mod config;
pub mod error;
pub mod github;
pub mod input;
pub mod llm;
pub mod models;
pub mod storage;
pub mod taxonomy;

pub use analysis::{CandidateInput, ScreeningPipeline};
pub use config::Config;
pub use error::{Error, Result};
pub use github::GithubClient;
pub use llm::{InferenceProvider, OllamaRunner};
pub use storage::ProfileCache;
