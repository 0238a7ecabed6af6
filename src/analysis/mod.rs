pub mod academics;
pub mod github;
pub mod pipeline;
pub mod projects;
pub mod resume;
pub mod scoring;
pub mod text;

pub use pipeline::{CandidateInput, ScreeningPipeline};
pub use projects::ProjectClassifier;
pub use resume::SkillDetector;
pub use scoring::aggregate;
