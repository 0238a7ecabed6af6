use async_trait::async_trait;
use crate::models::InferenceOutcome;

/// Generates a recommendation from a prompt. Implementations fold every
/// failure mode into `InferenceOutcome::Degraded`; callers never handle a
/// raw error from this seam.
#[async_trait]
pub trait InferenceProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> InferenceOutcome;
    fn name(&self) -> &str;
}
