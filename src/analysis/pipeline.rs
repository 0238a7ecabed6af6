use chrono::Utc;
use std::sync::Arc;

use crate::analysis::academics::score_academics;
use crate::analysis::github as github_scoring;
use crate::analysis::projects::ProjectClassifier;
use crate::analysis::resume::SkillDetector;
use crate::analysis::scoring::aggregate;
use crate::github::{normalize_username, GithubClient};
use crate::llm::{candidate_prompt, InferenceProvider};
use crate::models::{EvaluationReport, GithubAnalysis, InferenceOutcome};
use crate::storage::ProfileCache;

/// Raw candidate inputs for one evaluation. Missing pieces (empty resume
/// text, blank username, no projects) are valid degraded states, scored as
/// zero by the owning analyzer.
#[derive(Debug, Clone, Default)]
pub struct CandidateInput {
    pub resume_text: String,
    pub github_username: String,
    pub tenth: f64,
    pub twelfth: f64,
    pub cgpa: f64,
    pub projects: Vec<String>,
}

/// One sequential evaluation: the four domain analyzers run concurrently,
/// join, feed the aggregate and the prompt, and the provider (if any)
/// produces the recommendation. Total over its input domain; the worst
/// case is an all-zero scorecard plus a degraded recommendation.
pub struct ScreeningPipeline {
    github: Arc<GithubClient>,
    llm: Option<Arc<dyn InferenceProvider>>,
    cache: Option<ProfileCache>,
    skill_detector: SkillDetector,
    project_classifier: ProjectClassifier,
}

impl ScreeningPipeline {
    pub fn new(github: GithubClient) -> Self {
        Self {
            github: Arc::new(github),
            llm: None,
            cache: None,
            skill_detector: SkillDetector::new(),
            project_classifier: ProjectClassifier::new(),
        }
    }

    pub fn with_provider(mut self, provider: impl InferenceProvider + 'static) -> Self {
        self.llm = Some(Arc::new(provider));
        self
    }

    pub fn with_cache(mut self, cache: ProfileCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub async fn evaluate(&self, input: &CandidateInput) -> EvaluationReport {
        tracing::info!("Starting candidate evaluation");

        let (resume, github, academics, projects) = tokio::join!(
            async { self.skill_detector.analyze(&input.resume_text) },
            self.analyze_github(&input.github_username),
            async { score_academics(input.tenth, input.twelfth, input.cgpa) },
            async { self.project_classifier.classify(&input.projects) },
        );

        let fit_score = aggregate(resume.score, github.score, academics.score);
        tracing::info!(
            "Domain scores: resume {}, github {}, academics {}, projects {} -> fit {}",
            resume.score,
            github.score,
            academics.score,
            projects.score,
            fit_score
        );

        let recommendation = match &self.llm {
            Some(provider) => {
                let prompt = candidate_prompt(&resume, &github, &academics, &projects);
                tracing::info!("Generating recommendation via {}", provider.name());
                provider.generate(&prompt).await
            }
            None => InferenceOutcome::Degraded("inference disabled".to_string()),
        };

        EvaluationReport {
            resume,
            github,
            academics,
            projects,
            fit_score,
            recommendation,
            evaluated_at: Utc::now(),
        }
    }

    async fn analyze_github(&self, raw_username: &str) -> GithubAnalysis {
        let username = normalize_username(raw_username);
        if username.is_empty() {
            return github_scoring::no_username();
        }

        if let Some(cache) = &self.cache {
            match cache.get(&username) {
                Ok(Some(profile)) => {
                    tracing::info!("Using cached GitHub profile for {}", username);
                    return github_scoring::score_profile(&profile);
                }
                Ok(None) => {}
                Err(e) => tracing::warn!("Cache lookup failed for {}: {}", username, e),
            }
        }

        let profile = self.github.fetch_profile(&username).await;

        if let Some(cache) = &self.cache {
            if let Err(e) = cache.put(&username, &profile) {
                tracing::warn!("Failed to cache GitHub profile for {}: {}", username, e);
            }
        }

        github_scoring::score_profile(&profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use async_trait::async_trait;
    use std::time::Duration;

    struct CannedProvider(InferenceOutcome);

    #[async_trait]
    impl InferenceProvider for CannedProvider {
        async fn generate(&self, _prompt: &str) -> InferenceOutcome {
            self.0.clone()
        }

        fn name(&self) -> &str {
            "Canned"
        }
    }

    fn offline_pipeline() -> ScreeningPipeline {
        // Bases point at a closed port so GitHub analysis degrades to zero.
        let config = Config {
            github_api_base: "http://127.0.0.1:9".to_string(),
            github_web_base: "http://127.0.0.1:9".to_string(),
            fetch_timeout: Duration::from_secs(2),
            ..Config::default()
        };
        ScreeningPipeline::new(GithubClient::new(&config).unwrap())
    }

    #[tokio::test]
    async fn test_empty_inputs_yield_all_zero_scorecard() {
        let pipeline = offline_pipeline();
        let report = pipeline.evaluate(&CandidateInput::default()).await;

        assert_eq!(report.resume.score, 0.0);
        assert_eq!(report.github.score, 0.0);
        assert_eq!(report.academics.score, 0.0);
        assert_eq!(report.projects.score, 0.0);
        assert_eq!(report.fit_score, 0.0);
        assert!(report.recommendation.is_degraded());
    }

    #[tokio::test]
    async fn test_evaluation_joins_all_domains() {
        let pipeline = offline_pipeline()
            .with_provider(CannedProvider(InferenceOutcome::Text("Hire.".to_string())));

        let input = CandidateInput {
            resume_text: "I know Python and have done Machine Learning and SQL work".to_string(),
            github_username: String::new(),
            tenth: 80.0,
            twelfth: 85.0,
            cgpa: 8.5,
            projects: vec![
                "Built a production-grade REST API with Flask".to_string(),
                "Implemented a linked list and graph traversal".to_string(),
            ],
        };

        let report = pipeline.evaluate(&input).await;

        assert_eq!(report.resume.score, 36.0);
        assert_eq!(report.github.summary, "No GitHub username provided");
        assert_eq!(report.academics.score, 83.5);
        assert_eq!(report.projects.score, 50.0);
        // 36*0.4 + 0*0.3 + 83.5*0.3 = 39.45; project score stays out.
        assert_eq!(report.fit_score, 39.45);
        assert_eq!(
            report.recommendation,
            InferenceOutcome::Text("Hire.".to_string())
        );
    }

    #[tokio::test]
    async fn test_repeated_evaluation_is_stable() {
        let pipeline = offline_pipeline();
        let input = CandidateInput {
            resume_text: "flask api".to_string(),
            tenth: 70.0,
            twelfth: 70.0,
            cgpa: 7.0,
            projects: vec!["Power BI sales dashboard".to_string()],
            ..CandidateInput::default()
        };

        let first = pipeline.evaluate(&input).await;
        let second = pipeline.evaluate(&input).await;

        assert_eq!(first.resume, second.resume);
        assert_eq!(first.projects, second.projects);
        assert_eq!(first.fit_score, second.fit_score);
    }

    #[tokio::test]
    async fn test_cached_profile_skips_fetch() {
        let cache = ProfileCache::in_memory(Duration::from_secs(3600)).unwrap();
        let mut profile = crate::models::GithubProfile::empty();
        profile.repo_count = 6;
        profile.source = crate::models::ProfileSource::Api;
        profile.languages = ["Rust", "Python", "Go"]
            .iter()
            .map(|l| l.to_string())
            .collect();
        cache.put("octocat", &profile).unwrap();

        let pipeline = offline_pipeline().with_cache(cache);
        let input = CandidateInput {
            github_username: "https://github.com/octocat".to_string(),
            ..CandidateInput::default()
        };

        let report = pipeline.evaluate(&input).await;
        assert_eq!(report.github.score, 76.0);
        assert_eq!(report.github.source, crate::models::ProfileSource::Api);
    }
}
