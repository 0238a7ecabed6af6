use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::profile::ProfileSource;

/// Resume analysis: skills are deduplicated and sorted alphabetically.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResumeAnalysis {
    pub skills: Vec<String>,
    pub score: f64,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AcademicAnalysis {
    pub score: f64,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectAnalysis {
    pub score: f64,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub summary: String,
}

/// GitHub domain result: the fetched profile plus its derived score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GithubAnalysis {
    pub score: f64,
    pub repo_count: u32,
    pub languages: Vec<String>,
    pub source: ProfileSource,
    pub summary: String,
}

/// Result of one inference invocation. Callers never see a raw failure;
/// every fault is folded into `Degraded` with a human-readable reason.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum InferenceOutcome {
    Text(String),
    Degraded(String),
}

impl InferenceOutcome {
    pub fn is_degraded(&self) -> bool {
        matches!(self, InferenceOutcome::Degraded(_))
    }
}

/// Everything one evaluation produced: the four domain analyses, the
/// aggregated fit score and the recommendation (or its degradation reason).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub resume: ResumeAnalysis,
    pub github: GithubAnalysis,
    pub academics: AcademicAnalysis,
    pub projects: ProjectAnalysis,
    pub fit_score: f64,
    pub recommendation: InferenceOutcome,
    pub evaluated_at: DateTime<Utc>,
}
