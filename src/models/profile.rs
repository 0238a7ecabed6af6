use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Where a fetched profile came from. `None` means both strategies failed
/// or neither found any public repositories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProfileSource {
    Api,
    Scrape,
    None,
}

impl std::fmt::Display for ProfileSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileSource::Api => write!(f, "api"),
            ProfileSource::Scrape => write!(f, "scrape"),
            ProfileSource::None => write!(f, "none"),
        }
    }
}

/// Public GitHub presence of a candidate, as far as either retrieval
/// strategy could determine it. Built fresh per fetch; never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GithubProfile {
    pub repo_count: u32,
    pub languages: BTreeSet<String>,
    pub source: ProfileSource,
}

impl GithubProfile {
    pub fn empty() -> Self {
        Self {
            repo_count: 0,
            languages: BTreeSet::new(),
            source: ProfileSource::None,
        }
    }
}

/// One entry from the repository-listing endpoint. Only the declared
/// primary language is consumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoSummary {
    #[serde(default)]
    pub language: Option<String>,
}
