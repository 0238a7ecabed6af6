use crate::models::{GithubAnalysis, GithubProfile, ProfileSource};

const POINTS_PER_REPO: f64 = 6.0;
const REPO_CAP: f64 = 40.0;
const POINTS_PER_LANGUAGE: f64 = 10.0;
const LANGUAGE_CAP: f64 = 40.0;
const ACTIVITY_BONUS: f64 = 10.0;
const ACTIVITY_THRESHOLD: u32 = 5;

/// Result when no username was supplied; the fetch is skipped entirely.
pub fn no_username() -> GithubAnalysis {
    GithubAnalysis {
        score: 0.0,
        repo_count: 0,
        languages: Vec::new(),
        source: ProfileSource::None,
        summary: "No GitHub username provided".to_string(),
    }
}

/// Derives the GitHub domain score from a fetched profile.
pub fn score_profile(profile: &GithubProfile) -> GithubAnalysis {
    if profile.repo_count == 0 {
        return GithubAnalysis {
            score: 0.0,
            repo_count: 0,
            languages: Vec::new(),
            source: ProfileSource::None,
            summary: "No public GitHub data found".to_string(),
        };
    }

    let repo_score = (profile.repo_count as f64 * POINTS_PER_REPO).min(REPO_CAP);
    let language_score = (profile.languages.len() as f64 * POINTS_PER_LANGUAGE).min(LANGUAGE_CAP);
    let bonus = if profile.repo_count >= ACTIVITY_THRESHOLD {
        ACTIVITY_BONUS
    } else {
        0.0
    };

    let score = (repo_score + language_score + bonus).min(100.0);

    let summary = format!(
        "{} repositories, {} languages detected (source: {})",
        profile.repo_count,
        profile.languages.len(),
        profile.source
    );

    GithubAnalysis {
        score,
        repo_count: profile.repo_count,
        languages: profile.languages.iter().cloned().collect(),
        source: profile.source,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn profile(repo_count: u32, languages: &[&str], source: ProfileSource) -> GithubProfile {
        GithubProfile {
            repo_count,
            languages: languages.iter().map(|l| l.to_string()).collect::<BTreeSet<_>>(),
            source,
        }
    }

    #[test]
    fn test_scores_active_profile() {
        let result = score_profile(&profile(
            6,
            &["Rust", "Python", "TypeScript"],
            ProfileSource::Api,
        ));
        // min(36, 40) + min(30, 40) + 10
        assert_eq!(result.score, 76.0);
        assert_eq!(result.repo_count, 6);
        assert_eq!(result.languages.len(), 3);
        assert_eq!(result.source, ProfileSource::Api);
    }

    #[test]
    fn test_empty_profile_scores_zero() {
        let result = score_profile(&GithubProfile::empty());
        assert_eq!(result.score, 0.0);
        assert_eq!(result.summary, "No public GitHub data found");
        assert_eq!(result.source, ProfileSource::None);
    }

    #[test]
    fn test_no_bonus_below_threshold() {
        let result = score_profile(&profile(2, &["Python"], ProfileSource::Scrape));
        // min(12, 40) + min(10, 40), no bonus
        assert_eq!(result.score, 22.0);
    }

    #[test]
    fn test_caps_bound_large_profiles() {
        let many: Vec<&str> = vec![
            "Rust", "Go", "C", "C++", "Java", "Kotlin", "Swift", "Ruby", "PHP", "Scala",
        ];
        let result = score_profile(&profile(50, &many, ProfileSource::Api));
        assert_eq!(result.score, 90.0);
    }
}
