use regex::Regex;
use reqwest::{header, Client};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::github::scrape;
use crate::models::{GithubProfile, ProfileSource, RepoSummary};

/// Hybrid profile fetcher: structured repository listing first, public
/// profile page scrape as fallback. Stateless; every call builds a fresh
/// `GithubProfile` and no failure ever escapes `fetch_profile`.
pub struct GithubClient {
    client: Client,
    api_base: String,
    web_base: String,
}

impl GithubClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("candidate-screener/0.1"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.fetch_timeout)
            .build()?;

        Ok(Self {
            client,
            api_base: config.github_api_base.clone(),
            web_base: config.github_web_base.clone(),
        })
    }

    #[cfg(test)]
    fn with_bases(api_base: &str, web_base: &str) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(2))
                .build()
                .expect("test client"),
            api_base: api_base.to_string(),
            web_base: web_base.to_string(),
        }
    }

    /// Fetches the candidate's public GitHub presence. Strategy order:
    /// repository-listing API, then profile-page scrape; both bounded by
    /// the configured timeout. Both failing (or both reporting zero
    /// repositories) yields the empty profile with `source = none`.
    pub async fn fetch_profile(&self, username: &str) -> GithubProfile {
        match self.fetch_repositories(username).await {
            Ok(repos) => {
                let profile = profile_from_repos(&repos);
                if profile.repo_count > 0 {
                    return profile;
                }
                tracing::info!("API listed no repositories for {}, trying scrape", username);
            }
            Err(e) => {
                tracing::warn!("Repository listing unavailable for {}: {}", username, e);
            }
        }

        match self.fetch_profile_page(username).await {
            Ok(body) => scrape::profile_from_page(&body),
            Err(e) => {
                tracing::warn!("Profile scrape failed for {}: {}", username, e);
                GithubProfile::empty()
            }
        }
    }

    async fn fetch_repositories(&self, username: &str) -> Result<Vec<RepoSummary>> {
        let url = format!("{}/users/{}/repos", self.api_base, username);
        tracing::debug!("Fetching repository listing: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(Error::GitHubApi(format!(
                "Repository listing for {} returned {}",
                username,
                response.status()
            )));
        }

        // Anything that is not a JSON list (e.g. a rate-limit error object)
        // counts as "primary unavailable".
        let body: serde_json::Value = response.json().await?;
        match body {
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(|item| serde_json::from_value(item).map_err(Error::from))
                .collect(),
            _ => Err(Error::ParseError(
                "repository listing response is not a list".to_string(),
            )),
        }
    }

    async fn fetch_profile_page(&self, username: &str) -> Result<String> {
        let url = format!("{}/{}", self.web_base, username);
        tracing::debug!("Fetching profile page: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Scrape(format!(
                "Profile page for {} returned {}",
                username,
                response.status()
            )));
        }

        Ok(response.text().await?)
    }
}

/// Derives a profile from the repository listing: one count per entry, one
/// language per repository that declares one.
pub fn profile_from_repos(repos: &[RepoSummary]) -> GithubProfile {
    let languages = repos
        .iter()
        .filter_map(|r| r.language.as_deref())
        .filter(|l| !l.is_empty())
        .map(|l| l.to_string())
        .collect();

    GithubProfile {
        repo_count: repos.len() as u32,
        languages,
        source: if repos.is_empty() {
            ProfileSource::None
        } else {
            ProfileSource::Api
        },
    }
}

/// Accepts either a bare username or a full profile URL and extracts the
/// username.
pub fn normalize_username(input: &str) -> String {
    let input = input.trim();
    if input.is_empty() {
        return String::new();
    }

    let url_pattern =
        Regex::new(r"github\.com/([A-Za-z0-9_-]+)").expect("static username pattern must compile");

    match url_pattern.captures(input) {
        Some(captures) => captures[1].to_string(),
        None => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(language: Option<&str>) -> RepoSummary {
        RepoSummary {
            language: language.map(|l| l.to_string()),
        }
    }

    #[test]
    fn test_profile_from_repos() {
        let repos = vec![
            repo(Some("Rust")),
            repo(Some("Python")),
            repo(Some("Rust")),
            repo(None),
            repo(Some("TypeScript")),
            repo(None),
        ];

        let profile = profile_from_repos(&repos);
        assert_eq!(profile.repo_count, 6);
        assert_eq!(profile.languages.len(), 3);
        assert_eq!(profile.source, ProfileSource::Api);
    }

    #[test]
    fn test_profile_from_empty_listing() {
        let profile = profile_from_repos(&[]);
        assert_eq!(profile, GithubProfile::empty());
    }

    #[test]
    fn test_normalize_username() {
        assert_eq!(normalize_username("octocat"), "octocat");
        assert_eq!(normalize_username("  octocat  "), "octocat");
        assert_eq!(
            normalize_username("https://github.com/octo-cat_1"),
            "octo-cat_1"
        );
        assert_eq!(normalize_username("github.com/octocat/repos"), "octocat");
        assert_eq!(normalize_username(""), "");
    }

    #[tokio::test]
    async fn test_both_strategies_failing_yields_empty_profile() {
        // Ports nothing listens on, so both requests fail at transport level.
        let client = GithubClient::with_bases("http://127.0.0.1:9", "http://127.0.0.1:9");
        let profile = client.fetch_profile("nobody").await;
        assert_eq!(profile, GithubProfile::empty());
    }
}
