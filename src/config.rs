use std::env;
use std::time::Duration;

/// Runtime configuration, read from the environment with defaults for every
/// knob. The screener runs fully unauthenticated, so nothing is required.
#[derive(Debug, Clone)]
pub struct Config {
    pub github_api_base: String,
    pub github_web_base: String,
    pub fetch_timeout: Duration,
    pub model: String,
    pub inference_timeout: Duration,
    pub cache_path: String,
    pub cache_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let github_api_base = env::var("GITHUB_API_BASE")
            .unwrap_or_else(|_| "https://api.github.com".to_string());

        let github_web_base = env::var("GITHUB_WEB_BASE")
            .unwrap_or_else(|_| "https://github.com".to_string());

        let fetch_timeout_secs = env::var("FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let model = env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3".to_string());

        let inference_timeout_secs = env::var("INFERENCE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let cache_path =
            env::var("CACHE_PATH").unwrap_or_else(|_| "screener-cache.db".to_string());

        let cache_ttl_secs = env::var("CACHE_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3600);

        Self {
            github_api_base,
            github_web_base,
            fetch_timeout: Duration::from_secs(fetch_timeout_secs),
            model,
            inference_timeout: Duration::from_secs(inference_timeout_secs),
            cache_path,
            cache_ttl: Duration::from_secs(cache_ttl_secs),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_api_base: "https://api.github.com".to_string(),
            github_web_base: "https://github.com".to_string(),
            fetch_timeout: Duration::from_secs(10),
            model: "llama3".to_string(),
            inference_timeout: Duration::from_secs(30),
            cache_path: "screener-cache.db".to_string(),
            cache_ttl: Duration::from_secs(3600),
        }
    }
}
