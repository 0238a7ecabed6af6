use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    #[error("Profile scrape error: {0}")]
    Scrape(String),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Resume extraction error: {0}")]
    ResumeExtraction(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cache error: {0}")]
    Cache(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
