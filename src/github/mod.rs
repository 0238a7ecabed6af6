pub mod client;
pub mod scrape;

pub use client::{normalize_username, profile_from_repos, GithubClient};
