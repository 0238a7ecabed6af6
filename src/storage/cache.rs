use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use std::path::Path;
use std::time::Duration;

use crate::error::Result;
use crate::models::{GithubProfile, ProfileSource};

/// Time-bounded cache of fetched GitHub profiles, keyed by username.
/// Entries are immutable once stored and expire only by age: `get` ignores
/// anything older than the TTL and `put` overwrites in place. Owned by the
/// caller and injected into the pipeline; the fetcher itself stays
/// stateless.
pub struct ProfileCache {
    conn: Connection,
    ttl: Duration,
}

impl ProfileCache {
    pub fn new<P: AsRef<Path>>(path: P, ttl: Duration) -> Result<Self> {
        let conn = Connection::open(path)?;
        let cache = Self { conn, ttl };
        cache.init_db()?;
        Ok(cache)
    }

    pub fn in_memory(ttl: Duration) -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let cache = Self { conn, ttl };
        cache.init_db()?;
        Ok(cache)
    }

    fn init_db(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS github_profiles (
                username TEXT PRIMARY KEY,
                repo_count INTEGER NOT NULL,
                languages_json TEXT NOT NULL,
                source TEXT NOT NULL,
                fetched_at TEXT NOT NULL
            );
            "#,
        )?;

        Ok(())
    }

    /// Returns the cached profile for `username` if one exists and is
    /// younger than the TTL.
    pub fn get(&self, username: &str) -> Result<Option<GithubProfile>> {
        let row = self.conn.query_row(
            "SELECT repo_count, languages_json, source, fetched_at
             FROM github_profiles WHERE username = ?1",
            params![username],
            |row| {
                let repo_count: u32 = row.get(0)?;
                let languages_json: String = row.get(1)?;
                let source: String = row.get(2)?;
                let fetched_at: String = row.get(3)?;
                Ok((repo_count, languages_json, source, fetched_at))
            },
        );

        let (repo_count, languages_json, source, fetched_at) = match row {
            Ok(values) => values,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let fetched_at = DateTime::parse_from_rfc3339(&fetched_at)
            .map(|t| t.with_timezone(&Utc))
            .unwrap_or_else(|_| DateTime::<Utc>::MIN_UTC);

        let age = (Utc::now() - fetched_at).to_std().unwrap_or(Duration::ZERO);
        if age >= self.ttl {
            tracing::debug!("Cache entry for {} expired (age {:?})", username, age);
            return Ok(None);
        }

        let languages = serde_json::from_str(&languages_json)?;
        let source = match source.as_str() {
            "api" => ProfileSource::Api,
            "scrape" => ProfileSource::Scrape,
            _ => ProfileSource::None,
        };

        Ok(Some(GithubProfile {
            repo_count,
            languages,
            source,
        }))
    }

    pub fn put(&self, username: &str, profile: &GithubProfile) -> Result<()> {
        let languages_json = serde_json::to_string(&profile.languages)?;

        self.conn.execute(
            r#"
            INSERT INTO github_profiles (username, repo_count, languages_json, source, fetched_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(username) DO UPDATE SET
                repo_count = excluded.repo_count,
                languages_json = excluded.languages_json,
                source = excluded.source,
                fetched_at = excluded.fetched_at
            "#,
            params![
                username,
                profile.repo_count,
                languages_json,
                profile.source.to_string(),
                Utc::now().to_rfc3339(),
            ],
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn sample_profile() -> GithubProfile {
        GithubProfile {
            repo_count: 6,
            languages: ["Rust", "Python"]
                .iter()
                .map(|l| l.to_string())
                .collect::<BTreeSet<_>>(),
            source: ProfileSource::Api,
        }
    }

    #[test]
    fn test_put_then_get() {
        let cache = ProfileCache::in_memory(Duration::from_secs(3600)).unwrap();
        cache.put("octocat", &sample_profile()).unwrap();

        let cached = cache.get("octocat").unwrap().unwrap();
        assert_eq!(cached, sample_profile());
    }

    #[test]
    fn test_missing_key() {
        let cache = ProfileCache::in_memory(Duration::from_secs(3600)).unwrap();
        assert!(cache.get("nobody").unwrap().is_none());
    }

    #[test]
    fn test_expired_entry_is_ignored() {
        let cache = ProfileCache::in_memory(Duration::ZERO).unwrap();
        cache.put("octocat", &sample_profile()).unwrap();
        assert!(cache.get("octocat").unwrap().is_none());
    }

    #[test]
    fn test_put_overwrites() {
        let cache = ProfileCache::in_memory(Duration::from_secs(3600)).unwrap();
        cache.put("octocat", &sample_profile()).unwrap();
        cache.put("octocat", &GithubProfile::empty()).unwrap();

        let cached = cache.get("octocat").unwrap().unwrap();
        assert_eq!(cached, GithubProfile::empty());
    }
}
