use regex::Regex;

use crate::models::{GithubProfile, ProfileSource};

/// Best-effort extraction from the public profile page. The page structure
/// is not a contract: a missing or unparsable repository counter defaults
/// to 0 and absent language badges yield an empty set.
pub fn profile_from_page(html: &str) -> GithubProfile {
    let repo_count = extract_repo_count(html);

    if repo_count == 0 {
        return GithubProfile::empty();
    }

    GithubProfile {
        repo_count,
        languages: extract_languages(html),
        source: ProfileSource::Scrape,
    }
}

fn extract_repo_count(html: &str) -> u32 {
    let counter = Regex::new(r#"<span[^>]*class="[^"]*\bCounter\b[^"]*"[^>]*>([^<]*)</span>"#)
        .expect("static counter pattern must compile");

    counter
        .captures(html)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().trim().replace(',', "").parse().ok())
        .unwrap_or(0)
}

fn extract_languages(html: &str) -> std::collections::BTreeSet<String> {
    let badge = Regex::new(r#"itemprop="programmingLanguage"[^>]*>([^<]+)<"#)
        .expect("static language pattern must compile");

    badge
        .captures_iter(html)
        .filter_map(|c| {
            let text = c.get(1)?.as_str().trim();
            if text.is_empty() {
                None
            } else {
                Some(text.to_string())
            }
        })
        .collect()
}
