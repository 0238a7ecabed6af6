use std::collections::BTreeSet;

use crate::models::ProjectAnalysis;
use crate::taxonomy::CategoryTaxonomy;

const POINTS_PER_CATEGORY: f64 = 15.0;
const CATEGORY_CAP: f64 = 60.0;
const POINTS_PER_REAL_WORLD: f64 = 20.0;
const REAL_WORLD_CAP: f64 = 40.0;

/// Classifies free-text project descriptions against the category taxonomy
/// and the real-world lexicon. Category coverage accumulates as a set
/// across descriptions, so ordering never changes the score.
pub struct ProjectClassifier {
    taxonomy: CategoryTaxonomy,
}

impl ProjectClassifier {
    pub fn new() -> Self {
        Self {
            taxonomy: CategoryTaxonomy::new(),
        }
    }

    pub fn classify(&self, descriptions: &[String]) -> ProjectAnalysis {
        if descriptions.is_empty() {
            return ProjectAnalysis {
                score: 0.0,
                strengths: Vec::new(),
                weaknesses: vec!["No projects provided".to_string()],
                summary: "No projects available for evaluation".to_string(),
            };
        }

        let mut covered: BTreeSet<&str> = BTreeSet::new();
        let mut real_world_count: u32 = 0;

        for description in descriptions {
            let text = description.to_lowercase();

            covered.extend(self.taxonomy.match_categories(&text));

            if self.taxonomy.is_real_world(&text) {
                real_world_count += 1;
            }
        }

        let category_score = (covered.len() as f64 * POINTS_PER_CATEGORY).min(CATEGORY_CAP);
        let real_world_score =
            (real_world_count as f64 * POINTS_PER_REAL_WORLD).min(REAL_WORLD_CAP);
        let score = category_score + real_world_score;

        let mut strengths = Vec::new();
        let mut weaknesses = Vec::new();

        if covered.is_empty() {
            weaknesses.push("Projects do not clearly demonstrate core CS concepts".to_string());
        } else {
            strengths.push(format!(
                "Covers core areas: {}",
                covered.iter().copied().collect::<Vec<_>>().join(", ")
            ));
        }

        if real_world_count > 0 {
            strengths.push(format!(
                "{} real-world oriented project(s)",
                real_world_count
            ));
        } else {
            weaknesses.push("Projects lack clear real-world application focus".to_string());
        }

        let summary = format!(
            "Analyzed {} projects. Core knowledge areas covered: {}. Real-world projects detected: {}.",
            descriptions.len(),
            covered.len(),
            real_world_count
        );

        ProjectAnalysis {
            score,
            strengths,
            weaknesses,
            summary,
        }
    }
}

impl Default for ProjectClassifier {
    fn default() -> Self {
        Self::new()
    }
}
