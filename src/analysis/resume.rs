use crate::analysis::text::normalize;
use crate::models::ResumeAnalysis;
use crate::taxonomy::SkillTaxonomy;

const POINTS_PER_SKILL: f64 = 12.0;

/// Matches normalized resume text against the skill taxonomy. Total over
/// its input: empty or blank text yields a zero-score result, never an
/// error.
pub struct SkillDetector {
    taxonomy: SkillTaxonomy,
}

impl SkillDetector {
    pub fn new() -> Self {
        Self {
            taxonomy: SkillTaxonomy::new(),
        }
    }

    pub fn analyze(&self, text: &str) -> ResumeAnalysis {
        if text.trim().is_empty() {
            return ResumeAnalysis {
                skills: Vec::new(),
                score: 0.0,
                summary: "No resume text provided".to_string(),
            };
        }

        let clean_text = normalize(text);
        let skills = self.taxonomy.match_skills(&clean_text);

        let score = (skills.len() as f64 * POINTS_PER_SKILL).min(100.0);

        let summary = if skills.is_empty() {
            "No recognizable technical skills detected".to_string()
        } else {
            format!(
                "Detected {} skill areas: {}",
                skills.len(),
                skills.join(", ")
            )
        };

        ResumeAnalysis {
            skills,
            score,
            summary,
        }
    }
}

impl Default for SkillDetector {
    fn default() -> Self {
        Self::new()
    }
}
