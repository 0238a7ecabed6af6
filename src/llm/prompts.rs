use crate::models::{AcademicAnalysis, GithubAnalysis, ProjectAnalysis, ResumeAnalysis};

/// Substitute recommendation shown when inference degrades for any reason.
pub const FALLBACK_RECOMMENDATION: &str = "Candidate shows strong academic performance \
and relevant technical skills. Manual review recommended.";

/// Builds the recruitment prompt from all four domain results.
pub fn candidate_prompt(
    resume: &ResumeAnalysis,
    github: &GithubAnalysis,
    academics: &AcademicAnalysis,
    projects: &ProjectAnalysis,
) -> String {
    let mut prompt = String::from("You are an AI recruitment assistant.\n\n");
    prompt.push_str("Evaluate the candidate based on:\n");

    prompt.push_str(&format!(
        "- Resume skills ({}/100): {}\n",
        resume.score,
        if resume.skills.is_empty() {
            "none detected".to_string()
        } else {
            resume.skills.join(", ")
        }
    ));

    prompt.push_str(&format!(
        "- GitHub ({}/100): {}\n",
        github.score, github.summary
    ));

    prompt.push_str(&format!(
        "- Academics ({}/100): {}\n",
        academics.score, academics.summary
    ));

    prompt.push_str(&format!(
        "- Projects ({}/100): {}\n",
        projects.score, projects.summary
    ));

    prompt.push_str("\nExplain strengths, weaknesses, and hiring recommendation.\n");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProfileSource;

    #[test]
    fn test_prompt_includes_all_domains() {
        let resume = ResumeAnalysis {
            skills: vec!["Python".to_string()],
            score: 12.0,
            summary: "Detected 1 skill areas: Python".to_string(),
        };
        let github = GithubAnalysis {
            score: 0.0,
            repo_count: 0,
            languages: Vec::new(),
            source: ProfileSource::None,
            summary: "No public GitHub data found".to_string(),
        };
        let academics = AcademicAnalysis {
            score: 83.5,
            summary: "Academic consistency evaluated".to_string(),
        };
        let projects = ProjectAnalysis {
            score: 50.0,
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            summary: "Analyzed 2 projects.".to_string(),
        };

        let prompt = candidate_prompt(&resume, &github, &academics, &projects);

        assert!(prompt.contains("Resume skills (12/100): Python"));
        assert!(prompt.contains("No public GitHub data found"));
        assert!(prompt.contains("Academics (83.5/100)"));
        assert!(prompt.contains("Projects (50/100)"));
        assert!(prompt.contains("hiring recommendation"));
    }
}
