use std::path::Path;

use crate::error::{Error, Result};

/// Extracts best-effort text from a resume PDF. Failures are reported
/// explicitly so the caller can degrade to empty resume text instead of
/// aborting the evaluation.
pub fn resume_text_from_pdf(path: &Path) -> Result<String> {
    let text = pdf_extract::extract_text(path)
        .map_err(|e| Error::ResumeExtraction(format!("{}: {e}", path.display())))?;

    Ok(text.trim().to_string())
}

/// Reads project descriptions from a file, one per line, skipping blanks.
pub fn projects_from_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_project_lines(&content))
}

pub fn parse_project_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_project_lines() {
        let input = "AI resume screener\n\n  Spam SMS detection  \n\t\n";
        assert_eq!(
            parse_project_lines(input),
            vec![
                "AI resume screener".to_string(),
                "Spam SMS detection".to_string(),
            ]
        );
    }

    #[test]
    fn test_missing_pdf_is_an_explicit_error() {
        let result = resume_text_from_pdf(Path::new("/nonexistent/resume.pdf"));
        assert!(result.is_err());
    }
}
