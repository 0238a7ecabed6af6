use crate::models::AcademicAnalysis;

/// Weighted academic score: 30% each for tenth and twelfth percentages,
/// 40% for CGPA scaled to a percentage. Input ranges are enforced at the
/// CLI boundary; the formula itself is applied as-is.
pub fn score_academics(tenth: f64, twelfth: f64, cgpa: f64) -> AcademicAnalysis {
    let score = tenth * 0.3 + twelfth * 0.3 + cgpa * 10.0 * 0.4;

    AcademicAnalysis {
        score: round2(score),
        summary: "Academic consistency evaluated".to_string(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
