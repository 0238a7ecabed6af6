/// Weights for the overall fit score. The project score is computed and
/// reported but intentionally excluded from the aggregate.
#[derive(Debug, Clone)]
pub struct AggregateWeights {
    pub resume: f64,
    pub github: f64,
    pub academic: f64,
}

impl Default for AggregateWeights {
    fn default() -> Self {
        Self {
            resume: 0.4,
            github: 0.3,
            academic: 0.3,
        }
    }
}

/// Combines the resume, GitHub and academic domain scores into one fit
/// score on [0, 100]. Monotone non-decreasing in each argument: raising any
/// one input never lowers the output.
pub fn aggregate(resume_score: f64, github_score: f64, academic_score: f64) -> f64 {
    aggregate_weighted(
        resume_score,
        github_score,
        academic_score,
        &AggregateWeights::default(),
    )
}

pub fn aggregate_weighted(
    resume_score: f64,
    github_score: f64,
    academic_score: f64,
    weights: &AggregateWeights,
) -> f64 {
    let combined = resume_score * weights.resume
        + github_score * weights.github
        + academic_score * weights.academic;

    round2(combined.clamp(0.0, 100.0))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(aggregate(0.0, 0.0, 0.0), 0.0);
        assert_eq!(aggregate(100.0, 100.0, 100.0), 100.0);
    }

    #[test]
    fn test_weighted_combination() {
        // 36*0.4 + 76*0.3 + 83.5*0.3 = 62.25
        assert_eq!(aggregate(36.0, 76.0, 83.5), 62.25);
    }

    #[test]
    fn test_monotone_in_each_argument() {
        let grid = [0.0, 25.0, 50.0, 75.0, 100.0];
        for &a in &grid {
            for &b in &grid {
                for &c in &grid {
                    let base = aggregate(a, b, c);
                    assert!(aggregate(a + 10.0, b, c) >= base);
                    assert!(aggregate(a, b + 10.0, c) >= base);
                    assert!(aggregate(a, b, c + 10.0) >= base);
                }
            }
        }
    }

    #[test]
    fn test_clamped_to_range() {
        let score = aggregate(100.0, 100.0, 100.0);
        assert!((0.0..=100.0).contains(&score));
    }
}
