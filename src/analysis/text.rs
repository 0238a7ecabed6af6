/// Repairs the common PDF-extraction defect where a word comes out with a
/// space between every letter ("P y t h o n"), collapses whitespace runs to
/// a single space and lowercases the result.
///
/// Idempotent: a collapsed run never re-forms, so a second pass is a no-op.
pub fn normalize(raw: &str) -> String {
    let tokens: Vec<&str> = raw.split_whitespace().collect();

    let mut repaired: Vec<String> = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        if is_single_letter(tokens[i]) {
            let mut j = i + 1;
            while j < tokens.len() && is_single_letter(tokens[j]) {
                j += 1;
            }
            // A lone single-letter word ("a", "I") is left alone; only a
            // run of them is an extraction artifact.
            if j - i >= 2 {
                repaired.push(tokens[i..j].concat());
                i = j;
                continue;
            }
        }
        repaired.push(tokens[i].to_string());
        i += 1;
    }

    repaired.join(" ").to_lowercase()
}

fn is_single_letter(token: &str) -> bool {
    token.len() == 1 && token.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_spaced_letters() {
        assert_eq!(normalize("P y t h o n"), "python");
        assert_eq!(normalize("knows P y t h o n and SQL"), "knows python and sql");
    }

    #[test]
    fn test_idempotent() {
        let inputs = ["P y t h o n", "  lots   of\twhitespace ", "Machine Learning"];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_case_folds_and_collapses_whitespace() {
        assert_eq!(normalize("  Machine\t\nLearning  "), "machine learning");
    }

    #[test]
    fn test_preserves_lone_single_letters() {
        assert_eq!(normalize("I know a thing"), "i know a thing");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }
}
