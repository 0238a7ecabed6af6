/// Category taxonomy for project descriptions plus the flat lexicon of
/// real-world orientation terms. Matching is plain case-insensitive
/// substring containment, so triggers stay short and unambiguous.
pub struct CategoryTaxonomy {
    categories: Vec<(&'static str, Vec<&'static str>)>,
    real_world_terms: Vec<&'static str>,
}

impl CategoryTaxonomy {
    pub fn new() -> Self {
        let categories = vec![
            (
                "machine_learning",
                vec![
                    "machine learning",
                    "classification",
                    "regression",
                    "model",
                    "training",
                    "accuracy",
                    "scikit",
                    "tensorflow",
                ],
            ),
            (
                "data_structures",
                vec![
                    "array",
                    "linked list",
                    "stack",
                    "queue",
                    "tree",
                    "graph",
                    "hash",
                    "algorithm",
                ],
            ),
            (
                "web_development",
                vec![
                    "react", "flask", "fastapi", "django", "frontend", "backend", "api", "rest",
                ],
            ),
            (
                "databases",
                vec!["sql", "mysql", "postgres", "mongodb", "database"],
            ),
            (
                "ai_llm",
                vec![
                    "llm",
                    "langchain",
                    "ollama",
                    "openai",
                    "embedding",
                    "faiss",
                    "vector",
                ],
            ),
        ];

        let real_world_terms = vec![
            "real-world",
            "production",
            "scalable",
            "dashboard",
            "automation",
            "system",
            "application",
        ];

        Self {
            categories,
            real_world_terms,
        }
    }

    /// Labels of every category with at least one trigger contained in
    /// `text`. `text` must already be lowercased.
    pub fn match_categories<'a>(&'a self, text: &str) -> Vec<&'a str> {
        self.categories
            .iter()
            .filter(|(_, triggers)| triggers.iter().any(|t| text.contains(t)))
            .map(|(label, _)| *label)
            .collect()
    }

    /// Whether `text` (lowercased) signals a real-world oriented project.
    pub fn is_real_world(&self, text: &str) -> bool {
        self.real_world_terms.iter().any(|t| text.contains(t))
    }
}

impl Default for CategoryTaxonomy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_triggers() {
        let taxonomy = CategoryTaxonomy::new();
        let categories = taxonomy.match_categories("spam detection with scikit and a rest api");
        assert_eq!(categories, vec!["machine_learning", "web_development"]);
    }

    #[test]
    fn test_real_world_lexicon() {
        let taxonomy = CategoryTaxonomy::new();
        assert!(taxonomy.is_real_world("deployed a production dashboard"));
        assert!(!taxonomy.is_real_world("toy sorting exercise"));
    }
}
