pub mod projects;

use regex::Regex;

pub use projects::CategoryTaxonomy;

/// Static mapping from skill label to ordered word-boundary patterns.
/// Built once per process; read-only afterwards. A skill is credited as
/// soon as any one of its patterns matches.
pub struct SkillTaxonomy {
    skills: Vec<SkillEntry>,
}

struct SkillEntry {
    label: &'static str,
    patterns: Vec<Regex>,
}

impl SkillTaxonomy {
    pub fn new() -> Self {
        let table: Vec<(&'static str, Vec<&'static str>)> = vec![
            ("Python", vec![r"\bpython\b"]),
            ("Machine Learning", vec![r"\bmachine learning\b", r"\bml\b"]),
            (
                "Data Science",
                vec![
                    r"\bdata science\b",
                    r"\bdata analysis\b",
                    r"\bpandas\b",
                    r"\bnumpy\b",
                ],
            ),
            (
                "Web Development",
                vec![r"\breact\b", r"\bhtml\b", r"\bcss\b", r"\bjavascript\b"],
            ),
            (
                "Backend Development",
                vec![r"\bflask\b", r"\bdjango\b", r"\bfastapi\b", r"\bapi\b"],
            ),
            (
                "Databases",
                vec![r"\bsql\b", r"\bmysql\b", r"\bpostgres\b", r"\bmongodb\b"],
            ),
            ("Power BI", vec![r"\bpower bi\b", r"\bdax\b"]),
            (
                "Core CS",
                vec![
                    r"\boperating systems\b",
                    r"\bcomputer networks\b",
                    r"\boop\b",
                    r"\bobject oriented\b",
                ],
            ),
        ];

        let skills = table
            .into_iter()
            .map(|(label, patterns)| SkillEntry {
                label,
                patterns: patterns
                    .into_iter()
                    .map(|p| Regex::new(p).expect("static skill pattern must compile"))
                    .collect(),
            })
            .collect();

        Self { skills }
    }

    /// Labels of all skills whose first matching pattern hits `text`.
    /// `text` is expected to be normalized (lowercase) already. The result
    /// is sorted alphabetically and free of duplicates by construction.
    pub fn match_skills(&self, text: &str) -> Vec<String> {
        let mut matched: Vec<String> = self
            .skills
            .iter()
            .filter(|entry| entry.patterns.iter().any(|p| p.is_match(text)))
            .map(|entry| entry.label.to_string())
            .collect();

        matched.sort();
        matched
    }
}

impl Default for SkillTaxonomy {
    fn default() -> Self {
        Self::new()
    }
}
