use std::collections::HashSet;

use aho_corasick::AhoCorasick;
use anyhow::{Context, Result};

use crate::analysis::lexicon::Lexicon;
use crate::analysis::normalizer::{at_word_boundary, NormalizedText};

/// Vocabulary matcher: every surface form compiled into one automaton.
///
/// Among hits that sit on word boundaries ("java" never matches inside
/// "javascript"), the leftmost-longest non-overlapping ones win, so multi-word
/// skills ("react native", "machine learning") beat their shorter prefixes and a
/// longer form that fails the boundary check falls back to a shorter one
/// ("google cloud platforms" still yields gcp).
pub struct SkillMatcher {
    automaton: AhoCorasick,
    /// pattern id → canonical skill
    canonical: Vec<&'static str>,
}

impl SkillMatcher {
    pub fn new(lexicon: &Lexicon) -> Result<Self> {
        let mut patterns = Vec::new();
        let mut canonical = Vec::new();
        for entry in lexicon.skills() {
            for form in entry.surface_forms() {
                patterns.push(form);
                canonical.push(entry.name);
            }
        }

        // overlapping search needs the standard match kind
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&patterns)
            .context("Failed to build skill matcher")?;

        Ok(Self {
            automaton,
            canonical,
        })
    }

    /// Canonical skills in order of first appearance, without duplicates.
    pub fn extract(&self, text: &NormalizedText) -> Vec<String> {
        self.extract_from(text.as_str())
    }

    /// True when `skill` is a canonical vocabulary name.
    pub fn knows(&self, skill: &str) -> bool {
        self.canonical.iter().any(|name| *name == skill)
    }

    fn extract_from(&self, text: &str) -> Vec<String> {
        let mut hits: Vec<(usize, usize, &'static str)> = self
            .automaton
            .find_overlapping_iter(text)
            .filter(|mat| at_word_boundary(text, mat.start(), mat.end()))
            .map(|mat| (mat.start(), mat.end(), self.canonical[mat.pattern().as_usize()]))
            .collect();
        // leftmost first, longest first at the same start
        hits.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

        let mut seen = HashSet::new();
        let mut skills = Vec::new();
        let mut covered_to = 0;
        for (start, end, skill) in hits {
            if start < covered_to {
                continue;
            }
            covered_to = end;
            if seen.insert(skill) {
                skills.push(skill.to_string());
            }
        }
        skills
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::normalizer::normalize_text;

    fn extract(text: &str) -> Vec<String> {
        let matcher = SkillMatcher::new(&Lexicon::builtin()).unwrap();
        matcher.extract(&normalize_text(text))
    }

    #[test]
    fn test_empty_text_has_no_skills() {
        assert!(extract("").is_empty());
    }

    #[test]
    fn test_first_occurrence_order_and_dedup() {
        let skills = extract("Docker, Python, docker again, PYTHON, Kubernetes");
        assert_eq!(skills, vec!["docker", "python", "kubernetes"]);
    }

    #[test]
    fn test_aliases_resolve_to_canonical_names() {
        let skills = extract("Postgres on K8s, written in Golang");
        assert_eq!(skills, vec!["postgresql", "kubernetes", "go"]);
    }

    #[test]
    fn test_bare_go_is_not_a_skill() {
        let skills = extract("Ready to go? Good communication is key.");
        assert!(!skills.contains(&"go".to_string()));
        for text in ["your go-to engineer", "coding on the go", "Go and build things"] {
            assert!(extract(text).is_empty(), "{text}");
        }
    }

    #[test]
    fn test_common_words_are_not_skills() {
        let skills =
            extract("You will work with the rest of the team and express ideas clearly.");
        assert!(skills.is_empty(), "{skills:?}");
    }

    #[test]
    fn test_unambiguous_spellings_still_match() {
        assert_eq!(extract("Express.js services behind a REST API"), vec!["express", "rest"]);
        assert_eq!(extract("expressjs and restful endpoints"), vec!["express", "rest"]);
    }

    #[test]
    fn test_longest_form_failing_boundary_falls_back_to_shorter() {
        assert_eq!(extract("Google Cloud Platforms and AWS"), vec!["gcp", "aws"]);
        assert_eq!(extract("Google Cloud Platform"), vec!["gcp"]);
    }

    #[test]
    fn test_knows_canonical_names_only() {
        let matcher = SkillMatcher::new(&Lexicon::builtin()).unwrap();
        assert!(matcher.knows("kubernetes"));
        assert!(matcher.knows("go"));
        assert!(!matcher.knows("k8s"));
    }

    #[test]
    fn test_word_boundaries_are_respected() {
        let skills = extract("JavaScript experts; no Java needed. HTML/CSS.");
        assert_eq!(skills, vec!["javascript", "java", "html", "css"]);
        assert!(!extract("mlops tooling").contains(&"machine learning".to_string()));
    }

    #[test]
    fn test_multi_word_phrases_match_as_unit() {
        let skills = extract("React Native and machine learning with Apache Spark");
        assert_eq!(skills, vec!["react native", "machine learning", "spark"]);
    }

    #[test]
    fn test_symbol_skills() {
        let skills = extract("C++, C#, Node.js and CI/CD");
        assert_eq!(skills, vec!["c++", "c#", "node.js", "ci/cd"]);
    }

    #[test]
    fn test_restful_api_yields_rest_and_api() {
        let skills = extract("Design RESTful API endpoints");
        assert_eq!(skills, vec!["rest", "api"]);
    }
}
