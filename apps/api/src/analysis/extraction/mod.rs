//! Fact extraction: skills, title, experience, education, salary, interview process.

pub mod experience;
pub mod interview;
pub mod salary;
pub mod skills;
pub mod title;

use anyhow::Result;

use crate::analysis::lexicon::Lexicon;
use crate::analysis::normalizer::NormalizedText;
use crate::models::profile::{ExperienceLevel, InterviewStageInfo, SalaryRange};

pub use experience::{extract_education, has_entry_framing, ExperienceClassifier};
pub use interview::InterviewParser;
pub use salary::SalaryParser;
pub use skills::SkillMatcher;
pub use title::TitleExtractor;

/// Everything the extractor learned from one posting.
#[derive(Debug, Clone, PartialEq)]
pub struct PostingFacts {
    /// Canonical skills in first-occurrence order.
    pub explicit_skills: Vec<String>,
    pub title: Option<String>,
    pub experience_level: ExperienceLevel,
    /// Largest stated minimum years of experience.
    pub min_years: Option<u32>,
    pub education: Vec<String>,
    pub salary: Option<SalaryRange>,
    pub interview: InterviewStageInfo,
}

/// Compiled extractors. Built once; shared read-only across requests.
pub struct Extractor {
    skills: SkillMatcher,
    title: TitleExtractor,
    experience: ExperienceClassifier,
    salary: SalaryParser,
    interview: InterviewParser,
}

impl Extractor {
    pub fn new(lexicon: &Lexicon) -> Result<Self> {
        Ok(Self {
            skills: SkillMatcher::new(lexicon)?,
            title: TitleExtractor::new()?,
            experience: ExperienceClassifier::new()?,
            salary: SalaryParser::new()?,
            interview: InterviewParser::new()?,
        })
    }

    /// `raw` is only used for the title, which keeps its original casing.
    pub fn extract(&self, raw: &str, normalized: &NormalizedText) -> PostingFacts {
        let min_years = self.experience.min_years(normalized);
        PostingFacts {
            explicit_skills: self.skills.extract(normalized),
            title: self.title.extract(raw),
            experience_level: self.experience.level(normalized, min_years),
            min_years,
            education: extract_education(normalized),
            salary: self.salary.parse(normalized),
            interview: self.interview.parse(normalized),
        }
    }

    pub fn skill_matcher(&self) -> &SkillMatcher {
        &self.skills
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::normalizer::normalize_text;

    #[test]
    fn test_extract_combines_all_facts() {
        let raw = "Senior Backend Engineer\n\
                   We need 6+ years of experience with Python and PostgreSQL.\n\
                   Bachelor's degree required. Salary: $150,000 - $180,000.\n\
                   Process: phone screen, then 3 rounds onsite.";
        let extractor = Extractor::new(&Lexicon::builtin()).unwrap();
        let facts = extractor.extract(raw, &normalize_text(raw));

        assert_eq!(facts.title.as_deref(), Some("Senior Backend Engineer"));
        assert_eq!(facts.experience_level, ExperienceLevel::Senior);
        assert_eq!(facts.min_years, Some(6));
        assert_eq!(facts.explicit_skills, vec!["backend", "python", "postgresql"]);
        assert_eq!(facts.education, vec!["Bachelor's Degree"]);
        assert_eq!(
            facts.salary,
            Some(SalaryRange {
                min: 150_000,
                max: Some(180_000)
            })
        );
        assert_eq!(facts.interview.stages, vec!["phone", "onsite"]);
        assert_eq!(facts.interview.estimated_rounds, Some(3));
    }

    #[test]
    fn test_extract_empty_posting() {
        let extractor = Extractor::new(&Lexicon::builtin()).unwrap();
        let facts = extractor.extract("", &normalize_text(""));
        assert!(facts.explicit_skills.is_empty());
        assert_eq!(facts.title, None);
        assert_eq!(facts.experience_level, ExperienceLevel::NotSpecified);
        assert!(facts.education.is_empty());
        assert_eq!(facts.salary, None);
        assert!(facts.interview.stages.is_empty());
    }
}
