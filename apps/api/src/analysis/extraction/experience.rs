use anyhow::{Context, Result};
use regex::Regex;

use crate::analysis::normalizer::NormalizedText;
use crate::models::profile::ExperienceLevel;

const SENIOR_TERMS: &[&str] = &[
    "senior",
    "sr.",
    "sr",
    "principal",
    "staff engineer",
    "staff software",
    "tech lead",
    "team lead",
    "lead engineer",
    "lead developer",
    "head of engineering",
];

const ENTRY_TERMS: &[&str] = &[
    "entry-level",
    "entry level",
    "junior",
    "jr.",
    "jr",
    "new grad",
    "new graduate",
    "recent graduate",
    "graduate program",
    "internship",
    "intern",
    "no experience required",
];

const MID_TERMS: &[&str] = &["mid-level", "mid level", "midlevel", "intermediate"];

/// Canonical education label and the phrases that signal it.
const EDUCATION_LEVELS: &[(&str, &[&str])] = &[
    ("High School Diploma", &["high school", "ged", "secondary school"]),
    (
        "Associate Degree",
        &["associate degree", "associate's degree", "associates degree", "associate's"],
    ),
    (
        "Bachelor's Degree",
        &["bachelor", "bachelor's", "bachelors", "b.s.", "b.sc", "b.a.", "undergraduate degree"],
    ),
    (
        "Master's Degree",
        &["master's", "masters", "master of", "m.s.", "m.sc", "msc", "mba", "graduate degree"],
    ),
    ("Doctorate (PhD)", &["phd", "ph.d", "doctorate", "doctoral"]),
    (
        "Professional Certification",
        &["certification", "certifications", "certified", "certificate"],
    ),
];

/// Experience-level and years-of-experience classifier.
pub struct ExperienceClassifier {
    plus_years: Regex,
    years_of_experience: Regex,
}

impl ExperienceClassifier {
    pub fn new() -> Result<Self> {
        Ok(Self {
            plus_years: Regex::new(r"\b(\d{1,2})\s*\+\s*(?:years?|yrs?)\b")
                .context("Failed to compile years pattern")?,
            years_of_experience: Regex::new(
                r"\b(\d{1,2})\s*(?:(?:-|to)\s*\d{1,2}\s*)?(?:years?|yrs?)\s+(?:of\s+)?(?:[a-z/+#.-]+\s+){0,3}?experience",
            )
            .context("Failed to compile experience pattern")?,
        })
    }

    /// Largest stated minimum years of experience, e.g. `5+ years` or `3-5 years of experience` → 3.
    pub fn min_years(&self, text: &NormalizedText) -> Option<u32> {
        let text = text.as_str();
        self.plus_years
            .captures_iter(text)
            .chain(self.years_of_experience.captures_iter(text))
            .filter_map(|caps| caps.get(1)?.as_str().parse::<u32>().ok())
            .max()
    }

    /// Keyword precedence: senior, then entry, then mid, then stated years.
    pub fn level(&self, text: &NormalizedText, min_years: Option<u32>) -> ExperienceLevel {
        if text.contains_any_term(SENIOR_TERMS) {
            return ExperienceLevel::Senior;
        }
        if text.contains_any_term(ENTRY_TERMS) {
            return ExperienceLevel::Entry;
        }
        if text.contains_any_term(MID_TERMS) {
            return ExperienceLevel::Mid;
        }
        match min_years {
            Some(years) if years >= 5 => ExperienceLevel::Senior,
            Some(years) if years >= 2 => ExperienceLevel::Mid,
            Some(_) => ExperienceLevel::Entry,
            None => ExperienceLevel::NotSpecified,
        }
    }
}

/// Every education level mentioned, in fixed label order.
pub fn extract_education(text: &NormalizedText) -> Vec<String> {
    EDUCATION_LEVELS
        .iter()
        .filter(|(_, terms)| text.contains_any_term(terms))
        .map(|(label, _)| label.to_string())
        .collect()
}

/// True when the posting frames itself as entry level.
pub fn has_entry_framing(text: &NormalizedText) -> bool {
    text.contains_any_term(&["entry-level", "entry level", "junior", "new grad"])
}
