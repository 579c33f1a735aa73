use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Seniority band a posting is aimed at. Serialized as its display label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "Entry Level")]
    Entry,
    #[serde(rename = "Mid Level")]
    Mid,
    #[serde(rename = "Senior Level")]
    Senior,
    #[default]
    #[serde(rename = "Not Specified")]
    NotSpecified,
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperienceLevel::Entry => write!(f, "Entry Level"),
            ExperienceLevel::Mid => write!(f, "Mid Level"),
            ExperienceLevel::Senior => write!(f, "Senior Level"),
            ExperienceLevel::NotSpecified => write!(f, "Not Specified"),
        }
    }
}

/// A weighted category of the detected skill set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusArea {
    pub name: String,
    /// 0.0 – 1.0, rounded to two decimals
    pub weight: f64,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// A rule-triggered observation about posting quality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CritiqueItem {
    pub severity: Severity,
    pub message: String,
}

impl CritiqueItem {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityGrade {
    A,
    B,
    C,
    D,
    F,
}

impl fmt::Display for QualityGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            QualityGrade::A => "A",
            QualityGrade::B => "B",
            QualityGrade::C => "C",
            QualityGrade::D => "D",
            QualityGrade::F => "F",
        };
        write!(f, "{letter}")
    }
}

/// Aggregated posting quality: 0 – 100 score, letter grade, and the critiques behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityAnalysis {
    pub score: f64,
    pub grade: QualityGrade,
    pub critiques: Vec<CritiqueItem>,
}

/// Parsed pay bounds in whole currency units. `max` is absent for single figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u64,
    pub max: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewStageInfo {
    /// Canonical stage names, de-duplicated, in canonical stage order.
    pub stages: Vec<String>,
    /// Only set when the posting states a round count explicitly.
    pub estimated_rounds: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillDiversity {
    pub diversity_score: f64,
    pub categories: BTreeMap<String, usize>,
    pub is_specialized: bool,
    pub primary_category: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRelationships {
    pub prerequisites: Vec<String>,
    pub complementary: Vec<String>,
    pub advanced: Vec<String>,
}

/// Resume-vs-posting overlap report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentReport {
    /// 0.0 – 1.0
    pub score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendation: String,
}

/// Final response value of one analysis. Built once, never mutated, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeProfile {
    pub title: Option<String>,
    pub identified_role: String,
    pub experience_level: ExperienceLevel,
    pub education: Vec<String>,
    pub focus_areas: Vec<FocusArea>,
    pub explicit_skills: Vec<String>,
    pub hidden_skills: Vec<String>,
    pub critiques: Vec<CritiqueItem>,
    pub salary_range: Option<SalaryRange>,
    pub interview_stages: Vec<String>,
    pub interview_rounds: Option<u32>,
    pub quality_score: f64,
    pub quality_grade: QualityGrade,
    pub skill_diversity: SkillDiversity,
    pub resume_alignment: Option<f64>,
    pub resume_report: Option<AlignmentReport>,
    pub source_url: Option<String>,
    /// Set when the posting URL could not be fetched and placeholder text was analyzed.
    pub fetch_error: Option<String>,
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_level_serializes_as_label() {
        let json = serde_json::to_string(&ExperienceLevel::Senior).unwrap();
        assert_eq!(json, r#""Senior Level""#);
        let back: ExperienceLevel = serde_json::from_str(r#""Not Specified""#).unwrap();
        assert_eq!(back, ExperienceLevel::NotSpecified);
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let item = CritiqueItem::new(Severity::Warning, "x");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["severity"], "warning");
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::Warning);
        assert!(Severity::Warning > Severity::Info);
    }

    #[test]
    fn test_salary_range_without_max_serializes_null() {
        let range = SalaryRange {
            min: 75_000,
            max: None,
        };
        let json = serde_json::to_value(range).unwrap();
        assert_eq!(json["min"], 75_000);
        assert!(json["max"].is_null());
    }
}
