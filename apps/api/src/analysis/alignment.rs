//! Resume alignment: how much of the posting's explicit skill list a resume covers.
//!
//! A skill counts as covered when the resume mentions it under its canonical
//! name or any alias (boundary-aware, case-insensitive).

use crate::analysis::extraction::SkillMatcher;
use crate::analysis::normalizer::normalize_text;
use crate::models::profile::AlignmentReport;

const STRONG_FIT: f64 = 0.8;
const MODERATE_FIT: f64 = 0.6;
const GAPS_IN_RECOMMENDATION: usize = 3;

pub fn align_resume(
    matcher: &SkillMatcher,
    explicit_skills: &[String],
    resume_text: &str,
) -> AlignmentReport {
    let resume = normalize_text(resume_text);
    let resume_skills = matcher.extract(&resume);

    let (matched_skills, missing_skills): (Vec<String>, Vec<String>) =
        explicit_skills.iter().cloned().partition(|skill| {
            let skill = skill.to_lowercase();
            // vocabulary skills go through the matcher so alias-only names stay alias-only
            resume_skills.contains(&skill)
                || (!matcher.knows(&skill) && resume.contains_term(&skill))
        });

    let score = if explicit_skills.is_empty() {
        0.0
    } else {
        matched_skills.len() as f64 / explicit_skills.len() as f64
    };

    let recommendation = build_recommendation(score, explicit_skills.is_empty(), &missing_skills);

    AlignmentReport {
        score,
        matched_skills,
        missing_skills,
        recommendation,
    }
}

fn build_recommendation(score: f64, no_skills: bool, missing: &[String]) -> String {
    if no_skills {
        return "No explicit skills found in the posting; alignment cannot be assessed."
            .to_string();
    }

    let pct = (score * 100.0).round() as u32;
    let top_gaps = missing
        .iter()
        .take(GAPS_IN_RECOMMENDATION)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    if score >= STRONG_FIT {
        format!("Strong alignment ({pct}%). The resume covers the key skills in this posting.")
    } else if score >= MODERATE_FIT {
        format!("Moderate alignment ({pct}%). Consider highlighting: {top_gaps}.")
    } else {
        format!("Low alignment ({pct}%). Significant gaps: {top_gaps}.")
    }
}
