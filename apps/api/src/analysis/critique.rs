//! Posting-quality critic.
//!
//! An ordered list of pure rules over the normalized text and extracted facts.
//! Each rule emits at most one critique with a fixed severity; output follows
//! rule order. `analyze_job_quality` folds the critiques into a 0–100 score.

use crate::analysis::extraction::{has_entry_framing, salary::VAGUE_SALARY_TERMS, PostingFacts};
use crate::analysis::normalizer::NormalizedText;
use crate::models::profile::{
    CritiqueItem, ExperienceLevel, QualityAnalysis, QualityGrade, Severity,
};

const SHORT_POSTING_WORDS: usize = 40;
const CONTRADICTION_YEARS: u32 = 3;
const LONG_TENURE_YEARS: u32 = 10;
const MAX_REASONABLE_SKILLS: usize = 15;

const INFO_PENALTY: f64 = 4.0;
const WARNING_PENALTY: f64 = 12.0;
const CRITICAL_PENALTY: f64 = 30.0;

const CLOUD_PROVIDERS: &[&str] = &[
    "aws",
    "amazon web services",
    "azure",
    "gcp",
    "google cloud",
    "oracle cloud",
    "ibm cloud",
    "alibaba cloud",
    "digitalocean",
];

const BUZZWORDS: &[&str] = &[
    "rockstar",
    "rock star",
    "ninja",
    "guru",
    "wizard",
    "unicorn",
    "superstar",
    "wear many hats",
    "work hard, play hard",
    "work hard play hard",
    "hit the ground running",
    "self-starter",
    "10x",
];

const RESPONSIBILITY_TERMS: &[&str] = &[
    "responsibilities",
    "responsible for",
    "you will",
    "you'll",
    "duties",
    "day-to-day",
    "day to day",
    "what you'll do",
    "in this role",
];

/// Inputs every rule may look at.
pub struct CritiqueContext<'a> {
    pub text: &'a NormalizedText,
    pub facts: &'a PostingFacts,
}

type Rule = fn(&CritiqueContext<'_>) -> Option<CritiqueItem>;

const RULES: &[Rule] = &[
    posting_length,
    entry_level_contradiction,
    salary_transparency,
    unspecified_cloud,
    experience_unspecified,
    long_tenure,
    skill_overload,
    buzzwords,
    missing_responsibilities,
    missing_interview_process,
];

/// Runs every rule in order and collects what fired.
pub fn generate_critiques(ctx: &CritiqueContext<'_>) -> Vec<CritiqueItem> {
    RULES.iter().filter_map(|rule| rule(ctx)).collect()
}

/// score = 100 − 4·info − 12·warning − 30·critical, clamped to 0–100.
pub fn analyze_job_quality(critiques: Vec<CritiqueItem>) -> QualityAnalysis {
    let penalty: f64 = critiques
        .iter()
        .map(|c| match c.severity {
            Severity::Info => INFO_PENALTY,
            Severity::Warning => WARNING_PENALTY,
            Severity::Critical => CRITICAL_PENALTY,
        })
        .sum();
    let score = (100.0 - penalty).clamp(0.0, 100.0);

    QualityAnalysis {
        score,
        grade: grade_for(score),
        critiques,
    }
}

pub fn grade_for(score: f64) -> QualityGrade {
    match score {
        s if s >= 90.0 => QualityGrade::A,
        s if s >= 80.0 => QualityGrade::B,
        s if s >= 70.0 => QualityGrade::C,
        s if s >= 60.0 => QualityGrade::D,
        _ => QualityGrade::F,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rules
// ────────────────────────────────────────────────────────────────────────────

fn posting_length(ctx: &CritiqueContext<'_>) -> Option<CritiqueItem> {
    let words = ctx.text.word_count();
    if words == 0 {
        return Some(CritiqueItem::new(
            Severity::Critical,
            "Job posting is empty; there is nothing to evaluate.",
        ));
    }
    (words < SHORT_POSTING_WORDS).then(|| {
        CritiqueItem::new(
            Severity::Info,
            format!("Posting is very short ({words} words); key details are likely missing."),
        )
    })
}

fn entry_level_contradiction(ctx: &CritiqueContext<'_>) -> Option<CritiqueItem> {
    let years = ctx.facts.min_years?;
    (has_entry_framing(ctx.text) && years >= CONTRADICTION_YEARS).then(|| {
        CritiqueItem::new(
            Severity::Warning,
            format!(
                "Posting is framed as entry-level but requires {years}+ years of experience; \
                 this contradiction discourages the candidates it targets."
            ),
        )
    })
}

fn salary_transparency(ctx: &CritiqueContext<'_>) -> Option<CritiqueItem> {
    if ctx.facts.salary.is_some() {
        return None;
    }
    if ctx.text.contains_any_term(VAGUE_SALARY_TERMS) {
        return Some(CritiqueItem::new(
            Severity::Info,
            "Salary is mentioned without figures; consider publishing a concrete range.",
        ));
    }
    Some(CritiqueItem::new(
        Severity::Warning,
        "No salary information provided; postings with a pay range attract more applicants.",
    ))
}

fn unspecified_cloud(ctx: &CritiqueContext<'_>) -> Option<CritiqueItem> {
    let mentions_cloud = ctx.text.contains_term("cloud");
    (mentions_cloud && !ctx.text.contains_any_term(CLOUD_PROVIDERS)).then(|| {
        CritiqueItem::new(
            Severity::Warning,
            "Cloud experience is requested but the cloud platform is unspecified \
             (e.g. AWS, Azure or GCP).",
        )
    })
}

fn experience_unspecified(ctx: &CritiqueContext<'_>) -> Option<CritiqueItem> {
    (ctx.facts.experience_level == ExperienceLevel::NotSpecified).then(|| {
        CritiqueItem::new(
            Severity::Info,
            "Experience level is not specified; state the seniority you are hiring for.",
        )
    })
}

fn long_tenure(ctx: &CritiqueContext<'_>) -> Option<CritiqueItem> {
    let years = ctx.facts.min_years?;
    (years >= LONG_TENURE_YEARS).then(|| {
        CritiqueItem::new(
            Severity::Info,
            format!("Requires {years}+ years of experience, which narrows the candidate pool."),
        )
    })
}

fn skill_overload(ctx: &CritiqueContext<'_>) -> Option<CritiqueItem> {
    let count = ctx.facts.explicit_skills.len();
    (count > MAX_REASONABLE_SKILLS).then(|| {
        CritiqueItem::new(
            Severity::Warning,
            format!(
                "Lists {count} distinct skills; an unrealistic requirement list deters \
                 qualified candidates."
            ),
        )
    })
}

fn buzzwords(ctx: &CritiqueContext<'_>) -> Option<CritiqueItem> {
    let found: Vec<&str> = BUZZWORDS
        .iter()
        .copied()
        .filter(|word| ctx.text.contains_term(word))
        .collect();
    (!found.is_empty()).then(|| {
        CritiqueItem::new(
            Severity::Info,
            format!(
                "Uses buzzword language ({}); describe the actual work instead.",
                found.join(", ")
            ),
        )
    })
}

fn missing_responsibilities(ctx: &CritiqueContext<'_>) -> Option<CritiqueItem> {
    (!ctx.text.contains_any_term(RESPONSIBILITY_TERMS)).then(|| {
        CritiqueItem::new(
            Severity::Info,
            "No responsibilities are described; candidates cannot tell what the job involves.",
        )
    })
}

fn missing_interview_process(ctx: &CritiqueContext<'_>) -> Option<CritiqueItem> {
    let interview = &ctx.facts.interview;
    let described = !interview.stages.is_empty()
        || interview.estimated_rounds.is_some()
        || ctx.text.contains_term("interview");
    (!described).then(|| {
        CritiqueItem::new(Severity::Info, "The interview process is not described.")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::extraction::Extractor;
    use crate::analysis::lexicon::Lexicon;
    use crate::analysis::normalizer::normalize_text;
    use proptest::prelude::*;

    fn critiques(raw: &str) -> Vec<CritiqueItem> {
        let extractor = Extractor::new(&Lexicon::builtin()).unwrap();
        let text = normalize_text(raw);
        let facts = extractor.extract(raw, &text);
        generate_critiques(&CritiqueContext {
            text: &text,
            facts: &facts,
        })
    }

    fn has(items: &[CritiqueItem], severity: Severity, needle: &str) -> bool {
        items
            .iter()
            .any(|c| c.severity == severity && c.message.to_lowercase().contains(needle))
    }

    #[test]
    fn test_empty_posting_is_critical() {
        let items = critiques("");
        assert!(!items.is_empty());
        assert_eq!(items[0].severity, Severity::Critical);
        // short-posting info is mutually exclusive with the empty rule
        assert!(!has(&items, Severity::Info, "very short"));
    }

    #[test]
    fn test_short_posting_is_info() {
        let items = critiques("Rust engineer wanted. Remote.");
        assert!(has(&items, Severity::Info, "very short"));
        assert!(!items.iter().any(|c| c.severity == Severity::Critical));
    }

    #[test]
    fn test_entry_level_contradiction_warns() {
        let items = critiques("Entry-level position requiring 5 years of experience");
        assert!(has(&items, Severity::Warning, "entry-level"));
    }

    #[test]
    fn test_entry_level_with_two_years_is_fine() {
        let items = critiques("Entry-level position, 2 years of experience preferred");
        assert!(!has(&items, Severity::Warning, "entry-level"));
    }

    #[test]
    fn test_missing_salary_warns() {
        let items = critiques("Backend engineer building APIs");
        assert!(has(&items, Severity::Warning, "salary"));
    }

    #[test]
    fn test_vague_salary_is_info_only() {
        let items = critiques("We offer a competitive salary and great benefits");
        assert!(has(&items, Severity::Info, "salary"));
        assert!(!has(&items, Severity::Warning, "salary"));
    }

    #[test]
    fn test_stated_salary_is_silent() {
        let items = critiques("Salary: $120,000 - $150,000");
        assert!(!items.iter().any(|c| c.message.to_lowercase().contains("salary")));
    }

    #[test]
    fn test_unspecified_cloud_warns() {
        let items = critiques("Experience with cloud infrastructure");
        assert!(has(&items, Severity::Warning, "unspecified"));

        let named = critiques("Experience with cloud infrastructure on AWS");
        assert!(!has(&named, Severity::Warning, "unspecified"));
    }

    #[test]
    fn test_long_tenure_and_buzzwords() {
        let items = critiques("Senior rockstar ninja with 12+ years of experience");
        assert!(has(&items, Severity::Info, "12+ years"));
        assert!(has(&items, Severity::Info, "rockstar, ninja"));
    }

    #[test]
    fn test_skill_overload_warns() {
        let items = critiques(
            "Python, Java, Go via golang, Rust, Ruby, PHP, Scala, Kotlin, Swift, React, \
             Angular, Vue, Docker, Kubernetes, Terraform, Ansible, Kafka",
        );
        assert!(has(&items, Severity::Warning, "distinct skills"));
    }

    #[test]
    fn test_interview_and_responsibilities_detected() {
        let items = critiques(
            "You will own the billing service. Our interview process has a phone screen.",
        );
        assert!(!has(&items, Severity::Info, "responsibilities"));
        assert!(!has(&items, Severity::Info, "interview process"));
    }

    #[test]
    fn test_zero_critiques_scores_100() {
        let quality = analyze_job_quality(vec![]);
        assert_eq!(quality.score, 100.0);
        assert_eq!(quality.grade, QualityGrade::A);
    }

    #[test]
    fn test_score_deductions_and_grade() {
        let quality = analyze_job_quality(vec![
            CritiqueItem::new(Severity::Info, "a"),
            CritiqueItem::new(Severity::Warning, "b"),
        ]);
        assert_eq!(quality.score, 84.0);
        assert_eq!(quality.grade, QualityGrade::B);
        assert_eq!(quality.critiques.len(), 2);
    }

    #[test]
    fn test_score_is_clamped() {
        let quality = analyze_job_quality(vec![CritiqueItem::new(Severity::Critical, "x"); 5]);
        assert_eq!(quality.score, 0.0);
        assert_eq!(quality.grade, QualityGrade::F);
    }

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(grade_for(90.0), QualityGrade::A);
        assert_eq!(grade_for(89.9), QualityGrade::B);
        assert_eq!(grade_for(70.0), QualityGrade::C);
        assert_eq!(grade_for(60.0), QualityGrade::D);
        assert_eq!(grade_for(59.0), QualityGrade::F);
    }

    fn severity() -> impl Strategy<Value = Severity> {
        prop_oneof![
            Just(Severity::Info),
            Just(Severity::Warning),
            Just(Severity::Critical)
        ]
    }

    proptest! {
        #[test]
        fn prop_adding_a_critique_never_raises_score(
            base in proptest::collection::vec(severity(), 0..10),
            extra in severity(),
        ) {
            let items: Vec<CritiqueItem> =
                base.iter().map(|s| CritiqueItem::new(*s, "x")).collect();
            let before = analyze_job_quality(items.clone()).score;
            let mut more = items;
            more.push(CritiqueItem::new(extra, "y"));
            let after = analyze_job_quality(more).score;
            prop_assert!(after <= before);
            prop_assert!((0.0..=100.0).contains(&after));
        }
    }
}
