//! Pipeline orchestration.
//!
//! `build_profile` is pure and deterministic: same posting and resume in,
//! byte-identical profile out. `run_analysis` wraps it with text acquisition
//! (direct text or URL fetch) and moves the CPU-bound work onto the blocking pool.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tracing::{debug, info, info_span, warn, Instrument, Span};
use uuid::Uuid;

use crate::analysis::alignment::align_resume;
use crate::analysis::critique::{analyze_job_quality, generate_critiques, CritiqueContext};
use crate::analysis::enrichment::infer_hidden_skills;
use crate::analysis::extraction::Extractor;
use crate::analysis::ingestion::{FetchError, PostingFetcher};
use crate::analysis::lexicon::Lexicon;
use crate::analysis::normalizer::normalize_text;
use crate::analysis::profiling::{build_focus_areas, calculate_skill_diversity, identify_role_type};
use crate::analysis::summary::{generate_summary, SummaryInput};
use crate::errors::AppError;
use crate::models::profile::AnalyzeProfile;
use crate::models::request::{AnalyzeRequest, JobPostingInput, RawPosting};

/// Compiled analysis stages over a shared, read-only lexicon.
pub struct ProfilePipeline {
    lexicon: Arc<Lexicon>,
    extractor: Extractor,
}

impl ProfilePipeline {
    pub fn new(lexicon: Arc<Lexicon>) -> Result<Self> {
        let extractor = Extractor::new(&lexicon)?;
        Ok(Self { lexicon, extractor })
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn build_profile(&self, posting: &RawPosting, resume: Option<&str>) -> AnalyzeProfile {
        let lexicon = self.lexicon.as_ref();
        let normalized = normalize_text(&posting.text);
        let facts = self.extractor.extract(&posting.text, &normalized);
        debug!(
            words = normalized.word_count(),
            skills = facts.explicit_skills.len(),
            level = %facts.experience_level,
            "Extracted posting facts"
        );

        let hidden_skills = infer_hidden_skills(lexicon, &facts.explicit_skills);
        let quality = analyze_job_quality(generate_critiques(&CritiqueContext {
            text: &normalized,
            facts: &facts,
        }));
        let focus_areas = build_focus_areas(lexicon, &facts.explicit_skills);
        let identified_role = identify_role_type(lexicon, &facts.explicit_skills);
        let skill_diversity = calculate_skill_diversity(lexicon, &facts.explicit_skills);

        let resume_report = resume
            .filter(|r| !r.trim().is_empty())
            .map(|r| align_resume(self.extractor.skill_matcher(), &facts.explicit_skills, r));
        let resume_alignment = resume_report.as_ref().map(|r| r.score);

        let summary = generate_summary(&SummaryInput {
            heading: facts.title.as_deref().unwrap_or(&identified_role),
            experience_level: facts.experience_level,
            explicit_skills: &facts.explicit_skills,
            focus_areas: &focus_areas,
            hidden_skill_count: hidden_skills.len(),
            quality: &quality,
            resume_alignment,
        });

        AnalyzeProfile {
            title: facts.title,
            identified_role,
            experience_level: facts.experience_level,
            education: facts.education,
            focus_areas,
            explicit_skills: facts.explicit_skills,
            hidden_skills,
            critiques: quality.critiques,
            salary_range: facts.salary,
            interview_stages: facts.interview.stages,
            interview_rounds: facts.interview.estimated_rounds,
            quality_score: quality.score,
            quality_grade: quality.grade,
            skill_diversity,
            resume_alignment,
            resume_report,
            source_url: posting.source_url.clone(),
            fetch_error: posting.fetch_error.clone(),
            summary,
        }
    }
}

/// Acquire text, then run the pure pipeline on the blocking pool.
pub async fn run_analysis(
    pipeline: Arc<ProfilePipeline>,
    fetcher: &dyn PostingFetcher,
    request: AnalyzeRequest,
) -> Result<AnalyzeProfile, AppError> {
    let request_id = Uuid::new_v4();
    let span = info_span!("analysis", %request_id);

    async move {
        let posting = acquire_posting(fetcher, &request.job_posting).await?;
        let resume = request.resume().map(str::to_owned);
        let started = Instant::now();

        let current = Span::current();
        let profile = tokio::task::spawn_blocking(move || {
            let _entered = current.enter();
            pipeline.build_profile(&posting, resume.as_deref())
        })
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("analysis task failed: {e}")))?;

        info!(
            skills = profile.explicit_skills.len(),
            hidden = profile.hidden_skills.len(),
            grade = %profile.quality_grade,
            degraded = profile.fetch_error.is_some(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Analysis complete"
        );
        Ok(profile)
    }
    .instrument(span)
    .await
}

/// Non-blank text wins; otherwise the URL is fetched. Fetch failures are absorbed
/// into placeholder text, except unsafe URLs, which are rejected outright.
async fn acquire_posting(
    fetcher: &dyn PostingFetcher,
    input: &JobPostingInput,
) -> Result<RawPosting, AppError> {
    let text = input.text.as_deref();
    if let Some(text) = text.filter(|t| !t.trim().is_empty()) {
        return Ok(RawPosting::from_text(text));
    }

    let url = input.url.as_deref().map(str::trim).filter(|u| !u.is_empty());
    let Some(url) = url else {
        return match text {
            // blank text with no URL is still analyzable: it yields critiques
            Some(text) => Ok(RawPosting::from_text(text)),
            None => Err(AppError::Validation(
                "job_posting requires either text or url".to_string(),
            )),
        };
    };

    match fetcher.fetch(url).await {
        Ok(text) => Ok(RawPosting::fetched(text, url)),
        Err(FetchError::UnsafeUrl(reason)) => Err(AppError::Validation(format!(
            "URL is not allowed or is potentially unsafe: {reason}"
        ))),
        Err(e) => {
            warn!(url, error = %e, "Fetch failed; analyzing placeholder text");
            Ok(RawPosting::fetch_failed(url, e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{ExperienceLevel, Severity};
    use crate::models::request::JobPostingInput;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const SAMPLE_POSTING: &str = "\
Senior Backend Engineer

About the role
You will design and build the services behind our payments platform, working
closely with product and infrastructure teams.

Responsibilities
- Build and maintain Python services using FastAPI and PostgreSQL
- Deploy workloads on AWS (EC2, S3, Lambda) with Docker and Kubernetes
- Design RESTful API contracts and review code in an Agile team

Requirements
- 5+ years of backend development experience
- Bachelor's degree in Computer Science or equivalent

Nice to have: Machine learning, React

Compensation: $150,000 - $180,000 per year.
Interview process: recruiter call, technical interview, system design and a behavioral round.
";

    fn pipeline() -> Arc<ProfilePipeline> {
        Arc::new(ProfilePipeline::new(Arc::new(Lexicon::builtin())).unwrap())
    }

    struct StubFetcher {
        result: fn() -> Result<String, FetchError>,
        calls: AtomicUsize,
    }

    impl StubFetcher {
        fn new(result: fn() -> Result<String, FetchError>) -> Self {
            Self {
                result,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl PostingFetcher for StubFetcher {
        async fn fetch(&self, _url: &str) -> Result<String, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.result)()
        }
    }

    fn request(text: Option<&str>, url: Option<&str>, resume: Option<&str>) -> AnalyzeRequest {
        AnalyzeRequest {
            job_posting: JobPostingInput {
                text: text.map(str::to_string),
                url: url.map(str::to_string),
            },
            resume_text: resume.map(str::to_string),
        }
    }

    #[test]
    fn test_sample_posting_end_to_end() {
        let profile = pipeline().build_profile(&RawPosting::from_text(SAMPLE_POSTING), None);

        assert!(profile.explicit_skills.len() >= 5);
        for skill in ["python", "fastapi", "postgresql", "aws", "docker", "kubernetes"] {
            assert!(
                profile.explicit_skills.contains(&skill.to_string()),
                "missing {skill}"
            );
        }
        assert!(!profile.hidden_skills.is_empty());
        assert_eq!(profile.experience_level, ExperienceLevel::Senior);
        assert!(profile.focus_areas.len() >= 2);
        assert!(profile
            .critiques
            .iter()
            .all(|c| c.severity != Severity::Critical));
        assert_eq!(profile.title.as_deref(), Some("Senior Backend Engineer"));
        assert_eq!(profile.education, vec!["Bachelor's Degree"]);
        assert!(profile.salary_range.is_some());
        assert!(profile.interview_stages.contains(&"technical".to_string()));
        assert!(profile.resume_alignment.is_none());
        assert!(profile.resume_report.is_none());
        assert!(profile.summary.starts_with("Senior Backend Engineer (Senior Level)"));
    }

    #[test]
    fn test_hidden_skills_disjoint_from_explicit() {
        let profile = pipeline().build_profile(&RawPosting::from_text(SAMPLE_POSTING), None);
        for skill in &profile.hidden_skills {
            assert!(!profile.explicit_skills.contains(skill));
        }
    }

    #[test]
    fn test_profile_is_deterministic() {
        let pipeline = pipeline();
        let posting = RawPosting::from_text(SAMPLE_POSTING);
        let first = serde_json::to_string(&pipeline.build_profile(&posting, Some("Python dev"))).unwrap();
        let second = serde_json::to_string(&pipeline.build_profile(&posting, Some("Python dev"))).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_posting_still_produces_profile() {
        let profile = pipeline().build_profile(&RawPosting::from_text(""), None);
        assert!(!profile.critiques.is_empty());
        assert!(profile.explicit_skills.is_empty());
        assert_eq!(profile.focus_areas[0].name, "General");
        assert_eq!(profile.identified_role, "Software Engineer");
        assert_eq!(profile.experience_level, ExperienceLevel::NotSpecified);
        assert!(profile.summary.starts_with("Software Engineer (Not Specified)"));
    }

    #[test]
    fn test_resume_alignment_present_only_with_resume() {
        let pipeline = pipeline();
        let posting = RawPosting::from_text(SAMPLE_POSTING);

        let blank = pipeline.build_profile(&posting, Some("   "));
        assert!(blank.resume_alignment.is_none());

        let profile = pipeline.build_profile(&posting, Some("Python, FastAPI and Docker on AWS"));
        let score = profile.resume_alignment.unwrap();
        assert!(score > 0.0 && score < 1.0);
        let report = profile.resume_report.unwrap();
        assert!(report.matched_skills.contains(&"fastapi".to_string()));
        assert!(report.missing_skills.contains(&"kubernetes".to_string()));
    }

    #[tokio::test]
    async fn test_text_wins_over_url() {
        let fetcher = StubFetcher::new(|| Ok("fetched".to_string()));
        let profile = run_analysis(
            pipeline(),
            &fetcher,
            request(Some(SAMPLE_POSTING), Some("https://jobs.example.com/1"), None),
        )
        .await
        .unwrap();
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
        assert!(profile.source_url.is_none());
    }

    #[tokio::test]
    async fn test_url_is_fetched_when_text_blank() {
        let fetcher = StubFetcher::new(|| Ok("Rust engineer with Kubernetes".to_string()));
        let profile = run_analysis(
            pipeline(),
            &fetcher,
            request(Some("  "), Some("https://jobs.example.com/1"), None),
        )
        .await
        .unwrap();
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
        assert_eq!(profile.source_url.as_deref(), Some("https://jobs.example.com/1"));
        assert!(profile.explicit_skills.contains(&"kubernetes".to_string()));
        assert!(profile.fetch_error.is_none());
    }

    #[tokio::test]
    async fn test_fetch_failure_is_absorbed() {
        let fetcher = StubFetcher::new(|| Err(FetchError::EmptyDocument));
        let profile = run_analysis(
            pipeline(),
            &fetcher,
            request(None, Some("https://jobs.example.com/1"), None),
        )
        .await
        .unwrap();
        assert_eq!(
            profile.fetch_error.as_deref(),
            Some("document contains no visible text")
        );
        assert!(profile.explicit_skills.is_empty());
        assert!(!profile.critiques.is_empty());
    }

    #[tokio::test]
    async fn test_unsafe_url_is_validation_error() {
        let fetcher = StubFetcher::new(|| Err(FetchError::UnsafeUrl("loopback".to_string())));
        let err = run_analysis(
            pipeline(),
            &fetcher,
            request(None, Some("http://127.0.0.1/"), None),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("loopback")));
    }

    #[tokio::test]
    async fn test_missing_text_and_url_is_validation_error() {
        let fetcher = StubFetcher::new(|| Ok(String::new()));
        let err = run_analysis(pipeline(), &fetcher, request(None, None, None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_text_without_url_is_analyzed() {
        let fetcher = StubFetcher::new(|| Ok(String::new()));
        let profile = run_analysis(pipeline(), &fetcher, request(Some(""), None, None))
            .await
            .unwrap();
        assert!(profile
            .critiques
            .iter()
            .any(|c| c.severity == Severity::Critical));
    }
}
