use crate::models::profile::{ExperienceLevel, FocusArea, QualityAnalysis};

const SKILL_PREVIEW: usize = 5;

/// Everything the digest line draws on.
pub struct SummaryInput<'a> {
    pub heading: &'a str,
    pub experience_level: ExperienceLevel,
    pub explicit_skills: &'a [String],
    pub focus_areas: &'a [FocusArea],
    pub hidden_skill_count: usize,
    pub quality: &'a QualityAnalysis,
    pub resume_alignment: Option<f64>,
}

/// One-line, pipe-separated digest of a profile. Never fails.
pub fn generate_summary(input: &SummaryInput<'_>) -> String {
    let mut parts = vec![format!("{} ({})", input.heading, input.experience_level)];

    if input.explicit_skills.is_empty() {
        parts.push("Key skills: none detected".to_string());
    } else {
        let preview = input
            .explicit_skills
            .iter()
            .take(SKILL_PREVIEW)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let rest = input.explicit_skills.len().saturating_sub(SKILL_PREVIEW);
        if rest > 0 {
            parts.push(format!("Key skills: {preview} (+{rest} more)"));
        } else {
            parts.push(format!("Key skills: {preview}"));
        }
    }

    match input.focus_areas.first() {
        Some(area) if !area.skills.is_empty() => parts.push(format!(
            "Primary focus: {} ({}% match)",
            area.name,
            (area.weight * 100.0).round() as u32
        )),
        _ => parts.push("Primary focus: not determined".to_string()),
    }

    parts.push(match input.hidden_skill_count {
        0 => "No hidden skills inferred".to_string(),
        1 => "Inferred 1 hidden skill".to_string(),
        n => format!("Inferred {n} hidden skills"),
    });

    parts.push(format!(
        "Posting quality: {} ({}/100)",
        input.quality.grade,
        input.quality.score.round() as u32
    ));

    if let Some(alignment) = input.resume_alignment {
        parts.push(format!(
            "Resume alignment: {}%",
            (alignment * 100.0).round() as u32
        ));
    }

    parts.join(" | ")
}
