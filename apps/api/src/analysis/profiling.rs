//! Focus areas, role identification and skill diversity.

use std::collections::BTreeMap;

use crate::analysis::lexicon::Lexicon;
use crate::analysis::round2;
use crate::models::profile::{FocusArea, SkillDiversity};

const COUNT_WEIGHT: f64 = 0.7;
const COVERAGE_WEIGHT: f64 = 0.3;
const MIN_ROLE_MATCHES: usize = 2;
const FALLBACK_ROLE: &str = "Software Engineer";
const DIVERSITY_CATEGORY_CAP: f64 = 5.0;
const SPECIALIZED_SHARE: f64 = 0.6;

/// Weighted focus areas, heaviest first (ties keep definition order).
///
/// weight = 0.7 × matched/total + 0.3 × matched/area size, rounded to 2 decimals.
pub fn build_focus_areas(lexicon: &Lexicon, explicit_skills: &[String]) -> Vec<FocusArea> {
    if explicit_skills.is_empty() {
        return vec![FocusArea {
            name: "General".to_string(),
            weight: 1.0,
            skills: vec![],
        }];
    }

    let total = explicit_skills.len() as f64;
    let mut areas: Vec<FocusArea> = lexicon
        .focus_areas()
        .iter()
        .filter_map(|area| {
            let matched: Vec<String> = explicit_skills
                .iter()
                .filter(|s| area.keywords.contains(&s.to_lowercase().as_str()))
                .cloned()
                .collect();
            if matched.is_empty() {
                return None;
            }
            let n = matched.len() as f64;
            let weight = COUNT_WEIGHT * (n / total) + COVERAGE_WEIGHT * (n / area.keywords.len() as f64);
            Some(FocusArea {
                name: area.name.to_string(),
                weight: round2(weight),
                skills: matched,
            })
        })
        .collect();

    if areas.is_empty() {
        return vec![FocusArea {
            name: "General Technology".to_string(),
            weight: 1.0,
            skills: explicit_skills.to_vec(),
        }];
    }

    // stable: equal weights stay in definition order
    areas.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    areas
}

/// Role whose pattern keywords appear most often in the joined skill text.
/// Needs at least two hits; earlier patterns win ties.
pub fn identify_role_type(lexicon: &Lexicon, explicit_skills: &[String]) -> String {
    let skill_text = explicit_skills.join(" ").to_lowercase();

    let mut best = FALLBACK_ROLE;
    let mut best_count = 0;
    for pattern in lexicon.role_patterns() {
        let count = pattern
            .keywords
            .iter()
            .filter(|k| skill_text.contains(*k))
            .count();
        if count > best_count {
            best_count = count;
            best = pattern.name;
        }
    }

    if best_count >= MIN_ROLE_MATCHES {
        best.to_string()
    } else {
        FALLBACK_ROLE.to_string()
    }
}

pub fn calculate_skill_diversity(lexicon: &Lexicon, explicit_skills: &[String]) -> SkillDiversity {
    if explicit_skills.is_empty() {
        return SkillDiversity::default();
    }

    let mut categories: BTreeMap<String, usize> = BTreeMap::new();
    for skill in explicit_skills {
        if let Some(category) = lexicon.category_of(&skill.to_lowercase()) {
            *categories.entry(category.to_string()).or_default() += 1;
        }
    }

    let diversity_score = round2((categories.len() as f64 / DIVERSITY_CATEGORY_CAP).min(1.0));

    // first in display order wins ties
    let mut primary: Option<(&str, usize)> = None;
    for category in lexicon.categories() {
        if let Some(&count) = categories.get(*category) {
            if primary.map_or(true, |(_, best)| count > best) {
                primary = Some((*category, count));
            }
        }
    }

    let is_specialized = primary
        .is_some_and(|(_, count)| count as f64 / explicit_skills.len() as f64 > SPECIALIZED_SHARE);

    SkillDiversity {
        diversity_score,
        categories,
        is_specialized,
        primary_category: primary.map(|(name, _)| name.to_string()),
    }
}
