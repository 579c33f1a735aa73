//! Hidden-skill inference.
//!
//! Three independent strategies, unioned:
//! 1. co-occurrence: each explicit skill pulls in the skills usually required alongside it
//! 2. role templates: role trigger words found anywhere in the joined skill list
//!    contribute that role's implied skills
//! 3. cluster completion: two or more explicit members of a cluster pull in the rest
//!
//! Explicit skills are then removed and the result sorted alphabetically.

use std::collections::BTreeSet;

use tracing::debug;

use crate::analysis::lexicon::Lexicon;
use crate::models::profile::SkillRelationships;

const CLUSTER_THRESHOLD: usize = 2;

pub fn infer_hidden_skills(lexicon: &Lexicon, explicit_skills: &[String]) -> Vec<String> {
    let explicit: BTreeSet<String> = explicit_skills.iter().map(|s| s.to_lowercase()).collect();
    let mut hidden: BTreeSet<&str> = BTreeSet::new();

    for skill in &explicit {
        hidden.extend(lexicon.co_occurring(skill));
    }

    // BTreeSet iteration is sorted, so the joined text ignores input order
    let skill_text = explicit.iter().map(String::as_str).collect::<Vec<_>>().join(" ");
    for template in lexicon.role_templates() {
        if template.triggers.iter().any(|t| skill_text.contains(t)) {
            debug!(role = template.name, "Role template matched");
            hidden.extend(template.hidden);
        }
    }

    for cluster in lexicon.clusters() {
        let present = cluster
            .members
            .iter()
            .filter(|m| explicit.contains(**m))
            .count();
        if present >= CLUSTER_THRESHOLD {
            hidden.extend(cluster.members.iter().filter(|m| !explicit.contains(**m)));
        }
    }

    hidden
        .into_iter()
        .filter(|s| !explicit.contains(*s))
        .map(str::to_string)
        .collect()
}

/// Prerequisites, complementary and advanced skills for one skill; empty lists when unknown.
pub fn skill_relationships(lexicon: &Lexicon, skill: &str) -> SkillRelationships {
    let key = skill.trim().to_lowercase();
    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();

    match lexicon.relation(&key) {
        Some(rel) => SkillRelationships {
            prerequisites: owned(rel.prerequisites),
            complementary: owned(rel.complementary),
            advanced: owned(rel.advanced),
        },
        None => SkillRelationships::default(),
    }
}
