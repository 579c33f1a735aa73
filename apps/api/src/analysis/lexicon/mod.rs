//! Read-only rule tables shared by every analysis stage.
//!
//! Built once at startup and handed to the pipeline behind an `Arc`. Stages
//! receive `&Lexicon`; nothing reaches for the tables as globals.

mod tables;

use std::collections::HashMap;

/// One vocabulary skill with its category and alternate spellings.
#[derive(Debug, Clone, Copy)]
pub struct SkillEntry {
    pub name: &'static str,
    pub category: &'static str,
    pub aliases: &'static [&'static str],
    /// False when the bare name is too common in prose ("go", "rest").
    pub match_name: bool,
}

impl SkillEntry {
    /// Spellings the skill matcher looks for.
    pub fn surface_forms(&self) -> impl Iterator<Item = &'static str> {
        let aliases: &'static [&'static str] = self.aliases;
        self.match_name
            .then_some(self.name)
            .into_iter()
            .chain(aliases.iter().copied())
    }
}

/// Role keyword triggers and the skills the role implies.
#[derive(Debug, Clone, Copy)]
pub struct RoleTemplate {
    pub name: &'static str,
    pub triggers: &'static [&'static str],
    pub hidden: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCluster {
    pub name: &'static str,
    pub members: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct FocusAreaDef {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct RolePattern {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct SkillRelation {
    pub skill: &'static str,
    pub prerequisites: &'static [&'static str],
    pub complementary: &'static [&'static str],
    pub advanced: &'static [&'static str],
}

/// Immutable bundle of every table the pipeline consults.
#[derive(Debug, Clone)]
pub struct Lexicon {
    skills: &'static [SkillEntry],
    categories: &'static [&'static str],
    co_occurrence: HashMap<&'static str, &'static [&'static str]>,
    role_templates: &'static [RoleTemplate],
    clusters: &'static [SkillCluster],
    focus_areas: &'static [FocusAreaDef],
    role_patterns: &'static [RolePattern],
    relationships: &'static [SkillRelation],
    category_by_skill: HashMap<&'static str, &'static str>,
}

impl Lexicon {
    /// The built-in tables.
    pub fn builtin() -> Self {
        Self::from_tables(
            tables::SKILLS,
            tables::CATEGORY_ORDER,
            tables::CO_OCCURRENCE,
            tables::ROLE_TEMPLATES,
            tables::CLUSTERS,
            tables::FOCUS_AREAS,
            tables::ROLE_PATTERNS,
            tables::RELATIONSHIPS,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn from_tables(
        skills: &'static [SkillEntry],
        categories: &'static [&'static str],
        co_occurrence: &'static [(&'static str, &'static [&'static str])],
        role_templates: &'static [RoleTemplate],
        clusters: &'static [SkillCluster],
        focus_areas: &'static [FocusAreaDef],
        role_patterns: &'static [RolePattern],
        relationships: &'static [SkillRelation],
    ) -> Self {
        let category_by_skill = skills.iter().map(|s| (s.name, s.category)).collect();
        Self {
            skills,
            categories,
            co_occurrence: co_occurrence.iter().copied().collect(),
            role_templates,
            clusters,
            focus_areas,
            role_patterns,
            relationships,
            category_by_skill,
        }
    }

    pub fn skills(&self) -> &'static [SkillEntry] {
        self.skills
    }

    /// Category names in display order.
    pub fn categories(&self) -> &'static [&'static str] {
        self.categories
    }

    pub fn category_of(&self, skill: &str) -> Option<&'static str> {
        self.category_by_skill.get(skill).copied()
    }

    /// Skills usually required alongside `skill`; empty when none are known.
    pub fn co_occurring(&self, skill: &str) -> &'static [&'static str] {
        self.co_occurrence.get(skill).copied().unwrap_or(&[])
    }

    pub fn role_templates(&self) -> &'static [RoleTemplate] {
        self.role_templates
    }

    pub fn clusters(&self) -> &'static [SkillCluster] {
        self.clusters
    }

    pub fn focus_areas(&self) -> &'static [FocusAreaDef] {
        self.focus_areas
    }

    pub fn role_patterns(&self) -> &'static [RolePattern] {
        self.role_patterns
    }

    pub fn relation(&self, skill: &str) -> Option<&'static SkillRelation> {
        self.relationships.iter().find(|r| r.skill == skill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_skill_names_and_aliases_are_unique_lowercase() {
        let lexicon = Lexicon::builtin();
        let mut seen = HashSet::new();
        for entry in lexicon.skills() {
            for form in std::iter::once(&entry.name).chain(entry.aliases.iter()) {
                assert_eq!(*form, form.to_lowercase(), "{form} must be lowercase");
                assert!(seen.insert(*form), "duplicate surface form {form}");
            }
        }
    }

    #[test]
    fn test_every_skill_has_a_surface_form() {
        let lexicon = Lexicon::builtin();
        for entry in lexicon.skills() {
            assert!(entry.surface_forms().next().is_some(), "{} is unmatchable", entry.name);
        }
        let go = lexicon.skills().iter().find(|e| e.name == "go").unwrap();
        assert!(!go.surface_forms().any(|form| form == "go"));
    }

    #[test]
    fn test_every_skill_category_is_ordered() {
        let lexicon = Lexicon::builtin();
        for entry in lexicon.skills() {
            assert!(
                lexicon.categories().contains(&entry.category),
                "{} has unknown category {}",
                entry.name,
                entry.category
            );
        }
    }

    #[test]
    fn test_cluster_members_are_vocabulary_skills() {
        let lexicon = Lexicon::builtin();
        for cluster in lexicon.clusters() {
            for member in cluster.members {
                assert!(
                    lexicon.category_of(member).is_some(),
                    "{} member {member} not in vocabulary",
                    cluster.name
                );
            }
        }
    }

    #[test]
    fn test_focus_keywords_are_vocabulary_skills() {
        let lexicon = Lexicon::builtin();
        for area in lexicon.focus_areas() {
            for keyword in area.keywords {
                assert!(lexicon.category_of(keyword).is_some(), "{keyword}");
            }
        }
    }

    #[test]
    fn test_role_template_names_are_unique() {
        let lexicon = Lexicon::builtin();
        let mut names = HashSet::new();
        for template in lexicon.role_templates() {
            assert!(!template.name.is_empty());
            assert!(names.insert(template.name), "duplicate role {}", template.name);
            assert!(!template.triggers.is_empty(), "{} has no triggers", template.name);
        }
    }

    #[test]
    fn test_co_occurring_lookup() {
        let lexicon = Lexicon::builtin();
        assert!(lexicon.co_occurring("kubernetes").contains(&"helm"));
        assert!(lexicon.co_occurring("cobol").is_empty());
    }

    #[test]
    fn test_aliases_resolve_to_categories_through_canonical_name() {
        let lexicon = Lexicon::builtin();
        assert_eq!(lexicon.category_of("postgresql"), Some(tables::DATABASES));
        assert_eq!(lexicon.category_of("postgres"), None);
    }
}
