//! Skill matching — lexical presence of expected skills in the normalized
//! resume text. Matching is substring-based; a matched skill claims
//! presence, not proficiency.

use serde::Serialize;

use crate::analysis::catalog::{expected_skills, CareerLevel, CatalogVariant};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillMatchResult {
    /// Skills found in the text, in catalog order.
    pub matched: Vec<String>,
    /// Expected minus matched, in catalog order.
    pub missing: Vec<String>,
    /// False when the role is absent from the chosen catalog. Both lists
    /// are empty in that case; no requirements are fabricated.
    pub known_role: bool,
}

impl SkillMatchResult {
    pub fn expected_count(&self) -> usize {
        self.matched.len() + self.missing.len()
    }
}

/// Splits the expected-skill set into matched and missing against the
/// normalized text. Unknown roles degrade to an empty result instead of
/// failing; the aggregator substitutes the default sub-score downstream.
pub fn match_skills(
    text: &str,
    variant: CatalogVariant,
    role: &str,
    level: CareerLevel,
) -> SkillMatchResult {
    let Some(expected) = expected_skills(variant, role, level) else {
        return SkillMatchResult {
            matched: Vec::new(),
            missing: Vec::new(),
            known_role: false,
        };
    };

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for skill in expected {
        if text.contains(skill) {
            matched.push(skill.to_string());
        } else {
            missing.push(skill.to_string());
        }
    }

    SkillMatchResult {
        matched,
        missing,
        known_role: true,
    }
}
