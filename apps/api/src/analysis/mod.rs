//! Resume analysis core — pure, synchronous, and total for non-empty
//! input. Every function here reads only its arguments and the static
//! skill catalog; no I/O, no shared mutable state, safe to call from any
//! number of concurrent requests.

pub mod ats;
pub mod bullets;
pub mod catalog;
pub mod handlers;
pub mod score;
pub mod sections;
pub mod skills;
pub mod suggest;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::ats::ats_subscore;
use crate::analysis::bullets::{analyze_bullets, BulletStats};
use crate::analysis::catalog::{CareerLevel, CatalogVariant};
use crate::analysis::score::{composite_score, tri_factor_score, CompositeScore, TriFactorScore};
use crate::analysis::sections::{detect_sections, SectionFlags, SectionVocabulary};
use crate::analysis::skills::{match_skills, SkillMatchResult};
use crate::analysis::suggest::build_suggestions;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("resume text is empty")]
    EmptyResume,
}

/// Everything one analysis call needs. Role and level travel with every
/// request; there is no process-wide selection state.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisInput {
    pub resume_text: String,
    pub role: String,
    #[serde(default)]
    pub level: CareerLevel,
    #[serde(default)]
    pub section_vocabulary: SectionVocabulary,
    #[serde(default)]
    pub catalog_variant: CatalogVariant,
}

/// Full analysis output. Created fresh per call and owned by the caller;
/// the service keeps no copy.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub role: String,
    pub level: CareerLevel,
    /// The composite overall score, 0-100.
    pub score: u32,
    pub skills: SkillMatchResult,
    pub sections: SectionFlags,
    pub bullets: BulletStats,
    pub ats: u32,
    pub composite: CompositeScore,
    pub tri_factor: TriFactorScore,
    pub suggestions: Vec<String>,
}

/// Lower-cases the input, nothing else. Downstream matchers rely on raw
/// substring adjacency, so whitespace and punctuation are left alone.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Runs the four sub-analyses and assembles both score variants plus the
/// suggestion list into one report.
pub fn analyze(input: &AnalysisInput) -> Result<AnalysisReport, AnalysisError> {
    if input.resume_text.trim().is_empty() {
        return Err(AnalysisError::EmptyResume);
    }

    let text = normalize(&input.resume_text);
    let skills = match_skills(&text, input.catalog_variant, &input.role, input.level);
    let sections = detect_sections(&text, input.section_vocabulary);
    // Bullets read the raw text so original casing survives for display.
    let bullets = analyze_bullets(&input.resume_text);
    let ats = ats_subscore(&text);

    let composite = composite_score(&skills, &bullets, &sections, ats);
    let tri_factor = tri_factor_score(&skills, &sections, &text);
    let suggestions = build_suggestions(&sections, &skills, &text);

    Ok(AnalysisReport {
        role: input.role.clone(),
        level: input.level,
        score: composite.overall,
        skills,
        sections,
        bullets,
        ats,
        composite,
        tri_factor,
        suggestions,
    })
}
