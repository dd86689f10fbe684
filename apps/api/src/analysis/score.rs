//! Score aggregation — both report variants computed from the same
//! sub-analyses: a weighted sum clamped to [0, 100], and three
//! independent percentage factors.

use serde::Serialize;

use crate::analysis::bullets::BulletStats;
use crate::analysis::sections::SectionFlags;
use crate::analysis::skills::SkillMatchResult;

// Calibration constants for the weighted-sum variant.
const W_SKILL: u32 = 6;
const W_BULLET: u32 = 6;
const W_SECTION: u32 = 5;
const MAX_SCORE: u32 = 100;

// Tri-factor constants.
const SECTION_POINTS: u32 = 14;
const DEFAULT_SKILL_SCORE: u32 = 40;
const EXPERIENCE_PRESENT_SCORE: u32 = 80;
const EXPERIENCE_ABSENT_SCORE: u32 = 40;

/// Weighted-sum report: one bounded overall score plus its components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompositeScore {
    pub overall: u32,
    pub skill_points: u32,
    pub bullet_points: u32,
    pub section_points: u32,
    pub ats_points: u32,
}

pub fn composite_score(
    skills: &SkillMatchResult,
    bullets: &BulletStats,
    sections: &SectionFlags,
    ats: u32,
) -> CompositeScore {
    let skill_points = skills.matched.len() as u32 * W_SKILL;
    let bullet_points = bullets.strong * W_BULLET;
    let section_points = sections.present_count() * W_SECTION;
    let overall = (skill_points + bullet_points + section_points + ats).min(MAX_SCORE);

    CompositeScore {
        overall,
        skill_points,
        bullet_points,
        section_points,
        ats_points: ats,
    }
}

/// Three independent percentage sub-scores serving the second report
/// surface: section-coverage ATS, skill-match ratio, experience signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TriFactorScore {
    pub ats: u32,
    pub skills: u32,
    pub experience: u32,
}

pub fn tri_factor_score(
    skills: &SkillMatchResult,
    sections: &SectionFlags,
    text: &str,
) -> TriFactorScore {
    let ats = (sections.present_count() * SECTION_POINTS).min(MAX_SCORE);

    let skill_pct = if skills.known_role && skills.expected_count() > 0 {
        let ratio = skills.matched.len() as f64 / skills.expected_count() as f64;
        (ratio * 100.0).round() as u32
    } else {
        DEFAULT_SKILL_SCORE
    };

    let experience = if has_experience_signal(text) {
        EXPERIENCE_PRESENT_SCORE
    } else {
        EXPERIENCE_ABSENT_SCORE
    };

    TriFactorScore {
        ats,
        skills: skill_pct,
        experience,
    }
}

/// "experience" or "project" anywhere in the normalized text.
pub fn has_experience_signal(text: &str) -> bool {
    text.contains("experience") || text.contains("project")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::sections::{detect_sections, SectionVocabulary};

    fn skills(matched: &[&str], missing: &[&str], known_role: bool) -> SkillMatchResult {
        SkillMatchResult {
            matched: matched.iter().map(|s| s.to_string()).collect(),
            missing: missing.iter().map(|s| s.to_string()).collect(),
            known_role,
        }
    }

    #[test]
    fn test_composite_sums_weighted_components() {
        let sections = detect_sections("education skills", SectionVocabulary::FourSection);
        let score = composite_score(
            &skills(&["html", "css"], &["sql"], true),
            &BulletStats { total: 4, strong: 3 },
            &sections,
            30,
        );
        // 2*6 + 3*6 + 2*5 + 30 = 70
        assert_eq!(score.overall, 70);
        assert_eq!(score.skill_points, 12);
        assert_eq!(score.bullet_points, 18);
        assert_eq!(score.section_points, 10);
        assert_eq!(score.ats_points, 30);
    }

    #[test]
    fn test_composite_is_clamped_to_100() {
        let sections = detect_sections(
            "education skills experience projects",
            SectionVocabulary::FourSection,
        );
        let many: Vec<&str> = vec!["a"; 20];
        let score = composite_score(
            &skills(&many, &[], true),
            &BulletStats { total: 20, strong: 20 },
            &sections,
            30,
        );
        assert_eq!(score.overall, 100);
    }

    #[test]
    fn test_composite_floor_is_zero() {
        let sections = detect_sections("", SectionVocabulary::FourSection);
        let score = composite_score(
            &skills(&[], &[], false),
            &BulletStats { total: 0, strong: 0 },
            &sections,
            0,
        );
        assert_eq!(score.overall, 0);
    }

    #[test]
    fn test_tri_factor_section_coverage() {
        let sections = detect_sections(
            "education experience projects skills certification internship achievement",
            SectionVocabulary::SevenSection,
        );
        let score = tri_factor_score(&skills(&[], &[], false), &sections, "experience");
        // 7 sections * 14 points, capped at 100.
        assert_eq!(score.ats, 98);
    }

    #[test]
    fn test_tri_factor_skill_percentage_rounds() {
        let sections = detect_sections("", SectionVocabulary::SevenSection);
        let score = tri_factor_score(&skills(&["git"], &["sql", "api"], true), &sections, "");
        // 1 of 3 -> 33%
        assert_eq!(score.skills, 33);
    }

    #[test]
    fn test_tri_factor_unknown_role_defaults_to_40() {
        let sections = detect_sections("", SectionVocabulary::SevenSection);
        let score = tri_factor_score(&skills(&[], &[], false), &sections, "");
        assert_eq!(score.skills, 40);
    }

    #[test]
    fn test_tri_factor_experience_signal() {
        let sections = detect_sections("", SectionVocabulary::SevenSection);
        let with = tri_factor_score(&skills(&[], &[], false), &sections, "my project work");
        let without = tri_factor_score(&skills(&[], &[], false), &sections, "my hobbies");
        assert_eq!(with.experience, 80);
        assert_eq!(without.experience, 40);
    }

    #[test]
    fn test_experience_signal_keywords() {
        assert!(has_experience_signal("work experience"));
        assert!(has_experience_signal("capstone project"));
        assert!(!has_experience_signal("education only"));
    }
}
