//! ATS heuristic — a coarse parse-friendliness sub-score from structural
//! text properties. Independent of the fuller section detection; the two
//! signals may disagree and both are reported.

/// Resumes longer than this are unlikely to parse cleanly.
const MAX_PARSE_FRIENDLY_CHARS: usize = 8000;

/// Characters some resume parsers mishandle.
const MARKUP_CHARS: &[char] = &['#', '@'];

/// Section keywords any parseable resume should mention.
const CORE_SECTION_KEYWORDS: &[&str] = &["education", "skills", "experience"];

/// Points per passed check.
const CHECK_POINTS: u32 = 10;

/// Three independent structural checks against the normalized text,
/// 10 points each, 30 max.
pub fn ats_subscore(text: &str) -> u32 {
    let mut score = 0;
    if text.chars().count() < MAX_PARSE_FRIENDLY_CHARS {
        score += CHECK_POINTS;
    }
    if !text.contains(MARKUP_CHARS) {
        score += CHECK_POINTS;
    }
    if CORE_SECTION_KEYWORDS.iter().any(|k| text.contains(k)) {
        score += CHECK_POINTS;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_short_resume_scores_full() {
        assert_eq!(ats_subscore("education and skills, nicely formatted"), 30);
    }

    #[test]
    fn test_overlong_text_loses_length_points() {
        // 9000 chars, no markup characters, mentions skills.
        let text = format!("{}skills", "x".repeat(9000));
        assert_eq!(ats_subscore(&text), 20);
    }

    #[test]
    fn test_markup_characters_lose_points() {
        assert_eq!(ats_subscore("skills: rust # systems @acme"), 20);
    }

    #[test]
    fn test_missing_core_sections_lose_points() {
        assert_eq!(ats_subscore("a plain paragraph about myself"), 20);
    }

    #[test]
    fn test_everything_wrong_scores_zero() {
        let text = format!("{}# @", "y".repeat(9000));
        assert_eq!(ats_subscore(&text), 0);
    }
}
