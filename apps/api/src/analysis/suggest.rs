//! Suggestion generation — advisory strings derived from the section,
//! skill, and experience signals. Ordered by first occurrence, exact
//! duplicates removed.

use std::collections::HashSet;

use crate::analysis::score::has_experience_signal;
use crate::analysis::sections::SectionFlags;
use crate::analysis::skills::SkillMatchResult;

const EXPERIENCE_SUGGESTION: &str = "Add internships, projects or work experience";

pub fn build_suggestions(
    sections: &SectionFlags,
    skills: &SkillMatchResult,
    text: &str,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    for section in sections.missing() {
        suggestions.push(format!("Add a clear \"{}\" section", section.label()));
    }
    for skill in &skills.missing {
        suggestions.push(format!("Consider adding skill: {skill}"));
    }
    if !has_experience_signal(text) {
        suggestions.push(EXPERIENCE_SUGGESTION.to_string());
    }

    dedup_preserving_order(suggestions)
}

fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items.into_iter().filter(|s| seen.insert(s.clone())).collect()
}
