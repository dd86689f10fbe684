//! Bullet quality — classifies resume lines as strong bullets and powers
//! the bullet improver. Operates on the raw text so original casing
//! survives for display; verb matching lower-cases per line.

use serde::Serialize;

/// Verbs that signal an accomplishment rather than a duty.
const ACTION_VERBS: &[&str] = &[
    "built",
    "developed",
    "designed",
    "implemented",
    "optimized",
    "created",
    "led",
    "improved",
];

/// Lines at or under this trimmed length are headers or noise, not bullets.
const MIN_BULLET_CHARS: usize = 8;

const IMPACT_HINT: &str = " (add measurable impact)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BulletStats {
    /// Non-trivial lines considered.
    pub total: u32,
    /// Lines with at least one action verb and at least one digit.
    pub strong: u32,
}

pub fn analyze_bullets(raw_text: &str) -> BulletStats {
    let mut total = 0;
    let mut strong = 0;

    for line in raw_text.split('\n') {
        if line.trim().chars().count() <= MIN_BULLET_CHARS {
            continue;
        }
        total += 1;

        let lower = line.to_lowercase();
        let has_verb = ACTION_VERBS.iter().any(|v| lower.contains(v));
        let has_number = line.chars().any(|c| c.is_ascii_digit());
        if has_verb && has_number {
            strong += 1;
        }
    }

    BulletStats { total, strong }
}

/// One output line per input line, bullet-prefixed. Lines without a digit
/// get the measurable-impact hint appended; quantified lines pass through.
pub fn improve_bullets(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| {
            if line.chars().any(|c| c.is_ascii_digit()) {
                format!("• {line}")
            } else {
                format!("• {line}{IMPACT_HINT}")
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_needs_verb_and_number() {
        let stats = analyze_bullets(
            "Built a system that improved throughput by 30%\nHelped with tasks around the office",
        );
        assert_eq!(stats.total, 2);
        assert_eq!(stats.strong, 1);
    }

    #[test]
    fn test_verb_without_number_is_not_strong() {
        let stats = analyze_bullets("Designed the onboarding flow");
        assert_eq!(stats.total, 1);
        assert_eq!(stats.strong, 0);
    }

    #[test]
    fn test_number_without_verb_is_not_strong() {
        let stats = analyze_bullets("Responsible for 3 interns");
        assert_eq!(stats.total, 1);
        assert_eq!(stats.strong, 0);
    }

    #[test]
    fn test_short_lines_are_noise() {
        // "Skills" and "Projects" trim to 8 chars or fewer and are skipped.
        let stats = analyze_bullets("Skills\nProjects\n   \nLed a team of 4 engineers");
        assert_eq!(stats.total, 1);
        assert_eq!(stats.strong, 1);
    }

    #[test]
    fn test_verb_matching_is_case_insensitive() {
        let stats = analyze_bullets("OPTIMIZED query latency by 40ms");
        assert_eq!(stats.strong, 1);
    }

    #[test]
    fn test_empty_text_yields_zero_stats() {
        let stats = analyze_bullets("");
        assert_eq!(stats, BulletStats { total: 0, strong: 0 });
    }

    #[test]
    fn test_strong_never_exceeds_total() {
        let stats = analyze_bullets(
            "Built 3 services\nCreated 2 dashboards\nImproved deploys by 50%\nnotes",
        );
        assert!(stats.strong <= stats.total);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.strong, 3);
    }

    #[test]
    fn test_improve_appends_hint_only_without_digit() {
        let lines = improve_bullets("Led team\nShipped 5 features");
        assert_eq!(
            lines,
            vec!["• Led team (add measurable impact)", "• Shipped 5 features"]
        );
    }

    #[test]
    fn test_improve_keeps_one_output_line_per_input_line() {
        let lines = improve_bullets("one\ntwo\nthree");
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.starts_with("• ")));
    }
}
