//! Role-skill catalog — static expectation data keyed by catalog variant,
//! role, and career level.
//!
//! Two catalogs ship with the service and are calibrated independently:
//! the leveled one carries Fresher/Mid/Senior tiers per role, the flat one
//! carries a single list per role (and more roles). They are never merged;
//! callers declare which variant a request should score against.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which role-skill catalog a request wants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogVariant {
    #[default]
    Leveled,
    Flat,
}

impl CatalogVariant {
    /// Parses the wire spelling used by serde (`leveled` / `flat`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "leveled" => Some(CatalogVariant::Leveled),
            "flat" => Some(CatalogVariant::Flat),
            _ => None,
        }
    }
}

/// Experience tier selecting the cumulative skill-expectation set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CareerLevel {
    #[default]
    Fresher,
    Mid,
    Senior,
}

impl CareerLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            CareerLevel::Fresher => "Fresher",
            CareerLevel::Mid => "Mid",
            CareerLevel::Senior => "Senior",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Fresher" => Some(CareerLevel::Fresher),
            "Mid" => Some(CareerLevel::Mid),
            "Senior" => Some(CareerLevel::Senior),
            _ => None,
        }
    }
}

impl fmt::Display for CareerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct LeveledProfile {
    role: &'static str,
    fresher: &'static [&'static str],
    mid: &'static [&'static str],
    senior: &'static [&'static str],
}

// All skill keywords are lowercase and matched as substrings of the
// normalized resume text.
const LEVELED: &[LeveledProfile] = &[
    LeveledProfile {
        role: "Software Engineer",
        fresher: &["html", "css", "javascript", "git", "sql"],
        mid: &["react", "node", "api", "testing"],
        senior: &["system design", "scalability", "cloud"],
    },
    LeveledProfile {
        role: "AI / ML Engineer",
        fresher: &["python", "numpy", "pandas", "machine learning"],
        mid: &["tensorflow", "model training"],
        senior: &["deployment", "optimization"],
    },
    LeveledProfile {
        role: "Civil Engineer",
        fresher: &["autocad", "drawing"],
        mid: &["estimation", "site work"],
        senior: &["planning", "project management"],
    },
];

const FLAT: &[(&str, &[&str])] = &[
    ("Software Engineer", &["data structures", "algorithms", "oops", "git"]),
    ("Frontend Engineer", &["html", "css", "javascript", "react"]),
    ("Backend Engineer", &["node", "java", "sql", "api"]),
    ("Full Stack Engineer", &["html", "css", "javascript", "node", "react"]),
    ("AI / ML Engineer", &["python", "machine learning", "deep learning", "tensorflow"]),
    ("Data Engineer", &["sql", "python", "etl", "data pipeline"]),
    ("DevOps Engineer", &["docker", "kubernetes", "aws", "ci/cd"]),
    ("Cloud Engineer", &["aws", "azure", "gcp"]),
    ("Cybersecurity Engineer", &["network security", "encryption", "linux"]),
    ("Mobile App Engineer", &["android", "ios", "flutter", "react native"]),
];

/// Effective expected-skill list for a role under the chosen variant.
///
/// Leveled lookups are cumulative: the Fresher tier plus the selected
/// tier, first occurrence wins, duplicates removed. Flat lookups ignore
/// the level. Returns `None` for roles the catalog does not know.
pub fn expected_skills(
    variant: CatalogVariant,
    role: &str,
    level: CareerLevel,
) -> Option<Vec<&'static str>> {
    match variant {
        CatalogVariant::Leveled => {
            let profile = LEVELED.iter().find(|p| p.role == role)?;
            let tier = match level {
                CareerLevel::Fresher => profile.fresher,
                CareerLevel::Mid => profile.mid,
                CareerLevel::Senior => profile.senior,
            };
            let mut skills = Vec::with_capacity(profile.fresher.len() + tier.len());
            for &skill in profile.fresher.iter().chain(tier) {
                if !skills.contains(&skill) {
                    skills.push(skill);
                }
            }
            Some(skills)
        }
        CatalogVariant::Flat => FLAT
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, skills)| skills.to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresher_lookup_has_no_duplicates() {
        let skills =
            expected_skills(CatalogVariant::Leveled, "Software Engineer", CareerLevel::Fresher)
                .unwrap();
        assert_eq!(skills, vec!["html", "css", "javascript", "git", "sql"]);
    }

    #[test]
    fn test_mid_lookup_is_cumulative_with_fresher() {
        let skills =
            expected_skills(CatalogVariant::Leveled, "Software Engineer", CareerLevel::Mid)
                .unwrap();
        assert_eq!(
            skills,
            vec!["html", "css", "javascript", "git", "sql", "react", "node", "api", "testing"]
        );
    }

    #[test]
    fn test_senior_lookup_does_not_include_mid_tier() {
        let skills =
            expected_skills(CatalogVariant::Leveled, "Software Engineer", CareerLevel::Senior)
                .unwrap();
        assert!(skills.contains(&"system design"));
        assert!(!skills.contains(&"react"));
    }

    #[test]
    fn test_flat_lookup_ignores_level() {
        let fresher =
            expected_skills(CatalogVariant::Flat, "DevOps Engineer", CareerLevel::Fresher);
        let senior = expected_skills(CatalogVariant::Flat, "DevOps Engineer", CareerLevel::Senior);
        assert_eq!(fresher, senior);
        assert_eq!(fresher.unwrap(), vec!["docker", "kubernetes", "aws", "ci/cd"]);
    }

    #[test]
    fn test_unknown_role_is_none_in_both_variants() {
        assert!(expected_skills(CatalogVariant::Leveled, "Astronaut", CareerLevel::Mid).is_none());
        assert!(expected_skills(CatalogVariant::Flat, "Astronaut", CareerLevel::Mid).is_none());
    }

    #[test]
    fn test_catalog_keywords_are_lowercase_and_nonempty() {
        let leveled = LEVELED
            .iter()
            .flat_map(|p| p.fresher.iter().chain(p.mid).chain(p.senior));
        let flat = FLAT.iter().flat_map(|(_, skills)| skills.iter());
        for skill in leveled.chain(flat) {
            assert!(!skill.is_empty());
            assert_eq!(*skill, skill.to_lowercase().as_str());
        }
    }

    #[test]
    fn test_career_level_parse_round_trips() {
        for level in [CareerLevel::Fresher, CareerLevel::Mid, CareerLevel::Senior] {
            assert_eq!(CareerLevel::parse(level.as_str()), Some(level));
        }
        assert_eq!(CareerLevel::parse("Principal"), None);
    }

    #[test]
    fn test_catalog_variant_parse_matches_wire_spelling() {
        assert_eq!(CatalogVariant::parse("leveled"), Some(CatalogVariant::Leveled));
        assert_eq!(CatalogVariant::parse("flat"), Some(CatalogVariant::Flat));
        assert_eq!(CatalogVariant::parse("merged"), None);
    }
}
