//! Section detection — lexical presence tests for canonical resume
//! sections, parameterized over the two section vocabularies.

use serde::{Deserialize, Serialize};

/// Canonical resume section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Education,
    Skills,
    Experience,
    Projects,
    Certification,
    Internship,
    Achievement,
}

impl Section {
    /// Lowercase keyword used in user-facing suggestions.
    pub fn label(self) -> &'static str {
        match self {
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Certification => "certification",
            Section::Internship => "internship",
            Section::Achievement => "achievement",
        }
    }
}

/// Which section list a request is scored against. The four-key list
/// accepts keyword variants per section (internships count as
/// experience); the seven-key list is one keyword per section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionVocabulary {
    #[default]
    FourSection,
    SevenSection,
}

const FOUR_SECTION: &[(Section, &[&str])] = &[
    (Section::Education, &["education"]),
    (Section::Skills, &["skills"]),
    (Section::Experience, &["experience", "internship"]),
    (Section::Projects, &["project"]),
];

const SEVEN_SECTION: &[(Section, &[&str])] = &[
    (Section::Education, &["education"]),
    (Section::Experience, &["experience"]),
    (Section::Projects, &["projects"]),
    (Section::Skills, &["skills"]),
    (Section::Certification, &["certification"]),
    (Section::Internship, &["internship"]),
    (Section::Achievement, &["achievement"]),
];

impl SectionVocabulary {
    fn entries(self) -> &'static [(Section, &'static [&'static str])] {
        match self {
            SectionVocabulary::FourSection => FOUR_SECTION,
            SectionVocabulary::SevenSection => SEVEN_SECTION,
        }
    }

    /// Parses the wire spelling used by serde.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "four_section" => Some(SectionVocabulary::FourSection),
            "seven_section" => Some(SectionVocabulary::SevenSection),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionFlag {
    pub section: Section,
    pub present: bool,
}

/// Presence flags in vocabulary order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionFlags {
    pub flags: Vec<SectionFlag>,
}

impl SectionFlags {
    pub fn present_count(&self) -> u32 {
        self.flags.iter().filter(|f| f.present).count() as u32
    }

    pub fn missing(&self) -> impl Iterator<Item = Section> + '_ {
        self.flags.iter().filter(|f| !f.present).map(|f| f.section)
    }
}

/// Tests each section's keyword variants as substrings of the normalized
/// text. Deterministic, no failure modes.
pub fn detect_sections(text: &str, vocabulary: SectionVocabulary) -> SectionFlags {
    let flags = vocabulary
        .entries()
        .iter()
        .map(|&(section, keywords)| SectionFlag {
            section,
            present: keywords.iter().any(|k| text.contains(k)),
        })
        .collect();
    SectionFlags { flags }
}
