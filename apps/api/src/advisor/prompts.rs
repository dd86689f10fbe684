// Prompt constants for the advisor features. Placeholders are replaced
// at the call site before sending; responses are relayed verbatim.

/// Recruiter-style free-text review of a resume.
pub const REVIEW_PROMPT_TEMPLATE: &str = r#"Act as a senior recruiter.
Explain strengths, weaknesses, and ATS improvements.
Resume:
{resume_text}"#;

/// 90-day learning roadmap built from a prior analysis' missing skills.
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"Create a 90-day learning roadmap for:
Role: {role}
Level: {level}
Missing skills: {missing_skills}"#;

/// Resume-versus-JD comparison.
pub const JD_MATCH_PROMPT_TEMPLATE: &str = r#"Compare resume with job description.
Return:
1) Match percentage
2) Missing skills
3) Suggestions
Resume:
{resume_text}
JD:
{jd_text}"#;
