//! Advisor — the credit-gated boundary to the AI completion providers.
//! Builds prompts from caller-supplied inputs and relays the raw provider
//! text. The pure analysis core never reaches this module; all suspension
//! and all capability checks live here.

pub mod handlers;
pub mod prompts;

use tracing::warn;

use crate::analysis::catalog::CareerLevel;
use crate::errors::AppError;
use crate::llm_client::PROVIDER_ERROR_SENTINEL;
use crate::state::AppState;

/// Free-text recruiter review of a resume.
pub async fn review_resume(state: &AppState, resume_text: &str) -> Result<String, AppError> {
    if resume_text.trim().is_empty() {
        return Err(AppError::Validation("Paste your resume first".to_string()));
    }
    let prompt = prompts::REVIEW_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
    complete_gated(state, &prompt).await
}

/// 90-day roadmap for the missing skills of a prior analysis. The missing
/// list is passed explicitly; the service keeps no last-analysis state.
pub async fn skill_roadmap(
    state: &AppState,
    role: &str,
    level: CareerLevel,
    missing_skills: &[String],
) -> Result<String, AppError> {
    let prompt = prompts::ROADMAP_PROMPT_TEMPLATE
        .replace("{role}", role)
        .replace("{level}", level.as_str())
        .replace("{missing_skills}", &missing_skills.join(", "));
    complete_gated(state, &prompt).await
}

/// Formats resume + JD into a comparison prompt and relays the response
/// without parsing or validating its structure.
pub async fn match_against_jd(
    state: &AppState,
    resume_text: &str,
    jd_text: &str,
) -> Result<String, AppError> {
    if resume_text.trim().is_empty() || jd_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Paste both resume and job description".to_string(),
        ));
    }
    let prompt = prompts::JD_MATCH_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{jd_text}", jd_text);
    complete_gated(state, &prompt).await
}

/// Credit gate, then a single provider call. The gate is consulted before
/// the call and never after; wire-level failures surface as the fixed
/// sentinel string instead of a fault the client must handle.
async fn complete_gated(state: &AppState, prompt: &str) -> Result<String, AppError> {
    if !state.credits.try_consume()? {
        return Err(AppError::CreditsExhausted);
    }

    match state.provider.complete(prompt).await {
        Ok(text) => Ok(text),
        Err(e) if e.is_unavailable() => Err(AppError::ProviderUnavailable(e.to_string())),
        Err(e) => {
            warn!(provider = state.provider.name(), error = %e, "provider call failed");
            Ok(PROVIDER_ERROR_SENTINEL.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_prompt_embeds_resume() {
        let prompt = prompts::REVIEW_PROMPT_TEMPLATE.replace("{resume_text}", "my resume body");
        assert!(prompt.starts_with("Act as a senior recruiter."));
        assert!(prompt.ends_with("Resume:\nmy resume body"));
    }

    #[test]
    fn test_roadmap_prompt_embeds_all_fields() {
        let prompt = prompts::ROADMAP_PROMPT_TEMPLATE
            .replace("{role}", "Software Engineer")
            .replace("{level}", CareerLevel::Mid.as_str())
            .replace("{missing_skills}", &["react", "testing"].join(", "));
        assert!(prompt.contains("Role: Software Engineer"));
        assert!(prompt.contains("Level: Mid"));
        assert!(prompt.contains("Missing skills: react, testing"));
    }

    #[test]
    fn test_jd_match_prompt_orders_resume_before_jd() {
        let prompt = prompts::JD_MATCH_PROMPT_TEMPLATE
            .replace("{resume_text}", "RESUME_BODY")
            .replace("{jd_text}", "JD_BODY");
        let resume_at = prompt.find("RESUME_BODY").unwrap();
        let jd_at = prompt.find("JD_BODY").unwrap();
        assert!(resume_at < jd_at);
        assert!(prompt.contains("1) Match percentage"));
    }
}
