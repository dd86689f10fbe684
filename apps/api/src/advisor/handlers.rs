use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::advisor;
use crate::analysis::catalog::CareerLevel;
use crate::errors::AppError;
use crate::state::AppState;

/// Relayed provider output plus which backend produced it.
#[derive(Debug, Serialize)]
pub struct AdvisorResponse {
    pub text: String,
    pub provider: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub resume_text: String,
}

/// POST /api/v1/advisor/review
pub async fn handle_review(
    State(state): State<AppState>,
    Json(req): Json<ReviewRequest>,
) -> Result<Json<AdvisorResponse>, AppError> {
    let text = advisor::review_resume(&state, &req.resume_text).await?;
    Ok(Json(AdvisorResponse {
        text,
        provider: state.provider.name(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct RoadmapRequest {
    pub role: String,
    #[serde(default)]
    pub level: CareerLevel,
    pub missing_skills: Vec<String>,
}

/// POST /api/v1/advisor/roadmap
pub async fn handle_roadmap(
    State(state): State<AppState>,
    Json(req): Json<RoadmapRequest>,
) -> Result<Json<AdvisorResponse>, AppError> {
    let text = advisor::skill_roadmap(&state, &req.role, req.level, &req.missing_skills).await?;
    Ok(Json(AdvisorResponse {
        text,
        provider: state.provider.name(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct JdMatchRequest {
    pub resume_text: String,
    pub jd_text: String,
}

/// POST /api/v1/jd/match
pub async fn handle_match_jd(
    State(state): State<AppState>,
    Json(req): Json<JdMatchRequest>,
) -> Result<Json<AdvisorResponse>, AppError> {
    let text = advisor::match_against_jd(&state, &req.resume_text, &req.jd_text).await?;
    Ok(Json(AdvisorResponse {
        text,
        provider: state.provider.name(),
    }))
}

#[derive(Debug, Serialize)]
pub struct CreditBalanceResponse {
    pub balance: u32,
}

/// GET /api/v1/credits
pub async fn handle_credit_balance(State(state): State<AppState>) -> Json<CreditBalanceResponse> {
    Json(CreditBalanceResponse {
        balance: state.credits.balance(),
    })
}

#[derive(Debug, Deserialize)]
pub struct GrantRequest {
    pub amount: u32,
}

/// POST /api/v1/credits/grant
pub async fn handle_credit_grant(
    State(state): State<AppState>,
    Json(req): Json<GrantRequest>,
) -> Result<Json<CreditBalanceResponse>, AppError> {
    let balance = state.credits.grant(req.amount)?;
    Ok(Json(CreditBalanceResponse { balance }))
}
