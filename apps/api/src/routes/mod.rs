pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::advisor::handlers as advisor_handlers;
use crate::analysis::handlers as analysis_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API — pure, synchronous core
        .route("/api/v1/analyze", post(analysis_handlers::handle_analyze))
        .route(
            "/api/v1/analyze/upload",
            post(analysis_handlers::handle_analyze_upload),
        )
        .route(
            "/api/v1/bullets/improve",
            post(analysis_handlers::handle_improve_bullets),
        )
        // Advisor API — credit-gated AI boundary
        .route("/api/v1/jd/match", post(advisor_handlers::handle_match_jd))
        .route(
            "/api/v1/advisor/review",
            post(advisor_handlers::handle_review),
        )
        .route(
            "/api/v1/advisor/roadmap",
            post(advisor_handlers::handle_roadmap),
        )
        // Credits
        .route(
            "/api/v1/credits",
            get(advisor_handlers::handle_credit_balance),
        )
        .route(
            "/api/v1/credits/grant",
            post(advisor_handlers::handle_credit_grant),
        )
        .with_state(state)
}
