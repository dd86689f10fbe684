use axum::extract::Multipart;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::analysis::bullets::improve_bullets;
use crate::analysis::catalog::{CareerLevel, CatalogVariant};
use crate::analysis::sections::SectionVocabulary;
use crate::analysis::{analyze, AnalysisInput, AnalysisReport};
use crate::errors::AppError;
use crate::ingest::extract_resume_text;

/// POST /api/v1/analyze
pub async fn handle_analyze(
    Json(input): Json<AnalysisInput>,
) -> Result<Json<AnalysisReport>, AppError> {
    Ok(Json(analyze(&input)?))
}

/// POST /api/v1/analyze/upload
///
/// Multipart form: a `file` part (PDF or plain text) plus `role` and
/// optional `level` / `section_vocabulary` / `catalog_variant` fields.
pub async fn handle_analyze_upload(
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let mut resume_text: Option<String> = None;
    let mut role: Option<String> = None;
    let mut level = CareerLevel::default();
    let mut section_vocabulary = SectionVocabulary::default();
    let mut catalog_variant = CatalogVariant::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or("resume.txt").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
                resume_text = Some(extract_resume_text(&file_name, &data)?);
            }
            "role" => role = Some(text_field(field).await?),
            "level" => {
                let raw = text_field(field).await?;
                level = CareerLevel::parse(&raw)
                    .ok_or_else(|| AppError::Validation(format!("unknown level '{raw}'")))?;
            }
            "section_vocabulary" => {
                let raw = text_field(field).await?;
                section_vocabulary = SectionVocabulary::parse(&raw).ok_or_else(|| {
                    AppError::Validation(format!("unknown section vocabulary '{raw}'"))
                })?;
            }
            "catalog_variant" => {
                let raw = text_field(field).await?;
                catalog_variant = CatalogVariant::parse(&raw)
                    .ok_or_else(|| AppError::Validation(format!("unknown catalog variant '{raw}'")))?;
            }
            _ => {}
        }
    }

    let input = AnalysisInput {
        resume_text: resume_text
            .ok_or_else(|| AppError::Validation("missing 'file' part".to_string()))?,
        role: role.ok_or_else(|| AppError::Validation("missing 'role' field".to_string()))?,
        level,
        section_vocabulary,
        catalog_variant,
    };
    Ok(Json(analyze(&input)?))
}

async fn text_field(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("failed to read field: {e}")))
}

#[derive(Debug, Deserialize)]
pub struct ImproveBulletsRequest {
    pub bullet_text: String,
}

#[derive(Debug, Serialize)]
pub struct ImproveBulletsResponse {
    pub lines: Vec<String>,
}

/// POST /api/v1/bullets/improve
pub async fn handle_improve_bullets(
    Json(req): Json<ImproveBulletsRequest>,
) -> Json<ImproveBulletsResponse> {
    Json(ImproveBulletsResponse {
        lines: improve_bullets(&req.bullet_text),
    })
}
