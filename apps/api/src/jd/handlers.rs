//! Axum route handlers for the JD management endpoints.

use axum::{
    extract::{Multipart, State},
    Form, Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extract::extract_from_upload;
use crate::jd::{generate_jd, refine_manual_jd, refine_uploaded_jd, word_count, JdDetails};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct UploadJdResponse {
    pub filename: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ManualJdRequest {
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct JdTextResponse {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateJdRequest {
    pub job_title: String,
    pub experience: String,
    pub skills: String,
    pub company: String,
    pub employment_type: String,
    pub industry: String,
    pub location: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /upload_jd_file
///
/// Accepts a multipart `file` field, extracts its text, and returns a cleaned
/// rewrite of the JD. Rejects files whose extracted text is under 20 words.
pub async fn handle_upload_jd_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadJdResponse>, AppError> {
    let mut filename = String::new();
    let mut data: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            filename = field.file_name().unwrap_or("unknown").to_string();
            data = Some(field.bytes().await?.to_vec());
        } else {
            let _ = field.bytes().await?;
        }
    }

    let data = data.ok_or_else(|| AppError::Validation("No file uploaded.".to_string()))?;

    let extracted = extract_from_upload(state.config.upload_dir.as_ref(), &filename, &data)
        .map_err(|e| AppError::Extraction(e.to_string()))?;

    if word_count(&extracted) < 20 {
        return Err(AppError::Validation(
            "Uploaded file doesn't seem to contain a valid job description.".to_string(),
        ));
    }

    info!("Refining uploaded JD from {filename}");
    let text = refine_uploaded_jd(&extracted, state.llm.as_ref()).await?;

    Ok(Json(UploadJdResponse { filename, text }))
}

/// POST /manual_jd
///
/// Rewrites a pasted JD. Rejects input under 20 words.
pub async fn handle_manual_jd(
    State(state): State<AppState>,
    Form(request): Form<ManualJdRequest>,
) -> Result<Json<JdTextResponse>, AppError> {
    if word_count(request.jd_text.trim()) < 20 {
        return Err(AppError::Validation(
            "JD too short or incomplete. Please provide a more detailed description.".to_string(),
        ));
    }

    let text = refine_manual_jd(&request.jd_text, state.llm.as_ref()).await?;

    Ok(Json(JdTextResponse { text }))
}

/// POST /generate_jd
///
/// Generates a full JD from structured form fields. `job_title` and `skills`
/// are mandatory; the rest may be blank.
pub async fn handle_generate_jd(
    State(state): State<AppState>,
    Form(request): Form<GenerateJdRequest>,
) -> Result<Json<JdTextResponse>, AppError> {
    if request.job_title.trim().is_empty() || request.skills.trim().is_empty() {
        return Err(AppError::Validation(
            "Job Title and Skills are mandatory.".to_string(),
        ));
    }

    let details = JdDetails {
        job_title: request.job_title,
        experience: request.experience,
        skills: request.skills,
        company: request.company,
        employment_type: request.employment_type,
        industry: request.industry,
        location: request.location,
    };

    let text = generate_jd(&details, state.llm.as_ref()).await?;

    Ok(Json(JdTextResponse { text }))
}
