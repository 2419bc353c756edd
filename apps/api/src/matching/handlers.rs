//! Axum route handlers for the comparison and email endpoints.

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::errors::AppError;
use crate::matching::orchestrator::{
    compare_batch, email_batch, CompareResponse, EmailBatchResponse, UploadedResume,
};
use crate::state::AppState;

/// POST /compare-jd-and-files/
///
/// Multipart form: `jd_text` field plus one or more `files` entries. Returns
/// the parsed JD and one result per uploaded resume, in upload order.
pub async fn handle_compare(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<CompareResponse>, AppError> {
    let (jd_text, files) = read_batch_request(multipart).await?;

    let response = compare_batch(
        &jd_text,
        &files,
        state.config.upload_dir.as_ref(),
        state.llm.as_ref(),
    )
    .await?;

    Ok(Json(response))
}

/// POST /generate-emails/
///
/// Same inputs as the comparison endpoint; additionally drafts an interview
/// invitation for the best match and rejections for the other candidates.
pub async fn handle_generate_emails(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<EmailBatchResponse>, AppError> {
    let (jd_text, files) = read_batch_request(multipart).await?;

    let response = email_batch(
        &jd_text,
        &files,
        state.config.upload_dir.as_ref(),
        state.llm.as_ref(),
    )
    .await?;

    Ok(Json(response))
}

/// Pulls the `jd_text` field and every `files` upload out of the multipart
/// body. Both are mandatory.
async fn read_batch_request(
    mut multipart: Multipart,
) -> Result<(String, Vec<UploadedResume>), AppError> {
    let mut jd_text = String::new();
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("jd_text") => {
                jd_text = field.text().await?;
            }
            Some("files") => {
                let filename = field.file_name().unwrap_or("unknown").to_string();
                let data = field.bytes().await?.to_vec();
                files.push(UploadedResume { filename, data });
            }
            _ => {
                let _ = field.bytes().await?;
            }
        }
    }

    if jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text is required".to_string()));
    }
    if files.is_empty() {
        return Err(AppError::Validation(
            "At least one resume file is required".to_string(),
        ));
    }

    Ok((jd_text, files))
}
