//! Batch comparison orchestrator.
//!
//! Flow: parse the main JD once, then for each uploaded resume sequentially —
//! stage, extract, parse, score, gap-analyze — each file on its own error
//! boundary so one failure never aborts the batch. The email variant then
//! drafts an interview invitation for the single best match and rejections
//! for everyone else.

use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::emails::{draft_email, EmailRequest, EmailType};
use crate::errors::AppError;
use crate::extract::extract_from_upload;
use crate::jd::parse_jd;
use crate::llm_client::ModelClient;
use crate::matching::gap::{analyze_gap, GapReport};
use crate::matching::scorer::match_score;
use crate::models::profile::{display_name, Profile};

/// One uploaded resume, buffered in memory from the multipart request.
#[derive(Debug, Clone)]
pub struct UploadedResume {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Per-file result of a comparison batch. Untagged so the wire shape is
/// either `{filename, parsed, score, missing_skills, remarks}` or
/// `{filename, error}`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MatchOutcome {
    Matched {
        filename: String,
        parsed: Profile,
        score: f64,
        missing_skills: Vec<String>,
        remarks: Vec<String>,
    },
    Failed {
        filename: String,
        error: String,
    },
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub main_parsed: Profile,
    pub results: Vec<MatchOutcome>,
}

/// Per-file result of an email batch. Failed files never reach the email
/// step and carry `email_content: null`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum EmailOutcome {
    Drafted {
        filename: String,
        candidate_name: String,
        parsed: Profile,
        score: f64,
        missing_skills: Vec<String>,
        remarks: Vec<String>,
        email_type: EmailType,
        email_content: String,
    },
    Failed {
        filename: String,
        error: String,
        email_content: Option<String>,
    },
}

#[derive(Debug, Serialize)]
pub struct EmailBatchResponse {
    pub main_parsed: Profile,
    pub total_candidates: usize,
    pub processed_candidates: usize,
    pub best_match_score: f64,
    pub results: Vec<EmailOutcome>,
}

/// Compares every uploaded resume against the JD. Output length always
/// equals input length.
pub async fn compare_batch(
    jd_text: &str,
    files: &[UploadedResume],
    upload_dir: &Path,
    llm: &dyn ModelClient,
) -> Result<CompareResponse, AppError> {
    let main_parsed = parse_main_jd(jd_text, llm).await?;

    let mut results = Vec::with_capacity(files.len());
    for file in files {
        match parse_resume(file, upload_dir, llm).await {
            Ok(parsed) => {
                let score = match_score(&main_parsed, &parsed);
                let gap = analyze_gap(&main_parsed, &parsed);
                results.push(MatchOutcome::Matched {
                    filename: file.filename.clone(),
                    parsed,
                    score,
                    missing_skills: gap.missing_skills,
                    remarks: gap.remarks,
                });
            }
            Err(error) => {
                warn!("Resume {} failed: {error}", file.filename);
                results.push(MatchOutcome::Failed {
                    filename: file.filename.clone(),
                    error,
                });
            }
        }
    }

    info!("Compared {} resumes against the JD", results.len());

    Ok(CompareResponse {
        main_parsed,
        results,
    })
}

/// Compares every uploaded resume, then drafts an interview invitation for
/// the single max-scoring candidate (first occurrence on ties) and a
/// rejection for every other successfully parsed candidate.
pub async fn email_batch(
    jd_text: &str,
    files: &[UploadedResume],
    upload_dir: &Path,
    llm: &dyn ModelClient,
) -> Result<EmailBatchResponse, AppError> {
    let main_parsed = parse_main_jd(jd_text, llm).await?;

    struct Scored {
        filename: String,
        candidate_name: String,
        parsed: Profile,
        score: f64,
        gap: GapReport,
    }

    let mut candidates: Vec<Result<Scored, (String, String)>> = Vec::with_capacity(files.len());
    for file in files {
        match parse_resume(file, upload_dir, llm).await {
            Ok(parsed) => {
                let score = match_score(&main_parsed, &parsed);
                let gap = analyze_gap(&main_parsed, &parsed);
                candidates.push(Ok(Scored {
                    filename: file.filename.clone(),
                    candidate_name: display_name(&file.filename),
                    parsed,
                    score,
                    gap,
                }));
            }
            Err(error) => {
                warn!("Resume {} failed: {error}", file.filename);
                candidates.push(Err((file.filename.clone(), error)));
            }
        }
    }

    // Best match: max score, first occurrence on ties. When every file
    // failed there is no best candidate and the score reports as 0.
    let mut best: Option<(usize, f64)> = None;
    for (idx, candidate) in candidates.iter().enumerate() {
        if let Ok(scored) = candidate {
            if best.map_or(true, |(_, best_score)| scored.score > best_score) {
                best = Some((idx, scored.score));
            }
        }
    }
    let best_index = best.map(|(idx, _)| idx);
    let best_match_score = best.map_or(0.0, |(_, score)| score);

    let processed_candidates = candidates.iter().filter(|c| c.is_ok()).count();

    let mut results = Vec::with_capacity(candidates.len());
    for (idx, candidate) in candidates.into_iter().enumerate() {
        match candidate {
            Ok(scored) => {
                let email_type = if Some(idx) == best_index {
                    EmailType::Interview
                } else {
                    EmailType::Rejection
                };
                let request = EmailRequest {
                    candidate_name: scored.candidate_name.clone(),
                    job_title: main_parsed.job_title.clone(),
                    company_name: main_parsed.company_name.clone(),
                    match_score: scored.score,
                    candidate_skills: scored.parsed.skills.clone(),
                    missing_skills: scored.gap.missing_skills.clone(),
                };
                let email_content = draft_email(email_type, &request, llm).await?;
                results.push(EmailOutcome::Drafted {
                    filename: scored.filename,
                    candidate_name: scored.candidate_name,
                    parsed: scored.parsed,
                    score: scored.score,
                    missing_skills: scored.gap.missing_skills,
                    remarks: scored.gap.remarks,
                    email_type,
                    email_content,
                });
            }
            Err((filename, error)) => {
                results.push(EmailOutcome::Failed {
                    filename,
                    error,
                    email_content: None,
                });
            }
        }
    }

    info!(
        "Drafted emails for {processed_candidates}/{} candidates",
        results.len()
    );

    Ok(EmailBatchResponse {
        main_parsed,
        total_candidates: files.len(),
        processed_candidates,
        best_match_score,
        results,
    })
}

async fn parse_main_jd(jd_text: &str, llm: &dyn ModelClient) -> Result<Profile, AppError> {
    match parse_jd(jd_text, llm).await {
        Ok(profile) => Ok(profile),
        Err(AppError::Llm(msg)) => Err(AppError::Llm(format!("Main JD parsing failed: {msg}"))),
        Err(e) => Err(e),
    }
}

/// Per-file boundary: any failure here is stringified into the batch entry
/// instead of aborting the request.
async fn parse_resume(
    file: &UploadedResume,
    upload_dir: &Path,
    llm: &dyn ModelClient,
) -> Result<Profile, String> {
    let text = extract_from_upload(upload_dir, &file.filename, &file.data)
        .map_err(|e| e.to_string())?;

    if text.is_empty() {
        return Err("Empty content".to_string());
    }

    parse_jd(&text, llm).await.map_err(|e| e.to_string())
}
