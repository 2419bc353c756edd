// JD management: refine uploaded/pasted descriptions, generate new ones from
// form fields, and parse free text into a structured Profile.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod handlers;
pub mod prompts;

use crate::errors::AppError;
use crate::llm_client::{extract_json, ModelClient};
use crate::models::profile::Profile;

/// Rephrases and formats a JD extracted from an uploaded file.
pub async fn refine_uploaded_jd(text: &str, llm: &dyn ModelClient) -> Result<String, AppError> {
    let prompt = prompts::UPLOAD_REFINE_PROMPT_TEMPLATE.replace("{jd_text}", text);
    llm.complete(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("JD generation failed: {e}")))
}

/// Professionally rewrites a manually pasted JD.
pub async fn refine_manual_jd(text: &str, llm: &dyn ModelClient) -> Result<String, AppError> {
    let prompt = prompts::MANUAL_REFINE_PROMPT_TEMPLATE.replace("{jd_text}", text);
    llm.complete(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("JD generation failed: {e}")))
}

/// Structured inputs for templated JD generation.
#[derive(Debug, Clone)]
pub struct JdDetails {
    pub job_title: String,
    pub experience: String,
    pub skills: String,
    pub company: String,
    pub employment_type: String,
    pub industry: String,
    pub location: String,
}

/// Generates a full JD from structured form fields.
pub async fn generate_jd(details: &JdDetails, llm: &dyn ModelClient) -> Result<String, AppError> {
    let prompt = prompts::GENERATE_JD_PROMPT_TEMPLATE
        .replace("{job_title}", &details.job_title)
        .replace("{experience}", &details.experience)
        .replace("{skills}", &details.skills)
        .replace("{company}", &details.company)
        .replace("{employment_type}", &details.employment_type)
        .replace("{industry}", &details.industry)
        .replace("{location}", &details.location);
    llm.complete(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("JD generation failed: {e}")))
}

/// Parses JD or resume text into a structured [`Profile`] via the model.
/// Skills are deduplicated at this boundary; malformed model output fails the
/// request with a parsing error.
pub async fn parse_jd(text: &str, llm: &dyn ModelClient) -> Result<Profile, AppError> {
    let prompt = prompts::JD_PARSE_PROMPT_TEMPLATE.replace("{jd_text}", text);
    let profile: Profile = extract_json(llm, &prompt)
        .await
        .map_err(|e| AppError::Llm(format!("JD parsing failed: {e}")))?;
    Ok(profile.normalized())
}

/// Whitespace-delimited word count, used by the 20-word JD validity check.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
