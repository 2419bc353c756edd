// Email drafting: interview invitations and rejections via the model.
// The body is returned verbatim from the model; nothing is sent anywhere.

pub mod prompts;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::ModelClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailType {
    Interview,
    Rejection,
}

/// Everything the email prompts need about one candidate.
#[derive(Debug, Clone)]
pub struct EmailRequest {
    pub candidate_name: String,
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub match_score: f64,
    pub candidate_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// Drafts an email of the given type for one candidate.
pub async fn draft_email(
    email_type: EmailType,
    request: &EmailRequest,
    llm: &dyn ModelClient,
) -> Result<String, AppError> {
    let prompt = build_prompt(email_type, request);
    llm.complete(&prompt).await.map_err(|e| {
        let label = match email_type {
            EmailType::Interview => "Interview email generation failed",
            EmailType::Rejection => "Rejection email generation failed",
        };
        AppError::Llm(format!("{label}: {e}"))
    })
}

fn build_prompt(email_type: EmailType, request: &EmailRequest) -> String {
    let job_title = request.job_title.as_deref().unwrap_or("this position");
    let company_name = request.company_name.as_deref().unwrap_or("our company");
    // Highlight at most three skills so the email stays focused
    let candidate_skills = request
        .candidate_skills
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    let template = match email_type {
        EmailType::Interview => prompts::INTERVIEW_EMAIL_PROMPT_TEMPLATE,
        EmailType::Rejection => prompts::REJECTION_EMAIL_PROMPT_TEMPLATE,
    };

    let prompt = template
        .replace("{candidate_name}", &request.candidate_name)
        .replace("{job_title}", job_title)
        .replace("{company_name}", company_name)
        .replace("{match_score}", &format!("{:.2}", request.match_score))
        .replace("{candidate_skills}", &candidate_skills);

    match email_type {
        EmailType::Interview => {
            let missing_skills = if request.missing_skills.is_empty() {
                "None".to_string()
            } else {
                request.missing_skills.join(", ")
            };
            prompt.replace("{missing_skills}", &missing_skills)
        }
        EmailType::Rejection => prompt,
    }
}
