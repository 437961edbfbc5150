//! Generate Job Description — drafts a posting from a title and a list of
//! responsibilities. The draft is returned to the caller only; postings
//! are never persisted by this service.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::flows::prompts::{JOB_DESCRIPTION_PROMPT_TEMPLATE, JOB_DESCRIPTION_SYSTEM};
use crate::flows::Capability;
use crate::genai::GenAiClient;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDescriptionInput {
    pub title: String,
    pub responsibilities: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDescriptionOutput {
    pub description: String,
    pub suggested_skills: Vec<String>,
}

/// Drafts a job description plus recommended skills.
pub async fn generate_job_description(
    genai: &GenAiClient,
    input: &JobDescriptionInput,
) -> Result<JobDescriptionOutput, AppError> {
    if input.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    if input.responsibilities.trim().is_empty() {
        return Err(AppError::Validation(
            "responsibilities cannot be empty".to_string(),
        ));
    }

    let prompt = JOB_DESCRIPTION_PROMPT_TEMPLATE
        .replace("{title}", &input.title)
        .replace("{responsibilities}", &input.responsibilities);

    genai
        .generate_json::<JobDescriptionOutput>(&prompt, JOB_DESCRIPTION_SYSTEM)
        .await
        .map_err(|e| AppError::generation(Capability::JobDescription, e))
}
