//! Axum handlers for the AI Orchestration Actions and the job catalog.
//!
//! Every action returns the uniform `{success, ...}` envelope; no failure
//! detail beyond a validation message ever crosses this boundary.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::errors::{ActionResult, AppError};
use crate::flows::chat_response::generate_chat_response;
use crate::flows::job_description::{generate_job_description, JobDescriptionInput};
use crate::flows::match_jobs::{self, MatchedJob};
use crate::flows::suggest_skills::{suggest_skills, SuggestSkillsInput};
use crate::flows::video_resume::{generate_video_resume, GenerateVideoInput, VideoSettings};
use crate::models::chat::{ChatMessage, ConversationId, MessageSender};
use crate::models::freelancer::FreelancerProfile;
use crate::models::job::JobPosting;
use crate::state::AppState;
use crate::store::{chat_log, profiles, seed, DocumentStore};

/// Reply appended to the log when the model produces nothing usable.
const CHAT_FALLBACK_MESSAGE: &str =
    "I'm sorry, I seem to be having trouble connecting. Please try again in a moment.";

/// Reply appended to the log when the send pipeline itself fails.
const CHAT_ERROR_NOTICE: &str =
    "An unexpected error occurred. I can't continue this conversation right now.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SkillsPayload {
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDescriptionPayload {
    pub description: String,
    pub suggested_skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchJobsRequest {
    pub freelancer_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedJobsPayload {
    pub matched_jobs: Vec<MatchedJob>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub user_id: String,
    pub freelancer_id: String,
    pub message: String,
}

/// Chat send carries no payload beyond the success flag; the client
/// re-reads the conversation log.
#[derive(Debug, Serialize)]
pub struct ChatAck {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoPayload {
    pub video_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetailResponse {
    pub job: JobPosting,
    pub matched_freelancers: Vec<FreelancerProfile>,
}

// ────────────────────────────────────────────────────────────────────────────
// AI actions
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/skills/suggest
pub async fn handle_suggest_skills(
    State(state): State<AppState>,
    Json(request): Json<SuggestSkillsInput>,
) -> Json<ActionResult<SkillsPayload>> {
    let result = suggest_skills(&state.genai, &request).await.map(|output| {
        SkillsPayload {
            skills: output.suggested_skills,
        }
    });

    Json(ActionResult::from_result(
        result,
        "An unexpected error occurred while fetching skill suggestions.",
    ))
}

/// POST /api/v1/jobs/describe
pub async fn handle_generate_job_description(
    State(state): State<AppState>,
    Json(request): Json<JobDescriptionInput>,
) -> Json<ActionResult<JobDescriptionPayload>> {
    let result = generate_job_description(&state.genai, &request)
        .await
        .map(|output| JobDescriptionPayload {
            description: output.description,
            suggested_skills: output.suggested_skills,
        });

    Json(ActionResult::from_result(
        result,
        "An unexpected error occurred while generating the job description.",
    ))
}

/// POST /api/v1/jobs/match
pub async fn handle_match_jobs(
    State(state): State<AppState>,
    Json(request): Json<MatchJobsRequest>,
) -> Json<ActionResult<MatchedJobsPayload>> {
    let result =
        match_jobs::match_jobs_for_freelancer(state.store.as_ref(), &state.genai, &request.freelancer_id)
            .await
            .map(|matched_jobs| MatchedJobsPayload { matched_jobs });

    Json(ActionResult::from_result(
        result,
        "An unexpected error occurred while matching jobs.",
    ))
}

/// POST /api/v1/video/generate
pub async fn handle_generate_video(
    State(state): State<AppState>,
    Json(request): Json<GenerateVideoInput>,
) -> Json<ActionResult<VideoPayload>> {
    let settings = VideoSettings::from_config(&state.config);
    let result = generate_video_resume(state.store.as_ref(), &state.genai, &settings, &request)
        .await
        .map(|output| VideoPayload {
            video_url: output.video_url,
        });

    Json(ActionResult::from_result(
        result,
        "An unexpected error occurred while generating the video resume.",
    ))
}

/// POST /api/v1/chat/send
///
/// Append the user's message, reload the full ordered history, generate the
/// freelancer's reply, append it. A generation failure appends a fixed
/// apology instead and still reports failure; a failure while appending the
/// apology is swallowed (logged only).
pub async fn handle_send_message(
    State(state): State<AppState>,
    Json(request): Json<SendMessageRequest>,
) -> Json<ActionResult<ChatAck>> {
    if request.message.trim().is_empty() {
        return Json(ActionResult::error("Message cannot be empty."));
    }

    let store = state.store.as_ref();
    let conversation = ConversationId::new(&request.user_id, &request.freelancer_id);

    if let Err(err) =
        chat_log::append_message(store, &conversation, MessageSender::User, &request.message).await
    {
        error!("Failed to record user message: {err}");
        return Json(ActionResult::error(
            "An unexpected error occurred while sending the message.",
        ));
    }

    let freelancer = match profiles::get_profile(store, &request.freelancer_id).await {
        Ok(freelancer) => freelancer,
        Err(err) => {
            error!("Chat send failed to load freelancer: {err}");
            append_notice(store, &conversation, CHAT_ERROR_NOTICE).await;
            return Json(ActionResult::error(
                "An unexpected error occurred while sending the message.",
            ));
        }
    };

    let history = match chat_log::load_history(store, &conversation).await {
        Ok(history) => history,
        Err(err) => {
            error!("Chat send failed to load history: {err}");
            append_notice(store, &conversation, CHAT_ERROR_NOTICE).await;
            return Json(ActionResult::error(
                "An unexpected error occurred while sending the message.",
            ));
        }
    };

    match generate_chat_response(&state.genai, &freelancer, &history).await {
        Ok(reply) => {
            if let Err(err) =
                chat_log::append_message(store, &conversation, MessageSender::Freelancer, &reply.response)
                    .await
            {
                error!("Failed to record freelancer reply: {err}");
                append_notice(store, &conversation, CHAT_ERROR_NOTICE).await;
                return Json(ActionResult::error(
                    "An unexpected error occurred while sending the message.",
                ));
            }
            Json(ActionResult::ok(ChatAck {}))
        }
        Err(err) => {
            error!("Chat response generation failed: {err}");
            append_notice(store, &conversation, CHAT_FALLBACK_MESSAGE).await;
            Json(ActionResult::error("AI did not return a response."))
        }
    }
}

/// GET /api/v1/chat/:user_id/:freelancer_id/messages
///
/// Full conversation log, oldest first.
pub async fn handle_chat_history(
    State(state): State<AppState>,
    Path((user_id, freelancer_id)): Path<(String, String)>,
) -> Result<Json<Vec<ChatMessage>>, AppError> {
    let conversation = ConversationId::new(user_id, freelancer_id);
    let history = chat_log::load_history(state.store.as_ref(), &conversation).await?;
    Ok(Json(history))
}

/// Best-effort append of a fixed notice to the log; failures are swallowed.
async fn append_notice(store: &dyn DocumentStore, conversation: &ConversationId, text: &str) {
    if let Err(err) = chat_log::append_message(store, conversation, MessageSender::Freelancer, text).await
    {
        warn!("Failed to add notice message to chat: {err}");
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Job catalog (read-only reference data)
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/jobs
pub async fn handle_list_jobs() -> Json<Vec<JobPosting>> {
    Json(seed::job_postings().to_vec())
}

/// GET /api/v1/jobs/:id
///
/// Returns the posting plus the freelancers whose skills cover all of its
/// requirements — the non-AI matching path.
pub async fn handle_get_job(
    Path(job_id): Path<String>,
) -> Result<Json<JobDetailResponse>, AppError> {
    let job = seed::job_posting(&job_id)
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    let matched_freelancers = match_jobs::freelancers_covering(job, seed::freelancers())
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(JobDetailResponse {
        job: job.clone(),
        matched_freelancers,
    }))
}
