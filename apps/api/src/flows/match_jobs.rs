//! Match Jobs — asks the model to pick the best postings for a freelancer,
//! then cross-references every returned jobId against the catalog and drops
//! anything that does not resolve. Model ordering is preserved; no re-sort.
//!
//! Also home to the non-AI skill-overlap fallback used by the job detail
//! endpoint.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::flows::prompts::{MATCH_JOBS_PROMPT_TEMPLATE, MATCH_JOBS_SYSTEM};
use crate::flows::Capability;
use crate::genai::GenAiClient;
use crate::models::freelancer::FreelancerProfile;
use crate::models::job::JobPosting;
use crate::store::{profiles, seed, DocumentStore};

/// Raw model output: jobId plus a one-to-two sentence justification.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMatch {
    pub job_id: String,
    pub reason: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMatches {
    matched_jobs: Vec<RawMatch>,
}

/// A resolved match: the model's reasoning plus the full posting the UI
/// renders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedJob {
    pub job_id: String,
    pub reason: String,
    pub job: JobPosting,
}

/// Finds the top 3-5 postings for a freelancer. `NotFound` if the
/// freelancer id resolves nowhere.
pub async fn match_jobs_for_freelancer(
    store: &dyn DocumentStore,
    genai: &GenAiClient,
    freelancer_id: &str,
) -> Result<Vec<MatchedJob>, AppError> {
    let freelancer = profiles::get_profile(store, freelancer_id).await?;
    let jobs = seed::job_postings();

    let prompt = build_match_prompt(&freelancer, jobs);
    let raw: RawMatches = genai
        .generate_json(&prompt, MATCH_JOBS_SYSTEM)
        .await
        .map_err(|e| AppError::generation(Capability::MatchJobs, e))?;

    let matched = resolve_matches(raw.matched_jobs, jobs);
    info!(
        "Matched {} jobs for freelancer {freelancer_id}",
        matched.len()
    );
    Ok(matched)
}

/// Cross-references raw matches against the catalog. Matches whose jobId
/// does not resolve are dropped; survivors keep the model's order.
fn resolve_matches(raw: Vec<RawMatch>, jobs: &[JobPosting]) -> Vec<MatchedJob> {
    raw.into_iter()
        .filter_map(|m| match jobs.iter().find(|j| j.id == m.job_id) {
            Some(job) => Some(MatchedJob {
                job_id: m.job_id,
                reason: m.reason,
                job: job.clone(),
            }),
            None => {
                warn!("Model returned unknown jobId '{}', dropping match", m.job_id);
                None
            }
        })
        .collect()
}

fn build_match_prompt(freelancer: &FreelancerProfile, jobs: &[JobPosting]) -> String {
    let freelancer_block = format!(
        "- Name: {}\n- Title: {}\n- Bio: {}\n- Skills: {}\n- Work History: {}\n- Job Preferences: {}",
        freelancer.name,
        freelancer.title,
        freelancer.bio,
        freelancer.skills.join(", "),
        freelancer.work_history,
        freelancer.job_preferences,
    );

    let jobs_block = jobs
        .iter()
        .map(|job| {
            format!(
                "---\nJob ID: {}\nTitle: {}\nCompany: {}\nDescription: {}\nRequired Skills: {}\nBudget: {}\n---",
                job.id,
                job.title,
                job.company,
                job.description,
                job.required_skills.join(", "),
                job.budget,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    MATCH_JOBS_PROMPT_TEMPLATE
        .replace("{freelancer_block}", &freelancer_block)
        .replace("{jobs_block}", &jobs_block)
}

// ────────────────────────────────────────────────────────────────────────────
// Non-AI fallback: naive skill-overlap matching
// ────────────────────────────────────────────────────────────────────────────

/// True when the freelancer's skills cover every required skill of a job.
pub fn covers_required_skills(freelancer_skills: &[String], required: &[String]) -> bool {
    required.iter().all(|skill| freelancer_skills.contains(skill))
}

/// Jobs whose requirements the given skill set fully covers.
pub fn jobs_matching_skills<'a>(
    skills: &[String],
    jobs: &'a [JobPosting],
) -> Vec<&'a JobPosting> {
    jobs.iter()
        .filter(|job| covers_required_skills(skills, &job.required_skills))
        .collect()
}

/// Freelancers whose skills fully cover a job's requirements.
pub fn freelancers_covering<'a>(
    job: &JobPosting,
    freelancers: &'a [FreelancerProfile],
) -> Vec<&'a FreelancerProfile> {
    freelancers
        .iter()
        .filter(|f| covers_required_skills(&f.skills, &job.required_skills))
        .collect()
}
