//! Axum handlers for the freelancer catalog and profile settings.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::{ActionResult, AppError};
use crate::models::freelancer::FreelancerProfile;
use crate::state::AppState;
use crate::store::{cache, profiles, seed};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Settings-form payload. `skills` arrives as one comma-separated string
/// and is normalized into a list before it reaches the store.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub work_history: String,
    pub job_preferences: String,
    pub skills: String,
    pub rate: f64,
    #[serde(default)]
    pub video_resume_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdateProfilePayload {
    pub message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/freelancers
pub async fn handle_list_freelancers() -> Json<Vec<FreelancerProfile>> {
    Json(seed::freelancers().to_vec())
}

/// GET /api/v1/freelancers/:id
///
/// Cache → store (seeding on first read) → bundled default.
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(freelancer_id): Path<String>,
) -> Result<Json<FreelancerProfile>, AppError> {
    if let Some(profile) = cache::cached_profile(&state.redis, &freelancer_id).await {
        return Ok(Json(profile));
    }

    let profile = profiles::get_profile(state.store.as_ref(), &freelancer_id).await?;
    cache::cache_profile(&state.redis, &profile).await;
    Ok(Json(profile))
}

/// PUT /api/v1/freelancers/:id
///
/// Validates the form, normalizes the skills string, merges the changes,
/// then revalidates cached views of the profile.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Path(freelancer_id): Path<String>,
    Json(request): Json<UpdateProfileRequest>,
) -> Json<ActionResult<UpdateProfilePayload>> {
    if let Err(message) = validate_update(&request) {
        return Json(ActionResult::error(message));
    }

    let changes = profiles::ProfileChanges {
        name: request.name,
        title: request.title,
        bio: request.bio,
        work_history: request.work_history,
        job_preferences: request.job_preferences,
        skills: split_skills(&request.skills),
        rate: request.rate,
        video_resume_url: request.video_resume_url.filter(|url| !url.is_empty()),
    };

    if profiles::update_profile(state.store.as_ref(), &freelancer_id, &changes).await {
        cache::invalidate_profile(&state.redis, &freelancer_id).await;
        Json(ActionResult::ok(UpdateProfilePayload {
            message: "Profile updated successfully!".to_string(),
        }))
    } else {
        Json(ActionResult::error("Failed to update profile."))
    }
}

/// Splits a comma-separated skills string into trimmed, non-empty entries.
pub fn split_skills(skills: &str) -> Vec<String> {
    skills
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn validate_update(request: &UpdateProfileRequest) -> Result<(), String> {
    if request.name.trim().len() < 2 {
        return Err("Name must be at least 2 characters.".to_string());
    }
    if request.title.trim().len() < 5 {
        return Err("Title must be at least 5 characters.".to_string());
    }
    if request.bio.trim().len() < 20 {
        return Err("Bio must be at least 20 characters.".to_string());
    }
    if request.bio.len() > 300 {
        return Err("Bio must not be longer than 300 characters.".to_string());
    }
    if request.work_history.trim().len() < 20 {
        return Err("Work history must be at least 20 characters.".to_string());
    }
    if request.job_preferences.trim().len() < 20 {
        return Err("Job preferences must be at least 20 characters.".to_string());
    }
    if split_skills(&request.skills).is_empty() {
        return Err("Please add at least one skill.".to_string());
    }
    if request.rate < 1.0 {
        return Err("Rate must be a positive number.".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> UpdateProfileRequest {
        UpdateProfileRequest {
            name: "Elena Petrova".to_string(),
            title: "Senior Full-Stack Developer".to_string(),
            bio: "Full-stack developer with a product mindset.".to_string(),
            work_history: "Lead Developer at TechCorp for four years.".to_string(),
            job_preferences: "Remote-first product teams building SaaS.".to_string(),
            skills: "Go, Rust, SQL".to_string(),
            rate: 85.0,
            video_resume_url: None,
        }
    }

    #[test]
    fn test_split_skills_trims_each_entry() {
        assert_eq!(split_skills("Go, Rust, SQL"), vec!["Go", "Rust", "SQL"]);
    }

    #[test]
    fn test_split_skills_drops_empty_segments() {
        assert_eq!(split_skills("React,, ,Node"), vec!["React", "Node"]);
        assert!(split_skills("  ").is_empty());
    }

    #[test]
    fn test_valid_request_passes_validation() {
        assert!(validate_update(&valid_request()).is_ok());
    }

    #[test]
    fn test_short_name_fails_validation() {
        let mut request = valid_request();
        request.name = "E".to_string();
        assert!(validate_update(&request).is_err());
    }

    #[test]
    fn test_no_skills_fails_validation() {
        let mut request = valid_request();
        request.skills = " , ,".to_string();
        assert!(validate_update(&request).is_err());
    }

    #[test]
    fn test_zero_rate_fails_validation() {
        let mut request = valid_request();
        request.rate = 0.0;
        assert!(validate_update(&request).is_err());
    }
}
