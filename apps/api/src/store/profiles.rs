//! Profile Store Adapter — get/update against the document store, with
//! lazy seed-on-first-read and fallback-to-bundled-default on store errors.

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::freelancer::FreelancerProfile;
use crate::store::{seed, DocumentStore, StoreError, FREELANCERS};

/// Fields the settings form may change. Serialized camelCase so the partial
/// merges cleanly into the stored record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileChanges {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub work_history: String,
    pub job_preferences: String,
    pub skills: Vec<String>,
    pub rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_resume_url: Option<String>,
}

/// Returns the profile for `id`, seeding the store from the bundled
/// dataset on first read. Store failures fall back to the bundled default
/// rather than propagating; only an id unknown to both the store and the
/// bundle is a `NotFound`.
pub async fn get_profile(
    store: &dyn DocumentStore,
    id: &str,
) -> Result<FreelancerProfile, AppError> {
    if let Err(err) = seed_if_absent(store, id).await {
        warn!("Seed check for freelancer {id} failed: {err}");
    }

    match store.get(FREELANCERS, id).await {
        Ok(Some(record)) => match serde_json::from_value::<FreelancerProfile>(record) {
            Ok(profile) => Ok(profile),
            Err(err) => {
                warn!("Stored profile {id} failed to deserialize, using bundled default: {err}");
                bundled_default(id)
            }
        },
        Ok(None) => bundled_default(id),
        Err(err) => {
            warn!("Store read for freelancer {id} failed, using bundled default: {err}");
            bundled_default(id)
        }
    }
}

/// Merges `changes` into the stored profile. Returns a success flag and
/// never throws outward — failures are logged server-side.
pub async fn update_profile(
    store: &dyn DocumentStore,
    id: &str,
    changes: &ProfileChanges,
) -> bool {
    let partial: Value = match serde_json::to_value(changes) {
        Ok(value) => value,
        Err(err) => {
            warn!("Failed to serialize profile changes for {id}: {err}");
            return false;
        }
    };

    // A first-ever write can race a missing seed; make sure the record
    // exists before merging into it.
    if let Err(err) = seed_if_absent(store, id).await {
        warn!("Seed check before update of freelancer {id} failed: {err}");
    }

    match store.update(FREELANCERS, id, partial).await {
        Ok(()) => {
            info!("Profile {id} updated");
            true
        }
        Err(err) => {
            warn!("Profile update for {id} failed: {err}");
            false
        }
    }
}

/// Writes the bundled default record for `id` if the store has none.
/// Idempotent: a second call observes the record and writes nothing.
async fn seed_if_absent(store: &dyn DocumentStore, id: &str) -> Result<(), StoreError> {
    if store.get(FREELANCERS, id).await?.is_some() {
        return Ok(());
    }

    let Some(default) = seed::default_freelancer(id) else {
        return Ok(()); // nothing bundled for this id; get_profile reports NotFound
    };

    info!("Seeding freelancer {id} from bundled dataset");
    store
        .set(FREELANCERS, id, serde_json::to_value(default)?)
        .await
}

fn bundled_default(id: &str) -> Result<FreelancerProfile, AppError> {
    seed::default_freelancer(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Freelancer {id} not found")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryDocumentStore;

    #[tokio::test]
    async fn test_first_read_seeds_the_store() {
        let store = MemoryDocumentStore::new();
        let profile = get_profile(&store, "1").await.unwrap();
        assert_eq!(profile.id, "1");

        let stored = store.get(FREELANCERS, "1").await.unwrap();
        assert!(stored.is_some(), "profile must be persisted on first read");
    }

    #[tokio::test]
    async fn test_seeding_is_idempotent() {
        let store = MemoryDocumentStore::new();
        get_profile(&store, "1").await.unwrap();
        get_profile(&store, "1").await.unwrap();

        let records = store.query(FREELANCERS, "id").await.unwrap();
        assert_eq!(records.len(), 1, "second read must not create a second record");
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let store = MemoryDocumentStore::new();
        let result = get_profile(&store, "no-such-freelancer").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_merges_and_read_back_sees_changes() {
        let store = MemoryDocumentStore::new();
        get_profile(&store, "1").await.unwrap();

        let changes = ProfileChanges {
            name: "Elena P.".to_string(),
            title: "Principal Engineer".to_string(),
            bio: "Updated bio with plenty of detail.".to_string(),
            work_history: "Same as before, plus one more year.".to_string(),
            job_preferences: "Remote, long-term engagements only.".to_string(),
            skills: vec!["Go".to_string(), "Rust".to_string(), "SQL".to_string()],
            rate: 120.0,
            video_resume_url: None,
        };
        assert!(update_profile(&store, "1", &changes).await);

        let profile = get_profile(&store, "1").await.unwrap();
        assert_eq!(profile.name, "Elena P.");
        assert_eq!(profile.rate, 120.0);
        assert_eq!(profile.skills, vec!["Go", "Rust", "SQL"]);
        // Untouched fields survive the merge
        assert!(profile.avatar_url.contains("pravatar"));
    }

    #[tokio::test]
    async fn test_update_unknown_id_reports_failure() {
        let store = MemoryDocumentStore::new();
        let changes = ProfileChanges {
            name: "Ghost".to_string(),
            title: "Nobody".to_string(),
            bio: String::new(),
            work_history: String::new(),
            job_preferences: String::new(),
            skills: vec![],
            rate: 1.0,
            video_resume_url: None,
        };
        assert!(!update_profile(&store, "no-such-freelancer", &changes).await);
    }
}
