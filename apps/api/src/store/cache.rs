//! Redis-backed profile read cache. Strictly best-effort: every cache
//! failure degrades to a miss and is logged, never surfaced.

use redis::AsyncCommands;
use redis::Client as RedisClient;
use tracing::{debug, warn};

use crate::models::freelancer::FreelancerProfile;

const PROFILE_KEY_PREFIX: &str = "skillsync:profile:";
const PROFILE_TTL_SECS: u64 = 300;

fn profile_key(id: &str) -> String {
    format!("{PROFILE_KEY_PREFIX}{id}")
}

/// Returns the cached profile, or `None` on miss / disabled cache / error.
pub async fn cached_profile(redis: &Option<RedisClient>, id: &str) -> Option<FreelancerProfile> {
    let client = redis.as_ref()?;
    let mut conn = match client.get_multiplexed_async_connection().await {
        Ok(conn) => conn,
        Err(err) => {
            warn!("Redis unavailable, treating as cache miss: {err}");
            return None;
        }
    };

    let payload: Option<String> = match conn.get(profile_key(id)).await {
        Ok(payload) => payload,
        Err(err) => {
            warn!("Profile cache read failed for {id}: {err}");
            return None;
        }
    };

    payload.and_then(|json| match serde_json::from_str(&json) {
        Ok(profile) => {
            debug!("Profile cache hit for {id}");
            Some(profile)
        }
        Err(err) => {
            warn!("Cached profile {id} failed to deserialize: {err}");
            None
        }
    })
}

/// Stores a profile in the cache with a short TTL.
pub async fn cache_profile(redis: &Option<RedisClient>, profile: &FreelancerProfile) {
    let Some(client) = redis.as_ref() else {
        return;
    };
    let Ok(json) = serde_json::to_string(profile) else {
        return;
    };

    match client.get_multiplexed_async_connection().await {
        Ok(mut conn) => {
            if let Err(err) = conn
                .set_ex::<_, _, ()>(profile_key(&profile.id), json, PROFILE_TTL_SECS)
                .await
            {
                warn!("Profile cache write failed for {}: {err}", profile.id);
            }
        }
        Err(err) => warn!("Redis unavailable, skipping cache write: {err}"),
    }
}

/// Drops the cached view of a profile. Called after every profile update
/// so readers never see a stale record.
pub async fn invalidate_profile(redis: &Option<RedisClient>, id: &str) {
    let Some(client) = redis.as_ref() else {
        return;
    };

    match client.get_multiplexed_async_connection().await {
        Ok(mut conn) => {
            if let Err(err) = conn.del::<_, ()>(profile_key(id)).await {
                warn!("Profile cache invalidation failed for {id}: {err}");
            } else {
                debug!("Profile cache invalidated for {id}");
            }
        }
        Err(err) => warn!("Redis unavailable, skipping cache invalidation: {err}"),
    }
}
