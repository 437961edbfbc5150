use anyhow::{bail, Context, Result};

/// Placeholder returned by video generation until asset rehosting lands.
pub const DEFAULT_VIDEO_PLACEHOLDER_URL: &str = "https://www.w3schools.com/html/mov_bbb.mp4";

/// What the video flow does when any pipeline stage fails.
///
/// The original behavior silently degraded every failure to a placeholder
/// URL; that choice is now explicit configuration instead of an accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoErrorPolicy {
    /// Swallow the failure, log it, and return the placeholder URL as a
    /// success. Default — preserves the observed demo behavior.
    Placeholder,
    /// Surface the typed failure through the normal action boundary.
    Propagate,
}

impl std::str::FromStr for VideoErrorPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "placeholder" => Ok(VideoErrorPolicy::Placeholder),
            "propagate" => Ok(VideoErrorPolicy::Propagate),
            other => bail!("VIDEO_ON_ERROR must be 'placeholder' or 'propagate', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres URL. Absent = in-memory document store (demo mode).
    pub database_url: Option<String>,
    /// Redis URL. Absent = profile read cache disabled.
    pub redis_url: Option<String>,
    pub genai_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Seconds between status checks of a long-running video operation.
    pub video_poll_interval_secs: u64,
    /// Poll attempts before the operation is declared timed out.
    pub video_poll_max_attempts: u32,
    pub video_error_policy: VideoErrorPolicy,
    pub video_placeholder_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            redis_url: optional_env("REDIS_URL"),
            genai_api_key: require_env("GENAI_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            video_poll_interval_secs: std::env::var("VIDEO_POLL_INTERVAL_SECS")
                .unwrap_or_else(|_| "5".to_string())
                .parse::<u64>()
                .context("VIDEO_POLL_INTERVAL_SECS must be a number of seconds")?,
            video_poll_max_attempts: std::env::var("VIDEO_POLL_MAX_ATTEMPTS")
                .unwrap_or_else(|_| "60".to_string())
                .parse::<u32>()
                .context("VIDEO_POLL_MAX_ATTEMPTS must be a positive integer")?,
            video_error_policy: std::env::var("VIDEO_ON_ERROR")
                .unwrap_or_else(|_| "placeholder".to_string())
                .parse()?,
            video_placeholder_url: std::env::var("VIDEO_PLACEHOLDER_URL")
                .unwrap_or_else(|_| DEFAULT_VIDEO_PLACEHOLDER_URL.to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Treats unset AND empty as absent, so `DATABASE_URL=` disables Postgres.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_error_policy_parses_both_values() {
        assert_eq!(
            "placeholder".parse::<VideoErrorPolicy>().unwrap(),
            VideoErrorPolicy::Placeholder
        );
        assert_eq!(
            "Propagate".parse::<VideoErrorPolicy>().unwrap(),
            VideoErrorPolicy::Propagate
        );
    }

    #[test]
    fn test_video_error_policy_rejects_unknown() {
        assert!("explode".parse::<VideoErrorPolicy>().is_err());
    }

    #[test]
    fn test_default_placeholder_is_a_url() {
        assert!(DEFAULT_VIDEO_PLACEHOLDER_URL.starts_with("https://"));
    }
}
