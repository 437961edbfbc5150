//! Generate Video Resume — two-stage pipeline behind a bounded poller.
//!
//! Stage A synthesizes narration from the script and transcodes it to a WAV
//! data URI. Stage B submits an animation request (fixed instruction +
//! avatar + audio) that returns a long-running operation handle, polled at
//! a fixed interval until terminal or the attempt budget runs out.
//!
//! Failure handling is explicit configuration: `Placeholder` swallows any
//! pipeline failure and reports the placeholder URL as a success,
//! `Propagate` surfaces the typed error.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::{Config, VideoErrorPolicy};
use crate::errors::AppError;
use crate::flows::prompts::VIDEO_ANIMATION_INSTRUCTION;
use crate::flows::{audio, Capability};
use crate::genai::wire::{Operation, Part, VideoParameters};
use crate::genai::GenAiClient;
use crate::store::{profiles, DocumentStore};

/// Narration voice for the speech-synthesis stage.
const TTS_VOICE: &str = "Algenib";

/// Target clip length. May need adjustment based on audio length.
const DURATION_SECONDS: u32 = 5;
const ASPECT_RATIO: &str = "16:9";
const PERSON_GENERATION: &str = "allow_adult";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVideoInput {
    pub script: String,
    pub freelancer_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVideoOutput {
    pub video_url: String,
}

/// Runtime knobs for the poller and the failure policy.
#[derive(Debug, Clone)]
pub struct VideoSettings {
    pub poll_interval: Duration,
    pub max_poll_attempts: u32,
    pub error_policy: VideoErrorPolicy,
    pub placeholder_url: String,
}

impl VideoSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            poll_interval: Duration::from_secs(config.video_poll_interval_secs),
            max_poll_attempts: config.video_poll_max_attempts,
            error_policy: config.video_error_policy,
            placeholder_url: config.video_placeholder_url.clone(),
        }
    }
}

/// Generates a video resume for a freelancer.
///
/// Under the `Placeholder` policy this never surfaces a failure: any
/// pipeline error is logged and degraded to the placeholder URL.
pub async fn generate_video_resume(
    store: &dyn DocumentStore,
    genai: &GenAiClient,
    settings: &VideoSettings,
    input: &GenerateVideoInput,
) -> Result<GenerateVideoOutput, AppError> {
    match run_pipeline(store, genai, settings, input).await {
        Ok(output) => Ok(output),
        Err(err) => match settings.error_policy {
            VideoErrorPolicy::Placeholder => {
                warn!("Video generation degraded to placeholder: {err}");
                Ok(GenerateVideoOutput {
                    video_url: settings.placeholder_url.clone(),
                })
            }
            VideoErrorPolicy::Propagate => Err(err),
        },
    }
}

async fn run_pipeline(
    store: &dyn DocumentStore,
    genai: &GenAiClient,
    settings: &VideoSettings,
    input: &GenerateVideoInput,
) -> Result<GenerateVideoOutput, AppError> {
    if input.script.trim().is_empty() {
        return Err(AppError::Validation("script cannot be empty".to_string()));
    }

    let freelancer = profiles::get_profile(store, &input.freelancer_id).await?;

    // Stage A: narration audio, transcoded to a WAV data URI
    info!("Synthesizing narration for freelancer {}", freelancer.id);
    let pcm = genai
        .synthesize_speech(&input.script, TTS_VOICE)
        .await
        .map_err(|e| AppError::generation(Capability::VideoResume, e))?;
    let audio_uri = audio::wav_data_uri(&pcm);

    // Stage B: submit the animation job
    let prompt = vec![
        Part::text(VIDEO_ANIMATION_INSTRUCTION),
        Part::media("image/png", freelancer.avatar_url.as_str()),
        Part::media("audio/wav", audio_uri),
    ];
    let parameters = VideoParameters {
        duration_seconds: DURATION_SECONDS,
        aspect_ratio: ASPECT_RATIO.to_string(),
        person_generation: PERSON_GENERATION.to_string(),
    };

    let operation = genai
        .start_video_generation(prompt, parameters)
        .await
        .map_err(|e| AppError::generation(Capability::VideoResume, e))?;
    info!("Video operation {} submitted", operation.name);

    let operation = poll_until_done(genai, operation, settings).await?;

    if let Some(error) = &operation.error {
        return Err(AppError::generation(
            Capability::VideoResume,
            format!("operation failed: {}", error.message),
        ));
    }

    let part = operation.video_part().ok_or_else(|| {
        AppError::generation(
            Capability::VideoResume,
            "operation completed without a video part",
        )
    })?;

    if let Some(file_data) = &part.file_data {
        info!("Generated video asset at {}", file_data.file_uri);
    }

    // TODO: fetch the generated asset and re-host it (the upstream URI
    // requires API authentication, so it cannot be handed to the client).
    // Until then every successful run reports the placeholder URL.
    Ok(GenerateVideoOutput {
        video_url: settings.placeholder_url.clone(),
    })
}

/// Re-checks the operation every `poll_interval` until it reports done.
/// Exceeding `max_poll_attempts` is a `GenerationTimeout`.
async fn poll_until_done(
    genai: &GenAiClient,
    mut operation: Operation,
    settings: &VideoSettings,
) -> Result<Operation, AppError> {
    let mut attempts = 0u32;
    while !operation.done {
        if attempts >= settings.max_poll_attempts {
            return Err(AppError::GenerationTimeout {
                capability: Capability::VideoResume,
                attempts,
            });
        }
        attempts += 1;

        tokio::time::sleep(settings.poll_interval).await;
        operation = genai
            .get_operation(&operation.name)
            .await
            .map_err(|e| AppError::generation(Capability::VideoResume, e))?;
    }
    Ok(operation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryDocumentStore;

    /// Client whose every call fails fast: nothing listens on port 9.
    fn unreachable_genai() -> GenAiClient {
        GenAiClient::new("test-key".to_string()).with_base_url("http://127.0.0.1:9")
    }

    fn settings(policy: VideoErrorPolicy) -> VideoSettings {
        VideoSettings {
            poll_interval: Duration::from_millis(1),
            max_poll_attempts: 2,
            error_policy: policy,
            placeholder_url: "https://example.com/placeholder.mp4".to_string(),
        }
    }

    fn input() -> GenerateVideoInput {
        GenerateVideoInput {
            script: "Hi, I'm Elena and I build web products.".to_string(),
            freelancer_id: "1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_speech_failure_degrades_to_placeholder_success() {
        let store = MemoryDocumentStore::new();
        let output = generate_video_resume(
            &store,
            &unreachable_genai(),
            &settings(VideoErrorPolicy::Placeholder),
            &input(),
        )
        .await
        .expect("placeholder policy never fails");

        assert_eq!(output.video_url, "https://example.com/placeholder.mp4");
    }

    #[tokio::test]
    async fn test_propagate_policy_surfaces_the_failure() {
        let store = MemoryDocumentStore::new();
        let result = generate_video_resume(
            &store,
            &unreachable_genai(),
            &settings(VideoErrorPolicy::Propagate),
            &input(),
        )
        .await;

        assert!(matches!(result, Err(AppError::Generation { .. })));
    }

    #[tokio::test]
    async fn test_unknown_freelancer_degrades_to_placeholder_too() {
        let store = MemoryDocumentStore::new();
        let mut bad_input = input();
        bad_input.freelancer_id = "no-such-freelancer".to_string();

        let output = generate_video_resume(
            &store,
            &unreachable_genai(),
            &settings(VideoErrorPolicy::Placeholder),
            &bad_input,
        )
        .await
        .unwrap();
        assert_eq!(output.video_url, "https://example.com/placeholder.mp4");
    }

    #[tokio::test]
    async fn test_poller_times_out_after_attempt_budget() {
        let genai = unreachable_genai();
        let pending = Operation {
            name: "operations/test".to_string(),
            done: false,
            error: None,
            response: None,
        };

        // Zero budget: the pending operation times out before any re-check.
        let zero_budget = VideoSettings {
            max_poll_attempts: 0,
            ..settings(VideoErrorPolicy::Propagate)
        };
        let result = poll_until_done(&genai, pending, &zero_budget).await;
        assert!(matches!(result, Err(AppError::GenerationTimeout { .. })));
    }
}
