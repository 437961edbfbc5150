/// GenAI Client — the single point of entry for all generative-model calls
/// in SkillSync.
///
/// ARCHITECTURAL RULE: No other module may call the Generative Language API
/// directly. All model interactions MUST go through this module.
///
/// Models are hardcoded — do not make configurable to prevent drift.
use base64::prelude::*;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

pub mod wire;

use wire::{
    ApiErrorEnvelope, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    Operation, Part, SpeechConfig, VideoGenerationRequest, VideoInstance, VideoParameters,
};

const GENAI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Text model for all structured-output calls.
pub const TEXT_MODEL: &str = "gemini-2.0-flash";
/// Speech-synthesis model for video-resume narration.
pub const TTS_MODEL: &str = "gemini-2.5-flash-preview-tts";
/// Long-running video-synthesis model.
pub const VIDEO_MODEL: &str = "veo-2.0-generate-001";
const MAX_OUTPUT_TOKENS: u32 = 4096;
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum GenAiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Base64 decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("Model returned empty content")]
    EmptyContent,

    #[error("Speech synthesis returned no audio payload")]
    MissingAudio,
}

/// The single generative-model client used by all flows in SkillSync.
/// Wraps the Generative Language REST API with retry logic and structured
/// output helpers.
#[derive(Clone)]
pub struct GenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GenAiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            base_url: GENAI_API_BASE.to_string(),
        }
    }

    /// Overrides the API base URL. Test seam only.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// POSTs a request body to `{base}/{path}`, returning the parsed response.
    /// Retries on 429 (rate limit), 5xx, and transport errors with
    /// exponential backoff.
    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, GenAiError> {
        let url = format!("{}/{path}", self.base_url);
        let mut last_error: Option<GenAiError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "GenAI call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&url)
                .header("x-goog-api-key", &self.api_key)
                .header("content-type", "application/json")
                .json(body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(GenAiError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("GenAI API returned {}: {}", status, body);
                last_error = Some(GenAiError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                // Try to parse the structured error message
                let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(GenAiError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            return Ok(response.json().await?);
        }

        Err(last_error.unwrap_or(GenAiError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }

    /// Calls the text model and deserializes the response text as JSON.
    /// The prompt must instruct the model to return the exact schema;
    /// output that does not parse into `T` is a generation failure.
    pub async fn generate_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
    ) -> Result<T, GenAiError> {
        let request = GenerateContentRequest {
            contents: vec![Content::user_text(prompt)],
            system_instruction: Some(Content::system_text(system)),
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                max_output_tokens: Some(MAX_OUTPUT_TOKENS),
                ..Default::default()
            }),
        };

        let response: GenerateContentResponse = self
            .post(&format!("models/{TEXT_MODEL}:generateContent"), &request)
            .await?;

        let text = response.first_text().ok_or(GenAiError::EmptyContent)?;

        // Strip markdown code fences if the model wraps JSON in them
        let text = strip_json_fences(text);

        debug!("GenAI structured response: {} bytes", text.len());

        serde_json::from_str(text).map_err(GenAiError::Parse)
    }

    /// Synthesizes speech for `text`, returning raw PCM samples
    /// (mono, 24 kHz, 16-bit — the TTS model's fixed output format).
    pub async fn synthesize_speech(&self, text: &str, voice: &str) -> Result<Vec<u8>, GenAiError> {
        let request = GenerateContentRequest {
            contents: vec![Content::user_text(text)],
            system_instruction: None,
            generation_config: Some(GenerationConfig {
                response_modalities: Some(vec!["AUDIO".to_string()]),
                speech_config: Some(SpeechConfig::prebuilt(voice)),
                ..Default::default()
            }),
        };

        let response: GenerateContentResponse = self
            .post(&format!("models/{TTS_MODEL}:generateContent"), &request)
            .await?;

        let audio = response.first_inline_audio().ok_or(GenAiError::MissingAudio)?;
        Ok(BASE64_STANDARD.decode(&audio.data)?)
    }

    /// Submits a video-generation job. Returns the operation handle to poll,
    /// not a result.
    pub async fn start_video_generation(
        &self,
        prompt: Vec<Part>,
        parameters: VideoParameters,
    ) -> Result<Operation, GenAiError> {
        let request = VideoGenerationRequest {
            instances: vec![VideoInstance { prompt }],
            parameters,
        };

        self.post(&format!("models/{VIDEO_MODEL}:predictLongRunning"), &request)
            .await
    }

    /// Re-checks a long-running operation's status by name.
    pub async fn get_operation(&self, name: &str) -> Result<Operation, GenAiError> {
        let url = format!("{}/{name}", self.base_url);

        let response = self
            .client
            .get(&url)
            .header("x-goog-api-key", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(GenAiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
