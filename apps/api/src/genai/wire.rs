//! Wire types for the Generative Language REST API.
//!
//! Only the fields this service reads or writes are modeled; the upstream
//! API tolerates absent optional fields in both directions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part::text(text)],
        }
    }

    pub fn system_text(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part::text(text)],
        }
    }
}

/// One content part: text, inline base64 payload, or a media reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_data: Option<FileData>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// A media reference by URI (remote URL or data URI).
    pub fn media(mime_type: impl Into<String>, uri: impl Into<String>) -> Self {
        Part {
            file_data: Some(FileData {
                mime_type: Some(mime_type.into()),
                file_uri: uri.into(),
            }),
            ..Default::default()
        }
    }

    /// Media type of this part, whichever way the payload is carried.
    pub fn media_mime_type(&self) -> Option<&str> {
        if let Some(inline) = &self.inline_data {
            return Some(inline.mime_type.as_str());
        }
        self.file_data.as_ref()?.mime_type.as_deref()
    }

    pub fn is_video(&self) -> bool {
        self.media_mime_type()
            .is_some_and(|mime| mime.starts_with("video/"))
    }
}

/// Base64-encoded payload carried inline in a response or request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// A media reference by URI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    pub file_uri: String,
}

// ────────────────────────────────────────────────────────────────────────────
// generateContent
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_modalities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech_config: Option<SpeechConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechConfig {
    pub voice_config: VoiceConfig,
}

impl SpeechConfig {
    pub fn prebuilt(voice_name: impl Into<String>) -> Self {
        Self {
            voice_config: VoiceConfig {
                prebuilt_voice_config: PrebuiltVoiceConfig {
                    voice_name: voice_name.into(),
                },
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceConfig {
    pub prebuilt_voice_config: PrebuiltVoiceConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrebuiltVoiceConfig {
    pub voice_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Text of the first text part of the first candidate.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .find_map(|p| p.text.as_deref())
    }

    /// First inline audio payload of the first candidate.
    pub fn first_inline_audio(&self) -> Option<&InlineData> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .filter_map(|p| p.inline_data.as_ref())
            .find(|d| d.mime_type.starts_with("audio/"))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Long-running video generation
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoGenerationRequest {
    pub instances: Vec<VideoInstance>,
    pub parameters: VideoParameters,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoInstance {
    pub prompt: Vec<Part>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoParameters {
    pub duration_seconds: u32,
    pub aspect_ratio: String,
    pub person_generation: String,
}

/// Handle to a long-running generation job, polled until `done`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub name: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub error: Option<OperationError>,
    #[serde(default)]
    pub response: Option<OperationResponse>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationError {
    #[serde(default)]
    pub code: Option<i64>,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationResponse {
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Operation {
    /// First video part of the terminal operation's output, if any.
    pub fn video_part(&self) -> Option<&Part> {
        self.response
            .as_ref()?
            .parts
            .iter()
            .find(|part| part.is_video())
    }
}

// Error envelope the API returns on non-2xx.
#[derive(Debug, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_part_serializes_without_empty_fields() {
        let value = serde_json::to_value(Part::text("hello")).unwrap();
        assert_eq!(value, serde_json::json!({ "text": "hello" }));
    }

    #[test]
    fn test_media_part_carries_mime_and_uri() {
        let part = Part::media("image/png", "https://example.com/a.png");
        let value = serde_json::to_value(&part).unwrap();
        assert_eq!(value["fileData"]["mimeType"], "image/png");
        assert_eq!(value["fileData"]["fileUri"], "https://example.com/a.png");
    }

    #[test]
    fn test_operation_deserializes_pending_shape() {
        let json = r#"{ "name": "operations/abc123" }"#;
        let operation: Operation = serde_json::from_str(json).unwrap();
        assert!(!operation.done);
        assert!(operation.error.is_none());
        assert!(operation.response.is_none());
    }

    #[test]
    fn test_operation_finds_first_video_part() {
        let json = r#"{
            "name": "operations/abc123",
            "done": true,
            "response": {
                "parts": [
                    { "text": "done" },
                    { "fileData": { "mimeType": "image/png", "fileUri": "gs://x/frame.png" } },
                    { "fileData": { "mimeType": "video/mp4", "fileUri": "gs://x/clip.mp4" } },
                    { "fileData": { "mimeType": "video/webm", "fileUri": "gs://x/clip.webm" } }
                ]
            }
        }"#;
        let operation: Operation = serde_json::from_str(json).unwrap();
        let part = operation.video_part().expect("video part");
        assert_eq!(part.file_data.as_ref().unwrap().file_uri, "gs://x/clip.mp4");
    }

    #[test]
    fn test_first_inline_audio_skips_non_audio() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        { "inlineData": { "mimeType": "image/png", "data": "QUJD" } },
                        { "inlineData": { "mimeType": "audio/pcm;rate=24000", "data": "QUJD" } }
                    ]
                }
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let audio = response.first_inline_audio().expect("audio part");
        assert!(audio.mime_type.starts_with("audio/"));
    }
}
