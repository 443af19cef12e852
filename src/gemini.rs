//! Gemini content generation client.
//!
//! The single point of entry for generative-AI calls: builds the prompt,
//! issues one `generateContent` request with a declared JSON response
//! schema, and decodes the reply into [`InfographicData`]. No retries and
//! no client-side timeout; each invocation is one outbound call whose
//! failure is scoped to that fetch attempt.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

use crate::model::InfographicData;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// The model used for all generation calls. Intentionally hardcoded.
pub const MODEL: &str = "gemini-2.5-flash";

/// Everything that can go wrong between "user asked" and "typed data".
/// Each kind carries its own user-facing message; the kind itself is what
/// gets logged.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("no API key was baked into this build")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status})")]
    Api { status: u16 },

    #[error("model returned no text")]
    EmptyResponse,

    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response shape invalid: {0}")]
    Schema(String),
}

impl GenerateError {
    /// Short stable label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            GenerateError::MissingApiKey => "missing-api-key",
            GenerateError::Http(_) => "http",
            GenerateError::Api { .. } => "api-status",
            GenerateError::EmptyResponse => "empty-response",
            GenerateError::Decode(_) => "decode",
            GenerateError::Schema(_) => "schema",
        }
    }

    /// The message shown in the error panel. Every kind ends with a retry
    /// hint; recovery is always manual.
    pub fn user_message(&self) -> String {
        match self {
            GenerateError::MissingApiKey => {
                "No API key is configured for this build. \
                 Rebuild with GEMINI_API_KEY set, then try again."
                    .to_string()
            }
            GenerateError::Http(_) => {
                "Could not reach the generation service. \
                 Check your connection and try again."
                    .to_string()
            }
            GenerateError::Api { status } => format!(
                "The generation service rejected the request (HTTP {}). \
                 Please try again.",
                status
            ),
            GenerateError::EmptyResponse => {
                "The model returned an empty response. Please try again.".to_string()
            }
            GenerateError::Decode(_) => {
                "The model returned malformed JSON. Please try again.".to_string()
            }
            GenerateError::Schema(_) => {
                "The model returned data in an unexpected shape. \
                 Please try again."
                    .to_string()
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first candidate part that has any.
    fn text(&self) -> Option<&str> {
        self.candidates
            .iter()
            .filter_map(|c| c.content.as_ref())
            .flat_map(|c| c.parts.iter())
            .find_map(|p| p.text.as_deref())
    }
}

/// The prompt sent for every generation, with the topic spliced in.
pub fn build_prompt(topic: &str) -> String {
    format!(
        "You are an expert Physics Curriculum Consultant.\n\
         Create an infographic content plan linking the Senior School Physics \
         topic: \"{topic}\" to real-world careers.\n\
         \n\
         Provide 4 distinct, highly relevant careers that heavily rely on \
         understanding {topic}.\n\
         For each career, provide:\n\
         1. A short description.\n\
         2. Estimated average annual salary in Indian Rupees (INR) (number only).\n\
         3. Projected 10-year job growth percentage (number only).\n\
         4. Minimum typical degree level (Bachelors, Masters, PhD).\n\
         5. A specific, actionable 1-sentence \"Classroom Link\" or activity a \
         teacher can do to demonstrate this career connection.\n\
         6. Top 3 key skills required (short strings)."
    )
}

/// The response schema declared to the API. Career elements require every
/// field except `id`.
fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "topic": { "type": "STRING" },
            "summary": {
                "type": "STRING",
                "description": "A brief 1-sentence overview of why this physics topic matters to the world."
            },
            "careers": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "STRING" },
                        "title": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "salary": { "type": "NUMBER" },
                        "growth": { "type": "NUMBER" },
                        "degreeLevel": { "type": "STRING" },
                        "classroomActivity": { "type": "STRING" },
                        "skills": { "type": "ARRAY", "items": { "type": "STRING" } }
                    },
                    "required": [
                        "title", "description", "salary", "growth",
                        "degreeLevel", "classroomActivity", "skills"
                    ]
                }
            }
        },
        "required": ["topic", "summary", "careers"]
    })
}

/// Decode the model's text reply into typed data, then shape-check it so
/// malformed payloads surface here instead of inside rendering.
pub fn decode_infographic(text: &str) -> Result<InfographicData, GenerateError> {
    let data: InfographicData = serde_json::from_str(strip_json_fences(text))?;
    if let Some(problem) = data.shape_error() {
        return Err(GenerateError::Schema(problem));
    }
    Ok(data)
}

/// Strips ```json ... ``` or ``` ... ``` code fences. The API usually
/// honours `responseMimeType`, but fenced output still occurs.
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

/// The generation client. Cheap to clone; holds the shared `reqwest`
/// client and the build-time API key.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: Option<&'static str>,
}

impl GeminiClient {
    /// Reads the key baked in at compile time. wasm32 has no runtime
    /// process environment, so `GEMINI_API_KEY` is captured by the build.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("GEMINI_API_KEY"))
    }

    pub fn new(api_key: Option<&'static str>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }

    /// One generation round-trip: prompt in, typed infographic out.
    pub async fn generate(&self, topic: &str) -> Result<InfographicData, GenerateError> {
        let api_key = match self.api_key {
            Some(key) if !key.is_empty() => key,
            _ => return Err(GenerateError::MissingApiKey),
        };

        let prompt = build_prompt(topic);
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: &prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
            },
        };

        let url = format!("{}/{}:generateContent", GEMINI_API_BASE, MODEL);
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerateError::Api {
                status: status.as_u16(),
            });
        }

        let raw = response.text().await?;
        let payload: GenerateResponse = serde_json::from_str(&raw)?;
        let text = match payload.text() {
            Some(t) if !t.trim().is_empty() => t,
            _ => return Err(GenerateError::EmptyResponse),
        };

        log::debug!("generation for {:?} returned {} bytes", topic, text.len());
        decode_infographic(text)
    }
}
