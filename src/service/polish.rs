//! Final polishing of an enriched prompt by a language model.

use anyhow::{Result, bail};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const API_KEY_ENV: &str = "GEMINI_KEY";

/// The model rewrites the prompt, it must not answer it.
const POLISH_INSTRUCTION: &str = "Below is a user prompt. Improve the clarity, specificity, \
    and structure of the prompt. Do not answer the prompt. Only return the revised version \
    of the prompt, ready for input into an AI assistant.\n\nPrompt:\n";

/// Turns a heuristically enriched prompt into the final polished one.
/// Could be a hosted model or a test double.
#[async_trait]
pub trait Polisher: Send + Sync {
    async fn polish(&self, enriched: &str) -> Result<String>;
}

/// Polishes via the Gemini generateContent API.
pub struct GeminiPolisher {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiPolisher {
    pub fn new(api_key: String, model: Option<String>) -> Self {
        Self {
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            client: reqwest::Client::new(),
        }
    }

    /// Read the API key from the `GEMINI_KEY` environment variable.
    pub fn from_env(model: Option<String>) -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "no Gemini credentials found. Set {API_KEY_ENV} or run with --no-polish."
                )
            })?;
        Ok(Self::new(api_key, model))
    }

    fn generate_url(&self) -> String {
        format!("{API_BASE}/{}:generateContent", self.model)
    }
}

#[async_trait]
impl Polisher for GeminiPolisher {
    async fn polish(&self, enriched: &str) -> Result<String> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: format!("{POLISH_INSTRUCTION}{enriched}"),
                }],
            }],
        };

        let resp = self
            .client
            .post(self.generate_url())
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            bail!("Gemini API error ({}): {}", status, text);
        }

        let api_resp: GenerateResponse = resp.json().await?;

        let text: String = api_resp
            .candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        let text = text.trim();
        if text.is_empty() {
            bail!("Gemini API returned empty response");
        }

        Ok(text.to_string())
    }
}

/// Skips the model call and returns the enriched prompt unchanged.
/// Used by `--no-polish` and in tests.
pub struct Passthrough;

#[async_trait]
impl Polisher for Passthrough {
    async fn polish(&self, enriched: &str) -> Result<String> {
        Ok(enriched.to_string())
    }
}

// --- API types ---

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: String,
}
