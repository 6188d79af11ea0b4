use anyhow::{Result, bail};
use async_trait::async_trait;

use super::{EnhanceRequest, EnhanceResponse, Enhancer};
use crate::consts::BAD_STATUS_MESSAGE;

/// Talks to the real enhancement service over HTTP.
pub struct HttpEnhancer {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpEnhancer {
    /// `endpoint` is the service base URL, e.g. `http://localhost:8000`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }

    fn enhance_url(&self) -> String {
        format!("{}/enhance", self.endpoint)
    }
}

#[async_trait]
impl Enhancer for HttpEnhancer {
    async fn enhance(&self, prompt: &str) -> Result<EnhanceResponse> {
        let body = EnhanceRequest {
            user_prompt: prompt.to_string(),
        };

        let resp = self
            .client
            .post(self.enhance_url())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            bail!("{BAD_STATUS_MESSAGE}");
        }

        Ok(resp.json().await?)
    }
}
