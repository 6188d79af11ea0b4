pub mod http;
pub mod mock;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Wire payload for one enhancement call. Built fresh per activation
/// from the trimmed prompt and discarded after the send.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhanceRequest {
    pub user_prompt: String,
}

/// Reply from the enhancement service. A missing `enhanced_prompt` is a
/// valid outcome, not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnhanceResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhanced_prompt: Option<String>,
}

impl EnhanceResponse {
    /// The usable enhanced text. An empty string counts the same as an
    /// absent field.
    pub fn text(&self) -> Option<&str> {
        self.enhanced_prompt.as_deref().filter(|t| !t.is_empty())
    }
}

/// The outbound half of the bridge. Could be the real HTTP service or a
/// scripted test double.
#[async_trait]
pub trait Enhancer: Send + Sync {
    /// One round trip: send the trimmed prompt, await the reply.
    ///
    /// A non-2xx status and a transport/parse failure both surface as
    /// `Err`; the distinction lives in the message text the controller
    /// renders.
    async fn enhance(&self, prompt: &str) -> Result<EnhanceResponse>;
}
