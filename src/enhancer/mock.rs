use anyhow::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::{EnhanceResponse, Enhancer};

/// What a scripted enhancer should do on one call.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return this reply.
    Reply(EnhanceResponse),
    /// Fail with this message.
    Failure(String),
}

impl MockReply {
    /// Convenience: a successful reply carrying `text`.
    pub fn enhanced(text: &str) -> Self {
        Self::Reply(EnhanceResponse {
            enhanced_prompt: Some(text.to_string()),
        })
    }

    /// Convenience: a successful reply with the field absent.
    pub fn empty() -> Self {
        Self::Reply(EnhanceResponse::default())
    }
}

/// Shared handle to the prompts a [`MockEnhancer`] has received.
pub type CallLog = Arc<Mutex<Vec<String>>>;

/// A scripted enhancer for tests. Returns pre-defined replies in order
/// and records every prompt it is called with.
pub struct MockEnhancer {
    replies: Vec<MockReply>,
    index: AtomicUsize,
    calls: CallLog,
}

impl MockEnhancer {
    pub fn new(replies: Vec<MockReply>) -> Self {
        Self {
            replies,
            index: AtomicUsize::new(0),
            calls: CallLog::default(),
        }
    }

    /// Grab a handle to the recorded prompts before boxing the enhancer.
    pub fn calls(&self) -> CallLog {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl Enhancer for MockEnhancer {
    async fn enhance(&self, prompt: &str) -> Result<EnhanceResponse> {
        self.calls.lock().unwrap().push(prompt.to_string());
        let i = self.index.fetch_add(1, Ordering::SeqCst);
        match self.replies.get(i) {
            Some(MockReply::Reply(resp)) => Ok(resp.clone()),
            Some(MockReply::Failure(message)) => Err(anyhow::anyhow!("{message}")),
            None => Err(anyhow::anyhow!(
                "MockEnhancer: no more replies (called {} times)",
                i + 1
            )),
        }
    }
}
