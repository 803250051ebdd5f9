use crate::domain::ports::CodePrompt;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::io;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A prompt adapter answering from a queue of canned responses.
///
/// `Clone` shares the underlying queue, so a handle kept by the caller can
/// push responses after an authorizer has taken ownership of the adapter.
/// Ideal for tests and scripted demos where no operator is present.
#[derive(Default, Clone)]
pub struct ScriptedPrompt {
    responses: Arc<Mutex<VecDeque<String>>>,
}

impl ScriptedPrompt {
    /// Creates a new, empty scripted prompt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `response` to be returned by a later `read_code` call.
    pub async fn push(&self, response: impl Into<String>) {
        self.responses.lock().await.push_back(response.into());
    }
}

#[async_trait]
impl CodePrompt for ScriptedPrompt {
    async fn read_code(&self) -> Result<String> {
        self.responses.lock().await.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted response left").into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_responses_come_back_in_order() {
        let prompt = ScriptedPrompt::new();
        prompt.push("111111").await;
        prompt.push("222222").await;

        assert_eq!(prompt.read_code().await.unwrap(), "111111");
        assert_eq!(prompt.read_code().await.unwrap(), "222222");
    }

    #[tokio::test]
    async fn test_exhausted_queue_is_an_error() {
        let prompt = ScriptedPrompt::new();
        assert!(prompt.read_code().await.is_err());
    }

    #[tokio::test]
    async fn test_clones_share_the_queue() {
        let prompt = ScriptedPrompt::new();
        let handle = prompt.clone();
        handle.push("482913").await;

        assert_eq!(prompt.read_code().await.unwrap(), "482913");
    }
}
