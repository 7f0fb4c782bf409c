use crate::domain::models::{AskResponse, Message};
use anyhow::Result;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatBackend: Send + Sync {
    // Authoritative transcript for session bootstrap
    async fn fetch_transcript(&self) -> Result<Vec<Message>>;

    // Send a question; the reply carries the full updated transcript
    async fn ask(&self, text: &str) -> Result<AskResponse>;
}
