use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

/// Continuous speech-to-text engine driving dictation.
///
/// `start` begins listening and pushes the full running transcript into
/// `updates` every time it changes. `stop` must be harmless when nothing is
/// listening.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn start(&self, updates: mpsc::Sender<String>) -> Result<()>;

    async fn stop(&self) -> Result<()>;

    fn is_available(&self) -> bool;
}
