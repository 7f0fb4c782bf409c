use crate::app::{action::Action, command::Command};
use crate::domain::{
    backend::ChatBackend, catalog::CatalogCache, error::ChatError, matcher::match_suggestions,
    speech::SpeechRecognizer,
};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

const TRANSCRIPT_BUFFER: usize = 32;

#[derive(Debug)]
enum DictationRequest {
    Start(mpsc::Sender<Action>),
    Stop(Option<oneshot::Sender<()>>),
}

/// Adapters the effect handler talks to. Cloned into every spawned task.
///
/// The recognizer is owned by a single dictation task so start and stop run
/// in the order they were issued.
#[derive(Clone)]
pub struct Services {
    pub backend: Arc<dyn ChatBackend>,
    pub catalog: Arc<CatalogCache>,
    dictation: mpsc::UnboundedSender<DictationRequest>,
}

impl Services {
    /// Must be called from within a tokio runtime.
    pub fn new(
        backend: Arc<dyn ChatBackend>,
        catalog: Arc<CatalogCache>,
        speech: Arc<dyn SpeechRecognizer>,
    ) -> Self {
        let (dictation, requests) = mpsc::unbounded_channel();
        tokio::spawn(run_dictation(speech, requests));
        Self {
            backend,
            catalog,
            dictation,
        }
    }

    /// Stops the recognizer once every dictation request issued before this
    /// call has run.
    pub async fn stop_dictation(&self) {
        let (done_tx, done_rx) = oneshot::channel();
        if self
            .dictation
            .send(DictationRequest::Stop(Some(done_tx)))
            .is_ok()
        {
            let _ = done_rx.await;
        }
    }

    fn request_dictation(&self, request: DictationRequest) {
        if self.dictation.send(request).is_err() {
            tracing::warn!("dictation task is gone, request dropped");
        }
    }
}

async fn run_dictation(
    speech: Arc<dyn SpeechRecognizer>,
    mut requests: mpsc::UnboundedReceiver<DictationRequest>,
) {
    while let Some(request) = requests.recv().await {
        match request {
            DictationRequest::Start(tx) => start_dictation(speech.as_ref(), tx).await,
            DictationRequest::Stop(done) => {
                if let Err(e) = speech.stop().await {
                    tracing::warn!(error = %format!("{e:#}"), "recognizer did not stop cleanly");
                }
                if let Some(done) = done {
                    let _ = done.send(());
                }
            }
        }
    }
}

async fn start_dictation(speech: &dyn SpeechRecognizer, tx: mpsc::Sender<Action>) {
    let (updates_tx, mut updates_rx) = mpsc::channel::<String>(TRANSCRIPT_BUFFER);
    let forward_tx = tx.clone();
    tokio::spawn(async move {
        while let Some(text) = updates_rx.recv().await {
            if forward_tx
                .send(Action::DictationTranscript(text))
                .await
                .is_err()
            {
                break;
            }
        }
    });
    if let Err(e) = speech.start(updates_tx).await {
        let _ = tx.send(Action::DictationFailed(format!("{e:#}"))).await;
    }
}

pub fn handle_command(
    command: Command,
    services: &Services,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    match command {
        Command::LoadTranscript => {
            let backend = Arc::clone(&services.backend);
            tokio::spawn(async move {
                let result = backend.fetch_transcript().await.map_err(|e| {
                    tracing::warn!(error = %format!("{e:#}"), "transcript fetch failed");
                    ChatError::BackendUnavailable
                });
                let _ = tx.send(Action::TranscriptLoaded(result)).await;
            });
        }
        Command::Ask(text) => {
            let backend = Arc::clone(&services.backend);
            tokio::spawn(async move {
                let result = backend.ask(&text).await.map_err(|e| {
                    tracing::warn!(error = %format!("{e:#}"), "ask failed");
                    ChatError::BackendUnavailable
                });
                let _ = tx.send(Action::AskCompleted(result)).await;
            });
        }
        Command::LookupSuggestions { request, query } => {
            let catalog = Arc::clone(&services.catalog);
            tokio::spawn(async move {
                let result = match catalog.get().await {
                    Ok(records) => Ok(match_suggestions(&query, &records)),
                    Err(e) => {
                        tracing::warn!(error = %format!("{e:#}"), "catalog load failed");
                        Err(ChatError::CatalogUnavailable)
                    }
                };
                let _ = tx.send(Action::SuggestionsLoaded { request, result }).await;
            });
        }
        Command::StartDictation => services.request_dictation(DictationRequest::Start(tx)),
        Command::StopDictation => services.request_dictation(DictationRequest::Stop(None)),
        Command::ScheduleSuggestions(_) | Command::CancelSuggestions => {
            // Owned by the runtime's debouncer.
            tracing::trace!(?command, "timer command reached effect handler");
        }
    }
    Ok(())
}
