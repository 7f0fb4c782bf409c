use crate::domain::speech::SpeechRecognizer;
use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use std::process::Stdio;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, Command};
use tokio::sync::{mpsc, Mutex};

/// Dictation backed by an external speech-to-text program. Each stdout line
/// is one recognized utterance; the running transcript is every utterance so
/// far joined by spaces.
pub struct CommandRecognizer {
    argv: Vec<String>,
    child: Mutex<Option<Child>>,
}

impl CommandRecognizer {
    pub fn new(argv: Vec<String>) -> Result<Self> {
        if argv.first().map_or(true, |program| program.trim().is_empty()) {
            bail!("dictation.command must name a program");
        }
        Ok(Self {
            argv,
            child: Mutex::new(None),
        })
    }
}

#[async_trait]
impl SpeechRecognizer for CommandRecognizer {
    async fn start(&self, updates: mpsc::Sender<String>) -> Result<()> {
        let mut slot = self.child.lock().await;
        if let Some(mut previous) = slot.take() {
            // A second start replaces the running session
            let _ = previous.kill().await;
        }

        let mut child = Command::new(&self.argv[0])
            .args(&self.argv[1..])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("spawn dictation command `{}`", self.argv[0]))?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| anyhow!("dictation command has no stdout"))?;

        tokio::spawn(async move {
            let mut lines = BufReader::new(stdout).lines();
            let mut transcript = String::new();
            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        let line = line.trim();
                        if line.is_empty() {
                            continue;
                        }
                        if !transcript.is_empty() {
                            transcript.push(' ');
                        }
                        transcript.push_str(line);
                        if updates.send(transcript.clone()).await.is_err() {
                            break;
                        }
                    }
                    Ok(None) => break,
                    Err(e) => {
                        tracing::warn!(error = %e, "dictation output unreadable");
                        break;
                    }
                }
            }
            tracing::debug!(chars = transcript.len(), "dictation stream closed");
        });

        tracing::info!(program = %self.argv[0], "dictation command started");
        *slot = Some(child);
        Ok(())
    }

    async fn stop(&self) -> Result<()> {
        let Some(mut child) = self.child.lock().await.take() else {
            return Ok(());
        };
        if child
            .try_wait()
            .context("poll dictation command")?
            .is_none()
        {
            child.kill().await.context("stop dictation command")?;
        }
        Ok(())
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Stand-in when no dictation command is configured.
pub struct UnavailableRecognizer;

#[async_trait]
impl SpeechRecognizer for UnavailableRecognizer {
    async fn start(&self, _updates: mpsc::Sender<String>) -> Result<()> {
        bail!("dictation is not configured")
    }

    async fn stop(&self) -> Result<()> {
        Ok(())
    }

    fn is_available(&self) -> bool {
        false
    }
}

/// Picks the recognizer for the configured argv, falling back to
/// [`UnavailableRecognizer`] when the command is missing or empty.
pub fn recognizer_from_config(command: Option<&[String]>) -> Arc<dyn SpeechRecognizer> {
    match command.map(|argv| CommandRecognizer::new(argv.to_vec())) {
        Some(Ok(recognizer)) => Arc::new(recognizer),
        Some(Err(e)) => {
            tracing::warn!(error = %e, "dictation disabled");
            Arc::new(UnavailableRecognizer)
        }
        None => Arc::new(UnavailableRecognizer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_command_is_unavailable() {
        assert!(!recognizer_from_config(None).is_available());
        assert!(!recognizer_from_config(Some(&[])).is_available());
        assert!(!recognizer_from_config(Some(&[" ".to_string()])).is_available());
        assert!(recognizer_from_config(Some(&["whisper-stream".to_string()])).is_available());
    }

    #[tokio::test]
    async fn test_stop_without_start_is_ok() {
        let recognizer = CommandRecognizer::new(vec!["true".to_string()]).unwrap();
        recognizer.stop().await.unwrap();
        recognizer.stop().await.unwrap();
        UnavailableRecognizer.stop().await.unwrap();
    }

    #[tokio::test]
    async fn test_unavailable_start_fails() {
        let (tx, _rx) = mpsc::channel(1);
        assert!(UnavailableRecognizer.start(tx).await.is_err());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_lines_accumulate_into_transcript() {
        let recognizer = CommandRecognizer::new(vec![
            "sh".to_string(),
            "-c".to_string(),
            "printf 'how do\\n\\ni enrol\\n'".to_string(),
        ])
        .unwrap();
        let (tx, mut rx) = mpsc::channel(4);

        recognizer.start(tx).await.unwrap();

        assert_eq!(rx.recv().await.as_deref(), Some("how do"));
        assert_eq!(rx.recv().await.as_deref(), Some("how do i enrol"));
        assert_eq!(rx.recv().await, None);
        recognizer.stop().await.unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_missing_program_reports_error() {
        let recognizer =
            CommandRecognizer::new(vec!["faqchat-no-such-recognizer".to_string()]).unwrap();
        let (tx, _rx) = mpsc::channel(1);
        let err = recognizer.start(tx).await.unwrap_err();
        assert!(format!("{err:#}").contains("faqchat-no-such-recognizer"));
    }
}
