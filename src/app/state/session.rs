use super::input::AppTextArea;
use crate::domain::error::ChatError;
use crate::domain::models::{AskResponse, Message};

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Appended(Vec<Message>),
    Rejected(ChatError),
}

/// Transcript, draft and in-flight submission for one chat session.
///
/// The backend owns the canonical history: every successful response replaces
/// the transcript wholesale, nothing is appended locally.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState<'a> {
    pub transcript: Vec<Message>,
    pub draft: AppTextArea<'a>,
    pub pending: bool,
    pub quick_replies: Vec<String>,
}

impl SessionState<'_> {
    /// Validates and claims the submission slot. Returns the text to send.
    pub fn begin_submit(&mut self, text: &str) -> Result<String, ChatError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyInput);
        }
        if self.pending {
            return Err(ChatError::AlreadySubmitting);
        }
        self.pending = true;
        Ok(text.to_string())
    }

    pub fn finish_submit(&mut self, result: Result<AskResponse, ChatError>) -> SubmitOutcome {
        self.pending = false;
        match result {
            Ok(response) => {
                self.transcript = response.items;
                self.quick_replies = response.questions.unwrap_or_default();
                self.draft.clear();
                SubmitOutcome::Appended(self.transcript.clone())
            }
            Err(err) => SubmitOutcome::Rejected(err),
        }
    }

    /// Initial fetch. A failure leaves an empty transcript.
    pub fn load_transcript(&mut self, result: Result<Vec<Message>, ChatError>) {
        self.transcript = result.unwrap_or_default();
    }

    #[must_use]
    pub fn accepts_input(&self) -> bool {
        !self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply() -> AskResponse {
        AskResponse {
            items: vec![
                Message::assistant("Hello, how can I help?"),
                Message::user("fees?"),
                Message::assistant("Fees depend on the unit."),
            ],
            questions: Some(vec!["What is the refund policy?".to_string()]),
        }
    }

    #[test]
    fn test_blank_submit_is_rejected_without_pending() {
        let mut session = SessionState::default();
        assert_eq!(session.begin_submit("   "), Err(ChatError::EmptyInput));
        assert!(!session.pending);
        assert!(session.transcript.is_empty());
    }

    #[test]
    fn test_second_submit_while_pending_is_rejected() {
        let mut session = SessionState::default();
        assert_eq!(session.begin_submit(" fees? "), Ok("fees?".to_string()));
        assert!(session.pending);
        assert_eq!(
            session.begin_submit("again"),
            Err(ChatError::AlreadySubmitting)
        );
        assert!(session.pending);
    }

    #[test]
    fn test_success_replaces_transcript_and_clears_draft() {
        let mut session = SessionState {
            transcript: vec![Message::assistant("stale local copy")],
            ..SessionState::default()
        };
        session.draft.replace("fees?");
        session.begin_submit("fees?").unwrap();

        let outcome = session.finish_submit(Ok(reply()));

        assert_eq!(outcome, SubmitOutcome::Appended(reply().items));
        assert_eq!(session.transcript, reply().items);
        assert!(session.draft.is_blank());
        assert!(!session.pending);
        assert_eq!(session.quick_replies, vec!["What is the refund policy?"]);
    }

    #[test]
    fn test_failure_keeps_transcript_and_draft() {
        let mut session = SessionState {
            transcript: vec![Message::assistant("hi")],
            ..SessionState::default()
        };
        session.draft.replace("fees?");
        session.begin_submit("fees?").unwrap();

        let outcome = session.finish_submit(Err(ChatError::BackendUnavailable));

        assert_eq!(outcome, SubmitOutcome::Rejected(ChatError::BackendUnavailable));
        assert_eq!(session.transcript, vec![Message::assistant("hi")]);
        assert_eq!(session.draft.text(), "fees?");
        assert!(!session.pending);
    }

    #[test]
    fn test_failed_load_yields_empty_transcript() {
        let mut session = SessionState::default();
        session.load_transcript(Err(ChatError::BackendUnavailable));
        assert!(session.transcript.is_empty());
    }
}
