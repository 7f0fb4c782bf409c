use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppState, NoticeSeverity, SubmitOutcome},
};
use crate::domain::error::ChatError;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Submit => {
            let text = state.session.draft.text();
            UpdateResult::Handled(submit(state, &text))
        }
        Action::QuickReply(idx) => {
            let Some(question) = state.session.quick_replies.get(*idx).cloned() else {
                return UpdateResult::Handled(None);
            };
            UpdateResult::Handled(submit(state, &question))
        }
        Action::TranscriptLoaded(result) => {
            if let Err(e) = result {
                tracing::warn!(error = %e, "initial transcript unavailable, starting empty");
            }
            state.session.load_transcript(result.clone());
            state.transcript_view.scroll_to_bottom();
            UpdateResult::Handled(None)
        }
        Action::AskCompleted(result) => {
            let outcome = state.session.finish_submit(result.clone());
            state.transcript_view.scroll_to_bottom();
            match outcome {
                SubmitOutcome::Appended(transcript) => {
                    tracing::info!(messages = transcript.len(), "transcript replaced");
                    state.notice = None;
                    state.suggestions.reset();
                    state.visibility.observe_candidates(0);
                    UpdateResult::Handled(Some(Command::CancelSuggestions))
                }
                SubmitOutcome::Rejected(err) => {
                    tracing::warn!(error = %err, "submit failed, draft kept");
                    state.set_notice(
                        NoticeSeverity::Error,
                        format!("{err}. Your question was kept, press Enter to retry."),
                    );
                    UpdateResult::Handled(None)
                }
            }
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Entry point for every send path: typed draft, quick reply or accepted
/// suggestion.
pub fn submit(state: &mut AppState, text: &str) -> Option<Command> {
    if state.dictation.listening {
        state.set_notice(NoticeSeverity::Info, "Release the mic before sending");
        return None;
    }
    match state.session.begin_submit(text) {
        Ok(text) => {
            tracing::info!(chars = text.len(), "submitting question");
            state.visibility.dismiss();
            state.suggestions.highlighted = None;
            Some(Command::Ask(text))
        }
        Err(ChatError::AlreadySubmitting) => {
            state.set_notice(NoticeSeverity::Info, "Still waiting for the last answer");
            None
        }
        Err(err) => {
            tracing::debug!(error = %err, "submit rejected");
            None
        }
    }
}
