use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppState, Focus, NoticeSeverity},
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::StartDictation => UpdateResult::Handled(start(state)),
        Action::StopDictation => UpdateResult::Handled(stop(state)),
        Action::ToggleDictation => {
            if state.dictation.listening {
                UpdateResult::Handled(stop(state))
            } else {
                UpdateResult::Handled(start(state))
            }
        }
        Action::DictationTranscript(text) => {
            if let Some(transcript) = state.dictation.update(text.clone()) {
                state.session.draft.replace(transcript);
            }
            UpdateResult::Handled(None)
        }
        Action::DictationFailed(message) => {
            state.dictation.end();
            tracing::warn!(error = %message, "dictation stopped");
            state.set_notice(NoticeSeverity::Error, format!("Dictation failed: {message}"));
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn start(state: &mut AppState) -> Option<Command> {
    if !state.dictation_available {
        state.set_notice(
            NoticeSeverity::Warning,
            "Dictation is not configured (set dictation.command)",
        );
        return None;
    }
    if !state.session.accepts_input() {
        return None;
    }
    if !state.dictation.begin() {
        return None;
    }
    tracing::debug!("dictation started");
    state.focus = Focus::Composer;
    state.visibility.focus_in();
    state.visibility.dismiss();
    Some(Command::StartDictation)
}

fn stop(state: &mut AppState) -> Option<Command> {
    if state.dictation.end() {
        tracing::debug!(chars = state.dictation.transcript.len(), "dictation stopped");
        Some(Command::StopDictation)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reducer;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn dictating() -> AppState<'static> {
        let mut state = AppState {
            dictation_available: true,
            ..AppState::default()
        };
        assert_eq!(
            reducer::update(&mut state, Action::StartDictation),
            Some(Command::StartDictation)
        );
        state
    }

    #[test]
    fn test_transcript_overwrites_draft() {
        let mut state = dictating();
        state.session.draft.replace("typed earlier");

        reducer::update(&mut state, Action::DictationTranscript("how do".to_string()));
        assert_eq!(state.session.draft.text(), "how do");

        reducer::update(
            &mut state,
            Action::DictationTranscript("how do i enrol".to_string()),
        );
        assert_eq!(state.session.draft.text(), "how do i enrol");
    }

    #[test]
    fn test_keystrokes_do_not_race_dictation() {
        let mut state = dictating();
        reducer::update(&mut state, Action::DictationTranscript("fees".to_string()));
        reducer::update(
            &mut state,
            Action::DraftInput(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)),
        );
        assert_eq!(state.session.draft.text(), "fees");
    }

    #[test]
    fn test_stop_without_start_is_noop() {
        let mut state = AppState::default();
        assert_eq!(reducer::update(&mut state, Action::StopDictation), None);

        let mut state = dictating();
        assert_eq!(
            reducer::update(&mut state, Action::StopDictation),
            Some(Command::StopDictation)
        );
        assert_eq!(reducer::update(&mut state, Action::StopDictation), None);
    }

    #[test]
    fn test_late_transcript_after_stop_is_dropped() {
        let mut state = dictating();
        reducer::update(&mut state, Action::DictationTranscript("fees".to_string()));
        reducer::update(&mut state, Action::StopDictation);
        reducer::update(&mut state, Action::DictationTranscript("fees and".to_string()));
        assert_eq!(state.session.draft.text(), "fees");
    }

    #[test]
    fn test_unavailable_recognizer_shows_notice() {
        let mut state = AppState::default();
        assert_eq!(reducer::update(&mut state, Action::ToggleDictation), None);
        assert!(!state.dictation.listening);
        assert_eq!(
            state.notice.map(|n| n.severity),
            Some(NoticeSeverity::Warning)
        );
    }

    #[test]
    fn test_no_dictation_while_pending() {
        let mut state = AppState {
            dictation_available: true,
            ..AppState::default()
        };
        state.session.pending = true;
        assert_eq!(reducer::update(&mut state, Action::StartDictation), None);
        assert!(!state.dictation.listening);
    }
}
