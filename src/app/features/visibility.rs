use crate::app::{
    action::{Action, UpdateResult},
    features::session,
    state::{AppState, Focus},
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::FocusComposer => {
            state.focus = Focus::Composer;
            state.visibility.focus_in();
            UpdateResult::Handled(None)
        }
        Action::BlurComposer => {
            state.focus = Focus::Transcript;
            state.visibility.blur();
            state.suggestions.highlighted = None;
            UpdateResult::Handled(None)
        }
        Action::PointerOutside | Action::DismissSuggestions => {
            state.visibility.dismiss();
            state.suggestions.highlighted = None;
            UpdateResult::Handled(None)
        }
        Action::AcceptSuggestion(idx) => {
            let Some(label) = state.suggestions.candidates.get(*idx).cloned() else {
                return UpdateResult::Handled(None);
            };
            if !state.session.accepts_input() || state.dictation.listening {
                return UpdateResult::Handled(None);
            }
            state.visibility.dismiss();
            state.suggestions.highlighted = None;
            state.session.draft.replace(&label);
            if state.submit_on_accept {
                return UpdateResult::Handled(session::submit(state, &label));
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::command::Command;
    use crate::app::reducer;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn with_suggestions(labels: &[&str]) -> AppState<'static> {
        let mut state = AppState::default();
        let request = state.suggestions.dispatch("q");
        reducer::update(
            &mut state,
            Action::SuggestionsLoaded {
                request,
                result: Ok(labels.iter().map(|s| s.to_string()).collect()),
            },
        );
        state
    }

    #[test]
    fn test_outside_click_hides_until_next_match() {
        let mut state = with_suggestions(&["Enrol now"]);
        assert!(state.suggestions_visible());

        reducer::update(&mut state, Action::PointerOutside);
        assert!(!state.suggestions_visible());

        let command = reducer::update(
            &mut state,
            Action::DraftInput(KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE)),
        );
        assert_eq!(command, Some(Command::ScheduleSuggestions("e".to_string())));
        // The earlier match stays hidden until the lookup for "e" lands
        assert!(!state.suggestions_visible());

        reducer::update(&mut state, Action::SuggestionQueryDue("e".to_string()));
        let request = state.suggestions.latest_request;
        reducer::update(
            &mut state,
            Action::SuggestionsLoaded {
                request,
                result: Ok(vec!["Enrolment dates".to_string()]),
            },
        );
        assert!(state.suggestions_visible());
        assert_eq!(state.suggestions.candidates, vec!["Enrolment dates"]);
    }

    #[test]
    fn test_accept_commits_label_and_dismisses() {
        let mut state = with_suggestions(&["Enrol now", "Enrolment dates"]);

        let command = reducer::update(&mut state, Action::AcceptSuggestion(1));

        assert_eq!(command, None);
        assert_eq!(state.session.draft.text(), "Enrolment dates");
        assert!(state.visibility.dismissed_explicitly);
        assert!(!state.suggestions_visible());
    }

    #[test]
    fn test_accept_can_submit_directly() {
        let mut state = with_suggestions(&["Enrol now"]);
        state.submit_on_accept = true;

        let command = reducer::update(&mut state, Action::AcceptSuggestion(0));

        assert_eq!(command, Some(Command::Ask("Enrol now".to_string())));
        assert!(state.session.pending);
    }

    #[test]
    fn test_blur_and_refocus() {
        let mut state = with_suggestions(&["Fees"]);
        reducer::update(&mut state, Action::BlurComposer);
        assert_eq!(state.focus, Focus::Transcript);
        assert!(!state.suggestions_visible());

        reducer::update(&mut state, Action::FocusComposer);
        assert!(state.suggestions_visible());
    }
}
