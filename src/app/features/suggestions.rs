use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::AppState,
};
use crossterm::event::KeyCode;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::DraftInput(key) => {
            // The draft belongs to the recognizer while dictating and is
            // frozen while a submission is in flight.
            if !state.session.accepts_input() || state.dictation.listening {
                return UpdateResult::Handled(None);
            }
            if key.code == KeyCode::Enter {
                return UpdateResult::Handled(None);
            }
            let before = state.session.draft.text();
            state.session.draft.input(*key);
            let text = state.session.draft.text();
            if text == before {
                return UpdateResult::Handled(None);
            }
            UpdateResult::Handled(on_input(state, &text))
        }
        Action::SuggestionQueryDue(query) => {
            // A delivery already queued when the draft changed is stale
            if query.trim().is_empty() || *query != state.session.draft.text() {
                tracing::trace!(query = %query, "debounced query no longer matches draft");
                return UpdateResult::Handled(None);
            }
            let request = state.suggestions.dispatch(query);
            tracing::debug!(request, query = %query, "suggestion lookup dispatched");
            UpdateResult::Handled(Some(Command::LookupSuggestions {
                request,
                query: query.clone(),
            }))
        }
        Action::SuggestionsLoaded { request, result } => {
            if state.suggestions.apply(*request, result.clone()) {
                if let Err(e) = result {
                    tracing::debug!(error = %e, "suggestions hidden");
                }
                state
                    .visibility
                    .observe_candidates(state.suggestions.candidates.len());
            } else {
                tracing::trace!(request, "stale suggestions dropped");
            }
            UpdateResult::Handled(None)
        }
        Action::HighlightNextSuggestion => {
            if state.suggestions_visible() {
                state.suggestions.highlight_next();
            }
            UpdateResult::Handled(None)
        }
        Action::HighlightPrevSuggestion => {
            if state.suggestions_visible() {
                state.suggestions.highlight_prev();
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Keystroke hook. Blank text goes straight back to idle without a lookup;
/// anything else is handed to the debouncer.
pub fn on_input(state: &mut AppState, text: &str) -> Option<Command> {
    if state.visibility.dismissed_explicitly {
        // Only the match for the new text may bring the list back
        state.visibility.observe_candidates(0);
    }
    state.visibility.keystroke();
    state.suggestions.highlighted = None;
    if text.trim().is_empty() {
        state.suggestions.reset();
        state.visibility.observe_candidates(0);
        return Some(Command::CancelSuggestions);
    }
    Some(Command::ScheduleSuggestions(text.to_string()))
}
