use crate::domain::error::ChatError;
use crate::domain::matcher::MAX_SUGGESTIONS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestionPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(ChatError),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SuggestionState {
    pub query: String,
    pub candidates: Vec<String>,
    pub phase: SuggestionPhase,
    pub highlighted: Option<usize>,
    // Sequence number of the newest dispatched lookup
    pub latest_request: u64,
    // Rows the popup can draw, written back by the renderer
    pub visible_rows: Option<usize>,
}

impl SuggestionState {
    /// Back to idle. Any lookup still in flight becomes stale.
    pub fn reset(&mut self) {
        self.query.clear();
        self.candidates.clear();
        self.highlighted = None;
        self.phase = SuggestionPhase::Idle;
        self.latest_request += 1;
    }

    pub fn dispatch(&mut self, query: &str) -> u64 {
        self.latest_request += 1;
        self.query = query.to_string();
        self.phase = SuggestionPhase::Loading;
        self.latest_request
    }

    /// Applies a lookup result. Returns `false` for stale results, which are
    /// dropped untouched.
    pub fn apply(&mut self, request: u64, result: Result<Vec<String>, ChatError>) -> bool {
        if request != self.latest_request {
            return false;
        }
        self.highlighted = None;
        match result {
            Ok(mut candidates) => {
                candidates.truncate(MAX_SUGGESTIONS);
                self.candidates = candidates;
                self.phase = SuggestionPhase::Ready;
            }
            Err(err) => {
                self.candidates.clear();
                self.phase = SuggestionPhase::Failed(err);
            }
        }
        true
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == SuggestionPhase::Loading
    }

    #[must_use]
    pub fn error(&self) -> Option<ChatError> {
        match self.phase {
            SuggestionPhase::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Candidates that are actually on screen.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.visible_rows
            .map_or(self.candidates.len(), |rows| rows.min(self.candidates.len()))
    }

    /// Records how many rows the popup can draw and pulls the highlight back
    /// inside them.
    pub fn set_visible_rows(&mut self, rows: usize) {
        self.visible_rows = Some(rows);
        let count = self.row_count();
        if let Some(i) = self.highlighted {
            self.highlighted = count.checked_sub(1).map(|last| i.min(last));
        }
    }

    pub fn highlight_next(&mut self) {
        let count = self.row_count();
        if count == 0 {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(i) => (i + 1) % count,
            None => 0,
        });
    }

    pub fn highlight_prev(&mut self) {
        let count = self.row_count();
        if count == 0 {
            return;
        }
        let last = count - 1;
        self.highlighted = Some(match self.highlighted {
            Some(0) | None => last,
            Some(i) => i - 1,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_result_is_ignored() {
        let mut state = SuggestionState::default();
        let first = state.dispatch("enr");
        let second = state.dispatch("enrol");

        assert!(state.apply(second, Ok(vec!["Enrol now".to_string()])));
        assert!(!state.apply(first, Ok(vec!["Enrolment dates".to_string()])));

        assert_eq!(state.candidates, vec!["Enrol now"]);
        assert_eq!(state.phase, SuggestionPhase::Ready);
    }

    #[test]
    fn test_reset_invalidates_in_flight_lookup() {
        let mut state = SuggestionState::default();
        let request = state.dispatch("fees");
        state.reset();
        assert!(!state.apply(request, Ok(vec!["Fees".to_string()])));
        assert!(state.candidates.is_empty());
        assert_eq!(state.phase, SuggestionPhase::Idle);
    }

    #[test]
    fn test_failure_clears_candidates() {
        let mut state = SuggestionState {
            candidates: vec!["Fees".to_string()],
            ..SuggestionState::default()
        };
        let request = state.dispatch("fe");
        assert!(state.is_loading());
        state.apply(request, Err(ChatError::CatalogUnavailable));
        assert!(state.candidates.is_empty());
        assert_eq!(state.error(), Some(ChatError::CatalogUnavailable));
    }

    #[test]
    fn test_highlight_stays_on_drawn_rows() {
        let mut state = SuggestionState {
            candidates: (0..6).map(|i| format!("label {i}")).collect(),
            highlighted: Some(5),
            ..SuggestionState::default()
        };
        state.set_visible_rows(2);
        assert_eq!(state.highlighted, Some(1));

        state.highlight_next();
        assert_eq!(state.highlighted, Some(0));
        state.highlight_prev();
        assert_eq!(state.highlighted, Some(1));

        state.set_visible_rows(0);
        assert_eq!(state.highlighted, None);
        state.highlight_next();
        assert_eq!(state.highlighted, None);
    }

    #[test]
    fn test_highlight_wraps() {
        let mut state = SuggestionState {
            candidates: vec!["a".to_string(), "b".to_string()],
            ..SuggestionState::default()
        };
        state.highlight_prev();
        assert_eq!(state.highlighted, Some(1));
        state.highlight_next();
        assert_eq!(state.highlighted, Some(0));
        state.highlight_next();
        assert_eq!(state.highlighted, Some(1));
    }
}
