use crate::app::{
    action::{Action, UpdateResult},
    state::AppState,
};
use chrono::Local;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            if state
                .notice
                .as_ref()
                .is_some_and(|n| n.is_expired(Local::now()))
            {
                state.notice = None;
            }
            UpdateResult::Handled(None)
        }
        Action::Quit => {
            state.should_quit = true;
            UpdateResult::Handled(None)
        }
        Action::Resize(_, _) => UpdateResult::Handled(None),
        Action::ScrollTranscriptUp(n) => {
            state.transcript_view.scroll_up(*n);
            UpdateResult::Handled(None)
        }
        Action::ScrollTranscriptDown(n) => {
            state.transcript_view.scroll_down(*n);
            UpdateResult::Handled(None)
        }
        Action::ScrollToBottom => {
            state.transcript_view.scroll_to_bottom();
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
