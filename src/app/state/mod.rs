use crate::app::config::Config;
use crate::app::keymap::KeyMap;
use crate::theme::Theme;
use std::sync::Arc;

pub mod dictation;
pub mod input;
pub mod notice;
pub mod session;
pub mod suggestions;
pub mod visibility;

// Re-exports
pub use dictation::DictationState;
pub use input::AppTextArea;
pub use notice::{Notice, NoticeSeverity};
pub use session::{SessionState, SubmitOutcome};
pub use suggestions::{SuggestionPhase, SuggestionState};
pub use visibility::VisibilityState;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Focus {
    Composer,   // Typing into the draft
    Transcript, // Reading / scrolling the conversation
}

/// Scroll position of the transcript pane. `max_offset` is written back by
/// the renderer once the wrapped height is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscriptView {
    pub offset: u16,
    pub max_offset: u16,
    pub follow: bool,
}

impl Default for TranscriptView {
    fn default() -> Self {
        Self {
            offset: 0,
            max_offset: 0,
            follow: true,
        }
    }
}

impl TranscriptView {
    /// Brings the last transcript line into view. Idempotent.
    pub fn scroll_to_bottom(&mut self) {
        self.follow = true;
        self.offset = self.max_offset;
    }

    pub fn scroll_up(&mut self, amount: u16) {
        if self.follow {
            self.offset = self.max_offset;
        }
        self.follow = false;
        self.offset = self.offset.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: u16) {
        self.offset = self.offset.saturating_add(amount).min(self.max_offset);
        if self.offset == self.max_offset {
            self.follow = true;
        }
    }

    pub fn set_max_offset(&mut self, max_offset: u16) {
        self.max_offset = max_offset;
        if self.follow || self.offset > max_offset {
            self.offset = max_offset;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState<'a> {
    // --- Connectivity & Status ---
    pub should_quit: bool,
    pub focus: Focus,
    pub notice: Option<Notice>,
    pub backend_label: String,

    // --- Chat Session (the "Source of Truth" is the backend) ---
    pub session: SessionState<'a>,
    pub transcript_view: TranscriptView,

    // --- Suggestions ---
    pub suggestions: SuggestionState,
    pub visibility: VisibilityState,
    pub submit_on_accept: bool,

    // --- Dictation ---
    pub dictation: DictationState,
    pub dictation_available: bool,

    // --- Animation ---
    pub frame_count: u64,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub theme: Theme,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            backend_label: config.backend.base_url.clone(),
            submit_on_accept: config.suggestions.submit_on_accept,
            dictation_available: config.dictation.command.is_some(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn suggestions_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    pub fn set_notice(&mut self, severity: NoticeSeverity, message: impl Into<String>) {
        self.notice = Some(Notice::new(severity, message));
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        let mut session = SessionState::default();
        session
            .draft
            .set_placeholder_text("Ask a question (Enter to send, Ctrl+Space to dictate)");
        Self {
            should_quit: false,
            focus: Focus::Composer,
            notice: None,
            backend_label: String::new(),
            session,
            transcript_view: TranscriptView::default(),
            suggestions: SuggestionState::default(),
            visibility: VisibilityState {
                focused: true,
                ..VisibilityState::default()
            },
            submit_on_accept: false,
            dictation: DictationState::default(),
            dictation_available: false,
            frame_count: 0,
            keymap: Arc::new(KeyMap::default()),
            theme: Theme::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_up_leaves_follow_mode() {
        let mut view = TranscriptView::default();
        view.set_max_offset(20);
        assert_eq!(view.offset, 20);

        view.scroll_up(5);
        assert!(!view.follow);
        assert_eq!(view.offset, 15);

        view.set_max_offset(30);
        assert_eq!(view.offset, 15);

        view.scroll_down(100);
        assert!(view.follow);
        assert_eq!(view.offset, 30);
    }

    #[test]
    fn test_scroll_to_bottom_is_idempotent() {
        let mut view = TranscriptView::default();
        view.set_max_offset(12);
        view.scroll_up(4);
        view.scroll_to_bottom();
        let once = view;
        view.scroll_to_bottom();
        assert_eq!(view, once);
        assert_eq!(view.offset, 12);
    }
}
