/// Decides whether the suggestion list is drawn. Observes candidate data but
/// never mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityState {
    pub focused: bool,
    pub has_candidates: bool,
    pub dismissed_explicitly: bool,
}

impl VisibilityState {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.focused && self.has_candidates && !self.dismissed_explicitly
    }

    pub fn focus_in(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn dismiss(&mut self) {
        self.dismissed_explicitly = true;
    }

    pub fn keystroke(&mut self) {
        self.dismissed_explicitly = false;
    }

    pub fn observe_candidates(&mut self, count: usize) {
        self.has_candidates = count > 0;
    }
}
