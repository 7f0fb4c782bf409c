use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use std::ops::{Deref, DerefMut};
use tui_textarea::{CursorMove, TextArea};

/// Single-line draft editor.
#[derive(Default)]
pub struct AppTextArea<'a>(pub TextArea<'a>);

impl AppTextArea<'_> {
    #[must_use]
    pub fn text(&self) -> String {
        self.0.lines().join(" ")
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.lines().iter().all(|line| line.trim().is_empty())
    }

    /// Replaces the whole buffer, leaving the cursor at the end.
    pub fn replace(&mut self, text: &str) {
        let mut area = TextArea::new(vec![text.to_string()]);
        area.move_cursor(CursorMove::End);
        area.set_cursor_line_style(self.0.cursor_line_style());
        area.set_placeholder_text(self.0.placeholder_text().to_string());
        self.0 = area;
    }

    pub fn clear(&mut self) {
        self.replace("");
    }
}

impl Clone for AppTextArea<'_> {
    fn clone(&self) -> Self {
        let mut area = TextArea::new(self.0.lines().to_vec());
        let (row, col) = self.0.cursor();
        area.move_cursor(CursorMove::Jump(row as u16, col as u16));
        Self(area)
    }
}

impl std::fmt::Debug for AppTextArea<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppTextArea")
            .field("lines", &self.0.lines())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for AppTextArea<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

impl<'a> Deref for AppTextArea<'a> {
    type Target = TextArea<'a>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for AppTextArea<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Widget for &AppTextArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_moves_cursor_to_end() {
        let mut draft = AppTextArea::default();
        draft.replace("what are the fees");
        assert_eq!(draft.text(), "what are the fees");
        assert_eq!(draft.cursor(), (0, 17));
    }

    #[test]
    fn test_blank_detection() {
        let mut draft = AppTextArea::default();
        assert!(draft.is_blank());
        draft.replace("   ");
        assert!(draft.is_blank());
        draft.replace(" x ");
        assert!(!draft.is_blank());
    }
}
