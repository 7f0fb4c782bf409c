use crate::domain::models::{Message, Role};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const INDENT: &str = "  ";

/// Word-wraps `text` to `width` columns. Words longer than a full line are
/// split hard.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;
        for word in paragraph.split_whitespace() {
            let mut word = word.to_string();
            let mut word_width = Span::raw(word.as_str()).width();
            if current_width > 0 && current_width + 1 + word_width > width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            // Line is empty here: either fresh or just flushed above.
            while word_width > width {
                let split_at = word
                    .char_indices()
                    .nth(width)
                    .map_or(word.len(), |(i, _)| i);
                let rest = word.split_off(split_at);
                lines.push(word);
                word = rest;
                word_width = Span::raw(word.as_str()).width();
            }
            if current_width > 0 {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(&word);
            current_width += word_width;
        }
        lines.push(current);
    }
    lines
}

/// Lays the conversation out as display lines for the given inner width.
#[must_use]
pub fn transcript_lines(messages: &[Message], width: u16, theme: &Theme) -> Vec<Line<'static>> {
    if messages.is_empty() {
        return vec![Line::from(Span::styled(
            "No messages yet. Ask something below.",
            theme.dimmed,
        ))];
    }

    let body_width = (width as usize).saturating_sub(INDENT.len());
    let mut lines = Vec::new();
    for (i, message) in messages.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        let speaker_style = match message.role {
            Role::User => theme.speaker_user,
            Role::Assistant => theme.speaker_assistant,
        };
        lines.push(Line::from(Span::styled(message.role.label(), speaker_style)));
        for row in wrap_text(&message.content, body_width) {
            lines.push(Line::from(vec![
                Span::raw(INDENT),
                Span::styled(row, theme.message),
            ]));
        }
    }
    lines
}

pub struct Transcript<'a> {
    pub lines: Vec<Line<'static>>,
    pub offset: u16,
    pub theme: &'a Theme,
}

impl Widget for Transcript<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines)
            .style(self.theme.message)
            .scroll((self.offset, 0))
            .render(area, buf);
    }
}
