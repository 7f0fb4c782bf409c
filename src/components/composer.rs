use crate::app::state::AppTextArea;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

pub const MIC_WIDTH: u16 = 9;

pub struct Composer<'a, 'b> {
    pub draft: &'a AppTextArea<'b>,
    pub focused: bool,
    pub pending: bool,
    pub listening: bool,
    pub theme: &'a Theme,
}

impl Widget for Composer<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            self.theme.border_focus
        } else {
            self.theme.border
        };
        let title = if self.pending {
            Span::styled(" sending… ", self.theme.composer_locked)
        } else if self.listening {
            Span::styled(" listening… ", self.theme.composer_locked)
        } else {
            Span::raw(" message ")
        };
        let block = Block::default()
            .title(Line::from(title))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);
        let inner = block.inner(area);
        block.render(area, buf);
        self.draft.render(inner, buf);
    }
}

pub struct MicButton<'a> {
    pub listening: bool,
    pub available: bool,
    pub frame_count: u64,
    pub theme: &'a Theme,
}

impl Widget for MicButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (label, style) = if !self.available {
            ("mic", self.theme.mic_disabled)
        } else if self.listening {
            // Pulse while the recognizer is live
            if self.frame_count % 2 == 0 {
                ("● rec", self.theme.mic_listening)
            } else {
                ("○ rec", self.theme.mic_listening)
            }
        } else {
            ("mic", self.theme.mic_idle)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.listening {
                self.theme.mic_listening
            } else {
                self.theme.border
            });
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(Line::from(Span::styled(label, style)))
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
