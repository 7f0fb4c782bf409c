use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SEP_RIGHT: &str = "\u{e0b0}";

pub struct Header<'a> {
    pub backend_label: &'a str,
    pub pending: bool,
    pub listening: bool,
    pub frame_count: u64,
    pub theme: &'a Theme,
    pub terminal_width: u16,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let logo_bg = self.theme.header_logo.bg.unwrap_or(Color::Reset);
        let item_bg = self.theme.header_item.bg.unwrap_or(Color::Reset);
        let base_bg = self.theme.header.bg.unwrap_or(Color::Reset);

        let mut spans = vec![
            Span::styled(" FAQCHAT ", self.theme.header_logo),
            Span::styled(SEP_RIGHT, Style::default().fg(logo_bg).bg(item_bg)),
            Span::styled(format!(" {} ", self.backend_label), self.theme.header_item),
        ];

        let busy = if self.pending {
            let frame = SPINNER[(self.frame_count as usize) % SPINNER.len()];
            Some(format!(" {frame} waiting for answer "))
        } else if self.listening {
            Some(" ● dictating ".to_string())
        } else {
            None
        };
        match busy {
            Some(text) => {
                let busy_bg = self.theme.header_busy.bg.unwrap_or(Color::Reset);
                spans.push(Span::styled(SEP_RIGHT, Style::default().fg(item_bg).bg(busy_bg)));
                spans.push(Span::styled(text, self.theme.header_busy));
                spans.push(Span::styled(SEP_RIGHT, Style::default().fg(busy_bg).bg(base_bg)));
            }
            None => {
                spans.push(Span::styled(SEP_RIGHT, Style::default().fg(item_bg).bg(base_bg)));
            }
        }
        spans.push(Span::styled(
            " ".repeat(self.terminal_width as usize),
            self.theme.header,
        ));

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
