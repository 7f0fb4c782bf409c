mod groups;
mod types;

use crate::app::state::{AppState, NoticeSeverity};
use crate::theme::Theme;
pub use types::{FooterGroup, FooterItem};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        let mut spans = Vec::new();
        if let Some(notice) = &state.notice {
            let style = match notice.severity {
                NoticeSeverity::Info => theme.status_info,
                NoticeSeverity::Warning => theme.status_warn,
                NoticeSeverity::Error => theme.status_error,
            };
            spans.push(Span::styled(format!("  {}  ", notice.message), style));
            spans.push(Span::raw(" "));
        }

        let available_width = area.width.saturating_sub(4) as usize;
        let mut current_width = spans.iter().map(Span::width).sum::<usize>();

        for group in groups::get_groups(state) {
            if area.width > 100 {
                let label = format!("{}: ", group.name);
                current_width += label.len();
                spans.push(Span::styled(label, theme.dimmed));
            }
            for item in group.items {
                let key_str = format!(" {} ", item.key);
                let desc_str = format!(" {} ", item.desc);

                let item_width = Span::raw(key_str.as_str()).width() + desc_str.len();
                if current_width + item_width + 1 > available_width {
                    break;
                }

                let (key_style, val_style) = if item.highlighted {
                    (theme.status_error, theme.status_error)
                } else {
                    (theme.footer_segment_key, theme.footer_segment_val)
                };

                spans.push(Span::styled(key_str, key_style));
                spans.push(Span::styled(desc_str, val_style));
                spans.push(Span::raw(" "));
                current_width += item_width + 1;
            }
            spans.push(Span::raw(" "));
            current_width += 1;
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
