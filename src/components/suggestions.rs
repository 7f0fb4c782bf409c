use crate::domain::matcher::MAX_SUGGESTIONS;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

/// Popup rectangle directly above `anchor`, clipped so it never rises past
/// `ceiling`. `None` when there is no room for a single row.
#[must_use]
pub fn popup_rect(anchor: Rect, ceiling: u16, count: usize) -> Option<Rect> {
    let rows = count.min(MAX_SUGGESTIONS) as u16;
    if rows == 0 {
        return None;
    }
    let room = anchor.y.saturating_sub(ceiling);
    let height = (rows + 2).min(room);
    if height < 3 {
        return None;
    }
    Some(Rect {
        x: anchor.x,
        y: anchor.y - height,
        width: anchor.width,
        height,
    })
}

/// Index of the candidate under a click, if the click lands on a row.
#[must_use]
pub fn row_at(popup: Rect, column: u16, row: u16, count: usize) -> Option<usize> {
    let inner = Block::default().borders(Borders::ALL).inner(popup);
    if column < inner.x
        || column >= inner.x + inner.width
        || row < inner.y
        || row >= inner.y + inner.height
    {
        return None;
    }
    let idx = (row - inner.y) as usize;
    (idx < count).then_some(idx)
}

pub struct SuggestionList<'a> {
    pub candidates: &'a [String],
    pub highlighted: Option<usize>,
    pub theme: &'a Theme,
}

impl Widget for SuggestionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("Suggestions", self.theme.suggestion_border),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("↑/↓", self.theme.footer_segment_key),
                Span::raw(" pick "),
                Span::styled("Esc", self.theme.footer_segment_key),
                Span::raw(" close "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.suggestion_border)
            .style(self.theme.suggestion_item);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .candidates
            .iter()
            .take(MAX_SUGGESTIONS)
            .enumerate()
            .map(|(i, label)| {
                let style = if self.highlighted == Some(i) {
                    self.theme.suggestion_selected
                } else {
                    self.theme.suggestion_item
                };
                let pad = (inner.width as usize).saturating_sub(Span::raw(label.as_str()).width() + 1);
                Line::from(Span::styled(format!(" {label}{}", " ".repeat(pad)), style))
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_sits_above_anchor() {
        let anchor = Rect::new(0, 20, 60, 3);
        let popup = popup_rect(anchor, 1, 3).unwrap();
        assert_eq!(popup, Rect::new(0, 15, 60, 5));
    }

    #[test]
    fn test_popup_is_clipped_by_ceiling() {
        let anchor = Rect::new(0, 5, 60, 3);
        let popup = popup_rect(anchor, 1, 6).unwrap();
        assert_eq!(popup.y, 1);
        assert_eq!(popup.height, 4);
        assert!(popup_rect(Rect::new(0, 2, 60, 3), 1, 6).is_none());
    }

    #[test]
    fn test_row_hit_testing() {
        let popup = Rect::new(0, 10, 30, 5);
        assert_eq!(row_at(popup, 4, 11, 3), Some(0));
        assert_eq!(row_at(popup, 4, 13, 3), Some(2));
        // border
        assert_eq!(row_at(popup, 4, 10, 3), None);
        assert_eq!(row_at(popup, 0, 11, 3), None);
    }
}
