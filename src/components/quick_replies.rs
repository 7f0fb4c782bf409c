use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Follow-up questions offered as one-key replies.
pub const MAX_QUICK_REPLIES: usize = 9;

fn chip_label(idx: usize, question: &str) -> (String, String) {
    (format!(" {} ", idx + 1), format!(" {question} "))
}

/// Click targets for each chip that fits on the row, in order.
#[must_use]
pub fn chip_rects(area: Rect, questions: &[String]) -> Vec<Rect> {
    let mut rects = Vec::new();
    let mut x = area.x;
    let right = area.x.saturating_add(area.width);
    for (i, question) in questions.iter().take(MAX_QUICK_REPLIES).enumerate() {
        let (key, label) = chip_label(i, question);
        let width = (Span::raw(key).width() + Span::raw(label).width()) as u16;
        if area.height == 0 || x.saturating_add(width) > right {
            break;
        }
        rects.push(Rect::new(x, area.y, width, 1));
        x = x.saturating_add(width + 1);
    }
    rects
}

pub struct QuickReplies<'a> {
    pub questions: &'a [String],
    pub theme: &'a Theme,
}

impl Widget for QuickReplies<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let fitting = chip_rects(area, self.questions).len();
        let mut spans = Vec::new();
        for (i, question) in self.questions.iter().take(fitting).enumerate() {
            let (key, label) = chip_label(i, question);
            spans.push(Span::styled(key, self.theme.quick_reply_key));
            spans.push(Span::styled(label, self.theme.quick_reply));
            spans.push(Span::raw(" "));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chips_stop_at_row_end() {
        let questions = vec![
            "Fees?".to_string(),
            "Refund policy?".to_string(),
            "Census date?".to_string(),
        ];
        // " 1 " + " Fees? " is 10 wide, the second chip needs 19 after a gap
        let rects = chip_rects(Rect::new(0, 0, 29, 1), &questions);
        assert_eq!(rects, vec![Rect::new(0, 0, 10, 1)]);

        let rects = chip_rects(Rect::new(0, 0, 80, 1), &questions);
        assert_eq!(rects.len(), 3);
        assert_eq!(rects[1].x, 11);
    }
}
