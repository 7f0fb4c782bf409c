use crate::app::state::{AppState, Focus};
use crate::components::{
    composer::{Composer, MicButton, MIC_WIDTH},
    footer::Footer,
    header::Header,
    quick_replies::{chip_rects, QuickReplies},
    suggestions::{popup_rect, SuggestionList},
    transcript::{transcript_lines, Transcript},
};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub transcript: Rect,
    pub quick_replies: Rect,
    pub chips: Vec<Rect>,
    pub composer: Rect,
    pub mic: Rect,
    pub footer: Rect,
    pub suggestions: Option<Rect>,
}

pub fn get_layout(area: Rect, app_state: &AppState) -> AppLayout {
    let quick_reply_height = u16::from(!app_state.session.quick_replies.is_empty());
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                  // Header
            Constraint::Min(0),                     // Transcript
            Constraint::Length(quick_reply_height), // Quick replies
            Constraint::Length(3),                  // Composer
            Constraint::Length(1),                  // Footer
        ])
        .split(area);

    let input_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(MIC_WIDTH)])
        .split(main[3]);

    let suggestions = if app_state.suggestions_visible() {
        popup_rect(
            input_row[0],
            main[1].y,
            app_state.suggestions.candidates.len(),
        )
    } else {
        None
    };

    AppLayout {
        header: main[0],
        transcript: main[1],
        quick_replies: main[2],
        chips: chip_rects(main[2], &app_state.session.quick_replies),
        composer: input_row[0],
        mic: input_row[1],
        footer: main[4],
        suggestions,
    }
}

fn has_area(rect: Rect) -> bool {
    rect.width > 0 && rect.height > 0
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let layout = get_layout(f.area(), app_state);
    if app_state.suggestions_visible() {
        let rows = layout
            .suggestions
            .map_or(0, |popup| usize::from(popup.height.saturating_sub(2)));
        app_state.suggestions.set_visible_rows(rows);
    }
    let theme = &app_state.theme;

    // --- Header ---
    if has_area(layout.header) {
        let header = Header {
            backend_label: &app_state.backend_label,
            pending: app_state.session.pending,
            listening: app_state.dictation.listening,
            frame_count: app_state.frame_count,
            theme,
            terminal_width: f.area().width,
        };
        f.render_widget(header, layout.header);
    }

    // --- Transcript ---
    if has_area(layout.transcript) {
        let border = if app_state.focus == Focus::Transcript {
            theme.border_focus
        } else {
            theme.border
        };
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("CONVERSATION", theme.header_item),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);
        let inner = block.inner(layout.transcript);
        let lines = transcript_lines(&app_state.session.transcript, inner.width, theme);
        let overflow = lines.len().saturating_sub(inner.height as usize);
        app_state
            .transcript_view
            .set_max_offset(u16::try_from(overflow).unwrap_or(u16::MAX));

        f.render_widget(block, layout.transcript);
        f.render_widget(
            Transcript {
                lines,
                offset: app_state.transcript_view.offset,
                theme,
            },
            inner,
        );
    }

    // --- Quick replies ---
    if has_area(layout.quick_replies) {
        f.render_widget(
            QuickReplies {
                questions: &app_state.session.quick_replies,
                theme,
            },
            layout.quick_replies,
        );
    }

    // --- Composer + mic ---
    if has_area(layout.composer) {
        f.render_widget(
            Composer {
                draft: &app_state.session.draft,
                focused: app_state.focus == Focus::Composer,
                pending: app_state.session.pending,
                listening: app_state.dictation.listening,
                theme,
            },
            layout.composer,
        );
    }
    if has_area(layout.mic) {
        f.render_widget(
            MicButton {
                listening: app_state.dictation.listening,
                available: app_state.dictation_available,
                frame_count: app_state.frame_count,
                theme,
            },
            layout.mic,
        );
    }

    // --- Footer ---
    if has_area(layout.footer) {
        let footer = Footer {
            state: app_state,
            theme,
        };
        f.render_widget(footer, layout.footer);
    }

    // --- Suggestion popup (drawn last, overlays the transcript) ---
    if let Some(popup) = layout.suggestions {
        f.render_widget(
            SuggestionList {
                candidates: &app_state.suggestions.candidates,
                highlighted: app_state.suggestions.highlighted,
                theme,
            },
            popup,
        );
    }
}
