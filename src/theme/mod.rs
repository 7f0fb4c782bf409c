use ratatui::style::{Modifier, Style};

pub mod nord;
pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header_logo: Style,
    pub header_item: Style,
    pub header_busy: Style,
    pub header: Style,

    pub speaker_user: Style,
    pub speaker_assistant: Style,
    pub message: Style,
    pub dimmed: Style,

    pub quick_reply_key: Style,
    pub quick_reply: Style,

    pub suggestion_border: Style,
    pub suggestion_item: Style,
    pub suggestion_selected: Style,

    pub composer_locked: Style,
    pub mic_idle: Style,
    pub mic_listening: Style,
    pub mic_disabled: Style,

    pub status_info: Style,
    pub status_warn: Style,
    pub status_error: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer: Style,
}

impl Theme {
    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.blue),

            header_logo: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_item: Style::default().bg(p.surface0).fg(p.text),
            header_busy: Style::default()
                .bg(p.yellow)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header: Style::default().bg(p.base).fg(p.text),

            speaker_user: Style::default().fg(p.mauve).add_modifier(Modifier::BOLD),
            speaker_assistant: Style::default().fg(p.teal).add_modifier(Modifier::BOLD),
            message: Style::default().fg(p.text),
            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),

            quick_reply_key: Style::default()
                .bg(p.surface0)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            quick_reply: Style::default().fg(p.subtext1),

            suggestion_border: Style::default().fg(p.blue).bg(dim_color(p.base, 0.8)),
            suggestion_item: Style::default().fg(p.text).bg(dim_color(p.base, 0.8)),
            suggestion_selected: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            composer_locked: Style::default().fg(p.overlay1).add_modifier(Modifier::ITALIC),
            mic_idle: Style::default().fg(p.text).bg(p.surface1),
            mic_listening: Style::default()
                .bg(p.red)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            mic_disabled: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),

            status_info: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_warn: Style::default()
                .bg(p.yellow)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .bg(p.red)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            footer_segment_key: Style::default()
                .bg(p.surface0)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.crust).fg(p.subtext0),
            footer: Style::default().bg(p.crust).fg(p.subtext0),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette(&nord::NORD)
    }
}
