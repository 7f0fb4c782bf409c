use crate::app::{
    action::Action,
    state::{AppState, Focus},
    ui,
};
use crate::components::suggestions;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect, Size};

const WHEEL_STEP: u16 = 3;

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            map_key(key, app_state)
        }
        Event::Mouse(mouse) => {
            let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
            map_mouse(mouse, app_state, area)
        }
        Event::FocusGained => Some(Action::FocusComposer),
        Event::FocusLost => {
            if app_state.dictation.listening {
                // Losing the window counts as leaving the mic control
                Some(Action::StopDictation)
            } else {
                Some(Action::BlurComposer)
            }
        }
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        Event::Paste(_) => None,
    }
}

fn map_key(key: KeyEvent, app_state: &AppState<'_>) -> Option<Action> {
    if app_state.focus == Focus::Transcript {
        return app_state.keymap.get_action(key, Focus::Transcript);
    }

    let plain = key.modifiers.difference(KeyModifiers::SHIFT).is_empty();
    if plain {
        let visible = app_state.suggestions_visible();
        match key.code {
            KeyCode::Enter => {
                return match app_state.suggestions.highlighted {
                    Some(idx) if visible => Some(Action::AcceptSuggestion(idx)),
                    _ => Some(Action::Submit),
                };
            }
            KeyCode::Esc => {
                return Some(if visible {
                    Action::DismissSuggestions
                } else {
                    Action::BlurComposer
                });
            }
            KeyCode::Down if visible => return Some(Action::HighlightNextSuggestion),
            KeyCode::Up if visible => return Some(Action::HighlightPrevSuggestion),
            KeyCode::Down => return Some(Action::ScrollTranscriptDown(1)),
            KeyCode::Up => return Some(Action::ScrollTranscriptUp(1)),
            _ => {}
        }
    }

    if let Some(action) = app_state.keymap.get_action(key, Focus::Composer) {
        return Some(action);
    }
    Some(Action::DraftInput(key))
}

fn hit(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}

fn map_mouse(mouse: MouseEvent, app_state: &AppState<'_>, area: Rect) -> Option<Action> {
    let layout = ui::get_layout(area, app_state);
    let (column, row) = (mouse.column, mouse.row);
    let listening = app_state.dictation.listening;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(popup) = layout.suggestions {
                if hit(popup, column, row) {
                    return suggestions::row_at(
                        popup,
                        column,
                        row,
                        app_state.suggestions.candidates.len(),
                    )
                    .map(Action::AcceptSuggestion);
                }
            }
            if hit(layout.mic, column, row) {
                return Some(Action::StartDictation);
            }
            if hit(layout.composer, column, row) {
                return Some(Action::FocusComposer);
            }
            if let Some(idx) = layout.chips.iter().position(|r| hit(*r, column, row)) {
                return Some(Action::QuickReply(idx));
            }
            Some(Action::PointerOutside)
        }
        MouseEventKind::Up(MouseButton::Left) if listening => Some(Action::StopDictation),
        MouseEventKind::Drag(_) | MouseEventKind::Moved
            if listening && !hit(layout.mic, column, row) =>
        {
            Some(Action::StopDictation)
        }
        MouseEventKind::ScrollUp => match layout.suggestions {
            Some(popup) if hit(popup, column, row) => Some(Action::HighlightPrevSuggestion),
            _ => Some(Action::ScrollTranscriptUp(WHEEL_STEP)),
        },
        MouseEventKind::ScrollDown => match layout.suggestions {
            Some(popup) if hit(popup, column, row) => Some(Action::HighlightNextSuggestion),
            _ => Some(Action::ScrollTranscriptDown(WHEEL_STEP)),
        },
        _ => None,
    }
}
