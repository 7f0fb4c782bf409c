use super::action::Action;
use super::state::Focus;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Static key bindings per focus target. Keys whose meaning depends on the
/// suggestion list (Enter, Esc, Up, Down in the composer) are resolved in
/// `input::map_event_to_action` before this map is consulted.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    pub composer: HashMap<KeyEvent, Action>,
    pub transcript: HashMap<KeyEvent, Action>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut composer = HashMap::new();
        let mut transcript = HashMap::new();

        // --- Composer ---
        composer.insert(ctrl('c'), Action::Quit);
        composer.insert(ctrl(' '), Action::ToggleDictation);
        composer.insert(key(KeyCode::F(2)), Action::ToggleDictation);
        composer.insert(key(KeyCode::Tab), Action::BlurComposer);
        composer.insert(key(KeyCode::PageUp), Action::ScrollTranscriptUp(10));
        composer.insert(key(KeyCode::PageDown), Action::ScrollTranscriptDown(10));
        composer.insert(ctrl_code(KeyCode::End), Action::ScrollToBottom);
        for (i, c) in ('1'..='9').enumerate() {
            composer.insert(alt(c), Action::QuickReply(i));
        }

        // --- Transcript ---
        transcript.insert(plain('q'), Action::Quit);
        transcript.insert(ctrl('c'), Action::Quit);
        transcript.insert(key(KeyCode::Tab), Action::FocusComposer);
        transcript.insert(plain('i'), Action::FocusComposer);
        transcript.insert(key(KeyCode::Enter), Action::FocusComposer);
        transcript.insert(plain('j'), Action::ScrollTranscriptDown(1));
        transcript.insert(key(KeyCode::Down), Action::ScrollTranscriptDown(1));
        transcript.insert(plain('k'), Action::ScrollTranscriptUp(1));
        transcript.insert(key(KeyCode::Up), Action::ScrollTranscriptUp(1));
        transcript.insert(key(KeyCode::PageDown), Action::ScrollTranscriptDown(10));
        transcript.insert(key(KeyCode::PageUp), Action::ScrollTranscriptUp(10));
        transcript.insert(plain('G'), Action::ScrollToBottom);
        transcript.insert(key(KeyCode::End), Action::ScrollToBottom);
        transcript.insert(plain('v'), Action::ToggleDictation);
        transcript.insert(key(KeyCode::F(2)), Action::ToggleDictation);
        for (i, c) in ('1'..='9').enumerate() {
            transcript.insert(plain(c), Action::QuickReply(i));
        }

        Self {
            composer,
            transcript,
        }
    }
}

impl KeyMap {
    pub fn get_action(&self, event: KeyEvent, focus: Focus) -> Option<Action> {
        let map = match focus {
            Focus::Composer => &self.composer,
            Focus::Transcript => &self.transcript,
        };
        if let Some(action) = map.get(&event) {
            return Some(action.clone());
        }
        // Terminals report uppercase letters with SHIFT set
        match event.code {
            KeyCode::Char(_) if event.modifiers == KeyModifiers::SHIFT => map
                .get(&KeyEvent::new(event.code, KeyModifiers::empty()))
                .cloned(),
            _ => None,
        }
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn plain(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

fn ctrl(c: char) -> KeyEvent {
    ctrl_code(KeyCode::Char(c))
}

fn ctrl_code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::CONTROL)
}

fn alt(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT)
}
