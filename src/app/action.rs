use crate::app::command::Command;
use crate::domain::error::ChatError;
use crate::domain::models::{AskResponse, Message};

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Composer ---
    DraftInput(crossterm::event::KeyEvent), // Keystroke into the draft editor
    Submit,                                 // Send the current draft
    QuickReply(usize),                      // Send a suggested follow-up question
    FocusComposer,                          // Focus-in on the draft editor
    BlurComposer,                           // Focus leaves the draft editor

    // --- Suggestions ---
    SuggestionQueryDue(String), // Debounce window elapsed for this query
    HighlightNextSuggestion,
    HighlightPrevSuggestion,
    AcceptSuggestion(usize), // Click or Enter on a suggestion row
    DismissSuggestions,      // Esc while the list is open
    PointerOutside,          // Pointer press outside composer + list

    // --- Transcript view ---
    ScrollTranscriptUp(u16),
    ScrollTranscriptDown(u16),
    ScrollToBottom,

    // --- Dictation ---
    StartDictation,            // Press on the mic control
    StopDictation,             // Release / leave of the mic control
    ToggleDictation,           // Keyboard shortcut
    DictationTranscript(String), // Running transcript from the recognizer
    DictationFailed(String),

    // --- Async Results ---
    TranscriptLoaded(Result<Vec<Message>, ChatError>),
    AskCompleted(Result<AskResponse, ChatError>),
    SuggestionsLoaded {
        request: u64,
        result: Result<Vec<String>, ChatError>,
    },
}
