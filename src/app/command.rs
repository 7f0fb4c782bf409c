#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    LoadTranscript,
    Ask(String),
    ScheduleSuggestions(String),
    CancelSuggestions,
    LookupSuggestions { request: u64, query: String },
    StartDictation,
    StopDictation,
}
