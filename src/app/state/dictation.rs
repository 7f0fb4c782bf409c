/// While `listening`, the recognizer is the only writer of the draft.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DictationState {
    pub listening: bool,
    pub transcript: String,
}

impl DictationState {
    /// Returns `false` if already listening.
    pub fn begin(&mut self) -> bool {
        if self.listening {
            return false;
        }
        self.listening = true;
        self.transcript.clear();
        true
    }

    /// Returns whether a session was actually running.
    pub fn end(&mut self) -> bool {
        std::mem::replace(&mut self.listening, false)
    }

    /// Records a transcript update. Returns the text the draft should mirror,
    /// or `None` if the update arrived while not listening.
    pub fn update(&mut self, transcript: String) -> Option<&str> {
        if !self.listening {
            return None;
        }
        self.transcript = transcript;
        Some(&self.transcript)
    }
}
