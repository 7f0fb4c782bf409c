use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[serde(alias = "human")]
    User,
    #[serde(alias = "ai", alias = "bot")]
    Assistant,
}

impl Role {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "you",
            Role::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(alias = "type")]
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Reply to a successful submit. `items` is the full server-side transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub items: Vec<Message>,
    #[serde(default)]
    pub questions: Option<Vec<String>>,
}

/// One row of the keyword catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRecord {
    pub label: String,
    pub tag: String,
    /// Lowercased text matched against user input. `None` when the row has no
    /// match column.
    pub match_text: Option<String>,
}

impl KeywordRecord {
    pub fn new(label: impl Into<String>, tag: impl Into<String>, match_text: &str) -> Self {
        Self {
            label: label.into(),
            tag: tag.into(),
            match_text: Some(match_text.to_lowercase()),
        }
    }
}

pub type Catalog = Vec<KeywordRecord>;
