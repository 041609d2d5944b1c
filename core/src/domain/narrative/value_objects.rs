use crate::domain::narrative::entities::ChatMessage;

pub const TEMPERATURE: f32 = 0.4;
pub const DEFAULT_MAX_TOKENS: u32 = 512;
pub const RECOMMENDATION_MAX_TOKENS: u32 = 800;
/// Candidates described to the model, and listed by the fallback.
pub const RECOMMENDATION_CANDIDATES: usize = 5;

pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Configured model identifiers. Every call site uses `primary`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSelection {
    pub primary: String,
    pub secondary: String,
}

impl ModelSelection {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }
}

/// Everything a call site contributes to one completion.
#[derive(Debug, Clone, PartialEq)]
pub struct NarrativePrompt {
    pub system: String,
    pub history: Vec<ChatMessage>,
    pub user_content: String,
    pub max_tokens: u32,
}

impl NarrativePrompt {
    pub fn into_messages(self) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(self.history.len() + 2);
        messages.push(ChatMessage::system(self.system));
        messages.extend(self.history);
        messages.push(ChatMessage::user(self.user_content));
        messages
    }
}
