use chrono::{DateTime, Local};
use serde::Serialize;

/// One exchange in the chat session. Never mutated after creation.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationEntry {
    pub user_text: String,
    pub bot_text: String,
    pub timestamp: DateTime<Local>,
    pub result_count: usize,
}

impl ConversationEntry {
    pub fn new(user_text: impl Into<String>, bot_text: impl Into<String>, result_count: usize) -> Self {
        Self {
            user_text: user_text.into(),
            bot_text: bot_text.into(),
            timestamp: Local::now(),
            result_count,
        }
    }

    /// Clock time shown under each chat bubble, e.g. `14:05`.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// Append-only transcript of the current session.
#[derive(Debug, Clone, Default)]
pub struct ConversationHistory {
    entries: Vec<ConversationEntry>,
}

impl ConversationHistory {
    pub fn push(&mut self, entry: ConversationEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ConversationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_appends_in_order() {
        let mut history = ConversationHistory::default();
        assert_eq!(history.len(), 0);
        history.push(ConversationEntry::new("hi", "hello!", 12));
        history.push(ConversationEntry::new("bye", "see you", 12));
        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].user_text, "hi");
        assert_eq!(history.entries()[1].bot_text, "see you");
    }

    #[test]
    fn test_time_label_is_hours_and_minutes() {
        let entry = ConversationEntry::new("hi", "hello", 0);
        let label = entry.time_label();
        assert_eq!(label.len(), 5);
        assert_eq!(&label[2..3], ":");
    }
}
