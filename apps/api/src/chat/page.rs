//! The single chat page served at `/`.
//!
//! The page is a static shell; the inline script posts each message to
//! `/api/v1/chat` and swaps in the returned transcript and job cards.

use askama::Template;

use crate::chat::SUGGESTIONS;

pub const APP_TITLE: &str = "JobYaari Career Assistant 🤖";

const LLM_STATUS: &str = "🧠 Powered by Google Gemini AI";
const KEYWORD_STATUS: &str = "🔧 Basic Search Mode";

#[derive(Template)]
#[template(path = "chat.html")]
pub struct ChatPage<'a> {
    pub title: &'a str,
    pub status: &'a str,
    pub job_count: usize,
    pub suggestions: &'a [&'a str],
}

impl ChatPage<'static> {
    pub fn new(job_count: usize, llm_enabled: bool) -> Self {
        Self {
            title: APP_TITLE,
            status: if llm_enabled { LLM_STATUS } else { KEYWORD_STATUS },
            job_count,
            suggestions: &SUGGESTIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_shows_status_and_count() {
        let html = ChatPage::new(42, false).render().unwrap();
        assert!(html.contains(KEYWORD_STATUS));
        assert!(!html.contains(LLM_STATUS));
        assert!(html.contains("42 jobs available"));
        assert_eq!(html.matches("<h1").count(), 1);
        assert!(html.contains(APP_TITLE));

        assert!(ChatPage::new(1, true).render().unwrap().contains(LLM_STATUS));
    }

    #[test]
    fn test_page_lists_every_suggestion() {
        let html = ChatPage::new(0, false).render().unwrap();
        for suggestion in SUGGESTIONS {
            assert!(html.contains(&format!("data-query=\"{suggestion}\"")), "{suggestion}");
        }
    }

    #[test]
    fn test_page_starts_with_welcome_message() {
        let html = ChatPage::new(3, true).render().unwrap();
        assert!(html.contains("<div id=\"chat-display\"><div style='text-align: center;"));
        assert!(html.contains("💬 Hey there!"));
    }
}
