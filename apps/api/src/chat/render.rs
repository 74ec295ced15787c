//! HTML fragments for the chat page: job cards and the conversation transcript.
//!
//! Both are askama templates; every interpolated field is auto-escaped.

use askama::Template;

use crate::models::conversation::ConversationEntry;
use crate::models::job::{JobRecord, Subset};

/// One card per job, or the "No jobs found" placeholder.
#[derive(Template)]
#[template(path = "job_cards.html")]
pub struct JobCards<'a> {
    pub jobs: Vec<&'a JobRecord>,
}

/// The whole conversation as user/bot bubble pairs, or the welcome message.
#[derive(Template)]
#[template(path = "transcript.html")]
pub struct Transcript<'a> {
    pub entries: &'a [ConversationEntry],
}

pub fn render_job_cards(subset: &Subset<'_>) -> askama::Result<String> {
    JobCards {
        jobs: subset.iter().collect(),
    }
    .render()
}

pub fn render_transcript(entries: &[ConversationEntry]) -> askama::Result<String> {
    Transcript { entries }.render()
}
