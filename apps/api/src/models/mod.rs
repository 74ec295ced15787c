pub mod conversation;
pub mod job;
