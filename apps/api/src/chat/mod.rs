// Chat surface: page shell, HTML rendering and the HTTP handlers behind them.

pub mod handlers;
pub mod page;
pub mod render;

/// Canned example queries. Picking one is the same as typing it.
pub const SUGGESTIONS: [&str; 10] = [
    "Show all jobs",
    "Engineering jobs",
    "Science jobs",
    "Commerce jobs",
    "Education jobs",
    "Jobs in Delhi",
    "Fresher jobs",
    "Science jobs with 1 year experience",
    "Latest engineering notifications",
    "Jobs requiring B.Tech qualification",
];
