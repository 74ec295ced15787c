//! Response Composer: picks the conversational reply for a query and its result count.
//!
//! Intent keywords are checked in priority order; the first hit decides the
//! template. Queries with no recognized intent fall through to count buckets:
//! 0, 1, 2–5 and more than 5.

use crate::search::filters::{QueryText, COUNT_KEYWORDS};

const GREETING_KEYWORDS: &[&str] = &["hello", "hi", "hey", "namaste"];
const FAQ_KEYWORDS: &[&str] = &["faq", "frequently asked", "help"];
const ENGINEERING_KEYWORDS: &[&str] = &["engineering", "engineer"];
const SCIENCE_KEYWORDS: &[&str] = &["science", "scientist"];
const PROSPECT_KEYWORDS: &[&str] = &["get job", "will i get", "find job"];
const THANKS_KEYWORDS: &[&str] = &["thank", "thanks"];
const FAREWELL_KEYWORDS: &[&str] = &["bye", "goodbye", "see you"];

/// Upper bound of the "few matches" bucket.
const FEW_MATCHES_MAX: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyTemplate {
    Greeting,
    Faq,
    EngineeringFound,
    EngineeringNone,
    ScienceFound,
    ScienceNone,
    JobProspects,
    CountQuery,
    Thanks,
    Farewell,
    ExperienceFollowUp,
    QualificationFollowUp,
    NoMatches,
    SingleMatch,
    FewMatches,
    ManyMatches,
}

impl ReplyTemplate {
    pub fn select(query: &QueryText, count: usize) -> Self {
        if query.contains_any(GREETING_KEYWORDS) {
            ReplyTemplate::Greeting
        } else if query.contains_any(FAQ_KEYWORDS) {
            ReplyTemplate::Faq
        } else if query.contains_any(ENGINEERING_KEYWORDS) {
            if count > 0 {
                ReplyTemplate::EngineeringFound
            } else {
                ReplyTemplate::EngineeringNone
            }
        } else if query.contains_any(SCIENCE_KEYWORDS) {
            if count > 0 {
                ReplyTemplate::ScienceFound
            } else {
                ReplyTemplate::ScienceNone
            }
        } else if query.contains_any(PROSPECT_KEYWORDS) {
            ReplyTemplate::JobProspects
        } else if query.contains_any(COUNT_KEYWORDS) {
            ReplyTemplate::CountQuery
        } else if query.contains_any(THANKS_KEYWORDS) {
            ReplyTemplate::Thanks
        } else if query.contains_any(FAREWELL_KEYWORDS) {
            ReplyTemplate::Farewell
        } else if query.contains("experience") && count > 0 {
            ReplyTemplate::ExperienceFollowUp
        } else if query.contains("qualification") && count > 0 {
            ReplyTemplate::QualificationFollowUp
        } else {
            Self::bucket(count)
        }
    }

    /// Default template by result count alone.
    pub fn bucket(count: usize) -> Self {
        match count {
            0 => ReplyTemplate::NoMatches,
            1 => ReplyTemplate::SingleMatch,
            2..=FEW_MATCHES_MAX => ReplyTemplate::FewMatches,
            _ => ReplyTemplate::ManyMatches,
        }
    }

    pub fn render(self, count: usize) -> String {
        match self {
            ReplyTemplate::Greeting => format!(
                "👋 Hey there! Welcome to JobYaari! I found {count} awesome jobs waiting for you! What department are you exploring today? 😄"
            ),
            ReplyTemplate::Faq => "📖 Our FAQ section is at www.jobyaari.com/faq - but honestly, I'm way more fun to talk to! 😉 What can I help you find? Engineering gigs? Science opportunities? Tell me! 🎯".to_string(),
            ReplyTemplate::EngineeringFound => format!(
                "🔧 Engineering whiz, huh? Fantastic! I found {count} engineering positions that might make your resume do a happy dance! 💃 What specific field in engineering interests you?"
            ),
            ReplyTemplate::EngineeringNone => "🔧 Engineering is awesome! While I don't have specific engineering roles right now, check back soon - new opportunities pop up faster than bugs in production code! 🐛😄".to_string(),
            ReplyTemplate::ScienceFound => format!(
                "🔬 Science enthusiast! Excellent! I found {count} science positions that are more exciting than a chemical reaction! 🧪 What specific area of science interests you?"
            ),
            ReplyTemplate::ScienceNone => "🔬 Science is amazing! While I don't have specific science roles right now, new discoveries (and jobs!) happen every day! 🔍 Check back soon!".to_string(),
            ReplyTemplate::JobProspects => format!(
                "🎯 Will you get a job? With that awesome attitude - ABSOLUTELY! 🚀 I found {count} opportunities for you. The right job is like WiFi - sometimes you just need to move around a bit to find the best connection! 📶 Keep applying! "
            ),
            ReplyTemplate::CountQuery => format!(
                "📊 Woah! We've got {count} amazing opportunities in our database! That's like a buffet of career options 🍽️! What flavor are you craving today? 😄"
            ),
            ReplyTemplate::Thanks => "🤗 You're welcome! Remember, I'm here 24/7 to help you find your dream job! Now go apply to those positions before someone else snacks on your opportunity! 🍩🚀".to_string(),
            ReplyTemplate::Farewell => "👋 Bye bye! Don't be a stranger! Come back anytime you need job hunting support. Remember: Your next job is probably refreshing its browser waiting for YOU! 💻😄".to_string(),
            ReplyTemplate::ExperienceFollowUp => format!(
                "⏰ Got it! Looking for specific experience levels! I found {count} jobs matching your experience criteria! 🎯 Want to filter by location or qualification too?"
            ),
            ReplyTemplate::QualificationFollowUp => format!(
                "🎓 Education matters! I found {count} jobs with qualifications that might match your background! 📚 Should we look at specific categories?"
            ),
            ReplyTemplate::NoMatches => "🤔 Hmm, I couldn't find exact matches for that. But don't worry! Try asking about 'Engineering jobs', 'Jobs in Delhi', 'Fresher opportunities' or 'Science jobs with 1 year experience'! I'm pretty good at those! 😊".to_string(),
            ReplyTemplate::SingleMatch => "🎯 Found one perfect opportunity for you! This might be 'The One'! 💖 What other departments are you curious about?".to_string(),
            ReplyTemplate::FewMatches => format!(
                "✨ Found {count} awesome matches! Your skills are in demand! 🎉 What type of role gets you most excited?"
            ),
            ReplyTemplate::ManyMatches => format!(
                "🎊 WOW! Found {count} amazing jobs for you! Someone's got options! 😎 What specific field should we focus on?"
            ),
        }
    }
}

/// Builds the reply text shown for `query` when resolution produced `count` jobs.
pub fn compose(query: &str, count: usize) -> String {
    ReplyTemplate::select(&QueryText::new(query), count).render(count)
}
