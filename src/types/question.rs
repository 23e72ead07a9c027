use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Question {
    pub id: QuestionId,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

impl Question {
    /// A question is visible once its publication instant has passed.
    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        self.pub_date <= now
    }

    /// True when the question was published within the last day.
    ///
    /// The window is half-open: a question published exactly one day before
    /// `now` is no longer recent, one published exactly at `now` is. The
    /// evaluation instant is a parameter so the predicate stays a pure
    /// function of two timestamps.
    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        let one_day_ago = now - Duration::days(1);
        one_day_ago < self.pub_date && self.pub_date <= now
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Hash)]
pub struct QuestionId(pub String);

/// Payload for creating a question; the store assigns the id.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NewQuestion {
    pub question_text: String,
    pub pub_date: Option<DateTime<Utc>>,
}
