use crate::types::question::QuestionId;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChoiceId(pub String);

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Choice {
    pub id: ChoiceId,
    pub question_id: QuestionId,
    pub choice_text: String,
    pub votes: u32,
}

impl Choice {
    pub fn vote(&mut self) {
        self.votes += 1;
    }
}

/// Payload for adding a choice to a question; the store assigns the id.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct NewChoice {
    pub question_id: QuestionId,
    pub choice_text: String,
}
