use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use handle_errors::Error;
use tokio::sync::RwLock;

use crate::types::choice::{Choice, ChoiceId, NewChoice};
use crate::types::question::{NewQuestion, Question, QuestionId};

/// In-memory storage shared across request handlers.
#[derive(Debug, Clone)]
pub struct Store {
    questions: Arc<RwLock<HashMap<QuestionId, Question>>>,
    choices: Arc<RwLock<HashMap<ChoiceId, Choice>>>,
}

impl Store {
    pub fn new() -> Self {
        Store {
            questions: Arc::new(RwLock::new(HashMap::new())),
            choices: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn add_question(&self, new_question: NewQuestion) -> Question {
        let question = Question {
            id: QuestionId(uuid::Uuid::new_v4().to_string()),
            question_text: new_question.question_text,
            pub_date: new_question.pub_date.unwrap_or_else(Utc::now),
        };
        self.questions
            .write()
            .await
            .insert(question.id.clone(), question.clone());
        question
    }

    pub async fn add_choice(&self, new_choice: NewChoice) -> Result<Choice, Error> {
        if !self
            .questions
            .read()
            .await
            .contains_key(&new_choice.question_id)
        {
            return Err(Error::QuestionNotFound);
        }

        let choice = Choice {
            id: ChoiceId(uuid::Uuid::new_v4().to_string()),
            question_id: new_choice.question_id,
            choice_text: new_choice.choice_text,
            votes: 0,
        };
        self.choices
            .write()
            .await
            .insert(choice.id.clone(), choice.clone());
        Ok(choice)
    }

    /// Questions published at or before `now`, most recent first.
    /// Questions with a future publication date are left out entirely.
    pub async fn visible_questions(&self, now: DateTime<Utc>) -> Vec<Question> {
        let mut questions: Vec<Question> = self
            .questions
            .read()
            .await
            .values()
            .filter(|question| question.is_published(now))
            .cloned()
            .collect();
        // ties on pub_date fall back to the id so the order is deterministic
        questions.sort_by(|a, b| b.pub_date.cmp(&a.pub_date).then_with(|| a.id.0.cmp(&b.id.0)));
        questions
    }

    /// Look up a single question, applying the same visibility rule as the
    /// listing. A question that exists but is not yet published is
    /// indistinguishable from one that never existed.
    pub async fn visible_question(
        &self,
        question_id: &QuestionId,
        now: DateTime<Utc>,
    ) -> Option<Question> {
        self.questions
            .read()
            .await
            .get(question_id)
            .filter(|question| question.is_published(now))
            .cloned()
    }

    pub async fn choices_for(&self, question_id: &QuestionId) -> Vec<Choice> {
        let mut choices: Vec<Choice> = self
            .choices
            .read()
            .await
            .values()
            .filter(|choice| choice.question_id == *question_id)
            .cloned()
            .collect();
        choices.sort_by(|a, b| a.id.0.cmp(&b.id.0));
        choices
    }

    /// Count a vote for a choice of the given question. Voting for a choice
    /// that belongs to a different question is rejected the same way as
    /// voting for a choice that does not exist.
    pub async fn record_vote(
        &self,
        question_id: &QuestionId,
        choice_id: &ChoiceId,
    ) -> Result<Choice, Error> {
        match self.choices.write().await.get_mut(choice_id) {
            Some(choice) if choice.question_id == *question_id => {
                choice.vote();
                Ok(choice.clone())
            }
            _ => Err(Error::ChoiceNotFound),
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
