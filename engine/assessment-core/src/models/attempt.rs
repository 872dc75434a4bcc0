use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::question::{Difficulty, Question, QuestionKind};

/// One answered question. Append-only: created once at submission time,
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attempt {
    pub id: String,
    pub session_id: String,
    pub question_id: String,
    pub type_id: Option<String>,
    pub difficulty: Difficulty,
    pub kind: QuestionKind,
    /// Denormalized copy of the question prompt, immune to later edits of
    /// the source question. Scoring reads this, never the live question.
    pub prompt_snapshot: String,
    pub user_answer: Option<String>,
    pub selected_choice_index: Option<usize>,
    pub correct: bool,
    pub time_spent_ms: Option<u64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAttempt {
    pub session_id: String,
    pub question_id: String,
    pub type_id: Option<String>,
    pub difficulty: Difficulty,
    pub kind: QuestionKind,
    pub prompt_snapshot: String,
    pub user_answer: Option<String>,
    pub selected_choice_index: Option<usize>,
    pub correct: bool,
    pub time_spent_ms: Option<u64>,
}

impl NewAttempt {
    /// Builds an attempt from the question being answered, snapshotting the
    /// prompt at write time. Correctness is judged by the caller.
    pub fn from_question(session_id: &str, question: &Question, correct: bool) -> Self {
        Self {
            session_id: session_id.to_string(),
            question_id: question.id.clone(),
            type_id: Some(question.type_id.clone()),
            difficulty: question.difficulty,
            kind: question.kind,
            prompt_snapshot: question.prompt.clone(),
            user_answer: None,
            selected_choice_index: None,
            correct,
            time_spent_ms: None,
        }
    }

    pub fn with_user_answer(mut self, answer: &str) -> Self {
        self.user_answer = Some(answer.to_string());
        self
    }

    pub fn with_selected_choice(mut self, index: usize) -> Self {
        self.selected_choice_index = Some(index);
        self
    }

    pub fn with_time_spent_ms(mut self, ms: u64) -> Self {
        self.time_spent_ms = Some(ms);
        self
    }

    pub fn into_record(self) -> Attempt {
        Attempt {
            id: Uuid::new_v4().to_string(),
            session_id: self.session_id,
            question_id: self.question_id,
            type_id: self.type_id,
            difficulty: self.difficulty,
            kind: self.kind,
            prompt_snapshot: self.prompt_snapshot,
            user_answer: self.user_answer,
            selected_choice_index: self.selected_choice_index,
            correct: self.correct,
            time_spent_ms: self.time_spent_ms,
            created_at: Utc::now(),
        }
    }
}
