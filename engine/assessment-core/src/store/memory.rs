use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::attempt::{Attempt, NewAttempt};
use crate::models::question::{Difficulty, Question, QuestionType};
use crate::models::Session;

use super::{AttemptStore, QuestionPool};

/// In-memory question pool. Reference implementation of the collaborator
/// interface, used by the integration tests and embeddable by callers that
/// load their bank up front.
#[derive(Default)]
pub struct InMemoryQuestionPool {
    types: RwLock<Vec<QuestionType>>,
    questions: RwLock<Vec<Question>>,
}

impl InMemoryQuestionPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_type(&self, question_type: QuestionType) {
        self.types.write().await.push(question_type);
    }

    pub async fn insert_question(&self, question: Question) {
        self.questions.write().await.push(question);
    }
}

#[async_trait]
impl QuestionPool for InMemoryQuestionPool {
    async fn find_active(
        &self,
        chapter_id: &str,
        type_id: Option<&str>,
        difficulty: Option<Difficulty>,
    ) -> Result<Vec<Question>> {
        let questions = self.questions.read().await;
        Ok(questions
            .iter()
            .filter(|q| q.is_active && q.chapter_id == chapter_id)
            .filter(|q| type_id.is_none_or(|t| q.type_id == t))
            .filter(|q| difficulty.is_none_or(|d| q.difficulty == d))
            .cloned()
            .collect())
    }

    async fn list_active_types(&self, chapter_id: &str) -> Result<Vec<QuestionType>> {
        let types = self.types.read().await;
        Ok(types
            .iter()
            .filter(|t| t.chapter_id == chapter_id && t.status.is_active())
            .cloned()
            .collect())
    }
}

/// In-memory session and attempt store. Attempts are append-only and listed
/// in insertion order.
#[derive(Default)]
pub struct InMemoryAttemptStore {
    sessions: RwLock<HashMap<String, Session>>,
    attempts: RwLock<Vec<Attempt>>,
}

impl InMemoryAttemptStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_session(&self, session: Session) {
        self.sessions
            .write()
            .await
            .insert(session.id.clone(), session);
    }

    pub async fn close_session(&self, session_id: &str) {
        if let Some(session) = self.sessions.write().await.get_mut(session_id) {
            session.close();
        }
    }
}

#[async_trait]
impl AttemptStore for InMemoryAttemptStore {
    async fn append_attempt(&self, attempt: NewAttempt) -> Result<String> {
        let record = attempt.into_record();
        let id = record.id.clone();
        self.attempts.write().await.push(record);
        Ok(id)
    }

    async fn list_attempts(&self, session_id: &str) -> Result<Vec<Attempt>> {
        let attempts = self.attempts.read().await;
        Ok(attempts
            .iter()
            .filter(|a| a.session_id == session_id)
            .cloned()
            .collect())
    }

    async fn get_session(&self, session_id: &str) -> Result<Option<Session>> {
        Ok(self.sessions.read().await.get(session_id).cloned())
    }
}
