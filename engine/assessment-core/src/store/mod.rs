use anyhow::Result;
use async_trait::async_trait;

use crate::models::attempt::{Attempt, NewAttempt};
use crate::models::question::{Difficulty, Question, QuestionType};
use crate::models::Session;

pub mod memory;

/// Read-only view of the external question store. Implementations must
/// return only active rows; result ordering is not relied upon, the engine
/// reshuffles.
#[async_trait]
pub trait QuestionPool: Send + Sync {
    async fn find_active(
        &self,
        chapter_id: &str,
        type_id: Option<&str>,
        difficulty: Option<Difficulty>,
    ) -> Result<Vec<Question>>;

    async fn list_active_types(&self, chapter_id: &str) -> Result<Vec<QuestionType>>;
}

/// Append-only attempt persistence plus session lookup. Session creation
/// and closing are owned by the embedding application.
#[async_trait]
pub trait AttemptStore: Send + Sync {
    /// Persists one attempt and returns its assigned id.
    async fn append_attempt(&self, attempt: NewAttempt) -> Result<String>;

    /// All attempts for a session, in append order.
    async fn list_attempts(&self, session_id: &str) -> Result<Vec<Attempt>>;

    async fn get_session(&self, session_id: &str) -> Result<Option<Session>>;
}
