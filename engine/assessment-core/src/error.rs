use thiserror::Error;

/// Errors surfaced to the caller. Nothing here is retried internally; the
/// embedding application owns any retry or backoff policy. Short supply at
/// paper assembly is deliberately not an error: the assembler degrades to a
/// shorter paper and reports warnings instead.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("chapter {chapter_id} has no active question types")]
    NoActiveTypes { chapter_id: String },

    #[error("no active question matches the requested scope and difficulty")]
    PoolExhausted,

    #[error("session {0} not found")]
    SessionNotFound(String),

    #[error("session {0} has no recorded attempts")]
    NoAttempts(String),

    #[error("persistence unavailable: {0}")]
    PersistenceUnavailable(#[from] anyhow::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
