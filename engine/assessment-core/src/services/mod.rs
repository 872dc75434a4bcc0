use std::sync::Arc;

use crate::store::{AttemptStore, QuestionPool};

/// Shared handles to the two external collaborators. Services clone what
/// they need out of this, mirroring how callers are expected to wire the
/// engine into their application state.
pub struct EngineState {
    pub pool: Arc<dyn QuestionPool>,
    pub attempts: Arc<dyn AttemptStore>,
}

impl EngineState {
    pub fn new(pool: Arc<dyn QuestionPool>, attempts: Arc<dyn AttemptStore>) -> Self {
        Self { pool, attempts }
    }
}

pub mod adaptive_service;
pub mod paper_service;
pub mod scoring_service;
