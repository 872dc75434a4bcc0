use std::sync::Arc;

use rand::seq::IndexedRandom;

use crate::error::{EngineError, EngineResult};
use crate::metrics::{
    PRACTICE_POOL_EXHAUSTED_TOTAL, PRACTICE_QUESTIONS_SERVED_TOTAL, PRACTICE_TRANSITIONS_TOTAL,
};
use crate::models::adaptive::{AnswerOutcome, ControllerState, PracticeScope};
use crate::models::question::Question;
use crate::services::EngineState;
use crate::store::QuestionPool;

pub struct AdaptiveService {
    pool: Arc<dyn QuestionPool>,
}

impl AdaptiveService {
    pub fn new(state: &EngineState) -> Self {
        Self {
            pool: state.pool.clone(),
        }
    }

    /// Picks the next practice question uniformly at random among active
    /// questions matching the scope and the state's current difficulty.
    /// An empty candidate set is a normal `PoolExhausted` result, not a
    /// fault; the caller decides whether to end the session early.
    pub async fn next_question(
        &self,
        state: &ControllerState,
        scope: &PracticeScope,
    ) -> EngineResult<Question> {
        let candidates: Vec<Question> = match scope {
            PracticeScope::Type {
                chapter_id,
                type_id,
            } => {
                self.pool
                    .find_active(chapter_id, Some(type_id), Some(state.difficulty))
                    .await?
            }
            // The pool interface has no skill filter; narrow the chapter-wide
            // set in core.
            PracticeScope::Skill {
                chapter_id,
                skill_id,
            } => self
                .pool
                .find_active(chapter_id, None, Some(state.difficulty))
                .await?
                .into_iter()
                .filter(|q| q.skill_id.as_deref() == Some(skill_id.as_str()))
                .collect(),
        };

        let mut rng = rand::rng();
        let Some(question) = candidates.choose(&mut rng).cloned() else {
            tracing::warn!(
                "No active {} question available for scope {:?}",
                state.difficulty.as_str(),
                scope
            );
            PRACTICE_POOL_EXHAUSTED_TOTAL.inc();
            return Err(EngineError::PoolExhausted);
        };

        PRACTICE_QUESTIONS_SERVED_TOTAL
            .with_label_values(&[state.difficulty.as_str()])
            .inc();

        tracing::debug!(
            "Serving question {} at {} difficulty",
            question.id,
            state.difficulty.as_str()
        );

        Ok(question)
    }

    /// Applies one answer to the controller state. Pure apart from metrics;
    /// the caller persists both the returned state and the attempt row.
    pub fn apply_answer(&self, state: ControllerState, is_correct: bool) -> AnswerOutcome {
        let before = state.difficulty;
        let outcome = state.apply_answer(is_correct);
        let after = outcome.state.difficulty;

        let direction = if outcome.completed {
            "completed"
        } else if after > before {
            "promoted"
        } else if after < before {
            "demoted"
        } else {
            "held"
        };
        PRACTICE_TRANSITIONS_TOTAL
            .with_label_values(&[direction])
            .inc();

        tracing::debug!(
            "Answer {}: {} -> {} ({}), cumulative_correct={}",
            if is_correct { "correct" } else { "incorrect" },
            before.as_str(),
            after.as_str(),
            direction,
            outcome.state.cumulative_correct
        );

        outcome
    }
}
