use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{EngineError, EngineResult};
use crate::metrics::SESSIONS_SCORED_TOTAL;
use crate::models::attempt::Attempt;
use crate::models::question::Difficulty;
use crate::models::report::{DifficultyBreakdown, Recommendation, SessionReport, TypeStatistic};
use crate::services::EngineState;
use crate::store::{AttemptStore, QuestionPool};

/// How many ranked types form the weakness shortlist.
const TOP_WEAKNESS_COUNT: usize = 3;

pub struct ScoringService {
    pool: Arc<dyn QuestionPool>,
    attempts: Arc<dyn AttemptStore>,
}

impl ScoringService {
    pub fn new(state: &EngineState) -> Self {
        Self {
            pool: state.pool.clone(),
            attempts: state.attempts.clone(),
        }
    }

    /// Scores the full attempt set of one session into per-type statistics,
    /// a ranked weakness shortlist and a one-line summary. Recomputed fresh
    /// from the attempt rows on every call; question content is read only
    /// from the attempt snapshots, never from the live question bank.
    pub async fn score_session(&self, session_id: &str) -> EngineResult<SessionReport> {
        let session = self
            .attempts
            .get_session(session_id)
            .await?
            .ok_or_else(|| EngineError::SessionNotFound(session_id.to_string()))?;

        let attempts = self.attempts.list_attempts(session_id).await?;
        if attempts.is_empty() {
            return Err(EngineError::NoAttempts(session_id.to_string()));
        }

        tracing::info!(
            "Scoring session {} ({}, {} attempts)",
            session_id,
            session.mode.as_str(),
            attempts.len()
        );

        // Group by type, preserving first-seen order. Attempts without a
        // type id stay in the raw totals but are excluded from per-type
        // statistics and ranking.
        let mut groups: Vec<TypeAccumulator> = Vec::new();
        for attempt in &attempts {
            let Some(type_id) = attempt.type_id.as_deref() else {
                continue;
            };
            match groups.iter_mut().find(|g| g.type_id == type_id) {
                Some(group) => group.record(attempt),
                None => {
                    let mut group = TypeAccumulator::new(type_id);
                    group.record(attempt);
                    groups.push(group);
                }
            }
        }

        // Type ids are stable; display names come from the authoring store
        // and fall back to the id for types deactivated since the attempt.
        let type_names: HashMap<String, String> = self
            .pool
            .list_active_types(&session.chapter_id)
            .await?
            .into_iter()
            .map(|t| (t.id, t.name))
            .collect();

        let typed_total: u32 = groups.iter().map(|g| g.total).sum();
        let typed_correct: u32 = groups.iter().map(|g| g.correct).sum();

        let mut type_statistics: Vec<TypeStatistic> = groups
            .into_iter()
            .map(|group| group.into_statistic(&type_names))
            .collect();

        // Stable sort: equal priorities keep their grouping order, there is
        // no secondary key.
        type_statistics.sort_by(|a, b| b.priority.cmp(&a.priority));
        let top_weaknesses: Vec<TypeStatistic> = type_statistics
            .iter()
            .take(TOP_WEAKNESS_COUNT)
            .cloned()
            .collect();

        let overall_accuracy = if typed_total == 0 {
            0.0
        } else {
            f64::from(typed_correct) / f64::from(typed_total) * 100.0
        };
        let summary = build_summary(overall_accuracy, &top_weaknesses);

        SESSIONS_SCORED_TOTAL
            .with_label_values(&[session.mode.as_str()])
            .inc();

        Ok(SessionReport {
            session_id: session_id.to_string(),
            mode: session.mode,
            type_statistics,
            top_weaknesses,
            total_questions: attempts.len() as u32,
            correct_questions: attempts.iter().filter(|a| a.correct).count() as u32,
            overall_accuracy,
            summary,
        })
    }
}

fn build_summary(overall_accuracy: f64, top_weaknesses: &[TypeStatistic]) -> String {
    let verdict = if overall_accuracy >= 80.0 {
        "a good command of this chapter"
    } else if overall_accuracy >= 60.0 {
        "an adequate grasp of this chapter"
    } else {
        "a need for focused practice in this chapter"
    };

    // Only types that actually produced mistakes are worth naming.
    let focus: Vec<&str> = top_weaknesses
        .iter()
        .filter(|s| s.priority > 0)
        .map(|s| s.type_name.as_str())
        .collect();

    if focus.is_empty() {
        format!(
            "Overall accuracy {:.0}% shows {}.",
            overall_accuracy, verdict
        )
    } else {
        format!(
            "Overall accuracy {:.0}% shows {}. Focus next on: {}.",
            overall_accuracy,
            verdict,
            focus.join(", ")
        )
    }
}

struct TypeAccumulator {
    type_id: String,
    total: u32,
    correct: u32,
    easy: DifficultyBreakdown,
    medium: DifficultyBreakdown,
    hard: DifficultyBreakdown,
}

impl TypeAccumulator {
    fn new(type_id: &str) -> Self {
        Self {
            type_id: type_id.to_string(),
            total: 0,
            correct: 0,
            easy: DifficultyBreakdown::default(),
            medium: DifficultyBreakdown::default(),
            hard: DifficultyBreakdown::default(),
        }
    }

    fn record(&mut self, attempt: &Attempt) {
        self.total += 1;
        if attempt.correct {
            self.correct += 1;
        }
        match attempt.difficulty {
            Difficulty::Easy => self.easy.record(attempt.correct),
            Difficulty::Medium => self.medium.record(attempt.correct),
            Difficulty::Hard => self.hard.record(attempt.correct),
        }
    }

    fn into_statistic(self, type_names: &HashMap<String, String>) -> TypeStatistic {
        let wrong = self.total - self.correct;
        let accuracy = if self.total == 0 {
            0.0
        } else {
            f64::from(self.correct) / f64::from(self.total) * 100.0
        };
        let priority = TypeStatistic::priority_score(wrong, self.hard.wrong(), self.medium.wrong());
        let recommendation = Recommendation::for_counts(wrong, self.hard.wrong(), accuracy);
        let type_name = type_names
            .get(&self.type_id)
            .cloned()
            .unwrap_or_else(|| self.type_id.clone());

        TypeStatistic {
            type_id: self.type_id,
            type_name,
            total: self.total,
            correct: self.correct,
            wrong,
            accuracy,
            easy: self.easy,
            medium: self.medium,
            hard: self.hard,
            priority,
            recommendation,
        }
    }
}
