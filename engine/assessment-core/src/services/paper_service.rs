use std::collections::HashMap;
use std::sync::Arc;

use rand::seq::SliceRandom;

use crate::error::{EngineError, EngineResult};
use crate::metrics::{PAPERS_ASSEMBLED_TOTAL, PAPER_SUPPLY_WARNINGS_TOTAL};
use crate::models::question::{AssembledPaper, Difficulty, PaperQuestion, Question, QuestionType};
use crate::services::EngineState;
use crate::store::QuestionPool;

/// Target count per difficulty bucket; a full paper is three buckets of
/// three questions.
pub const QUESTIONS_PER_DIFFICULTY: usize = 3;

pub struct PaperService {
    pool: Arc<dyn QuestionPool>,
}

impl PaperService {
    pub fn new(state: &EngineState) -> Self {
        Self {
            pool: state.pool.clone(),
        }
    }

    /// Assembles a diagnostic paper for one chapter: up to three questions
    /// per difficulty, drawn uniformly without replacement across all topic
    /// types of the chapter. Topic is not balanced, only difficulty.
    ///
    /// Short supply in a bucket degrades to a shorter paper with one
    /// warning per under-supplied difficulty; assembly is never aborted for
    /// that. Randomness is resampled fresh on every call.
    pub async fn assemble(&self, chapter_id: &str) -> EngineResult<AssembledPaper> {
        tracing::info!("Assembling diagnostic paper for chapter {}", chapter_id);

        let types = self.pool.list_active_types(chapter_id).await?;
        if types.is_empty() {
            tracing::warn!("Chapter {} has no active question types", chapter_id);
            return Err(EngineError::NoActiveTypes {
                chapter_id: chapter_id.to_string(),
            });
        }
        let type_index: HashMap<&str, &QuestionType> =
            types.iter().map(|t| (t.id.as_str(), t)).collect();

        let mut buckets: Vec<(Difficulty, Vec<Question>)> = Vec::with_capacity(3);
        for difficulty in Difficulty::ALL {
            let bucket = self
                .pool
                .find_active(chapter_id, None, Some(difficulty))
                .await?;
            buckets.push((difficulty, bucket));
        }

        let mut rng = rand::rng();
        let mut questions: Vec<PaperQuestion> = Vec::with_capacity(9);
        let mut warnings = Vec::new();

        for (difficulty, mut bucket) in buckets {
            if bucket.len() < QUESTIONS_PER_DIFFICULTY {
                let warning = format!(
                    "insufficient {}-difficulty questions: need {}, found {}",
                    difficulty.as_str(),
                    QUESTIONS_PER_DIFFICULTY,
                    bucket.len()
                );
                tracing::warn!("Chapter {}: {}", chapter_id, warning);
                PAPER_SUPPLY_WARNINGS_TOTAL
                    .with_label_values(&[difficulty.as_str()])
                    .inc();
                warnings.push(warning);
            }

            // Uniform draw without replacement: shuffle, take the head.
            bucket.shuffle(&mut rng);
            bucket.truncate(QUESTIONS_PER_DIFFICULTY);

            for question in bucket {
                let (type_name, type_code) = match type_index.get(question.type_id.as_str()) {
                    Some(t) => (t.name.clone(), t.code.clone()),
                    None => (question.type_id.clone(), None),
                };
                questions.push(PaperQuestion {
                    question,
                    type_name,
                    type_code,
                });
            }
        }

        // Second, chapter-wide shuffle so the paper does not visually
        // cluster by difficulty even though generation was stratified.
        questions.shuffle(&mut rng);

        let supply = if warnings.is_empty() { "complete" } else { "short" };
        PAPERS_ASSEMBLED_TOTAL.with_label_values(&[supply]).inc();

        tracing::info!(
            "Paper assembled for chapter {}: {} questions, {} warnings",
            chapter_id,
            questions.len(),
            warnings.len()
        );

        Ok(AssembledPaper {
            chapter_id: chapter_id.to_string(),
            questions,
            warnings,
        })
    }
}
