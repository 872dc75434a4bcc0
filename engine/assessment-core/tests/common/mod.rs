#![allow(dead_code)]

use std::sync::{Arc, Once};

use assessment_core::models::attempt::NewAttempt;
use assessment_core::models::question::{
    AnswerKey, Difficulty, Question, QuestionKind, QuestionType, TypeStatus,
};
use assessment_core::models::Session;
use assessment_core::store::memory::{InMemoryAttemptStore, InMemoryQuestionPool};
use assessment_core::store::AttemptStore;
use assessment_core::EngineState;

pub const CHAPTER: &str = "ch-algebra";

pub struct TestEnv {
    pub pool: Arc<InMemoryQuestionPool>,
    pub attempts: Arc<InMemoryAttemptStore>,
    pub state: EngineState,
}

static TRACING: Once = Once::new();

/// Captures engine logs in test output; respects RUST_LOG.
fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn test_env() -> TestEnv {
    init_tracing();
    let pool = Arc::new(InMemoryQuestionPool::new());
    let attempts = Arc::new(InMemoryAttemptStore::new());
    let state = EngineState::new(pool.clone(), attempts.clone());
    TestEnv {
        pool,
        attempts,
        state,
    }
}

pub fn question_type(id: &str, name: &str) -> QuestionType {
    QuestionType {
        id: id.to_string(),
        chapter_id: CHAPTER.to_string(),
        name: name.to_string(),
        code: Some(id.to_uppercase()),
        status: TypeStatus::Active,
    }
}

pub fn question(id: &str, type_id: &str, difficulty: Difficulty) -> Question {
    Question {
        id: id.to_string(),
        chapter_id: CHAPTER.to_string(),
        type_id: type_id.to_string(),
        skill_id: None,
        difficulty,
        kind: QuestionKind::Input,
        prompt: format!("prompt for {}", id),
        answer: AnswerKey::Text("42".to_string()),
        choices: None,
        correct_choice_index: None,
        is_active: true,
    }
}

/// Seeds three active types and `per_difficulty` active questions per
/// difficulty bucket, spread across the types.
pub async fn seed_chapter(env: &TestEnv, per_difficulty: usize) {
    let types = ["t-frac", "t-dec", "t-perc"];
    let names = ["Fractions", "Decimals", "Percentages"];
    for (id, name) in types.iter().zip(names) {
        env.pool.insert_type(question_type(id, name)).await;
    }

    for difficulty in Difficulty::ALL {
        for i in 0..per_difficulty {
            let type_id = types[i % types.len()];
            let id = format!("q-{}-{}", difficulty.as_str(), i);
            env.pool
                .insert_question(question(&id, type_id, difficulty))
                .await;
        }
    }
}

/// Opens a practice session and returns its id.
pub async fn open_practice_session(env: &TestEnv, type_id: Option<&str>) -> String {
    let session = Session::new_practice(
        Some("student-1".to_string()),
        CHAPTER,
        type_id.map(str::to_string),
    );
    let id = session.id.clone();
    env.attempts.insert_session(session).await;
    id
}

/// Records one attempt directly, the way the embedding application would
/// after judging correctness.
pub async fn record_attempt(
    env: &TestEnv,
    session_id: &str,
    type_id: Option<&str>,
    difficulty: Difficulty,
    correct: bool,
) {
    let attempt = NewAttempt {
        session_id: session_id.to_string(),
        question_id: format!("q-{}", uuid::Uuid::new_v4()),
        type_id: type_id.map(str::to_string),
        difficulty,
        kind: QuestionKind::Input,
        prompt_snapshot: "snapshot".to_string(),
        user_answer: Some("7".to_string()),
        selected_choice_index: None,
        correct,
        time_spent_ms: Some(12_000),
    };
    env.attempts.append_attempt(attempt).await.unwrap();
}
