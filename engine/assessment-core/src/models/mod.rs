use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub student_id: Option<String>,
    pub mode: SessionMode,
    pub chapter_id: String,
    pub type_id: Option<String>,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new_diagnostic(student_id: Option<String>, chapter_id: &str) -> Self {
        Self::new(student_id, SessionMode::Diagnostic, chapter_id, None)
    }

    pub fn new_practice(
        student_id: Option<String>,
        chapter_id: &str,
        type_id: Option<String>,
    ) -> Self {
        Self::new(student_id, SessionMode::Practice, chapter_id, type_id)
    }

    fn new(
        student_id: Option<String>,
        mode: SessionMode,
        chapter_id: &str,
        type_id: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            student_id,
            mode,
            chapter_id: chapter_id.to_string(),
            type_id,
            started_at: Utc::now(),
            ended_at: None,
        }
    }

    pub fn close(&mut self) {
        self.ended_at = Some(Utc::now());
    }

    pub fn is_open(&self) -> bool {
        self.ended_at.is_none()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionMode {
    Diagnostic,
    Practice,
}

impl SessionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionMode::Diagnostic => "diagnostic",
            SessionMode::Practice => "practice",
        }
    }
}

pub mod adaptive;
pub mod attempt;
pub mod question;
pub mod report;
