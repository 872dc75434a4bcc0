use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Ascending order, which is also the sampling order for paper assembly.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("Invalid difficulty: {}", value)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Input,
    Mcq,
    Word,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::Input => "input",
            QuestionKind::Mcq => "mcq",
            QuestionKind::Word => "word",
        }
    }
}

/// Canonical answer as authored; MCQ questions additionally carry
/// `choices` + `correct_choice_index` on the question itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AnswerKey {
    Text(String),
    Structured(serde_json::Value),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TypeStatus {
    Active,
    Deprecated,
}

impl TypeStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, TypeStatus::Active)
    }
}

/// Topic classification within a chapter. Owned by the external authoring
/// subsystem; this core only reads active rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionType {
    pub id: String,
    pub chapter_id: String,
    pub name: String,
    pub code: Option<String>,
    pub status: TypeStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub chapter_id: String,
    pub type_id: String,
    pub skill_id: Option<String>,
    pub difficulty: Difficulty,
    pub kind: QuestionKind,
    pub prompt: String,
    pub answer: AnswerKey,
    pub choices: Option<Vec<String>>,
    pub correct_choice_index: Option<usize>,
    pub is_active: bool,
}

/// A question placed on a diagnostic paper, annotated with its owning
/// type's name and code because the paper mixes topics.
#[derive(Debug, Clone, Serialize)]
pub struct PaperQuestion {
    pub question: Question,
    pub type_name: String,
    pub type_code: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssembledPaper {
    pub chapter_id: String,
    pub questions: Vec<PaperQuestion>,
    pub warnings: Vec<String>,
}

impl AssembledPaper {
    pub fn is_complete(&self) -> bool {
        self.warnings.is_empty()
    }
}
