use serde::{Deserialize, Serialize};

use super::SessionMode;

/// Weighting of the priority formula. Raw mistake count dominates, with
/// smaller penalties for mistakes at hard and medium difficulty. Fixed by
/// product decision, not configurable.
const WRONG_WEIGHT: u32 = 10;
const HARD_WRONG_WEIGHT: u32 = 5;
const MEDIUM_WRONG_WEIGHT: u32 = 3;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DifficultyBreakdown {
    pub total: u32,
    pub correct: u32,
}

impl DifficultyBreakdown {
    pub fn record(&mut self, correct: bool) {
        self.total += 1;
        if correct {
            self.correct += 1;
        }
    }

    pub fn wrong(&self) -> u32 {
        self.total - self.correct
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    PrimaryWeakness,
    AdvancedGap,
    Proficient,
    Adequate,
}

impl Recommendation {
    /// Strict decision table, evaluated top-down, first match wins.
    pub fn for_counts(wrong: u32, hard_wrong: u32, accuracy: f64) -> Self {
        if wrong >= 2 {
            Recommendation::PrimaryWeakness
        } else if hard_wrong >= 1 {
            Recommendation::AdvancedGap
        } else if accuracy == 100.0 {
            Recommendation::Proficient
        } else {
            Recommendation::Adequate
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::PrimaryWeakness => "Primary weakness, start from easy questions",
            Recommendation::AdvancedGap => "Advanced gap, consolidate the basics first",
            Recommendation::Proficient => "Proficient, advance to the next type",
            Recommendation::Adequate => "Adequate, keep practicing",
        }
    }
}

/// Per-type statistics derived fresh from the attempt set on every report
/// request; never persisted or cached by this core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeStatistic {
    pub type_id: String,
    pub type_name: String,
    pub total: u32,
    pub correct: u32,
    pub wrong: u32,
    /// 0-100; 0 when no attempts were recorded for the type.
    pub accuracy: f64,
    pub easy: DifficultyBreakdown,
    pub medium: DifficultyBreakdown,
    pub hard: DifficultyBreakdown,
    pub priority: u32,
    pub recommendation: Recommendation,
}

impl TypeStatistic {
    pub fn priority_score(wrong: u32, hard_wrong: u32, medium_wrong: u32) -> u32 {
        wrong * WRONG_WEIGHT + hard_wrong * HARD_WRONG_WEIGHT + medium_wrong * MEDIUM_WRONG_WEIGHT
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub session_id: String,
    pub mode: SessionMode,
    /// Sorted by priority descending; ties keep the order in which the
    /// types first appeared in the attempt list.
    pub type_statistics: Vec<TypeStatistic>,
    pub top_weaknesses: Vec<TypeStatistic>,
    /// Raw attempt counts, including attempts without a type id.
    pub total_questions: u32,
    pub correct_questions: u32,
    /// Accuracy across typed attempts, 0-100.
    pub overall_accuracy: f64,
    pub summary: String,
}
