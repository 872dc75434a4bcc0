use serde::{Deserialize, Serialize};

use super::question::Difficulty;

/// Consecutive correct answers at one difficulty required for promotion.
pub const PROMOTION_STREAK: u32 = 3;
/// Cumulative correct answers that complete a practice session. The counter
/// only ever increments; wrong answers do not reset it.
pub const COMPLETION_TARGET: u32 = 10;

/// Topic scope for adaptive practice: a single type within a chapter, or a
/// topic-agnostic skill within a chapter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PracticeScope {
    Type { chapter_id: String, type_id: String },
    Skill { chapter_id: String, skill_id: String },
}

/// Full adaptive controller state. Serializable so callers can persist and
/// reload it between question submissions; the controller keeps nothing in
/// process memory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ControllerState {
    pub difficulty: Difficulty,
    pub within_difficulty_streak: u32,
    /// Consecutive correct answers while at hard. Tracked for reporting;
    /// no transition consumes it.
    pub hard_bonus_streak: u32,
    pub cumulative_correct: u32,
}

impl Default for ControllerState {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            within_difficulty_streak: 0,
            hard_bonus_streak: 0,
            cumulative_correct: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub state: ControllerState,
    pub completed: bool,
}

impl ControllerState {
    /// Applies one answer and returns the next state. Pure: no I/O, no
    /// persistence; the caller writes the attempt row separately.
    pub fn apply_answer(mut self, is_correct: bool) -> AnswerOutcome {
        if is_correct {
            self.within_difficulty_streak += 1;
            self.cumulative_correct += 1;

            match self.difficulty {
                Difficulty::Easy | Difficulty::Medium
                    if self.within_difficulty_streak >= PROMOTION_STREAK =>
                {
                    self.difficulty = if self.difficulty == Difficulty::Easy {
                        Difficulty::Medium
                    } else {
                        Difficulty::Hard
                    };
                    self.within_difficulty_streak = 0;
                }
                Difficulty::Hard => {
                    self.hard_bonus_streak += 1;
                }
                _ => {}
            }
        } else {
            match self.difficulty {
                Difficulty::Easy | Difficulty::Medium => {
                    self.difficulty = Difficulty::Easy;
                    self.within_difficulty_streak = 0;
                }
                Difficulty::Hard => {
                    self.difficulty = Difficulty::Medium;
                    self.within_difficulty_streak = 0;
                    self.hard_bonus_streak = 0;
                }
            }
        }

        let completed = self.cumulative_correct >= COMPLETION_TARGET;
        AnswerOutcome {
            state: self,
            completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_easy_with_zero_counters() {
        let state = ControllerState::default();
        assert_eq!(state.difficulty, Difficulty::Easy);
        assert_eq!(state.within_difficulty_streak, 0);
        assert_eq!(state.hard_bonus_streak, 0);
        assert_eq!(state.cumulative_correct, 0);
    }

    #[test]
    fn three_correct_promote_easy_to_medium() {
        let mut state = ControllerState::default();
        for _ in 0..3 {
            state = state.apply_answer(true).state;
        }
        assert_eq!(state.difficulty, Difficulty::Medium);
        assert_eq!(state.within_difficulty_streak, 0);
    }

    #[test]
    fn six_correct_reach_hard() {
        let mut state = ControllerState::default();
        for _ in 0..6 {
            state = state.apply_answer(true).state;
        }
        assert_eq!(state.difficulty, Difficulty::Hard);
        assert_eq!(state.within_difficulty_streak, 0);
    }

    #[test]
    fn hard_correct_answers_accrue_bonus_streak() {
        let mut state = ControllerState {
            difficulty: Difficulty::Hard,
            ..ControllerState::default()
        };
        state = state.apply_answer(true).state;
        state = state.apply_answer(true).state;
        assert_eq!(state.difficulty, Difficulty::Hard);
        assert_eq!(state.hard_bonus_streak, 2);
        assert_eq!(state.within_difficulty_streak, 2);
    }

    #[test]
    fn wrong_at_medium_demotes_to_easy() {
        let state = ControllerState {
            difficulty: Difficulty::Medium,
            within_difficulty_streak: 2,
            ..ControllerState::default()
        };
        let next = state.apply_answer(false).state;
        assert_eq!(next.difficulty, Difficulty::Easy);
        assert_eq!(next.within_difficulty_streak, 0);
    }

    #[test]
    fn wrong_at_hard_demotes_one_step_and_clears_bonus() {
        let state = ControllerState {
            difficulty: Difficulty::Hard,
            within_difficulty_streak: 2,
            hard_bonus_streak: 2,
            cumulative_correct: 5,
        };
        let next = state.apply_answer(false).state;
        assert_eq!(next.difficulty, Difficulty::Medium);
        assert_eq!(next.hard_bonus_streak, 0);
        assert_eq!(next.within_difficulty_streak, 0);
        assert_eq!(next.cumulative_correct, 5);
    }

    #[test]
    fn wrong_answers_never_touch_cumulative_correct() {
        let mut state = ControllerState::default();
        state = state.apply_answer(true).state;
        state = state.apply_answer(false).state;
        assert_eq!(state.cumulative_correct, 1);
    }

    #[test]
    fn completion_fires_on_tenth_cumulative_correct() {
        let mut state = ControllerState::default();
        // Interleave wrong answers; the gate counts total correct, not a
        // consecutive run.
        for _ in 0..9 {
            let outcome = state.apply_answer(true);
            assert!(!outcome.completed);
            state = outcome.state.apply_answer(false).state;
        }
        let outcome = state.apply_answer(true);
        assert!(outcome.completed);
        assert_eq!(outcome.state.cumulative_correct, 10);
    }
}
