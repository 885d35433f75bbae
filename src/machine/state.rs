use std::fmt;

use crate::models::Question;

/// Lifecycle phase of the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Loading,
    Error,
    Ready,
    Active,
    Finished,
}

impl Status {
    /// `Error` and `Finished` accept no further actions.
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Error | Status::Finished)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Loading => "loading",
            Status::Error => "error",
            Status::Ready => "ready",
            Status::Active => "active",
            Status::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// Snapshot of the whole quiz.
///
/// Values are never edited in place; every transition builds a new one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuizState {
    pub questions: Vec<Question>,
    pub status: Status,
    pub current_index: usize,
    pub selected_answer: Option<usize>,
    pub score: u32,
}

impl QuizState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn total_possible_points(&self) -> u32 {
        self.questions
            .iter()
            .fold(0u32, |total, question| total.saturating_add(question.points))
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn current_question_number(&self) -> usize {
        self.current_index + 1
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    /// Questions answered so far, counting the current one once an option is
    /// selected. Drives the progress bar.
    pub fn answered_count(&self) -> usize {
        self.current_index + usize::from(self.selected_answer.is_some())
    }

    /// Whether the selected answer for the current question is correct.
    pub fn answer_is_correct(&self) -> Option<bool> {
        let choice = self.selected_answer?;
        self.current_question().map(|question| question.is_correct(choice))
    }

    /// Score as a percentage of the total, rounded up.
    pub fn percentage(&self) -> u32 {
        let total = u64::from(self.total_possible_points());
        if total == 0 {
            return 0;
        }

        (u64::from(self.score) * 100).div_ceil(total) as u32
    }
}
