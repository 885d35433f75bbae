use crate::models::Question;

/// A request to move the quiz to its next state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The question source delivered its questions.
    QuestionsLoaded(Vec<Question>),
    /// The question source could not be reached or parsed.
    LoadFailed,
    /// The user started the quiz from the welcome screen.
    QuizStarted,
    /// The user picked an option for the current question.
    AnswerSubmitted(usize),
    /// The user moved past the answered question.
    Advance,
}

impl Action {
    pub fn kind(&self) -> &'static str {
        match self {
            Action::QuestionsLoaded(_) => "questions_loaded",
            Action::LoadFailed => "load_failed",
            Action::QuizStarted => "quiz_started",
            Action::AnswerSubmitted(_) => "answer_submitted",
            Action::Advance => "advance",
        }
    }
}
