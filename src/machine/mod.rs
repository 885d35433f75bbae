//! The quiz state machine.
//!
//! All quiz progression flows through [`QuizMachine::dispatch`]: given the
//! current [`QuizState`] and an [`Action`], it computes the next state or
//! rejects the action with [`UnknownAction`].

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::reduce;
pub use state::{QuizState, Status};

use tracing::debug;

use crate::error::UnknownAction;

/// Sole owner of the quiz state.
#[derive(Debug, Default)]
pub struct QuizMachine {
    state: QuizState,
}

impl QuizMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &QuizState {
        &self.state
    }

    /// Apply `action`, replacing the state on success. On error the state is
    /// left exactly as it was.
    pub fn dispatch(&mut self, action: Action) -> Result<&QuizState, UnknownAction> {
        let kind = action.kind();
        let next = reduce(&self.state, action)?;

        debug!(
            action = kind,
            from = %self.state.status,
            to = %next.status,
            index = next.current_index,
            score = next.score,
            "dispatched"
        );

        self.state = next;
        Ok(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Question;

    #[test]
    fn test_dispatch_replaces_state() {
        let mut machine = QuizMachine::new();
        let questions = vec![Question::new("q", vec!["a".into(), "b".into()], 1, 10)];

        let state = machine.dispatch(Action::QuestionsLoaded(questions.clone())).unwrap();
        assert_eq!(state.status, Status::Ready);
        assert_eq!(machine.state().questions, questions);
    }

    #[test]
    fn test_rejected_dispatch_keeps_state() {
        let mut machine = QuizMachine::new();
        let before = machine.state().clone();

        let err = machine.dispatch(Action::Advance).unwrap_err();
        assert_eq!(err.action, "advance");
        assert_eq!(err.status, Status::Loading);
        assert_eq!(machine.state(), &before);
    }
}
