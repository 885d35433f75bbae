use crate::error::UnknownAction;

use super::action::Action;
use super::state::{QuizState, Status};

/// Compute the state that follows `state` when `action` is applied.
///
/// Pure: `state` is only read, and the result is a fresh value.
pub fn reduce(state: &QuizState, action: Action) -> Result<QuizState, UnknownAction> {
    let rejected = UnknownAction {
        action: action.kind(),
        status: state.status,
    };

    match (state.status, action) {
        (Status::Loading, Action::QuestionsLoaded(questions)) => Ok(QuizState {
            questions,
            status: Status::Ready,
            current_index: state.current_index,
            selected_answer: state.selected_answer,
            score: state.score,
        }),

        (Status::Loading, Action::LoadFailed) => Ok(QuizState {
            status: Status::Error,
            ..state.clone()
        }),

        (Status::Ready, Action::QuizStarted) => Ok(QuizState {
            status: Status::Active,
            ..state.clone()
        }),

        (Status::Active, Action::AnswerSubmitted(choice)) if state.selected_answer.is_none() => {
            let Some(question) = state.current_question() else {
                return Err(rejected);
            };
            if choice >= question.options.len() {
                return Err(rejected);
            }

            let score = if question.is_correct(choice) {
                state.score.saturating_add(question.points)
            } else {
                state.score
            };

            Ok(QuizState {
                selected_answer: Some(choice),
                score,
                ..state.clone()
            })
        }

        (Status::Active, Action::Advance) if state.selected_answer.is_some() => {
            if state.is_last_question() {
                return Ok(QuizState {
                    status: Status::Finished,
                    ..state.clone()
                });
            }

            let next_index = state.current_index + 1;
            Ok(QuizState {
                current_index: next_index,
                selected_answer: None,
                ..state.clone()
            })
        }

        _ => Err(rejected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Question;

    fn question(points: u32, correct_option: usize) -> Question {
        Question::new(
            format!("worth {} points", points),
            vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_option,
            points,
        )
    }

    fn sample_questions() -> Vec<Question> {
        vec![question(10, 1), question(20, 0)]
    }

    fn active_state() -> QuizState {
        QuizState {
            questions: sample_questions(),
            status: Status::Active,
            ..QuizState::new()
        }
    }

    #[test]
    fn test_questions_loaded_from_loading() {
        let state = reduce(&QuizState::new(), Action::QuestionsLoaded(sample_questions())).unwrap();
        assert_eq!(state.status, Status::Ready);
        assert_eq!(state.questions, sample_questions());
    }

    #[test]
    fn test_questions_loaded_empty() {
        let state = reduce(&QuizState::new(), Action::QuestionsLoaded(Vec::new())).unwrap();
        assert_eq!(state.status, Status::Ready);
        assert!(state.questions.is_empty());
    }

    #[test]
    fn test_load_failed_changes_only_status() {
        let initial = QuizState::new();
        let state = reduce(&initial, Action::LoadFailed).unwrap();
        assert_eq!(state.status, Status::Error);
        assert_eq!(
            state,
            QuizState {
                status: Status::Error,
                ..initial
            }
        );
    }

    #[test]
    fn test_quiz_started() {
        let ready = reduce(&QuizState::new(), Action::QuestionsLoaded(sample_questions())).unwrap();
        let state = reduce(&ready, Action::QuizStarted).unwrap();
        assert_eq!(state.status, Status::Active);
        assert_eq!(state.current_index, 0);
        assert_eq!(state.selected_answer, None);
    }

    #[test]
    fn test_correct_answer_scores_points() {
        let state = reduce(&active_state(), Action::AnswerSubmitted(1)).unwrap();
        assert_eq!(state.selected_answer, Some(1));
        assert_eq!(state.score, 10);
    }

    #[test]
    fn test_wrong_answer_keeps_score() {
        let state = reduce(&active_state(), Action::AnswerSubmitted(3)).unwrap();
        assert_eq!(state.selected_answer, Some(3));
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_second_answer_rejected() {
        let answered = reduce(&active_state(), Action::AnswerSubmitted(1)).unwrap();
        let err = reduce(&answered, Action::AnswerSubmitted(1)).unwrap_err();
        assert_eq!(err.action, "answer_submitted");
        assert_eq!(err.status, Status::Active);
        assert_eq!(answered.score, 10);
    }

    #[test]
    fn test_out_of_range_answer_rejected() {
        let err = reduce(&active_state(), Action::AnswerSubmitted(4)).unwrap_err();
        assert_eq!(err.action, "answer_submitted");
    }

    #[test]
    fn test_answer_without_questions_rejected() {
        let state = QuizState {
            status: Status::Active,
            ..QuizState::new()
        };
        assert!(reduce(&state, Action::AnswerSubmitted(0)).is_err());
    }

    #[test]
    fn test_advance_moves_to_next_question() {
        let answered = reduce(&active_state(), Action::AnswerSubmitted(0)).unwrap();
        let state = reduce(&answered, Action::Advance).unwrap();
        assert_eq!(state.status, Status::Active);
        assert_eq!(state.current_index, 1);
        assert_eq!(state.selected_answer, None);
        assert_eq!(state.score, answered.score);
    }

    #[test]
    fn test_advance_on_last_question_finishes() {
        let last = QuizState {
            current_index: 1,
            selected_answer: Some(0),
            score: 20,
            ..active_state()
        };
        let state = reduce(&last, Action::Advance).unwrap();
        assert_eq!(state.status, Status::Finished);
        assert_eq!(state.current_index, 1);
        assert_eq!(state.score, 20);
    }

    #[test]
    fn test_advance_without_answer_rejected() {
        let err = reduce(&active_state(), Action::Advance).unwrap_err();
        assert_eq!(err.action, "advance");
        assert_eq!(err.status, Status::Active);
    }

    #[test]
    fn test_out_of_state_actions_rejected() {
        let loading = QuizState::new();
        let ready = reduce(&loading, Action::QuestionsLoaded(sample_questions())).unwrap();
        let error = reduce(&loading, Action::LoadFailed).unwrap();
        let finished = QuizState {
            status: Status::Finished,
            ..active_state()
        };

        let cases = [
            (&loading, Action::QuizStarted),
            (&loading, Action::Advance),
            (&loading, Action::AnswerSubmitted(0)),
            (&ready, Action::Advance),
            (&ready, Action::AnswerSubmitted(0)),
            (&ready, Action::LoadFailed),
            (&ready, Action::QuestionsLoaded(Vec::new())),
            (&error, Action::QuizStarted),
            (&error, Action::QuestionsLoaded(sample_questions())),
            (&finished, Action::Advance),
            (&finished, Action::QuizStarted),
        ];

        for (state, action) in cases {
            let kind = action.kind();
            let err = reduce(state, action).unwrap_err();
            assert_eq!(err.action, kind);
            assert_eq!(err.status, state.status);
        }
    }

    #[test]
    fn test_score_is_monotone_and_bounded() {
        let questions = vec![question(10, 0), question(0, 1), question(25, 2), question(7, 3)];
        let total: u32 = questions.iter().map(|q| q.points).sum();

        for choice in 0..4 {
            let mut state = reduce(&QuizState::new(), Action::QuestionsLoaded(questions.clone())).unwrap();
            state = reduce(&state, Action::QuizStarted).unwrap();

            while state.status == Status::Active {
                let before = state.score;
                state = reduce(&state, Action::AnswerSubmitted(choice)).unwrap();
                assert!(state.score >= before);
                assert!(state.score <= total);
                state = reduce(&state, Action::Advance).unwrap();
            }

            assert_eq!(state.status, Status::Finished);
            assert_eq!(state.score, questions[choice].points);
        }
    }
}
