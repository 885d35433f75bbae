use crossterm::event::{Event, KeyCode, KeyEventKind};
use tracing::{info, warn};

use crate::error::UnknownAction;
use crate::event::AppEvent;
use crate::machine::{Action, QuizMachine, QuizState, Status};

/// Presentation-side application: owns the state machine and turns terminal
/// input and load outcomes into actions.
#[derive(Debug, Default)]
pub struct App {
    machine: QuizMachine,
    highlighted_option: usize,
    should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &QuizState {
        self.machine.state()
    }

    pub fn highlighted_option(&self) -> usize {
        self.highlighted_option
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn handle_event(&mut self, event: AppEvent) -> Result<(), UnknownAction> {
        match event {
            AppEvent::Terminal(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                self.handle_key(key.code)
            }
            AppEvent::Terminal(_) => Ok(()),
            AppEvent::Loaded(Ok(questions)) => self.dispatch(Action::QuestionsLoaded(questions)),
            AppEvent::Loaded(Err(e)) => {
                warn!(error = %e, "question load failed");
                self.dispatch(Action::LoadFailed)
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Result<(), UnknownAction> {
        if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
            self.quit();
            return Ok(());
        }

        match self.state().status {
            Status::Loading => Ok(()),
            Status::Error | Status::Finished => {
                if key == KeyCode::Enter {
                    self.quit();
                }
                Ok(())
            }
            Status::Ready => self.handle_ready_input(key),
            Status::Active => self.handle_active_input(key),
        }
    }

    fn handle_ready_input(&mut self, key: KeyCode) -> Result<(), UnknownAction> {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') if self.state().question_count() > 0 => {
                self.dispatch(Action::QuizStarted)
            }
            _ => Ok(()),
        }
    }

    fn handle_active_input(&mut self, key: KeyCode) -> Result<(), UnknownAction> {
        let answered = self.state().selected_answer.is_some();

        match key {
            KeyCode::Up | KeyCode::Char('k') if !answered => {
                self.select_previous_option();
                Ok(())
            }
            KeyCode::Down | KeyCode::Char('j') if !answered => {
                self.select_next_option();
                Ok(())
            }
            KeyCode::Char(c) if !answered && c.is_ascii_digit() => {
                let choice = (c as usize).wrapping_sub('1' as usize);
                if choice < self.option_count() {
                    self.highlighted_option = choice;
                    self.dispatch(Action::AnswerSubmitted(choice))
                } else {
                    Ok(())
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') if !answered => {
                self.dispatch(Action::AnswerSubmitted(self.highlighted_option))
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n') | KeyCode::Right if answered => {
                self.dispatch(Action::Advance)?;
                self.highlighted_option = 0;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn dispatch(&mut self, action: Action) -> Result<(), UnknownAction> {
        let state = self.machine.dispatch(action)?;

        match state.status {
            Status::Ready => info!(questions = state.question_count(), "quiz ready"),
            Status::Finished => info!(
                score = state.score,
                total = state.total_possible_points(),
                "quiz finished"
            ),
            _ => {}
        }

        Ok(())
    }

    fn option_count(&self) -> usize {
        self.state()
            .current_question()
            .map_or(0, |question| question.options.len())
    }

    fn select_next_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.highlighted_option = (self.highlighted_option + 1) % count;
        }
    }

    fn select_previous_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.highlighted_option = (self.highlighted_option + count - 1) % count;
        }
    }
}
