//! # quiz-tui
//!
//! A terminal quiz that fetches its questions from an HTTP endpoint.
//!
//! The heart of the crate is [`QuizMachine`]: a small state machine that
//! moves a quiz through loading, ready, active and finished (or error), and
//! keeps the score. The terminal UI only renders its state and dispatches
//! [`Action`]s.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_tui::{Quiz, QuizError, QuestionSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let source = QuestionSource::Http("http://localhost:9000/questions".into());
//!     Quiz::new(source).run().await
//! }
//! ```

mod app;
pub mod config;
mod data;
mod error;
mod event;
pub mod logging;
mod machine;
mod models;
pub mod terminal;
mod ui;

use futures_util::StreamExt;
use crossterm::event::EventStream;
use tokio::sync::mpsc;
use tracing::{error, info};

pub use app::App;
pub use data::{
    fetch_questions, load_questions, load_questions_from_json, parse_questions, spawn_load,
    QuestionSource, DEFAULT_ENDPOINT,
};
pub use error::{LoadError, QuizError, UnknownAction};
pub use event::AppEvent;
pub use machine::{reduce, Action, QuizMachine, QuizState, Status};
pub use models::Question;

/// A quiz session that can be run in the terminal.
pub struct Quiz {
    source: QuestionSource,
    app: App,
}

impl Quiz {
    pub fn new(source: QuestionSource) -> Self {
        Self {
            source,
            app: App::new(),
        }
    }

    pub fn source(&self) -> &QuestionSource {
        &self.source
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Run the quiz in the terminal.
    ///
    /// Takes over the terminal, starts loading the questions, and returns when
    /// the user quits. An [`UnknownAction`] stops the loop and is returned.
    pub async fn run(mut self) -> Result<(), QuizError> {
        let (tx, rx) = mpsc::unbounded_channel();

        spawn_input_reader(tx.clone());
        spawn_load(self.source.clone(), tx);

        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app, &self.source.to_string(), rx).await;
        terminal::restore()?;

        if let Err(e) = &result {
            error!(error = %e, "quiz stopped");
        }
        result
    }
}

fn spawn_input_reader(tx: mpsc::UnboundedSender<AppEvent>) {
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if tx.send(AppEvent::Terminal(event)).is_err() {
                break;
            }
        }
    });
}

async fn run_event_loop(
    terminal: &mut terminal::AppTerminal,
    app: &mut App,
    source: &str,
    mut rx: mpsc::UnboundedReceiver<AppEvent>,
) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app, source))?;

        let Some(event) = rx.recv().await else {
            info!("event channel closed");
            break;
        };

        app.handle_event(event)?;

        if app.should_quit() {
            info!(status = %app.state().status, "quit requested");
            break;
        }
    }

    Ok(())
}
