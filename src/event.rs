use crossterm::event::Event as CrosstermEvent;

use crate::error::LoadError;
use crate::models::Question;

/// Everything the event loop reacts to.
#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Outcome of the initial question load. Sent exactly once.
    Loaded(Result<Vec<Question>, LoadError>),
}
