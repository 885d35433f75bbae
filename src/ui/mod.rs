mod finish;
mod quiz;
mod start;
mod status;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::machine::Status;

pub fn render(frame: &mut Frame, app: &App, source: &str) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let state = app.state();
    match state.status {
        Status::Loading => status::render_loading(frame, area, source),
        Status::Error => status::render_error(frame, area, source),
        Status::Ready => start::render(frame, area, state),
        Status::Active => quiz::render(frame, area, app),
        Status::Finished => finish::render(frame, area, state),
    }
}

/// Centre a box of `height` rows vertically in `area`.
fn centered(area: Rect, height: u16) -> Rect {
    Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(area)[1]
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::event::AppEvent;
    use crate::models::Question;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(frame, app, "http://quiz.test/questions")).unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn loaded_app() -> App {
        let mut app = App::new();
        let questions = vec![Question::new(
            "Which hook manages local state?",
            vec!["useEffect".into(), "useState".into()],
            1,
            10,
        )];
        app.handle_event(AppEvent::Loaded(Ok(questions))).unwrap();
        app
    }

    #[test]
    fn test_render_each_status() {
        let app = App::new();
        assert!(screen_text(&app).contains("Loading questions..."));

        let mut app = App::new();
        app.handle_event(AppEvent::Loaded(Err(crate::error::LoadError::Status(503))))
            .unwrap();
        assert!(screen_text(&app).contains("error fetching questions"));

        let mut app = loaded_app();
        assert!(screen_text(&app).contains("1 questions"));

        app.handle_key(crossterm::event::KeyCode::Enter).unwrap();
        let text = screen_text(&app);
        assert!(text.contains("Which hook manages local state?"));
        assert!(text.contains("useState"));

        app.handle_key(crossterm::event::KeyCode::Char('2')).unwrap();
        assert!(screen_text(&app).contains("enter finish"));

        app.handle_key(crossterm::event::KeyCode::Enter).unwrap();
        assert!(screen_text(&app).contains("You scored 10 out of 10 (100%)"));
    }
}
