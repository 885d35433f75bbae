use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::machine::QuizState;

use super::centered;

pub fn render(frame: &mut Frame, area: Rect, state: &QuizState) {
    let count = state.question_count();

    let prompt = if count > 0 {
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        ))
    } else {
        Line::from(Span::styled(
            "Nothing to play",
            Style::default().fg(Color::Red).bold(),
        ))
    };
    let hint = if count > 0 { "to start  ·  q quit" } else { "q quit" };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "WELCOME TO THE QUIZ!",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(
            format!(
                "{} questions · {} points to win",
                count,
                state.total_possible_points()
            )
            .fg(Color::DarkGray),
        ),
        Line::from(""),
        Line::from(""),
        prompt,
        Line::from(hint.fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, centered(area, 10));
}
