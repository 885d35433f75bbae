//! Loading and error screens.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::centered;

pub fn render_loading(frame: &mut Frame, area: Rect, source: &str) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled("QUIZ", Style::default().fg(Color::Cyan).bold())),
        Line::from(""),
        Line::from(Span::styled(
            "Loading questions...",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(source.fg(Color::DarkGray)),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, centered(area, 7));
}

pub fn render_error(frame: &mut Frame, area: Rect, source: &str) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "There was an error fetching questions.",
            Style::default().fg(Color::Red).bold(),
        )),
        Line::from(source.fg(Color::DarkGray)),
        Line::from(""),
        Line::from(Span::styled(
            "Press [Q] to exit",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, centered(area, 8));
}
